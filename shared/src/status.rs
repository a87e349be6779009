use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

/// Lifecycle of a booking row.
///
/// Legal transitions:
/// - `PendingPayment` -> `Confirmed` | `Failed` | `Cancelled` | `NoShow`
/// - `Confirmed` -> `CheckedIn`
/// - `CheckedIn` -> `CheckedOut`
///
/// Everything else is rejected with `InvalidState`. `CheckedOut`,
/// `Cancelled`, `Failed` and `NoShow` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    PendingPayment,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
    Failed,
    NoShow,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendingPayment => "pending_payment",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked-in",
            Self::CheckedOut => "checked-out",
            Self::Cancelled => "cancelled",
            Self::Failed => "failed",
            Self::NoShow => "no-show",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "pending_payment" => Ok(Self::PendingPayment),
            "confirmed" => Ok(Self::Confirmed),
            "checked-in" => Ok(Self::CheckedIn),
            "checked-out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            "failed" => Ok(Self::Failed),
            "no-show" => Ok(Self::NoShow),
            other => Err(BookingError::invariant(format!(
                "unknown booking status: {other}"
            ))),
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::CheckedOut | Self::Cancelled | Self::Failed | Self::NoShow
        )
    }

    pub fn can_transition(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::PendingPayment, Self::Confirmed)
                | (Self::PendingPayment, Self::Failed)
                | (Self::PendingPayment, Self::Cancelled)
                | (Self::PendingPayment, Self::NoShow)
                | (Self::Confirmed, Self::CheckedIn)
                | (Self::CheckedIn, Self::CheckedOut)
        )
    }

    /// Check the transition table and return the target state, or an
    /// `InvalidState` error naming the offending current state.
    pub fn transition(self, to: Self, action: &'static str) -> Result<Self> {
        if self.can_transition(to) {
            Ok(to)
        } else {
            Err(BookingError::InvalidState { from: self, action })
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw gateway status vocabulary tracked on the transaction record,
/// distinct from the booking lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Pending,
    Capture,
    Settlement,
    Cancel,
    Deny,
    Expire,
    Unknown,
}

impl PaymentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Pending => "pending",
            Self::Capture => "capture",
            Self::Settlement => "settlement",
            Self::Cancel => "cancel",
            Self::Deny => "deny",
            Self::Expire => "expire",
            Self::Unknown => "unknown",
        }
    }

    /// Map the gateway's transaction/fraud status pair into our vocabulary.
    /// A `capture` that is not fraud-accepted is treated as unknown rather
    /// than confirmed.
    pub fn from_gateway(transaction_status: &str, fraud_status: Option<&str>) -> Self {
        match transaction_status {
            "capture" if fraud_status == Some("accept") => Self::Capture,
            "settlement" => Self::Settlement,
            "cancel" => Self::Cancel,
            "deny" => Self::Deny,
            "expire" => Self::Expire,
            "pending" => Self::Pending,
            _ => Self::Unknown,
        }
    }

    /// The booking state this payment status resolves to, if it resolves
    /// one at all. `None` means the booking stays where it is.
    pub fn booking_outcome(self) -> Option<BookingStatus> {
        match self {
            Self::Settlement | Self::Capture => Some(BookingStatus::Confirmed),
            Self::Cancel => Some(BookingStatus::Cancelled),
            Self::Deny | Self::Expire => Some(BookingStatus::Failed),
            Self::Unpaid | Self::Pending | Self::Unknown => None,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_payment_resolves_four_ways() {
        let from = BookingStatus::PendingPayment;
        for to in [
            BookingStatus::Confirmed,
            BookingStatus::Failed,
            BookingStatus::Cancelled,
            BookingStatus::NoShow,
        ] {
            assert_eq!(from.transition(to, "test").unwrap(), to);
        }
        assert!(from.transition(BookingStatus::CheckedIn, "check-in").is_err());
    }

    #[test]
    fn stay_progression() {
        assert_eq!(
            BookingStatus::Confirmed
                .transition(BookingStatus::CheckedIn, "check-in")
                .unwrap(),
            BookingStatus::CheckedIn
        );
        assert_eq!(
            BookingStatus::CheckedIn
                .transition(BookingStatus::CheckedOut, "check-out")
                .unwrap(),
            BookingStatus::CheckedOut
        );
        // no skipping straight to checked-out
        assert!(BookingStatus::Confirmed
            .transition(BookingStatus::CheckedOut, "check-out")
            .is_err());
    }

    #[test]
    fn terminal_states_admit_nothing() {
        for from in [
            BookingStatus::CheckedOut,
            BookingStatus::Cancelled,
            BookingStatus::Failed,
            BookingStatus::NoShow,
        ] {
            assert!(from.is_terminal());
            for to in [
                BookingStatus::PendingPayment,
                BookingStatus::Confirmed,
                BookingStatus::CheckedIn,
                BookingStatus::CheckedOut,
                BookingStatus::Cancelled,
                BookingStatus::Failed,
                BookingStatus::NoShow,
            ] {
                assert!(!from.can_transition(to));
            }
        }
    }

    #[test]
    fn invalid_transition_names_current_state() {
        let err = BookingStatus::Cancelled
            .transition(BookingStatus::CheckedIn, "check-in")
            .unwrap_err();
        assert!(err.to_string().contains("cancelled"));
    }

    #[test]
    fn status_text_round_trips() {
        for status in [
            BookingStatus::PendingPayment,
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
            BookingStatus::CheckedOut,
            BookingStatus::Cancelled,
            BookingStatus::Failed,
            BookingStatus::NoShow,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(BookingStatus::parse("No-Show").is_err());
    }

    #[test]
    fn gateway_vocabulary_mapping() {
        assert_eq!(
            PaymentStatus::from_gateway("capture", Some("accept")),
            PaymentStatus::Capture
        );
        assert_eq!(
            PaymentStatus::from_gateway("capture", Some("challenge")),
            PaymentStatus::Unknown
        );
        assert_eq!(
            PaymentStatus::from_gateway("settlement", None),
            PaymentStatus::Settlement
        );
        assert_eq!(PaymentStatus::from_gateway("expire", None), PaymentStatus::Expire);
        assert_eq!(
            PaymentStatus::from_gateway("refund", None),
            PaymentStatus::Unknown
        );
    }

    #[test]
    fn payment_outcomes() {
        assert_eq!(
            PaymentStatus::Settlement.booking_outcome(),
            Some(BookingStatus::Confirmed)
        );
        assert_eq!(
            PaymentStatus::Capture.booking_outcome(),
            Some(BookingStatus::Confirmed)
        );
        assert_eq!(
            PaymentStatus::Cancel.booking_outcome(),
            Some(BookingStatus::Cancelled)
        );
        assert_eq!(
            PaymentStatus::Deny.booking_outcome(),
            Some(BookingStatus::Failed)
        );
        assert_eq!(PaymentStatus::Pending.booking_outcome(), None);
        assert_eq!(PaymentStatus::Unknown.booking_outcome(), None);
    }
}
