use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::error::{BookingError, Result};

/// Computed price for a prospective stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub price_per_night: BigDecimal,
    pub nights: i64,
    pub room_count: i32,
    pub total_price: BigDecimal,
}

/// `nights x rate x room_count`. Pure; computed once at booking creation
/// and never silently recomputed afterwards.
pub fn quote(price_per_night: &BigDecimal, nights: i64, room_count: i32) -> Result<Quote> {
    if nights < 1 {
        return Err(BookingError::invariant("a stay must cover at least one night"));
    }
    if room_count < 1 {
        return Err(BookingError::invariant("at least one room must be booked"));
    }
    let total_price = price_per_night * BigDecimal::from(nights) * BigDecimal::from(room_count);
    Ok(Quote {
        price_per_night: price_per_night.clone(),
        nights,
        room_count,
        total_price,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_nights_one_room() {
        let q = quote(&BigDecimal::from(100), 2, 1).unwrap();
        assert_eq!(q.total_price, BigDecimal::from(200));
        assert_eq!(q.nights, 2);
    }

    #[test]
    fn multiple_rooms_multiply() {
        let q = quote(&BigDecimal::from(250), 3, 2).unwrap();
        assert_eq!(q.total_price, BigDecimal::from(1500));
    }

    #[test]
    fn fractional_rate_keeps_precision() {
        let rate: BigDecimal = "99.95".parse().unwrap();
        let q = quote(&rate, 2, 1).unwrap();
        assert_eq!(q.total_price, "199.90".parse::<BigDecimal>().unwrap());
    }

    #[test]
    fn rejects_degenerate_input() {
        assert!(quote(&BigDecimal::from(100), 0, 1).is_err());
        assert!(quote(&BigDecimal::from(100), 1, 0).is_err());
    }
}
