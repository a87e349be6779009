use chrono::NaiveDate;

use crate::error::{BookingError, Result};

/// Number of nights in `[check_in, check_out)`. At least one night is
/// required, which is the same thing as `check_out > check_in`.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> Result<i64> {
    let nights = (check_out - check_in).num_days();
    if nights < 1 {
        return Err(BookingError::invariant(
            "check-out date must be after check-in date",
        ));
    }
    Ok(nights)
}

/// Every occupied calendar date of a stay. The check-out date itself is
/// not occupied.
pub fn stay_dates(check_in: NaiveDate, check_out: NaiveDate) -> Vec<NaiveDate> {
    check_in
        .iter_days()
        .take_while(|date| *date < check_out)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn two_night_stay() {
        assert_eq!(nights_between(date("2024-06-01"), date("2024-06-03")).unwrap(), 2);
        assert_eq!(
            stay_dates(date("2024-06-01"), date("2024-06-03")),
            vec![date("2024-06-01"), date("2024-06-02")]
        );
    }

    #[test]
    fn one_night_minimum() {
        assert_eq!(nights_between(date("2024-06-01"), date("2024-06-02")).unwrap(), 1);
        assert!(nights_between(date("2024-06-01"), date("2024-06-01")).is_err());
        assert!(nights_between(date("2024-06-03"), date("2024-06-01")).is_err());
    }

    #[test]
    fn stay_crosses_month_boundary() {
        let dates = stay_dates(date("2024-06-29"), date("2024-07-02"));
        assert_eq!(
            dates,
            vec![date("2024-06-29"), date("2024-06-30"), date("2024-07-01")]
        );
    }
}
