use chrono::{Days, NaiveDate};

use crate::error::{WeekViewError, WeekViewResult};

/// Shifts `date` by a signed number of calendar days.
///
/// Month lengths and leap years are handled by chrono; dates outside chrono's
/// representable range surface as `DateOutOfRange`.
pub fn shift_date(date: NaiveDate, days: i64) -> WeekViewResult<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.ok_or(WeekViewError::DateOutOfRange { pivot: date, days })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::shift_date;
    use crate::error::WeekViewError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn crosses_month_and_year_boundaries() {
        assert_eq!(shift_date(date(2024, 1, 30), 2).expect("shift"), date(2024, 2, 1));
        assert_eq!(shift_date(date(2024, 2, 28), 1).expect("shift"), date(2024, 2, 29));
        assert_eq!(shift_date(date(2023, 2, 28), 1).expect("shift"), date(2023, 3, 1));
        assert_eq!(shift_date(date(2024, 1, 3), -7).expect("shift"), date(2023, 12, 27));
    }

    #[test]
    fn zero_shift_is_identity() {
        let pivot = date(2024, 3, 15);
        assert_eq!(shift_date(pivot, 0).expect("shift"), pivot);
    }

    #[test]
    fn overflow_is_reported_instead_of_panicking() {
        let err = shift_date(NaiveDate::MAX, 1).expect_err("overflow");
        assert!(matches!(err, WeekViewError::DateOutOfRange { days: 1, .. }));

        let err = shift_date(NaiveDate::MIN, i64::MIN).expect_err("underflow");
        assert!(matches!(err, WeekViewError::DateOutOfRange { .. }));
    }
}
