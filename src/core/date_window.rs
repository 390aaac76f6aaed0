use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{DaySpan, shift_date};
use crate::error::WeekViewResult;

/// Number of windows buffered around the pivot. Scroll offsets map to logical
/// pages by dividing the content width by this count.
pub const WINDOW_BUFFER_SIZE: usize = 5;
/// Slot of the pivot window; the scroll surface rests here between swipes.
pub const CENTER_PAGE_INDEX: usize = 2;

/// One buffered date range among the windows maintained around the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateWindow {
    pub slot: usize,
    /// Signed distance from the pivot window, in windows.
    pub offset: i64,
    pub start_date: NaiveDate,
    pub day_span: DaySpan,
}

impl DateWindow {
    #[must_use]
    pub fn is_center(self) -> bool {
        self.offset == 0
    }

    /// Last day covered by this window (inclusive).
    pub fn end_date(self) -> WeekViewResult<NaiveDate> {
        shift_date(self.start_date, self.day_span.days_i64() - 1)
    }

    #[must_use]
    pub fn contains(self, date: NaiveDate) -> bool {
        let days = date.signed_duration_since(self.start_date).num_days();
        (0..self.day_span.days_i64()).contains(&days)
    }
}

#[must_use]
pub const fn slot_offset(slot: usize) -> i64 {
    slot as i64 - CENTER_PAGE_INDEX as i64
}

/// Builds the full window buffer centered on `pivot`.
///
/// Slot `i` starts at `pivot + (i - 2) * span` days.
pub fn prepare_date_windows(
    pivot: NaiveDate,
    day_span: DaySpan,
) -> WeekViewResult<[DateWindow; WINDOW_BUFFER_SIZE]> {
    let mut windows = [DateWindow {
        slot: 0,
        offset: 0,
        start_date: pivot,
        day_span,
    }; WINDOW_BUFFER_SIZE];

    for (slot, window) in windows.iter_mut().enumerate() {
        let offset = slot_offset(slot);
        window.slot = slot;
        window.offset = offset;
        window.start_date = shift_date(pivot, offset * day_span.days_i64())?;
    }

    Ok(windows)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{CENTER_PAGE_INDEX, WINDOW_BUFFER_SIZE, prepare_date_windows, slot_offset};
    use crate::core::DaySpan;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn week_windows_straddle_year_boundary() {
        let windows = prepare_date_windows(date(2024, 1, 3), DaySpan::Seven).expect("windows");
        let starts: Vec<NaiveDate> = windows.iter().map(|window| window.start_date).collect();
        assert_eq!(
            starts,
            vec![
                date(2023, 12, 20),
                date(2023, 12, 27),
                date(2024, 1, 3),
                date(2024, 1, 10),
                date(2024, 1, 17),
            ]
        );
    }

    #[test]
    fn center_slot_holds_pivot() {
        let pivot = date(2024, 2, 29);
        for span in DaySpan::ALL {
            let windows = prepare_date_windows(pivot, span).expect("windows");
            assert_eq!(windows.len(), WINDOW_BUFFER_SIZE);
            assert_eq!(windows[CENTER_PAGE_INDEX].start_date, pivot);
            assert!(windows[CENTER_PAGE_INDEX].is_center());
            assert_eq!(
                windows.iter().filter(|window| window.is_center()).count(),
                1
            );
        }
    }

    #[test]
    fn slots_and_offsets_are_ordered() {
        let windows = prepare_date_windows(date(2024, 6, 1), DaySpan::Three).expect("windows");
        for (slot, window) in windows.iter().enumerate() {
            assert_eq!(window.slot, slot);
            assert_eq!(window.offset, slot_offset(slot));
            assert_eq!(window.day_span, DaySpan::Three);
        }
        assert_eq!(slot_offset(0), -2);
        assert_eq!(slot_offset(4), 2);
    }

    #[test]
    fn window_range_helpers() {
        let windows = prepare_date_windows(date(2024, 1, 30), DaySpan::Three).expect("windows");
        let center = windows[CENTER_PAGE_INDEX];
        assert_eq!(center.end_date().expect("end"), date(2024, 2, 1));
        assert!(center.contains(date(2024, 1, 30)));
        assert!(center.contains(date(2024, 2, 1)));
        assert!(!center.contains(date(2024, 2, 2)));
        assert!(!center.contains(date(2024, 1, 29)));
    }

    #[test]
    fn windows_near_calendar_limit_fail_instead_of_wrapping() {
        assert!(prepare_date_windows(NaiveDate::MAX, DaySpan::One).is_err());
        assert!(prepare_date_windows(NaiveDate::MIN, DaySpan::Seven).is_err());
    }
}
