use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{CalendarEvent, DateWindow, DaySpan, TIME_LABELS_COUNT, TimeLabel, WINDOW_BUFFER_SIZE};
use crate::error::{WeekViewError, WeekViewResult};
use crate::render::StyleProps;

/// Input of the Header renderer for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderFrame<'a> {
    pub selected_date: NaiveDate,
    pub day_span: DaySpan,
    /// Date-format specifier (`MMM D` style tokens) interpreted by the renderer.
    pub date_format: &'a str,
    pub locale: &'a str,
    pub style: &'a StyleProps,
}

impl HeaderFrame<'_> {
    pub fn validate(&self) -> WeekViewResult<()> {
        if self.date_format.trim().is_empty() {
            return Err(WeekViewError::InvalidData(
                "header date format must not be empty".to_owned(),
            ));
        }
        if self.locale.is_empty() {
            return Err(WeekViewError::InvalidData(
                "header locale must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Input of the Events renderer for one buffered window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnFrame<'a> {
    pub window: DateWindow,
    pub day_span: DaySpan,
    pub time_labels: &'a [TimeLabel],
    pub events: &'a [CalendarEvent],
    pub event_style: Option<&'a StyleProps>,
}

impl ColumnFrame<'_> {
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.window.start_date
    }

    pub fn validate(&self) -> WeekViewResult<()> {
        if self.time_labels.len() != TIME_LABELS_COUNT {
            return Err(WeekViewError::InvalidData(format!(
                "column expects {TIME_LABELS_COUNT} time labels, got {}",
                self.time_labels.len()
            )));
        }
        if self.window.day_span != self.day_span {
            return Err(WeekViewError::InvalidData(format!(
                "column window span {} does not match view span {}",
                self.window.day_span, self.day_span
            )));
        }
        if self.window.slot >= WINDOW_BUFFER_SIZE {
            return Err(WeekViewError::InvalidData(format!(
                "column slot {} outside window buffer",
                self.window.slot
            )));
        }
        Ok(())
    }
}

/// Owned render model: the buffered windows plus the shared time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderModel {
    pub selected_date: NaiveDate,
    pub day_span: DaySpan,
    pub date_format: String,
    pub locale: String,
    pub windows: [DateWindow; WINDOW_BUFFER_SIZE],
    pub time_labels: Vec<String>,
}

impl RenderModel {
    #[must_use]
    pub fn window_start_dates(&self) -> [NaiveDate; WINDOW_BUFFER_SIZE] {
        self.windows.map(|window| window.start_date)
    }
}
