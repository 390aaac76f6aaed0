use chrono::NaiveDate;

use crate::error::WeekViewResult;
use crate::render::{ColumnFrame, HeaderFrame, WeekViewRenderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frames and records what a pass delivered so tests can
/// assert on header/column traffic without a real backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub header_count: usize,
    pub column_count: usize,
    pub last_header_date: Option<NaiveDate>,
    pub last_header_format: Option<String>,
    pub last_column_starts: Vec<NaiveDate>,
    pub last_event_count: usize,
}

impl WeekViewRenderer for NullRenderer {
    fn render_header(&mut self, header: &HeaderFrame<'_>) -> WeekViewResult<()> {
        header.validate()?;
        self.header_count += 1;
        self.last_header_date = Some(header.selected_date);
        self.last_header_format = Some(header.date_format.to_owned());
        self.last_column_starts.clear();
        Ok(())
    }

    fn render_column(&mut self, column: &ColumnFrame<'_>) -> WeekViewResult<()> {
        column.validate()?;
        self.column_count += 1;
        self.last_column_starts.push(column.start_date());
        self.last_event_count = column.events.len();
        Ok(())
    }
}
