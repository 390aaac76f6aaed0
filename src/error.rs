use chrono::NaiveDate;
use thiserror::Error;

pub type WeekViewResult<T> = Result<T, WeekViewError>;

#[derive(Debug, Error)]
pub enum WeekViewError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("invalid number of days: {value} (expected 1, 3 or 7)")]
    InvalidDaySpan { value: u32 },

    #[error("date out of range: {pivot} shifted by {days} days")]
    DateOutOfRange { pivot: NaiveDate, days: i64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
