use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{WeekViewError, WeekViewResult};

/// Number of calendar days represented by one buffered window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum DaySpan {
    One,
    Three,
    Seven,
}

impl DaySpan {
    pub const ALL: [DaySpan; 3] = [DaySpan::One, DaySpan::Three, DaySpan::Seven];

    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::One => 1,
            Self::Three => 3,
            Self::Seven => 7,
        }
    }

    #[must_use]
    pub const fn days_i64(self) -> i64 {
        self.days() as i64
    }

    pub fn from_days(value: u32) -> WeekViewResult<Self> {
        match value {
            1 => Ok(Self::One),
            3 => Ok(Self::Three),
            7 => Ok(Self::Seven),
            _ => Err(WeekViewError::InvalidDaySpan { value }),
        }
    }
}

impl TryFrom<u32> for DaySpan {
    type Error = WeekViewError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_days(value)
    }
}

impl From<DaySpan> for u32 {
    fn from(span: DaySpan) -> Self {
        span.days()
    }
}

impl fmt::Display for DaySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.days())
    }
}
