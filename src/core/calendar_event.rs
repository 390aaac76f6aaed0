use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Event record passed through to the Events renderer.
///
/// The engine neither validates nor lays these out; it only hands them to
/// renderers and resolves press callbacks by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    #[serde(default)]
    pub color: Option<String>,
}

impl CalendarEvent {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDateTime,
        end_date: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            start_date,
            end_date,
            color: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}
