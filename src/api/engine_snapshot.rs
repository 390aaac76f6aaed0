use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{DateWindow, DaySpan, WINDOW_BUFFER_SIZE};
use crate::interaction::{RecenterRequest, ScrollTelemetry};
use crate::render::WeekViewRenderer;

use super::WeekViewEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub pivot: NaiveDate,
    pub day_span: DaySpan,
    pub locale: String,
    pub date_format: String,
    pub windows: [DateWindow; WINDOW_BUFFER_SIZE],
    pub time_labels: Vec<String>,
    pub event_ids: Vec<String>,
    pub listener_ids: Vec<String>,
    pub pending_recenter: Option<RecenterRequest>,
    pub pending_settle: Option<ScrollTelemetry>,
}

impl<R: WeekViewRenderer> WeekViewEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let core = &self.core;
        EngineSnapshot {
            pivot: core.navigation.paging.pivot(),
            day_span: core.navigation.day_span,
            locale: core.presentation.locale.to_string(),
            date_format: core.presentation.date_format.clone(),
            windows: core.navigation.windows,
            time_labels: core.navigation.time_axis.texts().to_vec(),
            event_ids: core
                .presentation
                .events
                .iter()
                .map(|event| event.id.clone())
                .collect(),
            listener_ids: self.listener_ids(),
            pending_recenter: core.runtime.pending_recenter,
            pending_settle: core.runtime.pending_settle,
        }
    }
}
