use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{DateWindow, DaySpan, WINDOW_BUFFER_SIZE, prepare_date_windows, shift_date};
use crate::error::{WeekViewError, WeekViewResult};
use crate::interaction::{RecenterRequest, ScrollTelemetry, SwipeDirection};

/// Navigation state carried between settle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PagingState {
    pub pivot: NaiveDate,
}

impl PagingState {
    #[must_use]
    pub fn new(pivot: NaiveDate) -> Self {
        Self { pivot }
    }
}

/// How a settle event was interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettleResolution {
    /// The surface landed on another window; the pivot moved.
    Moved,
    /// The surface came back to the center window.
    Centered,
    /// Telemetry could not be mapped to a page.
    DegenerateTelemetry,
    /// The displacement left the representable calendar range.
    DateOutOfRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettleOutcome {
    pub state: PagingState,
    pub direction: Option<SwipeDirection>,
    pub days_moved: i64,
    pub resolution: SettleResolution,
    /// Window buffer around the new pivot; present only when it moved.
    pub windows: Option<[DateWindow; WINDOW_BUFFER_SIZE]>,
}

impl SettleOutcome {
    fn unchanged(state: PagingState, resolution: SettleResolution) -> Self {
        Self {
            state,
            direction: None,
            days_moved: 0,
            resolution,
            windows: None,
        }
    }

    #[must_use]
    pub fn moved(self) -> bool {
        self.resolution == SettleResolution::Moved
    }
}

/// Maps one settle event onto the next paging state.
///
/// The pivot moves by `page_delta * span` days where `page_delta` is the
/// banded distance from the center window, so a multi-page settle advances
/// by the matching multiple of the span. Degenerate telemetry and calendar
/// overflow leave the state untouched and report no direction.
#[must_use]
pub fn resolve_scroll_settled(
    state: PagingState,
    telemetry: ScrollTelemetry,
    day_span: DaySpan,
) -> SettleOutcome {
    let Some(page_delta) = telemetry.page_delta() else {
        debug!(
            offset_x = telemetry.offset_x,
            content_width = telemetry.content_width,
            "ignoring degenerate scroll telemetry"
        );
        return SettleOutcome::unchanged(state, SettleResolution::DegenerateTelemetry);
    };

    let Some(direction) = SwipeDirection::from_page_delta(page_delta) else {
        trace!(pivot = %state.pivot, "scroll settled on center window");
        return SettleOutcome::unchanged(state, SettleResolution::Centered);
    };

    match shifted_pivot(state.pivot, page_delta, day_span) {
        Ok(shift) => SettleOutcome {
            state: PagingState { pivot: shift.pivot },
            direction: Some(direction),
            days_moved: shift.days,
            resolution: SettleResolution::Moved,
            windows: Some(shift.windows),
        },
        Err(err) => {
            warn!(
                error = %err,
                pivot = %state.pivot,
                page_delta,
                "keeping pivot after out-of-range scroll displacement"
            );
            SettleOutcome::unchanged(state, SettleResolution::DateOutOfRange)
        }
    }
}

struct PivotShift {
    pivot: NaiveDate,
    days: i64,
    windows: [DateWindow; WINDOW_BUFFER_SIZE],
}

fn shifted_pivot(pivot: NaiveDate, page_delta: i64, day_span: DaySpan) -> WeekViewResult<PivotShift> {
    let days = page_delta
        .checked_mul(day_span.days_i64())
        .ok_or(WeekViewError::DateOutOfRange {
            pivot,
            days: page_delta.saturating_mul(day_span.days_i64()),
        })?;
    let next = shift_date(pivot, days)?;
    // The new pivot must still have a full window buffer around it.
    let windows = prepare_date_windows(next, day_span)?;
    Ok(PivotShift {
        pivot: next,
        days,
        windows,
    })
}

/// Owner of the pivot date for one navigation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingController {
    state: PagingState,
}

impl PagingController {
    #[must_use]
    pub fn new(pivot: NaiveDate) -> Self {
        Self {
            state: PagingState::new(pivot),
        }
    }

    #[must_use]
    pub fn from_state(state: PagingState) -> Self {
        Self { state }
    }

    #[must_use]
    pub fn state(&self) -> PagingState {
        self.state
    }

    #[must_use]
    pub fn pivot(&self) -> NaiveDate {
        self.state.pivot
    }

    pub fn on_scroll_settled(
        &mut self,
        telemetry: ScrollTelemetry,
        day_span: DaySpan,
    ) -> SettleOutcome {
        let outcome = resolve_scroll_settled(self.state, telemetry, day_span);
        self.state = outcome.state;
        outcome
    }

    /// Replaces the pivot unconditionally.
    pub fn set_pivot_externally(&mut self, date: NaiveDate) {
        self.state.pivot = date;
    }

    /// Request to put the scroll surface back on the center window.
    #[must_use]
    pub fn reset(&self, day_span: DaySpan) -> RecenterRequest {
        RecenterRequest::center(day_span)
    }

    pub fn windows(&self, day_span: DaySpan) -> WeekViewResult<[DateWindow; WINDOW_BUFFER_SIZE]> {
        prepare_date_windows(self.state.pivot, day_span)
    }
}
