use chrono::NaiveDate;
use tracing::debug;

use crate::core::{DaySpan, prepare_date_windows};
use crate::error::WeekViewResult;
use crate::extensions::NavigationEvent;
use crate::interaction::{ScrollTelemetry, SwipeDirection};
use crate::render::WeekViewRenderer;

use super::{SettleOutcome, SettleResolution, WeekViewEngine};

impl<R: WeekViewRenderer> WeekViewEngine<R> {
    /// Applies a momentum-scroll-end report immediately.
    ///
    /// When the surface landed off center the pivot moves, the window buffer
    /// is swapped for the one validated during resolution and listeners
    /// receive exactly one swipe event. Any settle that mapped to a page asks
    /// for a recenter, since the surface may rest a fraction off page 2.
    /// Degenerate telemetry changes nothing.
    pub fn on_scroll_settled(&mut self, telemetry: ScrollTelemetry) -> SettleOutcome {
        let day_span = self.core.navigation.day_span;
        let previous = self.core.navigation.paging.pivot();
        let outcome = self
            .core
            .navigation
            .paging
            .on_scroll_settled(telemetry, day_span);

        match outcome.resolution {
            SettleResolution::DegenerateTelemetry => return outcome,
            SettleResolution::Centered | SettleResolution::DateOutOfRange => {}
            SettleResolution::Moved => {
                if let Some(windows) = outcome.windows {
                    self.core.navigation.windows = windows;
                }
                debug!(
                    from = %previous,
                    to = %outcome.state.pivot,
                    days_moved = outcome.days_moved,
                    "pivot moved after scroll settle"
                );
                let date = outcome.state.pivot;
                match outcome.direction {
                    Some(SwipeDirection::Previous) => {
                        self.emit_navigation_event(NavigationEvent::SwipedPrevious { date });
                    }
                    Some(SwipeDirection::Next) => {
                        self.emit_navigation_event(NavigationEvent::SwipedNext { date });
                    }
                    None => {}
                }
            }
        }
        self.request_recenter();
        outcome
    }

    /// Records a settle report to be applied by `flush_pending_settle`.
    ///
    /// Only the latest report survives; a newer one replaces any that has not
    /// been flushed yet.
    pub fn queue_scroll_settled(&mut self, telemetry: ScrollTelemetry) {
        if let Some(discarded) = self.core.runtime.pending_settle.replace(telemetry) {
            debug!(
                offset_x = discarded.offset_x,
                content_width = discarded.content_width,
                "discarding superseded scroll settle"
            );
        }
    }

    #[must_use]
    pub fn has_pending_settle(&self) -> bool {
        self.core.runtime.pending_settle.is_some()
    }

    /// Applies the latest queued settle report, if any.
    pub fn flush_pending_settle(&mut self) -> Option<SettleOutcome> {
        let telemetry = self.core.runtime.pending_settle.take()?;
        Some(self.on_scroll_settled(telemetry))
    }

    /// Replaces the pivot with a date chosen outside the grid.
    ///
    /// Rejects only dates whose window buffer cannot be represented.
    pub fn set_selected_date(&mut self, date: NaiveDate) -> WeekViewResult<()> {
        let day_span = self.core.navigation.day_span;
        let windows = prepare_date_windows(date, day_span)?;
        self.discard_pending_settle();
        self.core.navigation.paging.set_pivot_externally(date);
        self.core.navigation.windows = windows;
        self.emit_navigation_event(NavigationEvent::PivotReplaced { date });
        self.request_recenter();
        Ok(())
    }

    /// Switches between 1, 3 and 7 day windows around the current pivot.
    pub fn set_day_span(&mut self, day_span: DaySpan) -> WeekViewResult<()> {
        let pivot = self.core.navigation.paging.pivot();
        let windows = prepare_date_windows(pivot, day_span)?;
        self.discard_pending_settle();
        self.core.navigation.day_span = day_span;
        self.core.navigation.windows = windows;
        self.emit_navigation_event(NavigationEvent::DaySpanChanged { day_span });
        self.request_recenter();
        Ok(())
    }

    fn discard_pending_settle(&mut self) {
        if let Some(stale) = self.core.runtime.pending_settle.take() {
            debug!(
                offset_x = stale.offset_x,
                content_width = stale.content_width,
                "dropping queued scroll settle after window reset"
            );
        }
    }
}
