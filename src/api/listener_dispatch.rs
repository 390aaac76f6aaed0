use tracing::trace;

use crate::error::{WeekViewError, WeekViewResult};
use crate::extensions::{NavigationContext, NavigationEvent};
use crate::render::WeekViewRenderer;

use super::WeekViewEngine;

impl<R: WeekViewRenderer> WeekViewEngine<R> {
    #[must_use]
    pub fn navigation_context(&self) -> NavigationContext {
        NavigationContext {
            pivot: self.core.navigation.paging.pivot(),
            day_span: self.core.navigation.day_span,
            windows: self.core.navigation.windows,
        }
    }

    /// Forwards a press on a rendered event block to listeners.
    pub fn press_event(&mut self, event_id: &str) -> WeekViewResult<()> {
        if !self
            .core
            .presentation
            .events
            .iter()
            .any(|event| event.id == event_id)
        {
            return Err(WeekViewError::InvalidData(format!(
                "unknown event id `{event_id}`"
            )));
        }
        self.emit_navigation_event(NavigationEvent::EventPressed {
            event_id: event_id.to_owned(),
        });
        Ok(())
    }

    pub(super) fn emit_navigation_event(&mut self, event: NavigationEvent) {
        let context = self.navigation_context();
        trace!(?event, listeners = self.core.runtime.listeners.len(), "dispatching navigation event");
        for listener in &mut self.core.runtime.listeners {
            listener.on_event(event.clone(), context);
        }
    }
}
