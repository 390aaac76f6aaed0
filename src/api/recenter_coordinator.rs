use tracing::trace;

use crate::extensions::RenderScheduler;
use crate::interaction::RecenterRequest;
use crate::render::WeekViewRenderer;

use super::WeekViewEngine;

impl<R: WeekViewRenderer> WeekViewEngine<R> {
    /// Installs the host's after-render scheduler.
    ///
    /// A recenter request parked before installation is handed over at once.
    pub fn set_render_scheduler(&mut self, mut scheduler: Box<dyn RenderScheduler>) {
        if let Some(request) = self.core.runtime.pending_recenter.take() {
            scheduler.schedule_after_render(request);
        }
        self.core.runtime.scheduler = Some(scheduler);
    }

    pub fn clear_render_scheduler(&mut self) -> Option<Box<dyn RenderScheduler>> {
        self.core.runtime.scheduler.take()
    }

    #[must_use]
    pub fn has_render_scheduler(&self) -> bool {
        self.core.runtime.scheduler.is_some()
    }

    /// Recenter request waiting for a host without an installed scheduler.
    #[must_use]
    pub fn pending_recenter(&self) -> Option<RecenterRequest> {
        self.core.runtime.pending_recenter
    }

    pub fn take_pending_recenter(&mut self) -> Option<RecenterRequest> {
        self.core.runtime.pending_recenter.take()
    }

    pub(super) fn request_recenter(&mut self) {
        let request = self
            .core
            .navigation
            .paging
            .reset(self.core.navigation.day_span);
        trace!(page_index = request.page_index, "requesting deferred recenter");
        match self.core.runtime.scheduler.as_mut() {
            Some(scheduler) => scheduler.schedule_after_render(request),
            None => self.core.runtime.pending_recenter = Some(request),
        }
    }
}
