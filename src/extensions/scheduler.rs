use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::interaction::RecenterRequest;

/// Host capability to run work after the current render/layout pass.
///
/// The engine only asks for deferral; how the host defers (next animation
/// frame, idle callback, end of event-loop tick) is its own concern.
pub trait RenderScheduler {
    fn schedule_after_render(&mut self, request: RecenterRequest);
}

/// Scheduler that parks requests until the host drains them after layout.
///
/// Clones share one queue so a host can keep a handle while the engine owns
/// the scheduler.
#[derive(Debug, Clone, Default)]
pub struct DeferredRecenterQueue {
    pending: Rc<RefCell<VecDeque<RecenterRequest>>>,
}

impl DeferredRecenterQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Drains queued requests, returning only the most recent one.
    ///
    /// Every request targets the center window, so earlier ones are stale by
    /// the time the host gets to run them.
    pub fn drain_latest(&self) -> Option<RecenterRequest> {
        let mut pending = self.pending.borrow_mut();
        let latest = pending.pop_back();
        pending.clear();
        latest
    }
}

impl RenderScheduler for DeferredRecenterQueue {
    fn schedule_after_render(&mut self, request: RecenterRequest) {
        self.pending.borrow_mut().push_back(request);
    }
}
