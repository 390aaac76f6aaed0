use tracing::debug;

use crate::error::{WeekViewError, WeekViewResult};
use crate::extensions::NavigationListener;
use crate::render::WeekViewRenderer;

use super::WeekViewEngine;

impl<R: WeekViewRenderer> WeekViewEngine<R> {
    /// Adds a listener; ids are non-empty and unique per engine.
    ///
    /// Listeners are notified in registration order.
    pub fn register_listener(
        &mut self,
        listener: Box<dyn NavigationListener>,
    ) -> WeekViewResult<()> {
        let rejection = match listener.id() {
            "" => Some("listener id must not be empty".to_owned()),
            id if self.has_listener(id) => {
                Some(format!("listener with id `{id}` is already registered"))
            }
            _ => None,
        };
        if let Some(reason) = rejection {
            return Err(WeekViewError::InvalidData(reason));
        }
        debug!(listener_id = listener.id(), "navigation listener registered");
        self.core.runtime.listeners.push(listener);
        Ok(())
    }

    /// Removes the listener with `listener_id`, returning it to the caller.
    pub fn take_listener(&mut self, listener_id: &str) -> Option<Box<dyn NavigationListener>> {
        let position = self.listener_position(listener_id)?;
        Some(self.core.runtime.listeners.remove(position))
    }

    /// Returns `true` when a listener was removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        self.take_listener(listener_id).is_some()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.core.runtime.listeners.len()
    }

    #[must_use]
    pub fn has_listener(&self, listener_id: &str) -> bool {
        self.listener_position(listener_id).is_some()
    }

    /// Registered ids in notification order.
    #[must_use]
    pub fn listener_ids(&self) -> Vec<String> {
        self.core
            .runtime
            .listeners
            .iter()
            .map(|listener| listener.id().to_owned())
            .collect()
    }

    fn listener_position(&self, listener_id: &str) -> Option<usize> {
        self.core
            .runtime
            .listeners
            .iter()
            .position(|listener| listener.id() == listener_id)
    }
}
