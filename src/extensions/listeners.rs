use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{DateWindow, DaySpan, WINDOW_BUFFER_SIZE};

/// Read-only navigation state passed to listener hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationContext {
    pub pivot: NaiveDate,
    pub day_span: DaySpan,
    pub windows: [DateWindow; WINDOW_BUFFER_SIZE],
}

/// Event stream exposed to navigation listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationEvent {
    /// The user settled on a window before the pivot.
    SwipedPrevious { date: NaiveDate },
    /// The user settled on a window after the pivot.
    SwipedNext { date: NaiveDate },
    /// The host replaced the pivot directly.
    PivotReplaced { date: NaiveDate },
    DaySpanChanged { day_span: DaySpan },
    EventPressed { event_id: String },
}

/// Hook interface through which the host observes navigation.
pub trait NavigationListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: NavigationEvent, context: NavigationContext);
}

type DateCallback = Box<dyn FnMut(NaiveDate)>;
type EventPressCallback = Box<dyn FnMut(&str)>;

/// Closure-backed listener covering the swipe and event-press callbacks.
pub struct SwipeCallbacks {
    id: String,
    on_swipe_previous: Option<DateCallback>,
    on_swipe_next: Option<DateCallback>,
    on_event_press: Option<EventPressCallback>,
}

impl SwipeCallbacks {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            on_swipe_previous: None,
            on_swipe_next: None,
            on_event_press: None,
        }
    }

    #[must_use]
    pub fn on_swipe_previous(mut self, callback: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_swipe_previous = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_swipe_next(mut self, callback: impl FnMut(NaiveDate) + 'static) -> Self {
        self.on_swipe_next = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_event_press(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_event_press = Some(Box::new(callback));
        self
    }
}

impl NavigationListener for SwipeCallbacks {
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: NavigationEvent, _context: NavigationContext) {
        match event {
            NavigationEvent::SwipedPrevious { date } => {
                if let Some(callback) = self.on_swipe_previous.as_mut() {
                    callback(date);
                }
            }
            NavigationEvent::SwipedNext { date } => {
                if let Some(callback) = self.on_swipe_next.as_mut() {
                    callback(date);
                }
            }
            NavigationEvent::EventPressed { event_id } => {
                if let Some(callback) = self.on_event_press.as_mut() {
                    callback(&event_id);
                }
            }
            NavigationEvent::PivotReplaced { .. } | NavigationEvent::DaySpanChanged { .. } => {}
        }
    }
}
