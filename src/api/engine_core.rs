use crate::core::{CalendarEvent, DateWindow, DaySpan, TimeAxis, WINDOW_BUFFER_SIZE};
use crate::extensions::{NavigationListener, RenderScheduler};
use crate::interaction::{RecenterRequest, ScrollTelemetry};
use crate::render::{StyleProps, StyleSheet};

use super::{Locale, PagingController};

/// Navigation model: pivot ownership and the derived window buffer.
pub(super) struct NavigationModel {
    pub(super) paging: PagingController,
    pub(super) day_span: DaySpan,
    pub(super) windows: [DateWindow; WINDOW_BUFFER_SIZE],
    pub(super) time_axis: TimeAxis,
}

/// Inputs that only affect what collaborators draw.
pub(super) struct PresentationState {
    pub(super) locale: Locale,
    pub(super) date_format: String,
    pub(super) header_style: StyleProps,
    pub(super) styles: StyleSheet,
    pub(super) events: Vec<CalendarEvent>,
}

/// Host-facing runtime plumbing.
#[derive(Default)]
pub(super) struct RuntimeState {
    pub(super) listeners: Vec<Box<dyn NavigationListener>>,
    pub(super) scheduler: Option<Box<dyn RenderScheduler>>,
    pub(super) pending_recenter: Option<RecenterRequest>,
    pub(super) pending_settle: Option<ScrollTelemetry>,
    pub(super) render_count: u64,
}

/// Internal engine core state used by the public facade (`WeekViewEngine`).
pub(super) struct EngineCore {
    pub(super) navigation: NavigationModel,
    pub(super) presentation: PresentationState,
    pub(super) runtime: RuntimeState,
}
