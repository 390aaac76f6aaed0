use chrono::NaiveDate;

use crate::core::{CalendarEvent, DateWindow, DaySpan, TimeLabel, WINDOW_BUFFER_SIZE};
use crate::error::WeekViewResult;
use crate::render::{RenderModel, StyleProps, StyleSheet, WeekViewRenderer};

use super::{Locale, PagingState, engine_core::EngineCore, render_coordinator::RenderCoordinator};

/// Main orchestration facade consumed by host applications.
///
/// `WeekViewEngine` owns the pivot date, rebuilds the window buffer after
/// every pivot change, notifies listeners about navigation and asks the host
/// to recenter its scroll surface after each change.
pub struct WeekViewEngine<R: WeekViewRenderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: WeekViewRenderer> WeekViewEngine<R> {
    #[must_use]
    pub fn pivot(&self) -> NaiveDate {
        self.core.navigation.paging.pivot()
    }

    #[must_use]
    pub fn paging_state(&self) -> PagingState {
        self.core.navigation.paging.state()
    }

    #[must_use]
    pub fn day_span(&self) -> DaySpan {
        self.core.navigation.day_span
    }

    #[must_use]
    pub fn windows(&self) -> &[DateWindow; WINDOW_BUFFER_SIZE] {
        &self.core.navigation.windows
    }

    #[must_use]
    pub fn time_labels(&self) -> &[TimeLabel] {
        self.core.navigation.time_axis.labels()
    }

    #[must_use]
    pub fn time_label_texts(&self) -> &[String] {
        self.core.navigation.time_axis.texts()
    }

    #[must_use]
    pub fn locale(&self) -> &Locale {
        &self.core.presentation.locale
    }

    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.core.presentation.date_format
    }

    #[must_use]
    pub fn header_style(&self) -> &StyleProps {
        &self.core.presentation.header_style
    }

    #[must_use]
    pub fn styles(&self) -> &StyleSheet {
        &self.core.presentation.styles
    }

    #[must_use]
    pub fn events(&self) -> &[CalendarEvent] {
        &self.core.presentation.events
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.core.runtime.render_count
    }

    /// Delivers the header and every buffered column to the renderer, then
    /// asks for the surface to be put back on the center window.
    pub fn render(&mut self) -> WeekViewResult<()> {
        RenderCoordinator::render(self)
    }

    #[must_use]
    pub fn render_model(&self) -> RenderModel {
        RenderCoordinator::build_model(self)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
