use crate::core::CalendarEvent;
use crate::error::WeekViewResult;
use crate::render::{StyleProps, StyleSheet, WeekViewRenderer};

use super::validation::validate_date_format;
use super::{Locale, WeekViewEngine};

impl<R: WeekViewRenderer> WeekViewEngine<R> {
    /// Switches the locale used for header/date strings.
    pub fn set_locale(&mut self, locale: &str) -> WeekViewResult<()> {
        self.core.presentation.locale = Locale::parse(locale)?;
        Ok(())
    }

    pub fn set_date_format(&mut self, format: &str) -> WeekViewResult<()> {
        self.core.presentation.date_format = validate_date_format(format)?;
        Ok(())
    }

    pub fn set_header_style(&mut self, style: StyleProps) {
        self.core.presentation.header_style = style;
    }

    /// Re-resolves the style sheet from defaults and new overrides.
    pub fn set_custom_styles(&mut self, overrides: &StyleSheet) {
        self.core.presentation.styles =
            StyleSheet::merged(&StyleSheet::week_view_defaults(), overrides);
    }

    pub fn set_events(&mut self, events: Vec<CalendarEvent>) {
        self.core.presentation.events = events;
    }
}
