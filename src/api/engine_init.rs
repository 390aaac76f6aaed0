use tracing::debug;

use crate::core::{TimeAxis, prepare_date_windows};
use crate::error::WeekViewResult;
use crate::render::{StyleSheet, WeekViewRenderer};

use super::engine_core::{EngineCore, NavigationModel, PresentationState, RuntimeState};
use super::validation::validate_config;
use super::{PagingController, WeekViewConfig, WeekViewEngine};

impl<R: WeekViewRenderer> WeekViewEngine<R> {
    /// Creates a fully initialized engine centered on the configured date.
    ///
    /// Fails fast on missing dates, unsupported day spans, malformed locales
    /// or pivots whose window buffer cannot be represented.
    pub fn new(renderer: R, config: WeekViewConfig) -> WeekViewResult<Self> {
        let validated = validate_config(&config)?;
        let windows = prepare_date_windows(validated.selected_date, validated.day_span)?;
        let styles = StyleSheet::merged(&StyleSheet::week_view_defaults(), &config.custom_styles);

        debug!(
            pivot = %validated.selected_date,
            day_span = %validated.day_span,
            locale = %validated.locale,
            "initializing week view engine"
        );

        let mut engine = Self {
            renderer,
            core: EngineCore {
                navigation: NavigationModel {
                    paging: PagingController::new(validated.selected_date),
                    day_span: validated.day_span,
                    windows,
                    time_axis: TimeAxis::new(),
                },
                presentation: PresentationState {
                    locale: validated.locale,
                    date_format: validated.date_format,
                    header_style: config.header_style,
                    styles,
                    events: config.events,
                },
                runtime: RuntimeState::default(),
            },
        };
        engine.request_recenter();
        Ok(engine)
    }
}
