use tracing::trace;

use crate::error::WeekViewResult;
use crate::render::{ColumnFrame, HeaderFrame, RenderModel, WeekViewRenderer};

use super::WeekViewEngine;
use super::engine_core::EngineCore;

pub(super) struct RenderCoordinator;

impl RenderCoordinator {
    pub(super) fn render<R: WeekViewRenderer>(
        engine: &mut WeekViewEngine<R>,
    ) -> WeekViewResult<()> {
        let core = &engine.core;
        engine.renderer.render_header(&header_frame(core))?;

        let navigation = &core.navigation;
        for window in navigation.windows {
            let column = ColumnFrame {
                window,
                day_span: navigation.day_span,
                time_labels: navigation.time_axis.labels(),
                events: &core.presentation.events,
                event_style: core.presentation.styles.event_style(),
            };
            engine.renderer.render_column(&column)?;
        }

        engine.core.runtime.render_count += 1;
        trace!(
            pivot = %engine.core.navigation.paging.pivot(),
            render_count = engine.core.runtime.render_count,
            "render pass delivered"
        );
        engine.request_recenter();
        Ok(())
    }

    pub(super) fn build_model<R: WeekViewRenderer>(engine: &WeekViewEngine<R>) -> RenderModel {
        let core = &engine.core;
        RenderModel {
            selected_date: core.navigation.paging.pivot(),
            day_span: core.navigation.day_span,
            date_format: core.presentation.date_format.clone(),
            locale: core.presentation.locale.to_string(),
            windows: core.navigation.windows,
            time_labels: core.navigation.time_axis.texts().to_vec(),
        }
    }
}

fn header_frame(core: &EngineCore) -> HeaderFrame<'_> {
    HeaderFrame {
        selected_date: core.navigation.paging.pivot(),
        day_span: core.navigation.day_span,
        date_format: &core.presentation.date_format,
        locale: core.presentation.locale.as_str(),
        style: &core.presentation.header_style,
    }
}
