mod frame;
mod null_renderer;
mod style;

pub use frame::{ColumnFrame, HeaderFrame, RenderModel};
pub use null_renderer::NullRenderer;
pub use style::{EVENT_STYLE_SLOT, STYLE_SLOTS, StyleProps, StyleSheet, TIME_COLUMN_WIDTH_PX};

use crate::error::WeekViewResult;

/// Contract implemented by the host's Header and Events renderers.
///
/// A render pass delivers the header once followed by every buffered column
/// in slot order. Frames borrow engine state and are only valid for the call.
pub trait WeekViewRenderer {
    fn render_header(&mut self, header: &HeaderFrame<'_>) -> WeekViewResult<()>;
    fn render_column(&mut self, column: &ColumnFrame<'_>) -> WeekViewResult<()>;
}
