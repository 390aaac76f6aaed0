//! week-view: paging engine for swipeable multi-day calendar grids.
//!
//! The crate owns the navigation state of a 1, 3 or 7 day calendar view: the
//! half-hour time axis, the five buffered date windows around a pivot date and
//! the mapping from horizontal scroll telemetry to pivot changes. Drawing is
//! left to host-provided renderers.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{WeekViewConfig, WeekViewEngine};
pub use error::{WeekViewError, WeekViewResult};
