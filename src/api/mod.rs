mod engine;
mod engine_config;
mod engine_core;
mod engine_init;
mod engine_snapshot;
mod listener_dispatch;
mod listener_registry;
mod locale;
mod navigation_coordinator;
mod paging_controller;
mod presentation_controller;
mod recenter_coordinator;
mod render_coordinator;
mod validation;

pub use engine::WeekViewEngine;
pub use engine_config::{
    DEFAULT_HEADER_DATE_FORMAT, WEEK_VIEW_CONFIG_JSON_SCHEMA_V1, WeekViewConfig,
    WeekViewConfigJsonContractV1,
};
pub use engine_snapshot::EngineSnapshot;
pub use locale::{DEFAULT_LOCALE, Locale};
pub use paging_controller::{
    PagingController, PagingState, SettleOutcome, SettleResolution, resolve_scroll_settled,
};
