use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::CalendarEvent;
use crate::error::{WeekViewError, WeekViewResult};
use crate::render::{StyleProps, StyleSheet};

use super::locale::DEFAULT_LOCALE;

pub const DEFAULT_HEADER_DATE_FORMAT: &str = "MMM D";
pub const WEEK_VIEW_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Public session configuration.
///
/// Serializable so hosts can load a view setup from JSON. Required fields are
/// checked when the engine is built; nothing is coerced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekViewConfig {
    #[serde(default)]
    pub selected_date: Option<NaiveDate>,
    pub number_of_days: u32,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_format_date_header")]
    pub format_date_header: String,
    #[serde(default)]
    pub header_style: StyleProps,
    #[serde(default)]
    pub custom_styles: StyleSheet,
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekViewConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: WeekViewConfig,
}

impl WeekViewConfig {
    #[must_use]
    pub fn new(selected_date: NaiveDate, number_of_days: u32) -> Self {
        Self {
            selected_date: Some(selected_date),
            number_of_days,
            locale: default_locale(),
            format_date_header: default_format_date_header(),
            header_style: StyleProps::new(),
            custom_styles: StyleSheet::new(),
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    #[must_use]
    pub fn with_format_date_header(mut self, format: impl Into<String>) -> Self {
        self.format_date_header = format.into();
        self
    }

    #[must_use]
    pub fn with_header_style(mut self, style: StyleProps) -> Self {
        self.header_style = style;
        self
    }

    #[must_use]
    pub fn with_custom_styles(mut self, styles: StyleSheet) -> Self {
        self.custom_styles = styles;
        self
    }

    #[must_use]
    pub fn with_events(mut self, events: Vec<CalendarEvent>) -> Self {
        self.events = events;
        self
    }

    /// Parses either a bare config object or a versioned contract payload.
    pub fn from_json_str(input: &str) -> WeekViewResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input).map_err(|e| {
            WeekViewError::InvalidConfiguration(format!("failed to parse config json: {e}"))
        })?;

        if value.get("schema_version").is_some() {
            let payload: WeekViewConfigJsonContractV1 =
                serde_json::from_value(value).map_err(|e| {
                    WeekViewError::InvalidConfiguration(format!(
                        "failed to parse config contract: {e}"
                    ))
                })?;
            if payload.schema_version != WEEK_VIEW_CONFIG_JSON_SCHEMA_V1 {
                return Err(WeekViewError::InvalidConfiguration(format!(
                    "unsupported config schema version: {}",
                    payload.schema_version
                )));
            }
            return Ok(payload.config);
        }

        serde_json::from_value(value).map_err(|e| {
            WeekViewError::InvalidConfiguration(format!("failed to parse config: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> WeekViewResult<String> {
        let payload = WeekViewConfigJsonContractV1 {
            schema_version: WEEK_VIEW_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            WeekViewError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_owned()
}

fn default_format_date_header() -> String {
    DEFAULT_HEADER_DATE_FORMAT.to_owned()
}
