use chrono::NaiveDate;

use crate::core::{DaySpan, prepare_date_windows};
use crate::error::{WeekViewError, WeekViewResult};

use super::{Locale, WeekViewConfig};

/// Configuration fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ValidatedConfig {
    pub(super) selected_date: NaiveDate,
    pub(super) day_span: DaySpan,
    pub(super) locale: Locale,
    pub(super) date_format: String,
}

pub(super) fn validate_config(config: &WeekViewConfig) -> WeekViewResult<ValidatedConfig> {
    let selected_date = config.selected_date.ok_or_else(|| {
        WeekViewError::InvalidConfiguration("selected date is required".to_owned())
    })?;
    let day_span = DaySpan::from_days(config.number_of_days)?;
    let locale = Locale::parse(&config.locale)?;
    let date_format = validate_date_format(&config.format_date_header)?;
    validate_pivot(selected_date, day_span)?;

    Ok(ValidatedConfig {
        selected_date,
        day_span,
        locale,
        date_format,
    })
}

pub(super) fn validate_date_format(format: &str) -> WeekViewResult<String> {
    if format.trim().is_empty() {
        return Err(WeekViewError::InvalidConfiguration(
            "header date format must not be empty".to_owned(),
        ));
    }
    Ok(format.to_owned())
}

/// Rejects pivots whose window buffer would leave the calendar range.
pub(super) fn validate_pivot(pivot: NaiveDate, day_span: DaySpan) -> WeekViewResult<()> {
    prepare_date_windows(pivot, day_span).map(|_| ())
}
