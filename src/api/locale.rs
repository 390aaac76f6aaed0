use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{WeekViewError, WeekViewResult};

pub const DEFAULT_LOCALE: &str = "en";

/// Locale code (`en`, `fr`, `pt-br`, `zh_CN`) forwarded to date formatting.
///
/// Only header/date strings depend on it; paging behavior does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn parse(code: &str) -> WeekViewResult<Self> {
        let code = code.trim();
        if code.is_empty() {
            return Err(WeekViewError::InvalidConfiguration(
                "locale must not be empty".to_owned(),
            ));
        }
        if !code
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
        {
            return Err(WeekViewError::InvalidConfiguration(format!(
                "locale `{code}` contains unsupported characters"
            )));
        }
        Ok(Self(code.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag (`pt` for `pt-br`).
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or(&self.0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE.to_owned())
    }
}

impl TryFrom<String> for Locale {
    type Error = WeekViewError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.0
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    fn parses_language_and_region_codes() {
        assert_eq!(Locale::default().as_str(), "en");
        assert_eq!(Locale::parse("pt-br").expect("locale").language(), "pt");
        assert_eq!(Locale::parse("zh_CN").expect("locale").language(), "zh");
        assert_eq!(Locale::parse(" fr ").expect("locale").as_str(), "fr");
    }

    #[test]
    fn rejects_empty_and_malformed_codes() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("   ").is_err());
        assert!(Locale::parse("en/US").is_err());
    }
}
