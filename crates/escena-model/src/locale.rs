use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Locale used when a requested locale has no name for a node.
pub const DEFAULT_LOCALE: &str = "en";

/// A locale tag such as `es`, `es-MX` or `en`.
///
/// Tags are stored lowercased with `-` as the separator, so `es_MX` and
/// `ES-mx` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale(String);

impl Locale {
    pub fn new(value: impl AsRef<str>) -> Result<Self, ModelError> {
        let raw = value.as_ref();
        let normalized = raw.trim().replace('_', "-").to_lowercase();
        let valid = !normalized.is_empty()
            && normalized
                .split('-')
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        if !valid {
            return Err(ModelError::InvalidLocale(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    /// The default locale.
    pub fn default_locale() -> Self {
        Self(DEFAULT_LOCALE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language subtag (`es` for `es-mx`).
    pub fn primary(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Whether this tag carries a region or script after the language.
    pub fn has_subtags(&self) -> bool {
        self.0.contains('-')
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::default_locale()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Locale {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Locale {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.0
    }
}
