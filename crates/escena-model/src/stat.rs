//! Role-specific stat fields ("height", "vocal range", "instruments played").
//!
//! A role can recommend measurement fields for profiles and filters. Each field
//! kind carries its own value type so consumers match exhaustively instead of
//! inspecting untyped values at runtime.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A selectable option of a select-type stat field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatOption {
    pub id: String,
    #[serde(default)]
    pub names: BTreeMap<String, String>,
}

/// Definition of one stat field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatFieldSpec {
    /// Free numeric value, optionally bounded.
    Number {
        id: String,
        #[serde(default)]
        names: BTreeMap<String, String>,
        #[serde(default)]
        unit: Option<String>,
        #[serde(default)]
        min: Option<f64>,
        #[serde(default)]
        max: Option<f64>,
    },
    /// Exactly one of `options`.
    SingleSelect {
        id: String,
        #[serde(default)]
        names: BTreeMap<String, String>,
        options: Vec<StatOption>,
    },
    /// Any subset of `options`.
    MultiSelect {
        id: String,
        #[serde(default)]
        names: BTreeMap<String, String>,
        options: Vec<StatOption>,
    },
}

impl StatFieldSpec {
    pub fn id(&self) -> &str {
        match self {
            StatFieldSpec::Number { id, .. }
            | StatFieldSpec::SingleSelect { id, .. }
            | StatFieldSpec::MultiSelect { id, .. } => id,
        }
    }

    pub fn names(&self) -> &BTreeMap<String, String> {
        match self {
            StatFieldSpec::Number { names, .. }
            | StatFieldSpec::SingleSelect { names, .. }
            | StatFieldSpec::MultiSelect { names, .. } => names,
        }
    }

    /// Options of a select field; empty for numbers.
    pub fn options(&self) -> &[StatOption] {
        match self {
            StatFieldSpec::Number { .. } => &[],
            StatFieldSpec::SingleSelect { options, .. }
            | StatFieldSpec::MultiSelect { options, .. } => options,
        }
    }

    /// Short kind label used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            StatFieldSpec::Number { .. } => "number",
            StatFieldSpec::SingleSelect { .. } => "single_select",
            StatFieldSpec::MultiSelect { .. } => "multi_select",
        }
    }

    fn has_option(&self, option: &str) -> bool {
        self.options().iter().any(|o| o.id == option)
    }

    /// Whether `value` has this field's value type and lies within its domain.
    pub fn accepts(&self, value: &StatValue) -> bool {
        match (self, value) {
            (StatFieldSpec::Number { min, max, .. }, StatValue::Number(n)) => {
                n.is_finite()
                    && min.is_none_or(|lower| *n >= lower)
                    && max.is_none_or(|upper| *n <= upper)
            }
            (StatFieldSpec::SingleSelect { .. }, StatValue::Single(option)) => {
                self.has_option(option)
            }
            (StatFieldSpec::MultiSelect { .. }, StatValue::Multi(options)) => {
                options.iter().all(|option| self.has_option(option))
            }
            _ => false,
        }
    }
}

/// A value entered for a stat field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Single(String),
    Multi(BTreeSet<String>),
}

impl StatValue {
    /// Values that carry no filter: an empty multi-select.
    pub fn is_empty(&self) -> bool {
        match self {
            StatValue::Multi(options) => options.is_empty(),
            StatValue::Single(option) => option.is_empty(),
            StatValue::Number(_) => false,
        }
    }
}
