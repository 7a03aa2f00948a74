//! Filter panel selection state.
//!
//! A [`Selection`] is plain data owned by the caller. The cascade invariant
//! (a discipline belongs to the selected category, a role to the selected
//! discipline, ...) is maintained by `escena-filter`, never by writing fields
//! directly from the UI.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::stat::StatValue;

/// Sentinel id meaning "no restriction at this level".
pub const ALL: &str = "all";

/// Distance radius applied when the user has not moved the slider.
pub const DEFAULT_MAX_DISTANCE_KM: u32 = 50;

/// A level that can be either unrestricted or a concrete node id.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Choice {
    #[default]
    All,
    Id(String),
}

impl Choice {
    /// Build from raw text; `"all"` and blank text map to [`Choice::All`].
    pub fn from_raw(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            Choice::All
        } else {
            Choice::Id(trimmed.to_string())
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Choice::All => None,
            Choice::Id(id) => Some(id),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Choice::All => ALL,
            Choice::Id(id) => id,
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Choice {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Choice {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Choice::from_raw).unwrap_or_default())
    }
}

/// Price filter bounds in whole currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u32,
    /// `None` means no upper bound.
    pub max: Option<u32>,
}

impl PriceRange {
    pub fn is_default(&self) -> bool {
        *self == PriceRange::default()
    }
}

/// Current state of one filter panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    pub category: Choice,
    pub discipline: Choice,
    pub role: Option<String>,
    pub specialization: Option<String>,
    pub extra_tags: BTreeSet<String>,
    pub stats: BTreeMap<String, StatValue>,
    pub date: Option<NaiveDate>,
    pub price: PriceRange,
    pub max_distance_km: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            category: Choice::All,
            discipline: Choice::All,
            role: None,
            specialization: None,
            extra_tags: BTreeSet::new(),
            stats: BTreeMap::new(),
            date: None,
            price: PriceRange::default(),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
        }
    }
}

impl Selection {
    /// Clear everything below the category.
    pub(crate) fn clear_below_category(&mut self) {
        self.discipline = Choice::All;
        self.clear_below_discipline();
    }

    /// Clear everything below the discipline.
    pub(crate) fn clear_below_discipline(&mut self) {
        self.role = None;
        self.clear_below_role();
    }

    /// Clear everything that depends on the role.
    pub(crate) fn clear_below_role(&mut self) {
        self.specialization = None;
        self.extra_tags.clear();
        self.stats.clear();
    }

    /// Copy with a new category and every descendant reset.
    #[must_use]
    pub fn with_category(&self, category: Choice) -> Self {
        let mut next = self.clone();
        next.category = category;
        next.clear_below_category();
        next
    }

    /// Copy with a new discipline; category is kept.
    #[must_use]
    pub fn with_discipline(&self, discipline: Choice) -> Self {
        let mut next = self.clone();
        next.discipline = discipline;
        next.clear_below_discipline();
        next
    }

    /// Copy with a new role; category and discipline are kept.
    #[must_use]
    pub fn with_role(&self, role: Option<String>) -> Self {
        let mut next = self.clone();
        next.role = role;
        next.clear_below_role();
        next
    }

    /// Id path of the concrete levels, stopping at the first unrestricted one.
    pub fn path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(4);
        let Some(category) = self.category.id() else {
            return path;
        };
        path.push(category);
        let Some(discipline) = self.discipline.id() else {
            return path;
        };
        path.push(discipline);
        let Some(role) = self.role.as_deref() else {
            return path;
        };
        path.push(role);
        if let Some(specialization) = self.specialization.as_deref() {
            path.push(specialization);
        }
        path
    }
}
