//! Classification domains.
//!
//! Each marketplace surface (artist explore, events, venues, gallery) has its
//! own taxonomy tree. Artists use four levels; the other domains use two.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

const ARTIST_LEVELS: &[&str] = &["category", "discipline", "role", "specialization"];
const FLAT_LEVELS: &[&str] = &["category", "subcategory"];

/// A taxonomy domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// Artists: category, discipline, role, specialization.
    Artists,
    /// Events: category, event type.
    Events,
    /// Venues: category, venue type.
    Venues,
    /// Gallery goods: category, subcategory.
    Gallery,
}

impl Domain {
    /// All domains in store order.
    pub const ALL: [Domain; 4] = [
        Domain::Artists,
        Domain::Events,
        Domain::Venues,
        Domain::Gallery,
    ];

    /// Canonical lowercase name, also used as the table file stem.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Domain::Artists => "artists",
            Domain::Events => "events",
            Domain::Venues => "venues",
            Domain::Gallery => "gallery",
        }
    }

    /// Position of this domain in [`Domain::ALL`].
    pub const fn index(&self) -> usize {
        match self {
            Domain::Artists => 0,
            Domain::Events => 1,
            Domain::Venues => 2,
            Domain::Gallery => 3,
        }
    }

    /// Level names from the top of the tree down.
    pub fn levels(&self) -> &'static [&'static str] {
        match self {
            Domain::Artists => ARTIST_LEVELS,
            Domain::Events | Domain::Venues | Domain::Gallery => FLAT_LEVELS,
        }
    }

    /// Number of levels below the root.
    pub fn depth(&self) -> usize {
        self.levels().len()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = ModelError;

    /// Accepts the canonical names and the Spanish surface names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "artists" | "artist" | "artistas" => Ok(Domain::Artists),
            "events" | "event" | "eventos" => Ok(Domain::Events),
            "venues" | "venue" | "espacios" | "lugares" => Ok(Domain::Venues),
            "gallery" | "galeria" | "galería" => Ok(Domain::Gallery),
            _ => Err(ModelError::UnknownDomain(s.to_string())),
        }
    }
}
