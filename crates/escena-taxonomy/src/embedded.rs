//! Embedded taxonomy tables.
//!
//! Every domain table is embedded at compile time using `include_str!()`, so
//! the store works offline and without path resolution. A deployment can
//! still swap tables through [`crate::paths::TAXONOMY_ENV_VAR`].

use escena_model::Domain;

/// Artist taxonomy (category, discipline, role, specialization).
pub const ARTISTS: &str = include_str!("../data/artists.toml");

/// Event taxonomy (category, event type).
pub const EVENTS: &str = include_str!("../data/events.toml");

/// Venue taxonomy (category, venue type).
pub const VENUES: &str = include_str!("../data/venues.toml");

/// Gallery goods taxonomy (category, subcategory).
pub const GALLERY: &str = include_str!("../data/gallery.toml");

/// Embedded table for a domain.
pub const fn table_for(domain: Domain) -> &'static str {
    match domain {
        Domain::Artists => ARTISTS,
        Domain::Events => EVENTS,
        Domain::Venues => VENUES,
        Domain::Gallery => GALLERY,
    }
}

/// File name a table is expected under in an override directory.
pub fn file_name_for(domain: Domain) -> String {
    format!("{}.toml", domain.as_str())
}
