//! Core value types for the escena marketplace taxonomy.
//!
//! - [`domain`]: the four classification domains and their level names
//! - [`locale`]: locale tags with primary-subtag fallback
//! - [`node`]: the recursive [`TaxonomyNode`] tree
//! - [`stat`]: role-specific stat field specs and their typed values
//! - [`selection`]: the per-panel filter [`Selection`]
//! - [`text`]: case and accent folding for search
//!
//! Everything here is plain data. Traversal lives in `escena-taxonomy`,
//! cascade rules in `escena-filter`.

#![deny(unsafe_code)]

pub mod domain;
pub mod error;
pub mod locale;
pub mod node;
pub mod selection;
pub mod stat;
pub mod text;

pub use domain::Domain;
pub use error::{ModelError, Result};
pub use locale::{DEFAULT_LOCALE, Locale};
pub use node::TaxonomyNode;
pub use selection::{ALL, Choice, DEFAULT_MAX_DISTANCE_KM, PriceRange, Selection};
pub use stat::{StatFieldSpec, StatOption, StatValue};
