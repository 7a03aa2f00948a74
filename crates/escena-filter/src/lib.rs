//! Filter facets for the escena explore and profile surfaces.
//!
//! One generic [`FacetBuilder`] serves every domain. It turns the current
//! [`Selection`] plus the domain taxonomy into the option lists a selection
//! UI offers next, and computes the next valid selection after an edit.
//!
//! # Cascade reset
//!
//! A descendant selection never outlives its ancestor:
//!
//! | change         | resets                                           |
//! |----------------|--------------------------------------------------|
//! | category       | discipline, role, specialization, tags, stats    |
//! | discipline     | role, specialization, tags, stats                |
//! | role           | specialization, tags, stats                      |
//!
//! Unknown or stale ids degrade to "all"/unset instead of failing.
//!
//! [`Selection`]: escena_model::Selection

#![deny(unsafe_code)]

pub mod builder;
pub mod count;
pub mod options;

pub use builder::FacetBuilder;
pub use count::active_filter_count;
pub use options::{FacetOption, all_label};
