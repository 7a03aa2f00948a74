//! Taxonomy store and resolver for the escena marketplace.
//!
//! This crate provides:
//!
//! - **Embedded tables**: one TOML table per [`Domain`], compiled in
//! - **Loader**: TOML parsing with tree invariant checks
//! - **Store**: [`TaxonomyStore`], one immutable tree per domain
//! - **Resolver**: pure lookups (`find_by_id`, `children_of`,
//!   `localized_name`, suggested children and stat fields)
//! - **Search**: a lazy, restartable name search
//!
//! # Example
//!
//! ```rust,ignore
//! use escena_model::{Domain, Locale};
//! use escena_taxonomy::{TaxonomyStore, children_of, localized_name};
//!
//! let store = TaxonomyStore::builtin()?;
//! let root = store.root(Domain::Artists);
//! let es = Locale::new("es")?;
//! for discipline in children_of(root, &["music"]) {
//!     println!("{}", localized_name(discipline, &es));
//! }
//! ```
//!
//! [`Domain`]: escena_model::Domain

#![deny(unsafe_code)]

pub mod embedded;
pub mod error;
pub mod loader;
pub mod paths;
pub mod resolve;
pub mod search;
pub mod store;

pub use error::{Result, TaxonomyError};
pub use paths::TAXONOMY_ENV_VAR;
pub use resolve::{
    children_of, find_by_id, localized_name, localized_name_with_default,
    localized_option_name, localized_option_name_with_default, localized_stat_name,
    localized_stat_name_with_default, path_names, path_names_with_default, suggested_children,
    suggested_stat_fields,
};
pub use search::{Search, SearchHit, search, search_with_default};
pub use store::{CheckReport, DomainCheck, StoreConfig, TableSource, TaxonomyStore, builtin_store};
