//! Error types for taxonomy table loading.

use std::path::PathBuf;

use escena_model::Domain;
use thiserror::Error;

/// Errors that can occur while loading or validating a taxonomy table.
///
/// All of these are startup/configuration failures. Lookups against a loaded
/// store never fail; they return `None` or an empty slice.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TaxonomyError {
    /// Override directory not found.
    #[error("taxonomy directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Failed to read an override table.
    #[error("failed to read taxonomy table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table is not valid TOML or does not match the node schema.
    #[error("failed to parse taxonomy table {source_name}: {source}")]
    Parse {
        source_name: String,
        #[source]
        source: toml::de::Error,
    },

    /// Root id differs from the domain the table was loaded for.
    #[error("table {source_name} has root '{found}', expected '{domain}'")]
    RootMismatch {
        source_name: String,
        domain: Domain,
        found: String,
    },

    /// A node has a blank id.
    #[error("{domain}: blank node id under '{parent}'")]
    EmptyId { domain: Domain, parent: String },

    /// Two siblings share an id.
    #[error("{domain}: duplicate id '{id}' under '{parent}'")]
    DuplicateId {
        domain: Domain,
        parent: String,
        id: String,
    },

    /// The tree is deeper than the domain's level count.
    #[error("{domain}: node '{path}' is at depth {depth}, domain allows {max}")]
    TooDeep {
        domain: Domain,
        path: String,
        depth: usize,
        max: usize,
    },
}

impl TaxonomyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for taxonomy loading operations.
pub type Result<T> = std::result::Result<T, TaxonomyError>;
