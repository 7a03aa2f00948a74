//! Taxonomy override directory resolution.

use std::path::PathBuf;

/// Environment variable pointing at a directory of `<domain>.toml` tables.
pub const TAXONOMY_ENV_VAR: &str = "ESCENA_TAXONOMY_DIR";

/// Override directory from the environment, if set and non-blank.
///
/// # Example
///
/// ```rust,ignore
/// if let Some(dir) = escena_taxonomy::paths::override_dir() {
///     println!("taxonomy tables from {}", dir.display());
/// }
/// ```
pub fn override_dir() -> Option<PathBuf> {
    std::env::var_os(TAXONOMY_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
