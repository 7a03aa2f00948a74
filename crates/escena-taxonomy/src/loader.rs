//! Taxonomy table loading.
//!
//! A table is a TOML document whose top level is the domain root node:
//!
//! ```toml
//! id = "artists"
//! names = { es = "Artistas", en = "Artists" }
//!
//! [[children]]
//! id = "music"
//! names = { es = "Música", en = "Music" }
//! ```
//!
//! Loading checks the tree invariants (root id matches the domain, ids are
//! non-blank and unique among siblings, depth within the domain's level count)
//! and lowercases locale keys so lookups can use normalized [`Locale`] tags.
//!
//! [`Locale`]: escena_model::Locale

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use escena_model::{Domain, StatFieldSpec, TaxonomyNode};
use tracing::debug;

use crate::embedded;
use crate::error::{Result, TaxonomyError};

/// Load the embedded table for a domain.
pub fn load_embedded(domain: Domain) -> Result<TaxonomyNode> {
    let source_name = format!("embedded:{}", embedded::file_name_for(domain));
    load_table_from_str(domain, embedded::table_for(domain), &source_name)
}

/// Load a table from a file on disk.
pub fn load_table_from_path(domain: Domain, path: &Path) -> Result<TaxonomyNode> {
    let content = std::fs::read_to_string(path).map_err(|e| TaxonomyError::io(path, e))?;
    load_table_from_str(domain, &content, &path.display().to_string())
}

/// Parse and validate a table from TOML text.
pub fn load_table_from_str(
    domain: Domain,
    content: &str,
    source_name: &str,
) -> Result<TaxonomyNode> {
    let mut root: TaxonomyNode =
        toml::from_str(content).map_err(|source| TaxonomyError::Parse {
            source_name: source_name.to_string(),
            source,
        })?;

    validate_root(domain, &mut root, source_name)?;
    debug!(
        domain = %domain,
        source = source_name,
        nodes = root.subtree_len(),
        "loaded taxonomy table"
    );
    Ok(root)
}

/// Check the tree invariants of `root` and normalize its ids and locale keys
/// in place.
pub(crate) fn validate_root(
    domain: Domain,
    root: &mut TaxonomyNode,
    source_name: &str,
) -> Result<()> {
    root.id = root.id.trim().to_string();
    if root.id != domain.as_str() {
        return Err(TaxonomyError::RootMismatch {
            source_name: source_name.to_string(),
            domain,
            found: root.id.clone(),
        });
    }
    normalize_node(domain, root, 0, domain.as_str())
}

fn normalize_node(
    domain: Domain,
    node: &mut TaxonomyNode,
    depth: usize,
    path: &str,
) -> Result<()> {
    if depth > domain.depth() {
        return Err(TaxonomyError::TooDeep {
            domain,
            path: path.to_string(),
            depth,
            max: domain.depth(),
        });
    }

    node.names = normalize_names(std::mem::take(&mut node.names));
    for suggested in &mut node.suggested {
        suggested.id = suggested.id.trim().to_string();
        suggested.names = normalize_names(std::mem::take(&mut suggested.names));
    }
    for stat in &mut node.stats {
        normalize_stat(stat);
    }

    let mut seen = BTreeSet::new();
    for child in &mut node.children {
        child.id = child.id.trim().to_string();
        if child.id.is_empty() {
            return Err(TaxonomyError::EmptyId {
                domain,
                parent: path.to_string(),
            });
        }
        if !seen.insert(child.id.clone()) {
            return Err(TaxonomyError::DuplicateId {
                domain,
                parent: path.to_string(),
                id: child.id.clone(),
            });
        }
        let child_path = format!("{path}/{}", child.id);
        normalize_node(domain, child, depth + 1, &child_path)?;
    }
    Ok(())
}

fn normalize_stat(stat: &mut StatFieldSpec) {
    match stat {
        StatFieldSpec::Number { id, names, .. } => {
            *id = id.trim().to_string();
            *names = normalize_names(std::mem::take(names));
        }
        StatFieldSpec::SingleSelect { id, names, options }
        | StatFieldSpec::MultiSelect { id, names, options } => {
            *id = id.trim().to_string();
            *names = normalize_names(std::mem::take(names));
            for option in options {
                option.id = option.id.trim().to_string();
                option.names = normalize_names(std::mem::take(&mut option.names));
            }
        }
    }
}

fn normalize_names(names: BTreeMap<String, String>) -> BTreeMap<String, String> {
    names
        .into_iter()
        .map(|(locale, name)| {
            (
                locale.trim().replace('_', "-").to_lowercase(),
                name.trim().to_string(),
            )
        })
        .filter(|(locale, name)| !locale.is_empty() && !name.is_empty())
        .collect()
}
