//! The immutable per-domain taxonomy store.

use std::path::PathBuf;
use std::sync::OnceLock;

use escena_model::{Domain, Locale, TaxonomyNode};
use serde::Serialize;
use tracing::info;

use crate::error::{Result, TaxonomyError};
use crate::{embedded, loader, paths};

/// Where taxonomy tables come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableSource {
    /// Tables compiled into the binary.
    #[default]
    Embedded,
    /// `<dir>/<domain>.toml`, falling back to the embedded table per domain
    /// when a file is absent.
    Directory(PathBuf),
}

/// Configuration for loading a [`TaxonomyStore`].
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub source: TableSource,
    /// Locale used when a requested locale has no name for a node.
    pub default_locale: Locale,
}

impl StoreConfig {
    /// Embedded tables, unless [`paths::TAXONOMY_ENV_VAR`] names a directory.
    pub fn from_env() -> Self {
        let source = paths::override_dir()
            .map(TableSource::Directory)
            .unwrap_or_default();
        Self {
            source,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_directory(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.source = TableSource::Directory(dir);
        }
        self
    }

    #[must_use]
    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }
}

/// One immutable taxonomy tree per [`Domain`].
///
/// The store is `Send + Sync` and never mutated after loading, so any number
/// of filter panels and editors can read it concurrently.
#[derive(Debug, Clone)]
pub struct TaxonomyStore {
    /// Indexed by [`Domain::index`]; always holds every domain.
    roots: Vec<TaxonomyNode>,
    default_locale: Locale,
}

impl TaxonomyStore {
    /// Load the embedded tables.
    pub fn builtin() -> Result<Self> {
        Self::load(&StoreConfig::default())
    }

    /// Load every domain according to `config`.
    ///
    /// # Errors
    ///
    /// Fails if the override directory is missing or any table is invalid.
    pub fn load(config: &StoreConfig) -> Result<Self> {
        if let TableSource::Directory(dir) = &config.source
            && !dir.is_dir()
        {
            return Err(TaxonomyError::DirectoryNotFound { path: dir.clone() });
        }

        let mut roots = Vec::with_capacity(Domain::ALL.len());
        for domain in Domain::ALL {
            let root = match &config.source {
                TableSource::Directory(dir) => {
                    let path = dir.join(embedded::file_name_for(domain));
                    if path.is_file() {
                        info!(domain = %domain, path = %path.display(), "using taxonomy override");
                        loader::load_table_from_path(domain, &path)?
                    } else {
                        loader::load_embedded(domain)?
                    }
                }
                TableSource::Embedded => loader::load_embedded(domain)?,
            };
            roots.push(root);
        }

        Ok(Self {
            roots,
            default_locale: config.default_locale.clone(),
        })
    }

    /// Build a store from already constructed trees. Domains missing from
    /// `trees` get an empty root.
    ///
    /// # Errors
    ///
    /// Each tree goes through the same checks as a loaded table.
    pub fn from_roots(trees: impl IntoIterator<Item = (Domain, TaxonomyNode)>) -> Result<Self> {
        let mut roots: Vec<TaxonomyNode> = Domain::ALL
            .iter()
            .map(|domain| TaxonomyNode::new(domain.as_str()))
            .collect();
        for (domain, mut root) in trees {
            loader::validate_root(domain, &mut root, "in-memory")?;
            roots[domain.index()] = root;
        }
        Ok(Self {
            roots,
            default_locale: Locale::default(),
        })
    }

    /// Root node of a domain; its children are the categories.
    pub fn root(&self, domain: Domain) -> &TaxonomyNode {
        &self.roots[domain.index()]
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Structural summary of every domain table.
    pub fn check(&self) -> CheckReport {
        let domains = Domain::ALL
            .iter()
            .map(|&domain| DomainCheck::from_root(domain, self.root(domain)))
            .collect();
        CheckReport { domains }
    }
}

static BUILTIN_STORE: OnceLock<TaxonomyStore> = OnceLock::new();

/// Process-wide store over the embedded tables, loaded on first access.
pub fn builtin_store() -> Result<&'static TaxonomyStore> {
    if let Some(store) = BUILTIN_STORE.get() {
        return Ok(store);
    }
    let store = TaxonomyStore::builtin()?;
    Ok(BUILTIN_STORE.get_or_init(|| store))
}

/// Node counts for every loaded domain.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub domains: Vec<DomainCheck>,
}

/// Node counts for one domain.
#[derive(Debug, Clone, Serialize)]
pub struct DomainCheck {
    pub domain: Domain,
    /// `(level name, node count)` from the top level down.
    pub levels: Vec<(String, usize)>,
    /// Non-root nodes without children.
    pub leaves: usize,
    /// Nodes carrying suggested children or stat fields.
    pub annotated: usize,
}

impl DomainCheck {
    fn from_root(domain: Domain, root: &TaxonomyNode) -> Self {
        let mut counts = vec![0usize; domain.depth()];
        let mut leaves = 0;
        let mut annotated = 0;
        let mut stack: Vec<(&TaxonomyNode, usize)> =
            root.children.iter().map(|child| (child, 0)).collect();
        while let Some((node, level)) = stack.pop() {
            if let Some(count) = counts.get_mut(level) {
                *count += 1;
            }
            if node.is_leaf() {
                leaves += 1;
            }
            if !node.suggested.is_empty() || !node.stats.is_empty() {
                annotated += 1;
            }
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        let levels = domain
            .levels()
            .iter()
            .zip(counts)
            .map(|(name, count)| ((*name).to_string(), count))
            .collect();
        Self {
            domain,
            levels,
            leaves,
            annotated,
        }
    }
}
