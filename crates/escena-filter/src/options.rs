use escena_model::{ALL, Locale, TaxonomyNode};
use escena_taxonomy::localized_name_with_default;
use serde::Serialize;

/// One entry of a selection list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub id: String,
    pub label: String,
}

impl FacetOption {
    /// Option for `node`, labelled through the locale fallback chain.
    pub fn from_node(node: &TaxonomyNode, locale: &Locale, default: &Locale) -> Self {
        Self {
            id: node.id.clone(),
            label: localized_name_with_default(node, locale, default).to_string(),
        }
    }

    /// The synthetic "no restriction" entry.
    pub fn all(locale: &Locale, default: &Locale) -> Self {
        Self {
            id: ALL.to_string(),
            label: all_label(locale, default).to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == ALL
    }
}

const ALL_LABELS: &[(&str, &str)] = &[
    ("es", "Todos"),
    ("pt", "Todos"),
    ("en", "All"),
    ("fr", "Tous"),
];

/// Localized label of the "all" entry.
pub fn all_label(locale: &Locale, default: &Locale) -> &'static str {
    let lookup = |tag: &str| {
        ALL_LABELS
            .iter()
            .find(|(key, _)| *key == tag)
            .map(|(_, label)| *label)
    };
    lookup(locale.as_str())
        .or_else(|| lookup(locale.primary()))
        .or_else(|| lookup(default.primary()))
        .unwrap_or("All")
}
