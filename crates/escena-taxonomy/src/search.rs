//! Lazy name search across every level of a domain tree.

use escena_model::text::fold;
use escena_model::{Locale, TaxonomyNode};

use crate::resolve::localized_name_with_default;

/// A node whose localized name matched, with its id path from the root.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub path: Vec<&'a str>,
    pub node: &'a TaxonomyNode,
}

impl SearchHit<'_> {
    /// Level index of the hit (0 = category).
    pub fn level(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Pre-order iterator over nodes whose localized name contains the query,
/// ignoring case and accents.
///
/// The iterator owns all of its state, so calling [`search`] again with the
/// same arguments replays the same sequence. The root itself is never
/// yielded and an empty query yields nothing.
pub struct Search<'a> {
    needle: String,
    locale: Locale,
    default: Locale,
    stack: Vec<(&'a TaxonomyNode, Vec<&'a str>)>,
}

/// Start a search over `root` for `query` in `locale`.
pub fn search<'a>(root: &'a TaxonomyNode, query: &str, locale: &Locale) -> Search<'a> {
    search_with_default(root, query, locale, &Locale::default())
}

/// [`search`] matching the names a store with `default` as its fallback
/// locale would display.
pub fn search_with_default<'a>(
    root: &'a TaxonomyNode,
    query: &str,
    locale: &Locale,
    default: &Locale,
) -> Search<'a> {
    let needle = fold(query.trim());
    let stack = if needle.is_empty() {
        Vec::new()
    } else {
        root.children
            .iter()
            .rev()
            .map(|child| (child, vec![child.id.as_str()]))
            .collect()
    };
    Search {
        needle,
        locale: locale.clone(),
        default: default.clone(),
        stack,
    }
}

impl<'a> Iterator for Search<'a> {
    type Item = SearchHit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, path)) = self.stack.pop() {
            for child in node.children.iter().rev() {
                let mut child_path = path.clone();
                child_path.push(child.id.as_str());
                self.stack.push((child, child_path));
            }
            let name = localized_name_with_default(node, &self.locale, &self.default);
            if fold(name).contains(&self.needle) {
                return Some(SearchHit { path, node });
            }
        }
        None
    }
}
