//! Pure lookups over a domain tree.
//!
//! Every function here treats "not found" as an ordinary value: a stale id in
//! a selection yields `None` or an empty slice, never an error. Selection
//! state routinely points at ids that stopped being valid the moment an
//! ancestor changed.

use std::collections::BTreeMap;

use escena_model::{Locale, StatFieldSpec, StatOption, TaxonomyNode};

/// Descend from `root` following `path`, one level per id.
///
/// An empty path returns `root` itself.
pub fn find_by_id<'a>(root: &'a TaxonomyNode, path: &[&str]) -> Option<&'a TaxonomyNode> {
    path.iter().try_fold(root, |node, id| node.child(id))
}

/// Children of the node at `path`, or an empty slice when it has none or
/// does not exist.
pub fn children_of<'a>(root: &'a TaxonomyNode, path: &[&str]) -> &'a [TaxonomyNode] {
    find_by_id(root, path)
        .map(|node| node.children.as_slice())
        .unwrap_or(&[])
}

/// Nodes the role at `category/discipline/role` recommends alongside itself.
///
/// The recommendation is an annotation on the role, not its subtree; it is
/// returned unchanged. A missing role or annotation yields an empty slice.
pub fn suggested_children<'a>(
    root: &'a TaxonomyNode,
    category: &str,
    discipline: &str,
    role: &str,
) -> &'a [TaxonomyNode] {
    find_by_id(root, &[category, discipline, role])
        .map(|node| node.suggested.as_slice())
        .unwrap_or(&[])
}

/// Stat fields the role at `category/discipline/role` recommends.
pub fn suggested_stat_fields<'a>(
    root: &'a TaxonomyNode,
    category: &str,
    discipline: &str,
    role: &str,
) -> &'a [StatFieldSpec] {
    find_by_id(root, &[category, discipline, role])
        .map(|node| node.stats.as_slice())
        .unwrap_or(&[])
}

/// Display name of `node` in `locale`, falling back to the default locale.
///
/// Never empty: when the node has no names at all its raw id is returned.
pub fn localized_name<'a>(node: &'a TaxonomyNode, locale: &Locale) -> &'a str {
    localized_name_with_default(node, locale, &Locale::default())
}

/// [`localized_name`] with an explicit default locale.
pub fn localized_name_with_default<'a>(
    node: &'a TaxonomyNode,
    locale: &Locale,
    default: &Locale,
) -> &'a str {
    pick_name(&node.names, locale, default).unwrap_or(&node.id)
}

/// Display name of a stat field, falling back to its id.
pub fn localized_stat_name<'a>(field: &'a StatFieldSpec, locale: &Locale) -> &'a str {
    localized_stat_name_with_default(field, locale, &Locale::default())
}

pub fn localized_stat_name_with_default<'a>(
    field: &'a StatFieldSpec,
    locale: &Locale,
    default: &Locale,
) -> &'a str {
    pick_name(field.names(), locale, default).unwrap_or(field.id())
}

/// Display name of a stat option, falling back to its id.
pub fn localized_option_name<'a>(option: &'a StatOption, locale: &Locale) -> &'a str {
    localized_option_name_with_default(option, locale, &Locale::default())
}

pub fn localized_option_name_with_default<'a>(
    option: &'a StatOption,
    locale: &Locale,
    default: &Locale,
) -> &'a str {
    pick_name(&option.names, locale, default).unwrap_or(&option.id)
}

/// Localized names along `path`, stopping at the first id that does not
/// resolve.
pub fn path_names<'a>(root: &'a TaxonomyNode, path: &[&str], locale: &Locale) -> Vec<&'a str> {
    path_names_with_default(root, path, locale, &Locale::default())
}

/// [`path_names`] with an explicit default locale.
pub fn path_names_with_default<'a>(
    root: &'a TaxonomyNode,
    path: &[&str],
    locale: &Locale,
    default: &Locale,
) -> Vec<&'a str> {
    let mut names = Vec::with_capacity(path.len());
    let mut node = root;
    for id in path {
        let Some(child) = node.child(id) else {
            break;
        };
        names.push(localized_name_with_default(child, locale, default));
        node = child;
    }
    names
}

/// Lookup order: exact tag, language subtag, any regional variant of the
/// language, default locale, then whatever name exists first.
pub(crate) fn pick_name<'a>(
    names: &'a BTreeMap<String, String>,
    locale: &Locale,
    default: &Locale,
) -> Option<&'a str> {
    let usable = |key: &str| {
        names
            .get(key)
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
    };
    let regional = |language: &str| {
        let prefix = format!("{language}-");
        names
            .iter()
            .find(|(key, name)| key.starts_with(&prefix) && !name.trim().is_empty())
            .map(|(_, name)| name.as_str())
    };

    usable(locale.as_str())
        .or_else(|| usable(locale.primary()))
        .or_else(|| regional(locale.primary()))
        .or_else(|| usable(default.as_str()))
        .or_else(|| usable(default.primary()))
        .or_else(|| {
            names
                .values()
                .map(String::as_str)
                .find(|name| !name.trim().is_empty())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale(tag: &str) -> Locale {
        Locale::new(tag).unwrap()
    }

    #[test]
    fn regional_locale_falls_back_to_language() {
        let node = TaxonomyNode::new("dance")
            .with_name("es", "Danza")
            .with_name("en", "Dance");
        assert_eq!(localized_name(&node, &locale("es-MX")), "Danza");
    }

    #[test]
    fn language_matches_regional_name() {
        let node = TaxonomyNode::new("dj").with_name("es-mx", "DJ (MX)");
        assert_eq!(localized_name(&node, &locale("es")), "DJ (MX)");
    }

    #[test]
    fn nameless_node_renders_id() {
        let node = TaxonomyNode::new("mystery");
        assert_eq!(localized_name(&node, &locale("es")), "mystery");
    }

    #[test]
    fn explicit_default_locale_is_used() {
        let node = TaxonomyNode::new("x")
            .with_name("en", "Thing")
            .with_name("pt", "Coisa");
        assert_eq!(
            localized_name_with_default(&node, &locale("fr"), &locale("pt")),
            "Coisa"
        );
    }
}
