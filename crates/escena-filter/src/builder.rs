//! The generic facet builder.

use escena_model::{Choice, Domain, Locale, Selection, StatFieldSpec, StatValue, TaxonomyNode};
use escena_taxonomy::TaxonomyStore;
use tracing::debug;

use crate::options::FacetOption;

/// Option lists and selection transitions for one domain.
///
/// The builder only borrows the immutable taxonomy; every transition returns
/// a new [`Selection`] and leaves its input untouched.
#[derive(Debug, Clone)]
pub struct FacetBuilder<'a> {
    root: &'a TaxonomyNode,
    domain: Domain,
    locale: Locale,
    default_locale: Locale,
}

impl<'a> FacetBuilder<'a> {
    pub fn new(store: &'a TaxonomyStore, domain: Domain, locale: Locale) -> Self {
        Self {
            root: store.root(domain),
            domain,
            locale,
            default_locale: store.default_locale().clone(),
        }
    }

    /// Builder over a tree that is not held in a store.
    pub fn for_root(root: &'a TaxonomyNode, domain: Domain, locale: Locale) -> Self {
        Self {
            root,
            domain,
            locale,
            default_locale: Locale::default(),
        }
    }

    pub fn domain(&self) -> Domain {
        self.domain
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    // ------------------------------------------------------------------
    // Resolution of the current selection
    // ------------------------------------------------------------------

    fn category_node(&self, selection: &Selection) -> Option<&'a TaxonomyNode> {
        let root = self.root;
        selection.category.id().and_then(|id| root.child(id))
    }

    fn discipline_node(&self, selection: &Selection) -> Option<&'a TaxonomyNode> {
        let category = self.category_node(selection)?;
        selection.discipline.id().and_then(|id| category.child(id))
    }

    fn role_node(&self, selection: &Selection) -> Option<&'a TaxonomyNode> {
        let discipline = self.discipline_node(selection)?;
        selection.role.as_deref().and_then(|id| discipline.child(id))
    }

    fn options(&self, nodes: &[TaxonomyNode]) -> Vec<FacetOption> {
        nodes
            .iter()
            .map(|node| FacetOption::from_node(node, &self.locale, &self.default_locale))
            .collect()
    }

    fn with_all(&self, nodes: &[TaxonomyNode]) -> Vec<FacetOption> {
        // A leaf has no "all of my children" entry.
        if nodes.is_empty() {
            return Vec::new();
        }
        let mut options = Vec::with_capacity(nodes.len() + 1);
        options.push(FacetOption::all(&self.locale, &self.default_locale));
        options.extend(self.options(nodes));
        options
    }

    // ------------------------------------------------------------------
    // Option lists
    // ------------------------------------------------------------------

    /// Categories, always led by the synthetic "all" entry.
    pub fn options_for_category(&self) -> Vec<FacetOption> {
        let mut options = vec![FacetOption::all(&self.locale, &self.default_locale)];
        options.extend(self.options(&self.root.children));
        options
    }

    /// Disciplines of the selected category, led by "all".
    ///
    /// Empty while the category is "all", unknown, or a leaf.
    pub fn options_for_discipline(&self, selection: &Selection) -> Vec<FacetOption> {
        self.category_node(selection)
            .map(|category| self.with_all(&category.children))
            .unwrap_or_default()
    }

    /// Roles of the selected discipline. Empty unless the discipline is
    /// concrete and found.
    pub fn options_for_role(&self, selection: &Selection) -> Vec<FacetOption> {
        self.discipline_node(selection)
            .map(|discipline| self.options(&discipline.children))
            .unwrap_or_default()
    }

    /// Specializations of the selected role. Empty unless the role is set
    /// and found.
    pub fn options_for_specialization(&self, selection: &Selection) -> Vec<FacetOption> {
        self.role_node(selection)
            .map(|role| self.options(&role.children))
            .unwrap_or_default()
    }

    /// Extra tags the selected role recommends.
    pub fn options_for_extra_tags(&self, selection: &Selection) -> Vec<FacetOption> {
        self.role_node(selection)
            .map(|role| self.options(&role.suggested))
            .unwrap_or_default()
    }

    /// Stat fields the selected role recommends.
    pub fn stat_fields(&self, selection: &Selection) -> &'a [StatFieldSpec] {
        self.role_node(selection)
            .map(|role| role.stats.as_slice())
            .unwrap_or(&[])
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Select a category (or `"all"`); resets every descendant dimension.
    pub fn apply_category_change(&self, selection: &Selection, category_id: &str) -> Selection {
        let mut choice = Choice::from_raw(category_id);
        if let Some(id) = choice.id()
            && self.root.child(id).is_none()
        {
            debug!(domain = %self.domain, category = id, "unknown category, using all");
            choice = Choice::All;
        }
        selection.with_category(choice)
    }

    /// Select a discipline (or `"all"`) under the current category; resets
    /// role, specialization, tags and stats.
    pub fn apply_discipline_change(&self, selection: &Selection, discipline_id: &str) -> Selection {
        let mut choice = Choice::from_raw(discipline_id);
        if let Some(id) = choice.id() {
            let valid = self
                .category_node(selection)
                .is_some_and(|category| category.child(id).is_some());
            if !valid {
                debug!(
                    domain = %self.domain,
                    category = %selection.category,
                    discipline = id,
                    "discipline outside selected category, using all"
                );
                choice = Choice::All;
            }
        }
        selection.with_discipline(choice)
    }

    /// Select or clear the role; resets specialization, tags and stats.
    pub fn apply_role_change(&self, selection: &Selection, role_id: Option<&str>) -> Selection {
        let role = role_id.map(str::trim).filter(|id| !id.is_empty());
        let role = role.and_then(|id| {
            let found = self
                .discipline_node(selection)
                .is_some_and(|discipline| discipline.child(id).is_some());
            if !found {
                debug!(
                    domain = %self.domain,
                    discipline = %selection.discipline,
                    role = id,
                    "role outside selected discipline, clearing"
                );
            }
            found.then(|| id.to_string())
        });
        selection.with_role(role)
    }

    /// Select or clear the specialization under the current role.
    pub fn apply_specialization_change(
        &self,
        selection: &Selection,
        specialization_id: Option<&str>,
    ) -> Selection {
        let specialization = specialization_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .filter(|id| {
                self.role_node(selection)
                    .is_some_and(|role| role.child(id).is_some())
            })
            .map(str::to_string);
        let mut next = selection.clone();
        next.specialization = specialization;
        next
    }

    /// Add or remove one of the role's suggested tags.
    ///
    /// Tags the current role does not suggest are ignored.
    pub fn toggle_extra_tag(&self, selection: &Selection, tag_id: &str) -> Selection {
        let mut next = selection.clone();
        if next.extra_tags.remove(tag_id) {
            return next;
        }
        let suggested = self
            .role_node(selection)
            .is_some_and(|role| role.suggested.iter().any(|node| node.id == tag_id));
        if suggested {
            next.extra_tags.insert(tag_id.to_string());
        } else {
            debug!(domain = %self.domain, tag = tag_id, "tag not suggested by role, ignoring");
        }
        next
    }

    /// Set or clear a stat filter.
    ///
    /// `None` or an empty value clears it. A value whose type or range does
    /// not match the role's field spec leaves the selection unchanged.
    pub fn update_stat(
        &self,
        selection: &Selection,
        stat_id: &str,
        value: Option<StatValue>,
    ) -> Selection {
        let mut next = selection.clone();
        let Some(value) = value.filter(|value| !value.is_empty()) else {
            next.stats.remove(stat_id);
            return next;
        };
        let Some(field) = self
            .stat_fields(selection)
            .iter()
            .find(|field| field.id() == stat_id)
        else {
            debug!(domain = %self.domain, stat = stat_id, "stat not offered by role, ignoring");
            return next;
        };
        if field.accepts(&value) {
            next.stats.insert(stat_id.to_string(), value);
        } else {
            debug!(
                domain = %self.domain,
                stat = stat_id,
                kind = field.kind(),
                "stat value does not fit field, ignoring"
            );
        }
        next
    }

    /// Re-check a selection restored from storage, top-down, dropping every
    /// dimension whose ancestor no longer resolves.
    pub fn revalidate(&self, selection: &Selection) -> Selection {
        let Some(category) = self.category_node(selection) else {
            return selection.with_category(Choice::All);
        };
        let Some(discipline) = selection.discipline.id().and_then(|id| category.child(id)) else {
            return selection.with_discipline(Choice::All);
        };
        let Some(role) = selection.role.as_deref().and_then(|id| discipline.child(id)) else {
            return selection.with_role(None);
        };

        let mut next = selection.clone();
        if let Some(specialization) = next.specialization.as_deref()
            && role.child(specialization).is_none()
        {
            next.specialization = None;
        }
        next.extra_tags
            .retain(|tag| role.suggested.iter().any(|node| &node.id == tag));
        next.stats.retain(|id, value| {
            role.stats
                .iter()
                .any(|field| field.id() == id && field.accepts(value))
        });
        next
    }

    /// The "no filter" selection.
    pub fn reset(&self) -> Selection {
        Selection::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> TaxonomyNode {
        TaxonomyNode::new("artists").with_child(
            TaxonomyNode::new("music").with_child(
                TaxonomyNode::new("strings")
                    .with_child(TaxonomyNode::new("soloist"))
                    .with_child(TaxonomyNode::new("session")),
            ),
        )
    }

    #[test]
    fn stale_category_degrades_to_all() {
        let root = tree();
        let builder = FacetBuilder::for_root(&root, Domain::Artists, Locale::default());
        let next = builder.apply_category_change(&Selection::default(), "sculpture");
        assert_eq!(next.category, Choice::All);
    }

    #[test]
    fn role_requires_concrete_discipline() {
        let root = tree();
        let builder = FacetBuilder::for_root(&root, Domain::Artists, Locale::default());
        let selection = builder.apply_category_change(&Selection::default(), "music");
        let next = builder.apply_role_change(&selection, Some("soloist"));
        assert!(next.role.is_none());
    }
}
