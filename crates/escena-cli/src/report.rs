//! Data behind each command, kept apart from terminal rendering so it can be
//! printed as a table, emitted as JSON, or asserted on in tests.

use escena_filter::{FacetBuilder, FacetOption, active_filter_count};
use escena_model::{Domain, Locale, Selection, StatFieldSpec};
use escena_schedule::{ScheduleShape, WeeklySchedule};
use escena_taxonomy::{
    TaxonomyStore, find_by_id, localized_option_name_with_default,
    localized_stat_name_with_default, path_names_with_default, search_with_default,
    suggested_children, suggested_stat_fields,
};
use serde::Serialize;

/// Raw ids to push through the cascade, top level first.
#[derive(Debug, Clone, Default)]
pub struct FacetRequest {
    pub category: Option<String>,
    pub discipline: Option<String>,
    pub role: Option<String>,
    pub specialization: Option<String>,
    pub tags: Vec<String>,
}

/// Options of one taxonomy level.
#[derive(Debug, Clone, Serialize)]
pub struct FacetLevel {
    pub level: &'static str,
    pub selected: Option<String>,
    pub options: Vec<FacetOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FacetReport {
    pub domain: Domain,
    pub locale: Locale,
    /// The selection after every requested change went through the builder.
    pub selection: Selection,
    pub levels: Vec<FacetLevel>,
    pub extra_tags: Vec<FacetOption>,
    pub stats: Vec<StatRow>,
    pub active_filters: usize,
}

/// A stat field flattened for display.
#[derive(Debug, Clone, Serialize)]
pub struct StatRow {
    pub id: String,
    pub name: String,
    pub kind: &'static str,
    /// Bounds and unit of a number, or the option names of a select.
    pub detail: String,
}

impl StatRow {
    fn from_field(field: &StatFieldSpec, locale: &Locale, default: &Locale) -> Self {
        Self {
            id: field.id().to_string(),
            name: localized_stat_name_with_default(field, locale, default).to_string(),
            kind: field.kind(),
            detail: describe_field(field, locale, default),
        }
    }
}

fn describe_field(field: &StatFieldSpec, locale: &Locale, default: &Locale) -> String {
    match field {
        StatFieldSpec::Number { unit, min, max, .. } => {
            let bound = |value: &Option<f64>| {
                value.as_ref().map(ToString::to_string).unwrap_or_default()
            };
            let range = format!("{}..{}", bound(min), bound(max));
            match unit {
                Some(unit) => format!("{range} {unit}"),
                None => range,
            }
        }
        StatFieldSpec::SingleSelect { .. } | StatFieldSpec::MultiSelect { .. } => field
            .options()
            .iter()
            .map(|option| localized_option_name_with_default(option, locale, default))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Apply `request` level by level and collect what the panel would show.
pub fn facet_report(
    store: &TaxonomyStore,
    domain: Domain,
    locale: &Locale,
    request: &FacetRequest,
) -> FacetReport {
    let builder = FacetBuilder::new(store, domain, locale.clone());
    let mut selection = Selection::default();
    if let Some(category) = &request.category {
        selection = builder.apply_category_change(&selection, category);
    }
    if let Some(discipline) = &request.discipline {
        selection = builder.apply_discipline_change(&selection, discipline);
    }
    if request.role.is_some() {
        selection = builder.apply_role_change(&selection, request.role.as_deref());
    }
    if request.specialization.is_some() {
        selection =
            builder.apply_specialization_change(&selection, request.specialization.as_deref());
    }
    for tag in &request.tags {
        selection = builder.toggle_extra_tag(&selection, tag);
    }

    let levels = domain
        .levels()
        .iter()
        .enumerate()
        .map(|(index, &level)| {
            let (selected, options) = match index {
                0 => (
                    Some(selection.category.to_string()),
                    builder.options_for_category(),
                ),
                1 => (
                    Some(selection.discipline.to_string()),
                    builder.options_for_discipline(&selection),
                ),
                2 => (
                    selection.role.clone(),
                    builder.options_for_role(&selection),
                ),
                _ => (
                    selection.specialization.clone(),
                    builder.options_for_specialization(&selection),
                ),
            };
            FacetLevel {
                level,
                selected,
                options,
            }
        })
        .collect();

    FacetReport {
        domain,
        locale: locale.clone(),
        extra_tags: builder.options_for_extra_tags(&selection),
        stats: builder
            .stat_fields(&selection)
            .iter()
            .map(|field| StatRow::from_field(field, locale, store.default_locale()))
            .collect(),
        active_filters: active_filter_count(&selection),
        levels,
        selection,
    }
}

/// One search hit, flattened.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRow {
    pub level: &'static str,
    /// Id path joined with `/`.
    pub path: String,
    /// Localized names along the path.
    pub breadcrumb: String,
}

pub fn search_rows(
    store: &TaxonomyStore,
    domain: Domain,
    query: &str,
    locale: &Locale,
    limit: Option<usize>,
) -> Vec<SearchRow> {
    let root = store.root(domain);
    let default = store.default_locale();
    search_with_default(root, query, locale, default)
        .take(limit.unwrap_or(usize::MAX))
        .map(|hit| SearchRow {
            level: domain.levels().get(hit.level()).copied().unwrap_or("node"),
            path: hit.path.join("/"),
            breadcrumb: path_names_with_default(root, &hit.path, locale, default).join(" > "),
        })
        .collect()
}

/// What a role recommends next to itself.
#[derive(Debug, Clone, Serialize)]
pub struct RoleSuggestions {
    /// Whether the role path exists at all.
    pub found: bool,
    pub breadcrumb: String,
    pub tags: Vec<FacetOption>,
    pub stats: Vec<StatRow>,
}

pub fn role_suggestions(
    store: &TaxonomyStore,
    domain: Domain,
    path: [&str; 3],
    locale: &Locale,
) -> RoleSuggestions {
    let root = store.root(domain);
    let default = store.default_locale();
    let [category, discipline, role] = path;
    RoleSuggestions {
        found: find_by_id(root, &path).is_some(),
        breadcrumb: path_names_with_default(root, &path, locale, default).join(" > "),
        tags: suggested_children(root, category, discipline, role)
            .iter()
            .map(|node| FacetOption::from_node(node, locale, default))
            .collect(),
        stats: suggested_stat_fields(root, category, discipline, role)
            .iter()
            .map(|field| StatRow::from_field(field, locale, default))
            .collect(),
    }
}

/// A decoded schedule string next to its canonical re-encoding.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleReport {
    pub input: String,
    pub shape: ScheduleShape,
    pub canonical: String,
    pub schedule: WeeklySchedule,
}

pub fn schedule_report(text: &str) -> ScheduleReport {
    let shape = ScheduleShape::classify(text);
    let schedule = shape.to_schedule();
    ScheduleReport {
        input: text.to_string(),
        canonical: schedule.to_display_string(),
        shape,
        schedule,
    }
}
