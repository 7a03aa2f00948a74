use escena_model::{DEFAULT_MAX_DISTANCE_KM, Selection};

/// Number of restrictions a selection applies, for the "Filters (3)" badge.
///
/// Each concrete level counts once, every extra tag and stat counts once, and
/// date, price and distance count when they differ from their defaults.
pub fn active_filter_count(selection: &Selection) -> usize {
    let levels = [
        !selection.category.is_all(),
        !selection.discipline.is_all(),
        selection.role.is_some(),
        selection.specialization.is_some(),
        selection.date.is_some(),
        !selection.price.is_default(),
        selection.max_distance_km != DEFAULT_MAX_DISTANCE_KM,
    ];
    levels.iter().filter(|active| **active).count()
        + selection.extra_tags.len()
        + selection.stats.len()
}
