//! Selection transitions: cascade resets, stale ids, tags, stats and counts.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use escena_filter::{FacetBuilder, active_filter_count};
use escena_model::{Choice, Domain, Locale, PriceRange, Selection, StatValue};
use escena_taxonomy::{TaxonomyStore, builtin_store, children_of};
use proptest::prelude::*;

fn store() -> &'static TaxonomyStore {
    builtin_store().expect("embedded tables load")
}

fn artists() -> FacetBuilder<'static> {
    FacetBuilder::new(store(), Domain::Artists, Locale::default())
}

fn session_musician(builder: &FacetBuilder<'_>) -> Selection {
    let selection = builder.apply_category_change(&Selection::default(), "music");
    let selection = builder.apply_discipline_change(&selection, "strings");
    builder.apply_role_change(&selection, Some("session-musician"))
}

fn dancer(builder: &FacetBuilder<'_>) -> Selection {
    let selection = builder.apply_category_change(&Selection::default(), "performing");
    let selection = builder.apply_discipline_change(&selection, "dance");
    builder.apply_role_change(&selection, Some("dancer"))
}

fn multi(values: &[&str]) -> StatValue {
    StatValue::Multi(values.iter().map(|v| (*v).to_string()).collect())
}

#[test]
fn category_change_resets_everything_below() {
    let builder = artists();
    let selection = session_musician(&builder);
    let selection = builder.apply_specialization_change(&selection, Some("studio"));
    let selection = builder.toggle_extra_tag(&selection, "sound-engineering");
    let years = Some(StatValue::Number(5.0));
    let selection = builder.update_stat(&selection, "years-experience", years);
    assert_eq!(active_filter_count(&selection), 6);

    let next = builder.apply_category_change(&selection, "visual");
    assert_eq!(next.category, Choice::Id("visual".to_string()));
    assert_eq!(next.discipline, Choice::All);
    assert!(next.role.is_none());
    assert!(next.specialization.is_none());
    assert!(next.extra_tags.is_empty());
    assert!(next.stats.is_empty());
    // the previous selection is untouched
    assert_eq!(selection.specialization.as_deref(), Some("studio"));
}

#[test]
fn discipline_change_keeps_category() {
    let builder = artists();
    let selection = session_musician(&builder);
    let next = builder.apply_discipline_change(&selection, "voice");
    assert_eq!(next.category.id(), Some("music"));
    assert_eq!(next.discipline.id(), Some("voice"));
    assert!(next.role.is_none());
}

#[test]
fn role_change_always_resets_dependents() {
    let builder = artists();
    let selection = session_musician(&builder);
    let selection = builder.toggle_extra_tag(&selection, "music-production");
    let same = builder.apply_role_change(&selection, Some("session-musician"));
    assert!(same.extra_tags.is_empty());

    let cleared = builder.apply_role_change(&selection, None);
    assert_eq!(cleared.discipline.id(), Some("strings"));
    assert!(cleared.role.is_none());
}

#[test]
fn discipline_from_another_category_degrades_to_all() {
    let builder = artists();
    let music = builder.apply_category_change(&Selection::default(), "music");
    let next = builder.apply_discipline_change(&music, "painting");
    assert_eq!(next.discipline, Choice::All);
}

#[test]
fn discipline_without_category_degrades_to_all() {
    let builder = artists();
    let next = builder.apply_discipline_change(&Selection::default(), "strings");
    assert_eq!(next.discipline, Choice::All);
}

#[test]
fn muralist_cannot_be_picked_under_painting() {
    let builder = artists();
    let selection = builder.apply_category_change(&Selection::default(), "visual");
    let painting = builder.apply_discipline_change(&selection, "painting");
    assert!(builder.apply_role_change(&painting, Some("muralist")).role.is_none());

    let street = builder.apply_discipline_change(&selection, "street-art");
    let muralist = builder.apply_role_change(&street, Some("muralist"));
    assert_eq!(muralist.role.as_deref(), Some("muralist"));
    // the recommendation points back at painting without moving the role
    let tags = builder.options_for_extra_tags(&muralist);
    assert_eq!(tags[0].id, "painting");
}

#[test]
fn specialization_must_belong_to_role() {
    let builder = artists();
    let selection = session_musician(&builder);
    let next = builder.apply_specialization_change(&selection, Some("flamenco"));
    assert!(next.specialization.is_none());
    let next = builder.apply_specialization_change(&selection, Some("live"));
    assert_eq!(next.specialization.as_deref(), Some("live"));
    let next = builder.apply_specialization_change(&next, None);
    assert!(next.specialization.is_none());
}

#[test]
fn extra_tags_toggle_and_ignore_unknown() {
    let builder = artists();
    let selection = session_musician(&builder);
    let on = builder.toggle_extra_tag(&selection, "sound-engineering");
    assert!(on.extra_tags.contains("sound-engineering"));
    let off = builder.toggle_extra_tag(&on, "sound-engineering");
    assert!(off.extra_tags.is_empty());
    let unknown = builder.toggle_extra_tag(&selection, "lighting");
    assert!(unknown.extra_tags.is_empty());
}

#[test]
fn stat_values_are_checked_against_fields() {
    let builder = artists();
    let selection = dancer(&builder);

    let tall = builder.update_stat(&selection, "height", Some(StatValue::Number(180.0)));
    assert_eq!(tall.stats.get("height"), Some(&StatValue::Number(180.0)));

    let giant = builder.update_stat(&selection, "height", Some(StatValue::Number(400.0)));
    assert!(giant.stats.is_empty());

    let wrong_type = builder.update_stat(&selection, "height", Some(multi(&["ballet"])));
    assert!(wrong_type.stats.is_empty());

    let styles = multi(&["salsa", "urban"]);
    let styles = builder.update_stat(&selection, "dance-styles", Some(styles));
    assert_eq!(styles.stats.len(), 1);

    let tango = Some(multi(&["tango"]));
    let unknown_option = builder.update_stat(&selection, "dance-styles", tango);
    assert!(unknown_option.stats.is_empty());

    let tenor = Some(StatValue::Single("tenor".to_string()));
    let not_offered = builder.update_stat(&selection, "vocal-range", tenor);
    assert!(not_offered.stats.is_empty());
}

#[test]
fn clearing_a_stat_removes_it() {
    let builder = artists();
    let selection = dancer(&builder);
    let selection = builder.update_stat(&selection, "dance-styles", Some(multi(&["ballet"])));
    assert_eq!(active_filter_count(&selection), 4);

    let empty = builder.update_stat(&selection, "dance-styles", Some(multi(&[])));
    assert!(empty.stats.is_empty());
    let none = builder.update_stat(&selection, "dance-styles", None);
    assert!(none.stats.is_empty());
}

#[test]
fn revalidate_drops_stale_levels() {
    let builder = artists();
    let stale = Selection {
        category: Choice::Id("visual".to_string()),
        discipline: Choice::Id("painting".to_string()),
        role: Some("muralist".to_string()),
        specialization: Some("oil".to_string()),
        extra_tags: BTreeSet::from(["painting".to_string()]),
        ..Selection::default()
    };
    let next = builder.revalidate(&stale);
    assert_eq!(next.discipline.id(), Some("painting"));
    assert!(next.role.is_none());
    assert!(next.specialization.is_none());
    assert!(next.extra_tags.is_empty());
}

#[test]
fn revalidate_keeps_valid_selection() {
    let builder = artists();
    let selection = session_musician(&builder);
    let selection = builder.apply_specialization_change(&selection, Some("studio"));
    let selection = builder.toggle_extra_tag(&selection, "music-production");
    assert_eq!(builder.revalidate(&selection), selection);
}

#[test]
fn revalidate_unknown_category_resets() {
    let builder = artists();
    let stale = Selection {
        category: Choice::Id("sculpture".to_string()),
        discipline: Choice::Id("bronze".to_string()),
        max_distance_km: 20,
        ..Selection::default()
    };
    let next = builder.revalidate(&stale);
    assert_eq!(next.category, Choice::All);
    assert_eq!(next.discipline, Choice::All);
    // non-taxonomy filters survive
    assert_eq!(next.max_distance_km, 20);
}

#[test]
fn count_includes_ambient_filters() {
    let selection = Selection {
        date: NaiveDate::from_ymd_opt(2026, 11, 20),
        price: PriceRange {
            min: 0,
            max: Some(500),
        },
        max_distance_km: 50,
        ..Selection::default()
    };
    assert_eq!(active_filter_count(&selection), 2);
    assert_eq!(active_filter_count(&artists().reset()), 0);
}

fn arbitrary_id() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("all".to_string()),
        Just("music".to_string()),
        Just("visual".to_string()),
        Just("strings".to_string()),
        Just("painting".to_string()),
        Just("street-art".to_string()),
        Just("session-musician".to_string()),
        Just("muralist".to_string()),
        Just("dancer".to_string()),
        "[a-z-]{1,12}",
    ]
}

#[derive(Debug, Clone)]
enum Edit {
    Category(String),
    Discipline(String),
    Role(Option<String>),
    Specialization(Option<String>),
    Tag(String),
}

fn arbitrary_edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        arbitrary_id().prop_map(Edit::Category),
        arbitrary_id().prop_map(Edit::Discipline),
        proptest::option::of(arbitrary_id()).prop_map(Edit::Role),
        proptest::option::of(arbitrary_id()).prop_map(Edit::Specialization),
        arbitrary_id().prop_map(Edit::Tag),
    ]
}

proptest! {
    #[test]
    fn every_edit_sequence_keeps_the_cascade(
        edits in proptest::collection::vec(arbitrary_edit(), 0..24),
    ) {
        let builder = artists();
        let root = store().root(Domain::Artists);
        let mut selection = Selection::default();
        for edit in edits {
            selection = match edit {
                Edit::Category(id) => builder.apply_category_change(&selection, &id),
                Edit::Discipline(id) => builder.apply_discipline_change(&selection, &id),
                Edit::Role(id) => builder.apply_role_change(&selection, id.as_deref()),
                Edit::Specialization(id) => {
                    builder.apply_specialization_change(&selection, id.as_deref())
                }
                Edit::Tag(id) => builder.toggle_extra_tag(&selection, &id),
            };

            // each concrete level is a child of the level above
            let path = selection.path();
            prop_assert!(escena_taxonomy::find_by_id(root, &path).is_some());
            if selection.category.is_all() {
                prop_assert!(selection.discipline.is_all());
            }
            if selection.discipline.is_all() {
                prop_assert!(selection.role.is_none());
            }
            if selection.role.is_none() {
                prop_assert!(selection.specialization.is_none());
                prop_assert!(selection.extra_tags.is_empty());
            }
            // revalidating a cascade-built selection changes nothing
            prop_assert_eq!(builder.revalidate(&selection), selection.clone());
        }
    }

    #[test]
    fn role_options_are_children_of_discipline(
        category in arbitrary_id(),
        discipline in arbitrary_id(),
    ) {
        let builder = artists();
        let root = store().root(Domain::Artists);
        let selection = builder.apply_category_change(&Selection::default(), &category);
        let selection = builder.apply_discipline_change(&selection, &discipline);
        let options = builder.options_for_role(&selection);
        let children = children_of(root, &selection.path());
        for option in &options {
            prop_assert!(children.iter().any(|child| child.id == option.id));
        }
        if selection.discipline.is_all() {
            prop_assert!(options.is_empty());
        }
    }
}
