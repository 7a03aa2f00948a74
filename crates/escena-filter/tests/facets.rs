//! Option lists produced by the facet builder over the embedded tables.

use escena_filter::{FacetBuilder, FacetOption};
use escena_model::{Domain, Locale, Selection, StatFieldSpec};
use escena_taxonomy::{TaxonomyStore, builtin_store};

fn store() -> &'static TaxonomyStore {
    builtin_store().expect("embedded tables load")
}

fn locale(tag: &str) -> Locale {
    Locale::new(tag).unwrap()
}

fn ids(options: &[FacetOption]) -> Vec<&str> {
    options.iter().map(|option| option.id.as_str()).collect()
}

fn builder(domain: Domain, tag: &str) -> FacetBuilder<'static> {
    FacetBuilder::new(store(), domain, locale(tag))
}

#[test]
fn gallery_category_options_en() {
    let options = builder(Domain::Gallery, "en").options_for_category();
    insta::assert_json_snapshot!(options);
}

#[test]
fn category_options_lead_with_localized_all() {
    let options = builder(Domain::Artists, "es").options_for_category();
    assert_eq!(options[0].id, "all");
    assert_eq!(options[0].label, "Todos");
    assert!(options[0].is_all());
    assert_eq!(
        ids(&options[1..]),
        vec!["music", "visual", "performing", "audiovisual", "literature"]
    );
}

#[test]
fn discipline_options_empty_while_category_is_all() {
    let builder = builder(Domain::Artists, "en");
    assert!(builder.options_for_discipline(&Selection::default()).is_empty());
}

#[test]
fn discipline_options_follow_category() {
    let builder = builder(Domain::Artists, "en");
    let selection = builder.apply_category_change(&Selection::default(), "visual");
    let options = builder.options_for_discipline(&selection);
    assert_eq!(options[0].id, "all");
    assert!(ids(&options).contains(&"painting"));
    assert!(ids(&options).contains(&"street-art"));
    assert!(!ids(&options).contains(&"strings"));
}

#[test]
fn leaf_category_offers_no_disciplines() {
    let builder = builder(Domain::Gallery, "en");
    let selection = builder.apply_category_change(&Selection::default(), "digital");
    assert_eq!(selection.category.id(), Some("digital"));
    assert!(builder.options_for_discipline(&selection).is_empty());
}

#[test]
fn role_options_require_concrete_discipline() {
    let builder = builder(Domain::Artists, "en");
    let music = builder.apply_category_change(&Selection::default(), "music");
    assert!(builder.options_for_role(&music).is_empty());

    let strings = builder.apply_discipline_change(&music, "strings");
    assert_eq!(
        ids(&builder.options_for_role(&strings)),
        vec!["session-musician", "soloist", "string-teacher"]
    );
}

#[test]
fn muralist_is_not_a_painting_role() {
    let builder = builder(Domain::Artists, "en");
    let visual = builder.apply_category_change(&Selection::default(), "visual");
    let painting = builder.apply_discipline_change(&visual, "painting");
    assert_eq!(
        ids(&builder.options_for_role(&painting)),
        vec!["portraitist", "landscape-painter", "abstract-painter"]
    );

    let street = builder.apply_discipline_change(&visual, "street-art");
    assert!(ids(&builder.options_for_role(&street)).contains(&"muralist"));
}

#[test]
fn specialization_options_follow_role() {
    let builder = builder(Domain::Artists, "en");
    let selection = builder.apply_category_change(&Selection::default(), "performing");
    let selection = builder.apply_discipline_change(&selection, "dance");
    assert!(builder.options_for_specialization(&selection).is_empty());

    let dancer = builder.apply_role_change(&selection, Some("dancer"));
    assert_eq!(
        ids(&builder.options_for_specialization(&dancer)),
        vec!["ballet", "contemporary", "salsa", "urban"]
    );
}

#[test]
fn session_musician_annotations() {
    let builder = builder(Domain::Artists, "es");
    let selection = builder.apply_category_change(&Selection::default(), "music");
    let selection = builder.apply_discipline_change(&selection, "strings");
    let selection = builder.apply_role_change(&selection, Some("session-musician"));

    assert_eq!(
        ids(&builder.options_for_extra_tags(&selection)),
        vec!["sound-engineering", "music-production"]
    );
    let fields: Vec<_> = builder
        .stat_fields(&selection)
        .iter()
        .map(StatFieldSpec::id)
        .collect();
    assert_eq!(fields, vec!["years-experience", "instruments"]);
}

#[test]
fn roles_without_annotations_offer_nothing_extra() {
    let builder = builder(Domain::Artists, "en");
    let selection = builder.apply_category_change(&Selection::default(), "music");
    let selection = builder.apply_discipline_change(&selection, "strings");
    let selection = builder.apply_role_change(&selection, Some("soloist"));
    assert!(builder.options_for_extra_tags(&selection).is_empty());
    assert!(builder.stat_fields(&selection).is_empty());
}

#[test]
fn two_level_domains_stop_at_discipline() {
    let builder = builder(Domain::Events, "en");
    let selection = builder.apply_category_change(&Selection::default(), "social");
    assert_eq!(
        ids(&builder.options_for_discipline(&selection)),
        vec!["all", "wedding", "birthday", "quinceanera", "graduation"]
    );
    let wedding = builder.apply_discipline_change(&selection, "wedding");
    assert!(builder.options_for_role(&wedding).is_empty());
}

#[test]
fn missing_locale_name_falls_back() {
    // quinceanera only carries a Spanish name
    let builder = builder(Domain::Events, "en");
    let selection = builder.apply_category_change(&Selection::default(), "social");
    let options = builder.options_for_discipline(&selection);
    let quince = options
        .iter()
        .find(|option| option.id == "quinceanera")
        .unwrap();
    assert_eq!(quince.label, "Quinceañera");
}

#[test]
fn builder_over_custom_store() {
    use escena_model::TaxonomyNode;

    let store = TaxonomyStore::from_roots([(
        Domain::Venues,
        TaxonomyNode::new("venues")
            .with_child(TaxonomyNode::new("outdoor").with_name("en", "Outdoor")),
    )])
    .unwrap();
    let builder = FacetBuilder::new(&store, Domain::Venues, locale("en"));
    assert_eq!(ids(&builder.options_for_category()), vec!["all", "outdoor"]);
    assert_eq!(builder.domain(), Domain::Venues);
}
