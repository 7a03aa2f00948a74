use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info_span};

use escena_cli::report::{
    FacetRequest, facet_report, role_suggestions, schedule_report, search_rows,
};
use escena_taxonomy::{StoreConfig, TaxonomyStore};

use crate::cli::{Cli, Command, OptionsArgs, ScheduleCommand, SearchArgs, SuggestArgs};
use crate::summary::{
    print_check, print_facets, print_options, print_schedule, print_search, print_suggestions,
};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Command::Categories(args) => run_categories(cli, args.domain),
        Command::Options(args) => run_options(cli, args),
        Command::Search(args) => run_search(cli, args),
        Command::Suggest(args) => run_suggest(cli, args),
        Command::Schedule(ScheduleCommand::Parse { text }) => run_schedule_parse(cli, text),
        Command::Check => run_check(cli),
    }
}

fn load_store(cli: &Cli) -> Result<TaxonomyStore> {
    let config = StoreConfig::from_env()
        .with_directory(cli.taxonomy_dir.clone())
        .with_default_locale(cli.default_locale.clone());
    debug!(source = ?config.source, "loading taxonomy store");
    TaxonomyStore::load(&config).context("load taxonomy tables")
}

fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{json}");
    Ok(())
}

fn run_categories(cli: &Cli, domain: escena_model::Domain) -> Result<()> {
    let store = load_store(cli)?;
    let request = FacetRequest::default();
    let report = facet_report(&store, domain, &cli.locale, &request);
    let categories = report
        .levels
        .into_iter()
        .next()
        .map(|level| level.options)
        .unwrap_or_default();
    if cli.json {
        return emit_json(&categories);
    }
    print_options(&categories);
    Ok(())
}

fn run_options(cli: &Cli, args: &OptionsArgs) -> Result<()> {
    let store = load_store(cli)?;
    let span = info_span!("options", domain = %args.domain.domain);
    let _guard = span.enter();
    let request = FacetRequest {
        category: args.category.clone(),
        discipline: args.discipline.clone(),
        role: args.role.clone(),
        specialization: args.specialization.clone(),
        tags: args.tags.clone(),
    };
    let report = facet_report(&store, args.domain.domain, &cli.locale, &request);
    if cli.json {
        return emit_json(&report);
    }
    print_facets(&report);
    Ok(())
}

fn run_search(cli: &Cli, args: &SearchArgs) -> Result<()> {
    let store = load_store(cli)?;
    let rows = search_rows(
        &store,
        args.domain.domain,
        &args.query,
        &cli.locale,
        args.limit,
    );
    if cli.json {
        return emit_json(&rows);
    }
    print_search(&rows);
    Ok(())
}

fn run_suggest(cli: &Cli, args: &SuggestArgs) -> Result<()> {
    let store = load_store(cli)?;
    let path = [
        args.category.as_str(),
        args.discipline.as_str(),
        args.role.as_str(),
    ];
    let suggestions = role_suggestions(&store, args.domain.domain, path, &cli.locale);
    if !suggestions.found {
        anyhow::bail!(
            "no role {} in the {} taxonomy",
            path.join("/"),
            args.domain.domain
        );
    }
    if cli.json {
        return emit_json(&suggestions);
    }
    print_suggestions(&suggestions);
    Ok(())
}

fn run_schedule_parse(cli: &Cli, text: &str) -> Result<()> {
    let report = schedule_report(text);
    if cli.json {
        return emit_json(&report);
    }
    print_schedule(&report);
    Ok(())
}

fn run_check(cli: &Cli) -> Result<()> {
    let store = load_store(cli)?;
    let report = store.check();
    if cli.json {
        return emit_json(&report);
    }
    print_check(&report);
    Ok(())
}
