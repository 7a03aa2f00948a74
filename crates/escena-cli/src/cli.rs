//! CLI argument definitions for the escena developer tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use escena_model::{Domain, Locale};

#[derive(Parser)]
#[command(
    name = "escena",
    version,
    about = "Inspect escena taxonomies, filter facets and availability schedules",
    long_about = "Inspect the escena marketplace taxonomies.\n\n\
                  Lists category options, walks the filter cascade, searches \
                  localized names and decodes availability schedule strings."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Directory of `<domain>.toml` tables overriding the embedded ones.
    ///
    /// Falls back to the ESCENA_TAXONOMY_DIR environment variable.
    #[arg(long = "taxonomy-dir", value_name = "DIR", global = true)]
    pub taxonomy_dir: Option<PathBuf>,

    /// Locale for display names (es, es-MX, en, ...).
    #[arg(long, value_name = "LOCALE", default_value = "en", global = true)]
    pub locale: Locale,

    /// Locale used when a name is missing in `--locale`.
    #[arg(
        long = "default-locale",
        value_name = "LOCALE",
        default_value = "en",
        global = true
    )]
    pub default_locale: Locale,

    /// Print JSON instead of tables.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the categories of a domain.
    Categories(DomainArgs),

    /// Walk the filter cascade and print the options of every level.
    Options(OptionsArgs),

    /// Search localized names across every level of a domain.
    Search(SearchArgs),

    /// Show the extra tags and stat fields a role recommends.
    Suggest(SuggestArgs),

    /// Decode availability schedule strings.
    #[command(subcommand)]
    Schedule(ScheduleCommand),

    /// Load every taxonomy table and count its nodes per level.
    Check,
}

#[derive(Parser)]
pub struct DomainArgs {
    /// Taxonomy domain (artists, events, venues, gallery).
    #[arg(long, short, default_value = "artists")]
    pub domain: Domain,
}

#[derive(Parser)]
pub struct OptionsArgs {
    #[command(flatten)]
    pub domain: DomainArgs,

    #[arg(long, value_name = "ID")]
    pub category: Option<String>,

    /// Discipline (or subcategory) id under the category.
    #[arg(long, value_name = "ID")]
    pub discipline: Option<String>,

    #[arg(long, value_name = "ID")]
    pub role: Option<String>,

    #[arg(long, value_name = "ID")]
    pub specialization: Option<String>,

    /// Extra tag to toggle on (repeatable).
    #[arg(long = "tag", value_name = "ID")]
    pub tags: Vec<String>,
}

#[derive(Parser)]
pub struct SearchArgs {
    #[command(flatten)]
    pub domain: DomainArgs,

    /// Text to look for; case and accents are ignored.
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Stop after this many hits.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Parser)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub domain: DomainArgs,

    #[arg(value_name = "CATEGORY")]
    pub category: String,

    #[arg(value_name = "DISCIPLINE")]
    pub discipline: String,

    #[arg(value_name = "ROLE")]
    pub role: String,
}

#[derive(Subcommand)]
pub enum ScheduleCommand {
    /// Decode a display string and print its canonical form.
    Parse {
        /// Stored schedule text, e.g. "Lun-Vie 6pm-10pm".
        #[arg(value_name = "TEXT")]
        text: String,
    },
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
