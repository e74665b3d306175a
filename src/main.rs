use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use publications_directory::config::{find_config_file, get_config, load_config, Config};
use publications_directory::directory::{load_from_path, DirectoryEvent, DirectoryState};
use publications_directory::models::{Category, SortKey};
use publications_directory::ui;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Publications Directory - search, filter and sort an academic publications list
#[derive(Parser, Debug)]
#[command(name = "pubdir")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Search, filter and sort an academic publications directory", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(long, short)]
    quiet: bool,

    /// Output format
    #[arg(long, short, value_enum, global = true, default_value_t = OutputFormat::Auto)]
    output: OutputFormat,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory document to load (.toml or .json)
    #[arg(long, short, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for results
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputFormat {
    /// Automatic based on terminal (table if TTY, JSON otherwise)
    Auto,
    /// Table format (human-readable)
    Table,
    /// JSON format (machine-readable)
    Json,
    /// Plain text format
    Plain,
}

/// Publication categories
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum CategoryArg {
    Article,
    Book,
    Conference,
    Patent,
}

impl From<CategoryArg> for Category {
    fn from(value: CategoryArg) -> Self {
        match value {
            CategoryArg::Article => Category::Article,
            CategoryArg::Book => Category::Book,
            CategoryArg::Conference => Category::Conference,
            CategoryArg::Patent => Category::Patent,
        }
    }
}

/// Sort order for the directory
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SortArg {
    /// Most recent first
    Recent,
    /// Most cited first
    Cited,
    /// Title, A to Z
    Title,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Recent => SortKey::Recent,
            SortArg::Cited => SortKey::Cited,
            SortArg::Title => SortKey::Title,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show one category of the directory
    #[command(alias = "sh")]
    Show {
        /// Category tab to show
        #[arg(long, short = 't', value_enum, default_value_t = CategoryArg::Article)]
        tab: CategoryArg,

        /// Search term applied across all categories
        #[arg(long, short)]
        search: Option<String>,

        /// Year filter (substring match against the year text)
        #[arg(long, short)]
        year: Option<String>,

        /// Sort order
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Reveal the paginated records of the shown category
        #[arg(long)]
        reveal: bool,
    },

    /// Search across every category and show all matches
    #[command(alias = "s")]
    Search {
        /// Search term (case-insensitive substring of title or description)
        term: String,

        /// Year filter (substring match against the year text)
        #[arg(long, short)]
        year: Option<String>,

        /// Sort order
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
    },

    /// List categories with their record counts
    #[command(alias = "ls")]
    Categories,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let env_filter = if cli.quiet { "error" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("publications_directory={}", env_filter)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from file if specified or found in default locations
    let config = if let Some(config_path) = &cli.config {
        load_config(config_path)
            .with_context(|| format!("loading config {}", config_path.display()))?
    } else if let Some(config_path) = find_config_file() {
        tracing::info!("Using config file: {}", config_path.display());
        load_config(&config_path)
            .with_context(|| format!("loading config {}", config_path.display()))?
    } else {
        get_config()
    };

    let mut state = load_directory(&cli, &config)?;

    let output = resolve_output(cli.output);
    match cli.command {
        Some(Commands::Show {
            tab,
            search,
            year,
            sort,
            reveal,
        }) => {
            let tab: Category = tab.into();
            if let Some(term) = search {
                state.apply(DirectoryEvent::SearchInput(term));
            }
            if let Some(year) = year {
                state.apply(DirectoryEvent::YearChange(year));
            }
            if let Some(sort) = sort {
                state.apply(DirectoryEvent::SortChange(sort.into()));
            }
            if reveal {
                state.apply(DirectoryEvent::RevealMore(tab));
            }
            state.apply(DirectoryEvent::TabSelect(tab));
            print_category(&state, tab, &config, output, cli.quiet);
        }
        Some(Commands::Search { term, year, sort }) => {
            state.apply(DirectoryEvent::SearchInput(term));
            if let Some(year) = year {
                state.apply(DirectoryEvent::YearChange(year));
            }
            if let Some(sort) = sort {
                state.apply(DirectoryEvent::SortChange(sort.into()));
            }
            // Search applies uniformly across categories; show them all.
            for category in Category::ALL {
                if state.visible_count(category) > 0 {
                    print_category(&state, category, &config, output, cli.quiet);
                }
            }
            let total: usize = Category::ALL
                .iter()
                .map(|&c| state.visible_count(c))
                .sum();
            if total == 0 && !cli.quiet {
                println!(
                    "{} No publications match '{}'",
                    ui::status_icon(ui::Status::Warning),
                    state.search_term()
                );
            }
        }
        Some(Commands::Categories) | None => {
            print_categories(&state, output);
        }
    }

    Ok(())
}

fn load_directory(cli: &Cli, config: &Config) -> Result<DirectoryState> {
    let path = cli
        .data
        .clone()
        .or_else(|| config.data_path.clone());
    let Some(path) = path else {
        bail!("no directory document given; pass --data <file> or set data_path in the config");
    };
    let state = load_from_path(&path, config.page_size)
        .with_context(|| format!("loading directory document {}", path.display()))?;
    Ok(state)
}

fn resolve_output(format: OutputFormat) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if ui::is_terminal() {
                OutputFormat::Table
            } else {
                OutputFormat::Json
            }
        }
        other => other,
    }
}

fn print_category(
    state: &DirectoryState,
    category: Category,
    config: &Config,
    output: OutputFormat,
    quiet: bool,
) {
    let entries = state.entries(category);
    match output {
        OutputFormat::Json => {
            let rendered: Vec<_> = entries.iter().filter(|e| e.rendered).collect();
            match serde_json::to_string_pretty(&rendered) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error serializing results: {}", e),
            }
        }
        OutputFormat::Plain => {
            for entry in entries.iter().filter(|e| e.rendered) {
                let record = entry.record;
                println!(
                    "{} ({}) - {} citations",
                    record.title,
                    record.year_text(),
                    record.citation_count()
                );
                if !record.description.is_empty() {
                    println!("  {}", record.description);
                }
            }
        }
        OutputFormat::Table | OutputFormat::Auto => {
            ui::print_section(&format!(
                "{} {}",
                ui::category_icon(category),
                category.name()
            ));
            let table = ui::directory_table(&entries, &config.display);
            println!("{table}");
            if !quiet {
                let shown = entries.iter().filter(|e| e.rendered).count();
                println!("{} of {} shown", shown, state.count(category));
                if !state.is_reveal_exhausted(category) && shown < state.visible_count(category) {
                    println!("(run with --reveal to load more)");
                }
            }
        }
    }
}

fn print_categories(state: &DirectoryState, output: OutputFormat) {
    match output {
        OutputFormat::Json => {
            let summary: Vec<_> = Category::ALL
                .iter()
                .map(|&c| {
                    serde_json::json!({
                        "id": c.id(),
                        "name": c.name(),
                        "records": state.count(c),
                        "visible": state.visible_count(c),
                    })
                })
                .collect();
            match serde_json::to_string_pretty(&summary) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error serializing results: {}", e),
            }
        }
        _ => {
            for category in Category::ALL {
                println!(
                    "{} {:<20} {} records",
                    ui::category_icon(category),
                    category.name(),
                    state.count(category)
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_version() {
        let version = env!("CARGO_PKG_VERSION");
        assert!(!version.is_empty());
        let parts: Vec<&str> = version.split('.').collect();
        assert!(parts.len() >= 2);
        assert!(parts[0].parse::<u32>().is_ok());
    }

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["pubdir"]);
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert_eq!(cli.output, OutputFormat::Auto);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["pubdir", "-v"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["pubdir", "-vv"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_cli_search_command() {
        let cli = Cli::parse_from(["pubdir", "search", "graph", "--year", "2019", "--sort", "cited"]);
        match cli.command {
            Some(Commands::Search { term, year, sort }) => {
                assert_eq!(term, "graph");
                assert_eq!(year.as_deref(), Some("2019"));
                assert_eq!(sort, Some(SortArg::Cited));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_show_defaults_to_articles() {
        let cli = Cli::parse_from(["pubdir", "show"]);
        match cli.command {
            Some(Commands::Show { tab, reveal, .. }) => {
                assert_eq!(tab, CategoryArg::Article);
                assert!(!reveal);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_sort_arg_maps_to_sort_key() {
        assert_eq!(SortKey::from(SortArg::Recent), SortKey::Recent);
        assert_eq!(SortKey::from(SortArg::Cited), SortKey::Cited);
        assert_eq!(SortKey::from(SortArg::Title), SortKey::Title);
    }
}
