//! docpack main entry point
//!
//! Command-line inspection tool for the robots gate and the locale resolver of a
//! documentation crawl.

use anyhow::Context;
use clap::{Parser, Subcommand};
use docpack::config::{load_config_with_hash, Config};
use docpack::crawler::build_http_client;
use docpack::locale::{extract_hreflang_from_html, select_preferred_locale_url};
use docpack::{extract_locale, CrawlScope};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// docpack: locale-aware robots.txt and URL inspection for documentation crawls
#[derive(Parser, Debug)]
#[command(name = "docpack")]
#[command(version)]
#[command(about = "Inspect robots.txt and locale handling for a documentation crawl", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    /// Validate config and print it without touching the network
    #[arg(long)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check URLs against robots.txt and show their locale and canonical path
    Check {
        #[arg(value_name = "URL", required = true)]
        urls: Vec<String>,
    },

    /// Show the hreflang alternates of a saved HTML page and the preferred one
    Hreflang {
        #[arg(value_name = "HTML_FILE")]
        file: PathBuf,
    },

    /// Print the URL of a canonical path in the given locale
    Variant {
        #[arg(value_name = "CANONICAL_PATH")]
        canonical_path: String,

        #[arg(value_name = "LOCALE")]
        locale: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        print_config(&config);
        return Ok(());
    }

    let Some(command) = cli.command else {
        print_config(&config);
        return Ok(());
    };

    let client = build_http_client(&config).context("Failed to build HTTP client")?;
    let scope = CrawlScope::new(client, &config)?;

    match command {
        Command::Check { urls } => handle_check(&scope, &urls).await?,
        Command::Hreflang { file } => handle_hreflang(&scope, &file)?,
        Command::Variant {
            canonical_path,
            locale,
        } => println!("{}", scope.locale_variant(&locale, &canonical_path)),
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("docpack=info,warn"),
            1 => EnvFilter::new("docpack=debug,info"),
            2 => EnvFilter::new("docpack=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Prints the effective configuration
fn print_config(config: &Config) {
    let strategy = config.locale_strategy();

    println!("Crawler:");
    println!("  Root URL: {}", config.crawler.root_url);
    println!(
        "  Base path: {}",
        if config.crawler.base_path.is_empty() {
            "(none)"
        } else {
            &config.crawler.base_path
        }
    );
    println!("  Request timeout: {}s", config.crawler.request_timeout);

    println!("\nUser Agent: {}", config.user_agent.header_value());

    println!("\nLocale:");
    println!("  Priority: {}", strategy.priority.join(", "));
    match &strategy.param_name {
        Some(name) => println!("  Detection: query parameter '{}'", name),
        None => println!("  Detection: path segment"),
    }
}

/// Handles `check`: robots.txt verdict plus locale split for each URL
async fn handle_check(scope: &CrawlScope, urls: &[String]) -> anyhow::Result<()> {
    scope
        .prepare()
        .await
        .context("Failed to prepare robots.txt policy")?;

    println!(
        "robots.txt for {} as {}",
        scope.root_url(),
        scope.gate().user_agent()
    );
    if let Some(delay) = scope.crawl_delay().await {
        println!("Crawl-delay: {:?}", delay);
    }

    for url in urls {
        let verdict = if scope.gate().is_allowed(url).await {
            "allow"
        } else {
            "deny"
        };
        let extracted = extract_locale(url, scope.strategy());
        let locale = if extracted.is_detected() {
            extracted.locale.as_str()
        } else {
            "-"
        };

        println!(
            "{:<5} {:<8} {:<40} {}",
            verdict, locale, extracted.canonical_path, url
        );
    }

    Ok(())
}

/// Handles `hreflang`: alternates of a saved page and the preferred choice
fn handle_hreflang(scope: &CrawlScope, file: &Path) -> anyhow::Result<()> {
    let html = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    let alternates = extract_hreflang_from_html(&html);
    if alternates.is_empty() {
        println!("No hreflang alternates found");
        return Ok(());
    }

    for (locale, href) in &alternates {
        println!("{:<10} {}", locale, href);
    }

    let selection = select_preferred_locale_url(&alternates, &scope.strategy().priority);
    println!("\nPreferred: {} -> {}", selection.locale, selection.url);

    Ok(())
}
