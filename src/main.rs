//! Krawler main entry point
//!
//! This is the command-line interface for the Krawler web crawler.

use anyhow::Context;
use clap::Parser;
use krawler::config::{load_config_with_hash, validate, Config};
use krawler::crawler::crawl;
use krawler::output::{log_statistics, open_sink, OutputFormat};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Krawler: a scope-bounded web crawler
///
/// Krawler walks a site depth-first from a root page, follows only links on
/// the same domain and subdomain, and prints the visible text of every HTML
/// page it finds.
#[derive(Parser, Debug)]
#[command(name = "krawler")]
#[command(version)]
#[command(about = "A scope-bounded web crawler", long_about = None)]
struct Cli {
    /// URL to crawl
    #[arg(short, long)]
    url: String,

    /// Depth level to crawl to. 0 = full crawl, 1 = root level ( / ) crawl
    #[arg(short, long)]
    depth: Option<u32>,

    /// Output format: json or yaml (anything else prints a plain trace)
    #[arg(short, long)]
    format: Option<String>,

    /// Crawl sites with problematic SSL certificates (self-signed, unknown, expired, etc)
    #[arg(short, long)]
    insecure: bool,

    /// Include MIME type information with page scrape
    #[arg(short, long)]
    mime: bool,

    /// Output data to a file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Amount of time (in seconds) to wait for a link to resolve and return content before failing and moving on
    #[arg(short, long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Overwrite the output file without asking
    #[arg(short, long)]
    yes: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = resolve_config(&cli)?;

    let output_path = config.output.path.as_deref().map(Path::new);
    if let Some(path) = output_path {
        if !cli.yes && path.exists() && !confirm_overwrite(path)? {
            println!("File \"{}\" will not be overwritten. Exiting", path.display());
            return Ok(());
        }
    }

    let sink = open_sink(config.output.format, output_path)
        .with_context(|| "Error initializing krawler output")?;

    match crawl(&cli.url, &config, sink).await {
        Ok(stats) => {
            log_statistics(&stats);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl of {} failed: {}", cli.url, e);
            Err(e).with_context(|| format!("Error with given URL ({})", cli.url))
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to standard error so they never end up in an output file.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("krawler=info,warn"),
            1 => EnvFilter::new("krawler=debug,info"),
            2 => EnvFilter::new("krawler=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Builds the effective configuration: defaults, then the config file, then flags
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if cli.mime {
        config.crawler.include_mime = true;
    }
    if let Some(timeout) = cli.timeout {
        config.http.timeout_secs = timeout;
    }
    if cli.insecure {
        config.http.insecure = true;
    }
    if let Some(format) = &cli.format {
        config.output.format = OutputFormat::from_name(format).unwrap_or_else(|| {
            tracing::warn!("Unknown output format '{}', using plain trace", format);
            OutputFormat::Plain
        });
    }
    if let Some(output) = &cli.output {
        config.output.path = Some(output.display().to_string());
    }

    validate(&config).context("Invalid command-line options")?;
    Ok(config)
}

/// Asks on the terminal whether an existing output file may be replaced
fn confirm_overwrite(path: &Path) -> io::Result<bool> {
    print!("File \"{}\" exists. Overwrite it? (y/N): ", path.display());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let answer = input.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
