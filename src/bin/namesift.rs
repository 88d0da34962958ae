//! CLI binary for namesift.
//!
//! A thin shim over the library crate that maps CLI flags
//! to `ExtractionConfig` and prints results.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use namesift::export::{self, copy_line, parse_name_line};
use namesift::pipeline::input;
use namesift::{extract, ExtractionConfig, ExtractionOutcome, NameList};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

// ── ANSI colour helpers (no extra deps) ──────────────────────────────────────

fn green(s: &str) -> String {
    format!("\x1b[32m{s}\x1b[0m")
}
fn dim(s: &str) -> String {
    format!("\x1b[2m{s}\x1b[0m")
}
fn bold(s: &str) -> String {
    format!("\x1b[1m{s}\x1b[0m")
}

const AFTER_HELP: &str = r#"EXAMPLES:
  # Extract names from a webpage (prints a comma-separated line)
  namesift extract https://summerofcode.withgoogle.com/programs/2024/organizations/foo

  # Extract from a local file or stdin, save as names1.csv, names2.csv, …
  namesift extract page.html --save-dir .
  cat notes.txt | namesift extract -

  # Write to a specific CSV file, or print the tagged JSON outcome
  namesift extract page.html -o mentors.csv
  namesift extract page.html --json

  # Print a previously exported list
  namesift load names1.csv

  # One web-search link per name
  namesift search --csv names1.csv linkedin
  namesift search --names "Ada Lovelace, Alan Turing" github profile

ENVIRONMENT VARIABLES:
  GEMINI_API_KEY     Google Gemini API key (also read from a .env file)
  GEMINI_MODEL       Override model ID (default: gemini-1.5-flash)
  GEMINI_BASE_URL    Override API host (default: https://generativelanguage.googleapis.com)
  RUST_LOG           Override log filter (e.g. namesift=debug)
"#;

/// Extract person names from webpages and text using the Gemini API.
#[derive(Parser, Debug)]
#[command(
    name = "namesift",
    version,
    about = "Extract person names from webpages and text using the Gemini API",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, global = true, env = "NAMESIFT_VERBOSE")]
    verbose: bool,

    /// Suppress all output except errors and results.
    #[arg(short, long, global = true, env = "NAMESIFT_QUIET")]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract names from a URL, a local file, or `-` for stdin.
    Extract(ExtractArgs),
    /// Print the names stored in a CSV export.
    Load {
        /// CSV file with a `Name` header.
        path: PathBuf,

        /// Print a JSON array instead of a comma-separated line.
        #[arg(long)]
        json: bool,
    },
    /// Print one web-search URL per name.
    Search(SearchArgs),
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// HTTP/HTTPS URL, local file path, or `-` for stdin.
    input: String,

    /// Write the names as CSV to this file.
    #[arg(short, long, conflicts_with = "save_dir")]
    output: Option<PathBuf>,

    /// Write the names to the next free namesN.csv in this directory.
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Print the tagged extraction outcome as JSON.
    #[arg(long)]
    json: bool,

    /// Gemini API key.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Gemini model ID.
    #[arg(long, env = "GEMINI_MODEL", default_value = namesift::config::DEFAULT_MODEL)]
    model: String,

    /// API scheme and host.
    #[arg(long, env = "GEMINI_BASE_URL", default_value = namesift::config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Path to a text file containing a custom instruction prompt.
    #[arg(long, env = "NAMESIFT_PROMPT_FILE")]
    prompt_file: Option<PathBuf>,

    /// Minimum number of words a token needs to count as a name.
    #[arg(long, env = "NAMESIFT_MIN_WORDS", default_value_t = 2,
          value_parser = clap::value_parser!(u16).range(1..))]
    min_words: u16,

    /// generateContent timeout in seconds.
    #[arg(long, env = "NAMESIFT_API_TIMEOUT", default_value_t = 60)]
    api_timeout: u64,

    /// Page download timeout in seconds.
    #[arg(long, env = "NAMESIFT_FETCH_TIMEOUT", default_value_t = 30)]
    fetch_timeout: u64,

    /// Disable the spinner.
    #[arg(long, env = "NAMESIFT_NO_PROGRESS")]
    no_progress: bool,
}

#[derive(Args, Debug)]
struct SearchArgs {
    /// Comma-separated names.
    #[arg(long, required_unless_present = "csv", conflicts_with = "csv")]
    names: Option<String>,

    /// CSV export to take the names from.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Follow-up query appended to every name.
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // ── Environment ──────────────────────────────────────────────────────
    // Loaded before parsing so `.env` values feed clap's `env = …` fallbacks.
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // The spinner provides the feedback that matters, so library INFO logs
    // are suppressed while it is active.
    let show_progress = match &cli.command {
        Command::Extract(args) => !cli.quiet && !args.no_progress && !args.json,
        _ => false,
    };
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet || show_progress {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = &dotenv {
        tracing::debug!("No .env loaded: {}", e);
    }

    match cli.command {
        Command::Extract(args) => run_extract(args, cli.quiet, show_progress).await,
        Command::Load { path, json } => run_load(path, json),
        Command::Search(args) => run_search(args),
    }
}

async fn run_extract(args: ExtractArgs, quiet: bool, show_progress: bool) -> Result<()> {
    let config = build_config(&args).await?;

    let progress = show_progress.then(|| spinner("Fetching", &args.input));
    let text = input::resolve_input(&args.input, config.fetch_timeout_secs)
        .await
        .context("Failed to extract text from input")?;

    if let Some(ref bar) = progress {
        bar.set_prefix("Extracting");
        bar.set_message(format!("{} chars → {}", text.chars().count(), config.model));
    }
    let outcome = extract(&text, &config).await;
    if let Some(bar) = progress {
        bar.finish_and_clear();
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome).context("Failed to serialise outcome")?
        );
    }

    let names = match outcome {
        ExtractionOutcome::Names(names) => names,
        ExtractionOutcome::NoCandidates => {
            if !quiet && !args.json {
                eprintln!("{}", dim("No names extracted."));
            }
            return Ok(());
        }
        ExtractionOutcome::MissingCredential => {
            anyhow::bail!("GEMINI_API_KEY not found; set it in the environment or .env, or pass --api-key")
        }
        failed => anyhow::bail!("{}", failed.message()),
    };

    if !args.json {
        println!("{}", copy_line(&names));
    }

    let written = if let Some(ref path) = args.output {
        export::save_csv(path, &names).context("Failed to save names")?;
        Some(path.clone())
    } else if let Some(ref dir) = args.save_dir {
        let path = export::next_export_path(dir);
        export::save_csv(&path, &names).context("Failed to save names")?;
        Some(path)
    } else {
        None
    };

    if !quiet {
        eprintln!(
            "{} {} names extracted{}",
            green("✔"),
            bold(&names.len().to_string()),
            written
                .map(|p| format!("  →  {}", bold(&p.display().to_string())))
                .unwrap_or_default()
        );
    }
    Ok(())
}

fn run_load(path: PathBuf, json: bool) -> Result<()> {
    let names = export::load_csv(&path)
        .with_context(|| format!("Failed to read names from {:?}", path))?;
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&names).context("Failed to serialise names")?
        );
    } else {
        println!("{}", copy_line(&names));
    }
    Ok(())
}

fn run_search(args: SearchArgs) -> Result<()> {
    let names: NameList = match (&args.names, &args.csv) {
        (Some(line), _) => parse_name_line(line),
        (None, Some(path)) => export::load_csv(path)
            .with_context(|| format!("Failed to read names from {:?}", path))?,
        (None, None) => anyhow::bail!("Provide --names or --csv"),
    };

    let query = args.query.join(" ");
    let urls = export::search_urls(&names, &query).context("Cannot build search links")?;
    for url in urls {
        println!("{url}");
    }
    Ok(())
}

/// Map CLI args to `ExtractionConfig`.
async fn build_config(args: &ExtractArgs) -> Result<ExtractionConfig> {
    let mut builder = ExtractionConfig::builder()
        .model(&args.model)
        .base_url(&args.base_url)
        .min_words(args.min_words as usize)
        .api_timeout_secs(args.api_timeout)
        .fetch_timeout_secs(args.fetch_timeout);

    if let Some(ref key) = args.api_key {
        builder = builder.api_key(key);
    }

    if let Some(ref path) = args.prompt_file {
        let prompt = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read prompt from {:?}", path))?;
        builder = builder.prompt(prompt.trim());
    }

    builder.build().context("Invalid configuration")
}

fn spinner(prefix: &'static str, message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}  {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]);
    bar.set_style(style);
    bar.set_prefix(prefix);
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}
