//! jdskill command-line entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jdskill::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

/// jdskill: extract and categorize skills from job descriptions
#[derive(Parser, Debug)]
#[command(name = "jdskill")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log pipeline progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable JSON logging format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract and categorize skills from a job description
    Extract {
        /// Job description file (.txt, .pdf or .docx); reads stdin if omitted
        file: Option<PathBuf>,
        /// Job description text
        #[arg(short, long)]
        text: Option<String>,
        /// Show the first 500 characters of the loaded text on stderr
        #[arg(long)]
        preview: bool,
    },
    /// Print the normalized form of a job description
    Normalize {
        /// Job description file (.txt, .pdf or .docx); reads stdin if omitted
        file: Option<PathBuf>,
        /// Job description text
        #[arg(short, long)]
        text: Option<String>,
    },
    /// Create the reference data files from the built-in defaults
    Init,
    /// List skill categories
    Categories,
    /// Resolve an alias to its canonical skill and category
    Lookup {
        /// Alias to look up
        alias: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.json_logs);

    let config = if let Some(path) = &args.config {
        Config::from_file(path)?
    } else {
        Config::load()?
    };

    match args.command {
        Command::Extract {
            file,
            text,
            preview,
        } => {
            let input = cli::Input::from_args(file, text)?;
            cli::run_extract(config, input, preview, args.json).await
        }
        Command::Normalize { file, text } => {
            let input = cli::Input::from_args(file, text)?;
            cli::run_normalize(config, input, args.json).await
        }
        Command::Init => cli::run_init(config, args.json),
        Command::Categories => cli::run_categories(config, args.json),
        Command::Lookup { alias } => cli::run_lookup(config, alias, args.json),
    }
}

/// Log to stderr so stdout stays clean for results.
fn init_logging(verbose: bool, json_logs: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
