//! Lexigraph CLI - synonym lookups and the HTTP server

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;
mod seed;

use commands::{completions, find, serve};
use config::Config;
use lexigraph_core::SynonymStore;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "lexigraph")]
#[command(author, version, about = "Transitive synonym lookups over an in-memory word graph")]
pub struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, env = "LEXIGRAPH_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::default_config_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API
    Serve(serve::ServeArgs),
    /// Look up the synonyms of a word in a seed file
    Find(find::FindArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context shared by commands
pub struct AppContext {
    pub config: Config,
    pub store: Arc<SynonymStore>,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: Arc::new(SynonymStore::new()),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config_path();

    // A broken config file must not lock users out of `config init --force`
    let config = match &cli.command {
        Commands::Config(_) => Config::load_from(&config_path).unwrap_or_default(),
        _ => Config::load_from(&config_path)?,
    };

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error".to_string(),
        0 => config.log_level.clone().unwrap_or_else(|| "warn".to_string()),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    };

    // The guard flushes buffered file output when main returns
    let (file_layer, _log_guard) = match (&cli.command, &config.log_file) {
        (Commands::Config(_), _) | (_, None) => (None, None),
        (_, Some(path)) => {
            let (writer, guard) = log_file_writer(path)?;
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Using config at: {:?}", config_path);

    let ctx = AppContext::new(config);

    match &cli.command {
        Commands::Serve(args) => serve::run(args, &ctx).await?,
        Commands::Find(args) => find::run(args, &cli, &ctx)?,
        Commands::Config(args) => commands::config::run(args, &config_path)?,
        Commands::Completions(args) => completions::run(args)?,
    }

    Ok(())
}

/// Non-blocking writer appending to `path`, creating its directory if needed
fn log_file_writer(path: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    let file_name = path
        .file_name()
        .with_context(|| format!("log_file has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(dir)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(appender))
}
