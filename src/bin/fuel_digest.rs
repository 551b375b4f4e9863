//! Command-line front end: show market pages, extract local files, manage the
//! refresh status and run the daily refresh daemon.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use fuel_digest::config::{AppConfig, LogLevel};
use fuel_digest::fetch::HttpFetcher;
use fuel_digest::operators::{operators_table, OPERATORS};
use fuel_digest::pipeline::DigestPipeline;
use fuel_digest::scheduler::{RefreshJob, RefreshScheduler};
use fuel_digest::status::{FileStatusStore, Status, StatusRequest, StatusService};
use fuel_digest::{render, sources, Direction};

#[derive(Parser, Debug)]
#[command(name = "fuel-digest", version, about = "Translated digests of Ukrainian fuel market pages")]
struct Cli {
    /// Configuration file (created with defaults when missing)
    #[arg(short, long, env = "FUEL_DIGEST_CONFIG", default_value = "fuel-digest.json")]
    config: PathBuf,

    /// Logging level; overrides the config file and RUST_LOG
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(level: CliLogLevel) -> Self {
        match level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch a market page and print its digest
    Show {
        /// Source number, source name, or URL
        target: String,

        /// Output language: en or ua (default from the configured locale)
        #[arg(long)]
        lang: Option<Direction>,

        /// Wrap the digest in the styled display panel
        #[arg(long)]
        panel: bool,
    },

    /// Digest a saved page (stdin when no file is given)
    Extract {
        file: Option<PathBuf>,

        #[arg(long)]
        lang: Option<Direction>,

        #[arg(long, conflicts_with = "json")]
        panel: bool,

        /// Print sections and counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the configured market pages
    Sources,

    /// Print the operator ranking
    Operators {
        /// Render as an HTML table
        #[arg(long)]
        html: bool,
    },

    /// Read or change the refresh status
    Status {
        #[command(subcommand)]
        action: StatusAction,
    },

    /// Refresh the configured page every day at local midnight
    Daemon {
        /// Also run one cycle immediately
        #[arg(long)]
        now: bool,
    },
}

#[derive(Subcommand, Debug)]
enum StatusAction {
    Get,
    Set { status: Status },
}

fn init_logging(config: &AppConfig, cli_level: Option<CliLogLevel>) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::from(config.log_level));
    builder.parse_default_env();
    if let Some(level) = cli_level {
        builder.filter_level(LevelFilter::from(LogLevel::from(level)));
    }
    builder.init();
}

fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_create(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    init_logging(&config, cli.log_level);

    match cli.command {
        Command::Show { target, lang, panel } => {
            let url = sources::resolve(&config.sources, &target)?;
            let direction = lang.unwrap_or_else(|| config.direction());
            log::info!("{} {url}", render::loading());
            let pipeline = DigestPipeline::new(
                Arc::new(HttpFetcher::new(config.http_timeout())?),
                Arc::new(config.extractor()?),
            );
            if panel {
                println!("{}", pipeline.load_panel(url.as_str(), direction).await);
            } else {
                let result = pipeline
                    .load(url.as_str(), direction)
                    .await
                    .context(render::unavailable())?;
                println!("{}", result.html);
            }
        }
        Command::Extract { file, lang, panel, json } => {
            let html = read_input(file.as_deref())?;
            let direction = lang.unwrap_or_else(|| config.direction());
            let result = config.extractor()?.extract_bytes(&html, direction)?;
            log::info!(
                "{} section(s), {} tracker script(s) removed",
                result.sections.len(),
                result.scripts_removed
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if panel {
                println!("{}", render::panel(&result));
            } else {
                println!("{}", result.html);
            }
        }
        Command::Sources => {
            for (i, source) in config.sources.iter().enumerate() {
                println!("{:>2}. {}\n    {}", i + 1, source.name, source.url);
            }
        }
        Command::Operators { html } => {
            if html {
                println!("{}", operators_table());
            } else {
                for op in OPERATORS {
                    println!("{:>2}. {:<12} {}", op.rank, op.name, op.reputation);
                }
            }
        }
        Command::Status { action } => {
            let service = StatusService::new(FileStatusStore::new(&config.status_file));
            let request = match action {
                StatusAction::Get => StatusRequest::GetStatus,
                StatusAction::Set { status } => StatusRequest::SetStatus { status },
            };
            println!("{}", service.handle(request)?.status);
        }
        Command::Daemon { now } => run_daemon(&config, now).await?,
    }

    Ok(())
}

async fn run_daemon(config: &AppConfig, now: bool) -> Result<()> {
    let job = RefreshJob::new(
        config.refresh_url.as_str(),
        Arc::new(HttpFetcher::new(config.http_timeout())?),
        Arc::new(FileStatusStore::new(&config.status_file)),
    )
    .with_extraction(Arc::new(config.extractor()?), config.direction());

    if now {
        log::info!("initial refresh: {:?}", job.run_cycle().await);
    }

    let scheduler = RefreshScheduler::start(job);
    log::info!("daemon running; refreshing {} daily", config.refresh_url);

    tokio::signal::ctrl_c().await.context("waiting for ctrl-c")?;
    log::info!("shutting down");
    scheduler.shutdown().await;
    Ok(())
}
