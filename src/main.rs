use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quiniela::config::AppConfig;
use quiniela::report::{render_results, render_standings, render_winners, PoolReport};
use quiniela::session::Session;
use quiniela::sheet::PoolSheet;

#[derive(Parser)]
#[command(name = "quiniela")]
#[command(about = "Football prediction pool")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./quiniela.toml")]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error); overrides the config file
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a pool interactively: games, participants, predictions, results
    Play,

    /// Score a pool described in a TOML sheet
    Score {
        /// Path to the pool sheet
        sheet: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(level: &str, json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?;

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    init_tracing(log_level, cli.json_logs);

    tracing::info!("Starting quiniela v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Play => {
            let stdin = io::stdin();
            let mut session = Session::new(stdin.lock(), io::stdout(), config.report.clone());
            let (pool, _) = session.run().context("Pool session failed")?;
            tracing::info!(pool = pool.name(), "Session complete");
        }
        Commands::Score { sheet, json } => {
            let mut pool = PoolSheet::from_file(&sheet)
                .and_then(PoolSheet::into_pool)
                .with_context(|| format!("Failed to load pool sheet {}", sheet.display()))?;
            let report = PoolReport::from_pool(&mut pool).context("Failed to score pool")?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Pool: {}\n", report.pool);
                print!("{}", render_results(&report));
                print!("{}", render_standings(&report, &config.report));
                print!("{}", render_winners(&report, &config.report));
            }
        }
    }

    Ok(())
}
