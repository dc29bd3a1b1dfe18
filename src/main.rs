use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shapescore::{Config, ShapeReport, mean_reversion_score, trend_score};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    /// TOML file with scoring parameters.
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the trend score of a series.
    Trend {
        #[arg(long)]
        alpha: Option<f64>,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Print the mean-reversion score of a series.
    MeanRev {
        #[arg(long)]
        beta: Option<f64>,

        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Print both scores, gating mean reversion on the trend score.
    Report {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    let mut cfg = match &args.config {
        Some(file) => Config::from_file(file).context("failed to construct cfg")?,
        None => Config::default(),
    };

    match &args.command {
        Command::Trend { alpha: Some(alpha), .. } => cfg.trend.alpha = *alpha,
        Command::MeanRev { beta: Some(beta), .. } => cfg.mean_reversion.beta = *beta,
        _ => {}
    }
    cfg.validate().context("failed to validate cfg with command-line overrides")?;
    log::info!("{cfg:#?}");

    match args.command {
        Command::Trend { values, .. } => {
            let score = trend_score(&values, cfg.trend.alpha)
                .context("failed to compute trend score")?;
            println!("{score}");
        }
        Command::MeanRev { values, .. } => {
            let score = mean_reversion_score(&values, cfg.mean_reversion.beta)
                .context("failed to compute mean reversion score")?;
            println!("{score}");
        }
        Command::Report { values } => {
            let report = ShapeReport::new(&values, &cfg).context("failed to build report")?;
            let report = toml::to_string(&report).context("failed to serialize report")?;
            print!("{report}");
        }
    }

    Ok(())
}
