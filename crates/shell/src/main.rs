//! CLI for scoring climate risk and weather severity.

mod commands;
mod logger;

use std::path::PathBuf;

use clap::Parser;
use climate_risk::{Bands, Config};

use commands::Commands;

/// Model paths and bands given here override those read from the
/// environment, which in turn override the defaults.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the Climate Risk regressor.
    #[arg(long)]
    climate_model: Option<PathBuf>,

    /// Path to the Weather Severity regressor.
    #[arg(long)]
    severity_model: Option<PathBuf>,

    /// Band edges for the Climate Risk Index, as `low,moderate,high`.
    #[arg(long)]
    climate_bands: Option<Bands>,

    /// Band edges for the Weather Severity Index, as `low,moderate,high`.
    #[arg(long)]
    severity_bands: Option<Bands>,

    /// The directory to write logs to.
    #[arg(short('l'), long, default_value = "logs")]
    log_dir: PathBuf,

    /// The subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

impl Args {
    /// The pipeline settings from the environment, overridden by any given
    /// on the command line.
    fn config(&self) -> Result<Config, String> {
        let mut config = Config::from_env()?;
        if let Some(path) = &self.climate_model {
            config.climate_model_path.clone_from(path);
        }
        if let Some(path) = &self.severity_model {
            config.severity_model_path.clone_from(path);
        }
        if let Some(bands) = self.climate_bands {
            config.climate_bands = bands;
        }
        if let Some(bands) = self.severity_bands {
            config.severity_bands = bands;
        }
        Ok(config)
    }
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let (_guard, log_path) = logger::configure_logger(&args.log_dir, "climate-shell")?;
    ftlog::info!("{args:?}");
    ftlog::info!("Logging to {log_path:?}");

    let config = args.config()?;
    ftlog::info!("{config:?}");
    match args.command {
        Commands::Predict(inputs) => commands::predict::run(&config, &inputs.request()),
        Commands::Classify {
            climate_score,
            severity_score,
        } => {
            commands::classify::run(&config, climate_score, severity_score);
            Ok(())
        }
        Commands::Status => commands::status::run(&config),
        Commands::Batch { input, no_header } => commands::batch::run(&config, &input, !no_header),
    }
}
