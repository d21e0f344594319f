//! Scoring a single set of climate parameters.

use clap::Args;
use climate_risk::{Config, Request};

/// The six climate parameters.
#[derive(Args, Debug)]
pub struct Inputs {
    /// Temperature.
    #[arg(short('t'), long, default_value_t = 0.0, allow_negative_numbers = true)]
    temperature: f64,

    /// CO2 emissions.
    #[arg(short('c'), long, default_value_t = 0.0, allow_negative_numbers = true)]
    co2_emissions: f64,

    /// Sea level rise.
    #[arg(short('s'), long, default_value_t = 0.0, allow_negative_numbers = true)]
    sea_level_rise: f64,

    /// Precipitation.
    #[arg(short('p'), long, default_value_t = 0.0, allow_negative_numbers = true)]
    precipitation: f64,

    /// Humidity.
    #[arg(short('u'), long, default_value_t = 0.0, allow_negative_numbers = true)]
    humidity: f64,

    /// Wind speed.
    #[arg(short('w'), long, default_value_t = 0.0, allow_negative_numbers = true)]
    wind_speed: f64,
}

impl Inputs {
    /// The inputs as a pipeline request.
    pub const fn request(&self) -> Request {
        Request {
            temperature: self.temperature,
            co2_emissions: self.co2_emissions,
            sea_level_rise: self.sea_level_rise,
            precipitation: self.precipitation,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
        }
    }
}

/// Load the models, score the request and print the report.
pub fn run(config: &Config, request: &Request) -> Result<(), String> {
    let pipeline = super::load_pipeline(config)?;
    let report = pipeline.run(request)?;
    ftlog::info!("Scored {request:?}: {:?}", report.scores);
    super::print_report(&report);
    Ok(())
}
