//! Checking that both models load.

use climate_risk::{Config, ModelSlot, Pipeline};

/// Print the availability of each model.
///
/// Fails only when at least one model is unavailable, so the exit code can
/// be used in scripts.
pub fn run(config: &Config) -> Result<(), String> {
    let pipeline = Pipeline::load(config);

    let slots = [
        (pipeline.climate_slot(), &config.climate_model_path),
        (pipeline.severity_slot(), &config.severity_model_path),
    ];
    for (slot, path) in slots {
        match slot {
            ModelSlot::Loaded(_) => println!("{}: available ({path:?})", slot.name()),
            ModelSlot::Unavailable { reason, .. } => println!("{}: unavailable ({reason})", slot.name()),
        }
    }

    if pipeline.is_available() {
        Ok(())
    } else {
        Err("Prediction is disabled until both models load.".to_string())
    }
}
