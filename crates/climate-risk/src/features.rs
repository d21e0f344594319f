//! Assembling the six climate parameters into the vector fed to the models.

use crate::PipelineError;

/// The number of features the predictors were trained on.
pub const NUM_FEATURES: usize = 6;

/// The named positions in a `FeatureVector`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Temperature.
    Temperature,
    /// CO2 emissions.
    Co2Emissions,
    /// Sea level rise.
    SeaLevelRise,
    /// Precipitation.
    Precipitation,
    /// Humidity.
    Humidity,
    /// Wind speed.
    WindSpeed,
}

impl Feature {
    /// All features, in the order the predictors expect them.
    pub const ALL: [Self; NUM_FEATURES] = [
        Self::Temperature,
        Self::Co2Emissions,
        Self::SeaLevelRise,
        Self::Precipitation,
        Self::Humidity,
        Self::WindSpeed,
    ];

    /// The position of the feature in a `FeatureVector`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The human-readable name of the feature.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Co2Emissions => "CO2 Emissions",
            Self::SeaLevelRise => "Sea Level Rise",
            Self::Precipitation => "Precipitation",
            Self::Humidity => "Humidity",
            Self::WindSpeed => "Wind Speed",
        }
    }

    /// The `snake_case` key of the feature.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Co2Emissions => "co2_emissions",
            Self::SeaLevelRise => "sea_level_rise",
            Self::Precipitation => "precipitation",
            Self::Humidity => "humidity",
            Self::WindSpeed => "wind_speed",
        }
    }
}

impl core::fmt::Display for Feature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// The six climate parameters, in the order the predictors were trained on.
///
/// A `FeatureVector` can only be built through [`assemble`],
/// [`FeatureVector::from_array`] or [`FeatureVector::parse`], so every value
/// in it is finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; NUM_FEATURES]);

impl FeatureVector {
    /// Assemble a vector from textual cells, e.g. CLI arguments or a CSV row.
    ///
    /// # Errors
    ///
    /// - If there are not exactly six cells.
    /// - If any cell does not parse as a real number.
    pub fn parse<S: AsRef<str>>(cells: &[S]) -> Result<Self, PipelineError> {
        if cells.len() != NUM_FEATURES {
            return Err(PipelineError::InvalidInput {
                feature: "features".to_string(),
                reason: format!("expected {NUM_FEATURES} values, got {}", cells.len()),
            });
        }

        let mut values = [0.0; NUM_FEATURES];
        for ((v, cell), feature) in values.iter_mut().zip(cells).zip(Feature::ALL) {
            let cell = cell.as_ref().trim();
            *v = cell.parse::<f64>().map_err(|e| PipelineError::InvalidInput {
                feature: feature.name().to_string(),
                reason: format!("{cell:?} is not a number ({e})"),
            })?;
        }

        Self::from_array(values)
    }

    /// Assemble a vector from an array in trained order.
    ///
    /// # Errors
    ///
    /// If any value is NaN or infinite.
    pub fn from_array(values: [f64; NUM_FEATURES]) -> Result<Self, PipelineError> {
        for (&v, feature) in values.iter().zip(Feature::ALL) {
            if !v.is_finite() {
                return Err(PipelineError::InvalidInput {
                    feature: feature.name().to_string(),
                    reason: format!("{v} is not a real number"),
                });
            }
        }
        Ok(Self(values))
    }

    /// The values in trained order.
    #[must_use]
    pub const fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// The value of a single feature.
    #[must_use]
    pub const fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }
}

/// Package the six climate parameters into a `FeatureVector`.
///
/// No bounds are enforced; out-of-range values pass through unchanged.
///
/// # Errors
///
/// If any value is NaN or infinite.
pub fn assemble(
    temperature: f64,
    co2_emissions: f64,
    sea_level_rise: f64,
    precipitation: f64,
    humidity: f64,
    wind_speed: f64,
) -> Result<FeatureVector, PipelineError> {
    FeatureVector::from_array([
        temperature,
        co2_emissions,
        sea_level_rise,
        precipitation,
        humidity,
        wind_speed,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_trained_order() {
        for (i, feature) in Feature::ALL.into_iter().enumerate() {
            assert_eq!(feature.index(), i);
            assert_eq!(feature.key(), feature.name().to_lowercase().replace(' ', "_"));
        }
    }

    #[test]
    fn parse_trims_cells() {
        let v = FeatureVector::parse(&[" 20", "415 ", "3.3", "100", "60", "15"]).unwrap();
        assert_eq!(v.as_slice(), &[20.0, 415.0, 3.3, 100.0, 60.0, 15.0]);
    }
}
