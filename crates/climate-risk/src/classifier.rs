//! Mapping scores to risk tiers and tiers to recommendations.

use core::str::FromStr;

/// Always recommended, regardless of the tiers.
pub const BASE_RECOMMENDATIONS: [&str; 2] = ["Monitor local weather patterns", "Prepare for potential disruptions"];

/// Recommended when either tier is at least `High`.
pub const RESILIENCE_RECOMMENDATION: &str = "Develop resilience strategies";

/// Recommended when either tier is `Severe`.
pub const SEVERE_RECOMMENDATIONS: [&str; 2] = [
    "Implement immediate adaptation measures",
    "Consider evacuation plans for extreme events",
];

/// An ordered risk category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskTier {
    /// The lowest band.
    Low,
    /// The second band.
    Moderate,
    /// The third band.
    High,
    /// Above the highest edge.
    Severe,
}

impl RiskTier {
    /// All tiers, from least to most risky.
    pub const ALL: [Self; 4] = [Self::Low, Self::Moderate, Self::High, Self::Severe];
}

impl core::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Severe => "Severe",
        };
        f.write_str(name)
    }
}

/// The two independent scoring axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The Climate Risk Index.
    ClimateRisk,
    /// The Weather Severity Index.
    WeatherSeverity,
}

impl Axis {
    /// The name of the index on this axis.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ClimateRisk => "Climate Risk Index",
            Self::WeatherSeverity => "Weather Severity Index",
        }
    }

    /// The label shown for a tier on this axis.
    #[must_use]
    pub const fn label(self, tier: RiskTier) -> &'static str {
        match (self, tier) {
            (Self::ClimateRisk, RiskTier::Low) => "Low Risk",
            (Self::ClimateRisk, RiskTier::Moderate) => "Moderate Risk",
            (Self::ClimateRisk, RiskTier::High) => "High Risk",
            (Self::ClimateRisk, RiskTier::Severe) => "Severe Risk",
            (Self::WeatherSeverity, RiskTier::Low) => "Mild",
            (Self::WeatherSeverity, RiskTier::Moderate) => "Moderate",
            (Self::WeatherSeverity, RiskTier::High) => "Severe",
            (Self::WeatherSeverity, RiskTier::Severe) => "Very Severe",
        }
    }

    /// A one-line description of a tier on this axis.
    #[must_use]
    pub const fn description(self, tier: RiskTier) -> &'static str {
        match (self, tier) {
            (Self::ClimateRisk, RiskTier::Low) => "Climate impact is minimal.",
            (Self::ClimateRisk, RiskTier::Moderate) => "Some climate changes, mild disruptions.",
            (Self::ClimateRisk, RiskTier::High) => "Significant environmental shifts.",
            (Self::ClimateRisk, RiskTier::Severe) => "Major instability, increasing severe weather events.",
            (Self::WeatherSeverity, RiskTier::Low) => "Calm weather, no significant risks.",
            (Self::WeatherSeverity, RiskTier::Moderate) => "Occasional storms, manageable conditions.",
            (Self::WeatherSeverity, RiskTier::High) => "Frequent storms, strong winds, possible disruptions.",
            (Self::WeatherSeverity, RiskTier::Severe) => "High risk of flooding and damaging storms.",
        }
    }

    /// The default band edges for this axis.
    #[must_use]
    pub const fn default_bands(self) -> Bands {
        match self {
            Self::ClimateRisk => Bands::CLIMATE_RISK,
            Self::WeatherSeverity => Bands::WEATHER_SEVERITY,
        }
    }
}

/// The three edges splitting one axis into four tiers.
///
/// Each edge is the inclusive upper bound of its tier, so a score exactly on
/// an edge belongs to the lower tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bands {
    /// The largest score that is still `Low`.
    low_max: f64,
    /// The largest score that is still `Moderate`.
    moderate_max: f64,
    /// The largest score that is still `High`.
    high_max: f64,
}

impl Bands {
    /// Default edges for the Climate Risk Index.
    pub const CLIMATE_RISK: Self = Self {
        low_max: 100.0,
        moderate_max: 150.0,
        high_max: 200.0,
    };

    /// Default edges for the Weather Severity Index.
    pub const WEATHER_SEVERITY: Self = Self {
        low_max: 25.0,
        moderate_max: 50.0,
        high_max: 75.0,
    };

    /// Create new bands.
    ///
    /// # Errors
    ///
    /// - If any edge is NaN or infinite.
    /// - If the edges are not strictly ascending.
    pub fn new(low_max: f64, moderate_max: f64, high_max: f64) -> Result<Self, String> {
        if ![low_max, moderate_max, high_max].iter().all(|e| e.is_finite()) {
            return Err(format!(
                "Band edges must be finite, got ({low_max}, {moderate_max}, {high_max})"
            ));
        }
        if !(low_max < moderate_max && moderate_max < high_max) {
            return Err(format!(
                "Band edges must be strictly ascending, got ({low_max}, {moderate_max}, {high_max})"
            ));
        }
        Ok(Self {
            low_max,
            moderate_max,
            high_max,
        })
    }

    /// The edges, from lowest to highest.
    #[must_use]
    pub const fn edges(&self) -> [f64; 3] {
        [self.low_max, self.moderate_max, self.high_max]
    }

    /// The tier a score falls in.
    ///
    /// NaN compares false against every edge and so lands in `Severe`.
    #[must_use]
    pub fn classify(&self, score: f64) -> RiskTier {
        if score <= self.low_max {
            RiskTier::Low
        } else if score <= self.moderate_max {
            RiskTier::Moderate
        } else if score <= self.high_max {
            RiskTier::High
        } else {
            RiskTier::Severe
        }
    }
}

impl FromStr for Bands {
    type Err = String;

    /// Parses edges written as `a,b,c`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let edges = s
            .split(',')
            .map(|e| {
                e.trim()
                    .parse::<f64>()
                    .map_err(|err| format!("Invalid band edge {e:?}: {err}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        match edges.as_slice() {
            &[low, moderate, high] => Self::new(low, moderate, high),
            _ => Err(format!("Expected three band edges, got {}: {s:?}", edges.len())),
        }
    }
}

impl core::fmt::Display for Bands {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{},{},{}", self.low_max, self.moderate_max, self.high_max)
    }
}

/// Classify a Climate Risk Index with the default edges (100, 150, 200).
#[must_use]
pub fn classify_climate_risk(score: f64) -> RiskTier {
    Bands::CLIMATE_RISK.classify(score)
}

/// Classify a Weather Severity Index with the default edges (25, 50, 75).
#[must_use]
pub fn classify_severity(score: f64) -> RiskTier {
    Bands::WEATHER_SEVERITY.classify(score)
}

/// The recommendations for a pair of tiers, in display order.
#[must_use]
pub fn recommend(climate: RiskTier, severity: RiskTier) -> Vec<&'static str> {
    let worst = climate.max(severity);

    let mut recommendations = BASE_RECOMMENDATIONS.to_vec();
    if worst >= RiskTier::High {
        recommendations.push(RESILIENCE_RECOMMENDATION);
    }
    if worst == RiskTier::Severe {
        recommendations.extend(SEVERE_RECOMMENDATIONS);
    }
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bands() {
        let bands = "10, 20,30".parse::<Bands>().unwrap();
        assert_eq!(bands.edges(), [10.0, 20.0, 30.0]);
        assert_eq!(bands.to_string().parse::<Bands>().unwrap(), bands);

        assert!("10,20".parse::<Bands>().is_err());
        assert!("10,20,x".parse::<Bands>().is_err());
        assert!("30,20,10".parse::<Bands>().is_err());
        assert!("10,10,20".parse::<Bands>().is_err());
        assert!("10,20,inf".parse::<Bands>().is_err());
    }

    #[test]
    fn default_bands_are_valid() {
        for axis in [Axis::ClimateRisk, Axis::WeatherSeverity] {
            let [l, m, h] = axis.default_bands().edges();
            assert_eq!(Bands::new(l, m, h), Ok(axis.default_bands()));
        }
    }
}
