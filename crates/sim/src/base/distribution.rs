//! The closed set of parent distributions a population can be drawn from.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scale of the exponential population (mean of the distribution).
pub const EXPONENTIAL_SCALE: f64 = 2.0;

/// Bounds of the uniform population, `[low, high)`.
pub const UNIFORM_LOW: f64 = 0.0;
pub const UNIFORM_HIGH: f64 = 10.0;

/// Means of the two normal components of the bimodal population.
pub const BIMODAL_MEANS: [f64; 2] = [2.0, 8.0];
/// Standard deviation shared by both bimodal components.
pub const BIMODAL_STD_DEV: f64 = 0.8;

/// Shape of the parent population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum DistributionKind {
    /// Exponential with scale 2 (highly right-skewed).
    #[default]
    Exponential,
    /// Uniform on [0, 10).
    Uniform,
    /// Equal mixture of Normal(2, 0.8) and Normal(8, 0.8).
    Bimodal,
}

impl DistributionKind {
    /// All kinds in display order.
    pub const ALL: [DistributionKind; 3] = [
        DistributionKind::Exponential,
        DistributionKind::Uniform,
        DistributionKind::Bimodal,
    ];

    /// Canonical lowercase name, as accepted on the command line and in
    /// configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Exponential => "exponential",
            Self::Uniform => "uniform",
            Self::Bimodal => "bimodal",
        }
    }

    /// Human-readable label shown next to charts.
    pub fn label(self) -> &'static str {
        match self {
            Self::Exponential => "Exponential (Skewed)",
            Self::Uniform => "Uniform (Flat)",
            Self::Bimodal => "Bimodal (Two Humps)",
        }
    }

    /// Mean of the theoretical parent distribution.
    pub fn theoretical_mean(self) -> f64 {
        match self {
            Self::Exponential => EXPONENTIAL_SCALE,
            Self::Uniform => (UNIFORM_LOW + UNIFORM_HIGH) / 2.0,
            Self::Bimodal => (BIMODAL_MEANS[0] + BIMODAL_MEANS[1]) / 2.0,
        }
    }

    /// Variance of the theoretical parent distribution.
    ///
    /// For the bimodal mixture this is the within-component variance plus
    /// the spread of the component means around the overall mean.
    pub fn theoretical_variance(self) -> f64 {
        match self {
            Self::Exponential => EXPONENTIAL_SCALE * EXPONENTIAL_SCALE,
            Self::Uniform => (UNIFORM_HIGH - UNIFORM_LOW).powi(2) / 12.0,
            Self::Bimodal => {
                let half_gap = (BIMODAL_MEANS[1] - BIMODAL_MEANS[0]) / 2.0;
                BIMODAL_STD_DEV * BIMODAL_STD_DEV + half_gap * half_gap
            }
        }
    }

    /// Standard deviation of the theoretical parent distribution.
    pub fn theoretical_std_dev(self) -> f64 {
        self.theoretical_variance().sqrt()
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistributionKind {
    type Err = ConfigError;

    /// Accepts the canonical name or the display label, ignoring case and
    /// surrounding whitespace. Anything else is rejected rather than mapped
    /// to a fallback kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| {
                needle.eq_ignore_ascii_case(kind.name()) || needle.eq_ignore_ascii_case(kind.label())
            })
            .ok_or_else(|| ConfigError::UnknownDistribution {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for DistributionKind {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
