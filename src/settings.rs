//! RANSAC configuration for plane detection.
//!
//! Settings can be built in code, starting from [`RansacSettings::default`],
//! or loaded from a TOML file in which every field is optional:
//!
//! ```toml
//! confidence = 0.99
//! inlier_ratio = 0.2
//! inlier_threshold = 0.5
//! plane_count = 3
//! channel_capacity = 64
//! seed = 42
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::core::number_of_iterations;
use crate::error::{Error, Result};

/// Main configuration object for the plane detection pipeline.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RansacSettings {
    /// Desired confidence in (0, 1) of drawing at least one all-inlier sample.
    pub confidence: f64,
    /// Assumed fraction in (0, 1) of cloud points lying on the dominant plane.
    pub inlier_ratio: f64,
    /// Distance tolerance ε: a point supports a plane when strictly closer.
    pub inlier_threshold: f64,
    /// Number of dominant planes to extract.
    pub plane_count: usize,
    /// Capacity of the bounded channels between the streaming stages.
    pub channel_capacity: usize,
    /// Seed for the random source; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for RansacSettings {
    fn default() -> Self {
        Self {
            confidence: 0.99,
            inlier_ratio: 0.2,
            inlier_threshold: 0.5,
            plane_count: 3,
            channel_capacity: 64,
            seed: None,
        }
    }
}

impl RansacSettings {
    /// Parse settings from TOML text. Missing fields take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read settings from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Check every field, including that the iteration count is positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.inlier_threshold > 0.0 && self.inlier_threshold.is_finite()) {
            return Err(Error::InvalidThreshold(self.inlier_threshold));
        }
        if self.plane_count == 0 {
            return Err(Error::InvalidPlaneCount);
        }
        if self.channel_capacity == 0 {
            return Err(Error::InvalidChannelCapacity);
        }
        self.iterations().map(|_| ())
    }

    /// RANSAC iterations per round implied by `confidence` and `inlier_ratio`.
    pub fn iterations(&self) -> Result<usize> {
        number_of_iterations(self.confidence, self.inlier_ratio)
    }
}
