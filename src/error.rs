//! Error types for plane detection.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring or running the RANSAC pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading or writing a point cloud
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line in an XYZ file
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input file
        line: usize,
        /// What was wrong with the line
        message: String,
    },

    /// Confidence outside the open interval (0, 1)
    #[error("Invalid confidence {0}: must lie strictly between 0 and 1")]
    InvalidConfidence(f64),

    /// Inlier ratio outside the open interval (0, 1)
    #[error("Invalid inlier ratio {0}: must lie strictly between 0 and 1")]
    InvalidInlierRatio(f64),

    /// Non-positive or non-finite distance tolerance
    #[error("Invalid inlier threshold {0}: must be a positive finite number")]
    InvalidThreshold(f64),

    #[error("Plane count must be at least 1")]
    InvalidPlaneCount,

    #[error("Channel capacity must be at least 1")]
    InvalidChannelCapacity,

    /// Confidence and inlier ratio ask for zero samples
    #[error(
        "Confidence {confidence} with inlier ratio {inlier_ratio} yields no RANSAC iterations"
    )]
    NoIterations {
        confidence: f64,
        inlier_ratio: f64,
    },

    /// Confidence and inlier ratio ask for more samples than a round can run
    #[error("{required} RANSAC iterations required, more than the limit of {limit}")]
    TooManyIterations { required: f64, limit: usize },

    /// A round was configured to draw no samples
    #[error("A RANSAC round needs at least one iteration")]
    ZeroIterations,

    /// A round was started on a cloud with no points
    #[error("Cannot run RANSAC on an empty point cloud")]
    EmptyCloud,

    /// A pipeline stage thread could not be started
    #[error("Failed to spawn pipeline stage: {0}")]
    Spawn(#[source] std::io::Error),

    /// Settings file could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
