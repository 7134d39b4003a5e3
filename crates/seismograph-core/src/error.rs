//! Error types shared across the seismograph core.

use std::path::PathBuf;

use thiserror::Error;

/// Failures of the logarithm and magnitude formula.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MagnitudeError {
    #[error("log10 is undefined for non-positive values (got {0})")]
    NonPositive(f64),

    #[error("log10 requires a finite input (got {0})")]
    NonFinite(f64),

    #[error("Invalid input (amplitude must be greater than 0)")]
    InvalidAmplitude(f64),
}

/// Reasons a "Calculate" action produces no numeric result.
///
/// The display strings are shown verbatim in the result label.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalculateError {
    #[error("Please generate first.")]
    NoAmplitudeYet,

    #[error("Please select at least one ground type.")]
    NoWeightSelected,

    #[error(transparent)]
    Magnitude(#[from] MagnitudeError),
}

/// Media opening and decoding failures.
#[derive(Debug, Error)]
pub enum MediaError {
    #[error("could not open video file {}: {reason}", path.display())]
    Open { path: PathBuf, reason: String },

    #[error("failed to read frame from {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("frame buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("failed to spawn playback thread")]
    Spawn(#[source] std::io::Error),
}
