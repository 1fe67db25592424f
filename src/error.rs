//! Error module for the spike raster library.
use std::error::Error;
use std::fmt;

/// Error types for the library.
#[derive(Debug, PartialEq)]
pub enum RasterError {
    /// Error for invalid time bounds, e.g., bounds narrower than the actual spike-time range.
    InvalidBounds(String),
    /// Error for invalid event labels, e.g., wrong number of labels for the trials.
    InvalidEvents(String),
    /// Error for empty input, e.g., no trials at all.
    EmptyInput(String),
    /// Error for invalid parameters, e.g., a non-positive sampling rate.
    InvalidParameters(String),
    /// Error for a missing downstream dependency, e.g., an absent epochs backend.
    DependencyUnavailable(String),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RasterError::InvalidBounds(e) => write!(f, "Invalid time bounds: {}", e),
            RasterError::InvalidEvents(e) => write!(f, "Invalid event labels: {}", e),
            RasterError::EmptyInput(e) => write!(f, "Empty input: {}", e),
            RasterError::InvalidParameters(e) => write!(f, "Invalid parameters: {}", e),
            RasterError::DependencyUnavailable(e) => write!(f, "Dependency unavailable: {}", e),
        }
    }
}

impl Error for RasterError {}
