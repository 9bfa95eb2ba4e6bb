//! Error types for the camera core
//!
//! This module defines the error types used throughout the crate. All three
//! variants are precondition failures detected at the point of computation;
//! they propagate to the caller and are never recovered internally. No
//! partial or default matrix is substituted.

use std::fmt;

/// Result type for camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Camera computation errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Render surface reported unusable dimensions, or the derived aspect
    /// ratio is not a finite positive number (construction time)
    InvalidConfiguration(String),

    /// Degenerate look-at geometry: coincident eye/target, up parallel to
    /// the view axis, or a non-finite input component
    InvalidGeometry(String),

    /// Frustum bounds collapse to zero extent along an axis (would divide
    /// by zero in the projection matrix)
    DegenerateFrustum(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidGeometry(msg) => write!(f, "Invalid geometry: {}", msg),
            Error::DegenerateFrustum(msg) => write!(f, "Degenerate frustum: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
