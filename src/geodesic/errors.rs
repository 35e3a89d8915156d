//! Error types for the geodesic module
//!
//! This module defines error types for great-circle computation.

use thiserror::Error;

/// Main error type for geodesic functionality
#[derive(Error, Debug)]
pub enum GeodesicError {
    /// Error when a latitude or longitude is outside the valid range
    #[error("Invalid coordinate: lat {lat_deg}°, lon {lon_deg}° (valid: lat in [-90, 90], lon in [-180, 180])")]
    InvalidCoordinate {
        /// The latitude that was supplied, in degrees
        lat_deg: f64,
        /// The longitude that was supplied, in degrees
        lon_deg: f64,
    },

    /// Error when arc endpoints are antipodal and the great circle is not unique
    #[error("Endpoints are antipodal (separation {separation_deg}°); the connecting great circle is not unique")]
    AntipodalEndpoints {
        /// Central angle between the endpoints, in degrees
        separation_deg: f64,
    },

    /// Error when fewer than two samples are requested for an arc
    #[error("An arc needs at least 2 samples, got {0}")]
    TooFewSamples(usize),
}

/// Extension of the Result type for geodesic operations
pub type Result<T> = std::result::Result<T, GeodesicError>;
