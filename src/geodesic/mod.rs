//! Great-circle arcs on the spherical Earth
//!
//! This module computes the geodesic (minor great-circle) arc between two
//! geographic points by spherical linear interpolation of their unit
//! vectors, and provides the angle-unwrapping pass that keeps the resulting
//! polyline continuous across the antimeridian.
//!
//! Coincident and antipodal endpoints are guarded explicitly: the first
//! degenerates to a constant arc, the second has no unique connecting great
//! circle and is reported as [`GeodesicError::AntipodalEndpoints`] rather
//! than an arbitrary path.

use log::debug;
use nalgebra::Vector3;
use std::f64::consts::PI;

use crate::constants::{ANTIPODAL_EPS, COINCIDENT_EPS, DEG2RAD, RAD2DEG};
use crate::coordinates::{Cartesian3, GeoPoint};

pub mod errors;

pub use errors::{GeodesicError, Result};

/// An ordered sequence of samples tracing a minor great-circle arc
///
/// The first sample coincides with the start endpoint and the last with the
/// end endpoint. Samples are evenly spaced in central angle.
#[derive(Debug, Clone)]
pub struct GreatCircleArc {
    points: Vec<GeoPoint>,
    central_angle: f64,
}

impl GreatCircleArc {
    /// The arc samples in traversal order
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the arc holds no samples (never produced by `great_circle`)
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total central angle spanned by the arc, in radians
    pub fn central_angle(&self) -> f64 {
        self.central_angle
    }

    /// First sample
    pub fn start(&self) -> GeoPoint {
        self.points[0]
    }

    /// Last sample
    pub fn end(&self) -> GeoPoint {
        self.points[self.points.len() - 1]
    }

    /// Latitude and longitude sequences in degrees, as recovered by atan2
    ///
    /// Longitudes are wrapped to (-180°, 180°]; a path crossing the
    /// antimeridian shows a spurious jump here. Use
    /// [`GreatCircleArc::unwrapped_degrees`] for plotting or export.
    pub fn raw_degrees(&self) -> (Vec<f64>, Vec<f64>) {
        let lats = self.points.iter().map(|p| p.lat_degrees()).collect();
        let lons = self.points.iter().map(|p| p.lon_degrees()).collect();
        (lats, lons)
    }

    /// Latitude and longitude sequences in degrees with wrap jumps removed
    ///
    /// Each axis is unwrapped independently, so consumers that expect a
    /// continuous polyline never see a consecutive-sample jump of 180° or
    /// more. Values may leave the nominal ranges; that is what makes the
    /// polyline continuous.
    pub fn unwrapped_degrees(&self) -> (Vec<f64>, Vec<f64>) {
        let (mut lats, mut lons) = self.raw_degrees();
        unwrap_degrees(&mut lats);
        unwrap_degrees(&mut lons);
        (lats, lons)
    }
}

/// Compute the minor great-circle arc between two points
///
/// Produces `samples` points evenly spaced in central angle, endpoints
/// inclusive, by spherical linear interpolation of the endpoint unit
/// vectors:
///
/// `P(s) = sin(sigma - s)/sin(sigma) * P1 + sin(s)/sin(sigma) * P2`
///
/// for `s` over [0, sigma], where `sigma` is the central angle between the
/// endpoints.
///
/// # Errors
///
/// - [`GeodesicError::TooFewSamples`] when `samples < 2`
/// - [`GeodesicError::AntipodalEndpoints`] when the endpoints are within
///   [`ANTIPODAL_EPS`] of exact opposition and the arc is not unique
///
/// Coincident endpoints are not an error: the arc degenerates to `samples`
/// copies of the start point.
///
/// # Examples
///
/// ```rust
/// use earthmark::coordinates::GeoPoint;
/// use earthmark::geodesic::great_circle;
///
/// let easter_island = GeoPoint::from_degrees(-27.1127, -109.3497).unwrap();
/// let giza = GeoPoint::from_degrees(29.9792, 31.1342).unwrap();
///
/// let arc = great_circle(easter_island, giza, 360).unwrap();
/// assert_eq!(arc.len(), 360);
/// assert!((arc.start().lat_degrees() - (-27.1127)).abs() < 1e-6);
/// ```
pub fn great_circle(start: GeoPoint, end: GeoPoint, samples: usize) -> Result<GreatCircleArc> {
    if samples < 2 {
        return Err(GeodesicError::TooFewSamples(samples));
    }

    let sigma = start.central_angle(&end);
    debug!(
        "great circle: central angle {:.6} rad over {} samples",
        sigma, samples
    );

    if sigma < COINCIDENT_EPS {
        // Degenerate arc: both endpoints name the same point
        return Ok(GreatCircleArc {
            points: vec![start; samples],
            central_angle: 0.0,
        });
    }

    if sigma > PI - ANTIPODAL_EPS {
        return Err(GeodesicError::AntipodalEndpoints {
            separation_deg: sigma * RAD2DEG,
        });
    }

    let p1: Vector3<f64> = start.to_cartesian().to_vector3();
    let p2: Vector3<f64> = end.to_cartesian().to_vector3();
    let sin_sigma = sigma.sin();

    let mut points = Vec::with_capacity(samples);
    for i in 0..samples {
        let s = sigma * i as f64 / (samples - 1) as f64;
        let w1 = (sigma - s).sin() / sin_sigma;
        let w2 = s.sin() / sin_sigma;
        let sample = p1 * w1 + p2 * w2;
        points.push(GeoPoint::from_cartesian(Cartesian3::from_vector3(sample)));
    }

    Ok(GreatCircleArc {
        points,
        central_angle: sigma,
    })
}

/// The planet's equator as a polyline
///
/// `samples` points at latitude 0 with longitude evenly spaced over
/// [-180°, 180°], endpoints inclusive.
///
/// # Errors
///
/// Returns [`GeodesicError::TooFewSamples`] when `samples < 2`.
pub fn equator(samples: usize) -> Result<Vec<GeoPoint>> {
    if samples < 2 {
        return Err(GeodesicError::TooFewSamples(samples));
    }

    let points = (0..samples)
        .map(|i| {
            let lon_deg = -180.0 + 360.0 * i as f64 / (samples - 1) as f64;
            GeoPoint::from_radians(0.0, lon_deg * DEG2RAD)
        })
        .collect();
    Ok(points)
}

/// Remove artificial 360°-period jumps from a sequence of angles in degrees
///
/// Whenever consecutive samples differ by more than 180°, a multiple of
/// 360° is added to the remainder of the sequence so the difference falls
/// back inside (-180°, 180°]. This is the post-processing step that turns
/// the wrapped output of atan2-based recovery into a continuous signal.
pub fn unwrap_degrees(values: &mut [f64]) {
    if values.len() < 2 {
        return;
    }

    let mut offset = 0.0;
    let mut prev = values[0];
    for value in values.iter_mut().skip(1) {
        let mut adjusted = *value + offset;
        while adjusted - prev > 180.0 {
            offset -= 360.0;
            adjusted -= 360.0;
        }
        while adjusted - prev < -180.0 {
            offset += 360.0;
            adjusted += 360.0;
        }
        *value = adjusted;
        prev = adjusted;
    }
}
