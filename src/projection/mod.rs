//! Miller cylindrical projection
//!
//! The modified-Mercator projection used for the world map view. Unlike
//! Mercator it stays finite at the poles, so the whole latitude range can
//! be drawn.

use std::f64::consts::FRAC_PI_4;

use crate::constants::{DEG2RAD, RAD2DEG};
use crate::coordinates::GeoPoint;

/// Projected map coordinates in radian units
///
/// `x` spans [-π, π] for the full longitude range; `y` spans about
/// [-2.303, 2.303] over the full latitude range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapXY {
    pub x: f64,
    pub y: f64,
}

/// Project a geographic point to Miller map coordinates
///
/// `x = lon`, `y = 1.25 * ln(tan(π/4 + 0.4 * lat))`, angles in radians.
pub fn forward(point: &GeoPoint) -> MapXY {
    MapXY {
        x: point.lon,
        y: 1.25 * (FRAC_PI_4 + 0.4 * point.lat).tan().ln(),
    }
}

/// Project already-unwrapped degree coordinates
///
/// Longitudes outside [-180°, 180°] are accepted, letting a continuous
/// unwrapped polyline project to a continuous line.
pub fn forward_degrees(lat_deg: f64, lon_deg: f64) -> MapXY {
    MapXY {
        x: lon_deg * DEG2RAD,
        y: 1.25 * (FRAC_PI_4 + 0.4 * lat_deg * DEG2RAD).tan().ln(),
    }
}

/// Recover degree coordinates from Miller map coordinates
pub fn inverse_degrees(xy: MapXY) -> (f64, f64) {
    let lat = 2.5 * ((0.8 * xy.y).exp().atan() - FRAC_PI_4);
    (lat * RAD2DEG, xy.x * RAD2DEG)
}

/// Vertical extent of the projected map, the `y` of lat 90°
pub fn max_y() -> f64 {
    forward_degrees(90.0, 0.0).y
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_equator_maps_to_zero() {
        let xy = forward_degrees(0.0, 0.0);
        assert_relative_eq!(xy.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(xy.y, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_longitude_is_linear() {
        assert_relative_eq!(forward_degrees(0.0, 180.0).x, PI, epsilon = 1e-12);
        assert_relative_eq!(forward_degrees(0.0, -180.0).x, -PI, epsilon = 1e-12);
        assert_relative_eq!(forward_degrees(45.0, 90.0).x, PI / 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_poles_stay_finite() {
        let north = forward_degrees(90.0, 0.0);
        let south = forward_degrees(-90.0, 0.0);
        assert!(north.y.is_finite());
        assert!(south.y.is_finite());
        assert_relative_eq!(north.y, -south.y, epsilon = 1e-12);
        // Known Miller extent, about 2.3034
        assert_relative_eq!(north.y, 2.3034, epsilon = 1e-3);
    }

    #[test]
    fn test_forward_agrees_with_degree_variant() {
        let petra = GeoPoint::from_degrees(30.3285, 35.4444).unwrap();
        let a = forward(&petra);
        let b = forward_degrees(30.3285, 35.4444);
        assert_relative_eq!(a.x, b.x, epsilon = 1e-15);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-15);
    }

    #[test]
    fn test_round_trip() {
        for (lat, lon) in [
            (0.0, 0.0),
            (48.85, 2.35),
            (-27.1127, -109.3497),
            (85.0, 179.0),
            (-85.0, -179.0),
        ] {
            let xy = forward_degrees(lat, lon);
            let (lat2, lon2) = inverse_degrees(xy);
            assert_relative_eq!(lat2, lat, epsilon = 1e-9);
            assert_relative_eq!(lon2, lon, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_unwrapped_longitudes_project_continuously() {
        // 190° east is a legitimate unwrapped value just past the seam
        let a = forward_degrees(0.0, 179.0);
        let b = forward_degrees(0.0, 181.0);
        assert!((b.x - a.x) > 0.0);
        assert!((b.x - a.x) < 0.1);
    }
}
