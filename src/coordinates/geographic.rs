//! Geographic coordinates (latitude/longitude) on the spherical Earth
//!
//! Latitude and longitude are stored in radians; constructors and accessors
//! taking degrees are provided for catalog data and display, which are
//! conventionally in degrees.

use serde::{Deserialize, Serialize};

use crate::constants::{DEG2RAD, EARTH_RADIUS_KM, RAD2DEG};
use crate::coordinates::cartesian::Cartesian3;
use crate::geodesic::errors::{GeodesicError, Result};

/// A point on the planet's surface
///
/// Immutable value type. Latitude is positive north, longitude positive
/// east. Valid latitudes span [-90°, 90°] and longitudes [-180°, 180°];
/// both antimeridian labels (-180° and 180°) name the same meridian and
/// both are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in radians
    pub lat: f64,
    /// Longitude in radians
    pub lon: f64,
}

impl GeoPoint {
    /// Create a point from radian values without range checks
    ///
    /// Used where values are already known to be in range, such as the
    /// output of [`GeoPoint::from_cartesian`].
    pub fn from_radians(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Create a point from degree values, validating the ranges
    ///
    /// # Errors
    ///
    /// Returns [`GeodesicError::InvalidCoordinate`] when the latitude is
    /// outside [-90, 90] or the longitude outside [-180, 180], or when
    /// either value is not finite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use earthmark::coordinates::GeoPoint;
    ///
    /// let giza = GeoPoint::from_degrees(29.9792, 31.1342).unwrap();
    /// assert!((giza.lat_degrees() - 29.9792).abs() < 1e-12);
    ///
    /// assert!(GeoPoint::from_degrees(91.0, 0.0).is_err());
    /// ```
    pub fn from_degrees(lat_deg: f64, lon_deg: f64) -> Result<Self> {
        if !lat_deg.is_finite()
            || !lon_deg.is_finite()
            || !(-90.0..=90.0).contains(&lat_deg)
            || !(-180.0..=180.0).contains(&lon_deg)
        {
            return Err(GeodesicError::InvalidCoordinate { lat_deg, lon_deg });
        }
        Ok(GeoPoint {
            lat: lat_deg * DEG2RAD,
            lon: lon_deg * DEG2RAD,
        })
    }

    /// Get latitude in degrees
    pub fn lat_degrees(&self) -> f64 {
        self.lat * RAD2DEG
    }

    /// Get longitude in degrees
    pub fn lon_degrees(&self) -> f64 {
        self.lon * RAD2DEG
    }

    /// Convert to a unit vector in geocentric Cartesian coordinates
    ///
    /// The result satisfies x² + y² + z² = 1 up to floating error, by the
    /// trig identity behind the construction:
    ///
    /// - `x = cos(lat)·cos(lon)`
    /// - `y = cos(lat)·sin(lon)`
    /// - `z = sin(lat)`
    pub fn to_cartesian(&self) -> Cartesian3 {
        let cos_lat = self.lat.cos();
        Cartesian3::new(
            cos_lat * self.lon.cos(),
            cos_lat * self.lon.sin(),
            self.lat.sin(),
        )
    }

    /// Recover geographic coordinates from a Cartesian direction
    ///
    /// Left inverse of [`GeoPoint::to_cartesian`] for any nonzero vector:
    /// `lon = atan2(y, x)`, `lat = atan2(z, hypot(x, y))`. Longitude lands
    /// in (-180°, 180°] and latitude in [-90°, 90°]. At the poles the
    /// longitude is ill-defined and atan2 yields 0. The zero vector does
    /// not arise from valid geographic input and is not handled.
    pub fn from_cartesian(cart: Cartesian3) -> Self {
        let r_xy = (cart.x * cart.x + cart.y * cart.y).sqrt();
        GeoPoint {
            lat: cart.z.atan2(r_xy),
            lon: cart.y.atan2(cart.x),
        }
    }

    /// Central angle between two surface points in radians
    ///
    /// Computed through the Cartesian dot product, which is equivalent to
    /// the spherical law of cosines and immune to rounding past ±1.
    pub fn central_angle(&self, other: &GeoPoint) -> f64 {
        self.to_cartesian().angular_distance(&other.to_cartesian())
    }

    /// Surface distance to another point in kilometers
    ///
    /// Central angle scaled by the mean Earth radius.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        self.central_angle(other) * EARTH_RADIUS_KM
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    #[test]
    fn test_from_degrees_accepts_whole_range() {
        for (lat, lon) in [
            (0.0, 0.0),
            (90.0, 0.0),
            (-90.0, 0.0),
            (45.0, 180.0),
            (45.0, -180.0),
            (-27.1127, -109.3497),
        ] {
            assert!(GeoPoint::from_degrees(lat, lon).is_ok(), "{} {}", lat, lon);
        }
    }

    #[test]
    fn test_from_degrees_rejects_out_of_range() {
        for (lat, lon) in [
            (90.0001, 0.0),
            (-90.0001, 0.0),
            (0.0, 180.0001),
            (0.0, -180.0001),
            (f64::NAN, 0.0),
            (0.0, f64::INFINITY),
        ] {
            let result = GeoPoint::from_degrees(lat, lon);
            assert!(
                matches!(result, Err(GeodesicError::InvalidCoordinate { .. })),
                "expected rejection of {} {}",
                lat,
                lon
            );
        }
    }

    #[test]
    fn test_to_cartesian_specific_cases() {
        // Case 1: lat = 0, lon = 0 (Gulf of Guinea)
        let p1 = GeoPoint::from_degrees(0.0, 0.0).unwrap();
        let c1 = p1.to_cartesian();
        assert_relative_eq!(c1.x, 1.0, epsilon = 1e-15);
        assert_relative_eq!(c1.y, 0.0, epsilon = 1e-15);
        assert_relative_eq!(c1.z, 0.0, epsilon = 1e-15);

        // Case 2: north pole
        let p2 = GeoPoint::from_degrees(90.0, 0.0).unwrap();
        let c2 = p2.to_cartesian();
        assert_relative_eq!(c2.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(c2.y, 0.0, epsilon = 1e-15);
        assert_relative_eq!(c2.z, 1.0, epsilon = 1e-15);

        // Case 3: lon = 90°E on the equator
        let p3 = GeoPoint::from_degrees(0.0, 90.0).unwrap();
        let c3 = p3.to_cartesian();
        assert_relative_eq!(c3.x, 0.0, epsilon = 1e-15);
        assert_relative_eq!(c3.y, 1.0, epsilon = 1e-15);
        assert_relative_eq!(c3.z, 0.0, epsilon = 1e-15);

        // Case 4: lat = lon = 45°
        let p4 = GeoPoint::from_degrees(45.0, 45.0).unwrap();
        let c4 = p4.to_cartesian();
        let val = 1.0 / 2.0_f64.sqrt();
        assert_relative_eq!(c4.x, val * val, epsilon = 1e-15);
        assert_relative_eq!(c4.y, val * val, epsilon = 1e-15);
        assert_relative_eq!(c4.z, val, epsilon = 1e-15);
    }

    #[test]
    fn test_unit_norm() {
        let mut rng = StdRng::seed_from_u64(424242);
        for _ in 0..100 {
            let lat = rng.gen_range(-90.0..=90.0);
            let lon = rng.gen_range(-180.0..=180.0);
            let cart = GeoPoint::from_degrees(lat, lon).unwrap().to_cartesian();
            assert_relative_eq!(cart.magnitude(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_cartesian_round_trip() {
        let mut rng = StdRng::seed_from_u64(424243);
        for _ in 0..100 {
            // Stay slightly off the exact poles where longitude is ill-defined
            let lat = rng.gen_range(-89.9..=89.9);
            let lon = rng.gen_range(-179.9..=179.9);

            let original = GeoPoint::from_degrees(lat, lon).unwrap();
            let round_trip = GeoPoint::from_cartesian(original.to_cartesian());

            assert_relative_eq!(
                round_trip.lat_degrees(),
                lat,
                epsilon = 1e-9,
                max_relative = 1e-9
            );
            assert_relative_eq!(
                round_trip.lon_degrees(),
                lon,
                epsilon = 1e-9,
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_round_trip_at_poles() {
        // Longitude is ill-defined at the poles; latitude must still survive
        for lat in [90.0, -90.0] {
            let original = GeoPoint::from_degrees(lat, 123.0).unwrap();
            let round_trip = GeoPoint::from_cartesian(original.to_cartesian());
            assert_relative_eq!(round_trip.lat_degrees(), lat, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_central_angle_known_values() {
        let origin = GeoPoint::from_degrees(0.0, 0.0).unwrap();
        let pole = GeoPoint::from_degrees(90.0, 0.0).unwrap();
        assert_relative_eq!(origin.central_angle(&pole), PI / 2.0, epsilon = 1e-12);

        let east = GeoPoint::from_degrees(0.0, 90.0).unwrap();
        assert_relative_eq!(origin.central_angle(&east), PI / 2.0, epsilon = 1e-12);

        let antipode = GeoPoint::from_degrees(0.0, 180.0).unwrap();
        assert_relative_eq!(origin.central_angle(&antipode), PI, epsilon = 1e-12);

        assert_relative_eq!(origin.central_angle(&origin), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_central_angle_easter_island_to_giza() {
        let easter_island = GeoPoint::from_degrees(-27.1127, -109.3497).unwrap();
        let giza = GeoPoint::from_degrees(29.9792, 31.1342).unwrap();

        let sigma_deg = easter_island.central_angle(&giza) * RAD2DEG;
        assert!(
            (116.0..=118.0).contains(&sigma_deg),
            "separation {} outside expected band",
            sigma_deg
        );
    }

    #[test]
    fn test_distance_km_quarter_circumference() {
        let origin = GeoPoint::from_degrees(0.0, 0.0).unwrap();
        let pole = GeoPoint::from_degrees(90.0, 0.0).unwrap();
        // Quarter of the mean circumference, about 10,007 km
        assert_relative_eq!(
            origin.distance_km(&pole),
            EARTH_RADIUS_KM * PI / 2.0,
            epsilon = 1e-9
        );
    }
}
