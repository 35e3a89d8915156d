//! # Cartesian Coordinate System Module
//!
//! This module provides a 3D Cartesian coordinate representation that serves as
//! the intermediate format for geographic coordinate transformations and
//! great-circle calculations.
//!
//! ## Coordinate System Convention
//!
//! This implementation follows the geocentric convention:
//! - **X-axis**: Points toward the intersection of the equator and the prime
//!   meridian (lat = 0°, lon = 0°)
//! - **Y-axis**: Points toward lat = 0°, lon = 90°E
//! - **Z-axis**: Points toward the north pole (lat = +90°)
//!
//! ## Use as Intermediate Representation
//!
//! Cartesian coordinates are the preferred intermediate format because:
//! - No singularities at the poles or the antimeridian, unlike angular systems
//! - Vector operations (dot products, cross products) are direct
//! - Interpolation along a great circle is a weighted vector sum
//!
//! ## Examples
//!
//! ```rust
//! use earthmark::coordinates::cartesian::Cartesian3;
//!
//! // Unit vector through the Gulf of Guinea (lat 0, lon 0)
//! let origin = Cartesian3::new(1.0, 0.0, 0.0);
//!
//! // Unit vector through the north pole
//! let north_pole = Cartesian3::new(0.0, 0.0, 1.0);
//!
//! // Dot product of perpendicular directions is zero
//! assert_eq!(origin.dot(&north_pole), 0.0);
//! ```

use nalgebra::Vector3;
use std::f64::consts::PI;

/// Three-dimensional Cartesian coordinate on or about the unit sphere
///
/// Represents a point or direction in geocentric 3D space. Positions on the
/// planet's surface are unit vectors; intermediate results of vector
/// arithmetic may have any magnitude and can be brought back to the surface
/// with [`Cartesian3::normalize`].
///
/// # Coordinate System
///
/// - **X**: Toward lat 0°, lon 0°
/// - **Y**: Toward lat 0°, lon 90°E
/// - **Z**: Toward the north pole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cartesian3 {
    /// X-component (toward lat 0, lon 0)
    pub x: f64,
    /// Y-component (toward lon 90°E)
    pub y: f64,
    /// Z-component (toward the north pole)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use earthmark::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 0.0, 0.0);
    /// assert_eq!(coord.x, 1.0);
    /// assert_eq!(coord.y, 0.0);
    /// assert_eq!(coord.z, 0.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Calculates the magnitude (length) of the coordinate vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use earthmark::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(3.0, 4.0, 0.0);
    /// assert_eq!(coord.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Returns a normalized (unit) vector in the same direction
    ///
    /// Returns `None` if the magnitude is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use earthmark::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(3.0, 4.0, 0.0);
    /// let unit = coord.normalize().unwrap();
    /// assert!((unit.magnitude() - 1.0).abs() < 1e-15);
    /// ```
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(Cartesian3 {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
            })
        }
    }

    /// Calculates the dot product with another coordinate
    ///
    /// For unit vectors this is the cosine of the angle between them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use earthmark::coordinates::cartesian::Cartesian3;
    ///
    /// let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
    /// let y_axis = Cartesian3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x_axis.dot(&y_axis), 0.0);
    /// ```
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product with another coordinate
    ///
    /// The result is perpendicular to both inputs; for two surface positions
    /// it is the pole of the great circle through them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use earthmark::coordinates::cartesian::Cartesian3;
    ///
    /// let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
    /// let y_axis = Cartesian3::new(0.0, 1.0, 0.0);
    /// let pole = x_axis.cross(&y_axis);
    /// assert!((pole.z - 1.0).abs() < 1e-15);
    /// ```
    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Calculates the central angle to another coordinate
    ///
    /// Both coordinates are treated as directions from the sphere's center.
    /// The cosine is clamped before `acos` so floating error near parallel or
    /// anti-parallel vectors cannot produce NaN.
    ///
    /// # Returns
    ///
    /// Angle in radians [0, π]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use earthmark::coordinates::cartesian::Cartesian3;
    /// use std::f64::consts::PI;
    ///
    /// let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
    /// let y_axis = Cartesian3::new(0.0, 1.0, 0.0);
    /// let angle = x_axis.angular_distance(&y_axis);
    /// assert!((angle - PI / 2.0).abs() < 1e-15);
    /// ```
    pub fn angular_distance(&self, other: &Cartesian3) -> f64 {
        let dot_product = self.dot(other);
        let mag_product = self.magnitude() * other.magnitude();

        if mag_product == 0.0 {
            return 0.0;
        }

        let cos_angle = dot_product / mag_product;

        // Handle numerical precision issues
        if cos_angle >= 1.0 {
            0.0
        } else if cos_angle <= -1.0 {
            PI
        } else {
            cos_angle.acos()
        }
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    ///
    /// # Examples
    ///
    /// ```rust
    /// use earthmark::coordinates::cartesian::Cartesian3;
    /// use nalgebra::Vector3;
    ///
    /// let coord = Cartesian3::new(1.0, 2.0, 3.0);
    /// let vec: Vector3<f64> = coord.to_vector3();
    /// assert_eq!(vec.x, 1.0);
    /// ```
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    ///
    /// # Examples
    ///
    /// ```rust
    /// use earthmark::coordinates::cartesian::Cartesian3;
    /// use nalgebra::Vector3;
    ///
    /// let vec = Vector3::new(1.0, 2.0, 3.0);
    /// let coord = Cartesian3::from_vector3(vec);
    /// assert_eq!(coord.z, 3.0);
    /// ```
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn div(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}
