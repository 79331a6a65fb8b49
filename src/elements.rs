use libm::{atan2f, sqrtf};
use nalgebra::Vector3;

use crate::constants::{Degree, Tesla};

/// The seven magnetic elements reported by the World Magnetic Model.
///
/// Intensities are in tesla, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldElements {
    /// Northward component `X`
    pub north: Tesla,
    /// Eastward component `Y`
    pub east: Tesla,
    /// Downward component `Z`
    pub down: Tesla,
    /// Horizontal intensity `H = sqrt(X² + Y²)`
    pub horizontal: Tesla,
    /// Total intensity `F = sqrt(H² + Z²)`
    pub total: Tesla,
    /// Declination `D = atan2(Y, X)`, east of true north positive
    pub declination: Degree,
    /// Inclination `I = atan2(Z, H)`, downward positive
    pub inclination: Degree,
}

impl FieldElements {
    /// Derive the magnetic elements from a field vector in the North-East-Down frame.
    pub fn from_ned(b_ned: &Vector3<f32>) -> Self {
        let north = b_ned.x;
        let east = b_ned.y;
        let down = b_ned.z;
        let horizontal = sqrtf(north * north + east * east);

        FieldElements {
            north,
            east,
            down,
            horizontal,
            total: sqrtf(horizontal * horizontal + down * down),
            declination: atan2f(east, north).to_degrees(),
            inclination: atan2f(down, horizontal).to_degrees(),
        }
    }
}

#[cfg(test)]
mod elements_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_ned() {
        // WMM2015 test point: 2015.0, 80°N 0°E, sea level
        let b = Vector3::new(6627.1e-9, -445.9e-9, 54432.3e-9);
        let elements = FieldElements::from_ned(&b);

        assert_relative_eq!(elements.horizontal, 6642.1e-9, max_relative = 1e-4);
        assert_relative_eq!(elements.total, 54836.0e-9, max_relative = 1e-4);
        assert_relative_eq!(elements.declination, -3.85, epsilon = 0.01);
        assert_relative_eq!(elements.inclination, 83.04, epsilon = 0.01);
    }

    #[test]
    fn test_pure_vertical_field() {
        let elements = FieldElements::from_ned(&Vector3::new(0.0, 0.0, -5.0e-5));
        assert_eq!(elements.horizontal, 0.0);
        assert_relative_eq!(elements.total, 5.0e-5, max_relative = 1e-6);
        assert_relative_eq!(elements.inclination, -90.0, epsilon = 1e-4);
    }
}
