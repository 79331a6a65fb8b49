//! # Constants and type definitions for geomag
//!
//! This module centralizes the **model dimensions**, **physical constants** and
//! **type aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Size of the spherical-harmonic expansion ([`NMAX`], [`NUMCOF`])
//! - Reference radius of the expansion ([`EARTH_R`])
//! - WGS84 ellipsoid parameters used by the caller-side frame helpers
//! - Unit conversions (nanotesla ↔ tesla)

// -------------------------------------------------------------------------------------------------
// Model dimensions
// -------------------------------------------------------------------------------------------------

/// Maximum degree (and order) of the shipped spherical-harmonic models.
pub const NMAX: usize = 12;

/// Number of `(n, m)` pairs with `0 ≤ m ≤ n ≤ NMAX`, i.e. the length of each coefficient table.
pub const NUMCOF: usize = (NMAX + 1) * (NMAX + 2) / 2;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// Mean radius of the reference sphere in meters (WMM technical report, section 1.2)
pub const EARTH_R: f32 = 6_371_200.0;

/// Nanotesla → tesla
pub const NT_TO_TESLA: f32 = 1.0e-9;

/// WGS84 semi-major axis in meters
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 inverse flattening
pub const WGS84_INV_F: f64 = 298.257_223_563;

/// WGS84 first eccentricity squared, `f·(2 − f)`
pub const WGS84_E2: f64 = (2.0 - 1.0 / WGS84_INV_F) / WGS84_INV_F;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Time as a year plus its elapsed fraction (e.g. `2021.5`)
pub type DecimalYear = f32;
/// Angle in degrees
pub type Degree = f32;
/// Distance in meters
pub type Meter = f32;
/// Magnetic flux density in tesla
pub type Tesla = f32;

#[cfg(test)]
mod constants_test {
    use super::*;

    #[test]
    fn test_numcof() {
        assert_eq!(NUMCOF, 91);
    }

    #[test]
    fn test_wgs84_e2() {
        approx::assert_relative_eq!(WGS84_E2, 6.694_379_990_14e-3, max_relative = 1e-10);
    }
}
