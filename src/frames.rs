//! # Caller-side coordinate helpers
//!
//! The synthesis works on ITRS Cartesian positions only. These helpers build such positions
//! from geodetic or geocentric coordinates and rotate the resulting field into the local
//! North-East-Down (NED) frame in which magnetic models are usually reported.
//!
//! Angles are converted in `f64` and the result rounded to `f32`, so the position handed to
//! the synthesis carries no more error than its own single-precision representation.

use libm::{cos, sin, sqrt};
use nalgebra::{Matrix3, Vector3};

use crate::constants::{Degree, Meter, WGS84_A, WGS84_E2};

/// Convert geodetic coordinates on the WGS84 ellipsoid to ITRS Cartesian coordinates.
///
/// Arguments
/// ---------
/// * `lat`: geodetic latitude in degrees
/// * `lon`: longitude in degrees, east positive
/// * `height`: height above the ellipsoid in meters
///
/// Return
/// ------
/// * the ITRS position in meters
///
/// Formula
/// -------
/// ```text
/// N = a / sqrt(1 − e²·sin²φ)
/// x = (N + h)·cos φ·cos λ
/// y = (N + h)·cos φ·sin λ
/// z = (N·(1 − e²) + h)·sin φ
/// ```
pub fn geodetic_to_itrs(lat: Degree, lon: Degree, height: Meter) -> Vector3<f32> {
    let lat_rad = f64::from(lat).to_radians();
    let lon_rad = f64::from(lon).to_radians();
    let height = f64::from(height);

    let (sin_lat, cos_lat) = (sin(lat_rad), cos(lat_rad));
    let (sin_lon, cos_lon) = (sin(lon_rad), cos(lon_rad));

    // Prime vertical radius of curvature
    let n = WGS84_A / sqrt(1.0 - WGS84_E2 * sin_lat * sin_lat);

    Vector3::new(
        ((n + height) * cos_lat * cos_lon) as f32,
        ((n + height) * cos_lat * sin_lon) as f32,
        ((n * (1.0 - WGS84_E2) + height) * sin_lat) as f32,
    )
}

/// Convert geocentric spherical coordinates to ITRS Cartesian coordinates.
///
/// Arguments
/// ---------
/// * `lat`: geocentric latitude in degrees
/// * `lon`: longitude in degrees, east positive
/// * `radius`: distance from the Earth's center in meters
pub fn spherical_to_itrs(lat: Degree, lon: Degree, radius: Meter) -> Vector3<f32> {
    let lat_rad = f64::from(lat).to_radians();
    let lon_rad = f64::from(lon).to_radians();
    let radius = f64::from(radius);

    Vector3::new(
        (radius * cos(lat_rad) * cos(lon_rad)) as f32,
        (radius * cos(lat_rad) * sin(lon_rad)) as f32,
        (radius * sin(lat_rad)) as f32,
    )
}

/// Rotation matrix from ITRS axes to the local North-East-Down frame.
///
/// Arguments
/// ---------
/// * `lat`: latitude in degrees (geodetic for an ellipsoidal NED frame, geocentric for a
///   spherical one)
/// * `lon`: longitude in degrees, east positive
///
/// Return
/// ------
/// * `R` such that `v_ned = R · v_itrs`; its rows are the north, east and down unit vectors
///   expressed in ITRS
pub fn ned_rotation(lat: Degree, lon: Degree) -> Matrix3<f32> {
    let lat_rad = f64::from(lat).to_radians();
    let lon_rad = f64::from(lon).to_radians();

    let (sin_lat, cos_lat) = (sin(lat_rad) as f32, cos(lat_rad) as f32);
    let (sin_lon, cos_lon) = (sin(lon_rad) as f32, cos(lon_rad) as f32);

    Matrix3::new(
        -sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat,
        -sin_lon, cos_lon, 0.0,
        -cos_lat * cos_lon, -cos_lat * sin_lon, -sin_lat,
    )
}
