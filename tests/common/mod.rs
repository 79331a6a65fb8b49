#![allow(dead_code)]

use geomag::constants::{EARTH_R, NT_TO_TESLA};
use nalgebra::Vector3;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert that two field vectors agree within `rel_tol` of the expected magnitude.
pub fn assert_field_close(actual: &Vector3<f32>, expected: &Vector3<f32>, rel_tol: f32) {
    let error = (actual - expected).norm();
    let bound = rel_tol * expected.norm();
    assert!(
        error <= bound,
        "field mismatch: actual = {actual:?}, expected = {expected:?}, |error| = {error:e} > {bound:e}"
    );
}

/// Field of a centered dipole with Gauss coefficients `g10`, `g11`, `h11` (nanotesla), in tesla.
///
/// ```text
/// m = R³·(g11, h11, g10)
/// B = (3·(m·r)·r − r²·m) / r⁵
/// ```
pub fn dipole_field(g10: f64, g11: f64, h11: f64, position: &Vector3<f32>) -> Vector3<f32> {
    let r_ref = f64::from(EARTH_R);
    let p = position.cast::<f64>();
    let moment = r_ref.powi(3) * Vector3::new(g11, h11, g10);
    let r = p.norm();

    let b = (3.0 * moment.dot(&p) * p - r * r * moment) / r.powi(5);
    (b * f64::from(NT_TO_TESLA)).cast::<f32>()
}
