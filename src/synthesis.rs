//! # Spherical-harmonic field synthesis
//!
//! Evaluation of the magnetic field of a [`ModelCoefficients`] model at a point given in
//! International Terrestrial Reference System (ITRS) coordinates.
//!
//! ## Method
//!
//! The potential is expanded on the unnormalized solid harmonics `V(n,m)`, `W(n,m)` of
//! Montenbruck & Gill (*Satellite Orbits*, 2000, sections 3.2.4–3.2.5). They are generated
//! directly from the Cartesian position with two non-singular recurrences
//!
//! ```text
//! V(m,m) = (2m−1)·(a·V(m−1,m−1) − b·W(m−1,m−1))
//! W(m,m) = (2m−1)·(a·W(m−1,m−1) + b·V(m−1,m−1))
//!
//! V(n,m) = [(2n−1)·f·V(n−1,m) − (n+m−1)·g·V(n−2,m)] / (n−m)     (same for W)
//! ```
//!
//! with `a = x·R/r²`, `b = y·R/r²`, `f = z·R/r²`, `g = R²/r²` and the seed
//! `V(0,0) = R/r`, `W(0,0) = 0`. No trigonometric function, associated Legendre table or
//! polar singularity is involved.
//!
//! The gradient of the degree `n−1` potential is a combination of the degree `n` harmonics,
//! so the traversal runs one degree and one order beyond [`NMAX`]. The harmonics are visited
//! order-major, degree-minor, in a single forward pass: only the diagonal term and the two
//! latest terms of the current column are kept, so the whole evaluation runs on a dozen
//! `f32` locals.
//!
//! ## Domain
//!
//! The result is finite for any position with `r² > 0`. Accuracy is only meaningful at or
//! above the Earth's surface and within a few years of the model epoch. A position at the
//! origin produces non-finite components; nothing is reported, the caller owns the domain.

use libm::sqrtf;
use nalgebra::Vector3;

use crate::coefficients::ModelCoefficients;
use crate::constants::{DecimalYear, EARTH_R, NMAX, NT_TO_TESLA};

/// Return the magnetic field in ITRS coordinates, in tesla.
///
/// Arguments
/// ---------
/// * `dyear`: decimal year of the query, e.g. `2021.5`; should lie within the validity window
///   of `model` (typically five years after its epoch)
/// * `position_itrs`: location where the field is predicted, in meters, at or above the surface
/// * `model`: coefficients of the magnetic model
///
/// Return
/// ------
/// * the field vector `B = −∇V` along the ITRS axes, in tesla
///
/// The call performs a fixed number of operations, allocates nothing and is reentrant.
/// Identical inputs always give bit-identical outputs.
///
/// # Example
///
/// ```rust
/// use geomag::{magnetic_field, models::WMM2020};
/// use nalgebra::Vector3;
///
/// // 500 km above the equator at the Greenwich meridian
/// let position = Vector3::new(6_878_137.0_f32, 0.0, 0.0);
/// let b = magnetic_field(2022.0, &position, &WMM2020);
/// assert!(b.norm() > 1.0e-5 && b.norm() < 5.0e-5);
/// ```
pub fn magnetic_field<M>(dyear: DecimalYear, position_itrs: &Vector3<f32>, model: &M) -> Vector3<f32>
where
    M: ModelCoefficients + ?Sized,
{
    let x = position_itrs.x;
    let y = position_itrs.y;
    let z = position_itrs.z;

    let mut px: f32 = 0.0;
    let mut py: f32 = 0.0;
    let mut pz: f32 = 0.0;

    let rsqrd = x * x + y * y + z * z;
    let scale = EARTH_R / rsqrd;
    let a = x * scale;
    let b = y * scale;
    let f = z * scale;
    let g = EARTH_R * scale;

    // V(0,0), W(0,0)
    let mut v_top = EARTH_R / sqrtf(rsqrd);
    let mut w_top: f32 = 0.0;
    let mut v_prev: f32 = 0.0;
    let mut w_prev: f32 = 0.0;
    let mut v_nm = v_top;
    let mut w_nm = w_top;

    for m in 0..=NMAX + 1 {
        for n in m..=NMAX + 1 {
            if n == m {
                if m != 0 {
                    let k = (2 * m - 1) as f32;
                    let v_diag = v_top;
                    v_top = k * (a * v_top - b * w_top);
                    w_top = k * (a * w_top + b * v_diag);
                    v_prev = 0.0;
                    w_prev = 0.0;
                    v_nm = v_top;
                    w_nm = w_top;
                }
            } else {
                let k_f = (2 * n - 1) as f32;
                let k_g = (n + m - 1) as f32;
                let inv_nm = 1.0 / ((n - m) as f32);

                let v_last = v_nm;
                v_nm = (k_f * f * v_nm - k_g * g * v_prev) * inv_nm;
                v_prev = v_last;

                let w_last = w_nm;
                w_nm = (k_f * f * w_nm - k_g * g * w_prev) * inv_nm;
                w_prev = w_last;
            }

            // Order m+1 coefficients of degree n−1.
            if m < NMAX && n >= m + 2 {
                let k = 0.5 * ((n - m) * (n - m - 1)) as f32;
                let c = model.c(n - 1, m + 1, dyear);
                let s = model.s(n - 1, m + 1, dyear);
                px += k * (c * v_nm + s * w_nm);
                py += k * (-c * w_nm + s * v_nm);
            }
            // Order m−1 coefficients of degree n−1.
            if n >= 2 && m >= 2 {
                let c = model.c(n - 1, m - 1, dyear);
                let s = model.s(n - 1, m - 1, dyear);
                px += 0.5 * (-c * v_nm - s * w_nm);
                py += 0.5 * (-c * w_nm + s * v_nm);
            }
            // Zonal coefficient seen from order 1.
            if m == 1 && n >= 2 {
                let c = model.c(n - 1, 0, dyear);
                px += -c * v_nm;
                py += -c * w_nm;
            }
            if n >= 2 && n > m {
                let c = model.c(n - 1, m, dyear);
                let s = model.s(n - 1, m, dyear);
                pz += ((n - m) as f32) * (-c * v_nm - s * w_nm);
            }
        }
    }

    Vector3::new(-px * NT_TO_TESLA, -py * NT_TO_TESLA, -pz * NT_TO_TESLA)
}

#[cfg(test)]
mod synthesis_test {
    use core::cell::Cell;

    use approx::assert_relative_eq;

    use super::*;
    use crate::coefficients::{coefficient_index, CoefficientTable, ConstModel};
    use crate::constants::NUMCOF;
    use crate::models::{WMM2015, WMM2020};

    /// Records the range of (n, m) pairs requested by the synthesis.
    struct Recorder<'a> {
        inner: &'a ConstModel,
        max_index: Cell<usize>,
        calls: Cell<usize>,
    }

    impl ModelCoefficients for Recorder<'_> {
        fn epoch(&self) -> DecimalYear {
            self.inner.epoch()
        }

        fn read(&self, table: CoefficientTable, index: usize) -> f32 {
            assert!(index < NUMCOF, "read outside of the table: {index}");
            self.calls.set(self.calls.get() + 1);
            self.max_index.set(self.max_index.get().max(index));
            self.inner.read(table, index)
        }

        fn c(&self, n: usize, m: usize, dyear: DecimalYear) -> f32 {
            assert!(m <= n && n <= NMAX, "C({n}, {m}) outside the model");
            let index = coefficient_index(n, m);
            self.read(CoefficientTable::MainFieldC, index)
                + (dyear - self.epoch()) * self.read(CoefficientTable::SecularVarC, index)
        }

        fn s(&self, n: usize, m: usize, dyear: DecimalYear) -> f32 {
            assert!(m <= n && n <= NMAX, "S({n}, {m}) outside the model");
            let index = coefficient_index(n, m);
            self.read(CoefficientTable::MainFieldS, index)
                + (dyear - self.epoch()) * self.read(CoefficientTable::SecularVarS, index)
        }
    }

    #[test]
    fn test_reads_stay_inside_tables() {
        let recorder = Recorder {
            inner: &WMM2015,
            max_index: Cell::new(0),
            calls: Cell::new(0),
        };
        let position = Vector3::new(4_000_000.0, -3_000_000.0, 4_500_000.0);
        let b = magnetic_field(2016.0, &position, &recorder);

        assert_eq!(b, magnetic_field(2016.0, &position, &WMM2015));
        assert_eq!(recorder.max_index.get(), NUMCOF - 1);
        assert!(recorder.calls.get() > 0);
    }

    #[test]
    fn test_axial_dipole_on_the_pole() {
        // Only g(1,0): B = 2·g10·(R/r)³ along z above the north pole.
        let mut model = ConstModel::zeroed(2020.0);
        model.main_field_coeff_c[coefficient_index(1, 0)] = -30_000.0;

        let r = 2.0 * EARTH_R;
        let b = magnetic_field(2020.0, &Vector3::new(0.0, 0.0, r), &model);

        assert_eq!(b.x, 0.0);
        assert_eq!(b.y, 0.0);
        assert_relative_eq!(b.z, 2.0 * -30_000.0e-9 / 8.0, max_relative = 1e-5);
    }

    #[test]
    fn test_zero_model_gives_zero_field() {
        let model = ConstModel::zeroed(2020.0);
        let b = magnetic_field(2021.0, &Vector3::new(1.0e7, 2.0e6, -3.0e6), &model);
        assert_eq!(b, Vector3::zeros());
    }

    #[test]
    fn test_origin_is_not_finite() {
        let b = magnetic_field(2020.0, &Vector3::zeros(), &WMM2020);
        assert!(!b.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_field_decays_with_altitude() {
        let low = magnetic_field(2020.0, &Vector3::new(EARTH_R, 0.0, 0.0), &WMM2020);
        let high = magnetic_field(2020.0, &Vector3::new(2.0 * EARTH_R, 0.0, 0.0), &WMM2020);

        // Dipole dominated: roughly (1/2)³
        let ratio = high.norm() / low.norm();
        assert!(ratio > 0.1 && ratio < 0.15, "ratio = {ratio}");
    }

    #[test]
    fn test_const_model_shorthand() {
        let position = Vector3::new(-2_000_000.0, 5_500_000.0, 2_500_000.0);
        assert_eq!(
            WMM2020.field_itrs(2021.25, &position),
            magnetic_field(2021.25, &position, &WMM2020)
        );
    }
}
