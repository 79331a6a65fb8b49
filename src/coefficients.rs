//! # Coefficient store
//!
//! Storage and time-corrected lookup of the spherical-harmonic coefficients of a
//! magnetic model.
//!
//! Every table holds the upper-triangular `(n, m)` coefficient matrix flattened into one
//! linear array through the closed-form index
//!
//! ```text
//! index(n, m) = m·(2·NMAX − m + 1)/2 + n        0 ≤ m ≤ n ≤ NMAX
//! ```
//!
//! Rows of constant order `m` are stored contiguously, degree-major, without gaps.
//!
//! The coefficients are **unnormalized** (Montenbruck & Gill convention): a Schmidt
//! semi-normalized Gauss coefficient `g(n, m)` is stored as `g(n, m)·sqrt(2·(n−m)!/(n+m)!)`
//! for `m > 0` and unchanged for `m = 0`. See [`crate::cof`] for the conversion.
//!
//! ## Storage backends
//!
//! The synthesis only needs the [`ModelCoefficients`] capability. [`ConstModel`] reads plain
//! arrays; a target that keeps its tables in a separate memory tier (program flash, external
//! EEPROM…) implements [`ModelCoefficients::read`] with the matching access primitive and
//! inherits the time-corrected lookup unchanged.

use nalgebra::Vector3;

use crate::constants::{DecimalYear, NMAX, NUMCOF};
use crate::synthesis::magnetic_field;

/// Flattened position of the `(n, m)` coefficient in a table.
///
/// Arguments
/// ---------
/// * `n`: degree, `n ≤ NMAX`
/// * `m`: order, `m ≤ n`
///
/// Return
/// ------
/// * the index in `[0, NUMCOF)`; pairs outside the triangle are never requested by the synthesis
#[inline(always)]
pub const fn coefficient_index(n: usize, m: usize) -> usize {
    debug_assert!(m <= n && n <= NMAX);
    (m * (2 * NMAX - m + 1)) / 2 + n
}

/// Identifies one of the four coefficient tables of a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoefficientTable {
    /// Main-field cosine terms (`g`)
    MainFieldC,
    /// Main-field sine terms (`h`)
    MainFieldS,
    /// Secular-variation cosine terms (`ġ`, per year)
    SecularVarC,
    /// Secular-variation sine terms (`ḣ`, per year)
    SecularVarS,
}

/// Read access to the coefficients of a magnetic model.
///
/// Implementors only provide the epoch and a raw table read; the first-order time
/// extrapolation is shared by all backends.
pub trait ModelCoefficients {
    /// Decimal year at which the main-field coefficients are valid.
    fn epoch(&self) -> DecimalYear;

    /// Raw value stored at `index` in `table`.
    fn read(&self, table: CoefficientTable, index: usize) -> f32;

    /// Cosine coefficient `(n, m)` extrapolated to `dyear`.
    ///
    /// ```text
    /// C(n, m, t) = C₀[index] + (t − epoch)·Ċ[index]
    /// ```
    #[inline]
    fn c(&self, n: usize, m: usize, dyear: DecimalYear) -> f32 {
        let index = coefficient_index(n, m);
        self.read(CoefficientTable::MainFieldC, index)
            + (dyear - self.epoch()) * self.read(CoefficientTable::SecularVarC, index)
    }

    /// Sine coefficient `(n, m)` extrapolated to `dyear`.
    #[inline]
    fn s(&self, n: usize, m: usize, dyear: DecimalYear) -> f32 {
        let index = coefficient_index(n, m);
        self.read(CoefficientTable::MainFieldS, index)
            + (dyear - self.epoch()) * self.read(CoefficientTable::SecularVarS, index)
    }
}

impl<M: ModelCoefficients + ?Sized> ModelCoefficients for &M {
    #[inline]
    fn epoch(&self) -> DecimalYear {
        (**self).epoch()
    }

    #[inline]
    fn read(&self, table: CoefficientTable, index: usize) -> f32 {
        (**self).read(table, index)
    }

    #[inline]
    fn c(&self, n: usize, m: usize, dyear: DecimalYear) -> f32 {
        (**self).c(n, m, dyear)
    }

    #[inline]
    fn s(&self, n: usize, m: usize, dyear: DecimalYear) -> f32 {
        (**self).s(n, m, dyear)
    }
}

/// A magnetic model held in ordinary read-only memory.
///
/// Published models are shipped as `static` instances (see [`crate::models`]); a model
/// parsed at run time with [`crate::cof::parse_cof`] has the same layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstModel {
    /// Decimal year of validity of the main-field coefficients
    pub epoch: DecimalYear,
    pub main_field_coeff_c: [f32; NUMCOF],
    pub main_field_coeff_s: [f32; NUMCOF],
    pub secular_var_coeff_c: [f32; NUMCOF],
    pub secular_var_coeff_s: [f32; NUMCOF],
}

impl ConstModel {
    /// A model with every coefficient set to zero.
    pub const fn zeroed(epoch: DecimalYear) -> Self {
        ConstModel {
            epoch,
            main_field_coeff_c: [0.0; NUMCOF],
            main_field_coeff_s: [0.0; NUMCOF],
            secular_var_coeff_c: [0.0; NUMCOF],
            secular_var_coeff_s: [0.0; NUMCOF],
        }
    }

    /// Mutable access to one table, used when assembling a model from records.
    pub(crate) fn table_mut(&mut self, table: CoefficientTable) -> &mut [f32; NUMCOF] {
        match table {
            CoefficientTable::MainFieldC => &mut self.main_field_coeff_c,
            CoefficientTable::MainFieldS => &mut self.main_field_coeff_s,
            CoefficientTable::SecularVarC => &mut self.secular_var_coeff_c,
            CoefficientTable::SecularVarS => &mut self.secular_var_coeff_s,
        }
    }

    /// Magnetic field in ITRS coordinates, in tesla.
    ///
    /// Shorthand for [`magnetic_field`] with this model.
    pub fn field_itrs(&self, dyear: DecimalYear, position_itrs: &Vector3<f32>) -> Vector3<f32> {
        magnetic_field(dyear, position_itrs, self)
    }
}

impl ModelCoefficients for ConstModel {
    #[inline]
    fn epoch(&self) -> DecimalYear {
        self.epoch
    }

    #[inline]
    fn read(&self, table: CoefficientTable, index: usize) -> f32 {
        match table {
            CoefficientTable::MainFieldC => self.main_field_coeff_c[index],
            CoefficientTable::MainFieldS => self.main_field_coeff_s[index],
            CoefficientTable::SecularVarC => self.secular_var_coeff_c[index],
            CoefficientTable::SecularVarS => self.secular_var_coeff_s[index],
        }
    }
}

/// View of a model with every term of degree above `max_degree` forced to zero.
///
/// With `max_degree = 1` the expansion reduces to a centered dipole.
#[derive(Debug, Clone, Copy)]
pub struct Truncated<'a, M: ?Sized> {
    inner: &'a M,
    max_degree: usize,
}

impl<'a, M: ModelCoefficients + ?Sized> Truncated<'a, M> {
    pub fn new(inner: &'a M, max_degree: usize) -> Self {
        Truncated { inner, max_degree }
    }

    pub fn max_degree(&self) -> usize {
        self.max_degree
    }
}

impl<M: ModelCoefficients + ?Sized> ModelCoefficients for Truncated<'_, M> {
    #[inline]
    fn epoch(&self) -> DecimalYear {
        self.inner.epoch()
    }

    #[inline]
    fn read(&self, table: CoefficientTable, index: usize) -> f32 {
        self.inner.read(table, index)
    }

    #[inline]
    fn c(&self, n: usize, m: usize, dyear: DecimalYear) -> f32 {
        if n > self.max_degree {
            0.0
        } else {
            self.inner.c(n, m, dyear)
        }
    }

    #[inline]
    fn s(&self, n: usize, m: usize, dyear: DecimalYear) -> f32 {
        if n > self.max_degree {
            0.0
        } else {
            self.inner.s(n, m, dyear)
        }
    }
}
