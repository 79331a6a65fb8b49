//! # Field evaluator
//!
//! This module defines the [`EvaluationParams`] configuration struct, its builder, and the
//! [`FieldEvaluator`] that applies them around the core synthesis.
//!
//! ## Purpose
//!
//! [`magnetic_field`](crate::synthesis::magnetic_field) is a bare numerical kernel: it trusts
//! its inputs and never reports anything. The evaluator is the convenient front door for
//! applications that can afford a few comparisons per call:
//!
//! - **Validity window** – queries more than `validity_years` away from the model epoch are
//!   still evaluated, but a warning is logged since the linear secular variation degrades.
//! - **Minimum radius** – positions closer to the Earth's center than `min_radius` (inside the
//!   Earth) are evaluated and logged.
//! - **Degree truncation** – `max_degree` limits the expansion, e.g. `1` for a centered dipole.
//! - **Geodetic queries** – field in the local North-East-Down frame, and the seven magnetic
//!   elements, from a WGS84 latitude, longitude and height.
//!
//! ## Example
//!
//! ```rust
//! use geomag::evaluator::{EvaluationParams, FieldEvaluator};
//! use geomag::models::WMM2020;
//!
//! let params = EvaluationParams::builder()
//!     .validity_years(5.0)
//!     .max_degree(12)
//!     .build()
//!     .unwrap();
//!
//! let evaluator = FieldEvaluator::new(&WMM2020, params);
//! let elements = evaluator.field_elements(2020.0, 80.0, 0.0, 0.0);
//! assert!((elements.declination - (-1.28)).abs() < 0.01);
//! ```

use core::cmp::Ordering::{Equal, Greater};

use libm::fabsf;
use log::warn;
use nalgebra::Vector3;

use crate::coefficients::{ModelCoefficients, Truncated};
use crate::constants::{DecimalYear, Degree, Meter, NMAX};
use crate::elements::FieldElements;
use crate::frames::{geodetic_to_itrs, ned_rotation};
use crate::geomag_errors::GeomagError;
use crate::synthesis::magnetic_field;

/// Configuration of a [`FieldEvaluator`].
///
/// Defaults
/// -----------------
/// * `validity_years`: 5.0 (WMM release cycle)
/// * `min_radius`: 6 356 000.0 m (just inside the WGS84 polar radius)
/// * `max_degree`: [`NMAX`]
///
/// Notes & Validation
/// -----------------
/// * `validity_years ≥ 0`
/// * `min_radius > 0`
/// * `1 ≤ max_degree ≤ NMAX`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationParams {
    /// Maximum distance in years between the query and the model epoch before a warning
    pub validity_years: f32,
    /// Geocentric distance in meters below which a query is reported as inside the Earth
    pub min_radius: Meter,
    /// Highest degree kept in the expansion
    pub max_degree: usize,
}

impl EvaluationParams {
    /// Construct a new [`EvaluationParams`] with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`EvaluationParamsBuilder`] to override the defaults step by step.
    pub fn builder() -> EvaluationParamsBuilder {
        EvaluationParamsBuilder::new()
    }
}

impl Default for EvaluationParams {
    fn default() -> Self {
        EvaluationParams {
            validity_years: 5.0,
            min_radius: 6_356_000.0,
            max_degree: NMAX,
        }
    }
}

/// Builder for [`EvaluationParams`], with validation.
#[derive(Debug, Clone)]
pub struct EvaluationParamsBuilder {
    params: EvaluationParams,
}

impl Default for EvaluationParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EvaluationParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: EvaluationParams::default(),
        }
    }

    pub fn validity_years(mut self, v: f32) -> Self {
        self.params.validity_years = v;
        self
    }
    pub fn min_radius(mut self, v: Meter) -> Self {
        self.params.min_radius = v;
        self
    }
    pub fn max_degree(mut self, v: usize) -> Self {
        self.params.max_degree = v;
        self
    }

    /// Return true iff x > 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn gt0(x: f32) -> bool {
        x.partial_cmp(&0.0) == Some(Greater)
    }

    /// Return true iff x >= 0.0 and comparable (i.e., not NaN).
    #[inline]
    fn ge0(x: f32) -> bool {
        matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
    }

    /// Finalize the builder and produce an [`EvaluationParams`] instance.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(EvaluationParams)` if all values are valid.
    /// * `Err(GeomagError::InvalidParameter)` naming the first rule that fails.
    pub fn build(self) -> Result<EvaluationParams, GeomagError> {
        let p = &self.params;

        if !Self::ge0(p.validity_years) {
            return Err(GeomagError::InvalidParameter(
                "validity_years must be non-negative",
            ));
        }
        if !Self::gt0(p.min_radius) {
            return Err(GeomagError::InvalidParameter("min_radius must be > 0"));
        }
        if p.max_degree == 0 || p.max_degree > NMAX {
            return Err(GeomagError::InvalidParameter(
                "max_degree must be between 1 and NMAX",
            ));
        }

        Ok(self.params)
    }
}

/// A magnetic model together with its [`EvaluationParams`].
#[derive(Debug, Clone, Copy)]
pub struct FieldEvaluator<'a, M: ?Sized> {
    model: &'a M,
    params: EvaluationParams,
}

impl<'a, M: ModelCoefficients + ?Sized> FieldEvaluator<'a, M> {
    pub fn new(model: &'a M, params: EvaluationParams) -> Self {
        FieldEvaluator { model, params }
    }

    pub fn params(&self) -> &EvaluationParams {
        &self.params
    }

    pub fn epoch(&self) -> DecimalYear {
        self.model.epoch()
    }

    /// Magnetic field in ITRS coordinates, in tesla.
    ///
    /// Out-of-window dates and positions below `min_radius` are logged, never rejected.
    pub fn field_itrs(&self, dyear: DecimalYear, position_itrs: &Vector3<f32>) -> Vector3<f32> {
        let epoch = self.model.epoch();
        if fabsf(dyear - epoch) > self.params.validity_years {
            warn!(
                "date {dyear} is more than {} years away from the model epoch {epoch}",
                self.params.validity_years
            );
        }
        let radius = position_itrs.norm();
        if radius < self.params.min_radius {
            warn!(
                "position at {radius} m from the center is below the minimum radius {} m",
                self.params.min_radius
            );
        }

        if self.params.max_degree < NMAX {
            let truncated = Truncated::new(self.model, self.params.max_degree);
            magnetic_field(dyear, position_itrs, &truncated)
        } else {
            magnetic_field(dyear, position_itrs, self.model)
        }
    }

    /// Magnetic field in the local North-East-Down frame of a WGS84 geodetic point, in tesla.
    ///
    /// Arguments
    /// ---------
    /// * `dyear`: decimal year of the query
    /// * `lat`: geodetic latitude in degrees
    /// * `lon`: longitude in degrees, east positive
    /// * `height`: height above the ellipsoid in meters
    pub fn field_ned(
        &self,
        dyear: DecimalYear,
        lat: Degree,
        lon: Degree,
        height: Meter,
    ) -> Vector3<f32> {
        let position = geodetic_to_itrs(lat, lon, height);
        ned_rotation(lat, lon) * self.field_itrs(dyear, &position)
    }

    /// The seven magnetic elements at a WGS84 geodetic point.
    pub fn field_elements(
        &self,
        dyear: DecimalYear,
        lat: Degree,
        lon: Degree,
        height: Meter,
    ) -> FieldElements {
        FieldElements::from_ned(&self.field_ned(dyear, lat, lon, height))
    }
}
