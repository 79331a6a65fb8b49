//! # geomag
//!
//! Magnetic field of the World Magnetic Model in International Terrestrial Reference System
//! (ITRS) coordinates, designed for memory-constrained targets.
//!
//! The evaluation uses the non-singular solid-harmonic recursion of Montenbruck & Gill
//! (*Satellite Orbits: Models, Methods and Applications*, 2000, sections 3.2.4–3.2.5) on
//! unnormalized coefficients. It runs in single precision on a handful of stack scalars:
//! no heap, no tables of Legendre functions, no trigonometry, and a fixed operation count.
//! The field is returned in tesla along the axes of the input position.
//!
//! ## Crate layout
//!
//! - [`coefficients`] – flattened triangular coefficient tables and the time-corrected lookup
//! - [`synthesis`] – the field evaluation kernel [`magnetic_field`]
//! - [`models`] – published WMM coefficient sets as read-only statics
//! - [`cof`] – reader for WMM `.COF` coefficient files
//! - [`evaluator`] – configurable front end with logging, degree truncation and geodetic queries
//! - [`frames`], [`elements`] – caller-side coordinate helpers and WMM magnetic elements
//! - `time` – decimal years from [`hifitime`] epochs (`std` feature)
//!
//! ## Features
//!
//! - `std` (default): standard library support and the `hifitime` time helpers. Without it the
//!   crate is `no_std` and everything else stays available.
//!
//! ## Example
//!
//! ```rust
//! use geomag::{magnetic_field, models::WMM2020};
//! use nalgebra::Vector3;
//!
//! // Sea level, 80°N 0°E (WGS84), in meters
//! let position = Vector3::new(1_111_164.9_f32, 0.0, 6_259_543.0);
//! let b = magnetic_field(2020.0, &position, &WMM2020);
//!
//! // ~55 µT near the north magnetic pole
//! assert!((b.norm() - 55.0e-6).abs() < 1.0e-6);
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod coefficients;
pub mod cof;
pub mod constants;
pub mod elements;
pub mod evaluator;
pub mod frames;
pub mod geomag_errors;
pub mod models;
pub mod synthesis;
#[cfg(feature = "std")]
pub mod time;

pub use coefficients::{coefficient_index, ConstModel, ModelCoefficients, Truncated};
pub use geomag_errors::GeomagError;
pub use synthesis::magnetic_field;
