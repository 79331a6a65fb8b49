//! # WMM coefficient files
//!
//! Reader for the `.COF` text format in which the World Magnetic Model coefficients are
//! published, producing a [`ConstModel`] in the layout used by the synthesis.
//!
//! ## Format
//!
//! ```text
//!     2020.0            WMM-2020        12/10/2019
//!   1  0  -29404.5       0.0        6.7        0.0
//!   1  1   -1450.7    4652.5        7.7      -25.1
//!   ...
//! 999999999999999999999999999999999999999999999999
//! ```
//!
//! The header carries the epoch, the model name and its release date. Each record holds
//! `n m g h ġ ḣ` with Schmidt semi-normalized coefficients in nanotesla (rates per year).
//! Reading stops at the first line of `9`s.
//!
//! ## Normalization
//!
//! The recursion of [`crate::synthesis`] works on unnormalized harmonics, so every record is
//! rescaled on the way in:
//!
//! ```text
//! k(n, 0) = 1
//! k(n, m) = sqrt(2·(n−m)! / (n+m)!)      m > 0
//!
//! C(n, m) = k(n, m)·g(n, m)      S(n, m) = k(n, m)·h(n, m)
//! ```
//!
//! The same factor applies to the secular-variation rates. Parsing allocates nothing; the
//! returned [`CofModel`] borrows its name from the input text.

use core::str::FromStr;

use libm::sqrt;
use log::{debug, warn};

use crate::coefficients::{coefficient_index, CoefficientTable, ConstModel};
use crate::constants::{DecimalYear, NMAX, NUMCOF};
use crate::geomag_errors::GeomagError;

/// A model read from a coefficient file.
#[derive(Debug, Clone, PartialEq)]
pub struct CofModel<'a> {
    /// Model name as written in the header, e.g. `WMM-2020`
    pub name: &'a str,
    /// Release date as written in the header, if present
    pub release_date: Option<&'a str>,
    /// Unnormalized coefficients, ready for the synthesis
    pub model: ConstModel,
}

/// Scale factor from a Schmidt semi-normalized to an unnormalized coefficient.
///
/// Arguments
/// ---------
/// * `n`: degree
/// * `m`: order, `m ≤ n`
///
/// Return
/// ------
/// * `1` for zonal terms, `sqrt(2·(n−m)!/(n+m)!)` otherwise
pub fn schmidt_to_unnormalized(n: usize, m: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    // (n+m)! / (n−m)!
    let ratio: f64 = ((n - m + 1)..=(n + m)).map(|k| k as f64).product();
    sqrt(2.0 / ratio)
}

fn is_terminator(line: &str) -> bool {
    line.starts_with("9999")
}

fn parse_field<T: FromStr>(
    field: Option<&str>,
    line: usize,
    reason: &'static str,
) -> Result<T, GeomagError> {
    field
        .and_then(|f| f.parse().ok())
        .ok_or(GeomagError::InvalidRecord { line, reason })
}

/// Parse the text of a `.COF` coefficient file.
///
/// Arguments
/// ---------
/// * `text`: full content of the file
///
/// Return
/// ------
/// * `Ok(CofModel)` with every record converted to the unnormalized layout; degrees absent
///   from the file are left at zero
/// * `Err(GeomagError)` when the header is missing or invalid, when a record is malformed,
///   or when a record lies outside `1 ≤ n ≤ NMAX`, `m ≤ n`
///
/// # Example
///
/// ```rust
/// use geomag::cof::parse_cof;
/// use geomag::coefficients::ModelCoefficients;
///
/// let text = "\
///     2020.0            WMM-2020        12/10/2019
///   1  0  -29404.5       0.0        6.7        0.0
/// 999999999999999999999999999999999999999999999999
/// ";
/// let cof = parse_cof(text).unwrap();
/// assert_eq!(cof.name, "WMM-2020");
/// assert_eq!(cof.model.c(1, 0, 2020.0), -29404.5);
/// ```
pub fn parse_cof(text: &str) -> Result<CofModel<'_>, GeomagError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_line, header) = lines.next().ok_or(GeomagError::MissingHeader)?;
    let mut header_fields = header.split_whitespace();
    let epoch: DecimalYear = header_fields
        .next()
        .and_then(|f| f.parse().ok())
        .ok_or(GeomagError::InvalidHeader(header_line))?;
    let name = header_fields
        .next()
        .ok_or(GeomagError::InvalidHeader(header_line))?;
    let release_date = header_fields.next();

    debug!("coefficient file header: {name} (epoch {epoch}, released {release_date:?})");

    let mut model = ConstModel::zeroed(epoch);
    let mut seen = [false; NUMCOF];
    let mut records = 0usize;

    for (line, record) in lines {
        if is_terminator(record) {
            break;
        }

        let mut fields = record.split_whitespace();
        let n: usize = parse_field(fields.next(), line, "invalid degree")?;
        let m: usize = parse_field(fields.next(), line, "invalid order")?;
        let mut values = [0.0f64; 4];
        for value in values.iter_mut() {
            *value = parse_field(fields.next(), line, "invalid coefficient")?;
        }

        if n == 0 || n > NMAX || m > n {
            return Err(GeomagError::DegreeOutOfRange { line, n, m });
        }

        let index = coefficient_index(n, m);
        if seen[index] {
            warn!("duplicate coefficient record ({n}, {m}) at line {line}, keeping the last one");
        }
        seen[index] = true;
        records += 1;

        let k = schmidt_to_unnormalized(n, m);
        let tables = [
            CoefficientTable::MainFieldC,
            CoefficientTable::MainFieldS,
            CoefficientTable::SecularVarC,
            CoefficientTable::SecularVarS,
        ];
        for (table, value) in tables.into_iter().zip(values) {
            model.table_mut(table)[index] = (k * value) as f32;
        }
    }

    // Degree 0 has no record.
    let missing = NUMCOF - 1 - seen.iter().filter(|&&s| s).count();
    if missing > 0 {
        warn!("{name}: {missing} coefficient records missing, treated as zero");
    }
    debug!("{name}: {records} coefficient records read");

    Ok(CofModel {
        name,
        release_date,
        model,
    })
}
