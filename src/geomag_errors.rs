use thiserror::Error;

/// Errors reported by the fallible surfaces of the crate (configuration and
/// coefficient-file ingestion). Field evaluation itself never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeomagError {
    #[error("Invalid evaluation parameter: {0}")]
    InvalidParameter(&'static str),

    #[error("Coefficient file has no header line")]
    MissingHeader,

    #[error("Invalid coefficient file header at line {0}")]
    InvalidHeader(usize),

    #[error("Malformed coefficient record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: &'static str },

    #[error("Degree/order ({n}, {m}) out of range at line {line}")]
    DegreeOutOfRange { line: usize, n: usize, m: usize },
}
