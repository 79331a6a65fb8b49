//! # Published magnetic models
//!
//! Each model is a `static` [`ConstModel`](crate::coefficients::ConstModel) so it lands in the
//! read-only data section of the binary (flash on most microcontrollers). Pick the model whose
//! validity window contains the query date; the crate never selects one on its own.
//!
//! | Model         | Epoch  | Valid until |
//! |---------------|--------|-------------|
//! | [`WMM2015`]   | 2015.0 | 2020.0      |
//! | [`WMM2015V2`] | 2015.0 | 2020.0      |
//! | [`WMM2020`]   | 2020.0 | 2025.0      |

mod wmm2015;
mod wmm2015v2;
mod wmm2020;

pub use wmm2015::WMM2015;
pub use wmm2015v2::WMM2015V2;
pub use wmm2020::WMM2020;
