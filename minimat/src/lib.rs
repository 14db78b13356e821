//! Minimat - small dense matrices over a flat column-major buffer
//!
//! Provides:
//! - Construction (new, filled, ones, zeroes, eye)
//! - Row and column access (row, col, ranges, in-place setters, iterators)
//! - Elementwise operations (add, schur/hadamard, apply, elem_inv)
//! - Reductions (norm, normalize, diag, trace)
//! - Interchange (delimited text loading, JSON records)
//!
//! Non-fatal conditions (text-typed dimensions, foreign JSON records) are
//! reported through `tracing` warnings; install a subscriber to see them.

mod types;
mod error;
mod helpers;
mod construct;
mod access;
mod ops;
mod norms;
mod parse;
mod json;

pub use types::Matrix;
pub use error::{MatError, Axis, Result, codes};
pub use access::{Rows, Cols};
pub use norms::NormLevel;
pub use parse::{LoadOptions, parse_values};
pub use json::TYPE_TAG;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Matrix, MatError, NormLevel, LoadOptions};
}
