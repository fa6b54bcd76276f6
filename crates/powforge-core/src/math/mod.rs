//! Mathematical kernels.
//!
//! Implements the power function and its two series backends: a range-reduced
//! natural logarithm and an integer/fraction-split exponential.

pub mod exp;
pub mod log;
pub mod pow;

pub use exp::exp;
pub use log::ln;
pub use pow::{pow, pow_integer};
