//! # powforge-core
//!
//! Safe Rust power kernel: `x^y` without platform pow/exp/log primitives.
//!
//! This crate builds real-valued exponentiation from three first-principles
//! pieces: exponentiation by squaring for integer exponents, a Taylor-series
//! natural logarithm with binary range reduction, and a Taylor-series
//! exponential with integer/fraction splitting. Every call is pure and
//! self-contained; there is no shared state and no `unsafe` code.

#![deny(unsafe_code)]

pub mod error;
pub mod math;

pub use error::DomainError;
pub use math::exp::{E, exp};
pub use math::log::{LN_2, ln};
pub use math::pow::{pow, pow_integer};
