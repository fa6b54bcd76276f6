//! Domain-error definitions.
//!
//! The kernel has a single failure kind: the requested inputs place the
//! computation outside the real-number domain it supports. Errors are
//! terminal for the call and are never retried.

use thiserror::Error;

/// Inputs outside the real-number domain supported by the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("0 raised to a negative power is undefined.")]
    ZeroToNegativePower,
    #[error(
        "Negative base with a non-integer exponent results in a complex number, \
         which is not supported."
    )]
    NegativeBaseFractionalExponent,
    #[error("Cannot compute fractional power of non-positive number.")]
    FractionalPowerOfNonPositive,
    #[error("Natural logarithm is undefined for non-positive numbers.")]
    LogOfNonPositive,
}
