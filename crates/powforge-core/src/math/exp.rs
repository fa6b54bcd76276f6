//! Exponential function via integer/fraction splitting and a Taylor series.

use crate::math::pow::pow_integer;

/// Euler's number, the base for the integer part `e^n`.
pub const E: f64 = 2.718_281_828_459_045;

const MAX_TERMS: usize = 100;
const CONVERGENCE_EPS: f64 = 1e-15;

/// Computes `e^x`.
///
/// Splits `x = n + f` with `n = floor(x)` and `f` in `[0, 1)`, sums
/// `e^f = 1 + f + f^2/2! + f^3/3! + ...` building each term as
/// `term * f / i`, and reassembles with `e^n` from the squaring kernel.
/// The split bounds the series argument, so the factorial denominators
/// dominate after a handful of terms; feeding large `|x|` straight into the
/// series would converge too slowly and lose precision.
#[must_use]
pub fn exp(x: f64) -> f64 {
    if x == 0.0 {
        return 1.0;
    }

    let n = x.floor() as i64;
    let f = x - x.floor();

    let mut result = 1.0;
    let mut term = 1.0;

    for i in 1..=MAX_TERMS {
        term *= f / i as f64;
        result += term;

        if term.abs() < CONVERGENCE_EPS {
            break;
        }
    }

    pow_integer(E, n) * result
}
