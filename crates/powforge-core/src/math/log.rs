//! Natural logarithm via binary range reduction and a Taylor series.

use crate::error::DomainError;

/// ln(2), used to reassemble `ln(x) = k * ln(2) + ln(m)` after reduction.
pub const LN_2: f64 = 0.693_147_180_559_945_3;

const MAX_TERMS: usize = 100;
const CONVERGENCE_EPS: f64 = 1e-15;

/// Computes the natural logarithm of `x`.
///
/// Range-reduces `x` to `2^k * m` with `m` in `[1, 2)` by repeated halving or
/// doubling, then sums the alternating series `ln(1+u) = u - u^2/2 + u^3/3 -
/// ...` with `u = m - 1`. Reduction keeps `u` in `[0, 1)`, inside the series'
/// radius of convergence, so each additional term shrinks geometrically.
///
/// # Errors
///
/// Returns [`DomainError::LogOfNonPositive`] when `x <= 0`.
pub fn ln(x: f64) -> Result<f64, DomainError> {
    if x <= 0.0 {
        return Err(DomainError::LogOfNonPositive);
    }
    if x == 1.0 {
        return Ok(0.0);
    }

    let mut m = x;
    let mut k = 0i32;
    while m >= 2.0 {
        m /= 2.0;
        k += 1;
    }
    while m < 1.0 {
        m *= 2.0;
        k -= 1;
    }

    let u = m - 1.0;
    let mut result = 0.0;
    let mut term = u;

    for i in 1..=MAX_TERMS {
        let contribution = term / i as f64;
        if i % 2 == 1 {
            result += contribution;
        } else {
            result -= contribution;
        }
        term *= u;

        if (term / i as f64).abs() < CONVERGENCE_EPS {
            break;
        }
    }

    Ok(f64::from(k) * LN_2 + result)
}
