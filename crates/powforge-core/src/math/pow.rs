//! Real-valued exponentiation.
//!
//! `pow` dispatches through an ordered sequence of special-case guards, then
//! routes integer exponents to the squaring kernel and fractional exponents
//! through `exp(y * ln(x))`.

use crate::error::DomainError;
use crate::math::exp::exp;
use crate::math::log::ln;

/// Returns true when `y` has no fractional part and is finite.
///
/// Infinite exponents compare equal to their own floor, so they must be
/// rejected explicitly; treating them as non-integer routes them to the
/// fractional-path guards.
#[inline]
fn is_integer(y: f64) -> bool {
    y == y.floor() && !y.is_infinite()
}

/// Computes `x` raised to the power `y`.
///
/// The guard order is load-bearing: `x == 1` is checked before the `y == 0`
/// and `y == 1` shortcuts, so `pow(1.0, f64::NAN)` and `pow(1.0,
/// f64::INFINITY)` return `1.0` rather than falling through to the series
/// path.
///
/// # Errors
///
/// Returns [`DomainError`] for `0^y` with `y < 0` and for a negative base
/// with a non-integer exponent (the true result is complex-valued).
pub fn pow(x: f64, y: f64) -> Result<f64, DomainError> {
    if x == 0.0 {
        return if y == 0.0 {
            // 0^0 is contested; the calculator convention defines it as 1.
            Ok(1.0)
        } else if y < 0.0 {
            Err(DomainError::ZeroToNegativePower)
        } else {
            Ok(0.0)
        };
    }

    if x == 1.0 {
        return Ok(1.0);
    }

    if y == 0.0 {
        return Ok(1.0);
    }

    if y == 1.0 {
        return Ok(x);
    }

    if x < 0.0 && !is_integer(y) {
        return Err(DomainError::NegativeBaseFractionalExponent);
    }

    // Negative exponents reduce to the reciprocal of a positive power. The
    // recursive call cannot fail for inputs that reached this point.
    if y < 0.0 {
        return Ok(1.0 / pow(x, -y)?);
    }

    if is_integer(y) {
        return Ok(pow_integer(x, y as i64));
    }

    // The negative-base guard above means x > 0 holds here; this is a
    // defensive backstop, not a reachable path.
    if x <= 0.0 {
        return Err(DomainError::FractionalPowerOfNonPositive);
    }

    Ok(exp(y * ln(x)?))
}

/// Computes `x^n` for a signed integer `n` by exponentiation by squaring.
///
/// Terminates in O(log |n|) multiplications, folding the running base into
/// the accumulator wherever the exponent's binary digit is 1. Negative
/// exponents invert the positive power.
#[must_use]
pub fn pow_integer(x: f64, n: i64) -> f64 {
    if n == 0 {
        return 1.0;
    }
    if n == 1 {
        return x;
    }

    let negative = n < 0;
    let mut bits = n.unsigned_abs();
    let mut result = 1.0;
    let mut base = x;

    while bits > 0 {
        if bits & 1 == 1 {
            result *= base;
        }
        base *= base;
        bits >>= 1;
    }

    if negative { 1.0 / result } else { result }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= rel_tol * scale,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn zero_base_cases() {
        assert_eq!(pow(0.0, 0.0), Ok(1.0));
        assert_eq!(pow(0.0, 5.0), Ok(0.0));
        assert_eq!(pow(0.0, 0.5), Ok(0.0));
        assert_eq!(pow(0.0, -1.0), Err(DomainError::ZeroToNegativePower));
        assert_eq!(pow(0.0, -0.5), Err(DomainError::ZeroToNegativePower));
    }

    #[test]
    fn unit_base_short_circuits_before_exponent_guards() {
        assert_eq!(pow(1.0, 7.0), Ok(1.0));
        assert_eq!(pow(1.0, -3.25), Ok(1.0));
        // Documented boundary: x == 1 wins even for non-finite exponents.
        assert_eq!(pow(1.0, f64::NAN), Ok(1.0));
        assert_eq!(pow(1.0, f64::INFINITY), Ok(1.0));
        assert_eq!(pow(1.0, f64::NEG_INFINITY), Ok(1.0));
    }

    #[test]
    fn trivial_exponents() {
        assert_eq!(pow(3.5, 0.0), Ok(1.0));
        assert_eq!(pow(-7.0, 0.0), Ok(1.0));
        assert_eq!(pow(42.0, 1.0), Ok(42.0));
        assert_eq!(pow(-42.0, 1.0), Ok(-42.0));
    }

    #[test]
    fn negative_base_integer_exponents() {
        assert_eq!(pow(-2.0, 3.0), Ok(-8.0));
        assert_eq!(pow(-2.0, 4.0), Ok(16.0));
        assert_eq!(pow(-2.0, -3.0), Ok(-0.125));
    }

    #[test]
    fn negative_base_fractional_exponent_is_rejected() {
        assert_eq!(
            pow(-4.0, 0.5),
            Err(DomainError::NegativeBaseFractionalExponent)
        );
        assert_eq!(
            pow(-2.0, -0.5),
            Err(DomainError::NegativeBaseFractionalExponent)
        );
        // Infinite exponents count as non-integer.
        assert_eq!(
            pow(-2.0, f64::INFINITY),
            Err(DomainError::NegativeBaseFractionalExponent)
        );
    }

    #[test]
    fn integer_exponent_cases() {
        assert_eq!(pow(2.0, 3.0), Ok(8.0));
        assert_eq!(pow(2.0, -3.0), Ok(0.125));
        assert_eq!(pow(2.0, 10.0), Ok(1024.0));
        assert_close(pow(10.0, 30.0).unwrap(), 1e30, 1e-5);
    }

    #[test]
    fn fractional_exponent_cases() {
        assert_close(pow(4.0, 0.5).unwrap(), 2.0, 1e-9);
        assert_close(pow(9.0, 0.5).unwrap(), 3.0, 1e-9);
        assert_close(pow(2.0, 0.5).unwrap(), std::f64::consts::SQRT_2, 1e-9);
        assert_close(pow(2.5, 1.5).unwrap(), 2.5f64.powf(1.5), 1e-9);
        assert_close(pow(0.5, 0.5).unwrap(), 0.5f64.powf(0.5), 1e-9);
    }

    #[test]
    fn negative_fractional_exponent_inverts() {
        assert_close(pow(4.0, -0.5).unwrap(), 0.5, 1e-9);
        assert_close(pow(9.0, -0.5).unwrap(), 1.0 / 3.0, 1e-9);
    }

    #[test]
    fn integer_power_matches_repeated_multiplication() {
        for &x in &[0.5, 1.5, -2.0, 3.0, 7.25] {
            for n in 0..16i64 {
                let mut expected = 1.0;
                for _ in 0..n {
                    expected *= x;
                }
                assert_close(pow_integer(x, n), expected, 1e-12);
                if expected != 0.0 {
                    assert_close(pow_integer(x, -n), 1.0 / expected, 1e-12);
                }
            }
        }
    }

    #[test]
    fn round_trip_inverse() {
        for &x in &[0.5, 2.0, 3.0, 10.0] {
            for &n in &[1.0, 2.0, 5.0, 13.0] {
                let forward = pow(x, n).unwrap();
                let inverse = pow(x, -n).unwrap();
                assert_close(forward * inverse, 1.0, 1e-10);
            }
        }
    }
}
