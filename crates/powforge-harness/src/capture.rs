//! Host reference capture.
//!
//! Runs a built-in case grid against the host `f64::powf` (the primitive the
//! kernel replaces) and serializes inputs/outputs as JSON fixtures for later
//! verification. Inputs that sit outside the kernel's real-number domain are
//! recorded with their expected domain-error classification instead of the
//! host's NaN/infinity sentinel.

use crate::error::HarnessError;
use crate::fixtures::{DomainErrorKind, ExpectedOutcome, FixtureCase, FixtureSet};

/// Function family recorded in captured fixture sets.
pub const FAMILY: &str = "math/pow";

/// Default relative tolerance for value comparisons.
///
/// The series kernels land within a few ulps of the host on the captured
/// grid; 1e-9 leaves generous headroom without masking real regressions.
pub const DEFAULT_REL_TOL: f64 = 1e-9;

/// The built-in capture grid.
///
/// Bases in the value grid keep their reduced mantissa well below 2 so the
/// logarithm series converges to the termination threshold inside its
/// 100-term cap.
#[must_use]
pub fn builtin_cases() -> Vec<FixtureCase> {
    let value_grid: &[(&str, f64, f64)] = &[
        ("cube", 2.0, 3.0),
        ("cube_inverse", 2.0, -3.0),
        ("pow2_10", 2.0, 10.0),
        ("pow10_30", 10.0, 30.0),
        ("identity_exponent", 5.0, 1.0),
        ("zero_exponent", 7.0, 0.0),
        ("half_squared", 0.5, 2.0),
        ("negative_cube", -2.0, 3.0),
        ("negative_fourth", -2.0, 4.0),
        ("negative_cube_inverse", -2.0, -3.0),
        ("zero_to_zero", 0.0, 0.0),
        ("zero_to_positive", 0.0, 5.0),
        ("zero_to_fraction", 0.0, 0.5),
        ("unit_base_fraction", 1.0, 2.5),
        ("sqrt_4", 4.0, 0.5),
        ("sqrt_9", 9.0, 0.5),
        ("sqrt_2", 2.0, 0.5),
        ("fraction_2_5", 2.5, 1.5),
        ("fraction_half", 0.5, 0.5),
        ("quarter_root_100", 100.0, 0.25),
        ("negative_fraction_exponent", 10.0, -1.5),
        ("fraction_3", 3.0, 2.5),
    ];

    let error_grid: &[(&str, f64, f64, DomainErrorKind)] = &[
        (
            "zero_to_negative",
            0.0,
            -1.0,
            DomainErrorKind::ZeroToNegativePower,
        ),
        (
            "zero_to_negative_fraction",
            0.0,
            -0.5,
            DomainErrorKind::ZeroToNegativePower,
        ),
        (
            "negative_base_sqrt",
            -4.0,
            0.5,
            DomainErrorKind::NegativeBaseFractionalExponent,
        ),
        (
            "negative_base_negative_fraction",
            -2.0,
            -0.5,
            DomainErrorKind::NegativeBaseFractionalExponent,
        ),
    ];

    let mut cases = Vec::with_capacity(value_grid.len() + error_grid.len());

    for &(name, base, exponent) in value_grid {
        cases.push(FixtureCase {
            name: name.to_string(),
            base,
            exponent,
            expected: ExpectedOutcome::Value {
                value: base.powf(exponent),
                rel_tol: DEFAULT_REL_TOL,
            },
        });
    }

    for &(name, base, exponent, error) in error_grid {
        cases.push(FixtureCase {
            name: name.to_string(),
            base,
            exponent,
            expected: ExpectedOutcome::Error { error },
        });
    }

    cases
}

/// Capture the built-in grid as a digest-sealed fixture set.
pub fn capture_fixture_set(captured_at: impl Into<String>) -> Result<FixtureSet, HarnessError> {
    FixtureSet::new(FAMILY, captured_at, builtin_cases())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_mixes_value_and_error_cases() {
        let cases = builtin_cases();
        let values = cases
            .iter()
            .filter(|c| matches!(c.expected, ExpectedOutcome::Value { .. }))
            .count();
        let errors = cases.len() - values;
        assert!(values >= 20);
        assert_eq!(errors, 4);
    }

    #[test]
    fn captured_values_are_finite() {
        for case in builtin_cases() {
            if let ExpectedOutcome::Value { value, rel_tol } = case.expected {
                assert!(value.is_finite(), "case {} captured {value}", case.name);
                assert!(rel_tol > 0.0);
            }
        }
    }

    #[test]
    fn capture_seals_the_set_with_a_digest() {
        let set = capture_fixture_set("2026-08-06T00:00:00Z").unwrap();
        assert_eq!(set.family, FAMILY);
        set.verify_digest().unwrap();
    }
}
