//! Fixture execution engine.

use powforge_core::pow;

use crate::diff;
use crate::fixtures::{DomainErrorKind, ExpectedOutcome, FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Runs a fixture set against the kernel and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all fixtures in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set.cases.iter().map(execute_case).collect()
    }
}

fn execute_case(case: &FixtureCase) -> VerificationResult {
    let outcome = pow(case.base, case.exponent);

    let (passed, expected, actual) = match (&case.expected, &outcome) {
        (ExpectedOutcome::Value { value, rel_tol }, Ok(actual)) => {
            let scale = value.abs().max(1.0);
            let passed = (actual - value).abs() <= rel_tol * scale;
            (passed, render_value(*value), render_value(*actual))
        }
        (ExpectedOutcome::Value { value, .. }, Err(err)) => {
            (false, render_value(*value), format!("error: {err}"))
        }
        (ExpectedOutcome::Error { error }, Err(err)) => {
            let actual_kind = DomainErrorKind::from(*err);
            (
                *error == actual_kind,
                render_error(*error),
                render_error(actual_kind),
            )
        }
        (ExpectedOutcome::Error { error }, Ok(actual)) => {
            (false, render_error(*error), render_value(*actual))
        }
    };

    let diff = if passed {
        None
    } else {
        Some(diff::render_diff(&expected, &actual))
    };

    VerificationResult {
        case_name: case.name.clone(),
        inputs: format!("{}^{}", case.base, case.exponent),
        passed,
        expected,
        actual,
        diff,
    }
}

fn render_value(value: f64) -> String {
    format!("{value:e}")
}

fn render_error(kind: DomainErrorKind) -> String {
    format!("{kind:?}")
}
