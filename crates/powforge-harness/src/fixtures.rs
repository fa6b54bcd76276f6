//! Fixture loading and management.

use serde::{Deserialize, Serialize};
use std::path::Path;

use powforge_core::DomainError;

use crate::error::HarnessError;

/// Serializable classification of a kernel domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainErrorKind {
    ZeroToNegativePower,
    NegativeBaseFractionalExponent,
    FractionalPowerOfNonPositive,
    LogOfNonPositive,
}

impl From<DomainError> for DomainErrorKind {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::ZeroToNegativePower => Self::ZeroToNegativePower,
            DomainError::NegativeBaseFractionalExponent => Self::NegativeBaseFractionalExponent,
            DomainError::FractionalPowerOfNonPositive => Self::FractionalPowerOfNonPositive,
            DomainError::LogOfNonPositive => Self::LogOfNonPositive,
        }
    }
}

/// Expected outcome of a single fixture case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExpectedOutcome {
    /// A finite value with the relative tolerance used for comparison.
    Value { value: f64, rel_tol: f64 },
    /// The kernel must fail with this domain-error classification.
    Error { error: DomainErrorKind },
}

/// A single fixture test case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Base input.
    pub base: f64,
    /// Exponent input.
    pub exponent: f64,
    /// Expected outcome when the kernel evaluates `base^exponent`.
    pub expected: ExpectedOutcome,
}

/// A collection of fixture cases for one function family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Function family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// SHA-256 over the canonical case serialization; checked on load.
    pub content_digest: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

/// Fixture schema version written by this build.
pub const SCHEMA_VERSION: &str = "v1";

impl FixtureSet {
    /// Build a set over `cases`, computing the content digest.
    pub fn new(
        family: impl Into<String>,
        captured_at: impl Into<String>,
        cases: Vec<FixtureCase>,
    ) -> Result<Self, HarnessError> {
        let content_digest = digest_cases(&cases)?;
        Ok(Self {
            version: SCHEMA_VERSION.to_string(),
            family: family.into(),
            captured_at: captured_at.into(),
            content_digest,
            cases,
        })
    }

    /// Load a fixture set from a JSON string and verify its digest.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        let set: Self = serde_json::from_str(json)?;
        set.verify_digest()?;
        Ok(set)
    }

    /// Serialize the fixture set to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a fixture set from a file path, verifying its digest.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write the fixture set to a file path.
    pub fn to_file(&self, path: &Path) -> Result<(), HarnessError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Recompute the case digest and compare it to the recorded one.
    pub fn verify_digest(&self) -> Result<(), HarnessError> {
        let computed = digest_cases(&self.cases)?;
        if computed != self.content_digest {
            return Err(HarnessError::DigestMismatch {
                recorded: self.content_digest.clone(),
                computed,
            });
        }
        Ok(())
    }
}

fn digest_cases(cases: &[FixtureCase]) -> Result<String, HarnessError> {
    use sha2::Digest;
    let canonical = serde_json::to_string(cases)?;
    Ok(hex_lower(&sha2::Sha256::digest(canonical.as_bytes())))
}

fn hex_lower(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        write!(&mut out, "{b:02x}").expect("writing to String should not fail");
    }
    out
}
