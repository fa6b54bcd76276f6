//! Harness-side error definitions.
//!
//! Kernel domain errors stay in `powforge-core`; everything that can go wrong
//! around the kernel (I/O, JSON, fixture integrity, malformed input) lands
//! here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fixture digest mismatch: recorded {recorded}, computed {computed}")]
    DigestMismatch { recorded: String, computed: String },
    #[error("invalid number {raw:?}: {reason}")]
    InvalidNumber { raw: String, reason: String },
}
