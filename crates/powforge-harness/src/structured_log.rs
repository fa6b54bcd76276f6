//! Structured logging contract for capture/verify workflows.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record with required + optional fields.
//! - [`LogEmitter`]: writes JSONL lines to a file or stdout.
//! - [`validate_log_line`]: validates a single JSONL line against the schema.
//! - [`validate_log_file`]: validates an entire JSONL file.

use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Per-case verification outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Error,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `level`, `event`. Optional fields carry
/// per-case context for verification runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    // Required
    pub timestamp: String,
    pub level: LogLevel,
    pub event: String,

    // Optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inputs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create an entry stamped with the current UTC time.
    #[must_use]
    pub fn new(level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            level,
            event: event.into(),
            case: None,
            inputs: None,
            outcome: None,
            detail: None,
        }
    }

    #[must_use]
    pub fn with_case(mut self, case: impl Into<String>) -> Self {
        self.case = Some(case.into());
        self
    }

    #[must_use]
    pub fn with_inputs(mut self, inputs: impl Into<String>) -> Self {
        self.inputs = Some(inputs.into());
        self
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    #[must_use]
    pub fn with_detail(mut self, detail: serde_json::Value) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Serialize as a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Emitter
// ---------------------------------------------------------------------------

enum LogSink {
    File(std::fs::File),
    Stdout,
}

/// Writes JSONL log lines to a file or stdout.
pub struct LogEmitter {
    sink: LogSink,
}

impl LogEmitter {
    /// Emit to a file, truncating any existing content.
    pub fn to_file(path: &Path) -> Result<Self, std::io::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = std::fs::File::create(path)?;
        Ok(Self {
            sink: LogSink::File(file),
        })
    }

    /// Emit to stdout.
    #[must_use]
    pub fn to_stdout() -> Self {
        Self {
            sink: LogSink::Stdout,
        }
    }

    /// Write one entry as a JSONL line.
    pub fn emit(&mut self, entry: &LogEntry) -> Result<(), std::io::Error> {
        let line = entry.to_jsonl().map_err(std::io::Error::other)?;
        match &mut self.sink {
            LogSink::File(file) => writeln!(file, "{line}"),
            LogSink::Stdout => {
                let stdout = std::io::stdout();
                let mut lock = stdout.lock();
                writeln!(lock, "{line}")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A single schema violation found while validating a log line.
#[derive(Debug, Clone)]
pub struct LogValidationError {
    pub line_number: usize,
    pub field: String,
    pub message: String,
}

/// Validate one JSONL line against the schema.
pub fn validate_log_line(
    line: &str,
    line_number: usize,
) -> Result<LogEntry, Vec<LogValidationError>> {
    let mut errors = Vec::new();

    let value: serde_json::Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            return Err(vec![LogValidationError {
                line_number,
                field: "<json>".to_string(),
                message: format!("not valid JSON: {e}"),
            }]);
        }
    };

    for field in ["timestamp", "level", "event"] {
        if value.get(field).is_none() {
            errors.push(LogValidationError {
                line_number,
                field: field.to_string(),
                message: "required field is missing".to_string(),
            });
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    match serde_json::from_value::<LogEntry>(value) {
        Ok(entry) => Ok(entry),
        Err(e) => {
            errors.push(LogValidationError {
                line_number,
                field: "<deserialization>".to_string(),
                message: format!("failed to deserialize: {e}"),
            });
            Err(errors)
        }
    }
}

/// Validate an entire JSONL file.
///
/// Returns the total line count and any validation errors found.
pub fn validate_log_file(path: &Path) -> Result<(usize, Vec<LogValidationError>), std::io::Error> {
    let content = std::fs::read_to_string(path)?;
    let mut all_errors = Vec::new();
    let mut line_count = 0;

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        line_count += 1;
        if let Err(errs) = validate_log_line(line, i + 1) {
            all_errors.extend(errs);
        }
    }

    Ok((line_count, all_errors))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current UTC time as an approximate ISO-8601 string, without pulling in a
/// calendar dependency. Good enough for log ordering and human reading.
#[must_use]
pub fn now_utc() -> String {
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = duration.as_secs();
    let millis = duration.subsec_millis();
    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        1970 + secs / 31_557_600,
        (secs % 31_557_600) / 2_629_800 + 1,
        (secs % 2_629_800) / 86_400 + 1,
        (secs % 86_400) / 3_600,
        (secs % 3_600) / 60,
        secs % 60,
        millis,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_required_fields_only() {
        let entry = LogEntry::new(LogLevel::Info, "verify_start");
        let json = entry.to_jsonl().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["timestamp"].is_string());
        assert_eq!(parsed["level"], "info");
        assert_eq!(parsed["event"], "verify_start");
        assert!(parsed.get("case").is_none());
        assert!(parsed.get("outcome").is_none());
    }

    #[test]
    fn entry_carries_optional_case_context() {
        let entry = LogEntry::new(LogLevel::Error, "case_result")
            .with_case("sqrt_9")
            .with_inputs("9^0.5")
            .with_outcome(Outcome::Fail)
            .with_detail(serde_json::json!({"expected": "3e0", "actual": "2.9e0"}));
        let parsed: serde_json::Value = serde_json::from_str(&entry.to_jsonl().unwrap()).unwrap();
        assert_eq!(parsed["case"], "sqrt_9");
        assert_eq!(parsed["inputs"], "9^0.5");
        assert_eq!(parsed["outcome"], "fail");
        assert_eq!(parsed["detail"]["expected"], "3e0");
    }

    #[test]
    fn validation_rejects_missing_required_fields() {
        let errs = validate_log_line(r#"{"level":"info"}"#, 1).unwrap_err();
        let fields: Vec<_> = errs.iter().map(|e| e.field.as_str()).collect();
        assert!(fields.contains(&"timestamp"));
        assert!(fields.contains(&"event"));
    }

    #[test]
    fn validation_accepts_emitted_entries() {
        let entry = LogEntry::new(LogLevel::Info, "case_result").with_outcome(Outcome::Pass);
        let line = entry.to_jsonl().unwrap();
        let parsed = validate_log_line(&line, 1).expect("emitted line validates");
        assert_eq!(parsed.event, "case_result");
    }
}
