//! CLI entrypoint for the powforge conformance harness and calculator.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use powforge_core::pow;
use powforge_harness::format::{Notation, format_result};
use powforge_harness::input::parse_finite;
use powforge_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use powforge_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary, capture};

/// Conformance tooling and text front-end for powforge.
#[derive(Debug, Parser)]
#[command(name = "powforge-harness")]
#[command(about = "Conformance harness and x^y calculator for the powforge kernel")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a single x^y expression.
    Eval {
        /// Base value (finite decimal or scientific notation).
        #[arg(long, allow_hyphen_values = true)]
        base: String,
        /// Exponent value (finite decimal or scientific notation).
        #[arg(long, allow_hyphen_values = true)]
        exponent: String,
        /// Output notation: auto, fixed, or scientific.
        #[arg(long)]
        format: Option<String>,
    },
    /// Interactive calculator loop on stdin/stdout.
    Repl,
    /// Capture host pow behavior as a fixture file.
    Capture {
        /// Output path for the fixture JSON file.
        #[arg(long)]
        output: PathBuf,
        /// Optional fixed timestamp string for deterministic capture output.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Verify the kernel against a captured fixture file.
    Verify {
        /// Fixture JSON path.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; a .json sibling is written too).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional structured JSONL log output path.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Eval {
            base,
            exponent,
            format,
        } => {
            let x = parse_finite(&base)?;
            let y = parse_finite(&exponent)?;
            let notation = Notation::resolve(format.as_deref());
            match pow(x, y) {
                Ok(value) => println!("{}", format_result(value, notation)),
                Err(err) => {
                    eprintln!("Error: {err}");
                    return Err("evaluation failed".into());
                }
            }
        }
        Command::Repl => run_repl()?,
        Command::Capture { output, timestamp } => {
            let captured_at =
                timestamp.unwrap_or_else(powforge_harness::structured_log::now_utc);
            let set = capture::capture_fixture_set(captured_at)?;
            eprintln!(
                "Capturing {} cases for {} to {}",
                set.cases.len(),
                set.family,
                output.display()
            );
            set.to_file(&output)?;
        }
        Command::Verify {
            fixture,
            report,
            log,
            timestamp,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let set = FixtureSet::from_file(&fixture)?;
            let results = TestRunner::new("fixture-verify").run(&set);

            let mut emitter = match log {
                Some(path) => Some(LogEmitter::to_file(&path)?),
                None => None,
            };
            if let Some(emitter) = emitter.as_mut() {
                for result in &results {
                    let (level, outcome) = if result.passed {
                        (LogLevel::Info, Outcome::Pass)
                    } else {
                        (LogLevel::Error, Outcome::Fail)
                    };
                    let entry = LogEntry::new(level, "case_result")
                        .with_case(result.case_name.clone())
                        .with_inputs(result.inputs.clone())
                        .with_outcome(outcome)
                        .with_detail(serde_json::json!({
                            "expected": result.expected,
                            "actual": result.actual,
                        }));
                    emitter.emit(&entry)?;
                }
            }

            let summary = VerificationSummary::from_results(results);
            let report_doc = ConformanceReport {
                title: String::from("powforge Conformance Report"),
                timestamp: timestamp
                    .unwrap_or_else(powforge_harness::structured_log::now_utc),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                eprintln!("Writing report to {}", report_path.display());
                std::fs::write(&report_path, report_doc.to_markdown())?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
    }

    Ok(())
}

fn run_repl() -> Result<(), Box<dyn std::error::Error>> {
    println!("Welcome to the x^y power calculator!");
    println!("Enter 'exit' at any prompt to quit.");

    loop {
        let Some(x) = prompt_number("Enter the base (x): ")? else {
            break;
        };
        let Some(y) = prompt_number("Enter the exponent (y): ")? else {
            break;
        };

        match pow(x, y) {
            Ok(value) => println!("Result: {}", format_result(value, Notation::Fixed)),
            Err(err) => println!("Error: {err}"),
        }
        println!();
    }

    println!("Exiting power calculator. Goodbye!");
    Ok(())
}

/// Prompt until a finite number is read. Returns `None` on `exit` or EOF.
fn prompt_number(prompt: &str) -> Result<Option<f64>, std::io::Error> {
    let stdin = std::io::stdin();
    let mut line = String::new();

    loop {
        print!("{prompt}");
        std::io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let token = line.trim();
        if token.eq_ignore_ascii_case("exit") {
            return Ok(None);
        }

        match parse_finite(token) {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid input. Please enter a numeric value."),
        }
    }
}
