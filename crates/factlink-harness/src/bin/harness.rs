//! CLI entrypoint for the factlink runtime-link harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use factlink_core::symbol::{DEFAULT_ARTIFACT, FACTORIAL_SYMBOL};
use factlink_harness::FixtureSet;
use factlink_harness::runner::{self, RunRequest};
use factlink_harness::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use factlink_harness::verify;

/// Runtime-linking demonstration and verification tooling for factlink.
#[derive(Debug, Parser)]
#[command(name = "factlink-harness")]
#[command(about = "Runtime-linking harness for the factorial artifact")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the artifact, resolve the symbol, invoke it, and unload.
    Run {
        /// Shared-object path to acquire.
        #[arg(long, default_value = DEFAULT_ARTIFACT)]
        artifact: PathBuf,
        /// Exported symbol name to resolve.
        #[arg(long, default_value = FACTORIAL_SYMBOL)]
        symbol: String,
        /// Input passed to the resolved function.
        #[arg(long, default_value_t = 5)]
        input: i32,
        /// Optional JSONL log path for the run's step records.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Verify fixture cases against the artifact through the loader.
    Verify {
        /// Fixture JSON file (defaults to the built-in set).
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// Shared-object path to verify against.
        #[arg(long, default_value = DEFAULT_ARTIFACT)]
        artifact: PathBuf,
        /// Exported symbol name to resolve.
        #[arg(long, default_value = FACTORIAL_SYMBOL)]
        symbol: String,
        /// Output report path (JSON). A summary goes to stderr either way.
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Run {
            artifact,
            symbol,
            input,
            log,
        } => {
            let request = RunRequest {
                artifact,
                symbol,
                input,
            };
            let mut steps = Vec::new();
            let outcome = runner::execute_observed(&request, |step| steps.push(step));

            if let Some(path) = &log {
                let mut emitter = LogEmitter::to_file(path, "demo")?;
                for step in &steps {
                    emitter.emit_entry(
                        LogEntry::new("", LogLevel::Info, step.name())
                            .with_target(request.artifact.display().to_string(), &request.symbol)
                            .with_input(request.input),
                    )?;
                }
                match &outcome {
                    Ok(run) => emitter.emit_entry(
                        LogEntry::new("", LogLevel::Info, "run")
                            .with_result(run.result)
                            .with_outcome(Outcome::Pass),
                    )?,
                    Err(err) => emitter.emit_entry(
                        LogEntry::new("", LogLevel::Fatal, "run")
                            .with_outcome(Outcome::Fail)
                            .with_detail(err.to_string()),
                    )?,
                }
                emitter.flush()?;
            }

            let run = outcome?;
            println!("--- [Runtime Linking Result] ---");
            println!("{}! (Factorial) = {} (Runtime Linked)", run.input, run.result);
            Ok(())
        }
        Command::Verify {
            fixture,
            artifact,
            symbol,
            report,
        } => {
            let set = match &fixture {
                Some(path) => FixtureSet::from_file(path)?,
                None => FixtureSet::builtin(),
            };
            eprintln!(
                "Verifying {} cases against {}",
                set.cases.len(),
                artifact.display()
            );
            let verify_report = verify::verify_artifact(&set, &artifact, &symbol)?;
            for result in verify_report.results.iter().filter(|r| !r.passed) {
                eprintln!(
                    "FAIL {}: factorial({}) = {}, expected {}",
                    result.case_name, result.input, result.actual, result.expected
                );
            }
            eprintln!(
                "{} passed, {} failed (artifact sha256 {})",
                verify_report.passed, verify_report.failed, verify_report.artifact_sha256
            );
            if let Some(path) = &report {
                std::fs::write(path, verify_report.to_json()?)?;
                eprintln!("Wrote report to {}", path.display());
            }
            if verify_report.failed > 0 {
                return Err(format!("{} fixture case(s) failed", verify_report.failed).into());
            }
            Ok(())
        }
    }
}
