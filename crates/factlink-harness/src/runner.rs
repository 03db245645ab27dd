//! End-to-end execution of the runtime-link sequence.

use std::path::PathBuf;

use factlink_core::symbol::{DEFAULT_ARTIFACT, FACTORIAL_SYMBOL};
use factlink_loader::{LoadError, LoadedArtifact};

use crate::fixtures::FixtureSet;
use crate::verify::VerificationResult;

/// Steps of the linear sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Acquire,
    Resolve,
    Invoke,
    Release,
}

impl Step {
    /// Lowercase event name, used in structured logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Step::Acquire => "acquire",
            Step::Resolve => "resolve",
            Step::Invoke => "invoke",
            Step::Release => "release",
        }
    }
}

/// Parameters of one demonstration run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    /// Shared-object path to acquire.
    pub artifact: PathBuf,
    /// Exported name to resolve.
    pub symbol: String,
    /// Input passed to the resolved callable.
    pub input: i32,
}

impl Default for RunRequest {
    fn default() -> Self {
        Self {
            artifact: PathBuf::from(DEFAULT_ARTIFACT),
            symbol: FACTORIAL_SYMBOL.to_string(),
            input: 5,
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, Copy)]
pub struct RunOutcome {
    pub input: i32,
    pub result: i64,
}

/// Execute the strict sequence: acquire, resolve, invoke, release.
pub fn execute(request: &RunRequest) -> Result<RunOutcome, LoadError> {
    execute_observed(request, |_| {})
}

/// Execute the sequence, reporting each completed step to `observe`.
///
/// The resolved callable is dropped before the handle is released. A failure
/// at any step aborts the sequence; an already-acquired handle still closes
/// on drop.
pub fn execute_observed(
    request: &RunRequest,
    mut observe: impl FnMut(Step),
) -> Result<RunOutcome, LoadError> {
    let artifact = LoadedArtifact::acquire(&request.artifact)?;
    observe(Step::Acquire);
    let result = {
        let factorial = artifact.resolve(&request.symbol)?;
        observe(Step::Resolve);
        let result = factorial.call(request.input);
        observe(Step::Invoke);
        result
    };
    artifact.release()?;
    observe(Step::Release);
    Ok(RunOutcome {
        input: request.input,
        result,
    })
}

/// Run every fixture case through `invoke` and collect results.
///
/// The invoker seam lets the same comparison drive either the runtime-linked
/// symbol or the pure in-process implementation.
pub fn run_cases(set: &FixtureSet, mut invoke: impl FnMut(i32) -> i64) -> Vec<VerificationResult> {
    set.cases
        .iter()
        .map(|case| {
            let actual = invoke(case.input);
            VerificationResult {
                case_name: case.name.clone(),
                input: case.input,
                expected: case.expected,
                actual,
                passed: actual == case.expected,
            }
        })
        .collect()
}
