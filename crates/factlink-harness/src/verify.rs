//! Fixture verification against the runtime-linked artifact.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use factlink_loader::LoadedArtifact;

use crate::fixtures::FixtureSet;
use crate::runner;

/// Failures outside the fixture comparisons themselves.
#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("fixture decode: {0}")]
    Fixture(#[from] serde_json::Error),
    #[error(transparent)]
    Load(#[from] factlink_loader::LoadError),
}

/// Outcome of one fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    pub case_name: String,
    pub input: i32,
    pub expected: i64,
    pub actual: i64,
    pub passed: bool,
}

/// Machine-readable verification report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyReport {
    /// Name of the verification campaign.
    pub campaign: String,
    /// Artifact the cases ran against.
    pub artifact: String,
    /// SHA-256 of the artifact bytes, linking the report to the exact object.
    pub artifact_sha256: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<VerificationResult>,
}

impl VerifyReport {
    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// SHA-256 digest of a file, lowercase hex.
pub fn artifact_sha256(path: &Path) -> std::io::Result<String> {
    let bytes = std::fs::read(path)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{digest:x}"))
}

/// Run `set` against the artifact at `path` through the loader.
///
/// The handle is acquired once, every case is invoked through the resolved
/// symbol, and the handle is released before results are reported.
pub fn verify_artifact(
    set: &FixtureSet,
    path: &Path,
    symbol: &str,
) -> Result<VerifyReport, VerifyError> {
    let sha256 = artifact_sha256(path)?;
    let artifact = LoadedArtifact::acquire(path)?;
    let results = {
        let factorial = artifact.resolve(symbol)?;
        runner::run_cases(set, |n| factorial.call(n))
    };
    artifact.release()?;

    let passed = results.iter().filter(|r| r.passed).count();
    Ok(VerifyReport {
        campaign: format!("fixture-verify/{}", set.family),
        artifact: path.display().to_string(),
        artifact_sha256: sha256,
        total: results.len(),
        passed,
        failed: results.len() - passed,
        results,
    })
}
