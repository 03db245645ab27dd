//! Demonstration and verification harness for the factlink artifact.
//!
//! This crate provides:
//! - Runner: the linear acquire → resolve → invoke → release sequence
//! - Fixtures: factorial input/expected pairs as JSON reference data
//! - Verify: run fixtures against the runtime-linked artifact, with reports
//! - Structured logging: JSONL records of demonstration runs

#![forbid(unsafe_code)]

pub mod fixtures;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use fixtures::{FixtureCase, FixtureSet};
pub use runner::{RunOutcome, RunRequest, Step};
pub use verify::{VerificationResult, VerifyReport};
