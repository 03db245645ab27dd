//! # factlink-loader
//!
//! Runtime acquisition of the factorial artifact.
//!
//! The handle is an owned resource: [`LoadedArtifact`] wraps the platform
//! library handle, [`LoadedArtifact::resolve`] hands out a typed callable that
//! borrows it, and [`LoadedArtifact::release`] consumes it. A callable cannot
//! outlive its handle, and error paths that drop the artifact before an
//! explicit release still close the handle.

pub mod artifact;
pub mod error;

pub use artifact::{FactorialAbi, FactorialFn, LoadedArtifact};
pub use error::LoadError;
