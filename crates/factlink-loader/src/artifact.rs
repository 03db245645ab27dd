//! Owned artifact handle and typed symbol resolution.

use std::ffi::{c_int, c_longlong};
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};

use factlink_core::symbol::valid_symbol_name;

use crate::error::LoadError;

/// Signature of the artifact's exported factorial symbol.
pub type FactorialAbi = unsafe extern "C" fn(c_int) -> c_longlong;

/// An open shared-library handle, held until [`release`](Self::release) or
/// drop.
#[derive(Debug)]
pub struct LoadedArtifact {
    path: PathBuf,
    library: Library,
}

impl LoadedArtifact {
    /// Open the shared object at `path`.
    ///
    /// Fails with [`LoadError::Acquire`] when the file is missing, is not a
    /// loadable object, or has unresolved dependencies.
    pub fn acquire(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref().to_path_buf();
        // Loading executes the object's initializers.
        let library = unsafe { Library::new(&path) }.map_err(|source| LoadError::Acquire {
            path: path.clone(),
            source,
        })?;
        Ok(Self { path, library })
    }

    /// Path the handle was opened from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve `name` to the typed factorial callable.
    ///
    /// The returned value borrows `self`, so it cannot outlive the handle.
    /// Names that are not C identifiers are rejected before the platform
    /// resolver sees them.
    pub fn resolve(&self, name: &str) -> Result<FactorialFn<'_>, LoadError> {
        if !valid_symbol_name(name) {
            return Err(LoadError::InvalidSymbolName {
                symbol: name.to_string(),
            });
        }
        let symbol: Symbol<'_, FactorialAbi> =
            unsafe { self.library.get(name.as_bytes()) }.map_err(|source| LoadError::Resolve {
                symbol: name.to_string(),
                source,
            })?;
        Ok(FactorialFn { symbol })
    }

    /// Close the handle, surfacing any platform error.
    ///
    /// Dropping a `LoadedArtifact` also closes the handle, but silently; the
    /// demonstration releases explicitly so close failures reach stderr.
    pub fn release(self) -> Result<(), LoadError> {
        self.library
            .close()
            .map_err(|source| LoadError::Release { source })
    }
}

/// Resolved factorial callable, valid while the owning handle is open.
#[derive(Debug)]
pub struct FactorialFn<'lib> {
    symbol: Symbol<'lib, FactorialAbi>,
}

impl FactorialFn<'_> {
    /// Invoke the runtime-linked factorial.
    #[must_use]
    pub fn call(&self, n: i32) -> i64 {
        // The signature is pinned by `FactorialAbi`; the artifact boundary
        // fixes the exported symbol to that signature.
        unsafe { (*self.symbol)(n) }
    }
}
