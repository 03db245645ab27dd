//! Error taxonomy for the acquire/resolve/release sequence.

use std::path::PathBuf;

use thiserror::Error;

/// Failures along the load, resolve, unload sequence.
///
/// All variants are fatal to the demonstration. The message names the
/// underlying platform (`dlerror`) diagnostic where one exists.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The shared object could not be opened.
    #[error("cannot open shared object {}: {source}", path.display())]
    Acquire {
        path: PathBuf,
        #[source]
        source: libloading::Error,
    },
    /// The requested name is not usable as a dynamic symbol.
    #[error("invalid symbol name {symbol:?}")]
    InvalidSymbolName { symbol: String },
    /// The symbol is absent from the opened library.
    #[error("cannot resolve symbol {symbol:?}: {source}")]
    Resolve {
        symbol: String,
        #[source]
        source: libloading::Error,
    },
    /// Closing the handle reported a platform error.
    #[error("cannot release library handle: {source}")]
    Release {
        #[source]
        source: libloading::Error,
    },
}
