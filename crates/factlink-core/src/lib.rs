//! # factlink-core
//!
//! Pure logic for the runtime-linked factorial demonstration.
//!
//! This crate holds the function the shared artifact exports and the
//! symbol/artifact conventions the loader side checks against. No I/O, and no
//! `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod factorial;
pub mod symbol;

pub use factorial::factorial;
pub use symbol::{DEFAULT_ARTIFACT, FACTORIAL_SYMBOL, valid_symbol_name};
