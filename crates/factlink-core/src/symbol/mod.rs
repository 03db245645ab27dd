//! Symbol and artifact conventions shared by both sides of the boundary.
//!
//! The artifact exports exactly one symbol; the loader validates names here
//! before they reach the platform resolver.

/// Name of the single exported symbol.
pub const FACTORIAL_SYMBOL: &str = "calculate_factorial";

/// Relative path the demonstration loads when no path is given.
pub const DEFAULT_ARTIFACT: &str = "./libfact.so";

/// Returns `true` if `name` is usable as a dynamic-symbol name.
///
/// Accepts C identifiers only: a leading ASCII letter or underscore, then
/// letters, digits, and underscores. Empty names and interior NUL bytes are
/// rejected here instead of being handed to the resolver.
pub fn valid_symbol_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
