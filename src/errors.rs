//! Error handling for literal construction.
//!
//! Scalar and array bridges are total functions over well-typed input, so
//! the only recoverable failure in the crate is a duplicate key supplied to
//! a map literal. Literal-position constructors turn it into a panic (a
//! literal with duplicate keys is a programming error at the call site);
//! [`crate::literal::FromMapLiteral::try_from_map_literal`] surfaces it as
//! a `Result` for non-literal callers.

use thiserror::Error;

/// Failure modes of literal construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// A map literal supplied the same key twice. Construction refuses
    /// rather than overwriting the earlier entry.
    #[error("map literal contains duplicate key {key}")]
    DuplicateKey {
        /// Debug rendering of the offending key.
        key: String,
    },
}
