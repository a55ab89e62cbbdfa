//! Literal-conversion traits for matcher construction.
//!
//! Call-site mock expectations read best as bare literals. This module
//! defines one named-constructor trait per literal kind: a type opts in to
//! a kind by implementing the trait, and generic wrappers forward their
//! wrapped type's conformance ([`crate::Parameter`] produces its exact-match
//! state, `Option` produces its present state). The [`crate::param!`] and
//! [`crate::value!`] macros put the bridges behind literal syntax.
//!
//! Every scalar and array bridge is a total function over well-typed input.
//! The map bridge is the one place construction can fail: duplicate keys
//! refuse to build rather than silently overwrite.

use crate::errors::LiteralError;
use std::fmt::Debug;

mod builtin;
mod option;
mod wrapper;

// ============================================================================
// SCALAR LITERAL KINDS - string, char, integer, boolean, float, nil
// ============================================================================

/// Construction from a string literal.
///
/// `Literal` is the payload type the literal arrives as; wrappers forward
/// the wrapped type's choice.
pub trait FromStringLiteral: Sized {
    type Literal;

    fn from_string_literal(lit: Self::Literal) -> Self;
}

/// Construction from a character literal.
pub trait FromCharLiteral: Sized {
    type Literal;

    fn from_char_literal(lit: Self::Literal) -> Self;
}

/// Construction from an integer literal.
pub trait FromIntegerLiteral: Sized {
    type Literal;

    fn from_integer_literal(lit: Self::Literal) -> Self;
}

/// Construction from a boolean literal.
pub trait FromBooleanLiteral: Sized {
    type Literal;

    fn from_boolean_literal(lit: Self::Literal) -> Self;
}

/// Construction from a float literal.
pub trait FromFloatLiteral: Sized {
    type Literal;

    fn from_float_literal(lit: Self::Literal) -> Self;
}

/// Construction from a nil literal. The literal carries no payload; the
/// implementing type decides what its empty rendition is (`Option` chooses
/// `None`, [`crate::Value`] chooses `Value::Nil`).
pub trait FromNilLiteral: Sized {
    fn from_nil_literal() -> Self;
}

// ============================================================================
// SEQUENCE LITERAL KINDS - array and map
// ============================================================================

/// Construction from an array literal, as an ordered element sequence.
pub trait FromArrayLiteral: Sized {
    type Element;

    fn from_array_literal(elements: Vec<Self::Element>) -> Self;
}

/// Construction from a map literal, as a key/value pair sequence.
///
/// Keys must be unique. [`from_map_literal`](Self::from_map_literal) is the
/// literal-position entry point and panics on a duplicate key;
/// [`try_from_map_literal`](Self::try_from_map_literal) reports the same
/// condition as an error for callers outside literal position.
pub trait FromMapLiteral: Sized {
    type Key;
    type Value;

    fn try_from_map_literal(
        entries: Vec<(Self::Key, Self::Value)>,
    ) -> Result<Self, LiteralError>;

    fn from_map_literal(entries: Vec<(Self::Key, Self::Value)>) -> Self {
        match Self::try_from_map_literal(entries) {
            Ok(built) => built,
            Err(err) => panic!("{}", err),
        }
    }
}

/// Rejects entry sequences that repeat a key. Quadratic scan; map literals
/// are short and keys only need `PartialEq`.
pub(crate) fn check_unique_keys<K, V>(entries: &[(K, V)]) -> Result<(), LiteralError>
where
    K: PartialEq + Debug,
{
    for (i, (key, _)) in entries.iter().enumerate() {
        if entries[..i].iter().any(|(seen, _)| seen == key) {
            return Err(LiteralError::DuplicateKey {
                key: format!("{:?}", key),
            });
        }
    }
    Ok(())
}
