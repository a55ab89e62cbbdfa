//! Literal conformances for [`Parameter`].
//!
//! Each bridge is available exactly when the wrapped type supports the same
//! literal kind, forwards the wrapped type's literal payload type, and only
//! ever constructs the exact-match state: a matcher written as a literal
//! means "require this argument", never "accept any".

use crate::errors::LiteralError;
use crate::literal::{
    FromArrayLiteral, FromBooleanLiteral, FromCharLiteral, FromFloatLiteral, FromIntegerLiteral,
    FromMapLiteral, FromNilLiteral, FromStringLiteral,
};
use crate::parameter::Parameter;

impl<T: FromStringLiteral> FromStringLiteral for Parameter<T> {
    type Literal = T::Literal;

    fn from_string_literal(lit: Self::Literal) -> Self {
        Parameter::Exact(T::from_string_literal(lit))
    }
}

impl<T: FromCharLiteral> FromCharLiteral for Parameter<T> {
    type Literal = T::Literal;

    fn from_char_literal(lit: Self::Literal) -> Self {
        Parameter::Exact(T::from_char_literal(lit))
    }
}

impl<T: FromIntegerLiteral> FromIntegerLiteral for Parameter<T> {
    type Literal = T::Literal;

    fn from_integer_literal(lit: Self::Literal) -> Self {
        Parameter::Exact(T::from_integer_literal(lit))
    }
}

impl<T: FromBooleanLiteral> FromBooleanLiteral for Parameter<T> {
    type Literal = T::Literal;

    fn from_boolean_literal(lit: Self::Literal) -> Self {
        Parameter::Exact(T::from_boolean_literal(lit))
    }
}

impl<T: FromFloatLiteral> FromFloatLiteral for Parameter<T> {
    type Literal = T::Literal;

    fn from_float_literal(lit: Self::Literal) -> Self {
        Parameter::Exact(T::from_float_literal(lit))
    }
}

/// A nil literal still produces the exact-match state: it requires the
/// wrapped type's own empty rendition, it does not mean "match anything".
impl<T: FromNilLiteral> FromNilLiteral for Parameter<T> {
    fn from_nil_literal() -> Self {
        Parameter::Exact(T::from_nil_literal())
    }
}

impl<T: FromArrayLiteral> FromArrayLiteral for Parameter<T> {
    type Element = T::Element;

    fn from_array_literal(elements: Vec<Self::Element>) -> Self {
        Parameter::Exact(T::from_array_literal(elements))
    }
}

impl<T: FromMapLiteral> FromMapLiteral for Parameter<T> {
    type Key = T::Key;
    type Value = T::Value;

    fn try_from_map_literal(
        entries: Vec<(Self::Key, Self::Value)>,
    ) -> Result<Self, LiteralError> {
        T::try_from_map_literal(entries).map(Parameter::Exact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn scalar_bridges_wrap_the_wrapped_conversion() {
        assert_eq!(
            Parameter::<i64>::from_integer_literal(7),
            Parameter::Exact(7)
        );
        assert_eq!(
            Parameter::<String>::from_string_literal("abc"),
            Parameter::Exact("abc".to_string())
        );
        assert_eq!(
            Parameter::<Value>::from_float_literal(2.5),
            Parameter::Exact(Value::Number(2.5))
        );
    }

    #[test]
    fn nil_bridge_is_exact_not_any() {
        let p = Parameter::<Value>::from_nil_literal();
        assert!(!p.is_any());
        assert_eq!(p.value(), Some(&Value::Nil));
    }

    #[test]
    fn array_bridge_forwards_the_element_sequence() {
        let p = Parameter::<Vec<i64>>::from_array_literal(vec![1, 2, 3]);
        assert_eq!(p, Parameter::Exact(vec![1, 2, 3]));
    }

    #[test]
    fn map_bridge_forwards_duplicate_errors() {
        let result = Parameter::<Value>::try_from_map_literal(vec![
            ("a".to_string(), Value::Number(1.0)),
            ("a".to_string(), Value::Number(2.0)),
        ]);
        assert!(matches!(result, Err(LiteralError::DuplicateKey { .. })));
    }
}
