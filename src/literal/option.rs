//! Literal conformances for `Option`, paralleling the [`Parameter`] set:
//! a nil literal produces `None`, every other literal kind produces `Some`
//! of the wrapped type's own conversion.
//!
//! The non-nil conformances sit behind the default-on `option-literals`
//! feature so embedders whose own `Option` conversions would collide can
//! switch them off. The nil conformance stays available either way.
//!
//! [`Parameter`]: crate::Parameter

use crate::literal::FromNilLiteral;

impl<W> FromNilLiteral for Option<W> {
    fn from_nil_literal() -> Self {
        None
    }
}

#[cfg(feature = "option-literals")]
mod present {
    use crate::errors::LiteralError;
    use crate::literal::{
        FromArrayLiteral, FromBooleanLiteral, FromCharLiteral, FromFloatLiteral,
        FromIntegerLiteral, FromMapLiteral, FromStringLiteral,
    };

    impl<W: FromStringLiteral> FromStringLiteral for Option<W> {
        type Literal = W::Literal;

        fn from_string_literal(lit: Self::Literal) -> Self {
            Some(W::from_string_literal(lit))
        }
    }

    impl<W: FromCharLiteral> FromCharLiteral for Option<W> {
        type Literal = W::Literal;

        fn from_char_literal(lit: Self::Literal) -> Self {
            Some(W::from_char_literal(lit))
        }
    }

    impl<W: FromIntegerLiteral> FromIntegerLiteral for Option<W> {
        type Literal = W::Literal;

        fn from_integer_literal(lit: Self::Literal) -> Self {
            Some(W::from_integer_literal(lit))
        }
    }

    impl<W: FromBooleanLiteral> FromBooleanLiteral for Option<W> {
        type Literal = W::Literal;

        fn from_boolean_literal(lit: Self::Literal) -> Self {
            Some(W::from_boolean_literal(lit))
        }
    }

    impl<W: FromFloatLiteral> FromFloatLiteral for Option<W> {
        type Literal = W::Literal;

        fn from_float_literal(lit: Self::Literal) -> Self {
            Some(W::from_float_literal(lit))
        }
    }

    impl<W: FromArrayLiteral> FromArrayLiteral for Option<W> {
        type Element = W::Element;

        fn from_array_literal(elements: Vec<Self::Element>) -> Self {
            Some(W::from_array_literal(elements))
        }
    }

    impl<W: FromMapLiteral> FromMapLiteral for Option<W> {
        type Key = W::Key;
        type Value = W::Value;

        fn try_from_map_literal(
            entries: Vec<(Self::Key, Self::Value)>,
        ) -> Result<Self, LiteralError> {
            W::try_from_map_literal(entries).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::literal::FromNilLiteral;
    use crate::value::Value;

    #[test]
    fn nil_literal_is_the_empty_state() {
        assert_eq!(Option::<i64>::from_nil_literal(), None);
        assert_eq!(Option::<Value>::from_nil_literal(), None);
    }

    #[cfg(feature = "option-literals")]
    #[test]
    fn other_literals_are_the_present_state() {
        use crate::literal::{FromArrayLiteral, FromIntegerLiteral, FromStringLiteral};

        assert_eq!(Option::<i64>::from_integer_literal(9), Some(9));
        assert_eq!(
            Option::<String>::from_string_literal("s"),
            Some("s".to_string())
        );
        assert_eq!(
            Option::<Vec<i64>>::from_array_literal(vec![1, 2]),
            Some(vec![1, 2])
        );
    }

    #[cfg(feature = "option-literals")]
    #[test]
    fn wrapper_and_option_compose() {
        use crate::literal::FromIntegerLiteral;
        use crate::Parameter;

        // Parameter<Option<T>> reaches the literal kinds of Option<T> by
        // plain trait chaining.
        let p = Parameter::<Option<i64>>::from_integer_literal(4);
        assert_eq!(p, Parameter::Exact(Some(4)));
        let nil = Parameter::<Option<i64>>::from_nil_literal();
        assert_eq!(nil, Parameter::Exact(None));
    }
}
