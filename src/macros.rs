//! Call-site literal syntax for matchers and dynamic values.
//!
//! Rust will not coerce a bare literal into a wrapper type on its own, so
//! these macros are the last step of the literal bridges: [`param!`] writes
//! a [`Parameter`] expectation as a literal, [`value!`] builds a [`Value`]
//! tree from nested literal syntax.
//!
//! Compound expressions in list or map element position must be
//! parenthesized (`value!([(n + 1), 2])`); the element grammar is a single
//! token tree per position.
//!
//! [`Parameter`]: crate::Parameter
//! [`Value`]: crate::Value

/// Builds a [`Parameter`](crate::Parameter) matcher from literal syntax.
///
/// - `param!(_)` accepts any argument.
/// - `param!(nil)` requires the wrapped type's empty rendition.
/// - `param!([a, b, c])` requires an exact sequence (array bridge).
/// - `param!({ k => v, ... })` requires an exact mapping (map bridge;
///   duplicate keys panic rather than overwrite).
/// - `param!(expr)` requires a value equal to `expr` (via `Into`).
///
/// # Examples
///
/// ```rust
/// use mimicry::{param, Parameter, Value};
///
/// let any: Parameter<i64> = param!(_);
/// assert!(any.matches(&3));
///
/// let exact: Parameter<Value> = param!("get");
/// assert!(exact.matches(&Value::from("get")));
///
/// let list: Parameter<Vec<i64>> = param!([1, 2, 3]);
/// assert!(list.matches(&vec![1, 2, 3]));
/// ```
#[macro_export]
macro_rules! param {
    (_) => {
        $crate::Parameter::Any
    };
    (nil) => {
        <$crate::Parameter<_> as $crate::literal::FromNilLiteral>::from_nil_literal()
    };
    ([ $($elem:expr),* $(,)? ]) => {
        <$crate::Parameter<_> as $crate::literal::FromArrayLiteral>::from_array_literal(
            ::std::vec![ $( ::std::convert::Into::into($elem) ),* ]
        )
    };
    ({ $($key:expr => $val:expr),* $(,)? }) => {
        <$crate::Parameter<_> as $crate::literal::FromMapLiteral>::from_map_literal(
            ::std::vec![
                $( (::std::convert::Into::into($key), ::std::convert::Into::into($val)) ),*
            ]
        )
    };
    ($value:expr) => {
        $crate::Parameter::Exact(::std::convert::Into::into($value))
    };
}

/// Builds a [`Value`](crate::Value) from nested literal syntax.
///
/// `nil` is the nil literal; `[...]` and `{ key => val, ... }` nest
/// arbitrarily; anything else converts through `Value::from`. Map arms
/// route through the duplicate-key-checked bridge, so a repeated key
/// panics.
///
/// # Examples
///
/// ```rust
/// use mimicry::{value, Value};
///
/// let v = value!({
///     "name" => "login",
///     "args" => [1, true, nil],
/// });
/// assert_eq!(v.as_map().unwrap()["name"], Value::from("login"));
/// ```
#[macro_export]
macro_rules! value {
    (nil) => {
        $crate::Value::Nil
    };
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(::std::vec![ $( $crate::value!($elem) ),* ])
    };
    ({ $($key:tt => $val:tt),* $(,)? }) => {
        <$crate::Value as $crate::literal::FromMapLiteral>::from_map_literal(
            ::std::vec![
                $( (::std::convert::Into::into($key), $crate::value!($val)) ),*
            ]
        )
    };
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
