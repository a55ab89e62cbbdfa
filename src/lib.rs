//! Mimicry: literal-friendly argument matchers for mock call expectations.
//!
//! Mock expectations name, for each argument position, either "accept any
//! argument" or "require this exact argument". [`Parameter`] is that
//! two-state matcher; the [`literal`] traits let it (and `Option`, and the
//! dynamic [`Value`] model) be built straight from literal syntax through
//! the [`param!`] and [`value!`] macros, instead of explicit constructor
//! calls.
//!
//! ```rust
//! use mimicry::{param, Parameter, Value};
//!
//! // An expectation over (method, payload, retries):
//! let method: Parameter<Value> = param!("get");
//! let payload: Parameter<Value> = param!({ "id" => 7 });
//! let retries: Parameter<i64> = param!(_);
//!
//! assert!(method.matches(&Value::from("get")));
//! assert!(!payload.is_any());
//! assert!(retries.matches(&3));
//! ```

pub use crate::errors::LiteralError;
pub use crate::parameter::Parameter;
pub use crate::value::Value;

pub mod errors;
pub mod literal;
mod macros;
pub mod parameter;
pub mod value;
