//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldcheck_validator::prelude::*;` import that
//! brings in the types needed to build schemas and run validators.
//!
//! # Examples
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//!
//! let validator = Validator::from_schema(
//!     Schema::new()
//!         .rule("name", "isString")
//!         .rule("age", Rule::predicate(|v, _, _, _| v.as_f64().is_some_and(|n| n >= 0.0))),
//! );
//! assert!(validator.test(&Value::from("not an object")).unwrap());
//! ```

pub use crate::builtins::{
    is_arguments, is_array, is_boolean, is_date, is_finite_number, is_function, is_not_empty_string,
    is_number, is_object, is_string,
};
pub use crate::error::{RegistrationError, ValidatorError};
pub use crate::predicate::Predicate;
pub use crate::registry::{self, Registry};
pub use crate::rule::{Rule, Schema, resolve_rule};
pub use crate::validator::{ArityPolicy, Validator, ValidatorBuilder};
pub use crate::value::{Arguments, Object, Signature, Value, ValueKind};
