//! # fieldcheck-validator
//!
//! Schema-based structural validation for single-level key/value data.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldcheck_validator::prelude::*;
//! use serde_json::json;
//!
//! let validator = Validator::new(json!({"kind": "user", "name": "isNotEmptyString"}).into())?;
//!
//! assert!(validator.test(&json!({"kind": "user", "name": "Ada"}).into())?);
//! assert!(!validator.test(&json!({"kind": "admin", "name": "Ada"}).into())?);
//! # Ok::<(), ValidatorError>(())
//! ```
//!
//! ## Rules
//!
//! A schema maps each field to a [`Rule`]:
//!
//! - a [`Predicate`] closure, called with `(value, key, data, args)`;
//! - the name of a predicate in the global [`Registry`];
//! - a literal, compared with strict equality;
//! - a list of literals, any of which may match.
//!
//! A predicate passes only by returning exactly `true`. Fields missing from
//! the schema pass, and inputs that are not mappings pass.
//!
//! ## Registry
//!
//! Ten classification predicates ship pre-registered (`isObject`,
//! `isString`, `isBoolean`, `isFunction`, `isArray`, `isNumber`,
//! `isFiniteNumber`, `isDate`, `isArguments`, `isNotEmptyString`). More can
//! be added with [`registry::register`]; names are write-once.

pub mod builtins;
pub mod error;
pub mod prelude;
pub mod predicate;
pub mod registry;
pub mod rule;
pub mod validator;
pub mod value;

pub use error::{RegistrationError, ValidatorError};
pub use predicate::Predicate;
pub use registry::Registry;
pub use rule::{Rule, Schema, resolve_rule};
pub use validator::{ArityPolicy, Validator, ValidatorBuilder};
pub use value::{Arguments, Object, Signature, Value, ValueKind};
