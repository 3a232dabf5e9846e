//! Error types
//!
//! Validation outcomes are plain booleans; these errors cover misuse only:
//! a schema that is not a mapping, an argument list that cannot be mapped
//! to field names, and rejected registrations.

use crate::value::ValueKind;

/// Errors raised by [`Validator`](crate::Validator) construction and calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidatorError {
    /// The schema passed to the constructor was not a plain mapping.
    #[error("schema must be an object, got {kind}")]
    InvalidSchema { kind: ValueKind },

    /// An argument list was given without any parameter names to map it by.
    #[error("cannot map arguments to fields: no signature available")]
    Introspection,

    /// Strict arity is enabled and the argument count differs from the
    /// parameter count.
    #[error("expected {expected} arguments, got {actual}")]
    ArityMismatch { expected: usize, actual: usize },
}

/// Why a registration was refused.
///
/// Returned as a value so callers can probe whether a name is free.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistrationError {
    #[error("predicate name must not be empty")]
    EmptyName,

    #[error("a predicate named `{name}` is already registered")]
    AlreadyRegistered { name: String },
}
