//! Schema-bound validator
//!
//! A [`Validator`] owns one [`Schema`] and answers two questions about an
//! input: does every field pass ([`test`](Validator::test)), and which
//! fields pass ([`pick`](Validator::pick)).
//!
//! Only mappings are validated. Any other input passes `test` and comes back
//! unchanged from `pick`. Keys with no rule in the schema always pass.
//!
//! # Argument lists
//!
//! A [`Value::Arguments`] input is first mapped to an object using a
//! [`Signature`]: the one given to [`test_with`](Validator::test_with) /
//! [`pick_with`](Validator::pick_with), else the callee recorded on the
//! arguments. With neither, the call fails with
//! [`ValidatorError::Introspection`].
//!
//! Parameters that received no argument are bound to [`Value::Undefined`]
//! and pass without their rule being consulted.

use crate::error::ValidatorError;
use crate::rule::{Schema, resolve_rule};
use crate::value::{Arguments, Object, Signature, Value};
use std::borrow::Cow;
use std::sync::Arc;

// ============================================================================
// CONFIGURATION
// ============================================================================

/// How argument lists of the wrong length are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArityPolicy {
    /// Surplus values are dropped, missing ones become `Undefined` and pass.
    #[default]
    Permissive,
    /// The argument count must equal the parameter count.
    Strict,
}

/// Builder for [`Validator`].
///
/// # Examples
///
/// ```rust
/// use fieldcheck_validator::{ArityPolicy, Arguments, Schema, Signature, Validator, Value};
///
/// let v = Validator::builder(Schema::new().rule("a", 1))
///     .arity(ArityPolicy::Strict)
///     .build();
///
/// let args = Value::from(Arguments::new([1, 2]));
/// assert!(v.test_with(&args, &Signature::new(["a"])).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ValidatorBuilder {
    schema: Schema,
    arity: ArityPolicy,
}

impl ValidatorBuilder {
    /// Sets the arity policy for argument lists.
    #[must_use = "builder methods must be chained or built"]
    pub fn arity(mut self, arity: ArityPolicy) -> Self {
        self.arity = arity;
        self
    }

    pub fn build(self) -> Validator {
        Validator {
            schema: Arc::new(self.schema),
            arity: self.arity,
        }
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// An input mapped to named fields.
struct Fields<'a> {
    data: Cow<'a, Object>,
    /// Parameters no argument was passed for.
    unbound: &'a [String],
}

impl Fields<'_> {
    fn is_unbound(&self, key: &str) -> bool {
        self.unbound.iter().any(|name| name == key)
    }
}

/// Validates single-level mappings against a schema.
///
/// Immutable after construction and cheap to clone.
///
/// # Examples
///
/// ```rust
/// use fieldcheck_validator::{Rule, Schema, Validator, Value};
/// use serde_json::json;
///
/// let v = Validator::from_schema(
///     Schema::new().rule("age", Rule::predicate(|v, _, _, _| v.as_f64().is_some_and(|n| n >= 21.0))),
/// );
///
/// assert!(v.test(&json!({"name": "x", "age": 37}).into()).unwrap());
/// assert!(!v.test(&json!({"name": "x", "age": 12}).into()).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    schema: Arc<Schema>,
    arity: ArityPolicy,
}

impl Validator {
    /// Builds a validator from a dynamic schema value.
    ///
    /// Fails unless `schema` is a [`Value::Object`]. Each field's value is
    /// turned into a rule with [`Rule::from`](crate::Rule).
    pub fn new(schema: Value) -> Result<Self, ValidatorError> {
        Schema::try_from(schema).map(Self::from_schema)
    }

    /// Builds a validator from a typed schema.
    #[must_use]
    pub fn from_schema(schema: Schema) -> Self {
        Self::builder(schema).build()
    }

    /// Starts a builder for a validator with non-default settings.
    #[must_use]
    pub fn builder(schema: Schema) -> ValidatorBuilder {
        ValidatorBuilder {
            schema,
            arity: ArityPolicy::default(),
        }
    }

    /// The schema this validator was built with.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    #[must_use]
    pub fn arity(&self) -> ArityPolicy {
        self.arity
    }

    /// Whether every field of `thing` passes its rule.
    ///
    /// Fields are checked in insertion order and the first failure stops the
    /// pass, so predicates of later fields are not called. Only a verdict of
    /// exactly `true` passes. A panicking predicate unwinds through here.
    pub fn test(&self, thing: &Value) -> Result<bool, ValidatorError> {
        self.test_inner(thing, None)
    }

    /// Like [`test`](Self::test), mapping an argument list with `signature`.
    pub fn test_with(&self, thing: &Value, signature: &Signature) -> Result<bool, ValidatorError> {
        self.test_inner(thing, Some(signature))
    }

    /// The fields of `thing` that pass their rule, in input order.
    ///
    /// Every field is evaluated independently. Inputs that are not mappings
    /// are returned unchanged.
    pub fn pick(&self, thing: &Value) -> Result<Value, ValidatorError> {
        self.pick_inner(thing, None)
    }

    /// Like [`pick`](Self::pick), mapping an argument list with `signature`.
    pub fn pick_with(&self, thing: &Value, signature: &Signature) -> Result<Value, ValidatorError> {
        self.pick_inner(thing, Some(signature))
    }

    fn test_inner(
        &self,
        thing: &Value,
        signature: Option<&Signature>,
    ) -> Result<bool, ValidatorError> {
        let Some(fields) = self.fields(thing, signature)? else {
            return Ok(true);
        };

        for (key, value) in fields.data.iter() {
            if !self.check(key, value, &fields) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn pick_inner(
        &self,
        thing: &Value,
        signature: Option<&Signature>,
    ) -> Result<Value, ValidatorError> {
        let Some(fields) = self.fields(thing, signature)? else {
            return Ok(thing.clone());
        };

        let picked: Object = fields
            .data
            .iter()
            .filter(|(key, value)| self.check(key, value, &fields))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Ok(Value::Object(picked))
    }

    fn check(&self, key: &str, value: &Value, fields: &Fields<'_>) -> bool {
        if fields.is_unbound(key) {
            return true;
        }

        let passed = resolve_rule(&self.schema, key).passes(value, key, &fields.data);
        if !passed {
            tracing::trace!(
                field = %key,
                rule = self.schema.get(key).map_or("none", |r| r.label()),
                "field rejected"
            );
        }
        passed
    }

    /// The fields to evaluate, or `None` when `thing` is not validated.
    fn fields<'a>(
        &self,
        thing: &'a Value,
        signature: Option<&'a Signature>,
    ) -> Result<Option<Fields<'a>>, ValidatorError> {
        match thing {
            Value::Object(obj) => Ok(Some(Fields {
                data: Cow::Borrowed(obj),
                unbound: &[],
            })),
            Value::Arguments(args) => {
                let signature = signature
                    .or_else(|| args.callee())
                    .ok_or(ValidatorError::Introspection)?;
                self.check_arity(signature, args)?;
                Ok(Some(Fields {
                    data: Cow::Owned(signature.bind(args.values())),
                    unbound: signature.params().get(args.len()..).unwrap_or_default(),
                }))
            }
            _ => Ok(None),
        }
    }

    fn check_arity(&self, signature: &Signature, args: &Arguments) -> Result<(), ValidatorError> {
        match self.arity {
            ArityPolicy::Strict if signature.len() != args.len() => {
                Err(ValidatorError::ArityMismatch {
                    expected: signature.len(),
                    actual: args.len(),
                })
            }
            _ => Ok(()),
        }
    }
}
