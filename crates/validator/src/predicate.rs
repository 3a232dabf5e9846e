//! Shared predicate handles
//!
//! A [`Predicate`] judges one field of an input object. It is called with
//! the field's value, the field's key, the whole (possibly remapped) input
//! and any extra arguments bound at registration, and returns a verdict.
//! Only [`Value::Bool(true)`](Value::Bool) counts as a pass.

use crate::value::{Object, Value};
use std::fmt;
use std::sync::{Arc, LazyLock};

type PredicateFn = dyn Fn(&Value, &str, &Object, &[Value]) -> Value + Send + Sync;

static ALWAYS: LazyLock<Predicate> = LazyLock::new(|| Predicate::new(|_, _, _, _| true));

/// A cheaply clonable, thread-safe predicate.
///
/// # Examples
///
/// ```rust
/// use fieldcheck_validator::{Object, Predicate, Value};
///
/// let adult = Predicate::new(|v, _, _, _| v.as_f64().is_some_and(|n| n >= 21.0));
/// assert!(adult.passes(&Value::from(37), "age", &Object::new()));
/// assert!(!adult.passes(&Value::from(12), "age", &Object::new()));
/// ```
#[derive(Clone)]
pub struct Predicate {
    inner: Arc<PredicateFn>,
}

impl Predicate {
    /// Wraps a closure as a predicate.
    ///
    /// The closure may return anything convertible into a [`Value`]; a
    /// `bool` is the common case.
    pub fn new<F, R>(f: F) -> Self
    where
        F: Fn(&Value, &str, &Object, &[Value]) -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        Self {
            inner: Arc::new(
                move |value: &Value, key: &str, data: &Object, args: &[Value]| -> Value {
                    f(value, key, data, args).into()
                },
            ),
        }
    }

    /// Lifts a plain classification function, ignoring key, data and args.
    pub fn from_fn(f: fn(&Value) -> bool) -> Self {
        Self::new(move |value, _, _, _| f(value))
    }

    /// The predicate used for fields that have no rule.
    #[must_use]
    pub fn always() -> Self {
        ALWAYS.clone()
    }

    /// Passes when the value strict-equals `literal`.
    #[must_use]
    pub fn equals(literal: Value) -> Self {
        Self::new(move |value, _, _, _| value.strict_eq(&literal))
    }

    /// Passes when the value strict-equals any of `candidates`.
    #[must_use]
    pub fn one_of(candidates: Vec<Value>) -> Self {
        Self::new(move |value, _, _, _| candidates.iter().any(|c| value.strict_eq(c)))
    }

    /// Returns a wrapper that appends `args` after `(value, key, data)`.
    ///
    /// Arguments supplied by the caller of the wrapper are ignored; the
    /// bound ones always win.
    #[must_use]
    pub fn bind(&self, args: Vec<Value>) -> Self {
        let raw = self.clone();
        Self::new(move |value, key, data, _| raw.call(value, key, data, &args))
    }

    /// Invokes the predicate and returns its raw verdict.
    ///
    /// A panic inside the predicate unwinds through this call.
    pub fn call(&self, value: &Value, key: &str, data: &Object, args: &[Value]) -> Value {
        (self.inner)(value, key, data, args)
    }

    /// Invokes the predicate with no extra arguments and reports whether the
    /// verdict is exactly `true`.
    pub fn passes(&self, value: &Value, key: &str, data: &Object) -> bool {
        self.call(value, key, data, &[]).is_true()
    }

    /// Whether both handles point at the same function.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate")
            .field(&Arc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}
