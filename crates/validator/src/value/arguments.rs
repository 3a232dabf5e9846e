//! Positional argument lists and the parameter names used to map them.
//!
//! A [`Signature`] is the ordered list of parameter names of some callee.
//! Binding an argument list against it produces an [`Object`] keyed by
//! parameter name, which is what the validator evaluates.

use super::{Object, Value};

/// Ordered parameter names of a callee.
///
/// # Examples
///
/// ```rust
/// use fieldcheck_validator::{Signature, Value};
///
/// let sig = Signature::new(["a", "b"]);
/// let bound = sig.bind(&[Value::from(1), Value::from(2), Value::from(3)]);
/// assert_eq!(bound.len(), 2);
/// assert_eq!(bound["b"], Value::from(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature {
    params: Vec<String>,
}

impl Signature {
    /// Creates a signature from parameter names in positional order.
    pub fn new<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Parameter names in positional order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Number of declared parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the signature declares no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Maps positional values onto parameter names.
    ///
    /// `params[i]` receives `args[i]`. Values past the last parameter are
    /// dropped; parameters without a value receive [`Value::Undefined`].
    /// A [`Validator`](crate::Validator) does not check those parameters.
    #[must_use]
    pub fn bind(&self, args: &[Value]) -> Object {
        self.params
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let value = args.get(i).cloned().unwrap_or(Value::Undefined);
                (name.clone(), value)
            })
            .collect()
    }
}

/// A positional argument list, optionally tagged with its callee's signature.
///
/// An `Arguments` value without a callee cannot be mapped to named fields on
/// its own; validating one requires an explicit [`Signature`].
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: Vec<Value>,
    callee: Option<Signature>,
}

impl Arguments {
    /// Creates an argument list with no known callee.
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
            callee: None,
        }
    }

    /// Attaches the signature of the function these arguments were passed to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_callee(mut self, callee: Signature) -> Self {
        self.callee = Some(callee);
        self
    }

    /// The positional values.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// The callee's signature, if known.
    #[must_use]
    pub fn callee(&self) -> Option<&Signature> {
        self.callee.as_ref()
    }

    /// Number of positional values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values were passed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
