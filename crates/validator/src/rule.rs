//! Schemas, rules and rule resolution
//!
//! A [`Schema`] maps field names to [`Rule`]s. Rules come in four shapes and
//! [`resolve_rule`] turns any of them into a [`Predicate`] at evaluation time:
//!
//! 1. no rule for the field: always passes;
//! 2. [`Rule::Predicate`]: used as is;
//! 3. [`Rule::Named`] with a registered predicate under that name: the
//!    registered predicate;
//! 4. otherwise strict equality against the literal ([`Rule::Named`] falls
//!    back to equality with the name itself), or against any member of a
//!    [`Rule::OneOf`].
//!
//! Names are resolved on every call, so a predicate registered after a
//! schema was built still applies to it.

use crate::error::ValidatorError;
use crate::predicate::Predicate;
use crate::registry::Registry;
use crate::value::{Object, Value};
use indexmap::IndexMap;

// ============================================================================
// RULE
// ============================================================================

/// How a single field is judged.
#[derive(Debug, Clone)]
pub enum Rule {
    /// Called with `(value, key, data)` and no extra arguments.
    Predicate(Predicate),

    /// Name of a registered predicate; compared as a literal string when
    /// nothing is registered under it.
    Named(String),

    /// Passes when the value strict-equals the literal.
    Literal(Value),

    /// Passes when the value strict-equals any member.
    OneOf(Vec<Value>),
}

impl Rule {
    /// Shorthand for `Rule::Predicate(Predicate::new(f))`.
    pub fn predicate<F, R>(f: F) -> Self
    where
        F: Fn(&Value, &str, &Object, &[Value]) -> R + Send + Sync + 'static,
        R: Into<Value>,
    {
        Self::Predicate(Predicate::new(f))
    }

    /// Short label for log fields.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Predicate(_) => "predicate",
            Self::Named(_) => "named",
            Self::Literal(_) => "literal",
            Self::OneOf(_) => "one_of",
        }
    }
}

/// Functions become predicates, strings become names, arrays become
/// alternatives and everything else is a literal.
impl From<Value> for Rule {
    fn from(value: Value) -> Self {
        match value {
            Value::Function(p) => Self::Predicate(p),
            Value::String(name) => Self::Named(name),
            Value::Array(candidates) => Self::OneOf(candidates),
            other => Self::Literal(other),
        }
    }
}

impl From<Predicate> for Rule {
    fn from(p: Predicate) -> Self {
        Self::Predicate(p)
    }
}

impl From<&str> for Rule {
    fn from(name: &str) -> Self {
        Self::Named(name.to_owned())
    }
}

impl From<String> for Rule {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

impl From<Vec<Value>> for Rule {
    fn from(candidates: Vec<Value>) -> Self {
        Self::OneOf(candidates)
    }
}

macro_rules! impl_literal_rule {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Rule {
                fn from(v: $t) -> Self {
                    Self::Literal(Value::from(v))
                }
            }
        )*
    };
}

impl_literal_rule!(bool, i32, i64, u32, u64, f64);

// ============================================================================
// SCHEMA
// ============================================================================

/// Immutable, insertion-ordered mapping from field name to [`Rule`].
///
/// # Examples
///
/// ```rust
/// use fieldcheck_validator::{Rule, Schema, Value};
///
/// let schema = Schema::new()
///     .rule("kind", "user")
///     .rule("age", Rule::predicate(|v, _, _, _| v.as_f64().is_some_and(|n| n >= 21.0)))
///     .rule("role", vec![Value::from("admin"), Value::from("editor")]);
///
/// assert_eq!(schema.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Schema {
    rules: IndexMap<String, CompiledRule>,
}

/// A rule together with the predicate it resolves to when the registry has
/// nothing to say about it.
#[derive(Debug, Clone)]
struct CompiledRule {
    rule: Rule,
    fallback: Predicate,
}

impl CompiledRule {
    fn new(rule: Rule) -> Self {
        let fallback = match &rule {
            Rule::Predicate(p) => p.clone(),
            Rule::Named(name) => Predicate::equals(Value::String(name.clone())),
            Rule::Literal(literal) => Predicate::equals(literal.clone()),
            Rule::OneOf(candidates) => Predicate::one_of(candidates.clone()),
        };
        Self { rule, fallback }
    }
}

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the rule for `field`.
    #[must_use = "builder methods must be chained or built"]
    pub fn rule(mut self, field: impl Into<String>, rule: impl Into<Rule>) -> Self {
        self.rules.insert(field.into(), CompiledRule::new(rule.into()));
        self
    }

    /// The rule for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Rule> {
        self.rules.get(field).map(|compiled| &compiled.rule)
    }

    /// Fields with a rule, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl TryFrom<Value> for Schema {
    type Error = ValidatorError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(fields.into_iter().collect()),
            other => Err(ValidatorError::InvalidSchema { kind: other.kind() }),
        }
    }
}

impl<K, R> FromIterator<(K, R)> for Schema
where
    K: Into<String>,
    R: Into<Rule>,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        Self {
            rules: iter
                .into_iter()
                .map(|(k, r)| (k.into(), CompiledRule::new(r.into())))
                .collect(),
        }
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Resolves the predicate that judges `key` under `schema`.
///
/// Never fails: an unknown key resolves to an always-passing predicate.
/// Only [`Rule::Named`] consults the registry; every other rule was turned
/// into a predicate when it was added to the schema.
#[must_use]
pub fn resolve_rule(schema: &Schema, key: &str) -> Predicate {
    match schema.rules.get(key) {
        None => Predicate::always(),
        Some(CompiledRule {
            rule: Rule::Named(name),
            fallback,
        }) => Registry::global()
            .resolve(name)
            .unwrap_or_else(|| fallback.clone()),
        Some(compiled) => compiled.fallback.clone(),
    }
}
