//! Named predicate registry
//!
//! Schemas refer to reusable predicates by name. The names live in a single
//! process-wide [`Registry`], seeded with the [builtins](crate::builtins) on
//! first use and append-only afterwards: a name, once taken, keeps its
//! predicate for the life of the process.
//!
//! # Thread Safety
//!
//! Entries are kept in a `DashMap`. Registration goes through the map's
//! entry API, so two threads racing for the same name see exactly one
//! winner; every other attempt gets [`RegistrationError::AlreadyRegistered`].

use crate::builtins::BUILTINS;
use crate::error::RegistrationError;
use crate::predicate::Predicate;
use crate::value::Value;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::LazyLock;

/// Global static registry instance
static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::with_builtins);

/// Write-once catalog of named predicates.
pub struct Registry {
    entries: DashMap<String, Predicate>,
}

impl Registry {
    /// The process-wide registry every validator resolves names against.
    pub fn global() -> &'static Self {
        &REGISTRY
    }

    fn with_builtins() -> Self {
        let registry = Self {
            entries: DashMap::with_capacity(BUILTINS.len()),
        };
        for (name, f) in BUILTINS {
            registry
                .entries
                .insert((*name).to_owned(), Predicate::from_fn(*f));
        }
        tracing::debug!(count = BUILTINS.len(), "seeded builtin predicates");
        registry
    }

    /// Registers `predicate` under `name`, binding `args` after
    /// `(value, key, data)` on every call.
    ///
    /// Returns the stored wrapper, which is also what [`resolve`](Self::resolve)
    /// returns from now on.
    pub fn register(
        &self,
        name: &str,
        predicate: Predicate,
        args: Vec<Value>,
    ) -> Result<Predicate, RegistrationError> {
        if name.is_empty() {
            tracing::debug!("rejected predicate with empty name");
            return Err(RegistrationError::EmptyName);
        }

        match self.entries.entry(name.to_owned()) {
            Entry::Occupied(_) => {
                tracing::debug!(predicate = %name, "rejected duplicate predicate");
                Err(RegistrationError::AlreadyRegistered {
                    name: name.to_owned(),
                })
            }
            Entry::Vacant(slot) => {
                let wrapper = predicate.bind(args);
                slot.insert(wrapper.clone());
                tracing::info!(predicate = %name, "registered predicate");
                Ok(wrapper)
            }
        }
    }

    /// Look up a predicate by name.
    ///
    /// The handle is cloned out so no map lock is held while it runs.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Predicate> {
        self.entries.get(name).map(|entry| entry.value().clone())
    }

    /// Check if a predicate is registered under `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.iter().map(|e| e.key().clone()).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered predicates, builtins included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no predicates are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registers a predicate in the global registry.
///
/// # Examples
///
/// ```rust
/// use fieldcheck_validator::{Predicate, Validator, Value, registry};
/// use serde_json::json;
///
/// registry::register(
///     "isAdultExample",
///     Predicate::new(|v, _, _, _| v.as_f64().is_some_and(|n| n >= 21.0)),
///     Vec::new(),
/// )
/// .unwrap();
///
/// let v = Validator::new(json!({"age": "isAdultExample"}).into()).unwrap();
/// assert!(v.test(&json!({"age": 37}).into()).unwrap());
/// ```
pub fn register(
    name: &str,
    predicate: Predicate,
    args: Vec<Value>,
) -> Result<Predicate, RegistrationError> {
    Registry::global().register(name, predicate, args)
}

/// Looks up a predicate in the global registry.
#[must_use]
pub fn resolve(name: &str) -> Option<Predicate> {
    Registry::global().resolve(name)
}
