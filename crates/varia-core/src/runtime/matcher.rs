//! Variant Dispatch
//!
//! A `Matcher` maps kind labels to handlers and selects exactly one of them
//! for a given variant. Resolution order: the branch registered for the
//! variant's kind, then the explicit catch-all, then a branch registered under
//! the reserved `CATCH_ALL` key.

use std::fmt;

use indexmap::IndexMap;

use crate::error::{VariantError, VariantResult};
use super::value::Value;
use super::variant::{Variant, CATCH_ALL};

type Branch<'a, R> = Box<dyn Fn(&[Value]) -> R + 'a>;
type CatchAll<'a, R> = Box<dyn Fn(&Variant) -> R + 'a>;

/// Set of dispatch branches producing `R`
pub struct Matcher<'a, R> {
    branches: IndexMap<String, Branch<'a, R>>,
    catch_all: Option<CatchAll<'a, R>>,
}

impl<'a, R> Matcher<'a, R> {
    /// Matcher with no branches
    pub fn new() -> Self {
        Matcher {
            branches: IndexMap::new(),
            catch_all: None,
        }
    }

    /// Register `handler` for `kind`. The handler receives the payload in
    /// declaration order. Registering under `CATCH_ALL` installs the
    /// reserved fallback branch. A later registration replaces an earlier one.
    pub fn on<F>(mut self, kind: impl Into<String>, handler: F) -> Self
    where
        F: Fn(&[Value]) -> R + 'a,
    {
        self.branches.insert(kind.into(), Box::new(handler));
        self
    }

    /// Install the catch-all handler, which receives the whole variant
    pub fn otherwise<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Variant) -> R + 'a,
    {
        self.catch_all = Some(Box::new(handler));
        self
    }

    /// Whether a dedicated branch exists for `kind`
    pub fn handles(&self, kind: &str) -> bool {
        self.branches.contains_key(kind)
    }

    /// Whether an unlisted kind still resolves to some handler
    pub fn has_fallback(&self) -> bool {
        self.catch_all.is_some() || self.branches.contains_key(CATCH_ALL)
    }

    /// Kinds with a dedicated branch, in registration order (the reserved key excluded)
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.branches
            .keys()
            .map(String::as_str)
            .filter(|k| *k != CATCH_ALL)
    }

    /// Dispatch a dynamic value.
    ///
    /// Fails with `InvalidVariant` if `value` is not a variant.
    pub fn dispatch(&self, value: &Value) -> VariantResult<R> {
        match value {
            Value::Variant(v) => self.dispatch_variant(v),
            other => {
                tracing::debug!("dispatch on non-variant value of type {}", other.type_name());
                Err(VariantError::InvalidVariant {
                    found: other.type_name(),
                })
            }
        }
    }

    /// Dispatch a variant.
    ///
    /// Fails with `UnhandledVariant` if no branch, catch-all or reserved
    /// fallback applies.
    pub fn dispatch_variant(&self, variant: &Variant) -> VariantResult<R> {
        let kind = variant.kind();

        if let Some(branch) = self.branches.get(kind) {
            tracing::trace!(kind, arity = variant.arity(), "dispatch to branch");
            return Ok(branch(variant.values()));
        }

        if let Some(catch_all) = &self.catch_all {
            tracing::trace!(kind, "dispatch to catch-all");
            return Ok(catch_all(variant));
        }

        if let Some(fallback) = self.branches.get(CATCH_ALL) {
            tracing::trace!(kind, "dispatch to reserved fallback branch");
            return Ok(fallback(variant.values()));
        }

        tracing::debug!(kind, "unhandled variant");
        Err(VariantError::UnhandledVariant {
            kind: kind.to_string(),
        })
    }
}

impl<R> Default for Matcher<'_, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Matcher<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matcher")
            .field("branches", &self.branches.keys().collect::<Vec<_>>())
            .field("catch_all", &self.catch_all.is_some())
            .finish()
    }
}

/// Free-function form of [`Matcher::dispatch`].
pub fn match_value<R>(value: &Value, matcher: &Matcher<'_, R>) -> VariantResult<R> {
    matcher.dispatch(value)
}
