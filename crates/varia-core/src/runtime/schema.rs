//! Sum-Type Schemas
//!
//! A `Schema` declares the closed case set of a dynamic sum type: each kind
//! with its fixed arity. It checks construction against the declaration and
//! checks matchers for exhaustiveness, the runtime counterpart of what native
//! `match` gives the typed sum types.

use indexmap::IndexMap;

use crate::config::VariantConfig;
use crate::error::{VariantError, VariantResult};
use super::matcher::Matcher;
use super::value::Value;
use super::variant::{Tagged, Variant, CATCH_ALL};

/// Declared case set of a sum type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    cases: IndexMap<String, usize>,
    config: VariantConfig,
}

impl Schema {
    /// Empty schema with default limits
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_config(name, VariantConfig::default())
    }

    /// Empty schema with explicit limits
    pub fn with_config(name: impl Into<String>, config: VariantConfig) -> Self {
        Schema {
            name: name.into(),
            cases: IndexMap::new(),
            config,
        }
    }

    /// Schema of a statically typed sum type
    pub fn of<T: Tagged>() -> Self {
        let mut schema = Self::new(T::NAME);
        for (kind, arity) in T::CASES {
            schema.cases.insert((*kind).to_string(), *arity);
        }
        schema
    }

    /// Declare a case
    pub fn case(mut self, kind: impl Into<String>, arity: usize) -> VariantResult<Self> {
        let kind = kind.into();
        if kind == CATCH_ALL {
            return Err(VariantError::InvalidKind(kind));
        }
        if self.cases.contains_key(&kind) {
            return Err(VariantError::DuplicateKind {
                schema: self.name.clone(),
                kind,
            });
        }
        if self.cases.len() >= self.config.max_cases {
            return Err(VariantError::TooManyCases {
                schema: self.name.clone(),
                limit: self.config.max_cases,
            });
        }
        if arity > self.config.max_arity {
            return Err(VariantError::ArityLimit {
                kind,
                arity,
                limit: self.config.max_arity,
            });
        }

        tracing::debug!(schema = %self.name, kind = %kind, arity, "declared case");
        self.cases.insert(kind, arity);
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    /// Declared kinds in declaration order
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.cases.keys().map(String::as_str)
    }

    pub fn arity(&self, kind: &str) -> Option<usize> {
        self.cases.get(kind).copied()
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.cases.contains_key(kind)
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Construct a variant of a declared kind with exactly its arity
    pub fn construct(&self, kind: &str, values: Vec<Value>) -> VariantResult<Variant> {
        self.check_case(kind, values.len())?;
        Variant::new(kind, values)
    }

    /// Check that `variant` is one of the declared cases
    pub fn validate(&self, variant: &Variant) -> VariantResult<()> {
        self.check_case(variant.kind(), variant.arity())
    }

    fn check_case(&self, kind: &str, found: usize) -> VariantResult<()> {
        let expected = self.arity(kind).ok_or_else(|| VariantError::UnknownKind {
            schema: self.name.clone(),
            kind: kind.to_string(),
        })?;
        if expected != found {
            return Err(VariantError::ArityMismatch {
                kind: kind.to_string(),
                expected,
                found,
            });
        }
        Ok(())
    }

    /// Declared kinds `matcher` has no dedicated branch for
    pub fn missing<R>(&self, matcher: &Matcher<'_, R>) -> Vec<String> {
        self.kinds()
            .filter(|kind| !matcher.handles(kind))
            .map(str::to_string)
            .collect()
    }

    /// Check that `matcher` names only declared kinds and covers all of them,
    /// either directly or through a fallback.
    pub fn check_exhaustive<R>(&self, matcher: &Matcher<'_, R>) -> VariantResult<()> {
        if let Some(extra) = matcher.kinds().find(|kind| !self.contains(kind)) {
            return Err(VariantError::UnknownKind {
                schema: self.name.clone(),
                kind: extra.to_string(),
            });
        }

        let missing = self.missing(matcher);
        if missing.is_empty() || matcher.has_fallback() {
            return Ok(());
        }

        tracing::debug!(schema = %self.name, ?missing, "non-exhaustive matcher");
        Err(VariantError::NonExhaustive {
            schema: self.name.clone(),
            missing,
        })
    }

    /// Validate `value` against this schema, then dispatch it
    pub fn dispatch<R>(&self, matcher: &Matcher<'_, R>, value: &Value) -> VariantResult<R> {
        let variant = value.as_variant().ok_or(VariantError::InvalidVariant {
            found: value.type_name(),
        })?;
        self.validate(variant)?;
        matcher.dispatch_variant(variant)
    }
}
