//! Success / Failure Values
//!
//! `Outcome<T, E>` models an expected success (`Ok`) or failure (`Err`).
//! Combining two outcomes keeps every failure: the errors are handed to the
//! error combiner as an `OptionalPair` saying which side failed.

use crate::error::{VariantError, VariantResult};
use crate::optional::{IntoOptional, Optional};
use crate::optional_pair::OptionalPair;
use crate::payload::Payload;
use crate::runtime::matcher::Matcher;
use crate::runtime::schema::Schema;
use crate::runtime::value::Value;
use crate::runtime::variant::{Tagged, Variant};

/// Success or failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

/// Conversion of a mapper result into an `Outcome` with error type `E`.
///
/// Payload types become `Ok`; an `Outcome` is passed through unchanged.
pub trait IntoOutcome<E> {
    type Value;

    fn into_outcome(self) -> Outcome<Self::Value, E>;
}

impl<T: Payload, E> IntoOutcome<E> for T {
    type Value = T;

    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::Ok(self)
    }
}

impl<T, E> IntoOutcome<E> for Outcome<T, E> {
    type Value = T;

    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}

impl<T, E> Outcome<T, E> {
    /// Checked `Ok` constructor; a null-equivalent fails with `NullConstruction`
    pub fn ok<V>(value: V) -> VariantResult<Self>
    where
        V: IntoOptional<Value = T>,
    {
        match value.into_optional() {
            Optional::Some(value) => Ok(Outcome::Ok(value)),
            Optional::None => Err(VariantError::NullConstruction { kind: "Ok" }),
        }
    }

    /// Checked `Err` constructor; a null-equivalent fails with `NullConstruction`
    pub fn err<V>(error: V) -> VariantResult<Self>
    where
        V: IntoOptional<Value = E>,
    {
        match error.into_optional() {
            Optional::Some(error) => Ok(Outcome::Err(error)),
            Optional::None => Err(VariantError::NullConstruction { kind: "Err" }),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Err(_))
    }

    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Apply `map_ok` on success; an `Outcome` returned by it is kept as is.
    /// Errors pass through untouched.
    pub fn map<F, R>(self, map_ok: F) -> Outcome<R::Value, E>
    where
        F: FnOnce(T) -> R,
        R: IntoOutcome<E>,
    {
        match self {
            Outcome::Ok(value) => map_ok(value).into_outcome(),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Like [`Outcome::map`], but errors are transformed by `map_err`
    pub fn map_both<F, G, R, ME>(self, map_ok: F, map_err: G) -> Outcome<R::Value, ME>
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> ME,
        R: IntoOutcome<ME>,
    {
        match self {
            Outcome::Ok(value) => map_ok(value).into_outcome(),
            Outcome::Err(error) => Outcome::Err(map_err(error)),
        }
    }

    pub fn map_err<G, ME>(self, map_err: G) -> Outcome<T, ME>
    where
        G: FnOnce(E) -> ME,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(map_err(error)),
        }
    }

    /// Stored value, or `fallback(error)` on failure
    pub fn fallback<F>(self, fallback: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Ok(value) => value,
            Outcome::Err(error) => fallback(error),
        }
    }

    /// Combine with `other`, collecting the errors of whichever sides failed
    /// into a list (left error first).
    pub fn combine<B, C, F>(self, other: Outcome<B, E>, combine_ok: F) -> Outcome<C, Vec<E>>
    where
        F: FnOnce(T, B) -> C,
    {
        self.combine_with(other, combine_ok, OptionalPair::into_vec)
    }

    /// Combine with `other`. `combine_ok` runs only if both succeed;
    /// `combine_err` receives `First`, `Second` or `Both` depending on which
    /// sides failed.
    pub fn combine_with<B, BE, C, CE, F, G>(
        self,
        other: Outcome<B, BE>,
        combine_ok: F,
        combine_err: G,
    ) -> Outcome<C, CE>
    where
        F: FnOnce(T, B) -> C,
        G: FnOnce(OptionalPair<E, BE>) -> CE,
    {
        match (self, other) {
            (Outcome::Ok(a), Outcome::Ok(b)) => Outcome::Ok(combine_ok(a, b)),
            (Outcome::Err(ae), Outcome::Ok(_)) => {
                Outcome::Err(combine_err(OptionalPair::from_first(Optional::Some(ae))))
            }
            (Outcome::Ok(_), Outcome::Err(be)) => {
                Outcome::Err(combine_err(OptionalPair::from_second(Optional::Some(be))))
            }
            (Outcome::Err(ae), Outcome::Err(be)) => Outcome::Err(combine_err(
                OptionalPair::from_both(Optional::Some(ae), Optional::Some(be)),
            )),
        }
    }

    /// Keep a success only if `predicate` holds, else fail with `error()`.
    /// An existing failure keeps its own error and `error` is not called.
    pub fn filter<P, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        match self {
            Outcome::Ok(value) => {
                if predicate(&value) {
                    Outcome::Ok(value)
                } else {
                    Outcome::Err(error())
                }
            }
            Outcome::Err(e) => Outcome::Err(e),
        }
    }

    /// Like [`Outcome::filter`], but an existing failure is replaced by `error()` too
    pub fn filter_replacing<P, F>(self, predicate: P, error: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce() -> E,
    {
        match self {
            Outcome::Ok(value) => {
                if predicate(&value) {
                    Outcome::Ok(value)
                } else {
                    Outcome::Err(error())
                }
            }
            Outcome::Err(_) => Outcome::Err(error()),
        }
    }

    /// Success value as an `Optional`, discarding any error
    pub fn to_optional(self) -> Optional<T> {
        match self {
            Outcome::Ok(value) => Optional::Some(value),
            Outcome::Err(_) => Optional::None,
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

/// `Err(err)` when `err` is present, otherwise `Ok(value)`
pub fn to_outcome<T, X>(err: X, value: T) -> Outcome<T, X::Value>
where
    X: IntoOptional,
{
    match err.into_optional() {
        Optional::Some(error) => Outcome::Err(error),
        Optional::None => Outcome::Ok(value),
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T, E> Tagged for Outcome<T, E> {
    const NAME: &'static str = "Outcome";
    const CASES: &'static [(&'static str, usize)] = &[("Ok", 1), ("Err", 1)];

    fn kind(&self) -> &'static str {
        match self {
            Outcome::Ok(_) => "Ok",
            Outcome::Err(_) => "Err",
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Variant
where
    T: Payload + Into<Value>,
    E: Payload + Into<Value>,
{
    fn from(outcome: Outcome<T, E>) -> Self {
        let kind = outcome.kind();
        let payload = match outcome {
            Outcome::Ok(value) => value.into(),
            Outcome::Err(error) => error.into(),
        };
        Variant::from_parts(kind, vec![payload])
    }
}

impl<T, E> From<Outcome<T, E>> for Value
where
    T: Payload + Into<Value>,
    E: Payload + Into<Value>,
{
    fn from(outcome: Outcome<T, E>) -> Self {
        Value::Variant(outcome.into())
    }
}

/// Lowering of a dynamic `Outcome`; a null payload fails with `NullConstruction`
impl TryFrom<Outcome<Value, Value>> for Variant {
    type Error = VariantError;

    fn try_from(outcome: Outcome<Value, Value>) -> VariantResult<Self> {
        let kind = outcome.kind();
        let payload = match outcome {
            Outcome::Ok(value) | Outcome::Err(value) => value,
        };
        if payload.is_null() {
            return Err(VariantError::NullConstruction { kind });
        }
        Ok(Variant::from_parts(kind, vec![payload]))
    }
}

impl TryFrom<&Variant> for Outcome<Value, Value> {
    type Error = VariantError;

    fn try_from(variant: &Variant) -> VariantResult<Self> {
        Schema::of::<Self>().validate(variant)?;
        Matcher::new()
            .on("Ok", |values: &[Value]| Outcome::ok(values[0].clone()))
            .on("Err", |values: &[Value]| Outcome::err(values[0].clone()))
            .dispatch_variant(variant)?
    }
}
