//! Optional Values
//!
//! `Optional<T>` models presence (`Some`) or absence (`None`) of a value.
//! Combinators never run a user function for a case it does not apply to.

use crate::error::{VariantError, VariantResult};
use crate::outcome::Outcome;
use crate::payload::Payload;
use crate::runtime::matcher::Matcher;
use crate::runtime::schema::Schema;
use crate::runtime::value::Value;
use crate::runtime::variant::{Tagged, Variant};

/// Presence or absence of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Optional<T> {
    Some(T),
    None,
}

/// Conversion into an `Optional`, deciding what counts as absent.
///
/// Payload types become `Some`, an `Optional` is passed through unchanged,
/// and the null-equivalents (`Option::None`, `Value::Null`) become `None`.
pub trait IntoOptional {
    type Value;

    /// Set when `Self` already is an `Optional`
    const IS_OPTIONAL: bool = false;

    fn into_optional(self) -> Optional<Self::Value>;
}

impl<T: Payload> IntoOptional for T {
    type Value = T;

    fn into_optional(self) -> Optional<T> {
        Optional::Some(self)
    }
}

impl<T> IntoOptional for Optional<T> {
    type Value = T;
    const IS_OPTIONAL: bool = true;

    fn into_optional(self) -> Optional<T> {
        self
    }
}

impl<T> IntoOptional for Option<T> {
    type Value = T;

    fn into_optional(self) -> Optional<T> {
        self.into()
    }
}

impl IntoOptional for Value {
    type Value = Value;

    fn into_optional(self) -> Optional<Value> {
        if self.is_null() {
            Optional::None
        } else {
            Optional::Some(self)
        }
    }
}

/// Total conversion of a possibly null value into an `Optional`
pub fn to_optional<V: IntoOptional>(value: V) -> Optional<V::Value> {
    value.into_optional()
}

impl<T> Optional<T> {
    /// The shared absent value
    pub const NONE: Self = Optional::None;

    /// Checked `Some` constructor.
    ///
    /// An `Optional` argument is returned unchanged, so wrapping never nests.
    /// Any other null-equivalent fails with `NullConstruction`.
    pub fn some<V>(value: V) -> VariantResult<Self>
    where
        V: IntoOptional<Value = T>,
    {
        if V::IS_OPTIONAL {
            return Ok(value.into_optional());
        }
        match value.into_optional() {
            Optional::None => Err(VariantError::NullConstruction { kind: "Some" }),
            some => Ok(some),
        }
    }

    pub fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Optional::None)
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(value) => Optional::Some(value),
            Optional::None => Optional::None,
        }
    }

    /// Apply `mapper` to a present value.
    ///
    /// If the mapper returns an `Optional` it is returned as is; a
    /// null-equivalent result yields `None`. `mapper` never runs on `None`.
    pub fn map<F, R>(self, mapper: F) -> Optional<R::Value>
    where
        F: FnOnce(T) -> R,
        R: IntoOptional,
    {
        match self {
            Optional::Some(value) => mapper(value).into_optional(),
            Optional::None => Optional::None,
        }
    }

    /// Run `combiner` only when both `self` and `other` are present.
    ///
    /// `self` is checked first; the combiner result converts like `map`'s.
    pub fn combine<B, F, R>(self, other: Optional<B>, combiner: F) -> Optional<R::Value>
    where
        F: FnOnce(T, B) -> R,
        R: IntoOptional,
    {
        self.map(|a| other.map(|b| combiner(a, b)))
    }

    /// Stored value, or the result of `fallback` when absent
    pub fn fallback<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Optional::Some(value) => value,
            Optional::None => fallback(),
        }
    }

    /// Keep a present value only if `predicate` holds for it
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.map(|value| {
            if predicate(&value) {
                Optional::Some(value)
            } else {
                Optional::None
            }
        })
    }

    /// `Ok` for a present value, `Err(error())` otherwise
    pub fn to_outcome<E, F>(self, error: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Optional::Some(value) => Outcome::Ok(value),
            Optional::None => Outcome::Err(error()),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::None
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Optional::Some(value),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        match value {
            Optional::Some(value) => Some(value),
            Optional::None => None,
        }
    }
}

impl<T> Tagged for Optional<T> {
    const NAME: &'static str = "Optional";
    const CASES: &'static [(&'static str, usize)] = &[("Some", 1), ("None", 0)];

    fn kind(&self) -> &'static str {
        match self {
            Optional::Some(_) => "Some",
            Optional::None => "None",
        }
    }
}

/// Payload types can never lower to a `Some(null)` variant
impl<T: Payload + Into<Value>> From<Optional<T>> for Variant {
    fn from(value: Optional<T>) -> Self {
        let kind = value.kind();
        match value {
            Optional::Some(v) => Variant::from_parts(kind, vec![v.into()]),
            Optional::None => Variant::from_parts(kind, Vec::new()),
        }
    }
}

impl<T: Payload + Into<Value>> From<Optional<T>> for Value {
    fn from(value: Optional<T>) -> Self {
        Value::Variant(value.into())
    }
}

/// Lowering of a dynamic `Optional`; `Some(Value::Null)` fails with `NullConstruction`
impl TryFrom<Optional<Value>> for Variant {
    type Error = VariantError;

    fn try_from(value: Optional<Value>) -> VariantResult<Self> {
        let kind = value.kind();
        match value {
            Optional::Some(v) if v.is_null() => Err(VariantError::NullConstruction { kind }),
            Optional::Some(v) => Ok(Variant::from_parts(kind, vec![v])),
            Optional::None => Ok(Variant::from_parts(kind, Vec::new())),
        }
    }
}

impl TryFrom<&Variant> for Optional<Value> {
    type Error = VariantError;

    fn try_from(variant: &Variant) -> VariantResult<Self> {
        Schema::of::<Self>().validate(variant)?;
        Matcher::new()
            .on("Some", |values: &[Value]| Optional::some(values[0].clone()))
            .on("None", |_| Ok(Optional::None))
            .dispatch_variant(variant)?
    }
}

/// Lift `A -> B` into `Optional<A> -> Optional<B>`
pub fn optional_mapper<A, F, R>(mapper: F) -> impl Fn(Optional<A>) -> Optional<R::Value>
where
    F: Fn(A) -> R,
    R: IntoOptional,
{
    move |value: Optional<A>| value.map(&mapper)
}

/// Lift `(A, B) -> C` into `(Optional<A>, Optional<B>) -> Optional<C>`
pub fn optional_combiner<A, B, F, R>(
    combiner: F,
) -> impl Fn(Optional<A>, Optional<B>) -> Optional<R::Value>
where
    F: Fn(A, B) -> R,
    R: IntoOptional,
{
    move |a: Optional<A>, b: Optional<B>| a.combine(b, &combiner)
}
