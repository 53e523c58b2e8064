//! Paired Optionals
//!
//! `OptionalPair<A, B>` records which of two independent slots is populated.
//! Its case set mirrors the inputs exactly: there is no `Both` with a hole.

use crate::error::{VariantError, VariantResult};
use crate::optional::{IntoOptional, Optional};
use crate::payload::Payload;
use crate::runtime::matcher::Matcher;
use crate::runtime::schema::Schema;
use crate::runtime::value::Value;
use crate::runtime::variant::{Tagged, Variant};

/// Which of two optional slots carry a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalPair<A, B> {
    First(A),
    Second(B),
    Both(A, B),
    Neither,
}

impl<A, B> OptionalPair<A, B> {
    /// The shared empty pair
    pub const NEITHER: Self = OptionalPair::Neither;

    /// `First` for a present value, `Neither` otherwise
    pub fn from_first(first: Optional<A>) -> Self {
        match first {
            Optional::Some(a) => OptionalPair::First(a),
            Optional::None => OptionalPair::Neither,
        }
    }

    /// `Second` for a present value, `Neither` otherwise
    pub fn from_second(second: Optional<B>) -> Self {
        match second {
            Optional::Some(b) => OptionalPair::Second(b),
            Optional::None => OptionalPair::Neither,
        }
    }

    /// Collapse two optionals into the case naming exactly the present ones
    pub fn from_both(first: Optional<A>, second: Optional<B>) -> Self {
        match (first, second) {
            (Optional::Some(a), Optional::Some(b)) => OptionalPair::Both(a, b),
            (Optional::Some(a), Optional::None) => OptionalPair::First(a),
            (Optional::None, Optional::Some(b)) => OptionalPair::Second(b),
            (Optional::None, Optional::None) => OptionalPair::Neither,
        }
    }

    /// The first slot, present for `First` and `Both`
    pub fn first(self) -> Optional<A> {
        match self {
            OptionalPair::First(a) | OptionalPair::Both(a, _) => Optional::Some(a),
            _ => Optional::None,
        }
    }

    /// The second slot, present for `Second` and `Both`
    pub fn second(self) -> Optional<B> {
        match self {
            OptionalPair::Second(b) | OptionalPair::Both(_, b) => Optional::Some(b),
            _ => Optional::None,
        }
    }

    /// Both slots, present only for `Both`
    pub fn both(self) -> Optional<(A, B)> {
        match self {
            OptionalPair::Both(a, b) => Optional::Some((a, b)),
            _ => Optional::None,
        }
    }

    /// Combine both slots; `combine` runs only for `Both`
    pub fn combine_both<F, R>(self, combine: F) -> Optional<R::Value>
    where
        F: FnOnce(A, B) -> R,
        R: IntoOptional,
    {
        match self {
            OptionalPair::Both(a, b) => combine(a, b).into_optional(),
            _ => Optional::None,
        }
    }

    pub fn as_ref(&self) -> OptionalPair<&A, &B> {
        match self {
            OptionalPair::First(a) => OptionalPair::First(a),
            OptionalPair::Second(b) => OptionalPair::Second(b),
            OptionalPair::Both(a, b) => OptionalPair::Both(a, b),
            OptionalPair::Neither => OptionalPair::Neither,
        }
    }
}

impl<A> OptionalPair<A, A> {
    /// Present slots in order: first, then second
    pub fn into_vec(self) -> Vec<A> {
        match self {
            OptionalPair::First(a) | OptionalPair::Second(a) => vec![a],
            OptionalPair::Both(a, b) => vec![a, b],
            OptionalPair::Neither => Vec::new(),
        }
    }
}

/// Convert two possibly null values, then collapse them with `from_both`
pub fn to_optional_pair<X, Y>(first: X, second: Y) -> OptionalPair<X::Value, Y::Value>
where
    X: IntoOptional,
    Y: IntoOptional,
{
    OptionalPair::from_both(first.into_optional(), second.into_optional())
}

impl<A, B> Tagged for OptionalPair<A, B> {
    const NAME: &'static str = "OptionalPair";
    const CASES: &'static [(&'static str, usize)] =
        &[("First", 1), ("Second", 1), ("Both", 2), ("Neither", 0)];

    fn kind(&self) -> &'static str {
        match self {
            OptionalPair::First(_) => "First",
            OptionalPair::Second(_) => "Second",
            OptionalPair::Both(..) => "Both",
            OptionalPair::Neither => "Neither",
        }
    }
}

impl<A, B> OptionalPair<A, B>
where
    A: Into<Value>,
    B: Into<Value>,
{
    fn into_values(self) -> Vec<Value> {
        match self {
            OptionalPair::First(a) => vec![a.into()],
            OptionalPair::Second(b) => vec![b.into()],
            OptionalPair::Both(a, b) => vec![a.into(), b.into()],
            OptionalPair::Neither => Vec::new(),
        }
    }
}

impl<A, B> From<OptionalPair<A, B>> for Variant
where
    A: Payload + Into<Value>,
    B: Payload + Into<Value>,
{
    fn from(pair: OptionalPair<A, B>) -> Self {
        let kind = pair.kind();
        Variant::from_parts(kind, pair.into_values())
    }
}

impl<A, B> From<OptionalPair<A, B>> for Value
where
    A: Payload + Into<Value>,
    B: Payload + Into<Value>,
{
    fn from(pair: OptionalPair<A, B>) -> Self {
        Value::Variant(pair.into())
    }
}

/// Lowering of a dynamic pair; a null slot fails with `NullConstruction`
impl TryFrom<OptionalPair<Value, Value>> for Variant {
    type Error = VariantError;

    fn try_from(pair: OptionalPair<Value, Value>) -> VariantResult<Self> {
        let kind = pair.kind();
        let values = pair.into_values();
        if values.iter().any(Value::is_null) {
            return Err(VariantError::NullConstruction { kind });
        }
        Ok(Variant::from_parts(kind, values))
    }
}

fn present(kind: &'static str, value: &Value) -> VariantResult<Value> {
    if value.is_null() {
        return Err(VariantError::NullConstruction { kind });
    }
    Ok(value.clone())
}

impl TryFrom<&Variant> for OptionalPair<Value, Value> {
    type Error = VariantError;

    fn try_from(variant: &Variant) -> VariantResult<Self> {
        Schema::of::<Self>().validate(variant)?;
        Matcher::new()
            .on("First", |values: &[Value]| -> VariantResult<Self> {
                Ok(OptionalPair::First(present("First", &values[0])?))
            })
            .on("Second", |values: &[Value]| -> VariantResult<Self> {
                Ok(OptionalPair::Second(present("Second", &values[0])?))
            })
            .on("Both", |values: &[Value]| -> VariantResult<Self> {
                Ok(OptionalPair::Both(
                    present("Both", &values[0])?,
                    present("Both", &values[1])?,
                ))
            })
            .on("Neither", |_| Ok(OptionalPair::Neither))
            .dispatch_variant(variant)?
    }
}
