//! Tagged Value Representation
//!
//! A `Variant` is the uniform shape of every sum-type value: a kind label
//! plus the fixed-arity payload declared for that kind.

use std::fmt;
use std::sync::Arc;

use crate::error::{VariantError, VariantResult};
use super::value::Value;

/// Reserved label of the fallback branch; never a legal kind.
pub const CATCH_ALL: &str = "_";

/// Immutable tagged value
///
/// Both the kind and the payload are frozen at construction. Clones share the
/// same payload storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    kind: Arc<str>,
    values: Arc<[Value]>,
}

impl Variant {
    /// Create a variant of `kind` carrying `values` in order.
    ///
    /// Fails with `InvalidKind` when `kind` is the reserved catch-all label.
    pub fn new(kind: impl AsRef<str>, values: Vec<Value>) -> VariantResult<Self> {
        let kind = kind.as_ref();
        if kind == CATCH_ALL {
            return Err(VariantError::InvalidKind(kind.to_string()));
        }
        Ok(Self::from_parts(kind, values))
    }

    /// Create a variant with no payload
    pub fn unit(kind: impl AsRef<str>) -> VariantResult<Self> {
        Self::new(kind, Vec::new())
    }

    /// Kinds of the built-in sum types are known to be legal
    pub(crate) fn from_parts(kind: &str, values: Vec<Value>) -> Self {
        Variant {
            kind: Arc::from(kind),
            values: Arc::from(values),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn value(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn arity(&self) -> usize {
        self.values.len()
    }

    pub fn is(&self, kind: &str) -> bool {
        &*self.kind == kind
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.values.is_empty() {
            return Ok(());
        }
        write!(f, "(")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

/// Free-function form of [`Variant::new`].
pub fn variant(kind: impl AsRef<str>, values: Vec<Value>) -> VariantResult<Variant> {
    Variant::new(kind, values)
}

/// Build a variant from a kind and any number of payload expressions.
///
/// Each payload is converted with `Value::from`.
///
/// ```
/// use varia_core::{variant, Value};
///
/// let b = variant!("B", 5, false).unwrap();
/// assert_eq!(b.values(), &[Value::Number(5.0), Value::Bool(false)]);
/// ```
#[macro_export]
macro_rules! variant {
    ($kind:expr $(, $value:expr)* $(,)?) => {
        $crate::runtime::variant::Variant::new(
            $kind,
            ::std::vec![$($crate::runtime::value::Value::from($value)),*],
        )
    };
}

/// A closed, statically typed sum type with a known case set.
pub trait Tagged {
    /// Name of the sum type
    const NAME: &'static str;

    /// Every case as `(kind, arity)`, in declaration order
    const CASES: &'static [(&'static str, usize)];

    /// Kind label of this value
    fn kind(&self) -> &'static str;
}
