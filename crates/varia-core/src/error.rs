//! Varia Error Types
//!
//! Defines every misuse condition reported by the variant runtime.
//! Expected domain failures are modeled as `Outcome::Err` / `Optional::None`
//! values, never as a `VariantError`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariantError {
    // Construction errors
    #[error("variants cannot be constructed with a kind of {0:?}")]
    InvalidKind(String),
    #[error("{kind} variant cannot be constructed with a null-equivalent payload")]
    NullConstruction { kind: &'static str },

    // Dispatch errors
    #[error("expected a variant {{ kind, values }}, found {found}")]
    InvalidVariant { found: &'static str },
    #[error("unhandled variant {kind:?}")]
    UnhandledVariant { kind: String },

    // Schema errors
    #[error("kind {kind:?} is not a case of `{schema}`")]
    UnknownKind { schema: String, kind: String },
    #[error("kind {kind:?} is declared twice in `{schema}`")]
    DuplicateKind { schema: String, kind: String },
    #[error("kind {kind:?} expects {expected} values, found {found}")]
    ArityMismatch {
        kind: String,
        expected: usize,
        found: usize,
    },
    #[error("`{schema}` is not matched exhaustively, missing: {}", .missing.join(", "))]
    NonExhaustive { schema: String, missing: Vec<String> },

    // Limit errors
    #[error("`{schema}` exceeds the limit of {limit} cases")]
    TooManyCases { schema: String, limit: usize },
    #[error("kind {kind:?} declares {arity} values, the limit is {limit}")]
    ArityLimit {
        kind: String,
        arity: usize,
        limit: usize,
    },
}

pub type VariantResult<T> = std::result::Result<T, VariantError>;
