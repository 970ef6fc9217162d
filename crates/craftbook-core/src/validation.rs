//! Per-entry validation failures and the strictness policy.
//!
//! A validation failure never aborts a batch: the offending entry is skipped,
//! logged, and reported as a [`SkippedEntry`].

use crate::item::ResolveError;
use serde::{Deserialize, Serialize};

/// How strictly incomplete recipe definitions are treated.
///
/// `Lenient` accepts incomplete definitions: ingredient symbols that
/// resolve to nothing become empty slots, zero result amounts and zero
/// cooking times are registered as written. `Strict` rejects those entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    #[default]
    Strict,
    Lenient,
}

impl Strictness {
    pub fn is_strict(self) -> bool {
        self == Strictness::Strict
    }
}

/// Why a single recipe entry was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The entry's value is not a nested record.
    #[error("entry is not a record")]
    NotASection,

    /// The entry's name cannot become a recipe identifier.
    #[error("invalid recipe key '{key}': {detail}")]
    InvalidKey { key: String, detail: &'static str },

    /// The `type` field names a kind this category does not accept.
    #[error("unsupported recipe type '{kind}'")]
    UnsupportedKind { kind: String },

    /// A required field is absent.
    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    /// An item reference did not resolve.
    #[error("invalid {field} material: {source}")]
    UnresolvedItem {
        field: &'static str,
        source: ResolveError,
    },

    /// The result amount is negative or does not fit.
    #[error("invalid amount {value}")]
    InvalidQuantity { value: i64 },

    /// The result amount is zero (strict mode only).
    #[error("result amount must be positive")]
    ZeroQuantity,

    /// Experience is negative or not finite.
    #[error("invalid experience {value}")]
    InvalidExperience { value: f64 },

    /// Cooking time is negative, too large, or zero in strict mode.
    #[error("invalid cooking time {value}")]
    InvalidCookingTime { value: i64 },

    /// An ingredient key is not exactly one non-blank character.
    #[error("ingredient symbol '{symbol}' must be a single non-blank character")]
    InvalidSymbol { symbol: String },

    /// No alternative of an ingredient resolved (strict mode only).
    #[error("ingredient '{symbol}' has no resolvable alternatives")]
    EmptyChoice { symbol: String },

    /// The shape rows are missing, too many, too wide, or uneven.
    #[error("malformed shape: {detail}")]
    MalformedShape { detail: String },

    /// An ingredient symbol does not appear in the shape.
    #[error("ingredient symbol '{symbol}' does not appear in the shape")]
    UnknownSymbol { symbol: char },

    /// A shape symbol has no ingredient entry (strict mode only).
    #[error("shape symbol '{symbol}' has no ingredient entry")]
    MissingIngredient { symbol: char },

    /// A shapeless recipe has too few or too many ingredient groups.
    #[error("shapeless recipe needs 1 to 9 ingredients, found {count}")]
    IngredientCount { count: usize },
}

/// A config entry that did not become a registered recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    pub key: String,
    pub reason: ValidationError,
}

impl SkippedEntry {
    pub fn new(key: &str, reason: ValidationError) -> Self {
        Self {
            key: key.to_string(),
            reason,
        }
    }
}
