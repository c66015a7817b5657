//! Shared helpers for dtype checks and token recognition.

use polars::prelude::*;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType carries a calendar date.
#[inline]
pub fn is_date_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::Date | DataType::Datetime(_, _))
}

// =============================================================================
// Boolean Tokens
// =============================================================================

/// Text accepted as a truthy boolean token.
pub const BOOLEAN_TRUE_TOKENS: [&str; 3] = ["true", "yes", "1"];

/// Text accepted as a falsy boolean token.
pub const BOOLEAN_FALSE_TOKENS: [&str; 3] = ["false", "no", "0"];

/// The four encodings a well-formed boolean cell may use.
pub const CANONICAL_BOOLEAN_TOKENS: [&str; 4] = ["true", "false", "1", "0"];

fn matches_token(s: &str, tokens: &[&str]) -> bool {
    let trimmed = s.trim();
    tokens.iter().any(|t| t.eq_ignore_ascii_case(trimmed))
}

/// Check if a string is a truthy boolean token (case-insensitive).
pub fn is_boolean_true(s: &str) -> bool {
    matches_token(s, &BOOLEAN_TRUE_TOKENS)
}

/// Check if a string is a falsy boolean token (case-insensitive).
pub fn is_boolean_false(s: &str) -> bool {
    matches_token(s, &BOOLEAN_FALSE_TOKENS)
}

/// Check if a string is recognized as any boolean token.
pub fn is_boolean_token(s: &str) -> bool {
    is_boolean_true(s) || is_boolean_false(s)
}

/// Check if a string is one of the canonical boolean encodings.
pub fn is_canonical_boolean(s: &str) -> bool {
    matches_token(s, &CANONICAL_BOOLEAN_TOKENS)
}

// =============================================================================
// Tests
// =============================================================================
