// ABOUTME: Shared error types for domain model validation and parsing
// ABOUTME: CoreError covers invalid fields and malformed time-of-day strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitalis Health

//! # Core Error Types
//!
//! The calculators themselves never fail: missing input degrades to `None`
//! or a documented fallback value. `CoreError` exists for the boundary
//! where callers validate caller-supplied data before invoking them.

use thiserror::Error;

/// Errors raised while validating or parsing domain model fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A numeric field is outside its valid domain.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// A time-of-day string does not parse as 24-hour `HH:MM`.
    #[error("invalid time-of-day string: `{value}`")]
    InvalidTime {
        /// The string that failed to parse
        value: String,
    },
}
