//! # Error Types
//!
//! Domain-specific error types for sales-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  sales-core errors (this file)                                         │
//! │  └── DataProcessingError                                               │
//! │      ├── EmptyInput          - no records at all                       │
//! │      ├── MissingColumn       - required field absent                   │
//! │      ├── NonNumericValue     - quantity/price not a number             │
//! │      ├── NegativeValue       - quantity/price below zero               │
//! │      └── UnexpectedFailure   - malformed shape, overflow, bad key      │
//! │                                                                         │
//! │  sales-report errors (app crate)                                       │
//! │  └── ReportError             - I/O, config, parse + wraps the above    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure keeps its own variant. Callers can branch on
//! [`DataProcessingError::kind`] instead of matching message text.

use std::fmt;

use thiserror::Error;

use crate::REQUIRED_FIELDS;

// =============================================================================
// Data Processing Error
// =============================================================================

/// Failure raised while validating or aggregating sales records.
///
/// The first failing check wins; no partial result is ever produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataProcessingError {
    /// The input sequence has zero records.
    #[error("Input data is empty")]
    EmptyInput,

    /// At least one record lacks one or more required fields.
    ///
    /// Holds the missing field names of the first offending record, in
    /// [`REQUIRED_FIELDS`] order.
    #[error(
        "Input data must contain columns: {:?} (missing: {})",
        REQUIRED_FIELDS,
        .0.join(", ")
    )]
    MissingColumn(Vec<String>),

    /// `quantity` or `price` is not a number.
    #[error("Quantity and price must be numeric: {field} in record {index} is not a number")]
    NonNumericValue { field: String, index: usize },

    /// `quantity` or `price` is below zero.
    #[error("Quantity and price cannot be negative: {field} in record {index} is negative")]
    NegativeValue { field: String, index: usize },

    /// Anything else that went wrong while building or transforming the input.
    ///
    /// ## When This Occurs
    /// - A record is not a mapping (e.g. a bare number in the list)
    /// - A product identifier is not a scalar (array, object, null)
    /// - Integer overflow while computing a line total or a sum
    #[error("An unexpected error occurred: {0}")]
    UnexpectedFailure(String),
}

impl DataProcessingError {
    /// Returns the discriminant without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DataProcessingError::EmptyInput => ErrorKind::EmptyInput,
            DataProcessingError::MissingColumn(_) => ErrorKind::MissingColumn,
            DataProcessingError::NonNumericValue { .. } => ErrorKind::NonNumericValue,
            DataProcessingError::NegativeValue { .. } => ErrorKind::NegativeValue,
            DataProcessingError::UnexpectedFailure(_) => ErrorKind::UnexpectedFailure,
        }
    }

    pub(crate) fn non_numeric(field: &str, index: usize) -> Self {
        DataProcessingError::NonNumericValue {
            field: field.to_string(),
            index,
        }
    }

    pub(crate) fn negative(field: &str, index: usize) -> Self {
        DataProcessingError::NegativeValue {
            field: field.to_string(),
            index,
        }
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// Payload-free tag for a [`DataProcessingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    MissingColumn,
    NonNumericValue,
    NegativeValue,
    UnexpectedFailure,
}

impl ErrorKind {
    /// Stable snake_case name, suitable for log fields.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "empty_input",
            ErrorKind::MissingColumn => "missing_column",
            ErrorKind::NonNumericValue => "non_numeric_value",
            ErrorKind::NegativeValue => "negative_value",
            ErrorKind::UnexpectedFailure => "unexpected_failure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DataProcessingError.
pub type DataResult<T> = Result<T, DataProcessingError>;

// =============================================================================
// Unit Tests
// =============================================================================
