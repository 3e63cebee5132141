//! # Error Types
//!
//! Domain-specific error types for tilequote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tilequote-core errors (this file)                                      │
//! │  ├── CoreError        - Document editing and serialization errors       │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  tilequote-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                     │
//! │                                                                         │
//! │  CLI errors (in app)                                                    │
//! │  └── CliError         - What the user sees on stderr                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → CliError → stderr        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not Errors
//! The calculation functions never fail. Missing numbers are zero, zero
//! denominators are floored, unknown tile presets fall back to the global
//! grout spec. Errors only exist at the editing and persistence boundaries.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while editing or (de)serializing a quote document.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A room index does not refer to a room in the document.
    ///
    /// ## When This Occurs
    /// - Removing a room that was already removed
    /// - A stale index held by a caller after the list shrank
    #[error("Room {index} does not exist (document has {len} rooms)")]
    RoomIndexOutOfRange { index: usize, len: usize },

    /// A stored document or snapshot could not be read or written.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Checked before persisting. The engine itself accepts anything.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBePositive { field: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Invalid format (e.g. a number that is not finite).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
