//! # Error Types
//!
//! Domain-specific error types for scantally-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  scantally-core errors (this file)                                      │
//! │  ├── CoreError        - Session state machine violations                │
//! │  └── ValidationError  - Payload validation failures                     │
//! │                                                                         │
//! │  scantally-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                     │
//! │                                                                         │
//! │  Tauri API errors (in app)                                              │
//! │  └── ApiError         - What the frontend sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rejected scans (duplicate, unsupported format) are NOT errors - they are
//! ordinary [`ScanOutcome`](crate::ScanOutcome) values, because they are
//! expected per-attempt results the UI renders as notices.

use thiserror::Error;

use crate::types::PermissionStatus;

// =============================================================================
// Core Error
// =============================================================================

/// Core session errors.
///
/// These represent state machine violations or invalid input, not ordinary
/// scan rejections.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The one-shot permission transition was attempted a second time with
    /// a conflicting status.
    ///
    /// ## When This Occurs
    /// - The webview reports `granted` after the session already recorded
    ///   `denied` (or vice versa)
    ///
    /// Re-reporting the *same* status is a no-op, not an error.
    #[error("Camera permission already resolved to {current:?}")]
    PermissionAlreadyResolved { current: PermissionStatus },

    /// A permission report carried `Unknown`, which is not a resolution.
    #[error("Permission report must be granted or denied")]
    InvalidPermissionReport,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Payload validation errors.
///
/// Tags are opaque, so validation is deliberately thin: presence and a
/// length cap, nothing about content.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} bytes")]
    TooLong { field: String, max: usize },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::PermissionAlreadyResolved {
            current: PermissionStatus::Denied,
        };
        assert_eq!(
            err.to_string(),
            "Camera permission already resolved to Denied"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "payload".to_string(),
        };
        assert_eq!(err.to_string(), "payload is required");

        let err = ValidationError::TooLong {
            field: "payload".to_string(),
            max: 512,
        };
        assert_eq!(err.to_string(), "payload must be at most 512 bytes");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "payload".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
