//! # API Error Type
//!
//! Unified error type for Tauri commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in ScanTally                              │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke('handle_decode')                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │                                                                  │  │
//! │  │  CoreError (state machine, validation) ──┐                       │  │
//! │  │  DbError (startup/load paths only) ──────┴──► ApiError ────────► │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  NOTE: duplicate and unsupported-format scans are NOT errors - they    │
//! │  arrive as ScanOutcome values. Background save failures never reach    │
//! │  this type either; they stop at the tracing sink.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tauri Error Serialization
//! Tauri requires errors to be serializable. We implement `Serialize`
//! and include both a machine-readable `code` and human-readable `message`.

use serde::Serialize;

use scantally_core::CoreError;
use scantally_db::DbError;

/// API error returned from Tauri commands.
///
/// ## Serialization
/// This is what the frontend receives when a command fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "payload is required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (empty or oversized payload)
    ValidationError,

    /// Permission bootstrap violated (conflicting or invalid report)
    PermissionError,

    /// Database operation failed (startup/load paths)
    DatabaseError,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a permission error.
    pub fn permission(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::PermissionError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PermissionAlreadyResolved { .. } | CoreError::InvalidPermissionReport => {
                ApiError::permission(err.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::ConnectionFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(_) => {
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::Serialization(e) => {
                tracing::error!("Scan set serialization failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use scantally_core::{PermissionStatus, ValidationError};

    #[test]
    fn serializes_with_screaming_snake_code() {
        let err = ApiError::validation("payload is required");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "payload is required");
    }

    #[test]
    fn core_validation_maps_to_validation_code() {
        let core = CoreError::Validation(ValidationError::Required {
            field: "payload".to_string(),
        });
        let api: ApiError = core.into();
        assert_eq!(api.code, ErrorCode::ValidationError);
    }

    #[test]
    fn permission_conflict_maps_to_permission_code() {
        let core = CoreError::PermissionAlreadyResolved {
            current: PermissionStatus::Denied,
        };
        let api: ApiError = core.into();
        assert_eq!(api.code, ErrorCode::PermissionError);
    }

    #[test]
    fn db_errors_map_to_generic_database_messages() {
        let api: ApiError = DbError::QueryFailed("UNIQUE constraint failed".into()).into();
        assert_eq!(api.code, ErrorCode::DatabaseError);
        // Internals are logged, not leaked
        assert_eq!(api.message, "Database operation failed");
    }
}
