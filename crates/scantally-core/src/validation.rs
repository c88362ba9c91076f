//! # Validation Module
//!
//! Payload validation for scan intake.
//!
//! Tags are opaque identifiers: equality is exact string equality and the
//! content is never interpreted. Validation therefore checks only two
//! things - the payload exists, and it fits the store.
//!
//! ## Usage
//! ```rust
//! use scantally_core::validation::validate_tag;
//!
//! assert!(validate_tag("ABC123").is_ok());
//! assert!(validate_tag("").is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_TAG_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a decoded tag payload.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most [`MAX_TAG_LENGTH`] bytes
///
/// Whitespace-only payloads are accepted: content is opaque and no
/// trimming happens anywhere, so `" A"` and `"A"` are distinct tags.
pub fn validate_tag(payload: &str) -> ValidationResult<()> {
    if payload.is_empty() {
        return Err(ValidationError::Required {
            field: "payload".to_string(),
        });
    }

    if payload.len() > MAX_TAG_LENGTH {
        return Err(ValidationError::TooLong {
            field: "payload".to_string(),
            max: MAX_TAG_LENGTH,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_tags() {
        assert!(validate_tag("ABC123").is_ok());
        assert!(validate_tag("srv-042/rack#7").is_ok());
    }

    #[test]
    fn accepts_unicode_and_whitespace_content() {
        assert!(validate_tag("Zürich-Lager-α").is_ok());
        // No trimming: whitespace is valid opaque content
        assert!(validate_tag("  ").is_ok());
    }

    #[test]
    fn rejects_empty_payload() {
        assert!(matches!(
            validate_tag(""),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn rejects_oversized_payload() {
        let oversized = "x".repeat(MAX_TAG_LENGTH + 1);
        assert!(matches!(
            validate_tag(&oversized),
            Err(ValidationError::TooLong { .. })
        ));
        // Exactly at the cap is fine
        assert!(validate_tag(&"x".repeat(MAX_TAG_LENGTH)).is_ok());
    }
}
