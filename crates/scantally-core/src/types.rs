//! # Domain Types
//!
//! Core domain types used throughout ScanTally.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌─────────────────────┐  │
//! │  │   Symbology     │   │ PermissionStatus │   │    ScanOutcome      │  │
//! │  │  ─────────────  │   │  ──────────────  │   │  ─────────────────  │  │
//! │  │  Code128 ◄ only │   │  Unknown         │   │  Added              │  │
//! │  │  Code39   this  │   │  Granted         │   │  Duplicate          │  │
//! │  │  Ean13    one   │   │  Denied          │   │  UnsupportedSymb.   │  │
//! │  │  QrCode   is    │   │                  │   │  Ignored            │  │
//! │  │  ...    accepted│   │  (one-shot)      │   │                     │  │
//! │  └─────────────────┘   └──────────────────┘   └─────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All three enums cross the IPC boundary, so they derive `Serialize`,
//! `Deserialize`, and `TS` for generated TypeScript bindings.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Symbology
// =============================================================================

/// Barcode format tag reported by the decoder alongside each decode event.
///
/// The wire names (`code_128`, `ean_13`, ...) follow the format identifiers
/// emitted by common webview barcode decoders. Formats the decoder may
/// report but this list does not name collapse into [`Symbology::Other`];
/// they are rejected at intake either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Symbology {
    /// Code 128 - the format asset tags are printed in. The only accepted one.
    // Digit-bearing names get explicit renames: serde's snake_case does not
    // separate trailing digits ("Code128" would become "code128")
    #[serde(rename = "code_128")]
    Code128,
    #[serde(rename = "code_39")]
    Code39,
    #[serde(rename = "ean_8")]
    Ean8,
    #[serde(rename = "ean_13")]
    Ean13,
    UpcA,
    UpcE,
    QrCode,
    DataMatrix,
    #[serde(rename = "pdf_417")]
    Pdf417,
    /// Any format the decoder reports that is not named above.
    #[serde(other)]
    Other,
}

// =============================================================================
// Permission Status
// =============================================================================

/// Camera permission state for the session.
///
/// ## One-Shot State Machine
/// ```text
/// {Unknown} ──► {Granted | Denied}
/// ```
/// The webview resolves the platform camera prompt exactly once at startup
/// and reports the outcome. There are no further transitions within a
/// session; a denied session never presents the scanner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    /// Platform prompt has not resolved yet.
    #[default]
    Unknown,

    /// Camera access granted; decode events may be processed.
    Granted,

    /// Camera access denied; terminal for the session.
    Denied,
}

// =============================================================================
// Scan Outcome
// =============================================================================

/// Result of processing one decode event.
///
/// The frontend renders its notices from this value:
/// - `Duplicate` → "already scanned"
/// - `UnsupportedSymbology` → "unsupported format, try again"
///
/// Both rejections disarm the session just like a successful add; the user
/// re-arms explicitly to scan again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum ScanOutcome {
    /// Payload was new; it is now in the set and queued for persistence.
    Added,

    /// Payload already present; set unchanged.
    Duplicate,

    /// Decode came from a format other than the accepted one; set unchanged.
    UnsupportedSymbology,

    /// Session was disarmed (or permission not granted); event dropped.
    Ignored,
}

impl ScanOutcome {
    /// Whether this outcome leaves the session disarmed.
    ///
    /// `Ignored` is the only outcome that does not: it means the gate was
    /// already closed and nothing was processed.
    pub fn disarms(&self) -> bool {
        !matches!(self, ScanOutcome::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbology_wire_names_round_trip() {
        let json = serde_json::to_string(&Symbology::Code128).unwrap();
        assert_eq!(json, "\"code_128\"");
        let back: Symbology = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Symbology::Code128);
    }

    #[test]
    fn unknown_symbology_tag_maps_to_other() {
        let parsed: Symbology = serde_json::from_str("\"aztec\"").unwrap();
        assert_eq!(parsed, Symbology::Other);
    }

    #[test]
    fn permission_defaults_to_unknown() {
        assert_eq!(PermissionStatus::default(), PermissionStatus::Unknown);
    }

    #[test]
    fn ignored_is_the_only_non_disarming_outcome() {
        assert!(ScanOutcome::Added.disarms());
        assert!(ScanOutcome::Duplicate.disarms());
        assert!(ScanOutcome::UnsupportedSymbology.disarms());
        assert!(!ScanOutcome::Ignored.disarms());
    }
}
