//! # scantally-core: Pure Scan Logic for ScanTally
//!
//! This crate is the **heart** of ScanTally. It contains the scan intake,
//! dedup, and export logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       ScanTally Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Camera/Decoder ──► Tag List ──► Share Sheet                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Tauri IPC                             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Tauri Commands                               │   │
//! │  │    handle_decode, rearm, reset_scans, export_scans, ...         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ scantally-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │  session  │  │  export   │  │ validation│   │   │
//! │  │   │ Symbology │  │ScanSession│  │export_text│  │   rules   │   │   │
//! │  │   │  Outcome  │  │  intake   │  │ ShareSink │  │  checks   │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CAMERA • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 scantally-db (Persistence Layer)                │   │
//! │  │             SQLite scan-set store, embedded migrations          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Symbology, PermissionStatus, ScanOutcome)
//! - [`session`] - The scan session state machine (intake, dedup, re-arm)
//! - [`export`] - Newline-delimited export and the share seam
//! - [`error`] - Domain error types
//! - [`validation`] - Payload validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Opaque Tags**: Tag content is never interpreted; equality is exact
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use scantally_core::{ScanOutcome, ScanSession, Symbology};
//!
//! let mut session = ScanSession::new();
//! session.resolve_permission(scantally_core::PermissionStatus::Granted).unwrap();
//!
//! // First decode of a tag is accepted and disarms the session
//! let outcome = session.handle_decode(Symbology::Code128, "ABC123").unwrap();
//! assert_eq!(outcome, ScanOutcome::Added);
//! assert!(!session.is_armed());
//!
//! // The user taps "scan another" to re-arm
//! session.rearm();
//! let outcome = session.handle_decode(Symbology::Code128, "ABC123").unwrap();
//! assert_eq!(outcome, ScanOutcome::Duplicate);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use scantally_core::ScanSession` instead of
// `use scantally_core::session::ScanSession`

pub use error::{CoreError, CoreResult, ValidationError};
pub use export::{export_text, ShareRequest, ShareSink};
pub use session::ScanSession;
pub use types::{PermissionStatus, ScanOutcome, Symbology};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Name of the durable record the scan set is stored under.
///
/// The app keeps exactly one set; the store is still keyed so tests can
/// hold independent sets side by side.
pub const SCAN_SET_KEY: &str = "scanned_tags";

/// The single barcode format accepted at intake.
///
/// Asset tags are printed as Code 128 labels. Every other symbology the
/// decoder reports is rejected with an "unsupported format" outcome.
pub const ACCEPTED_SYMBOLOGY: Symbology = Symbology::Code128;

/// Maximum accepted tag payload length in bytes.
///
/// Tags are opaque, so there is no format check, but a length cap keeps
/// decoder garbage (e.g. a misread QR payload) out of the store.
pub const MAX_TAG_LENGTH: usize = 512;
