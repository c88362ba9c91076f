//! # Scan Session
//!
//! The session state machine: permission bootstrap, the armed gate, and
//! the deduplicated tag set.
//!
//! ## Intake Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    handle_decode(symbology, payload)                    │
//! │                                                                         │
//! │  permission != Granted ──────────────────────────► Ignored  (no-op)    │
//! │       │ granted                                                         │
//! │       ▼                                                                 │
//! │  not armed ──────────────────────────────────────► Ignored  (no-op)    │
//! │       │ armed                                                           │
//! │       ▼                                                                 │
//! │  payload invalid ────────────────────────────────► Err (stays armed)   │
//! │       │ valid                                                           │
//! │       ▼                                                                 │
//! │  symbology != Code128 ──────► disarm ────────────► UnsupportedSymbology│
//! │       │ accepted                                                        │
//! │       ▼                                                                 │
//! │  already in set ────────────► disarm ────────────► Duplicate           │
//! │       │ new                                                             │
//! │       ▼                                                                 │
//! │  insert ────────────────────► disarm ────────────► Added               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Model
//! The armed flag is the logical mutual-exclusion gate: every processed
//! decode disarms the session, so at most one event mutates state between
//! explicit re-arms. The app layer additionally wraps the session in a
//! mutex because Tauri commands may run concurrently, but the single-writer
//! behavior the user observes comes from this flag.
//!
//! ## Invariants
//! - The tag set never contains duplicates
//! - The tag set only grows (insert) or is fully cleared (reset); no
//!   operation removes a single element
//! - Permission transitions exactly once: {Unknown} → {Granted | Denied}

use std::collections::BTreeSet;

use crate::error::{CoreError, CoreResult};
use crate::types::{PermissionStatus, ScanOutcome, Symbology};
use crate::validation::validate_tag;
use crate::ACCEPTED_SYMBOLOGY;

/// In-memory scan session.
///
/// Exclusively owns the tag set and the armed flag for the process
/// lifetime. The persistence layer holds the durable backing copy; nothing
/// else may mutate the set.
#[derive(Debug, Clone)]
pub struct ScanSession {
    /// Camera permission, resolved once at startup.
    permission: PermissionStatus,

    /// Whether the next decode event will be processed.
    armed: bool,

    /// Accumulated tags, unique by value. `BTreeSet` gives the
    /// insertion-independent (lexicographic) order the list and the export
    /// both render in.
    tags: BTreeSet<String>,
}

impl ScanSession {
    /// Creates an empty session: armed, permission unresolved.
    pub fn new() -> Self {
        ScanSession {
            permission: PermissionStatus::Unknown,
            armed: true,
            tags: BTreeSet::new(),
        }
    }

    /// Creates a session seeded with tags restored from storage.
    ///
    /// Startup path: the persisted set is loaded once and handed here;
    /// afterwards storage is write-only.
    pub fn restore(tags: BTreeSet<String>) -> Self {
        ScanSession {
            permission: PermissionStatus::Unknown,
            armed: true,
            tags,
        }
    }

    // =========================================================================
    // Permission bootstrap
    // =========================================================================

    /// Records the camera permission outcome reported by the platform.
    ///
    /// One-shot: the first `Granted`/`Denied` report wins. Re-reporting the
    /// same status is a no-op; a conflicting report is an error, and
    /// `Unknown` is not a valid resolution.
    pub fn resolve_permission(&mut self, status: PermissionStatus) -> CoreResult<()> {
        if status == PermissionStatus::Unknown {
            return Err(CoreError::InvalidPermissionReport);
        }

        match self.permission {
            PermissionStatus::Unknown => {
                self.permission = status;
                Ok(())
            }
            current if current == status => Ok(()),
            current => Err(CoreError::PermissionAlreadyResolved { current }),
        }
    }

    // =========================================================================
    // Intake
    // =========================================================================

    /// Processes one decode event from the camera.
    ///
    /// See the module-level flow diagram. Every processed event (added or
    /// rejected) disarms the session; the user re-arms explicitly via
    /// [`rearm`](Self::rearm). Validation failures leave the armed state
    /// untouched so the next (valid) decode is still processed.
    ///
    /// The caller is responsible for mirroring an `Added` result to durable
    /// storage; this method never performs I/O.
    pub fn handle_decode(&mut self, symbology: Symbology, payload: &str) -> CoreResult<ScanOutcome> {
        if self.permission != PermissionStatus::Granted {
            return Ok(ScanOutcome::Ignored);
        }

        if !self.armed {
            return Ok(ScanOutcome::Ignored);
        }

        validate_tag(payload)?;

        if symbology != ACCEPTED_SYMBOLOGY {
            self.armed = false;
            return Ok(ScanOutcome::UnsupportedSymbology);
        }

        if self.tags.contains(payload) {
            self.armed = false;
            return Ok(ScanOutcome::Duplicate);
        }

        self.tags.insert(payload.to_string());
        self.armed = false;
        Ok(ScanOutcome::Added)
    }

    /// Re-arms the session so the next decode event is processed.
    ///
    /// Issued by explicit user action; idempotent if already armed.
    pub fn rearm(&mut self) {
        self.armed = true;
    }

    /// Clears the tag set in memory.
    ///
    /// Does not touch the armed flag or storage; the caller mirrors the
    /// cleared set through the same write path as insert.
    pub fn reset(&mut self) {
        self.tags.clear();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Current permission status.
    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }

    /// Whether the next decode event will be processed.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Tags in display order (lexicographic).
    pub fn tags(&self) -> Vec<String> {
        self.tags.iter().cloned().collect()
    }

    /// Borrow of the underlying set, for persistence and export.
    pub fn tag_set(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Whether a tag is already present.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Number of accumulated tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn granted_session() -> ScanSession {
        let mut session = ScanSession::new();
        session.resolve_permission(PermissionStatus::Granted).unwrap();
        session
    }

    #[test]
    fn add_then_duplicate_scenario() {
        let mut session = granted_session();

        // Empty set → first decode is added and disarms
        let outcome = session.handle_decode(Symbology::Code128, "ABC123").unwrap();
        assert_eq!(outcome, ScanOutcome::Added);
        assert_eq!(session.tags(), vec!["ABC123".to_string()]);
        assert!(!session.is_armed());

        // Re-arm, scan the same tag → duplicate, set unchanged, disarmed again
        session.rearm();
        assert!(session.is_armed());
        let outcome = session.handle_decode(Symbology::Code128, "ABC123").unwrap();
        assert_eq!(outcome, ScanOutcome::Duplicate);
        assert_eq!(session.len(), 1);
        assert!(!session.is_armed());
    }

    #[test]
    fn unsupported_symbology_rejects_without_mutation() {
        let mut session = granted_session();

        let outcome = session.handle_decode(Symbology::QrCode, "XYZ").unwrap();
        assert_eq!(outcome, ScanOutcome::UnsupportedSymbology);
        assert!(session.is_empty());
        assert!(!session.is_armed());
    }

    #[test]
    fn disarmed_session_ignores_decodes() {
        let mut session = granted_session();
        session.handle_decode(Symbology::Code128, "A").unwrap();
        assert!(!session.is_armed());

        // Any number of decode events while disarmed mutate nothing
        for payload in ["B", "C", "D"] {
            let outcome = session.handle_decode(Symbology::Code128, payload).unwrap();
            assert_eq!(outcome, ScanOutcome::Ignored);
        }
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn unresolved_or_denied_permission_ignores_decodes() {
        let mut session = ScanSession::new();
        let outcome = session.handle_decode(Symbology::Code128, "A").unwrap();
        assert_eq!(outcome, ScanOutcome::Ignored);
        assert!(session.is_empty());

        session.resolve_permission(PermissionStatus::Denied).unwrap();
        let outcome = session.handle_decode(Symbology::Code128, "A").unwrap();
        assert_eq!(outcome, ScanOutcome::Ignored);
        assert!(session.is_empty());
    }

    #[test]
    fn permission_transition_is_one_shot() {
        let mut session = ScanSession::new();
        session.resolve_permission(PermissionStatus::Granted).unwrap();

        // Same status again: no-op
        assert!(session.resolve_permission(PermissionStatus::Granted).is_ok());

        // Conflicting status: rejected, state unchanged
        let err = session
            .resolve_permission(PermissionStatus::Denied)
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::PermissionAlreadyResolved {
                current: PermissionStatus::Granted
            }
        ));
        assert_eq!(session.permission(), PermissionStatus::Granted);
    }

    #[test]
    fn unknown_is_not_a_valid_permission_report() {
        let mut session = ScanSession::new();
        assert!(matches!(
            session.resolve_permission(PermissionStatus::Unknown),
            Err(CoreError::InvalidPermissionReport)
        ));
    }

    #[test]
    fn invalid_payload_leaves_armed_state_untouched() {
        let mut session = granted_session();
        assert!(session.handle_decode(Symbology::Code128, "").is_err());
        assert!(session.is_armed());
        assert!(session.is_empty());
    }

    #[test]
    fn reset_clears_tags_only() {
        let mut session = granted_session();
        session.handle_decode(Symbology::Code128, "A").unwrap();
        session.rearm();
        session.handle_decode(Symbology::Code128, "B").unwrap();
        assert_eq!(session.len(), 2);

        session.reset();
        assert!(session.is_empty());
        // Armed flag is not reset's business
        assert!(!session.is_armed());
    }

    #[test]
    fn tags_render_in_insertion_independent_order() {
        let mut session = granted_session();
        for payload in ["zulu", "alpha", "mike"] {
            session.handle_decode(Symbology::Code128, payload).unwrap();
            session.rearm();
        }
        assert_eq!(session.tags(), vec!["alpha", "mike", "zulu"]);
    }

    #[test]
    fn restore_seeds_the_set() {
        let tags: BTreeSet<String> = ["A".to_string(), "B".to_string()].into();
        let mut session = ScanSession::restore(tags);
        assert_eq!(session.len(), 2);
        assert!(session.is_armed());
        assert_eq!(session.permission(), PermissionStatus::Unknown);

        // Restored tags dedup against new scans
        session.resolve_permission(PermissionStatus::Granted).unwrap();
        let outcome = session.handle_decode(Symbology::Code128, "A").unwrap();
        assert_eq!(outcome, ScanOutcome::Duplicate);
    }
}
