//! # Session State
//!
//! Manages the scan session for the Tauri app.
//!
//! ## Thread Safety
//! The session is wrapped in `Arc<Mutex<T>>` because Tauri commands can run
//! concurrently and only one command may mutate the session at a time. The
//! armed flag inside [`ScanSession`] remains the logical gate: even with
//! the mutex, at most one decode event is processed between re-arms.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session State Operations                             │
//! │                                                                         │
//! │  Frontend Action          Tauri Command           Session Change        │
//! │  ───────────────          ─────────────           ──────────────        │
//! │                                                                         │
//! │  Decoder fires ──────────► handle_decode() ─────► intake (see core)     │
//! │                                                                         │
//! │  "Scan another" ─────────► rearm() ─────────────► armed = true          │
//! │                                                                         │
//! │  "Reset scanned" ────────► reset_scans() ───────► tags.clear()          │
//! │                                                                         │
//! │  View list ──────────────► get_scan_list() ─────► (read only)           │
//! │                                                                         │
//! │  Permission prompt ──────► report_permission() ─► one-shot transition   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use scantally_core::{PermissionStatus, ScanSession};

/// Tauri-managed session state.
///
/// ## Thread Safety
/// Uses `Arc<Mutex<ScanSession>>` because:
/// - `Arc`: Allows shared ownership across threads
/// - `Mutex`: Ensures only one thread modifies the session at a time
#[derive(Debug)]
pub struct SessionState {
    session: Arc<Mutex<ScanSession>>,
}

impl SessionState {
    /// Creates a new empty session state.
    pub fn new() -> Self {
        SessionState {
            session: Arc::new(Mutex::new(ScanSession::new())),
        }
    }

    /// Creates a session state seeded with tags restored from storage.
    pub fn restore(tags: BTreeSet<String>) -> Self {
        SessionState {
            session: Arc::new(Mutex::new(ScanSession::restore(tags))),
        }
    }

    /// Executes a function with read access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let snapshot = session_state.with_session(SessionSnapshot::from);
    /// ```
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ScanSession) -> R,
    {
        let session = self.session.lock().expect("Session mutex poisoned");
        f(&session)
    }

    /// Executes a function with write access to the session.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let outcome = session_state.with_session_mut(|s| s.handle_decode(symbology, &payload))?;
    /// ```
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ScanSession) -> R,
    {
        let mut session = self.session.lock().expect("Session mutex poisoned");
        f(&mut session)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

/// Session snapshot for API responses.
///
/// Everything the single screen renders: the permission state, whether the
/// scanner is armed, and the tag list in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub permission: PermissionStatus,
    pub armed: bool,
    pub tags: Vec<String>,
    pub count: usize,
}

impl From<&ScanSession> for SessionSnapshot {
    fn from(session: &ScanSession) -> Self {
        SessionSnapshot {
            permission: session.permission(),
            armed: session.is_armed(),
            tags: session.tags(),
            count: session.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scantally_core::{ScanOutcome, Symbology};

    #[test]
    fn snapshot_reflects_session() {
        let state = SessionState::restore(
            ["beta".to_string(), "alpha".to_string()].into(),
        );

        let snapshot = state.with_session(SessionSnapshot::from);
        assert_eq!(snapshot.tags, vec!["alpha", "beta"]);
        assert_eq!(snapshot.count, 2);
        assert!(snapshot.armed);
        assert_eq!(snapshot.permission, PermissionStatus::Unknown);
    }

    #[test]
    fn with_session_mut_drives_intake() {
        let state = SessionState::new();
        state.with_session_mut(|s| {
            s.resolve_permission(PermissionStatus::Granted).unwrap();
        });

        let outcome = state
            .with_session_mut(|s| s.handle_decode(Symbology::Code128, "ABC123"))
            .unwrap();
        assert_eq!(outcome, ScanOutcome::Added);

        let snapshot = state.with_session(SessionSnapshot::from);
        assert_eq!(snapshot.tags, vec!["ABC123"]);
        assert!(!snapshot.armed);
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let state = SessionState::new();
        let snapshot = state.with_session(SessionSnapshot::from);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["permission"], "unknown");
        assert_eq!(json["armed"], true);
        assert_eq!(json["count"], 0);
    }
}
