//! # Scan Commands
//!
//! Tauri commands for the scan intake pipeline.
//!
//! ## Scan Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Scan Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌───────────┐     ┌──────────┐       │
//! │  │  Armed   │────►│ Decode   │────►│ Disarmed  │────►│  Armed   │       │
//! │  │          │     │ arrives  │     │ + notice  │     │  again   │       │
//! │  └──────────┘     └──────────┘     └───────────┘     └──────────┘       │
//! │                        │                 │                 ▲            │
//! │                  handle_decode      added / duplicate      │            │
//! │                        │            / unsupported        rearm          │
//! │                        ▼                                                │
//! │                  on Added: whole set written through                    │
//! │                  to storage (fire-and-forget)                           │
//! │                                                                         │
//! │                  reset_scans ──► tags cleared in memory AND             │
//! │                                  mirrored to storage                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tauri::State;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::state::{ConfigState, DbState, SessionSnapshot, SessionState};
use scantally_core::{ScanOutcome, Symbology};

/// Scan event response: what happened plus the state the screen renders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEventResponse {
    pub outcome: ScanOutcome,
    pub session: SessionSnapshot,
}

/// Issues a fire-and-forget write of the full set to storage.
///
/// Failure is logged and never surfaced: the in-memory set stays
/// authoritative for the session even if durable storage is stale.
fn persist_in_background(db: &DbState, key: &str, tags: BTreeSet<String>) {
    let repo = db.inner().scan_sets();
    let key = key.to_string();
    tauri::async_runtime::spawn(async move {
        if let Err(e) = repo.save(&key, &tags).await {
            error!(key = %key, error = %e, "Failed to persist scan set");
        }
    });
}

/// Gets the current session snapshot.
///
/// Drives the always-visible tag list and the armed indicator.
#[tauri::command]
pub fn get_scan_list(session: State<'_, SessionState>) -> SessionSnapshot {
    debug!("get_scan_list command");
    session.with_session(SessionSnapshot::from)
}

/// Processes one decode event from the camera.
///
/// ## Behavior
/// - Disarmed session (or unresolved/denied permission): `ignored`, no-op
/// - Unsupported format: `unsupportedSymbology`, disarms
/// - Known tag: `duplicate`, disarms, set unchanged
/// - New tag: `added`, disarms, and the full updated set is written to
///   storage in the background
///
/// The frontend renders the "already scanned" / "unsupported format, try
/// again" notices from the outcome; rejection is terminal per attempt and
/// recoverable via `rearm`.
///
/// ## Arguments
/// * `symbology` - Format tag reported by the decoder (e.g. `code_128`)
/// * `payload` - Decoded string; opaque, compared by exact equality
#[tauri::command]
pub fn handle_decode(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
    config: State<'_, ConfigState>,
    symbology: Symbology,
    payload: String,
) -> Result<ScanEventResponse, ApiError> {
    debug!(?symbology, payload = %payload, "handle_decode command");

    let (outcome, snapshot, tags) = session.with_session_mut(|s| {
        let outcome = s.handle_decode(symbology, &payload)?;
        // Clone the set inside the lock so the spawned write carries a
        // consistent snapshot of exactly this decode's result.
        let tags = (outcome == ScanOutcome::Added).then(|| s.tag_set().clone());
        Ok::<_, ApiError>((outcome, SessionSnapshot::from(&*s), tags))
    })?;

    if let Some(tags) = tags {
        persist_in_background(&db, &config.scan_set_key, tags);
    }

    Ok(ScanEventResponse { outcome, session: snapshot })
}

/// Re-arms the session so the next decode event is processed.
///
/// Issued by the "scan another" button; idempotent if already armed.
#[tauri::command]
pub fn rearm(session: State<'_, SessionState>) -> SessionSnapshot {
    debug!("rearm command");

    session.with_session_mut(|s| {
        s.rearm();
        SessionSnapshot::from(&*s)
    })
}

/// Clears the accumulated tag set.
///
/// The cleared state is mirrored to storage through the same
/// fire-and-forget path as inserts, so storage never holds stale tags
/// after a user reset.
#[tauri::command]
pub fn reset_scans(
    db: State<'_, DbState>,
    session: State<'_, SessionState>,
    config: State<'_, ConfigState>,
) -> SessionSnapshot {
    debug!("reset_scans command");

    let snapshot = session.with_session_mut(|s| {
        s.reset();
        SessionSnapshot::from(&*s)
    });

    persist_in_background(&db, &config.scan_set_key, BTreeSet::new());

    snapshot
}
