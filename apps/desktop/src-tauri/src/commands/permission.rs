//! # Permission Commands
//!
//! Camera permission bootstrap.
//!
//! ## Why the Webview Reports
//! The camera lives in the webview, so only the frontend can resolve the
//! platform permission prompt. It does so exactly once at startup and
//! reports the outcome here; the one-shot `{unknown} → {granted | denied}`
//! transition is enforced by the session state machine.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Frontend startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  getUserMedia() prompt ──► granted/denied                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  invoke('report_permission', { granted: true })                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Session records the status; denied is terminal for the session and     │
//! │  the frontend never mounts the scanner.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tauri::State;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{SessionSnapshot, SessionState};
use scantally_core::PermissionStatus;

/// Records the camera permission outcome reported by the platform prompt.
///
/// One-shot: re-reporting the same outcome is a no-op; a conflicting
/// report is a `PERMISSION_ERROR`.
#[tauri::command]
pub fn report_permission(
    session: State<'_, SessionState>,
    granted: bool,
) -> Result<SessionSnapshot, ApiError> {
    debug!(granted, "report_permission command");

    let status = if granted {
        PermissionStatus::Granted
    } else {
        PermissionStatus::Denied
    };

    let snapshot = session.with_session_mut(|s| {
        s.resolve_permission(status)?;
        Ok::<_, ApiError>(SessionSnapshot::from(&*s))
    })?;

    info!(?status, "Camera permission resolved");
    Ok(snapshot)
}
