//! # Export Command
//!
//! Serializes the current tag set and hands it to the share surface.

use serde::{Deserialize, Serialize};
use tauri::{AppHandle, State};
use tracing::debug;

use crate::share::TauriShareSink;
use crate::state::{ConfigState, SessionState};
use scantally_core::{export_text, ShareRequest, ShareSink};

/// Export response returned to the caller alongside the share event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    /// Newline-delimited tag list, in display order.
    pub message: String,

    /// Title handed to the share UI.
    pub title: String,

    /// Number of exported tags.
    pub count: usize,
}

/// Exports the current tag set as shareable text.
///
/// ## Behavior
/// - Serializes one tag per line, in the order the list displays
/// - Emits a `share:request` event the webview turns into the platform
///   share UI (fire-and-forget, nothing awaited)
/// - Never mutates state; callable at any time, including with an empty
///   set (empty message)
#[tauri::command]
pub fn export_scans(
    app: AppHandle,
    session: State<'_, SessionState>,
    config: State<'_, ConfigState>,
) -> ExportResponse {
    debug!("export_scans command");

    let (message, count) =
        session.with_session(|s| (export_text(s.tag_set()), s.len()));

    let request = ShareRequest {
        message,
        title: config.share_title.clone(),
    };

    TauriShareSink::new(app).share(&request);

    ExportResponse {
        message: request.message,
        title: request.title,
        count,
    }
}
