//! # Share Sink
//!
//! Tauri-backed implementation of the [`ShareSink`] seam from
//! `scantally-core`.
//!
//! ## Event Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │  Frontend (WebView)                                                      │
//! │  ───────────────────                                                     │
//! │                                                                          │
//! │  import { listen } from '@tauri-apps/api/event';                         │
//! │                                                                          │
//! │  listen('share:request', (event) => {                                    │
//! │    // { message: "ASSET-001\nASSET-007", title: "Exported asset tags" }  │
//! │    navigator.share(event.payload);                                       │
//! │  });                                                                     │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Fire-and-forget: the backend never waits for the share UI, and an emit
//! failure is logged, not surfaced.

use tauri::{AppHandle, Emitter};
use tracing::{debug, error};

use scantally_core::{ShareRequest, ShareSink};

/// Emits share requests to the webview, which presents the platform UI.
#[derive(Clone)]
pub struct TauriShareSink {
    app_handle: AppHandle,
}

impl TauriShareSink {
    /// Creates a new TauriShareSink.
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl ShareSink for TauriShareSink {
    fn share(&self, request: &ShareRequest) {
        if let Err(e) = self.app_handle.emit("share:request", request) {
            error!(?e, "Failed to emit share:request event");
        }

        debug!(title = %request.title, bytes = request.message.len(), "Emitted share:request");
    }
}
