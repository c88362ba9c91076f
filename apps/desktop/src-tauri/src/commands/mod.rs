//! # Tauri Commands Module
//!
//! All commands exposed to the webview frontend.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── scan.rs       ◄─── Decode intake, re-arm, reset, list
//! ├── export.rs     ◄─── Export + share hand-off
//! ├── permission.rs ◄─── Camera permission bootstrap
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Tauri Command Flow                                   │
//! │                                                                         │
//! │  WebView Frontend                                                       │
//! │  ─────────────────                                                      │
//! │  import { invoke } from '@tauri-apps/api/core';                         │
//! │                                                                         │
//! │  const response = await invoke('handle_decode', {                       │
//! │    symbology: 'code_128',                                               │
//! │    payload: 'ASSET-001'                                                 │
//! │  });                                                                    │
//! │         │                                                               │
//! │         │ (IPC via WebView)                                             │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  #[tauri::command]                                                      │
//! │  fn handle_decode(                                                      │
//! │      db: State<'_, DbState>,        ◄── Injected by Tauri               │
//! │      session: State<'_, SessionState>,                                  │
//! │      config: State<'_, ConfigState>,                                    │
//! │      symbology: Symbology,          ◄── From invoke params              │
//! │      payload: String,                                                   │
//! │  ) -> Result<ScanEventResponse, ApiError>                               │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Frontend receives: { outcome: 'added', session: {...} }                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the session
//! fn rearm(session: State<'_, SessionState>)
//!
//! // Needs session + db + config (for the write-through)
//! fn handle_decode(db: State<'_, DbState>, session: State<'_, SessionState>, ...)
//! ```

pub mod config;
pub mod export;
pub mod permission;
pub mod scan;
