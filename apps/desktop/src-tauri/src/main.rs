//! # ScanTally Desktop Application Entry Point
//!
//! This is the main entry point for the Tauri desktop application.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        ScanTally Desktop                                │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                      Tauri WebView                               │  │
//! │  │  ┌────────────────────────────────────────────────────────────┐  │  │
//! │  │  │                      Frontend                              │  │  │
//! │  │  │  • Camera + Barcode Decoder   • Tag List                   │  │  │
//! │  │  │  • Permission Prompt          • Share Sheet                │  │  │
//! │  │  └────────────────────────────────────────────────────────────┘  │  │
//! │  │                              │                                   │  │
//! │  │                     invoke('command')                            │  │
//! │  │                              │                                   │  │
//! │  └──────────────────────────────┼───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Thin entry point                                  │  │
//! │  │                                                                  │  │
//! │  │  lib.rs ─────► Sets up logging, database, state, commands        │  │
//! │  │                                                                  │  │
//! │  │  commands/ ──► handle_decode, rearm, reset_scans, export_scans   │  │
//! │  │                                                                  │  │
//! │  │  state/ ─────► DbState, SessionState, ConfigState                │  │
//! │  │                                                                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                         SQLite Database                          │  │
//! │  │  scantally.db (local file, WAL mode, one scan_sets row)          │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Determine database path (app data directory)
//! 3. Connect to database & run migrations
//! 4. Load the persisted scan set (failure → empty set)
//! 5. Create state objects (DbState, SessionState, ConfigState)
//! 6. Register commands and launch the window

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

fn main() {
    // Run the Tauri application
    // The actual setup is in lib.rs for better testability
    scantally_desktop_lib::run();
}
