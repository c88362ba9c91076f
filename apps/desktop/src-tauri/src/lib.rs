//! # ScanTally Desktop Library
//!
//! Core library for the ScanTally desktop application.
//! This is the main entry point that configures and runs the Tauri app.
//!
//! ## Module Organization
//! ```text
//! scantally_desktop_lib/
//! ├── lib.rs          ◄─── You are here (Tauri setup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper
//! │   ├── session.rs  ◄─── Scan session state management
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── scan.rs     ◄─── Decode intake, re-arm, reset, list
//! │   ├── export.rs   ◄─── Export + share hand-off
//! │   ├── permission.rs ◄─ Camera permission bootstrap
//! │   └── config.rs   ◄─── Configuration retrieval
//! ├── share.rs        ◄─── Tauri-backed ShareSink implementation
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod share;
pub mod state;

use directories::ProjectDirs;
use std::path::PathBuf;
use tauri::Manager;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use scantally_db::{Database, DbConfig};
use state::{ConfigState, DbState, SessionState};

/// Runs the Tauri application.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Determine Database Path ──────────────────────────────────────────► │
/// │     • Platform app data dir, SCANTALLY_DB_PATH override                 │
/// │                                                                         │
/// │  3. Connect to Database ──────────────────────────────────────────────► │
/// │     • SQLite with WAL mode, run pending migrations                      │
/// │                                                                         │
/// │  4. Load Persisted Scan Set ──────────────────────────────────────────► │
/// │     • Read once; any failure degrades to an empty set                   │
/// │                                                                         │
/// │  5. Initialize State Objects ─────────────────────────────────────────► │
/// │     • DbState, SessionState (restored), ConfigState                     │
/// │                                                                         │
/// │  6. Build & Run Tauri App ────────────────────────────────────────────► │
/// │     • Register all commands, manage state, launch window                │
/// │                                                                         │
/// │  Camera permission resolves later: the webview reports the platform     │
/// │  prompt outcome once via the report_permission command.                 │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    // Initialize tracing (logging)
    init_tracing();

    info!("Starting ScanTally Desktop Application");

    // Build and run the Tauri app
    tauri::Builder::default()
        // Setup hook runs before the app starts
        .setup(|app| {
            let config_state = ConfigState::from_env();

            // Determine database path
            let db_path = get_database_path(app)?;
            info!(?db_path, "Database path determined");

            // Initialize database (blocking in setup, async in runtime)
            let db = tauri::async_runtime::block_on(async {
                let config = DbConfig::new(db_path);
                Database::new(config).await
            })?;

            info!("Database connected and migrations applied");

            // Load the persisted scan set once. Load failures never block
            // startup: the session simply starts empty.
            let key = config_state.scan_set_key.clone();
            let tags = tauri::async_runtime::block_on(async {
                db.scan_sets().load(&key).await
            })
            .unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load persisted scan set, starting empty");
                Default::default()
            });

            info!(count = tags.len(), "Scan set restored");

            // Initialize state objects
            let db_state = DbState::new(db);
            let session_state = SessionState::restore(tags);

            // Register state with Tauri
            app.manage(db_state);
            app.manage(session_state);
            app.manage(config_state);

            info!("State initialized");
            Ok(())
        })
        // Register all commands
        .invoke_handler(tauri::generate_handler![
            // Permission bootstrap
            commands::permission::report_permission,
            // Scan commands
            commands::scan::get_scan_list,
            commands::scan::handle_decode,
            commands::scan::rearm,
            commands::scan::reset_scans,
            // Export command
            commands::export::export_scans,
            // Config commands
            commands::config::get_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=scantally=trace` - Show trace for scantally crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scantally=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

/// Determines the database file path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.scantally.app/scantally.db`
/// - **Windows**: `%APPDATA%\scantally\app\scantally.db`
/// - **Linux**: `~/.local/share/scantally/scantally.db`
///
/// ## Development Override
/// Set `SCANTALLY_DB_PATH` environment variable to use a custom path.
fn get_database_path(_app: &tauri::App) -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Check for override
    if let Ok(path) = std::env::var("SCANTALLY_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    // Use platform-specific app data directory
    let proj_dirs = ProjectDirs::from("com", "scantally", "app")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("scantally.db"))
}
