//! # Database State
//!
//! Wraps the `Database` connection for use in Tauri commands.
//!
//! ## Thread Safety
//! The `Database` struct from `scantally-db` contains a `SqlitePool` which
//! is inherently thread-safe. The startup load and the fire-and-forget
//! background saves can run concurrently without explicit locking.

use scantally_db::Database;

/// Wrapper around `Database` for Tauri state management.
///
/// Tauri's state management requires types to implement `Send + Sync`.
/// This wrapper makes the intent explicit and provides a clean API
/// for accessing the database in commands.
#[derive(Debug)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let tags = db_state.inner().scan_sets().load(&key).await?;
    /// ```
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
