//! # Scan Set Repository
//!
//! Whole-set key-value persistence for the accumulated tag set.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     scan_sets table                                     │
//! │                                                                         │
//! │  key            identifiers                        updated_at           │
//! │  ────────────   ────────────────────────────────   ──────────────────   │
//! │  scanned_tags   ["ASSET-001","ASSET-007","Zür…"]   2026-08-07T09:14:…   │
//! │                                                                         │
//! │  One row per set. Every save rewrites the full JSON array:              │
//! │  no deltas, no write-ahead log, no versioning. Out-of-order             │
//! │  completion of two saves is harmless because the in-memory set is       │
//! │  monotonically non-decreasing between resets - the later-issued         │
//! │  write always carries a superset (or, after reset, the intended         │
//! │  empty state).                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! JSON keeps the encoding lossless for tags containing Unicode,
//! punctuation, or the delimiter-ish characters a naive join would mangle.

use std::collections::BTreeSet;

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::{debug, warn};

use crate::error::DbResult;

/// Repository for the persisted scan set.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ScanSetRepository::new(pool);
///
/// // Read once at startup
/// let tags = repo.load("scanned_tags").await?;
///
/// // Write through after every accepted scan
/// repo.save("scanned_tags", &tags).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ScanSetRepository {
    pool: SqlitePool,
}

impl ScanSetRepository {
    /// Creates a new ScanSetRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ScanSetRepository { pool }
    }

    /// Loads the set stored under `key`.
    ///
    /// ## Degraded Cases
    /// - No row → empty set (first launch)
    /// - Malformed JSON → empty set, with a warning log
    ///
    /// Both degrade silently because startup must proceed regardless of
    /// prior data; only an actual query failure is returned as an error,
    /// and the caller degrades that to an empty set too.
    pub async fn load(&self, key: &str) -> DbResult<BTreeSet<String>> {
        let row = sqlx::query("SELECT identifiers FROM scan_sets WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            debug!(key, "No persisted scan set, starting empty");
            return Ok(BTreeSet::new());
        };

        let raw: String = row.get("identifiers");
        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(tags) => {
                let set: BTreeSet<String> = tags.into_iter().collect();
                debug!(key, count = set.len(), "Loaded persisted scan set");
                Ok(set)
            }
            Err(e) => {
                warn!(key, error = %e, "Persisted scan set is malformed, starting empty");
                Ok(BTreeSet::new())
            }
        }
    }

    /// Saves the full set under `key`, overwriting prior content.
    ///
    /// Whole-set overwrite, not append. The empty set is saved like any
    /// other so a user reset reaches storage as well.
    pub async fn save(&self, key: &str, tags: &BTreeSet<String>) -> DbResult<()> {
        let encoded = serde_json::to_string(&tags.iter().collect::<Vec<_>>())?;
        let updated_at = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO scan_sets (key, identifiers, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                identifiers = excluded.identifiers,
                updated_at  = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(&encoded)
        .bind(&updated_at)
        .execute(&self.pool)
        .await?;

        debug!(key, count = tags.len(), "Scan set persisted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn set_of(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn load_of_absent_key_returns_empty_set() {
        let db = test_db().await;
        let tags = db.scan_sets().load("scanned_tags").await.unwrap();
        assert!(tags.is_empty());
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let db = test_db().await;
        let repo = db.scan_sets();

        let tags = set_of(&["ASSET-001", "ASSET-007"]);
        repo.save("scanned_tags", &tags).await.unwrap();

        let loaded = repo.load("scanned_tags").await.unwrap();
        assert_eq!(loaded, tags);
    }

    #[tokio::test]
    async fn round_trip_preserves_unicode_and_punctuation() {
        let db = test_db().await;
        let repo = db.scan_sets();

        let tags = set_of(&["Zürich-α/7", "a,b;c", "d\"e\\f", "日本-42"]);
        repo.save("scanned_tags", &tags).await.unwrap();

        let loaded = repo.load("scanned_tags").await.unwrap();
        assert_eq!(loaded, tags);
    }

    #[tokio::test]
    async fn save_overwrites_whole_set() {
        let db = test_db().await;
        let repo = db.scan_sets();

        repo.save("scanned_tags", &set_of(&["A", "B"])).await.unwrap();
        repo.save("scanned_tags", &set_of(&["C"])).await.unwrap();

        // Later save replaces, never merges
        let loaded = repo.load("scanned_tags").await.unwrap();
        assert_eq!(loaded, set_of(&["C"]));
    }

    #[tokio::test]
    async fn empty_set_save_clears_stored_tags() {
        let db = test_db().await;
        let repo = db.scan_sets();

        repo.save("scanned_tags", &set_of(&["A", "B"])).await.unwrap();
        repo.save("scanned_tags", &BTreeSet::new()).await.unwrap();

        let loaded = repo.load("scanned_tags").await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn malformed_stored_value_degrades_to_empty() {
        let db = test_db().await;
        let repo = db.scan_sets();

        sqlx::query("INSERT INTO scan_sets (key, identifiers, updated_at) VALUES (?1, ?2, ?3)")
            .bind("scanned_tags")
            .bind("not json at all")
            .bind("2026-01-01T00:00:00Z")
            .execute(db.pool())
            .await
            .unwrap();

        let loaded = repo.load("scanned_tags").await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn keys_hold_independent_sets() {
        let db = test_db().await;
        let repo = db.scan_sets();

        repo.save("scanned_tags", &set_of(&["A"])).await.unwrap();
        repo.save("other_profile", &set_of(&["B"])).await.unwrap();

        assert_eq!(
            repo.load("scanned_tags").await.unwrap(),
            set_of(&["A"])
        );
        assert_eq!(
            repo.load("other_profile").await.unwrap(),
            set_of(&["B"])
        );
    }
}
