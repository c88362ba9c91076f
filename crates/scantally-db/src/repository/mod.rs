//! # Repository Module
//!
//! Database repository implementations for ScanTally.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.   │
//! │                                                                         │
//! │  Tauri Command                                                          │
//! │       │                                                                 │
//! │       │  db.scan_sets().save("scanned_tags", &tags)                     │
//! │       ▼                                                                 │
//! │  ScanSetRepository                                                      │
//! │  ├── load(&self, key)                                                   │
//! │  └── save(&self, key, tags)                                             │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`scan_set::ScanSetRepository`] - Whole-set key-value load/save

pub mod scan_set;
