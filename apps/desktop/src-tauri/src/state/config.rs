//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`SCANTALLY_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

use scantally_core::{Symbology, ACCEPTED_SYMBOLOGY, SCAN_SET_KEY};

/// Application configuration.
///
/// Read-only after startup; handed to the frontend once via `get_config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// App name shown in the window header.
    pub app_name: String,

    /// The single barcode format accepted at intake.
    pub accepted_symbology: Symbology,

    /// Title handed to the platform share UI on export.
    pub share_title: String,

    /// Name of the durable record the scan set is stored under.
    pub scan_set_key: String,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - App name: "ScanTally"
    /// - Accepted symbology: Code 128
    /// - Share title: "Exported asset tags"
    /// - Scan set key: "scanned_tags"
    fn default() -> Self {
        ConfigState {
            app_name: "ScanTally".to_string(),
            accepted_symbology: ACCEPTED_SYMBOLOGY,
            share_title: "Exported asset tags".to_string(),
            scan_set_key: SCAN_SET_KEY.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SCANTALLY_SHARE_TITLE`: Override the share title
    /// - `SCANTALLY_SCAN_SET_KEY`: Override the storage record name
    ///   (used by tests and side-by-side profiles)
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(share_title) = std::env::var("SCANTALLY_SHARE_TITLE") {
            config.share_title = share_title;
        }

        if let Ok(key) = std::env::var("SCANTALLY_SCAN_SET_KEY") {
            config.scan_set_key = key;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_accept_code128_only() {
        let config = ConfigState::default();
        assert_eq!(config.accepted_symbology, Symbology::Code128);
        assert_eq!(config.scan_set_key, "scanned_tags");
    }

    #[test]
    fn serializes_camel_case_for_frontend() {
        let json = serde_json::to_value(ConfigState::default()).unwrap();
        assert_eq!(json["appName"], "ScanTally");
        assert_eq!(json["acceptedSymbology"], "code_128");
        assert_eq!(json["shareTitle"], "Exported asset tags");
    }
}
