//! # Export
//!
//! Serializes the tag set into shareable text and defines the seam to the
//! platform share surface.
//!
//! Export never mutates state: it reads the set, produces one string, and
//! hands it to a [`ShareSink`]. The sink is a black box - on desktop the
//! app layer implements it as a Tauri event the webview turns into the
//! platform share UI.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Serializes tags into newline-delimited text, one tag per line.
///
/// The order is the set's iteration order - the same lexicographic order
/// the list presenter displays - so the export always matches the screen.
/// An empty set produces an empty string, no trailing newline either way.
pub fn export_text(tags: &BTreeSet<String>) -> String {
    tags.iter().map(String::as_str).collect::<Vec<_>>().join("\n")
}

/// A share payload: the exported text plus a fixed title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShareRequest {
    /// Newline-delimited tag list.
    pub message: String,

    /// Title shown by the platform share UI.
    pub title: String,
}

/// Seam to the platform share black box.
///
/// Fire-and-forget: implementations must not block and have no return
/// contract. The desktop implementation emits a `share:request` event to
/// the webview; tests use an in-memory recorder.
pub trait ShareSink {
    fn share(&self, request: &ShareRequest);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn exports_one_tag_per_line_in_display_order() {
        let tags = set_of(&["srv-2", "srv-10", "srv-1"]);
        // Lexicographic, matching the list presenter
        assert_eq!(export_text(&tags), "srv-1\nsrv-10\nsrv-2");
    }

    #[test]
    fn empty_set_exports_empty_message() {
        assert_eq!(export_text(&BTreeSet::new()), "");
    }

    #[test]
    fn single_tag_has_no_trailing_newline() {
        assert_eq!(export_text(&set_of(&["ABC123"])), "ABC123");
    }

    #[test]
    fn export_lines_reconstruct_the_set_exactly() {
        let tags = set_of(&["α-tag", "b tag", "c;tag", "d\"tag\""]);
        let text = export_text(&tags);
        let reconstructed: BTreeSet<String> =
            text.lines().map(|l| l.to_string()).collect();
        assert_eq!(reconstructed, tags);
    }
}
