//! CSV export of the saved list.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use crate::config::ExportSettings;
use crate::location::SavedLocation;

/// Render `entries` as CSV: one `latitude,longitude,zoom` line per entry,
/// no header, no quoting, lines joined with `\n` and no trailing newline.
#[must_use]
pub fn to_csv(entries: &[SavedLocation]) -> String {
    entries.iter().map(SavedLocation::csv_line).collect::<Vec<_>>().join("\n")
}

/// A file ready to hand to the browser's download machinery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub mime: String,
    pub body: String,
}

impl ExportArtifact {
    #[must_use]
    pub fn csv(entries: &[SavedLocation], settings: &ExportSettings) -> Self {
        Self {
            file_name: settings.file_name.clone(),
            mime: settings.mime.clone(),
            body: to_csv(entries),
        }
    }
}
