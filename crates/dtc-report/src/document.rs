//! Document export boundary.
//!
//! The core hands ordered entries to a [`DocumentRenderer`] capability and
//! stays agnostic to the concrete document format. The in-tree
//! implementation is a paginated plain-text renderer; a PDF backend can be
//! slotted in behind the same trait.

use chrono::{DateTime, Utc};
use serde::Serialize;

use dtc_core::ReportEntry;

use crate::error::{ExportError, ExportResult};
use crate::render;

/// Fixed report header title.
pub const REPORT_TITLE: &str = "Engine DTC Diagnostic Report";

/// An assembled report plus the metadata every export carries.
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub title: String,
    /// Attribution line repeated on every page.
    pub attribution: String,
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<ReportEntry>,
}

impl ReportDocument {
    pub fn new(attribution: impl Into<String>, entries: Vec<ReportEntry>) -> Self {
        Self {
            title: REPORT_TITLE.to_string(),
            attribution: attribution.into(),
            generated_at: Utc::now(),
            entries,
        }
    }

    /// Conventional export filename, dated: `dtc_report_2026-08-23.txt`.
    pub fn suggested_filename(&self) -> String {
        format!("dtc_report_{}.txt", self.generated_at.format("%Y-%m-%d"))
    }
}

/// Capability interface for turning a report into a downloadable artifact.
///
/// One-shot, synchronous and fallible; a failure here must leave the
/// already-assembled entries untouched.
pub trait DocumentRenderer {
    fn render_document(&self, document: &ReportDocument) -> ExportResult<Vec<u8>>;
}

/// Paginated plain-text document renderer.
///
/// Every page carries the attribution line and a page counter; the first
/// page additionally carries the report title and timestamp.
pub struct PlainTextRenderer {
    /// Content lines per page, excluding header/footer chrome.
    pub lines_per_page: usize,
}

impl PlainTextRenderer {
    pub fn new(lines_per_page: usize) -> Self {
        Self { lines_per_page }
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new(48)
    }
}

impl DocumentRenderer for PlainTextRenderer {
    fn render_document(&self, document: &ReportDocument) -> ExportResult<Vec<u8>> {
        if self.lines_per_page == 0 {
            return Err(ExportError::Layout("lines_per_page must be > 0".into()));
        }

        let body = render::render_report(&document.entries);
        let body_lines: Vec<&str> = body.lines().collect();

        let mut out = String::new();
        let mut page = 0;
        for chunk in body_lines.chunks(self.lines_per_page.max(1)) {
            page += 1;
            out.push_str(&format!("{}\n", document.attribution));
            if page == 1 {
                out.push_str(&format!("{}\n", document.title));
                out.push_str(&format!(
                    "Date: {}\n",
                    document.generated_at.format("%Y-%m-%d %H:%M")
                ));
            }
            out.push('\n');
            for line in chunk {
                out.push_str(line);
                out.push('\n');
            }
            out.push_str(&format!("\nPage {page}\n\x0c"));
        }

        // An empty report still exports a single header page.
        if page == 0 {
            out.push_str(&format!("{}\n", document.attribution));
            out.push_str(&format!("{}\n", document.title));
            out.push_str(&format!(
                "Date: {}\n",
                document.generated_at.format("%Y-%m-%d %H:%M")
            ));
            out.push_str("\nNo entries.\n\nPage 1\n\x0c");
        }

        tracing::debug!(pages = page.max(1), "document rendered");
        Ok(out.into_bytes())
    }
}
