//! Library surface of the dtc-advisor CLI, kept separate so integration
//! tests can drive the same wiring the binary uses.

pub mod config;

use dtc_core::ReportEntry;
use dtc_report::{DocumentRenderer, ReportDocument};

use crate::config::ReportConfig;

/// Warning shown when parsing recognizes no codes.
pub const NO_CODES_WARNING: &str =
    "No codes recognized. Try something like: P0171, P0300, P0420";

/// Run the full pipeline on raw input text: parse and assemble.
///
/// Returns `None` for the empty-parse warning state.
pub fn scan(input: &str) -> Option<Vec<ReportEntry>> {
    let codes = dtc_core::parse_codes(input);
    if codes.is_empty() {
        tracing::warn!(input, "no valid codes in input");
        return None;
    }
    tracing::info!(count = codes.len(), "codes parsed");
    Some(dtc_core::assemble(&codes))
}

/// Export assembled entries through a renderer.
///
/// Failures are returned to the caller for user-facing reporting; the
/// entries themselves are untouched either way.
pub fn export(
    renderer: &dyn DocumentRenderer,
    config: &ReportConfig,
    entries: Vec<ReportEntry>,
) -> Result<(String, Vec<u8>), dtc_report::ExportError> {
    let document = ReportDocument::new(config.attribution.clone(), entries);
    let bytes = renderer.render_document(&document)?;
    Ok((document.suggested_filename(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dtc_report::PlainTextRenderer;
    use dtc_report::mock::FailingRenderer;

    #[test]
    fn scan_valid_input() {
        let entries = scan("P0171, P0300").unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn scan_garbage_is_warning_state() {
        assert!(scan("garbage text").is_none());
    }

    #[test]
    fn export_produces_dated_filename() {
        let entries = scan("P0420").unwrap();
        let config = ReportConfig::default();
        let (name, bytes) = export(&PlainTextRenderer::default(), &config, entries).unwrap();
        assert!(name.starts_with("dtc_report_"));
        assert!(!bytes.is_empty());
    }

    #[test]
    fn export_failure_surfaces_message() {
        let entries = scan("P0420").unwrap();
        let config = ReportConfig::default();
        let err = export(&FailingRenderer::default(), &config, entries).unwrap_err();
        assert!(err.to_string().contains("unavailable"));
    }
}
