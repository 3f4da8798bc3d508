//! Mock document renderer for testing the export-failure path.

use crate::document::{DocumentRenderer, ReportDocument};
use crate::error::{ExportError, ExportResult};

/// A renderer that always fails with a configurable message.
pub struct FailingRenderer {
    message: String,
}

impl FailingRenderer {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FailingRenderer {
    fn default() -> Self {
        Self::new("renderer backend unavailable")
    }
}

impl DocumentRenderer for FailingRenderer {
    fn render_document(&self, _document: &ReportDocument) -> ExportResult<Vec<u8>> {
        Err(ExportError::Other(self.message.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_renderer_reports_message() {
        let doc = ReportDocument::new("attr", vec![]);
        let err = FailingRenderer::new("no PDF backend")
            .render_document(&doc)
            .unwrap_err();
        assert_eq!(err.to_string(), "no PDF backend");
    }
}
