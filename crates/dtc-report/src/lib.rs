//! Rendering and export boundary for assembled DTC reports.

pub mod document;
pub mod error;
pub mod mock;
pub mod render;

pub use document::{DocumentRenderer, PlainTextRenderer, REPORT_TITLE, ReportDocument};
pub use error::{ExportError, ExportResult};
pub use render::{render_entry, render_report};
