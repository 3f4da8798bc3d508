//! Plain-text rendering of assembled report entries.
//!
//! Layout per entry: code label + fault description header, subsystem line,
//! then either the transmission notice or the numbered workshop steps,
//! advisory notes and bulleted recommendations.

use dtc_core::ReportEntry;

/// Render a single report entry as plain text.
pub fn render_entry(entry: &ReportEntry) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} - {}\n",
        entry.code.label(),
        entry.classification.description
    ));
    out.push_str(&format!("System: {}\n", entry.subsystem));

    if let Some(notice) = &entry.transmission_notice {
        for line in notice {
            out.push_str(&format!("  * {line}\n"));
        }
        return out;
    }

    out.push_str("Workshop diagnosis:\n");
    for (i, step) in entry.steps.iter().enumerate() {
        out.push_str(&format!("  {}. {step}\n", i + 1));
    }

    if !entry.notes.is_empty() {
        out.push_str(&format!("Notes: {}\n", entry.notes.join(" ")));
    }

    out.push_str("Recommendations:\n");
    for rec in &entry.recommendations {
        out.push_str(&format!("  - {rec}\n"));
    }

    out
}

/// Render a full report, entries in order, blank-line separated.
pub fn render_report(entries: &[ReportEntry]) -> String {
    entries
        .iter()
        .map(render_entry)
        .collect::<Vec<_>>()
        .join("\n")
}
