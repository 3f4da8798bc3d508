//! Report assembly — one ordered entry per classified code.

use crate::advisor;
use crate::classifier;
use crate::knowledge;
use crate::types::{CodeNumber, ReportEntry};

/// Two-line notice attached to transmission codes instead of a workshop
/// diagnostic payload.
pub const TRANSMISSION_NOTICE: &[&str] = &[
    "This code belongs to the transmission (TCM).",
    "Check TCM communication and engine torque strategies.",
];

/// Assemble one report entry per code, preserving input order.
///
/// Pure and idempotent: same input, same output, no hidden state. No entry
/// is dropped or reordered relative to the (already deduplicated) input.
pub fn assemble(codes: &[CodeNumber]) -> Vec<ReportEntry> {
    codes.iter().map(|&code| assemble_one(code)).collect()
}

fn assemble_one(code: CodeNumber) -> ReportEntry {
    let classification = classifier::classify(code);
    let subsystem = knowledge::long_description(classification.tag).to_string();

    tracing::debug!(code = %code, tag = ?classification.tag, "classified");

    if !classification.engine_scope {
        return ReportEntry {
            code,
            classification,
            subsystem,
            steps: Vec::new(),
            recommendations: Vec::new(),
            notes: Vec::new(),
            transmission_notice: Some(
                TRANSMISSION_NOTICE.iter().map(|s| s.to_string()).collect(),
            ),
        };
    }

    ReportEntry {
        code,
        classification: classification.clone(),
        subsystem,
        steps: knowledge::steps_for(classification.tag)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        recommendations: knowledge::recommendations_for(classification.tag)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        notes: advisor::notes_for(code),
        transmission_notice: None,
    }
}
