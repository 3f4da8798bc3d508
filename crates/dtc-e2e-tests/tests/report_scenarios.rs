//! End-to-end report scenarios: raw text in, assembled entries out.

use dtc_core::{SubsystemTag, assemble, parse_codes};

#[test]
fn lean_misfire_catalyst_triple() {
    let codes = parse_codes("P0171, P0300, P0420");
    let entries = assemble(&codes);
    assert_eq!(entries.len(), 3);

    // P0171: MAF, lean mixture, lean advisory note.
    let lean = &entries[0];
    assert_eq!(lean.code.label(), "P0171");
    assert_eq!(lean.classification.tag, SubsystemTag::Maf);
    assert!(lean.classification.description.contains("Lean"));
    assert!(lean.classification.engine_scope);
    assert!(!lean.steps.is_empty());
    assert!(!lean.recommendations.is_empty());
    assert_eq!(lean.notes.len(), 1);

    // P0300: random/multiple misfire with its dedicated note.
    let misfire = &entries[1];
    assert_eq!(misfire.classification.tag, SubsystemTag::Misfire);
    assert!(misfire.classification.description.contains("Random/Multiple"));

    // P0420: catalyst, advisory pointing at upstream misfire/mixture causes.
    let cat = &entries[2];
    assert_eq!(cat.classification.tag, SubsystemTag::Cat);
    assert!(cat.classification.description.contains("Catalyst"));
    assert!(cat.notes.iter().any(|n| n.contains("upstream")));
}

#[test]
fn cylinder_misfire_has_no_advisory_note() {
    let entries = assemble(&parse_codes("P0302"));
    assert_eq!(entries[0].classification.tag, SubsystemTag::Misfire);
    assert!(entries[0].notes.is_empty());
}

#[test]
fn transmission_code_yields_notice_only() {
    let entries = assemble(&parse_codes("P0850"));
    assert_eq!(entries.len(), 1);
    let entry = &entries[0];
    assert!(!entry.classification.engine_scope);
    assert!(entry.steps.is_empty());
    assert!(entry.recommendations.is_empty());
    assert!(entry.transmission_notice.is_some());
}

#[test]
fn garbage_input_yields_no_entries() {
    let codes = parse_codes("garbage text");
    assert!(codes.is_empty());
    assert!(assemble(&codes).is_empty());
}

#[test]
fn duplicate_and_prefix_variants_collapse() {
    let codes = parse_codes("P0300 p0171 P0300 0420 171");
    let values: Vec<u16> = codes.iter().map(|c| c.value()).collect();
    assert_eq!(values, vec![300, 171, 420]);
}

#[test]
fn entries_serialize_for_the_renderer_boundary() {
    let entries = assemble(&parse_codes("P0171 P0850"));
    let json = serde_json::to_value(&entries).unwrap();
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["classification"]["tag"], "maf");
    assert_eq!(arr[1]["classification"]["engine_scope"], false);
    // Out-of-scope entry has no steps payload at all.
    assert!(arr[1].get("steps").is_none());
    assert!(arr[1].get("transmission_notice").is_some());
}
