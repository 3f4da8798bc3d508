//! Invariants that must hold over the whole 1..=999 domain.

use dtc_core::{CodeNumber, SubsystemTag, classify, parse_codes};

#[test]
fn classification_is_total_over_the_domain() {
    for value in 1u16..=999 {
        let code = CodeNumber::new(value).unwrap();
        let c = classify(code);
        assert_eq!(c.code, code);
        assert!(!c.description.is_empty(), "P{value:04}");
    }
}

#[test]
fn engine_scope_follows_the_transmission_block() {
    for value in 1u16..=999 {
        let c = classify(CodeNumber::new(value).unwrap());
        let expected = !(700..=999).contains(&value);
        assert_eq!(c.engine_scope, expected, "P{value:04}");
        assert_eq!(
            c.tag == SubsystemTag::Transmission,
            !expected,
            "scope must be a pure function of the tag (P{value:04})"
        );
    }
}

#[test]
fn parse_is_idempotent_for_any_valid_formatting() {
    for input in [
        "P0171, P0300 p420",
        "171;300;;420",
        "  P0001 P0999  ",
        "P0300 P0171 P0300 0420",
    ] {
        let first = parse_codes(input);
        let rendered = first
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(parse_codes(&rendered), first, "{input:?}");
    }
}

#[test]
fn rule_boundary_at_4_and_5() {
    let a = classify(CodeNumber::new(4).unwrap());
    let b = classify(CodeNumber::new(5).unwrap());
    // 4 ends the fuel regulator rule; 5 lands in the wide fallback band.
    assert_ne!(a.description, b.description);
    assert_eq!(a.tag, SubsystemTag::FuelPressure);
    assert_eq!(b.tag, SubsystemTag::FuelPressure);
}
