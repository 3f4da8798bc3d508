//! Cross-code advisory notes.
//!
//! Certain code values (or small value sets) share a root cause that the
//! per-subsystem template does not cover. Predicates are keyed on exact
//! code values and evaluated in table order for deterministic output.

use crate::types::CodeNumber;

struct Advisory {
    codes: &'static [u16],
    note: &'static str,
}

static ADVISORIES: &[Advisory] = &[
    Advisory {
        codes: &[171, 174],
        note: "Chronic lean condition: vacuum leaks, stuck PCV, dirty MAF, EVAP purge stuck open.",
    },
    Advisory {
        codes: &[172, 175],
        note: "Chronic rich condition: high fuel pressure, stuck injector, restricted return line.",
    },
    Advisory {
        codes: &[420, 430],
        note: "Catalyst: check for prior misfire and mixture faults; an upstream failure destroys the catalyst.",
    },
    Advisory {
        codes: &[300],
        note: "Random misfire: coil supply, shared grounds, vibration and wiring.",
    },
    Advisory {
        codes: &[335, 340],
        note: "Synchronization: check CKP-CMP correlation (degrees) and belt/chain condition.",
    },
];

/// Advisory notes attached to a specific code value. Usually empty.
pub fn notes_for(code: CodeNumber) -> Vec<String> {
    let value = code.value();
    ADVISORIES
        .iter()
        .filter(|a| a.codes.contains(&value))
        .map(|a| a.note.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notes(value: u16) -> Vec<String> {
        notes_for(CodeNumber::new(value).unwrap())
    }

    #[test]
    fn lean_pair_notes() {
        for value in [171, 174] {
            let n = notes(value);
            assert_eq!(n.len(), 1);
            assert!(n[0].contains("lean"));
        }
    }

    #[test]
    fn rich_pair_notes() {
        for value in [172, 175] {
            assert!(notes(value)[0].contains("rich"));
        }
    }

    #[test]
    fn catalyst_pair_notes() {
        for value in [420, 430] {
            assert!(notes(value)[0].contains("upstream"));
        }
    }

    #[test]
    fn misfire_and_sync_notes() {
        assert!(notes(300)[0].contains("Random misfire"));
        assert!(notes(335)[0].contains("CKP-CMP"));
        assert!(notes(340)[0].contains("CKP-CMP"));
    }

    #[test]
    fn unkeyed_codes_have_no_notes() {
        for value in [1, 173, 301, 421, 500, 700, 999] {
            assert!(notes(value).is_empty(), "P{value:04}");
        }
    }
}
