use serde::{Deserialize, Serialize};

/// Numeric suffix of a generic powertrain DTC, e.g. 171 for "P0171".
///
/// Valid values are 1..=999. The "P0" prefix is a display concern and is
/// only materialized by [`CodeNumber::label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CodeNumber(u16);

impl CodeNumber {
    /// Build a code number, rejecting anything outside 1..=999.
    pub fn new(value: u16) -> Option<Self> {
        (1..=999).contains(&value).then_some(Self(value))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// Canonical display label, zero-padded: `P0171`, `P0042`.
    pub fn label(&self) -> String {
        format!("P{:04}", self.0)
    }
}

impl std::fmt::Display for CodeNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{:04}", self.0)
    }
}

/// Vehicle subsystem a code is grouped under.
///
/// Acts as the join key between the range classifier and the knowledge
/// base. Closed set — every code in 1..=999 maps to exactly one tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubsystemTag {
    /// Fuel delivery: rail pressure, pump, regulator, trim.
    FuelPressure,
    /// Mass air flow metering and mixture correlations.
    Maf,
    /// Manifold absolute / barometric pressure.
    Map,
    /// Engine coolant and intake air temperature sensors.
    EctIat,
    /// Throttle position, accelerator pedal, electronic throttle body.
    TpsAppEtc,
    /// Injector control and balance.
    Injector,
    /// Ignition, misfires, knock, synchronization.
    Misfire,
    /// Crankshaft / camshaft position sensors.
    CkpCmp,
    /// Oxygen sensor heater circuits.
    O2Heater,
    /// Oxygen sensor signal (rich/lean, response).
    O2Sensor,
    /// Catalyst efficiency and backpressure.
    Cat,
    /// Evaporative emission control.
    Evap,
    /// Exhaust gas recirculation and emission controls.
    Egr,
    /// Idle control, vehicle speed, auxiliary loads.
    IdleVss,
    /// ECU, communication and 5 V reference lines.
    EcuRef,
    /// TCM / transmission codes — outside the engine scope.
    Transmission,
    /// Powertrain, not otherwise classified.
    General,
}

/// Result of classifying one code against the range table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub code: CodeNumber,
    pub tag: SubsystemTag,
    /// Short human-readable description of the fault family.
    pub description: String,
    /// False only for the 700-999 transmission block.
    pub engine_scope: bool,
}

/// One assembled report entry per distinct input code.
///
/// Steps and recommendations are present only for in-scope codes; the
/// transmission notice only for out-of-scope ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEntry {
    pub code: CodeNumber,
    pub classification: Classification,
    /// Long-form description of the subsystem the code belongs to.
    pub subsystem: String,
    /// Ordered workshop diagnostic steps.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    /// Ordered repair recommendations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    /// Cross-code advisory notes keyed on the exact code value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    /// Present instead of steps/recommendations for transmission codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission_notice: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_number_bounds() {
        assert!(CodeNumber::new(0).is_none());
        assert!(CodeNumber::new(1).is_some());
        assert!(CodeNumber::new(999).is_some());
        assert!(CodeNumber::new(1000).is_none());
    }

    #[test]
    fn code_label_zero_padded() {
        assert_eq!(CodeNumber::new(171).unwrap().label(), "P0171");
        assert_eq!(CodeNumber::new(4).unwrap().label(), "P0004");
        assert_eq!(CodeNumber::new(999).unwrap().to_string(), "P0999");
    }

    #[test]
    fn tag_serialization() {
        assert_eq!(
            serde_json::to_string(&SubsystemTag::FuelPressure).unwrap(),
            r#""fuel_pressure""#
        );
        assert_eq!(
            serde_json::to_string(&SubsystemTag::CkpCmp).unwrap(),
            r#""ckp_cmp""#
        );
    }

    #[test]
    fn report_entry_roundtrip() {
        let code = CodeNumber::new(420).unwrap();
        let entry = ReportEntry {
            code,
            classification: Classification {
                code,
                tag: SubsystemTag::Cat,
                description: "Catalyst efficiency below threshold (Bank 1)".into(),
                engine_scope: true,
            },
            subsystem: "Catalyst efficiency and backpressure.".into(),
            steps: vec!["Compare upstream vs downstream O2".into()],
            recommendations: vec!["Rule out upstream causes first".into()],
            notes: vec![],
            transmission_notice: None,
        };
        let json = serde_json::to_string(&entry).unwrap();
        // Empty notes and absent notice are skipped entirely.
        assert!(!json.contains("notes"));
        assert!(!json.contains("transmission_notice"));
        let back: ReportEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.code, code);
        assert_eq!(back.classification.tag, SubsystemTag::Cat);
    }
}
