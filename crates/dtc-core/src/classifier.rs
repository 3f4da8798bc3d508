//! Range-based code classification.
//!
//! The rule table is an explicit ordered list evaluated first-match-wins.
//! Order is load-bearing: narrow rules (exact codes, tight sub-ranges) come
//! before the wider bands that would otherwise shadow them, and a coarse
//! six-band fallback tier sits at the end to keep classification total over
//! 1..=999 even where the detailed tier has gaps.

use crate::types::{Classification, CodeNumber, SubsystemTag};
use crate::types::SubsystemTag as T;

/// One classification rule: inclusive numeric range, tag, description.
///
/// Exact-match rules are ranges with `lo == hi`.
#[derive(Debug)]
pub struct Rule {
    pub lo: u16,
    pub hi: u16,
    pub tag: SubsystemTag,
    pub description: &'static str,
    pub engine_scope: bool,
}

impl Rule {
    const fn range(
        lo: u16,
        hi: u16,
        tag: SubsystemTag,
        description: &'static str,
    ) -> Self {
        Self {
            lo,
            hi,
            tag,
            description,
            engine_scope: !matches!(tag, SubsystemTag::Transmission),
        }
    }

    const fn exact(value: u16, tag: SubsystemTag, description: &'static str) -> Self {
        Self::range(value, value, tag, description)
    }

    fn matches(&self, value: u16) -> bool {
        (self.lo..=self.hi).contains(&value)
    }
}

/// Ordered rule table. Detailed tier first, then the wide fallback bands.
pub static RULES: &[Rule] = &[
    // ===== Detailed tier: Fuel and Air Metering =====
    Rule::range(1, 4, T::FuelPressure, "Fuel Volume Regulator Control Circuit/Function"),
    Rule::range(30, 39, T::O2Heater, "O2 Sensor Heater Circuit (Banks/Sensors)"),
    Rule::range(100, 104, T::Maf, "Mass Air Flow Circuit Range/Performance"),
    Rule::range(105, 109, T::Map, "MAP/Barometric Pressure Circuit Range/Performance"),
    Rule::range(110, 114, T::EctIat, "Intake Air Temperature Circuit Range"),
    Rule::range(115, 119, T::EctIat, "Engine Coolant Temperature Circuit Range"),
    Rule::range(120, 129, T::TpsAppEtc, "Throttle Position Circuit Range"),
    Rule::range(130, 169, T::O2Sensor, "O2 Sensor Circuit/Response"),
    // Exact mixture codes must precede the 170-179 fuel trim band.
    Rule::exact(171, T::Maf, "System Too Lean (Bank 1)"),
    Rule::exact(172, T::Maf, "System Too Rich (Bank 1)"),
    Rule::exact(174, T::Maf, "System Too Lean (Bank 2)"),
    Rule::exact(175, T::Maf, "System Too Rich (Bank 2)"),
    Rule::range(170, 179, T::FuelPressure, "Fuel Trim Out of Range (Bank 1/2)"),
    Rule::range(180, 189, T::FuelPressure, "Fuel Temperature Sensor and Related"),
    Rule::range(190, 199, T::FuelPressure, "Fuel Rail Pressure Sensor Circuit Range"),

    // ===== Detailed tier: Injection and Boost =====
    Rule::range(200, 219, T::Injector, "Injector Circuit/Control"),
    Rule::range(230, 239, T::FuelPressure, "Fuel Pump Control Circuit"),
    Rule::range(240, 249, T::FuelPressure, "EVAP Purge/Vent Control Circuit"),
    Rule::range(250, 259, T::FuelPressure, "Air/Fuel Ratio Restriction/Performance"),
    Rule::range(260, 269, T::TpsAppEtc, "Throttle Actuator Control Performance"),
    Rule::range(280, 289, T::FuelPressure, "Boost Pressure Performance"),
    Rule::range(290, 299, T::FuelPressure, "Underboost/Overboost Condition"),

    // ===== Detailed tier: Ignition and Synchronization =====
    Rule::exact(300, T::Misfire, "Random/Multiple Cylinder Misfire Detected"),
    // Knock and CKP sub-ranges precede the broad cylinder misfire band.
    Rule::range(325, 329, T::Misfire, "Knock Sensor Circuit"),
    Rule::range(335, 339, T::CkpCmp, "Crankshaft Position Sensor Circuit/Position"),
    Rule::range(340, 349, T::CkpCmp, "Camshaft Position Sensor Circuit/Position"),
    Rule::range(301, 339, T::Misfire, "Cylinder Specific Misfire Detected"),
    Rule::range(350, 369, T::Misfire, "Ignition Coil Primary/Secondary Circuit"),

    // ===== Detailed tier: Emission Controls =====
    Rule::exact(400, T::Egr, "EGR Flow Insufficient"),
    Rule::exact(401, T::Egr, "EGR Flow Insufficient Detected"),
    Rule::exact(402, T::Egr, "EGR Flow Excessive"),
    Rule::range(410, 419, T::Egr, "Secondary Air System Circuit/Performance"),
    Rule::exact(420, T::Cat, "Catalyst Efficiency Below Threshold (Bank 1)"),
    Rule::exact(430, T::Cat, "Catalyst Efficiency Below Threshold (Bank 2)"),
    Rule::range(440, 459, T::Evap, "EVAP System Leak/Vent/Purge"),
    Rule::range(460, 469, T::FuelPressure, "Fuel Level Sensor Circuit High/Low"),
    Rule::range(480, 489, T::Egr, "Cooling Fan / Emission System Control"),

    // ===== Detailed tier: Idle, Speed and Electrical =====
    Rule::exact(500, T::IdleVss, "Vehicle Speed Sensor Circuit"),
    Rule::exact(505, T::IdleVss, "Idle Air Control System Operation"),
    Rule::range(520, 529, T::IdleVss, "Engine Oil Pressure Sensor/Switch"),
    Rule::range(550, 559, T::IdleVss, "Power Steering Load Impact on Idle"),
    Rule::range(560, 569, T::EcuRef, "System Voltage High/Low/Erratic"),

    // ===== Detailed tier: ECU, Communication and References =====
    Rule::range(600, 609, T::EcuRef, "Serial Communication Link Faults"),
    Rule::range(610, 619, T::EcuRef, "Vehicle Control Checksum/Programming"),
    Rule::range(620, 629, T::EcuRef, "Actuator Control (Regulation/Speed)"),
    Rule::exact(650, T::EcuRef, "Malfunction Indicator Lamp Control Circuit"),
    Rule::range(680, 689, T::EcuRef, "5V Reference Circuit Faults (Shared Line)"),

    // ===== Detailed tier: Transmission block =====
    Rule::range(700, 999, T::Transmission, "Transmission/TCM Code (Engine Torque Reference)"),

    // ===== Fallback tier: wide 100-bands for detailed-tier gaps =====
    Rule::range(1, 199, T::FuelPressure, "Air/Fuel Metering Circuit Range"),
    Rule::range(200, 299, T::Injector, "Injection/Boost Circuit Performance"),
    Rule::range(300, 399, T::Misfire, "Ignition/Synchronization Faults"),
    Rule::range(400, 499, T::Egr, "Emission Controls (EGR/EVAP/CAT) Performance"),
    Rule::range(500, 599, T::IdleVss, "Idle/Speed/Electrical Performance"),
    Rule::range(600, 699, T::EcuRef, "ECU/Communication/Reference Faults"),
];

/// Classify one code against the ordered rule table.
///
/// Total over 1..=999: the fallback tier covers 1-699 and the transmission
/// rule covers 700-999, so the terminal GENERAL arm is unreachable in
/// practice but kept so the function never signals "no match".
pub fn classify(code: CodeNumber) -> Classification {
    let value = code.value();
    for rule in RULES {
        if rule.matches(value) {
            return Classification {
                code,
                tag: rule.tag,
                description: rule.description.to_string(),
                engine_scope: rule.engine_scope,
            };
        }
    }
    Classification {
        code,
        tag: SubsystemTag::General,
        description: "Powertrain (General)".to_string(),
        engine_scope: true,
    }
}
