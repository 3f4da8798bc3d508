//! Static per-subsystem knowledge base — workshop diagnostic step lists,
//! repair recommendations and long-form subsystem descriptions.
//!
//! Match-based lookup over hand-curated constant data. Upgradeable to an
//! external data file later without API change.

use crate::types::SubsystemTag;

/// Generic checklist for tags without a dedicated step list.
pub const GENERIC_STEPS: &[&str] = &[
    "Basic visual and electrical inspection.",
    "Verify 5 V reference, ground and continuity.",
    "Review live data and cross-sensor correlations.",
    "Perform load tests.",
];

/// Long-form description of the subsystem a tag groups.
pub fn long_description(tag: SubsystemTag) -> &'static str {
    match tag {
        SubsystemTag::FuelPressure => {
            "Fuel system and mixture: rail pressure, pump, regulator and MAF/MAP correlations."
        }
        SubsystemTag::Maf => "Mass air flow metering (MAF) and mixture correlations.",
        SubsystemTag::Map => "Manifold absolute pressure (MAP) and barometric (BARO).",
        SubsystemTag::EctIat => "Engine and intake temperatures (NTC sensors).",
        SubsystemTag::TpsAppEtc => {
            "Throttle position, accelerator pedal and electronic throttle body."
        }
        SubsystemTag::Injector => "Injector control, supply and balance.",
        SubsystemTag::Misfire => "Ignition, misfires, knock and synchronization.",
        SubsystemTag::CkpCmp => "Crankshaft/camshaft position sensors.",
        SubsystemTag::O2Heater => "Lambda probe heater circuits.",
        SubsystemTag::O2Sensor => "Oxygen sensor signal (rich/lean, response).",
        SubsystemTag::Cat => "Catalyst efficiency and backpressure.",
        SubsystemTag::Evap => "Fuel vapor control and system tightness.",
        SubsystemTag::Egr => "Exhaust gas recirculation and emission controls.",
        SubsystemTag::IdleVss => "Idle, vehicle speed and auxiliary loads.",
        SubsystemTag::EcuRef => "ECU, communication and 5 V references.",
        SubsystemTag::Transmission => {
            "TCM/transmission codes (reference only, outside the engine scope)."
        }
        SubsystemTag::General => "Powertrain (general).",
    }
}

/// Ordered workshop diagnostic steps for a tag.
///
/// Tags without a dedicated list fall back to [`GENERIC_STEPS`].
pub fn steps_for(tag: SubsystemTag) -> &'static [&'static str] {
    match tag {
        SubsystemTag::Maf => &[
            "Check MAF sensor connector, terminals and ground.",
            "Confirm 5 V reference (key on, engine off).",
            "Measure MAF signal: 0.8-1.2 V at idle, rising to 4.0-4.5 V at 4,000 rpm.",
            "Watch live g/s: 2-7 g/s at idle (1.6-2.0 L), proportional to displacement.",
            "Inspect for intake leaks upstream of the MAF and a clogged filter.",
            "Clean with dedicated MAF cleaner (never touch the wire).",
            "Test continuity to the ECU if the signal is flat or erratic.",
        ],
        SubsystemTag::Map => &[
            "Check the vacuum hose (where fitted) and connector.",
            "Confirm 5 V reference (key on, engine off).",
            "Measure MAP signal: about 4.5-5.0 V key-on, 0.9-1.5 V at idle.",
            "Compare MAP against MAF: disagreement points to a leak or a bad sensor.",
            "Verify engine vacuum: roughly 18-22 inHg at idle.",
        ],
        SubsystemTag::EctIat => &[
            "Measure NTC resistance: about 2-3 kOhm at 20 C, 300-500 Ohm at 80 C.",
            "Confirm 5 V supply and ground.",
            "Compare ECT with IAT cold (should match within 3 C).",
            "Check continuity and corroded connectors if the reading jumps.",
        ],
        SubsystemTag::O2Heater => &[
            "Measure heater resistance: 8-14 Ohm.",
            "Verify 12 V at the heater (key on) and circuit ground.",
            "Check the HO2S heater circuit fuse.",
        ],
        SubsystemTag::O2Sensor => &[
            "Watch the narrowband probe: 0.10-0.90 V oscillating in closed loop.",
            "If stuck lean/rich, confirm with a propane test and rule out leaks.",
            "Check response: force enrichment and expect a fast swing.",
        ],
        SubsystemTag::Cat => &[
            "Compare upstream vs downstream O2 (downstream should oscillate less).",
            "Rule out misfire or rich mixture upstream before replacing the catalyst.",
            "Measure exhaust backpressure if a restriction is suspected.",
        ],
        SubsystemTag::Evap => &[
            "Inspect the fuel cap (correct sealing).",
            "Run a smoke test (lines, canister, valves).",
            "Check the purge valve: stuck open causes an unstable lean mixture.",
        ],
        SubsystemTag::Egr => &[
            "Inspect carbon buildup in passages and the EGR valve.",
            "Command the EGR with a scan tool: excessive opening nearly stalls the idle.",
            "Verify the EGR position sensor tracks the command.",
        ],
        SubsystemTag::FuelPressure => &[
            "Measure pressure with a gauge and compare against spec (e.g. 3.0-3.5 bar multipoint).",
            "Test pump delivery and supply-wiring voltage drop.",
            "Check the pressure regulator and a restricted return line.",
        ],
        SubsystemTag::Injector => &[
            "Verify pulse with a noid light.",
            "Measure coil resistance: 12-16 Ohm (high impedance).",
            "Run an injector balance test (similar pressure drop per injector).",
        ],
        SubsystemTag::Misfire => &[
            "Identify the cylinder; swap coil/plug and see whether the fault follows.",
            "Run compression/leak-down tests (variation within +/-10%).",
            "Verify mixture: vacuum leaks, MAF/MAP and fuel pressure.",
        ],
        SubsystemTag::CkpCmp => &[
            "Inspect the connector and metal shavings on the CKP sensor.",
            "Measure: inductive 500-1,500 Ohm; Hall 5 V with a square signal.",
            "Adjust the reluctor gap and confirm CKP-CMP correlation.",
        ],
        SubsystemTag::TpsAppEtc => &[
            "Verify 5 V reference and ground.",
            "Watch the TPS: sweep 0.5 V to 4.5 V without dropouts.",
            "Relearn the throttle body baseline; clean if dirty.",
        ],
        SubsystemTag::IdleVss => &[
            "Check IAC/ETC: steps or % consistent with idle speed.",
            "Hunt vacuum leaks (hoses, PCV) when rpm runs high.",
            "Confirm VSS agrees with actual vehicle speed.",
        ],
        SubsystemTag::EcuRef => &[
            "Check the shared 5 V lines (one shorted sensor drags the whole bus down).",
            "Verify the main relay and ECU grounds (drop below 0.2 V).",
            "Check CAN continuity and terminations.",
        ],
        SubsystemTag::Transmission | SubsystemTag::General => GENERIC_STEPS,
    }
}

/// Ordered repair recommendations for a tag.
///
/// Tags without a dedicated list fall back to the GENERAL entry.
pub fn recommendations_for(tag: SubsystemTag) -> &'static [&'static str] {
    match tag {
        SubsystemTag::Maf => &[
            "Clean the MAF with dedicated aerosol; do not touch the wire.",
            "Compare g/s against displacement and RPM; rule out leaks upstream of the MAF.",
            "Measure voltage drop on ground and 5 V; repair loose contacts.",
        ],
        SubsystemTag::Map => &[
            "Check vacuum hose and ports; replace if cracked.",
            "Compare MAP with BARO key-on; recalibrate if they diverge.",
            "Test with a vacuum pump (where fitted) and watch the output curve.",
        ],
        SubsystemTag::EctIat => &[
            "Measure resistance cold and hot; replace if out of table.",
            "Compare ECT vs IAT at startup; investigate differences over 3 C.",
            "Check the thermostat if the temperature reading is erratic.",
        ],
        SubsystemTag::O2Heater => &[
            "Check fuses and repair a loose heater ground.",
            "Measure resistance; replace the probe if open or shorted.",
        ],
        SubsystemTag::O2Sensor => &[
            "Force enrichment and confirm a fast response.",
            "Inspect for exhaust leaks upstream of the sensor; reseal joints.",
            "Check engine grounds and clean connection points.",
        ],
        SubsystemTag::Cat => &[
            "Analyze upstream causes (misfire/mixture) before replacing the catalyst.",
            "Measure backpressure; confirm the restriction.",
        ],
        SubsystemTag::Evap => &[
            "Smoke-test for tightness; repair hoses and valves.",
            "Check the fuel cap; replace if it no longer seals.",
        ],
        SubsystemTag::Egr => &[
            "Decarbonize passages and verify the valve seat.",
            "Use the scan tool to command the valve and evaluate engine response.",
        ],
        SubsystemTag::FuelPressure => &[
            "Measure static and dynamic pressure; compare against spec.",
            "Run a delivery test and check voltage drop on the wiring.",
        ],
        SubsystemTag::Injector => &[
            "Ultrasonic cleaning if the balance is off.",
            "Measure resistance and replace the clearly divergent injector.",
        ],
        SubsystemTag::Misfire => &[
            "Swap components (coil/plug) to isolate the cylinder.",
            "Check compression and cylinder leakage.",
        ],
        SubsystemTag::CkpCmp => &[
            "Adjust the reluctor gap and verify timing mark alignment.",
            "Watch the signal with an oscilloscope if available.",
        ],
        SubsystemTag::TpsAppEtc => &[
            "Run the throttle body relearn; clean the plate if it sticks.",
            "Verify APP1/APP2 correlation and repair wiring on dropouts.",
        ],
        SubsystemTag::IdleVss => &[
            "Seal vacuum leaks and check the PCV.",
            "Check carbon buildup in the throttle body/IAC.",
        ],
        SubsystemTag::EcuRef => &[
            "Isolate shorted sensors on the 5 V line by unplugging one at a time.",
            "Verify the main relay and clean ECU grounds.",
        ],
        SubsystemTag::Transmission => &[
            "Scan the TCM and corroborate torque signals from the engine ECU.",
        ],
        SubsystemTag::General => &[
            "Record freeze frame data and compare with customer symptoms.",
            "Update ECU software if an applicable bulletin exists.",
        ],
    }
}
