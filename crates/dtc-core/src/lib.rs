//! Classification and report-assembly engine for generic powertrain DTCs
//! (P0001-P0999).
//!
//! Raw text goes through [`parser::parse_codes`], each code through
//! [`classifier::classify`], and [`assembler::assemble`] joins the
//! knowledge-base templates and cross-code advisories into ordered
//! [`types::ReportEntry`] records for the rendering boundary.
//!
//! Everything here is pure, synchronous computation over immutable static
//! tables — safe to call from any number of concurrent sessions.

pub mod advisor;
pub mod assembler;
pub mod classifier;
pub mod knowledge;
pub mod parser;
pub mod types;

pub use assembler::assemble;
pub use classifier::classify;
pub use parser::parse_codes;
pub use types::{Classification, CodeNumber, ReportEntry, SubsystemTag};
