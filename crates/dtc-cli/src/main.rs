//! dtc-advisor — turn raw DTC input into a workshop diagnostic report.
//!
//! Reads codes from the command line, classifies them against the range
//! table and prints (or exports) the assembled report.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dtc_cli::config::ReportConfig;
use dtc_cli::{NO_CODES_WARNING, export, scan};
use dtc_report::{PlainTextRenderer, REPORT_TITLE, render_report};

#[derive(Parser, Debug)]
#[command(name = "dtc-advisor", version, about = "Engine DTC diagnostic report generator")]
struct Cli {
    /// Codes to diagnose, free-form (e.g. "P0171, P0300 p420").
    #[arg(required = true)]
    codes: Vec<String>,

    /// Output machine-readable JSON instead of the text report.
    #[arg(long)]
    json: bool,

    /// Export the report to a paginated document in this directory.
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// Optional report config (TOML).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ReportConfig::from_file(&path.to_string_lossy())?,
        None => ReportConfig::default(),
    };

    let input = cli.codes.join(" ");
    let Some(entries) = scan(&input) else {
        eprintln!("{NO_CODES_WARNING}");
        return Ok(());
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{REPORT_TITLE}");
        println!("{}\n", config.attribution);
        print!("{}", render_report(&entries));
    }

    if let Some(dir) = &cli.export {
        let renderer = PlainTextRenderer::new(config.lines_per_page);
        // Export failure is reported but never unwinds the session or the
        // already-printed report.
        match export(&renderer, &config, entries) {
            Ok((filename, bytes)) => {
                let path = dir.join(filename);
                std::fs::write(&path, bytes)?;
                eprintln!("Report exported to {}", path.display());
            }
            Err(err) => {
                tracing::error!(error = %err, "export failed");
                eprintln!("Could not export the report: {err}");
            }
        }
    }

    Ok(())
}
