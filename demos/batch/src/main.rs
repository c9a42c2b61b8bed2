//! relief-batch — rank areas from an input file and print the allocation
//! report.
//!
//! ```text
//! relief-batch <input.txt> [--config relief.toml] [--json out.json] [--csv out.csv] [--dispatch]
//! ```
//!
//! The text report goes to stdout.  `--json` and `--csv` additionally write
//! the same report to files.  `--dispatch` runs the delivery pass, marking
//! every reachable area as served.  Set `RUST_LOG=info` (or `debug`) for
//! progress on stderr.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use relief_core::ReliefConfig;
use relief_report::{CsvReportWriter, JsonReportWriter, Report, ReportWriter, TextReportWriter};
use relief_session::{PathSelection, SessionBuilder};

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "relief-batch")]
#[command(version)]
#[command(about = "Rank disaster-affected areas and route relief from the center", long_about = None)]
struct Args {
    /// Input file with AREAS / COORDINATES / ROADS sections
    input: PathBuf,

    /// TOML engine configuration; defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write the report as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Also write the report as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Deliver relief in priority order and mark reachable areas served
    #[arg(long)]
    dispatch: bool,
}

fn load_config(path: Option<&Path>) -> Result<ReliefConfig> {
    let Some(path) = path else {
        return Ok(ReliefConfig::default());
    };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("failed to parse config {}", path.display()))
}

// ── Output ────────────────────────────────────────────────────────────────────

fn write_with(mut writer: impl ReportWriter, report: &Report) -> Result<()> {
    writer.write_report(report)?;
    writer.finish()?;
    Ok(())
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let mut session = SessionBuilder::new(config).build()?;
    session
        .load_input_file(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let report = if args.dispatch {
        session.dispatch()?
    } else {
        session.allocate(PathSelection::All)?
    };

    write_with(TextReportWriter::new(io::stdout().lock()), &report)?;

    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
        write_with(JsonReportWriter::new(BufWriter::new(file)), &report)?;
        info!("JSON report written to {}", path.display());
    }

    if let Some(path) = &args.csv {
        write_with(CsvReportWriter::new(path)?, &report)?;
        info!("CSV report written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn args(v: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("relief-batch").chain(v.iter().copied()))
    }

    #[test]
    fn input_and_options() {
        let a = args(&["in.txt", "--json", "r.json", "--csv=r.csv", "-c", "relief.toml"]).unwrap();
        assert_eq!(a.input, PathBuf::from("in.txt"));
        assert_eq!(a.json, Some(PathBuf::from("r.json")));
        assert_eq!(a.csv, Some(PathBuf::from("r.csv")));
        assert_eq!(a.config, Some(PathBuf::from("relief.toml")));
        assert!(!a.dispatch);
        assert!(args(&["in.txt", "--dispatch"]).unwrap().dispatch);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(args(&[]).is_err());
        assert!(args(&["a.txt", "b.txt"]).is_err());
        assert!(args(&["a.txt", "--json"]).is_err());
        assert!(args(&["a.txt", "--verbose"]).is_err());
    }

    #[test]
    fn option_does_not_take_next_flag_as_value() {
        let err = args(&["in.txt", "--csv", "--json"]).unwrap_err();
        assert_ne!(err.kind(), ErrorKind::DisplayHelp);
        assert!(args(&["in.txt", "--csv", "--json", "out.json"]).is_err());
    }

    #[test]
    fn help_is_not_a_failure() {
        let err = args(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn sample_config_parses() {
        let cfg: ReliefConfig = toml::from_str(include_str!("../relief.toml")).unwrap();
        assert_eq!(cfg, ReliefConfig::default());
    }

    #[test]
    fn missing_config_uses_default() {
        assert_eq!(load_config(None).unwrap(), ReliefConfig::default());
    }
}
