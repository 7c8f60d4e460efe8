//! Run Report
//!
//! Text layout, one block per protein:
//!
//! ```text
//!
//! Tau 0 - Truncated: true, Site: D421
//!   - Phosphorylated at S231
//!   - Truncated at D421
//!   - Unbound from microtubule
//! ```

use std::io::{self, Write};
use tau_events::RunSnapshot;

use crate::components::TauProtein;

/// Output layout for the binary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Writes the text report for `population`, in the order given.
pub fn write_report<W: Write>(population: &[TauProtein], out: &mut W) -> io::Result<()> {
    for protein in population {
        let site = protein
            .truncation_site()
            .map_or_else(|| "none".to_string(), |s| s.to_string());
        writeln!(out)?;
        writeln!(
            out,
            "Tau {} - Truncated: {}, Site: {}",
            protein.id(),
            protein.is_truncated(),
            site
        )?;
        for event in protein.history() {
            writeln!(out, "  - {}", event)?;
        }
    }
    Ok(())
}

/// Writes the text report to stdout.
pub fn report(population: &[TauProtein]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(population, &mut out)?;
    out.flush()
}

/// Writes `snapshot` as pretty-printed JSON followed by a newline.
pub fn write_json_report<W: Write>(snapshot: &RunSnapshot, out: &mut W) -> io::Result<()> {
    let json = snapshot.to_json_pretty()?;
    writeln!(out, "{}", json)
}
