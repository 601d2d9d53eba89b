use std::error::Error;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::stats::ScalingSummary;

fn format_vector(values: &[f64]) -> String {
    let cells: Vec<String> = values.iter().map(|v| format!("{:.4}", v)).collect();
    format!("[{}]", cells.join(", "))
}

/// Three-line report: the trimmed mean vector, then speedup, then
/// efficiency, each entry corresponding to process counts 1, 2, ...
pub fn print_summary<W: Write>(out: &mut W, summary: &ScalingSummary) -> std::io::Result<()> {
    writeln!(out, "Mean elapsed (s) = {}", format_vector(&summary.mean))?;
    writeln!(out, "Speedup = {}", format_vector(&summary.speedup))?;
    writeln!(out, "Efficiency = {}", format_vector(&summary.efficiency))?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct ScalingRecord {
    procs: usize,
    mean_elapsed: f64,
    speedup: f64,
    efficiency: f64,
}

/// Write the per-process-count table as CSV, one record per row.
pub fn write_csv(path: &Path, summary: &ScalingSummary) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for i in 0..summary.mean.len() {
        writer.serialize(ScalingRecord {
            procs: i + 1,
            mean_elapsed: summary.mean[i],
            speedup: summary.speedup[i],
            efficiency: summary.efficiency[i],
        })?;
    }
    writer.flush()?;
    Ok(())
}
