use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};

use crate::error::StatsError;
use crate::grid::{FilledGrid, GridShape, SampleGrid};

/// Substring identifying measurement lines in the benchmark log.
pub const MARKER: &str = "Elapsed time";

/// Byte offset of the numeric field in a marker line. The benchmark
/// prints `Elapsed time: %f`, so the value starts right after the
/// 14-byte `"Elapsed time: "` prefix and runs to the end of the line.
const VALUE_OFFSET: usize = 14;

/// Pull the elapsed seconds out of a marker line.
///
/// The fixed-offset contract follows the benchmark's output format;
/// any change to that format only needs to touch this function.
pub fn extract_elapsed(line: &str, line_no: usize) -> Result<f64, StatsError> {
    let field = line
        .get(VALUE_OFFSET..)
        .ok_or_else(|| StatsError::BadElapsedLine {
            line_no,
            reason: format!(
                "line is {} bytes, value expected at byte {}",
                line.len(),
                VALUE_OFFSET
            ),
        })?;
    field
        .trim_end()
        .parse()
        .map_err(|_| StatsError::BadElapsedLine {
            line_no,
            reason: format!("{:?} is not a decimal number", field),
        })
}

/// Scan a benchmark log and fill the measurement grid.
///
/// Lines without the marker are skipped. The scan fails if a marker
/// line carries a malformed value, if more marker lines appear than
/// the grid has cells, or if the log ends before the grid is full.
pub fn scan<R: BufRead>(reader: R, path: &Path, shape: GridShape) -> Result<FilledGrid, StatsError> {
    let mut grid = SampleGrid::new(shape);
    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| StatsError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        if !line.contains(MARKER) {
            continue;
        }
        let elapsed = extract_elapsed(&line, idx + 1)?;
        debug!("line {}: elapsed {}s", idx + 1, elapsed);
        grid.push(elapsed)?;
    }
    let filled = grid.finish()?;
    info!(
        "collected {} samples from {}: {} process counts x {} trials",
        shape.cells(),
        path.display(),
        shape.procs,
        shape.trials
    );
    Ok(filled)
}

pub fn scan_file(path: &Path, shape: GridShape) -> Result<FilledGrid, StatsError> {
    let file = File::open(path).map_err(|source| StatsError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    scan(BufReader::new(file), path, shape)
}
