use crate::grid::FilledGrid;

/// Mean of a sample with its smallest and largest values discarded.
///
/// Callers guarantee at least three values via `GridShape::new`.
pub fn trimmed_mean(samples: &[f64]) -> f64 {
    debug_assert!(samples.len() > 2);
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let kept = &sorted[1..sorted.len() - 1];
    kept.iter().sum::<f64>() / kept.len() as f64
}

/// Per-process-count scaling statistics derived from a filled grid.
///
/// Index `i` corresponds to process count `i + 1`; index 0 is the
/// single-process baseline, so `speedup[0]` and `efficiency[0]` are
/// always 1.
pub struct ScalingSummary {
    pub mean: Vec<f64>,
    pub speedup: Vec<f64>,
    pub efficiency: Vec<f64>,
}

impl ScalingSummary {
    pub fn from_grid(grid: &FilledGrid) -> Self {
        let procs = grid.shape().procs;
        let mean: Vec<f64> = (0..procs).map(|i| trimmed_mean(grid.row(i))).collect();
        let baseline = mean[0];
        let speedup: Vec<f64> = mean.iter().map(|m| baseline / m).collect();
        let efficiency: Vec<f64> = mean
            .iter()
            .enumerate()
            .map(|(i, m)| baseline / (m * (i + 1) as f64))
            .collect();
        Self {
            mean,
            speedup,
            efficiency,
        }
    }
}
