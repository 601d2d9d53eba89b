use crate::error::StatsError;

/// Shape of the measurement grid: one row per worker-process count,
/// one column per repeated trial run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub procs: usize,
    pub trials: usize,
}

impl GridShape {
    /// Trimming drops the min and max of each row, so a shape with
    /// fewer than three trials is rejected up front. A shape with no
    /// rows is rejected too: row 0 is the baseline every ratio divides
    /// by, and an empty grid would sail through the completeness check.
    pub fn new(procs: usize, trials: usize) -> Result<Self, StatsError> {
        if procs == 0 {
            return Err(StatsError::NoProcs);
        }
        if trials <= 2 {
            return Err(StatsError::NotEnoughTrials { trials });
        }
        Ok(Self { procs, trials })
    }

    pub fn cells(&self) -> usize {
        self.procs * self.trials
    }
}

/// Fixed-shape sample storage with a bounded fill cursor.
///
/// Samples arrive in the order the benchmark emits them: the process
/// count cycles fastest (row 0 through procs-1) and the trial column
/// advances each time the cycle wraps. `push` reproduces that order
/// and refuses to wrap past the last cell.
pub struct SampleGrid {
    shape: GridShape,
    values: Vec<f64>,
    filled: usize,
}

impl SampleGrid {
    pub fn new(shape: GridShape) -> Self {
        Self {
            shape,
            values: vec![0.0; shape.cells()],
            filled: 0,
        }
    }

    pub fn push(&mut self, elapsed: f64) -> Result<(), StatsError> {
        if self.filled == self.shape.cells() {
            return Err(StatsError::TooManySamples {
                expected: self.shape.cells(),
            });
        }
        let row = self.filled % self.shape.procs;
        let col = self.filled / self.shape.procs;
        self.values[row * self.shape.trials + col] = elapsed;
        self.filled += 1;
        Ok(())
    }

    /// Fails unless every cell has been assigned, so a partially
    /// filled grid can never reach the statistics stage.
    pub fn finish(self) -> Result<FilledGrid, StatsError> {
        if self.filled != self.shape.cells() {
            return Err(StatsError::IncompleteData {
                found: self.filled,
                expected: self.shape.cells(),
            });
        }
        Ok(FilledGrid {
            shape: self.shape,
            values: self.values,
        })
    }
}

/// A grid with every cell filled, the only form the stats stage accepts.
pub struct FilledGrid {
    shape: GridShape,
    values: Vec<f64>,
}

impl FilledGrid {
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// All trial samples for process count `proc_index + 1`.
    pub fn row(&self, proc_index: usize) -> &[f64] {
        let start = proc_index * self.shape.trials;
        &self.values[start..start + self.shape.trials]
    }
}
