//! Extract elapsed-time samples from a parallel benchmark log and
//! derive trimmed-mean, speedup, and efficiency statistics per
//! worker-process count.

pub mod error;
pub mod grid;
pub mod log_parse;
pub mod plot;
pub mod report;
pub mod stats;
