use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use structopt::StructOpt;

use scaling_report::grid::GridShape;
use scaling_report::stats::ScalingSummary;
use scaling_report::{log_parse, plot, report};

/// Report speedup and efficiency from a parallel benchmark log.
///
/// The log is expected to contain one "Elapsed time" line per run,
/// cycling over process counts 1..procs and repeating for each trial.
#[derive(Debug, StructOpt)]
#[structopt(name = "scaling-report")]
struct Opt {
    /// Benchmark log to read.
    #[structopt(parse(from_os_str))]
    log: PathBuf,

    /// Number of worker-process counts covered by the log.
    #[structopt(long, default_value = "4")]
    procs: usize,

    /// Number of repeated trials per process count.
    #[structopt(long, default_value = "5")]
    trials: usize,

    /// Also write the per-process-count table to this CSV file.
    #[structopt(long, parse(from_os_str))]
    csv: Option<PathBuf>,

    /// Also write a speedup/efficiency chart to this SVG file.
    #[structopt(long, parse(from_os_str))]
    plot: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let opt = Opt::from_args();

    if let Err(err) = run(&opt) {
        eprintln!("scaling-report: {}", err);
        process::exit(1);
    }
}

fn run(opt: &Opt) -> Result<(), Box<dyn Error>> {
    let shape = GridShape::new(opt.procs, opt.trials)?;
    let grid = log_parse::scan_file(&opt.log, shape)?;
    let summary = ScalingSummary::from_grid(&grid);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report::print_summary(&mut out, &summary)?;
    out.flush()?;

    if let Some(path) = &opt.csv {
        report::write_csv(path, &summary)?;
    }
    if let Some(path) = &opt.plot {
        plot::write_plot(&summary, "Benchmark scaling", path)?;
    }
    Ok(())
}
