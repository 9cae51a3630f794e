//! liftsim — run the stacked-cab elevator bank simulator from the command line.
//!
//! Prints the long-form report with `--verbose`, otherwise one line
//! `arrivals,exits,avg_wait,avg_total` suitable for collecting many runs into
//! a CSV file.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;

use lift_core::{DispatchAlgorithm, SimConfig, Tick};
use lift_output::{Report, TripLogObserver};
use lift_sim::{NoopObserver, SimBuilder};

#[cfg(not(feature = "sqlite"))]
type TripWriter = lift_output::CsvWriter;

#[cfg(feature = "sqlite")]
type TripWriter = lift_output::SqliteWriter;

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Stacked-cab elevator bank simulator
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Dispatch algorithm: a/1 (avoid collision) or b/2 (collision cost)
    #[arg(long, short)]
    algo: Option<DispatchAlgorithm>,

    /// Trace every assignment and print the long-form report
    #[arg(long, short)]
    verbose: bool,

    /// Master random seed
    #[arg(long, short)]
    seed: Option<u64>,

    /// Simulated seconds to run
    #[arg(long)]
    horizon: Option<u64>,

    /// JSON file with SimConfig fields; missing fields keep their defaults
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Directory to write the per-passenger trip log into
    #[arg(long)]
    trips: Option<PathBuf>,
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;
    init_logger(config.verbose);

    let mut sim = SimBuilder::new(config.clone())
        .build()
        .context("building simulation")?;

    let summary = match &args.trips {
        Some(dir) => {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating {}", dir.display()))?;
            let mut observer = TripLogObserver::new(open_writer(dir)?);
            let summary = sim.run(&mut observer)?;
            if let Some(e) = observer.take_error() {
                return Err(e).context("writing trip log");
            }
            log::info!("{} trips written to {}", observer.trips_written(), dir.display());
            summary
        }
        None => sim.run(&mut NoopObserver)?,
    };

    let report = Report::new(config.algorithm, &summary);
    if config.verbose {
        println!("{}", report.verbose());
    } else {
        println!("{}", report.quiet_line()?);
    }
    Ok(())
}

/// Defaults, then the JSON file, then command-line flags.
fn resolve_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            serde_json::from_reader(BufReader::new(file))
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => SimConfig::default(),
    };

    if let Some(algorithm) = args.algo {
        config.algorithm = algorithm;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(horizon) = args.horizon {
        config.horizon = Tick(horizon);
    }
    config.verbose |= args.verbose;
    Ok(config)
}

fn init_logger(verbose: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        for module in ["lift_dispatch", "lift_sim", "lift_output"] {
            builder.filter_module(module, LevelFilter::Debug);
        }
    }
    builder.format_timestamp(None).init();
}

fn open_writer(dir: &Path) -> Result<TripWriter> {
    TripWriter::new(dir).with_context(|| format!("opening trip log in {}", dir.display()))
}
