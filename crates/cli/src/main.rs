//! Cache simulator CLI.
//!
//! Replays a memory trace against a set-associative cache and prints the
//! totals. It supports:
//! 1. **Geometry flags:** `-s`, `-E`, `-b` as in the classic cache lab.
//! 2. **Config files:** `-c geometry.json`; explicit flags override its fields.
//! 3. **Verbose mode:** `-v` prints the outcome of every data operation.

use std::error::Error;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use csim_core::{CacheGeometry, PartialGeometry, SimError, simulate_file};

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    author,
    version,
    about = "Trace-driven set-associative cache simulator",
    long_about = "Replay a memory trace against an LRU set-associative cache and report hits, misses, and evictions.\n\nExamples:\n  csim -s 4 -E 1 -b 4 -t traces/yi.trace\n  csim -v -s 1 -E 2 -b 4 -t traces/dave.trace\n  csim -c l1.json -t traces/long.trace"
)]
struct Cli {
    /// Number of set-index bits (S = 2^s sets).
    #[arg(short = 's', value_name = "BITS")]
    set_bits: Option<u32>,

    /// Associativity (lines per set).
    #[arg(short = 'E', value_name = "LINES")]
    lines_per_set: Option<usize>,

    /// Number of block bits (B = 2^b bytes per block).
    #[arg(short = 'b', value_name = "BITS")]
    block_bits: Option<u32>,

    /// Trace file to replay.
    #[arg(short = 't', value_name = "PATH")]
    trace: PathBuf,

    /// JSON file holding a geometry (`{"s": 4, "E": 1, "b": 4}`).
    #[arg(short = 'c', long = "config", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the outcome of every data operation before the summary.
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Cli {
    /// Resolves the geometry: config file fields first, explicit flags on top.
    ///
    /// Every one of `s`, `E`, `b` must come from one of the two sources; the
    /// merged geometry is validated once.
    fn geometry(&self) -> Result<CacheGeometry, SimError> {
        let flags = PartialGeometry {
            set_bits: self.set_bits,
            lines_per_set: self.lines_per_set,
            block_bits: self.block_bits,
        };
        let base = match &self.config {
            Some(path) => PartialGeometry::from_json_file(path)?,
            None => PartialGeometry::default(),
        };
        base.overridden_by(flags).resolve()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli, &mut io::stdout().lock()) {
        eprintln!("csim: {e}");
        let mut cause = e.source();
        while let Some(inner) = cause {
            eprintln!("  caused by: {inner}");
            cause = inner.source();
        }
        process::exit(e.exit_code());
    }
}

/// Runs one simulation and writes the report to `out`.
///
/// Verbose lines are held back until the whole trace has been replayed, so a
/// failed run writes nothing.
fn run(cli: &Cli, out: &mut impl Write) -> Result<(), SimError> {
    let geometry = cli.geometry()?;
    info!(
        s = geometry.set_bits,
        e = geometry.lines_per_set,
        b = geometry.block_bits,
        trace = %cli.trace.display(),
        "starting simulation"
    );

    let mut report = String::new();
    let verbose = cli.verbose;
    let stats = simulate_file(&cli.trace, geometry, |op, outcome| {
        if verbose && op.kind.access_count() > 0 {
            report.push_str(&format!("{op} {outcome}\n"));
        }
    })?;
    info!(hit_rate = stats.hit_rate(), "simulation complete");

    report.push_str(&format!("{stats}\n"));
    out.write_all(report.as_bytes())
        .and_then(|()| out.flush())
        .map_err(SimError::output)
}
