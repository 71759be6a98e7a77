//! Run Gather&Compact over one or more instance files.
//!
//! Usage: `tessera <instance.json>...`
//!
//! One tab-separated result line per instance goes to stdout:
//! `name<TAB>gather<TAB>compact<TAB>total`, or `name<TAB><error>` when
//! the algorithm fails on that instance. Exit code 0 when every
//! instance succeeds, 1 when any run fails, 2 for usage or load errors.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{fmt, EnvFilter};

use tessera::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(about = "Reconfigure sliding-square instances into the canonical staircase")]
struct Args {
    /// Instance files to run (JSON, `_version` 1)
    #[arg(required = true)]
    instances: Vec<PathBuf>,

    /// Write the final configuration of the last instance as SVG
    #[arg(long = "svg")]
    svg: Option<PathBuf>,

    /// Suppress the per-instance transcript lines
    #[arg(long)]
    quiet: bool,
}

/// Initialize logging with a default filter.
///
/// Use the `RUST_LOG` environment variable to override the default of
/// warnings only.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn instance_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn fatal(message: impl std::fmt::Display) -> ! {
    // Red `error:` prefix, matching the diagnostic style of the tools
    // this replaces.
    eprintln!("\x1b[31merror:\x1b[0m {message}");
    process::exit(2);
}

fn main() {
    init_logging();
    let args = Args::parse();

    let mut transcript = TranscriptWriter::new(io::stdout().lock());
    let mut failures = 0usize;
    let mut last_world: Option<World> = None;

    for path in &args.instances {
        let name = instance_name(path);
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => fatal(format_args!("cannot open {}: {err}", path.display())),
        };
        let mut world = match load_instance(file) {
            Ok(world) => world,
            Err(err) => fatal(format_args!("{}: {err}", path.display())),
        };
        debug!(instance = %name, cubes = world.len(), "loaded");

        match run_gather_compact(&mut world) {
            Ok(stats) => {
                if !args.quiet {
                    if let Err(err) = transcript.record(&name, stats) {
                        fatal(format_args!("cannot write transcript: {err}"));
                    }
                }
            }
            Err(err) => {
                failures += 1;
                error!(instance = %name, "algorithm failure: {err}");
                if !args.quiet {
                    if let Err(write_err) = transcript.record_error(&name, &err) {
                        fatal(format_args!("cannot write transcript: {write_err}"));
                    }
                }
            }
        }
        last_world = Some(world);
    }

    if let (Some(out), Some(world)) = (&args.svg, &last_world) {
        let file = match File::create(out) {
            Ok(file) => file,
            Err(err) => fatal(format_args!("cannot create {}: {err}", out.display())),
        };
        if let Err(err) = export_svg(world, BufWriter::new(file)) {
            fatal(format_args!("cannot export svg: {err}"));
        }
    }

    if let Err(err) = transcript.flush() {
        fatal(format_args!("cannot flush transcript: {err}"));
    }
    if failures > 0 {
        process::exit(1);
    }
}
