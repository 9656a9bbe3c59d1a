//! # ZHopKit
//!
//! A post-processor for 3D printer G-code that lifts the nozzle over
//! travel moves. Every non-extruding XY move is replaced by a move to a peak
//! part of the way along the travel, raised by a hop height that grows with
//! the travel distance, followed by a descent to the real target.
//!
//! ## Architecture
//!
//! 1. **zhopkit-core** - Positions and error types
//! 2. **zhopkit-settings** - Settings file lookup, loading and validation
//! 3. **zhopkit-processor** - Line classification, position tracking, run
//!    grouping, hop synthesis and file I/O
//! 4. **zhopkit** - Command-line binary tying the crates together

pub mod cli;

pub use cli::{Args, DEFAULT_INPUT};

pub use zhopkit_core::{Error, GcodeError, PartialPosition, Position, Result};
pub use zhopkit_processor::{
    GcodeFileReader, GcodeFileWriter, HopPipeline, HopSynthesizer, PositionTracker,
    ProcessingStats, TravelRun,
};
pub use zhopkit_settings::{locate_settings_file, HopSettings};

use anyhow::Context;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Honours `RUST_LOG`, defaulting to INFO. Output goes to stderr so that
/// `--json` statistics on stdout stay machine-readable.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Process one file as described by `args`.
///
/// Settings and input are resolved before anything is written, so a
/// failure at either step leaves the program file untouched.
pub fn run(args: &Args) -> anyhow::Result<ProcessingStats> {
    tracing::info!("ZHopKit {} (built {})", VERSION, BUILD_DATE);

    let settings_path = locate_settings_file(args.config.as_deref())
        .context("Failed to locate settings file")?;
    let settings = HopSettings::load_from_file(&settings_path)
        .with_context(|| format!("Failed to load settings from {}", settings_path.display()))?;

    let reader = GcodeFileReader::new(&args.input)
        .with_context(|| format!("Failed to open {}", args.input.display()))?;
    let lines = reader
        .read_lines()
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let mut pipeline = HopPipeline::new(settings);
    let output = pipeline.process(&lines);
    let stats = pipeline.stats().clone();

    if args.dry_run {
        tracing::info!("Dry run, nothing written");
    } else {
        let destination = args.output_path();
        GcodeFileWriter::new(destination)
            .write_lines(&output)
            .with_context(|| format!("Failed to write {}", destination.display()))?;
        tracing::info!("Wrote {}", destination.display());
    }

    tracing::info!("{}", stats);
    Ok(stats)
}
