use std::io::Write;
use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;
use impact_simulator::deflection::{linspace, sweep};
use impact_simulator::export::{sweep as export_sweep, writer_for_path};
use impact_simulator::scenario::model_or_default;
use tracing::info;

#[path = "shared/setup.rs"]
mod setup;

use setup::ThresholdArg;

/// Sweep deflection force against warning time and record which combinations avert impact.
#[derive(Parser, Debug)]
#[command(author, version, about = "Deflection sweep CSV generator")]
struct Cli {
    /// Smallest deflection in cm/s
    #[arg(long, default_value_t = 0.0)]
    force_min: f64,

    /// Largest deflection in cm/s
    #[arg(long, default_value_t = 5.0)]
    force_max: f64,

    /// Number of deflection samples
    #[arg(long, default_value_t = 11)]
    force_steps: usize,

    /// Shortest warning time in years
    #[arg(long, default_value_t = 1.0)]
    warning_min: f64,

    /// Longest warning time in years
    #[arg(long, default_value_t = 20.0)]
    warning_max: f64,

    /// Number of warning-time samples
    #[arg(long, default_value_t = 20)]
    warning_steps: usize,

    /// Model configuration (TOML or YAML); built-in parameters when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Safe-miss threshold variant
    #[arg(long, value_enum)]
    threshold: Option<ThresholdArg>,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,

    /// Enable debug logging
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup::init_tracing(cli.verbose);

    if cli.force_steps == 0 || cli.warning_steps == 0 {
        bail!("step counts must be at least 1");
    }
    if cli.force_max < cli.force_min || cli.warning_max < cli.warning_min {
        bail!("range maximum must not be below its minimum");
    }

    let mut model = model_or_default(cli.config.as_ref())?;
    if let Some(threshold) = cli.threshold {
        model = model.with_threshold(threshold.into());
    }

    let forces = linspace(cli.force_min, cli.force_max, cli.force_steps);
    let warnings = linspace(cli.warning_min, cli.warning_max, cli.warning_steps);
    let points = sweep(&forces, &warnings, &model.trajectory)?;
    let safe = points.iter().filter(|p| !p.will_impact).count();
    info!(points = points.len(), safe, "sweep complete");

    let mut writer = writer_for_path(&cli.output)?;
    export_sweep::write_csv(&mut *writer, &points)?;
    writer.flush()?;
    Ok(())
}
