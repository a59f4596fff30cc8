use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use impact_simulator::deflection::DeflectionScenario;
use impact_simulator::energy::AsteroidProperties;
use impact_simulator::export::{report, writer_for_path};
use impact_simulator::scenario::{find_site, model_or_default, sites_or_default};
use impact_simulator::{Medium, SimulationParams, assess_site, simulate_impact};
use tracing::info;

#[path = "shared/setup.rs"]
mod setup;

use setup::{AmplificationArg, ThresholdArg};

/// Simulate a deflection attempt and report the impact consequences if it fails.
#[derive(Parser, Debug)]
#[command(author, version, about = "Asteroid impact and deflection simulator")]
struct Cli {
    /// Impactor diameter in metres (defaults to the reference body)
    #[arg(long)]
    diameter: Option<f64>,

    /// Impact velocity in km/s (defaults to the reference body)
    #[arg(long)]
    velocity: Option<f64>,

    /// Bulk density in kg/m³ (defaults to the reference body)
    #[arg(long)]
    density: Option<f64>,

    /// Measured mass in kg, overriding the value derived from diameter and density
    #[arg(long)]
    mass: Option<f64>,

    /// Deflection velocity change in cm/s
    #[arg(long, default_value_t = 2.5)]
    deflection: f64,

    /// Warning time in years
    #[arg(long, default_value_t = 10.0)]
    warning_years: f64,

    /// Impact medium
    #[arg(long, value_enum, default_value_t = MediumArg::Land)]
    medium: MediumArg,

    /// Named impact site from the catalog (overrides --medium)
    #[arg(long)]
    site: Option<String>,

    /// Model configuration (TOML or YAML); built-in parameters when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Impact-site catalog (YAML file or directory of TOML files)
    #[arg(long)]
    sites: Option<PathBuf>,

    /// Safe-miss threshold variant
    #[arg(long, value_enum)]
    threshold: Option<ThresholdArg>,

    /// Coastal tsunami amplification variant
    #[arg(long, value_enum)]
    amplification: Option<AmplificationArg>,

    /// Write a JSON report to this path ('-' for stdout) instead of the text summary
    #[arg(long)]
    json: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short, default_value_t = false)]
    verbose: bool,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum MediumArg {
    Land,
    Ocean,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup::init_tracing(cli.verbose);

    let mut model = model_or_default(cli.config.as_ref())?;
    if let Some(threshold) = cli.threshold {
        model = model.with_threshold(threshold.into());
    }
    if let Some(amplification) = cli.amplification {
        model = model.with_amplification(amplification.into());
    }
    info!(version = %model.version, "model loaded");

    let body = &model.reference_body;
    let mut asteroid = AsteroidProperties::new(
        cli.diameter.unwrap_or(body.diameter_m),
        cli.velocity.unwrap_or(body.velocity_km_s),
        cli.density.unwrap_or(body.density_kg_m3),
    )?;
    if let Some(mass) = cli.mass {
        asteroid = asteroid.with_mass(mass)?;
    }
    let deflection = DeflectionScenario::new(cli.deflection, cli.warning_years)?;

    let medium = match cli.medium {
        MediumArg::Land => Medium::Land,
        MediumArg::Ocean => Medium::Ocean,
    };
    let params = SimulationParams::new(asteroid, deflection, medium);
    params
        .check_ranges()
        .context("parameters outside the simulator's supported range")?;

    let outcome = match &cli.site {
        Some(name) => {
            let sites = sites_or_default(cli.sites.as_ref())?;
            let site = find_site(&sites, name)?;
            assess_site(&site, params.asteroid, params.deflection, &model)?
        }
        None => simulate_impact(&params, &model)?,
    };

    match &cli.json {
        Some(path) => {
            let mut writer = writer_for_path(path)?;
            report::write_json(&mut *writer, &outcome, &model)?;
            writer.flush()?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            report::write_text(&mut lock, &outcome)?;
        }
    }

    Ok(())
}
