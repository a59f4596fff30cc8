//! Configuration models and loaders for the impact simulator.
//!
//! All default physical parameters are gathered into a single versioned
//! [`ModelConfig`]. Computation crates receive the pieces they need by
//! reference; none of them reach for module-level defaults on their own.

use std::fs::File;
use std::path::{Path, PathBuf};

use impact_core::constants::{crater, ejecta, trajectory, tsunami};
use impact_core::{ParameterError, ensure_positive};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod variants;

pub use variants::{CoastalAmplificationVariant, SafeThresholdVariant};

/// Version tag of the built-in model parameters.
pub const MODEL_VERSION: &str = "2024.1";

/// Complete parameter set consumed by the simulation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub version: String,
    #[serde(default)]
    pub reference_body: ReferenceBody,
    #[serde(default)]
    pub trajectory: TrajectoryPolicy,
    #[serde(default)]
    pub crater: CraterConfig,
    #[serde(default)]
    pub tsunami: TsunamiConfig,
    #[serde(default)]
    pub ejecta: EjectaConfig,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            version: MODEL_VERSION.to_string(),
            reference_body: ReferenceBody::default(),
            trajectory: TrajectoryPolicy::default(),
            crater: CraterConfig::default(),
            tsunami: TsunamiConfig::default(),
            ejecta: EjectaConfig::default(),
        }
    }
}

impl ModelConfig {
    /// Swap the safe-miss threshold for one of the named variants.
    pub fn with_threshold(mut self, variant: SafeThresholdVariant) -> Self {
        self.trajectory.safe_threshold_km = variant.km();
        self
    }

    /// Swap the coastal amplification factor for one of the named variants.
    pub fn with_amplification(mut self, variant: CoastalAmplificationVariant) -> Self {
        self.tsunami.amplification = variant.factor();
        self
    }

    /// Check every coefficient that must be strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let body = &self.reference_body;
        ensure_positive("reference_body.diameter_m", body.diameter_m)?;
        ensure_positive("reference_body.mass_kg", body.mass_kg)?;
        ensure_positive("reference_body.density_kg_m3", body.density_kg_m3)?;
        ensure_positive("reference_body.velocity_km_s", body.velocity_km_s)?;
        ensure_positive("trajectory.safe_threshold_km", self.trajectory.safe_threshold_km)?;
        if !self.trajectory.baseline_offset_km.is_finite() {
            return Err(ParameterError::InvalidParameter {
                name: "trajectory.baseline_offset_km",
                value: self.trajectory.baseline_offset_km,
                reason: "must be finite",
            }
            .into());
        }
        self.crater.land.validate("crater.land")?;
        self.crater.ocean.validate("crater.ocean")?;
        ensure_positive("crater.ejecta_blanket_ratio", self.crater.ejecta_blanket_ratio)?;
        ensure_positive("tsunami.amplitude_fraction", self.tsunami.amplitude_fraction)?;
        ensure_positive("tsunami.water_depth_km", self.tsunami.water_depth_km)?;
        ensure_positive("tsunami.initial_height_cap_m", self.tsunami.initial_height_cap_m)?;
        ensure_positive("tsunami.amplification", self.tsunami.amplification)?;
        ensure_positive("tsunami.inundation_factor", self.tsunami.inundation_factor)?;
        ensure_positive("ejecta.near_distance_m", self.ejecta.near_distance_m)?;
        ensure_positive("ejecta.far_distance_m", self.ejecta.far_distance_m)?;
        Ok(())
    }
}

/// Physical description of the body the simulator is built around (101955 Bennu).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceBody {
    pub name: String,
    pub diameter_m: f64,
    pub mass_kg: f64,
    pub density_kg_m3: f64,
    pub velocity_km_s: f64,
    pub rotation_period_hours: f64,
    pub composition: String,
    pub orbit: ReferenceOrbit,
}

impl Default for ReferenceBody {
    fn default() -> Self {
        Self {
            name: "101955 Bennu".to_string(),
            diameter_m: 492.0,
            mass_kg: 7.33e10,
            density_kg_m3: 1190.0,
            velocity_km_s: 12.7,
            rotation_period_hours: 4.296,
            composition: "B-type carbonaceous".to_string(),
            orbit: ReferenceOrbit::default(),
        }
    }
}

/// Heliocentric orbital elements of the reference body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceOrbit {
    pub period_days: f64,
    pub semi_major_axis_au: f64,
    pub eccentricity: f64,
    pub inclination_deg: f64,
    pub perihelion_au: f64,
    pub aphelion_au: f64,
}

impl Default for ReferenceOrbit {
    fn default() -> Self {
        Self {
            period_days: 436.6,
            semi_major_axis_au: 1.126,
            eccentricity: 0.20375,
            inclination_deg: 6.0349,
            perihelion_au: 0.8969,
            aphelion_au: 1.3559,
        }
    }
}

/// Where the undeflected trajectory sits and how far it must be pushed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPolicy {
    /// Signed offset of the undeflected trajectory (km).
    pub baseline_offset_km: f64,
    /// Minimum miss distance counted as safe (km).
    pub safe_threshold_km: f64,
}

impl Default for TrajectoryPolicy {
    fn default() -> Self {
        Self {
            baseline_offset_km: trajectory::BASELINE_OFFSET_KM,
            safe_threshold_km: SafeThresholdVariant::Simulator.km(),
        }
    }
}

impl TrajectoryPolicy {
    /// Policy used by the countdown mission.
    pub fn mission() -> Self {
        Self {
            baseline_offset_km: trajectory::BASELINE_OFFSET_KM,
            safe_threshold_km: SafeThresholdVariant::Mission.km(),
        }
    }
}

/// One coefficient set of the reduced crater scaling law.
///
/// `D = coefficient · Mt^energy_exponent · target_term^target_exponent
///      · projectile_density^projectile_density_exponent
///      · secondary_term^secondary_exponent` (km).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraterCoefficients {
    pub coefficient: f64,
    pub energy_exponent: f64,
    pub target_term: f64,
    pub target_exponent: f64,
    pub projectile_density_kg_m3: f64,
    pub projectile_density_exponent: f64,
    pub secondary_term: f64,
    pub secondary_exponent: f64,
    pub depth_ratio: f64,
}

impl CraterCoefficients {
    /// Crystalline rock target under Earth gravity.
    pub fn land() -> Self {
        Self {
            coefficient: crater::LAND_COEFFICIENT,
            energy_exponent: crater::ENERGY_EXPONENT,
            target_term: crater::LAND_TARGET_DENSITY_KG_M3,
            target_exponent: crater::LAND_TARGET_EXPONENT,
            projectile_density_kg_m3: crater::PROJECTILE_DENSITY_KG_M3,
            projectile_density_exponent: crater::PROJECTILE_DENSITY_EXPONENT,
            secondary_term: crater::LAND_GRAVITY_M_S2,
            secondary_exponent: crater::LAND_GRAVITY_EXPONENT,
            depth_ratio: crater::LAND_DEPTH_RATIO,
        }
    }

    /// Seafloor target below deep water at a 45 degree impact angle.
    pub fn ocean() -> Self {
        Self {
            coefficient: crater::OCEAN_COEFFICIENT,
            energy_exponent: crater::ENERGY_EXPONENT,
            target_term: crater::OCEAN_TARGET_TERM,
            target_exponent: crater::OCEAN_TARGET_EXPONENT,
            projectile_density_kg_m3: crater::PROJECTILE_DENSITY_KG_M3,
            projectile_density_exponent: crater::PROJECTILE_DENSITY_EXPONENT,
            secondary_term: crater::OCEAN_ANGLE_TERM_DEG,
            secondary_exponent: crater::OCEAN_ANGLE_EXPONENT,
            depth_ratio: crater::OCEAN_DEPTH_RATIO,
        }
    }

    fn validate(&self, prefix: &'static str) -> Result<(), ParameterError> {
        ensure_positive(prefix, self.coefficient)?;
        ensure_positive(prefix, self.target_term)?;
        ensure_positive(prefix, self.projectile_density_kg_m3)?;
        ensure_positive(prefix, self.secondary_term)?;
        ensure_positive(prefix, self.depth_ratio)?;
        Ok(())
    }
}

/// Crater coefficient sets for both media.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CraterConfig {
    pub land: CraterCoefficients,
    pub ocean: CraterCoefficients,
    pub ejecta_blanket_ratio: f64,
}

impl Default for CraterConfig {
    fn default() -> Self {
        Self {
            land: CraterCoefficients::land(),
            ocean: CraterCoefficients::ocean(),
            ejecta_blanket_ratio: crater::EJECTA_BLANKET_RATIO,
        }
    }
}

/// Tsunami generation and coastal run-up parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TsunamiConfig {
    pub amplitude_fraction: f64,
    pub depth_ratio_exponent: f64,
    pub water_depth_km: f64,
    pub initial_height_cap_m: f64,
    pub amplification: f64,
    pub inundation_factor: f64,
}

impl Default for TsunamiConfig {
    fn default() -> Self {
        Self {
            amplitude_fraction: tsunami::AMPLITUDE_FRACTION,
            depth_ratio_exponent: tsunami::DEPTH_RATIO_EXPONENT,
            water_depth_km: tsunami::REFERENCE_WATER_DEPTH_KM,
            initial_height_cap_m: tsunami::INITIAL_HEIGHT_CAP_M,
            amplification: CoastalAmplificationVariant::Simulator.factor(),
            inundation_factor: tsunami::INUNDATION_FACTOR,
        }
    }
}

/// Ejecta deposit parameters for land impacts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EjectaConfig {
    pub near_distance_m: f64,
    pub far_distance_m: f64,
    pub near_retention: f64,
    pub far_retention: f64,
    pub near_floor_m: f64,
    pub far_floor_m: f64,
}

impl Default for EjectaConfig {
    fn default() -> Self {
        Self {
            near_distance_m: ejecta::NEAR_DISTANCE_M,
            far_distance_m: ejecta::FAR_DISTANCE_M,
            near_retention: ejecta::NEAR_RETENTION,
            far_retention: ejecta::FAR_RETENTION,
            near_floor_m: ejecta::NEAR_FLOOR_M,
            far_floor_m: ejecta::FAR_FLOOR_M,
        }
    }
}

/// Kind of impact site listed in a scenario catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    Ocean,
    Land,
    Simulation,
}

/// Named impact location from a scenario catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImpactSite {
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub kind: SiteKind,
    pub description: String,
    #[serde(default)]
    pub allow_deflection: bool,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("configuration rejected: {0}")]
    Invalid(#[from] ParameterError),
}

/// Load and validate a model configuration from a TOML or YAML file.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<ModelConfig, ConfigError> {
    let path = path.as_ref();
    let model: ModelConfig = if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    model.validate()?;
    Ok(model)
}

/// Load impact sites from a YAML list, a single TOML file, or a directory of TOML files.
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<ImpactSite>, ConfigError> {
    load_records(path)
}

/// Built-in site catalog matching `data/scenarios/sites.yaml`.
pub fn default_sites() -> Vec<ImpactSite> {
    vec![
        ImpactSite {
            name: "Atlantic Ocean Impact".to_string(),
            latitude_deg: 33.0,
            longitude_deg: -65.0,
            kind: SiteKind::Ocean,
            description: "Fixed deep-ocean impact between New York and Bermuda".to_string(),
            allow_deflection: false,
        },
        ImpactSite {
            name: "Central USA Impact".to_string(),
            latitude_deg: 40.0,
            longitude_deg: -100.0,
            kind: SiteKind::Land,
            description: "Fixed inland impact in the central United States".to_string(),
            allow_deflection: false,
        },
        ImpactSite {
            name: "Real Simulation Mode".to_string(),
            latitude_deg: 35.0,
            longitude_deg: -90.0,
            kind: SiteKind::Simulation,
            description: "Apply a deflection force to change the trajectory".to_string(),
            allow_deflection: true,
        },
    ]
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_model_is_valid_and_versioned() {
        let model = ModelConfig::default();
        assert_eq!(model.version, MODEL_VERSION);
        assert!(model.validate().is_ok());
        assert_eq!(model.trajectory.safe_threshold_km, 2500.0);
        assert_eq!(model.trajectory.baseline_offset_km, -500.0);
        assert_eq!(model.tsunami.amplification, 5.0);
    }

    #[test]
    fn variants_swap_threshold_and_amplification() {
        let model = ModelConfig::default()
            .with_threshold(SafeThresholdVariant::Extended)
            .with_amplification(CoastalAmplificationVariant::RunUpHigh);
        assert_eq!(model.trajectory.safe_threshold_km, 2700.0);
        assert_eq!(model.tsunami.amplification, 50.0);
        assert_eq!(TrajectoryPolicy::mission().safe_threshold_km, 2000.0);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("model.toml");
        let mut file = File::create(&path).expect("create");
        writeln!(
            file,
            "version = \"test\"\n\n[trajectory]\nbaseline_offset_km = 0.0\nsafe_threshold_km = 2000.0"
        )
        .unwrap();

        let model = load_model(&path).expect("model");
        assert_eq!(model.version, "test");
        assert_eq!(model.trajectory.baseline_offset_km, 0.0);
        assert_eq!(model.reference_body, ReferenceBody::default());
        assert_eq!(model.crater, CraterConfig::default());
    }

    #[test]
    fn invalid_coefficient_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("model.yaml");
        let mut model = ModelConfig::default();
        model.tsunami.amplification = 0.0;
        std::fs::write(&path, serde_yaml::to_string(&model).unwrap()).unwrap();

        match load_model(&path) {
            Err(ConfigError::Invalid(err)) => assert_eq!(err.name(), "tsunami.amplification"),
            other => panic!("expected invalid config, got {other:?}"),
        }
    }

    #[test]
    fn sites_load_from_toml_directory_in_name_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        for (file, name, kind) in [("b.toml", "Second", "land"), ("a.toml", "First", "ocean")] {
            std::fs::write(
                dir.path().join(file),
                format!(
                    "name = \"{name}\"\nlatitude_deg = 1.0\nlongitude_deg = 2.0\nkind = \"{kind}\"\ndescription = \"x\"\n"
                ),
            )
            .unwrap();
        }
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let sites = load_sites(dir.path()).expect("sites");
        assert_eq!(sites.len(), 2);
        assert_eq!(sites[0].name, "First");
        assert_eq!(sites[0].kind, SiteKind::Ocean);
        assert!(!sites[1].allow_deflection);
    }
}
