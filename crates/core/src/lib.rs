//! Core units, constants, and shared primitives for the impact simulator workspace.
//!
//! Every coefficient used by the scaling laws lives here under a name, grouped by
//! the law it belongs to, so each value can be checked against its published source.

pub mod error;

pub use error::{ParameterError, ensure_in_range, ensure_non_negative, ensure_positive};

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Joules released by one megaton of TNT.
    pub const JOULES_PER_MEGATON: f64 = 4.184e15;
    /// Seconds per Julian day.
    pub const SECONDS_PER_DAY: f64 = 86_400.0;
    /// Days per Julian year.
    pub const DAYS_PER_YEAR: f64 = 365.25;
    /// Seconds per Julian year.
    pub const SECONDS_PER_YEAR: f64 = DAYS_PER_YEAR * SECONDS_PER_DAY;
    /// Yield of the Tsar Bomba test (megatons), used as a narrative yardstick.
    pub const TSAR_BOMBA_MEGATONS: f64 = 15.0;

    /// Crater scaling (Holsapple-style pi-scaling reduced to energy form).
    pub mod crater {
        /// Exponent applied to energy in megatons.
        pub const ENERGY_EXPONENT: f64 = 0.29;
        /// Projectile density used by the reduced law (kg/m³).
        pub const PROJECTILE_DENSITY_KG_M3: f64 = 1000.0;
        /// Exponent applied to the projectile density term.
        pub const PROJECTILE_DENSITY_EXPONENT: f64 = -0.22;

        /// Land target: leading coefficient.
        pub const LAND_COEFFICIENT: f64 = 1.18;
        /// Land target: crystalline rock density (kg/m³).
        pub const LAND_TARGET_DENSITY_KG_M3: f64 = 2700.0;
        /// Land target: exponent on target density.
        pub const LAND_TARGET_EXPONENT: f64 = 0.11;
        /// Land target: surface gravity term (m/s²).
        pub const LAND_GRAVITY_M_S2: f64 = 9.8;
        /// Land target: exponent on gravity.
        pub const LAND_GRAVITY_EXPONENT: f64 = -0.11;
        /// Land target: crater depth as a fraction of diameter.
        pub const LAND_DEPTH_RATIO: f64 = 0.28;

        /// Ocean target: leading coefficient.
        pub const OCEAN_COEFFICIENT: f64 = 1.24;
        /// Ocean target: seafloor sediment term.
        pub const OCEAN_TARGET_TERM: f64 = 1.6;
        /// Ocean target: exponent on the sediment term.
        pub const OCEAN_TARGET_EXPONENT: f64 = 0.33;
        /// Ocean target: impact angle term (degrees).
        pub const OCEAN_ANGLE_TERM_DEG: f64 = 45.0;
        /// Ocean target: exponent on the angle term.
        pub const OCEAN_ANGLE_EXPONENT: f64 = -0.11;
        /// Ocean target: crater depth as a fraction of diameter.
        pub const OCEAN_DEPTH_RATIO: f64 = 0.25;

        /// Ejecta blanket radius as a multiple of crater diameter.
        pub const EJECTA_BLANKET_RATIO: f64 = 2.5;
    }

    /// Air-blast and thermal scaling (Collins et al. 2005, Glasstone & Dolan).
    pub mod blast {
        /// Fireball radius coefficient (km per Mt^0.4).
        pub const FIREBALL_COEFFICIENT: f64 = 0.28;
        /// Fireball radius exponent.
        pub const FIREBALL_EXPONENT: f64 = 0.4;
        /// 20 psi overpressure radius coefficient (km).
        pub const SEVERE_COEFFICIENT: f64 = 2.2;
        /// 1 psi overpressure radius coefficient (km).
        pub const MODERATE_COEFFICIENT: f64 = 6.5;
        /// Shared overpressure exponent (cube-root scaling).
        pub const OVERPRESSURE_EXPONENT: f64 = 0.33;
        /// Vegetation ignition radius coefficient (km).
        pub const THERMAL_COEFFICIENT: f64 = 1.8;
        /// Vegetation ignition radius exponent.
        pub const THERMAL_EXPONENT: f64 = 0.41;
    }

    /// Seismic scaling (Schultz & Gault energy-magnitude relation).
    pub mod seismic {
        /// Slope applied to log10 of the energy in joules.
        pub const MAGNITUDE_SLOPE: f64 = 0.67;
        /// Offset subtracted after the slope.
        pub const MAGNITUDE_OFFSET: f64 = 5.87;
        /// Upper bound on the reported magnitude.
        pub const MAGNITUDE_CAP: f64 = 9.9;
        /// Slope of log10 radius against magnitude.
        pub const RADIUS_SLOPE: f64 = 0.48;
        /// Intercept for the strong-shaking radius.
        pub const STRONG_SHAKING_INTERCEPT: f64 = -1.27;
        /// Intercept for the felt radius.
        pub const FELT_INTERCEPT: f64 = 0.33;
    }

    /// Tsunami generation and run-up (Ward & Asphaug 2000, reduced form).
    pub mod tsunami {
        /// Cavity amplitude as a fraction of impactor diameter.
        pub const AMPLITUDE_FRACTION: f64 = 0.1;
        /// Exponent on the diameter to water depth ratio.
        pub const DEPTH_RATIO_EXPONENT: f64 = 0.25;
        /// Abyssal water depth the reduced law was calibrated with (km).
        pub const REFERENCE_WATER_DEPTH_KM: f64 = 5.0;
        /// Upper bound on the initial wave height (m).
        pub const INITIAL_HEIGHT_CAP_M: f64 = 1000.0;
        /// Shallow-water amplification used by the simulator.
        pub const SIMULATOR_AMPLIFICATION: f64 = 5.0;
        /// Low end of the run-up amplification range.
        pub const RUN_UP_LOW_AMPLIFICATION: f64 = 20.0;
        /// High end of the run-up amplification range.
        pub const RUN_UP_HIGH_AMPLIFICATION: f64 = 50.0;
        /// Inland inundation distance (km) per kilometre of coastal wave height.
        pub const INUNDATION_FACTOR: f64 = 0.3;
    }

    /// Ejecta deposit thickness on land.
    pub mod ejecta {
        /// Near reference distance (m).
        pub const NEAR_DISTANCE_M: f64 = 10_000.0;
        /// Far reference distance (m).
        pub const FAR_DISTANCE_M: f64 = 30_000.0;
        /// Retention factor at the near distance.
        pub const NEAR_RETENTION: f64 = 0.5;
        /// Retention factor at the far distance.
        pub const FAR_RETENTION: f64 = 0.2;
        /// Minimum reported thickness at the near distance (m).
        pub const NEAR_FLOOR_M: f64 = 5.0;
        /// Minimum reported thickness at the far distance (m).
        pub const FAR_FLOOR_M: f64 = 0.5;
    }

    /// Trajectory policy defaults.
    pub mod trajectory {
        /// Offset of the undeflected trajectory from the safety reference (km).
        pub const BASELINE_OFFSET_KM: f64 = -500.0;
        /// Safe miss distance used by the parameter simulator (km).
        pub const SIMULATOR_SAFE_THRESHOLD_KM: f64 = 2500.0;
        /// Safe miss distance used by the countdown mission (km).
        pub const MISSION_SAFE_THRESHOLD_KM: f64 = 2000.0;
        /// Extended safe miss distance (km).
        pub const EXTENDED_SAFE_THRESHOLD_KM: f64 = 2700.0;
        /// Miss distance below which a pass is reported as marginal (km).
        pub const MARGINAL_MISS_KM: f64 = 1000.0;
    }

    /// Supported input ranges and defaults of the interactive simulator.
    pub mod ranges {
        /// Smallest impactor diameter accepted (m).
        pub const MIN_DIAMETER_M: f64 = 100.0;
        /// Largest impactor diameter accepted (m).
        pub const MAX_DIAMETER_M: f64 = 2000.0;
        /// Slowest impact velocity accepted (km/s).
        pub const MIN_VELOCITY_KM_S: f64 = 5.0;
        /// Fastest impact velocity accepted (km/s).
        pub const MAX_VELOCITY_KM_S: f64 = 30.0;
        /// Smallest deflection velocity change (cm/s); zero means no attempt.
        pub const MIN_DEFLECTION_CM_S: f64 = 0.0;
        /// Largest deflection velocity change (cm/s).
        pub const MAX_DEFLECTION_CM_S: f64 = 10.0;
        /// Shortest warning time (years).
        pub const MIN_WARNING_YEARS: f64 = 1.0;
        /// Longest warning time (years).
        pub const MAX_WARNING_YEARS: f64 = 50.0;
        /// Deflection applied when none is given (cm/s).
        pub const DEFAULT_DEFLECTION_CM_S: f64 = 2.5;
        /// Warning time used when none is given (years).
        pub const DEFAULT_WARNING_YEARS: f64 = 10.0;

        /// Countdown mission deflection slider bounds (cm/s).
        pub const MISSION_MIN_DEFLECTION_CM_S: f64 = 0.1;
        pub const MISSION_MAX_DEFLECTION_CM_S: f64 = 5.0;
    }
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Convert kilometres per second to metres per second.
    #[inline]
    pub fn kms_to_ms(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert centimetres per second to metres per second.
    #[inline]
    pub fn cms_to_ms(v: f64) -> f64 {
        v / 100.0
    }

    /// Convert g/cm³ to kg/m³.
    #[inline]
    pub fn g_cm3_to_kg_m3(v: f64) -> f64 {
        v * 1_000.0
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_YEAR;

    /// Convert Julian years to seconds.
    #[inline]
    pub fn years_to_seconds(years: f64) -> f64 {
        years * SECONDS_PER_YEAR
    }

    /// Convert seconds to Julian years.
    #[inline]
    pub fn seconds_to_years(seconds: f64) -> f64 {
        seconds / SECONDS_PER_YEAR
    }
}
