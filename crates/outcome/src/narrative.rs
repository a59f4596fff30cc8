//! Human-readable account of an [`ImpactOutcome`].
//!
//! Formatting reads only fields that are already on the outcome, so the text
//! can never disagree with the numbers beside it.

use impact_core::constants::TSAR_BOMBA_MEGATONS;
use impact_scaling::{Consequences, MediumEffects};

use crate::ImpactOutcome;

/// Headline plus ordered detail lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narrative {
    pub headline: String,
    pub lines: Vec<String>,
}

/// Build the narrative for a finished outcome.
pub fn compose(outcome: &ImpactOutcome, body_name: &str) -> Narrative {
    match &outcome.consequences {
        Some(consequences) if outcome.will_impact => impact(consequences),
        _ => safe_pass(outcome, body_name),
    }
}

fn safe_pass(outcome: &ImpactOutcome, body_name: &str) -> Narrative {
    let deflection = &outcome.params.deflection;
    Narrative {
        headline: format!(
            "EARTH SAVED! {} will miss by {:.0} km",
            body_name, outcome.miss_distance_km
        ),
        lines: vec![
            format!(
                "Deflection force of {:.2} cm/s successfully altered trajectory",
                deflection.deflection_cm_s()
            ),
            format!(
                "Total displacement: {:.0} km over {} years",
                outcome.displacement_km, deflection.warning_years()
            ),
            "Population protected: 8 billion people".to_string(),
            "Civilization preserved - asteroid continues safely through solar system".to_string(),
        ],
    }
}

fn impact(c: &Consequences) -> Narrative {
    let mut lines = vec![
        format!(
            "Total energy release: {:.0} megatons TNT ({:.0}x Tsar Bomba)",
            c.energy_megatons,
            c.energy_megatons / TSAR_BOMBA_MEGATONS
        ),
        format!(
            "Fireball: {:.1} km radius - everything vaporized instantly",
            c.fireball_radius_km
        ),
        format!(
            "Impact crater: {:.1} km diameter, {:.0} m deep",
            c.crater_diameter_km,
            c.crater_depth_km * 1000.0
        ),
        format!(
            "Crater volume: {:.1} km³ of material displaced",
            c.crater_volume_km3
        ),
        format!(
            "Air blast (20 psi): {:.1} km - reinforced buildings destroyed",
            c.severe_damage_radius_km
        ),
        format!(
            "Air blast (1 psi): {:.1} km - residential structures collapse",
            c.moderate_damage_radius_km
        ),
    ];

    match &c.effects {
        MediumEffects::Land(land) => {
            lines.push(format!(
                "Thermal radiation: {:.1} km - third-degree burns, fires ignited",
                land.vegetation_ignition_radius_km
            ));
            lines.push(format!(
                "Ejecta blanket: {:.1} km radius covered in molten rock and debris",
                c.ejecta_blanket_radius_km
            ));
            lines.push(format!(
                "Ejecta depth: {:.1}m at {:.0}km, {:.1}m at {:.0}km",
                land.ejecta_thickness_near_m,
                land.near_distance_km,
                land.ejecta_thickness_far_m,
                land.far_distance_km
            ));
        }
        MediumEffects::Ocean(ocean) => {
            lines.push(format!(
                "Tsunami: {:.0} m initial wave height above the impact point",
                ocean.initial_height_m
            ));
            lines.push(format!(
                "Seafloor ejecta: {:.1} km radius of displaced sediment",
                c.ejecta_blanket_radius_km
            ));
            lines.push(format!(
                "Coastal waves: {:.0} m high, flooding up to {:.1} km inland",
                ocean.coastal_height_m, ocean.coastal_inundation_km
            ));
        }
    }

    lines.push(format!(
        "Total destruction area: {:.0} km² (larger than many countries)",
        c.affected_area_km2
    ));
    lines.push(format!(
        "Seismic shock: Magnitude {:.1} felt {:.0} km away",
        c.earthquake_magnitude, c.felt_radius_km
    ));
    lines.push(
        "Atmospheric effects: Dust cloud causing regional crop failure, potential \"impact winter\""
            .to_string(),
    );
    lines.push(
        "Estimated casualties: Millions within blast radius, tens of millions from secondary effects"
            .to_string(),
    );

    Narrative {
        headline: format!(
            "IMPACT EVENT - Catastrophic {} Impact",
            match c.effects {
                MediumEffects::Land(_) => "Land",
                MediumEffects::Ocean(_) => "Ocean",
            }
        ),
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SimulationParams, simulate_impact};
    use impact_config::ModelConfig;
    use impact_deflection::DeflectionScenario;
    use impact_energy::AsteroidProperties;
    use impact_scaling::Medium;

    fn run(force: f64, medium: Medium) -> ImpactOutcome {
        let params = SimulationParams::new(
            AsteroidProperties::new(492.0, 12.7, 1190.0).unwrap(),
            DeflectionScenario::new(force, 10.0).unwrap(),
            medium,
        );
        simulate_impact(&params, &ModelConfig::default()).unwrap()
    }

    #[test]
    fn safe_pass_reports_numbers_from_outcome() {
        let outcome = run(2.5, Medium::Land);
        let narrative = compose(&outcome, "101955 Bennu");
        assert_eq!(
            narrative.headline,
            format!("EARTH SAVED! 101955 Bennu will miss by {:.0} km", outcome.miss_distance_km)
        );
        assert_eq!(
            narrative.lines[0],
            "Deflection force of 2.50 cm/s successfully altered trajectory"
        );
        assert_eq!(
            narrative.lines[1],
            format!("Total displacement: {:.0} km over 10 years", outcome.displacement_km)
        );
        assert_eq!(narrative.headline, outcome.headline);
        assert_eq!(narrative.lines, outcome.narrative);
    }

    #[test]
    fn land_impact_line_order() {
        let outcome = run(0.0, Medium::Land);
        assert_eq!(outcome.headline, "IMPACT EVENT - Catastrophic Land Impact");
        assert!(outcome.narrative[0].starts_with("Total energy release: 1430 megatons"));
        assert!(outcome.narrative[0].contains("(95x Tsar Bomba)"));
        assert!(outcome.narrative[6].starts_with("Thermal radiation:"));
        assert!(outcome.narrative[8].starts_with("Ejecta depth: 5.0m at 10km, 0.5m at 30km"));
        assert!(outcome.narrative[12].starts_with("Estimated casualties"));
    }

    #[test]
    fn ocean_impact_swaps_in_tsunami_lines() {
        let outcome = run(0.0, Medium::Ocean);
        assert_eq!(outcome.headline, "IMPACT EVENT - Catastrophic Ocean Impact");
        assert_eq!(
            outcome.narrative[6],
            "Tsunami: 155 m initial wave height above the impact point"
        );
        assert!(outcome.narrative[8].starts_with("Coastal waves: 775 m high"));
        assert!(!outcome.narrative.iter().any(|l| l.starts_with("Thermal radiation")));
    }
}
