//! Export helpers for JSON reports and CSV sweeps.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod report {
    use std::io::{self, Write};

    use chrono::{SecondsFormat, Utc};
    use impact_config::ModelConfig;
    use impact_outcome::ImpactOutcome;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Report<'a> {
        generated_utc: String,
        model_version: &'a str,
        body: &'a str,
        baseline_offset_km: f64,
        outcome: &'a ImpactOutcome,
    }

    /// Write a pretty-printed JSON report of one outcome.
    pub fn write_json(
        writer: &mut dyn Write,
        outcome: &ImpactOutcome,
        model: &ModelConfig,
    ) -> io::Result<()> {
        let report = Report {
            generated_utc: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            model_version: &model.version,
            body: &model.reference_body.name,
            baseline_offset_km: model.trajectory.baseline_offset_km,
            outcome,
        };
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)
    }

    /// Write the headline and narrative lines as plain text.
    pub fn write_text(writer: &mut dyn Write, outcome: &ImpactOutcome) -> io::Result<()> {
        writeln!(writer, "{}", outcome.headline)?;
        for line in &outcome.narrative {
            writeln!(writer, "  - {}", line)?;
        }
        Ok(())
    }
}

pub mod sweep {
    use std::io::{self, Write};

    use impact_deflection::SweepPoint;
    use serde::Serialize;

    /// Column order of the sweep CSV.
    pub const HEADER: [&str; 5] = [
        "deflection_cm_s",
        "warning_years",
        "displacement_km",
        "miss_distance_km",
        "will_impact",
    ];

    #[derive(Serialize)]
    struct Row {
        deflection_cm_s: f64,
        warning_years: f64,
        displacement_km: String,
        miss_distance_km: String,
        will_impact: bool,
    }

    /// Write sweep points as CSV with a header row.
    pub fn write_csv(writer: &mut dyn Write, points: &[SweepPoint]) -> io::Result<()> {
        let mut csv = csv::WriterBuilder::new()
            .has_headers(true)
            .from_writer(writer);
        for point in points {
            csv.serialize(Row {
                deflection_cm_s: point.deflection_cm_s,
                warning_years: point.warning_years,
                displacement_km: format!("{:.3}", point.displacement_km),
                miss_distance_km: format!("{:.3}", point.miss_distance_km),
                will_impact: point.will_impact,
            })
            .map_err(io::Error::other)?;
        }
        csv.flush()
    }
}
