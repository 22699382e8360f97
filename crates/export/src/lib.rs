//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("export I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

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

pub mod summary {
    use std::io::Write;

    use impact_damage::DamageAssessment;
    use impact_model::Asteroid;
    use impact_physics::ImpactResult;
    use serde::Serialize;

    use crate::ExportError;

    /// One `Parameter,Value,Unit` line of the summary sheet.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct SummaryRow {
        #[serde(rename = "Parameter")]
        pub parameter: &'static str,
        #[serde(rename = "Value")]
        pub value: f64,
        #[serde(rename = "Unit")]
        pub unit: &'static str,
    }

    impl SummaryRow {
        fn new(parameter: &'static str, value: f64, unit: &'static str) -> Self {
            Self {
                parameter,
                value,
                unit,
            }
        }
    }

    pub fn summary_rows(
        asteroid: &Asteroid,
        impact: &ImpactResult,
        damage: &DamageAssessment,
    ) -> Vec<SummaryRow> {
        vec![
            SummaryRow::new("Asteroid Mass", asteroid.mass_kg(), "kg"),
            SummaryRow::new("Asteroid Diameter", asteroid.diameter_m(), "m"),
            SummaryRow::new("Asteroid Velocity", asteroid.velocity_m_s(), "m/s"),
            SummaryRow::new(
                "Kinetic Energy",
                asteroid.kinetic_energy_megatons(),
                "megatons TNT",
            ),
            SummaryRow::new("Crater Diameter", impact.crater_diameter_m, "m"),
            SummaryRow::new("Blast Radius", impact.blast_radius_m, "m"),
            SummaryRow::new("Affected Area", impact.affected_area_km2, "km²"),
            SummaryRow::new(
                "Estimated Casualties",
                damage.estimated_casualties as f64,
                "people",
            ),
            SummaryRow::new(
                "Total Economic Cost",
                damage.total_economic_cost_usd,
                "USD",
            ),
        ]
    }

    pub fn write_csv<W: Write>(writer: W, rows: &[SummaryRow]) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for row in rows {
            csv.serialize(row)?;
        }
        csv.flush()?;
        Ok(())
    }
}

pub mod zones {
    use std::io::Write;

    use impact_physics::ImpactZone;
    use serde::Serialize;

    use crate::ExportError;

    #[derive(Serialize)]
    struct ZoneRow<'a> {
        zone_type: &'static str,
        radius_m: f64,
        intensity: f64,
        affected_population: u64,
        description: &'a str,
    }

    /// One CSV row per zone, in reporting order.
    pub fn write_csv<W: Write>(writer: W, zones: &[ImpactZone]) -> Result<(), ExportError> {
        let mut csv = csv::Writer::from_writer(writer);
        for zone in zones {
            csv.serialize(ZoneRow {
                zone_type: zone.kind.label(),
                radius_m: zone.radius_m,
                intensity: zone.intensity,
                affected_population: zone.affected_population,
                description: &zone.description,
            })?;
        }
        csv.flush()?;
        Ok(())
    }
}

pub mod report {
    use std::io::Write;

    use chrono::{SecondsFormat, Utc};
    use serde::Serialize;

    use crate::ExportError;

    #[derive(Serialize)]
    struct Envelope<'a, T: Serialize> {
        generated_at: String,
        generator: &'a str,
        report: &'a T,
    }

    /// Pretty-print `report` inside a timestamped envelope.
    pub fn write_json<W: Write, T: Serialize>(
        mut writer: W,
        generator: &str,
        report: &T,
    ) -> Result<(), ExportError> {
        let envelope = Envelope {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            generator,
            report,
        };
        serde_json::to_writer_pretty(&mut writer, &envelope)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }
}
