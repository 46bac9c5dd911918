//! Lineup sheet export.
//!
//! One CSV per run. Each accepted lineup contributes a header pseudo-row
//! (`Lineup` marker, lineup number in the Position column, total projection
//! in the Projection column), its 5 driver rows in draw order, and a blank
//! separator row. Floats keep their full round-trip precision.

use anyhow::{bail, Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::slate::types::Lineup;

pub const SHEET_COLUMNS: [&str; 5] = ["Name", "Position", "Salary", "Projection", "FanDuel Score"];

/// Marker in the Name column that opens a lineup group.
pub const LINEUP_MARKER: &str = "Lineup";

/// Write accepted lineups to a CSV sheet.
///
/// The write is atomic: a failed run leaves no partial file behind. The
/// parent directory is created if it does not exist.
pub fn write_lineup_sheet(path: &Path, lineups: &[Lineup]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(SHEET_COLUMNS)
        .context("Failed to write sheet header")?;

    for lineup in lineups {
        let number = lineup.number.to_string();
        let total_projection = lineup.total_projection.to_string();
        writer
            .write_record([
                LINEUP_MARKER,
                number.as_str(),
                "",
                total_projection.as_str(),
                "",
            ])
            .context("Failed to write lineup header row")?;

        for scored in &lineup.drivers {
            let d = &scored.driver;
            let position = d.position.to_string();
            let salary = d.salary.to_string();
            let projection = d.projection.to_string();
            let fanduel_score = scored.fanduel_score.to_string();
            writer
                .write_record([
                    d.name.as_str(),
                    position.as_str(),
                    salary.as_str(),
                    projection.as_str(),
                    fanduel_score.as_str(),
                ])
                .context("Failed to write driver row")?;
        }

        writer
            .write_record([""; 5])
            .context("Failed to write separator row")?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush lineup sheet: {}", e))?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open output file at {}", path.display()))?;
    file.write_all(&data)
        .with_context(|| format!("Failed to write lineup sheet to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save lineup sheet at {}", path.display()))?;

    Ok(())
}

/// One driver row read back from a lineup sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetDriver {
    pub name: String,
    pub position: u32,
    pub salary: u32,
    pub projection: f64,
    pub fanduel_score: f64,
}

/// One lineup group read back from a lineup sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLineup {
    pub number: u32,
    pub total_projection: f64,
    pub drivers: Vec<SheetDriver>,
}

/// Read a sheet produced by [`write_lineup_sheet`] back into lineup groups.
/// Blank separator rows are skipped; driver rows attach to the most recent
/// `Lineup` header row.
pub fn read_lineup_sheet(path: &Path) -> Result<Vec<SheetLineup>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open lineup sheet at {}", path.display()))?;

    let mut lineups: Vec<SheetLineup> = Vec::new();
    for record in reader.records() {
        let record =
            record.with_context(|| format!("Malformed row in {}", path.display()))?;
        let name = record.get(0).unwrap_or("");

        if name == LINEUP_MARKER {
            let number = parse_field(&record, 1, "lineup number", path)?;
            let total_projection = parse_field(&record, 3, "total projection", path)?;
            lineups.push(SheetLineup {
                number,
                total_projection,
                drivers: Vec::new(),
            });
        } else if record.iter().all(|f| f.is_empty()) {
            continue;
        } else {
            let Some(current) = lineups.last_mut() else {
                bail!(
                    "Driver row before any lineup header in {}",
                    path.display()
                );
            };
            current.drivers.push(SheetDriver {
                name: name.to_string(),
                position: parse_field(&record, 1, "position", path)?,
                salary: parse_field(&record, 2, "salary", path)?,
                projection: parse_field(&record, 3, "projection", path)?,
                fanduel_score: parse_field(&record, 4, "FanDuel score", path)?,
            });
        }
    }

    Ok(lineups)
}

fn parse_field<T>(record: &csv::StringRecord, idx: usize, what: &str, path: &Path) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = record.get(idx).unwrap_or("");
    raw.parse()
        .with_context(|| format!("Bad {} {:?} in {}", what, raw, path.display()))
}
