//! FanDuel upload translation.
//!
//! Turns a generated lineup sheet into the CSV the contest upload form
//! accepts: one row per lineup, five `Driver` columns, each cell the numeric
//! prefix of the platform's "Player ID + Player Name" field.

pub mod roster;

pub use roster::{load_roster, JoinKey};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use crate::export::SheetLineup;
use crate::sampler::LINEUP_SIZE;

/// Result of translating lineup names into driver IDs.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// One row of driver IDs per lineup, in sheet order. A row is short when
    /// some of its names missed the roster. Not repaired.
    pub rows: Vec<Vec<String>>,
    /// Normalized names with no roster entry, in encounter order.
    pub misses: Vec<String>,
}

/// Look up every driver of every lineup against the roster. Hits contribute
/// the numeric prefix of the ID cell (the text before the colon); misses are
/// recorded and skipped.
pub fn translate_lineups(
    sheet: &[SheetLineup],
    roster: &HashMap<JoinKey, String>,
) -> Translation {
    let mut rows = Vec::with_capacity(sheet.len());
    let mut misses = Vec::new();

    for lineup in sheet {
        let mut row = Vec::with_capacity(lineup.drivers.len());
        for driver in &lineup.drivers {
            let key = JoinKey::normalize(&driver.name);
            match roster.get(&key) {
                Some(id_and_name) => row.push(id_prefix(id_and_name).to_string()),
                None => misses.push(key.to_string()),
            }
        }
        rows.push(row);
    }

    Translation { rows, misses }
}

/// The numeric ID prefix of a "Player ID + Player Name" cell: the text
/// before the colon separator, or the whole cell if there is none.
fn id_prefix(id_and_name: &str) -> &str {
    match id_and_name.split_once(':') {
        Some((id, _)) => id.trim(),
        None => id_and_name.trim(),
    }
}

/// Write the translated rows as the upload CSV: a `Driver` header for each
/// of the five slots, one row per lineup. Short rows are padded with empty
/// cells, matching how the platform template leaves missing slots blank.
pub fn write_upload_csv(path: &Path, translation: &Translation) -> Result<()> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(["Driver"; LINEUP_SIZE])
        .context("Failed to write upload header")?;

    for row in &translation.rows {
        let mut record = row.clone();
        record.resize(LINEUP_SIZE, String::new());
        writer
            .write_record(&record)
            .context("Failed to write upload row")?;
    }

    let data = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush upload file: {}", e))?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open upload file at {}", path.display()))?;
    file.write_all(&data)
        .with_context(|| format!("Failed to write upload file to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save upload file at {}", path.display()))?;

    Ok(())
}
