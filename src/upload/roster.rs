use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Normalized driver name used to join generated lineups against FanDuel's
/// player list. Both sides of the join go through the same normalization, so
/// a mismatch means the rosters genuinely differ, not that one file spells
/// "A.J." with periods.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JoinKey(String);

impl JoinKey {
    /// The one declared normalization: strip period characters, trim
    /// surrounding whitespace.
    pub fn normalize(name: &str) -> Self {
        JoinKey(name.replace('.', "").trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JoinKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Columns of FanDuel's player list export that the join needs. The export
/// carries more columns; serde binds by header name and ignores the rest.
#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "First Name")]
    first_name: String,
    #[serde(rename = "Last Name")]
    last_name: String,
    #[serde(rename = "Player ID + Player Name")]
    id_and_name: String,
}

/// Load FanDuel's player list into a normalized-name → "ID: Name" map.
pub fn load_roster(path: &Path) -> Result<HashMap<JoinKey, String>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open player list at {}", path.display()))?;

    let mut roster = HashMap::new();
    for row in reader.deserialize::<RosterRow>() {
        let row =
            row.with_context(|| format!("Malformed player row in {}", path.display()))?;
        let key = JoinKey::normalize(&format!("{} {}", row.first_name, row.last_name));
        roster.insert(key, row.id_and_name);
    }

    if roster.is_empty() {
        anyhow::bail!("No players found in {}", path.display());
    }

    Ok(roster)
}
