use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::types::Driver;

/// Column layout of the slate export. Header names match the workbook the
/// projections tool produces, so a sheet saved as CSV loads unchanged.
#[derive(Debug, Deserialize)]
struct SlateRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Position")]
    position: u32,
    #[serde(rename = "Salary")]
    salary: u32,
    #[serde(rename = "Projection")]
    projection: f64,
    #[serde(rename = "Ceiling")]
    ceiling: f64,
    #[serde(rename = "Ceiling-Laps")]
    ceiling_laps: f64,
    #[serde(rename = "Top5%")]
    top5_pct: f64,
}

/// Load a driver slate from a CSV file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a row fails to parse, or the
/// file contains no driver rows.
pub fn load_slate(path: &Path) -> Result<Vec<Driver>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open slate file at {}", path.display()))?;

    let mut drivers = Vec::new();
    for row in reader.deserialize::<SlateRow>() {
        let row = row.with_context(|| format!("Malformed slate row in {}", path.display()))?;
        drivers.push(Driver {
            name: row.name,
            position: row.position,
            salary: row.salary,
            projection: row.projection,
            ceiling: row.ceiling,
            ceiling_laps: row.ceiling_laps,
            top5_pct: row.top5_pct,
        });
    }

    if drivers.is_empty() {
        anyhow::bail!("No drivers found in {}", path.display());
    }

    Ok(drivers)
}

/// Find the most recently modified .csv file in a directory.
///
/// Slate exports pile up in the data folder over the season; the newest one
/// is the slate for the upcoming race.
pub fn latest_slate_in(dir: &Path) -> Result<PathBuf> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read data directory {}", dir.display()))?;

    let mut newest: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .with_context(|| format!("Failed to stat {}", path.display()))?;
        if newest.as_ref().map_or(true, |(t, _)| modified > *t) {
            newest = Some((modified, path));
        }
    }

    match newest {
        Some((_, path)) => Ok(path),
        None => anyhow::bail!("No .csv slate files found in {}", dir.display()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs::File;
    use std::time::Duration;

    const SLATE_HEADER: &str = "Name,Position,Salary,Projection,Ceiling,Ceiling-Laps,Top5%";

    fn write_slate(path: &Path, rows: &[&str]) {
        let mut contents = String::from(SLATE_HEADER);
        for row in rows {
            contents.push('\n');
            contents.push_str(row);
        }
        contents.push('\n');
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_load_slate_parses_all_columns() {
        let path = env::temp_dir().join("dfs_lineups_test_slate_parse.csv");
        write_slate(
            &path,
            &[
                "Kyle Larson,1,12000,35.5,2.0,40.25,55.5",
                "Chase Elliott,8,9800,28.1,5.0,31.0,22.0",
            ],
        );

        let drivers = load_slate(&path).unwrap();
        assert_eq!(drivers.len(), 2);
        assert_eq!(drivers[0].name, "Kyle Larson");
        assert_eq!(drivers[0].position, 1);
        assert_eq!(drivers[0].salary, 12000);
        assert_eq!(drivers[0].projection, 35.5);
        assert_eq!(drivers[0].ceiling, 2.0);
        assert_eq!(drivers[0].ceiling_laps, 40.25);
        assert_eq!(drivers[0].top5_pct, 55.5);
        assert_eq!(drivers[1].name, "Chase Elliott");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_slate_empty_file_is_error() {
        let path = env::temp_dir().join("dfs_lineups_test_slate_empty.csv");
        write_slate(&path, &[]);

        let err = load_slate(&path).unwrap_err();
        assert!(err.to_string().contains("No drivers"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_slate_missing_file_is_error() {
        let path = env::temp_dir().join("dfs_lineups_test_slate_missing.csv");
        let _ = fs::remove_file(&path);

        assert!(load_slate(&path).is_err());
    }

    #[test]
    fn test_load_slate_malformed_row_is_error() {
        let path = env::temp_dir().join("dfs_lineups_test_slate_malformed.csv");
        write_slate(&path, &["Kyle Larson,first,12000,35.5,2.0,40.25,55.5"]);

        let err = load_slate(&path).unwrap_err();
        assert!(err.to_string().contains("Malformed slate row"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_latest_slate_picks_newest_csv() {
        let dir = env::temp_dir().join("dfs_lineups_test_latest");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let older = dir.join("daytona.csv");
        let newer = dir.join("talladega.csv");
        write_slate(&older, &["A,1,5000,1.0,1.0,1.0,50.0"]);
        write_slate(&newer, &["B,1,5000,1.0,1.0,1.0,50.0"]);

        // Push the first file's mtime into the past so ordering does not
        // depend on filesystem timestamp granularity.
        let past = SystemTime::now() - Duration::from_secs(3600);
        File::options()
            .write(true)
            .open(&older)
            .unwrap()
            .set_modified(past)
            .unwrap();

        let picked = latest_slate_in(&dir).unwrap();
        assert_eq!(picked, newer);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_latest_slate_ignores_non_csv() {
        let dir = env::temp_dir().join("dfs_lineups_test_latest_noncsv");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("notes.txt"), "not a slate").unwrap();

        let err = latest_slate_in(&dir).unwrap_err();
        assert!(err.to_string().contains("No .csv slate files"));

        let _ = fs::remove_dir_all(&dir);
    }
}
