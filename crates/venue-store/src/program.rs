use std::path::Path;

use chrono::NaiveDate;
use venue_types::{Day, Program};

use crate::{Error, Result};

/// File name the installed program data lives under in the data dir.
pub const PROGRAM_FILE: &str = "program.json";

/// Load the program data file.
///
/// Optional fields inside the records degrade to empty values (that
/// leniency lives in the types layer); a missing or unparseable file is
/// the one hard failure here.
pub fn load_program(path: &Path) -> Result<Program> {
    if !path.exists() {
        return Err(Error::ProgramNotInstalled(path.to_path_buf()));
    }

    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Parse a day's display date ("Feb 3, 2026") for chronological ordering.
/// Display strings that do not follow the usual form sort last.
pub fn day_date(day: &Day) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(day.date.trim(), "%b %d, %Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_program() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(PROGRAM_FILE);
        fs::write(
            &path,
            r#"{"myopia_day": {"title": "Myopia Day", "date": "Feb 3, 2026", "sessions": []}}"#,
        )
        .unwrap();

        let program = load_program(&path).unwrap();
        assert_eq!(program.days().len(), 1);
        assert_eq!(program.days()[0].key, "myopia_day");
    }

    #[test]
    fn test_missing_file_is_not_installed() {
        let temp = TempDir::new().unwrap();
        let err = load_program(&temp.path().join(PROGRAM_FILE)).unwrap_err();
        assert!(matches!(err, Error::ProgramNotInstalled(_)));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(PROGRAM_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_program(&path), Err(Error::Json(_))));
    }

    #[test]
    fn test_day_date_parsing() {
        let day = Day {
            key: "myopia_day".to_string(),
            title: "Myopia Day".to_string(),
            date: "Feb 3, 2026".to_string(),
            sessions: vec![],
        };
        assert_eq!(day_date(&day), NaiveDate::from_ymd_opt(2026, 2, 3));

        let odd = Day { date: "someday".to_string(), ..day };
        assert_eq!(day_date(&odd), None);
    }
}
