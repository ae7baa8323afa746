//! CLI command implementations and shared input helpers.

pub mod analyze;
pub mod deps;
pub mod strategies;
pub mod suggest;

use std::error::Error;
use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use nextup_core::ScoringPolicy;

/// Read the task payload from a file, or stdin when no path is given.
pub fn read_payload(path: Option<&Path>) -> Result<String, Box<dyn Error>> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Load the scoring policy from a TOML file, or use the defaults.
pub fn load_policy(path: Option<&Path>) -> Result<ScoringPolicy, Box<dyn Error>> {
    match path {
        Some(path) => Ok(ScoringPolicy::from_toml_str(&fs::read_to_string(path)?)?),
        None => Ok(ScoringPolicy::default()),
    }
}

/// Reference date for scoring: `--today` if pinned, otherwise the local
/// calendar date.
pub fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| chrono::Local::now().date_naive())
}
