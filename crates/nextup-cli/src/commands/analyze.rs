//! Analyze command: full ranked listing of a task payload.

use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use nextup_core::api::{self, ErrorResponse};

#[derive(Args)]
pub struct AnalyzeArgs {
    /// JSON file with a task array (reads stdin when omitted)
    pub file: Option<PathBuf>,
    /// Sorting strategy key (smart_balance, fastest_wins, high_impact, deadline_driven)
    #[arg(long)]
    pub strategy: Option<String>,
    /// Reference date for urgency, YYYY-MM-DD (defaults to the local date)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
    /// Scoring policy TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let policy = super::load_policy(args.config.as_deref())?;
    let today = super::reference_date(args.today);
    let payload = super::read_payload(args.file.as_deref())?;

    match api::analyze(&payload, args.strategy.as_deref(), today, &policy) {
        Ok(response) => {
            println!("{}", serde_json::to_string_pretty(&response)?);
            Ok(())
        }
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&ErrorResponse::from(&err))?);
            Err(Box::new(err))
        }
    }
}
