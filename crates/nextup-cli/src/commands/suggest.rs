//! Suggest command: the top three tasks for today, with reasons.

use std::error::Error;
use std::path::PathBuf;

use chrono::{Duration, NaiveDate};
use clap::Args;
use nextup_core::api::{self, ErrorResponse};

#[derive(Args)]
pub struct SuggestArgs {
    /// JSON file with a task array (reads stdin when omitted)
    pub file: Option<PathBuf>,
    /// Use a built-in example task list instead of reading input
    #[arg(long)]
    pub sample: bool,
    /// Reference date for urgency, YYYY-MM-DD (defaults to the local date)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,
    /// Scoring policy TOML file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: SuggestArgs) -> Result<(), Box<dyn Error>> {
    let policy = super::load_policy(args.config.as_deref())?;
    let today = super::reference_date(args.today);
    let payload = if args.sample {
        sample_payload(today)
    } else {
        super::read_payload(args.file.as_deref())?
    };

    match api::suggest(&payload, today, &policy) {
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

/// Example tasks with due dates pinned relative to the reference date, so
/// the demo output is stable no matter when it runs.
fn sample_payload(today: NaiveDate) -> String {
    let date = |days: i64| (today + Duration::days(days)).format("%Y-%m-%d").to_string();
    serde_json::json!([
        {
            "id": 1,
            "title": "Fix login bug",
            "due_date": date(1),
            "importance": 8,
            "estimated_hours": 3,
            "dependencies": []
        },
        {
            "id": 2,
            "title": "Update documentation",
            "due_date": date(6),
            "importance": 6,
            "estimated_hours": 1,
            "dependencies": []
        },
        {
            "id": 3,
            "title": "Review pull requests",
            "due_date": date(0),
            "importance": 7,
            "estimated_hours": 2,
            "dependencies": []
        }
    ])
    .to_string()
}
