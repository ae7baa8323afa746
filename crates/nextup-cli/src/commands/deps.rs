//! Deps command: dependency-structure report for a task payload.

use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use nextup_core::api::{self, ErrorResponse};
use nextup_core::deps;

#[derive(Args)]
pub struct DepsArgs {
    /// JSON file with a task array (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

pub fn run(args: DepsArgs) -> Result<(), Box<dyn Error>> {
    let payload = super::read_payload(args.file.as_deref())?;

    match api::parse_tasks(&payload) {
        Ok(tasks) => {
            let report = deps::analyze(&tasks);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&ErrorResponse::from(&err))?);
            Err(Box::new(err))
        }
    }
}
