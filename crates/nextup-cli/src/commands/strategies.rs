//! Strategies command: static listing of the available strategies.

use std::error::Error;

use nextup_core::api;

pub fn run() -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(&api::strategies())?);
    Ok(())
}
