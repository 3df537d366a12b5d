//! Validation command for palette files.

use crate::cli::common::{load_config, load_state, CliError, CliResult};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Check that a palette file can be imported
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to palette JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ValidationResponse {
    valid: bool,
    count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let result = load_state(&config, &self.file, None);

        // In JSON mode the response carries the error, so stderr stays quiet
        if self.json {
            let response = match &result {
                Ok(state) => ValidationResponse {
                    valid: true,
                    count: state.count(),
                    error: None,
                },
                Err(err) => ValidationResponse {
                    valid: false,
                    count: 0,
                    error: Some(err.message.clone()),
                },
            };
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return result.map(|_| ()).map_err(|err| CliError::reported(err.code));
        }

        let state = result?;
        println!("✓ Palette is valid ({} colors)", state.count());
        Ok(())
    }
}
