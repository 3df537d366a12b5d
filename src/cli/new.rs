//! Create a new palette document.

use crate::cli::common::{load_config, new_state, save_state, CliResult};
use crate::config::Config;
use crate::services::serializer::export_file_name;
use clap::Args;
use std::path::PathBuf;

/// Create a new palette from the default hue wheel
#[derive(Debug, Clone, Args)]
pub struct NewArgs {
    /// Number of colors (defaults to the configured default count)
    #[arg(short, long, value_name = "N")]
    pub count: Option<usize>,

    /// Output path (defaults to palette_<YYYY-MM-DD-HH-mm>.json in the export directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Seed for reproducible color generation
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl NewArgs {
    /// Execute the new command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut state = new_state(&config, self.seed);

        if let Some(count) = self.count {
            state.set_count(count)?;
        }

        let output_path = self.get_output_path(&config);
        save_state(&state, &output_path)?;

        println!(
            "✓ Created palette with {} colors: {}",
            state.count(),
            output_path.display()
        );
        Ok(())
    }

    /// Get the output file path (either user-specified or auto-generated)
    fn get_output_path(&self, config: &Config) -> PathBuf {
        if let Some(ref path) = self.output {
            return path.clone();
        }

        config
            .output_dir()
            .join(export_file_name(&chrono::Local::now()))
    }
}
