//! Commands that edit a palette file in place.
//!
//! Each command imports the file, applies one edit, and writes the export
//! back. A rejected edit leaves the file untouched.

use crate::cli::common::{load_config, load_state, save_state, CliError, CliResult};
use clap::Args;
use std::path::PathBuf;

/// Grow or shrink a palette to a new color count
#[derive(Debug, Clone, Args)]
pub struct ResizeArgs {
    /// Path to palette JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// New number of colors
    #[arg(short, long, value_name = "N")]
    pub count: usize,

    /// Seed for reproducible color generation
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

/// Replace the base color of one slot
#[derive(Debug, Clone, Args)]
pub struct SetColorArgs {
    /// Path to palette JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Slot index (0-based)
    #[arg(short, long, value_name = "INDEX")]
    pub index: usize,

    /// Color in hex format (#RRGGBB or #RGB)
    #[arg(short, long, value_name = "HEX")]
    pub color: String,

    /// Fail instead of ignoring an incomplete color
    #[arg(long)]
    pub strict: bool,
}

/// Rename one slot
#[derive(Debug, Clone, Args)]
pub struct RenameArgs {
    /// Path to palette JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Slot index (0-based)
    #[arg(short, long, value_name = "INDEX")]
    pub index: usize,

    /// New slot name
    #[arg(short, long, value_name = "NAME")]
    pub name: String,
}

/// Restore the default color count, hue wheel, and names
#[derive(Debug, Clone, Args)]
pub struct ResetArgs {
    /// Path to palette JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,
}

impl ResizeArgs {
    /// Execute the resize command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut state = load_state(&config, &self.file, self.seed)?;
        let previous = state.count();

        state.set_count(self.count)?;
        save_state(&state, &self.file)?;

        println!("✓ Resized palette from {} to {} colors", previous, state.count());
        Ok(())
    }
}

impl SetColorArgs {
    /// Execute the set-color command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut state = load_state(&config, &self.file, None)?;

        if !state.set_color_at(self.index, &self.color)? {
            if self.strict {
                return Err(CliError::validation(format!(
                    "Invalid hex color format: '{}'. Expected #RRGGBB or #RGB",
                    self.color
                )));
            }
            println!(
                "Ignored incomplete color '{}'; slot {} unchanged.",
                self.color, self.index
            );
            return Ok(());
        }

        save_state(&state, &self.file)?;

        println!(
            "✓ Set {} to {}",
            state.names()[self.index],
            state.colors()[self.index]
        );
        Ok(())
    }
}

impl RenameArgs {
    /// Execute the rename command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut state = load_state(&config, &self.file, None)?;

        let old_name = state
            .names()
            .get(self.index)
            .cloned()
            .unwrap_or_default();
        state.set_name_at(self.index, self.name.clone())?;

        if state.names().iter().filter(|n| **n == self.name).count() > 1 {
            eprintln!(
                "Warning: name '{}' is used by more than one slot; consumers must address slots by index.",
                self.name
            );
        }

        save_state(&state, &self.file)?;

        println!("✓ Renamed slot {} from '{}' to '{}'", self.index, old_name, self.name);
        Ok(())
    }
}

impl ResetArgs {
    /// Execute the reset command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut state = load_state(&config, &self.file, None)?;

        state.reset();
        save_state(&state, &self.file)?;

        println!("✓ Reset palette to {} default colors", state.count());
        Ok(())
    }
}
