//! Read-only commands: print a palette or the shades of one color.

use crate::cli::common::{load_config, load_state, CliError, CliResult};
use crate::models::{Color, PaletteEntry, ShadeSet};
use crate::services::{derive_shades, serializer};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Print a palette with legible text colors for each shade
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Path to palette JSON file
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Print the palette document as JSON
    #[arg(long)]
    pub json: bool,
}

/// Derive and print the shades of a single color
#[derive(Debug, Clone, Args)]
pub struct DeriveArgs {
    /// Base color in hex format (#RRGGBB or #RGB)
    #[arg(short, long, value_name = "HEX")]
    pub color: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct ShadeItem {
    shade: &'static str,
    color: String,
    luminance: f64,
    text: String,
}

#[derive(Debug, Serialize)]
struct DeriveResponse {
    base: String,
    shades: Vec<ShadeItem>,
}

fn shade_items(shades: &ShadeSet) -> Vec<ShadeItem> {
    shades
        .iter()
        .map(|(key, color)| ShadeItem {
            shade: key.as_str(),
            color: color.to_hex(),
            luminance: color.luminance(),
            text: color.text_color().to_string(),
        })
        .collect()
}

fn print_entry(index: usize, entry: &PaletteEntry, base: Color) {
    println!("  {:>2}. {:<20} {}", index, entry.name, base);
    for item in shade_items(&entry.shades) {
        println!("        {:<8} {}  text: {}", item.shade, item.color, item.text);
    }
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let state = load_state(&config, &self.file, None)?;

        if self.json {
            let json = serializer::to_pretty_json(&state.export())
                .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        println!("Palette ({} colors):", state.count());
        println!();
        for (index, (entry, base)) in state.palette().iter().zip(state.colors()).enumerate() {
            print_entry(index, entry, *base);
        }
        Ok(())
    }
}

impl DeriveArgs {
    /// Execute the derive command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let base = Color::parse(&self.color)?;
        let shades = derive_shades(base, &config.shades);

        if self.json {
            let response = DeriveResponse {
                base: base.to_hex(),
                shades: shade_items(&shades),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
            return Ok(());
        }

        println!("Shades of {base}:");
        for item in shade_items(&shades) {
            println!("  {:<8} {}  text: {}", item.shade, item.color, item.text);
        }
        Ok(())
    }
}
