//! Configuration management CLI commands.

use crate::cli::common::{load_config, CliError, CliResult};
use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::ShadeTable;
use crate::services::HueDistance;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Number of colors in new and reset palettes
    #[arg(long, value_name = "N")]
    default_count: Option<usize>,

    /// Largest number of colors a palette may have
    #[arg(long, value_name = "N")]
    max_count: Option<usize>,

    /// Hue distance metric (circular or linear)
    #[arg(long, value_name = "MODE")]
    hue_distance: Option<String>,

    /// Shade offset preset (standard or deep)
    #[arg(long, value_name = "PRESET")]
    shades: Option<String>,

    /// Directory for auto-named exports
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;

        if self.json {
            let json = serde_json::to_string_pretty(&config).map_err(|e| {
                CliError::io(format!("Failed to serialize configuration to JSON: {}", e))
            })?;
            println!("{}", json);
        } else {
            output_human_readable(&config);
        }

        Ok(())
    }
}

impl ConfigSetArgs {
    fn is_empty(&self) -> bool {
        self.default_count.is_none()
            && self.max_count.is_none()
            && self.hue_distance.is_none()
            && self.shades.is_none()
            && self.output_dir.is_none()
    }

    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.is_empty() {
            return Err(CliError::validation(
                "At least one configuration option must be specified: --default-count, --max-count, --hue-distance, --shades, or --output-dir",
            ));
        }

        let mut config = load_config()?;

        if let Some(count) = self.max_count {
            config.palette.max_count = count;
        }
        if let Some(count) = self.default_count {
            config.palette.default_count = count;
        }

        if let Some(mode) = &self.hue_distance {
            config.generator.hue_distance = match mode.to_lowercase().as_str() {
                "circular" => HueDistance::Circular,
                "linear" => HueDistance::Linear,
                _ => {
                    return Err(CliError::validation(
                        "Invalid hue distance. Must be 'circular' or 'linear'",
                    ))
                }
            };
        }

        if let Some(preset) = &self.shades {
            config.shades = match preset.to_lowercase().as_str() {
                "standard" => ShadeTable::standard(),
                "deep" => ShadeTable::deep(),
                _ => {
                    return Err(CliError::validation(
                        "Invalid shade preset. Must be 'standard' or 'deep'",
                    ))
                }
            };
        }

        if let Some(path) = &self.output_dir {
            config.export.output_dir = Some(path.clone());
        }

        config
            .validate()
            .map_err(|e| CliError::validation(format!("Invalid configuration: {}", e)))?;

        config
            .save()
            .map_err(|e| CliError::io(format!("Failed to save configuration: {}", e)))?;

        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    let title = format!("{APP_NAME} Configuration");
    println!("{title}");
    println!("{}", "=".repeat(title.len()));
    println!();

    println!("Palette:");
    println!("  Default Count: {}", config.palette.default_count);
    println!("  Max Count: {}", config.palette.max_count);
    println!();

    let generator = &config.generator;
    println!("Generator:");
    println!(
        "  Initial Ramp: saturation {}, lightness {}",
        generator.ramp_saturation, generator.ramp_lightness
    );
    println!(
        "  Random Colors: saturation {}, lightness {}",
        generator.random_saturation, generator.random_lightness
    );
    println!(
        "  Min Hue Distance: {}° ({})",
        generator.min_hue_distance,
        format!("{:?}", generator.hue_distance).to_lowercase()
    );
    println!("  Max Attempts: {}", generator.max_attempts);
    println!();

    let shades = &config.shades;
    println!("Shades:");
    println!("  Desaturation: {}", shades.desaturation);
    println!(
        "  Offsets: dark {}, light {}, lighter {}",
        shades.dark, shades.light, shades.lighter
    );
    println!();

    println!("Export:");
    println!("  Output Directory: {}", config.output_dir().display());
    println!();
}
