//! Shared CLI plumbing: exit codes, errors, and palette file round-trips.

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::error::PaletteError;
use crate::services::{PaletteService, PaletteState};

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Input was rejected (bad color, count, document, or option)
    ValidationError = 1,
    /// A file could not be read or written
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to terminate with
    pub code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// A validation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// An I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// A failure whose details were already printed; only the exit code remains.
    pub fn reported(code: ExitCode) -> Self {
        Self {
            code,
            message: String::new(),
        }
    }

    /// True when `main` still has to print the message.
    #[must_use]
    pub fn needs_report(&self) -> bool {
        !self.message.is_empty()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<PaletteError> for CliError {
    fn from(err: PaletteError) -> Self {
        Self::validation(err.to_string())
    }
}

/// Result alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Loads the user configuration, failing on an unreadable or invalid file.
pub fn load_config() -> CliResult<Config> {
    Config::load().map_err(config_error)
}

/// Unreadable config files are I/O errors; bad TOML or values are validation errors.
fn config_error(err: anyhow::Error) -> CliError {
    let message = format!("Failed to load configuration: {err:#}");
    if err.chain().any(|cause| cause.is::<std::io::Error>()) {
        CliError::io(message)
    } else {
        CliError::validation(message)
    }
}

/// Builds a palette engine from configuration, optionally seeded.
#[must_use]
pub fn new_state(config: &Config, seed: Option<u64>) -> PaletteState {
    let settings = config.engine_settings();
    match seed {
        Some(seed) => PaletteState::with_seed(settings, seed),
        None => PaletteState::new(settings),
    }
}

/// Reads a palette file into a fresh engine.
///
/// A missing or unreadable file is an I/O error; anything wrong with the
/// content is a validation error.
pub fn load_state(config: &Config, path: &Path, seed: Option<u64>) -> CliResult<PaletteState> {
    if !path.is_file() {
        return Err(CliError::io(format!(
            "Palette file not found: {}",
            path.display()
        )));
    }

    let doc = PaletteService::load(path)
        .map_err(|e| CliError::validation(format!("Failed to load palette: {e:#}")))?;

    let mut state = new_state(config, seed);
    state.import(doc)?;
    Ok(state)
}

/// Writes the engine's export back to `path`.
pub fn save_state(state: &PaletteState, path: &Path) -> CliResult<()> {
    PaletteService::save(&state.export(), path)
        .map_err(|e| CliError::io(format!("Failed to save palette: {e:#}")))
}
