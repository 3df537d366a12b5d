//! CLI command handlers for Pally.
//!
//! Each command works on a palette JSON file: it imports the document into a
//! palette engine, applies one operation, and writes the export back.

pub mod common;
pub mod config;
pub mod edit;
pub mod new;
pub mod show;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use edit::{RenameArgs, ResetArgs, ResizeArgs, SetColorArgs};
pub use new::NewArgs;
pub use show::{DeriveArgs, ShowArgs};
pub use validate::ValidateArgs;
