//! Shared test fixtures for engine and CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use pally::models::PaletteDocument;
use pally::services::{EngineSettings, PaletteService, PaletteState};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Path to the pally binary
pub fn pally_bin() -> &'static str {
    env!("CARGO_BIN_EXE_pally")
}

/// A reproducible engine with default settings.
pub fn seeded_state(seed: u64) -> PaletteState {
    PaletteState::with_seed(EngineSettings::default(), seed)
}

/// Temp workspace holding an isolated config directory and palette files.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Runs pally with the workspace config directory.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(pally_bin())
            .env("PALLY_CONFIG_DIR", self.config_dir())
            .env_remove("RUST_LOG")
            .current_dir(self.dir.path())
            .args(args)
            .output()
            .expect("Failed to execute command")
    }

    /// Writes a palette document to `name` and returns its path.
    pub fn write_palette(&self, name: &str, doc: &PaletteDocument) -> PathBuf {
        let path = self.path(name);
        PaletteService::save(doc, &path).expect("Failed to write palette");
        path
    }

    /// Writes raw text to `name` and returns its path.
    pub fn write_raw(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Reads a palette document back.
pub fn read_palette(path: &Path) -> PaletteDocument {
    PaletteService::load(path).expect("Failed to read palette")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
