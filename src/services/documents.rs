//! Palette document file I/O.
//!
//! The engine never touches the filesystem; this service reads and writes
//! the materialized JSON on its behalf.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::PaletteDocument;
use crate::services::serializer;

/// Service for loading and saving palette documents.
pub struct PaletteService;

impl PaletteService {
    /// Loads and parses a palette document.
    ///
    /// Parsing covers JSON structure and color syntax. Length checks happen
    /// when the document is imported into a [`PaletteState`].
    ///
    /// [`PaletteState`]: crate::services::PaletteState
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use pally::services::PaletteService;
    ///
    /// let doc = PaletteService::load(Path::new("palette.json"))?;
    /// println!("{} colors", doc.colors.len());
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn load(path: &Path) -> Result<PaletteDocument> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette file {}", path.display()))?;

        serializer::parse_document(&content)
            .with_context(|| format!("Failed to parse palette file {}", path.display()))
    }

    /// Saves a document as pretty JSON.
    ///
    /// Writes to a temp file next to `path` and renames it into place, so a
    /// failed save never leaves a truncated document behind.
    pub fn save(doc: &PaletteDocument, path: &Path) -> Result<()> {
        let mut content =
            serializer::to_pretty_json(doc).context("Failed to serialize palette document")?;
        content.push('\n');

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory {}", parent.display())
            })?;
        }

        let temp_path = temp_path_for(path);
        fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temp file {}", temp_path.display()))?;

        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to save palette to {}", path.display()))?;

        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::PaletteState;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("palette.json");
        let doc = PaletteState::default().export();

        PaletteService::save(&doc, &path).unwrap();
        assert!(path.exists());
        assert!(!temp_path_for(&path).exists());

        let loaded = PaletteService::load(&path).unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = PaletteService::load(&temp.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read palette file"));
    }

    #[test]
    fn test_load_invalid_color() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, r##"{"colors":["#zzzzzz"],"names":["x"]}"##).unwrap();

        let err = PaletteService::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("colors[0]"));
    }

    #[test]
    fn test_temp_path_keeps_directory() {
        let path = Path::new("/tmp/out/palette.json");
        assert_eq!(temp_path_for(path), Path::new("/tmp/out/palette.json.tmp"));
    }
}
