//! Palette document: the export/import unit.
//!
//! Wire format:
//!
//! ```json
//! {
//!   "colors": ["#cf1717", "..."],
//!   "names": ["color1", "..."],
//!   "palette": [
//!     { "color1": { "main": "#cf1717", "dark": "...", "light": "...", "lighter": "..." } }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Color, ShadeSet};

/// One slot of a derived palette, keyed by the slot name.
///
/// Serialized as a single-key object `{ "<name>": { ...shades } }`.
/// Names are not unique across a palette; consumers must address entries by
/// position, never by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, ShadeSet>",
    into = "BTreeMap<String, ShadeSet>"
)]
pub struct PaletteEntry {
    /// Slot name the shades are published under
    pub name: String,
    /// Derived shades
    pub shades: ShadeSet,
}

impl PaletteEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(name: impl Into<String>, shades: ShadeSet) -> Self {
        Self {
            name: name.into(),
            shades,
        }
    }
}

impl TryFrom<BTreeMap<String, ShadeSet>> for PaletteEntry {
    type Error = String;

    fn try_from(map: BTreeMap<String, ShadeSet>) -> Result<Self, Self::Error> {
        if map.len() != 1 {
            return Err(format!(
                "palette entry must have exactly one name, found {}",
                map.len()
            ));
        }
        map.into_iter()
            .next()
            .map(|(name, shades)| Self { name, shades })
            .ok_or_else(|| "palette entry is empty".to_string())
    }
}

impl From<PaletteEntry> for BTreeMap<String, ShadeSet> {
    fn from(entry: PaletteEntry) -> Self {
        Self::from([(entry.name, entry.shades)])
    }
}

/// Snapshot of an engine's full state.
///
/// `palette` is optional on the way in: documents without it are re-derived
/// on import. Exports always carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteDocument {
    /// Base colors, one per slot
    pub colors: Vec<Color>,
    /// Slot names, index-aligned with `colors`
    pub names: Vec<String>,
    /// Derived shades, index-aligned with `colors`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<Vec<PaletteEntry>>,
}

/// Document shape accepted before color validation.
///
/// Colors stay as raw strings so a bad entry can be reported by index.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawPaletteDocument {
    pub colors: Vec<String>,
    pub names: Vec<String>,
    #[serde(default)]
    pub palette: Option<Vec<PaletteEntry>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red_shades() -> ShadeSet {
        ShadeSet {
            main: Color::new(255, 0, 0),
            dark: Color::new(200, 0, 0),
            light: Color::new(255, 60, 60),
            lighter: Color::new(255, 220, 220),
        }
    }

    #[test]
    fn test_entry_serializes_as_single_key_object() {
        let entry = PaletteEntry::new("brand", red_shades());
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["brand"]["main"], "#ff0000");
        assert_eq!(value.as_object().unwrap().len(), 1);

        let back: PaletteEntry = serde_json::from_value(value).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_entry_rejects_zero_or_many_names() {
        assert!(serde_json::from_str::<PaletteEntry>("{}").is_err());

        let two = serde_json::json!({
            "a": serde_json::to_value(red_shades()).unwrap(),
            "b": serde_json::to_value(red_shades()).unwrap(),
        });
        assert!(serde_json::from_value::<PaletteEntry>(two).is_err());
    }

    #[test]
    fn test_document_without_palette() {
        let doc: PaletteDocument =
            serde_json::from_str(r##"{"colors":["#ff0000"],"names":["red"]}"##).unwrap();
        assert_eq!(doc.colors, vec![Color::new(255, 0, 0)]);
        assert!(doc.palette.is_none());

        let json = serde_json::to_string(&doc).unwrap();
        assert!(!json.contains("palette"));
    }
}
