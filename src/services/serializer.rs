//! Palette document encoding, validation, and file naming.

use chrono::{DateTime, TimeZone};

use crate::error::{PaletteError, PaletteResult};
use crate::models::document::RawPaletteDocument;
use crate::models::{Color, PaletteDocument};

/// Renders a document as pretty JSON with two-space indentation.
pub fn to_pretty_json(doc: &PaletteDocument) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

/// Parses a document from JSON.
///
/// Structural problems and unparseable colors are both reported as
/// [`PaletteError::InvalidDocument`], naming the offending color index.
/// Array lengths are checked separately by [`validate_document`].
pub fn parse_document(json: &str) -> PaletteResult<PaletteDocument> {
    let raw: RawPaletteDocument = serde_json::from_str(json)
        .map_err(|e| PaletteError::invalid_document(e.to_string()))?;

    let colors = raw
        .colors
        .iter()
        .enumerate()
        .map(|(index, input)| {
            Color::parse(input)
                .map_err(|e| PaletteError::invalid_document(format!("colors[{index}]: {e}")))
        })
        .collect::<PaletteResult<Vec<_>>>()?;

    Ok(PaletteDocument {
        colors,
        names: raw.names,
        palette: raw.palette,
    })
}

/// Checks that a document can replace an engine's state.
///
/// `colors`, `names`, and a present `palette` must share one length between
/// 1 and `max_count`. Palette entries are trusted as given and are matched
/// to slots by position, not by name.
pub fn validate_document(doc: &PaletteDocument, max_count: usize) -> PaletteResult<()> {
    let n = doc.colors.len();

    if doc.names.len() != n {
        return Err(PaletteError::invalid_document(format!(
            "{} colors but {} names",
            n,
            doc.names.len()
        )));
    }

    if n == 0 {
        return Err(PaletteError::invalid_document("document has no colors"));
    }

    if n > max_count {
        return Err(PaletteError::invalid_document(format!(
            "{n} colors exceeds the maximum of {max_count}"
        )));
    }

    if let Some(palette) = &doc.palette {
        if palette.len() != n {
            return Err(PaletteError::invalid_document(format!(
                "{} colors but {} palette entries",
                n,
                palette.len()
            )));
        }
    }

    Ok(())
}

/// File name for an export made at `at`: `palette_<YYYY-MM-DD-HH-mm>.json`.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use pally::services::serializer::export_file_name;
///
/// let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();
/// assert_eq!(export_file_name(&at), "palette_2024-03-09-14-05.json");
/// ```
pub fn export_file_name<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!("palette_{}.json", at.format("%Y-%m-%d-%H-%M"))
}
