//! Shade derivation.
//!
//! A shade keeps the base hue, scales saturation by the table's
//! desaturation factor, and moves lightness by `offset * 0.1`. Both
//! saturation and lightness are clamped to `[0, 1]`. `main` is the base
//! color unchanged.

use crate::models::shade::LIGHTNESS_STEP;
use crate::models::{Color, Hsl, PaletteEntry, ShadeKey, ShadeSet, ShadeTable};

/// Derives one shade of `base`.
#[must_use]
pub fn derive_shade(base: Color, key: ShadeKey, table: &ShadeTable) -> Color {
    let Some(offset) = table.offset(key) else {
        return base;
    };

    let hsl = base.to_hsl();
    Color::from_hsl(Hsl::new(
        hsl.h,
        (hsl.s * table.desaturation).clamp(0.0, 1.0),
        offset.mul_add(LIGHTNESS_STEP, hsl.l).clamp(0.0, 1.0),
    ))
}

/// Derives the full shade set for `base`.
///
/// # Examples
///
/// ```
/// use pally::models::{Color, ShadeTable};
/// use pally::services::shades::derive_shades;
///
/// let red = Color::parse("#ff0000").unwrap();
/// let shades = derive_shades(red, &ShadeTable::standard());
/// assert_eq!(shades.main, red);
/// assert_eq!(shades.dark.to_hex(), "#b81414");
/// ```
#[must_use]
pub fn derive_shades(base: Color, table: &ShadeTable) -> ShadeSet {
    ShadeSet {
        main: base,
        dark: derive_shade(base, ShadeKey::Dark, table),
        light: derive_shade(base, ShadeKey::Light, table),
        lighter: derive_shade(base, ShadeKey::Lighter, table),
    }
}

/// Derives the whole palette from index-aligned colors and names.
///
/// Callers keep `colors` and `names` the same length; extra items on either
/// side are ignored.
#[must_use]
pub fn derive_all(colors: &[Color], names: &[String], table: &ShadeTable) -> Vec<PaletteEntry> {
    debug_assert_eq!(colors.len(), names.len());
    colors
        .iter()
        .zip(names)
        .map(|(&color, name)| PaletteEntry::new(name.clone(), derive_shades(color, table)))
        .collect()
}
