//! Shade keys, shade sets, and the offset table that drives derivation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Color;

/// One of the fixed tonal variants derived from a base color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadeKey {
    /// The base color itself
    Main,
    /// Darker variant
    Dark,
    /// Lighter variant
    Light,
    /// Much lighter variant, typically a background tint
    Lighter,
}

impl ShadeKey {
    /// All shade keys in their canonical output order.
    pub const ALL: [Self; 4] = [Self::Main, Self::Dark, Self::Light, Self::Lighter];

    /// Key as it appears in exported documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Lighter => "lighter",
        }
    }
}

impl fmt::Display for ShadeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived colors for one base color.
///
/// Field order is the serialization order, so exported documents always list
/// `main, dark, light, lighter` regardless of how they were read in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShadeSet {
    /// Identity shade
    pub main: Color,
    /// Darker shade
    pub dark: Color,
    /// Lighter shade
    pub light: Color,
    /// Lightest shade
    pub lighter: Color,
}

impl ShadeSet {
    /// Returns the color stored under `key`.
    #[must_use]
    pub const fn get(&self, key: ShadeKey) -> Color {
        match key {
            ShadeKey::Main => self.main,
            ShadeKey::Dark => self.dark,
            ShadeKey::Light => self.light,
            ShadeKey::Lighter => self.lighter,
        }
    }

    /// Iterates `(key, color)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (ShadeKey, Color)> + '_ {
        ShadeKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Lightness offsets and desaturation applied to non-main shades.
///
/// Each offset is in tenths of lightness: `-1.0` darkens by `0.1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadeTable {
    /// Saturation multiplier for every non-main shade
    pub desaturation: f64,
    /// Offset for the `dark` shade
    pub dark: f64,
    /// Offset for the `light` shade
    pub light: f64,
    /// Offset for the `lighter` shade
    pub lighter: f64,
}

/// Lightness change per unit of shade offset.
pub const LIGHTNESS_STEP: f64 = 0.1;

impl ShadeTable {
    /// The ramp used by default: `dark = -1`, `light = 1`, `lighter = 4`.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            desaturation: 0.8,
            dark: -1.0,
            light: 1.0,
            lighter: 4.0,
        }
    }

    /// A wider ramp with a deeper dark and a slightly stronger light.
    #[must_use]
    pub const fn deep() -> Self {
        Self {
            desaturation: 0.85,
            dark: -2.0,
            light: 1.25,
            lighter: 4.0,
        }
    }

    /// Offset for `key`, or `None` for `main` which is never adjusted.
    #[must_use]
    pub const fn offset(&self, key: ShadeKey) -> Option<f64> {
        match key {
            ShadeKey::Main => None,
            ShadeKey::Dark => Some(self.dark),
            ShadeKey::Light => Some(self.light),
            ShadeKey::Lighter => Some(self.lighter),
        }
    }
}

impl Default for ShadeTable {
    fn default() -> Self {
        Self::standard()
    }
}
