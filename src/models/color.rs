//! Hex color values and HSL conversion.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]
// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Allow float comparisons in HSL conversion (standard algorithms)
#![allow(clippy::float_cmp)]

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PaletteError, PaletteResult};

/// Pattern every accepted color must match: `#RGB` or `#RRGGBB`, any case.
pub const HEX_PATTERN: &str = r"^#([0-9A-Fa-f]{3}){1,2}$";

/// Luminance at or above which dark foreground text is legible.
pub const TEXT_LUMINANCE_THRESHOLD: f64 = 0.5;

/// A validated sRGB color.
///
/// Colors are only constructed from a successful hex parse or from an HSL
/// triple, so every value in the model is representable as `#rrggbb`.
/// Serialized form is always the lowercase six-digit hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

/// Hue, saturation, lightness triple.
///
/// `h` is in degrees `[0, 360)`, `s` and `l` are in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Lightness
    pub l: f64,
}

/// Foreground text color chosen for legibility on a swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    /// Dark text for light backgrounds
    Black,
    /// Light text for dark backgrounds
    White,
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Black => write!(f, "black"),
            Self::White => write!(f, "white"),
        }
    }
}

impl Color {
    /// Creates a new `Color` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a color from `#RGB` or `#RRGGBB` (case-insensitive).
    ///
    /// Short forms expand by doubling each digit, so `#f0a` is `#ff00aa`.
    /// Whitespace and a missing `#` are rejected rather than corrected.
    ///
    /// # Examples
    ///
    /// ```
    /// use pally::models::Color;
    ///
    /// let color = Color::parse("#FF8000").unwrap();
    /// assert_eq!(color, Color::new(255, 128, 0));
    ///
    /// let short = Color::parse("#f80").unwrap();
    /// assert_eq!(short.to_hex(), "#ff8800");
    ///
    /// assert!(Color::parse("ff8000").is_err());
    /// ```
    pub fn parse(input: &str) -> PaletteResult<Self> {
        let invalid = || PaletteError::InvalidColor {
            input: input.to_string(),
        };

        let hex_regex = Regex::new(HEX_PATTERN).map_err(|_| invalid())?;
        if !hex_regex.is_match(input) {
            return Err(invalid());
        }

        let digits = &input[1..];
        let expanded = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect::<String>()
        } else {
            digits.to_string()
        };

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16).map_err(|_| invalid())
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Returns true if `input` would be accepted by [`Color::parse`].
    #[must_use]
    pub fn is_valid_hex(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// Converts the color to a lowercase hex string, `#rrggbb`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pally::models::Color;
    ///
    /// assert_eq!(Color::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to HSL.
    ///
    /// Achromatic colors report hue `0.0`; use [`Color::hue`] to tell them apart.
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let l = (max + min) / 2.0;

        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let s = delta / (1.0 - (2.0 * l - 1.0).abs());

        let h = if max == r {
            60.0 * (((g - b) / delta) % 6.0)
        } else if max == g {
            60.0 * (((b - r) / delta) + 2.0)
        } else {
            60.0 * (((r - g) / delta) + 4.0)
        };

        Hsl {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 1.0),
            l,
        }
    }

    /// Hue in degrees, or `None` for grays where hue is undefined.
    #[must_use]
    pub fn hue(&self) -> Option<f64> {
        if self.r == self.g && self.g == self.b {
            None
        } else {
            Some(self.to_hsl().h)
        }
    }

    /// Creates a color from HSL. Out-of-range inputs are wrapped (hue) or
    /// clamped (saturation, lightness), so this never fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use pally::models::{Color, Hsl};
    ///
    /// let red = Color::from_hsl(Hsl::new(0.0, 1.0, 0.5));
    /// assert_eq!(red, Color::new(255, 0, 0));
    /// ```
    #[must_use]
    #[allow(clippy::many_single_char_names)] // Standard RGB/HSL color model uses single-char names
    pub fn from_hsl(hsl: Hsl) -> Self {
        let h = if hsl.h.is_finite() {
            hsl.h.rem_euclid(360.0)
        } else {
            0.0
        };
        let s = hsl.s.clamp(0.0, 1.0);
        let l = hsl.l.clamp(0.0, 1.0);

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h_prime = h / 60.0;
        let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if h_prime < 1.0 {
            (c, x, 0.0)
        } else if h_prime < 2.0 {
            (x, c, 0.0)
        } else if h_prime < 3.0 {
            (0.0, c, x)
        } else if h_prime < 4.0 {
            (0.0, x, c)
        } else if h_prime < 5.0 {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        let to_channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Self::new(to_channel(r), to_channel(g), to_channel(b))
    }

    /// WCAG relative luminance in `[0, 1]`.
    ///
    /// Only used to pick a legible foreground for rendering; shade
    /// derivation never consults it.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        let linear = |channel: u8| {
            let c = f64::from(channel) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        };

        0.0722f64.mul_add(
            linear(self.b),
            0.2126f64.mul_add(linear(self.r), 0.7152 * linear(self.g)),
        )
    }

    /// Text color to draw on top of this color.
    #[must_use]
    pub fn text_color(&self) -> TextColor {
        if self.luminance() < TEXT_LUMINANCE_THRESHOLD {
            TextColor::White
        } else {
            TextColor::Black
        }
    }
}

impl Hsl {
    /// Creates a new HSL triple without normalizing it.
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Parses a hex string straight to HSL.
    pub fn parse_hex(input: &str) -> PaletteResult<Self> {
        Color::parse(input).map(|color| color.to_hsl())
    }

    /// Converts back to a color, see [`Color::from_hsl`].
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_hsl(self)
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Color {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
