//! Pally Library
//!
//! Derives tonal shade palettes from a list of base colors and keeps colors,
//! slot names, and derived shades index-aligned as the palette grows, shrinks,
//! or is edited. Palettes round-trip losslessly through a JSON document.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;

pub use error::{PaletteError, PaletteResult};
