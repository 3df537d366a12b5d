//! Data models for colors, shades, and palette documents.
//!
//! Models are independent of the engine state and of any I/O.

pub mod color;
pub mod document;
pub mod shade;

// Re-export all model types
pub use color::{Color, Hsl, TextColor};
pub use document::{PaletteDocument, PaletteEntry};
pub use shade::{ShadeKey, ShadeSet, ShadeTable};
