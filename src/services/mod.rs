//! Palette engine services.
//!
//! Color generation, shade derivation, the index-aligned palette state, and
//! document serialization. Everything except [`documents`] is pure and
//! performs no I/O.

pub mod documents;
pub mod generator;
pub mod serializer;
pub mod shades;
pub mod synchronizer;

// Re-export commonly used types and functions
pub use documents::PaletteService;
pub use generator::{ColorGenerator, GeneratorSettings, HueDistance};
pub use shades::{derive_all, derive_shades};
pub use synchronizer::{EngineSettings, PaletteState};
