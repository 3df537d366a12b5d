//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Pally";

/// Number of slots in a fresh or reset palette.
pub const DEFAULT_COLOR_COUNT: usize = 4;

/// Largest slot count accepted by default.
pub const MAX_COLOR_COUNT: usize = 24;

/// Prefix for generated slot names (`color1`, `color2`, ...).
pub const DEFAULT_NAME_PREFIX: &str = "color";
