//! Palette state: base colors, slot names, and the derived palette.
//!
//! `PaletteState` is the single owner of the three collections. Every
//! mutator builds its result off to the side and commits it in one step, so
//! the collections always have equal length when observed from outside.

use std::collections::HashSet;

use tracing::debug;

use crate::constants::{DEFAULT_COLOR_COUNT, DEFAULT_NAME_PREFIX, MAX_COLOR_COUNT};
use crate::error::{PaletteError, PaletteResult};
use crate::models::{Color, PaletteDocument, PaletteEntry, ShadeTable};
use crate::services::generator::{ColorGenerator, GeneratorSettings};
use crate::services::serializer;
use crate::services::shades::derive_all;

/// Everything that parameterizes a palette engine.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Slot count for a fresh or reset palette
    pub default_count: usize,
    /// Largest accepted slot count
    pub max_count: usize,
    /// Color generation policy
    pub generator: GeneratorSettings,
    /// Shade offset table
    pub shades: ShadeTable,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_count: DEFAULT_COLOR_COUNT,
            max_count: MAX_COLOR_COUNT,
            generator: GeneratorSettings::default(),
            shades: ShadeTable::default(),
        }
    }
}

/// Default name of the slot at `index` (`color1` for index 0).
#[must_use]
pub fn default_name(index: usize) -> String {
    format!("{DEFAULT_NAME_PREFIX}{}", index + 1)
}

/// Index-aligned base colors, names, and derived palette.
#[derive(Debug, Clone)]
pub struct PaletteState {
    colors: Vec<Color>,
    names: Vec<String>,
    palette: Vec<PaletteEntry>,
    default_count: usize,
    max_count: usize,
    shades: ShadeTable,
    generator: ColorGenerator,
}

impl PaletteState {
    /// Creates a palette in its reset state, with growth seeded from the OS.
    #[must_use]
    pub fn new(settings: EngineSettings) -> Self {
        let generator = ColorGenerator::new(settings.generator.clone());
        Self::with_generator(settings, generator)
    }

    /// Creates a palette whose random growth is reproducible.
    #[must_use]
    pub fn with_seed(settings: EngineSettings, seed: u64) -> Self {
        let generator = ColorGenerator::with_seed(settings.generator.clone(), seed);
        Self::with_generator(settings, generator)
    }

    fn with_generator(settings: EngineSettings, generator: ColorGenerator) -> Self {
        let max_count = settings.max_count.max(1);
        let mut state = Self {
            colors: Vec::new(),
            names: Vec::new(),
            palette: Vec::new(),
            default_count: settings.default_count.clamp(1, max_count),
            max_count,
            shades: settings.shades,
            generator,
        };
        state.reset();
        state
    }

    /// Number of slots.
    #[must_use]
    pub fn count(&self) -> usize {
        self.colors.len()
    }

    /// Base colors, one per slot.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Slot names.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Derived palette.
    #[must_use]
    pub fn palette(&self) -> &[PaletteEntry] {
        &self.palette
    }

    /// Largest count accepted by [`PaletteState::set_count`].
    #[must_use]
    pub const fn max_count(&self) -> usize {
        self.max_count
    }

    /// Shade table used for derivation.
    #[must_use]
    pub const fn shade_table(&self) -> &ShadeTable {
        &self.shades
    }

    /// Grows or shrinks the palette to `n` slots.
    ///
    /// Growth appends generated colors that keep their hue distance from every
    /// color already present, including ones added earlier in the same call,
    /// and names them `color{k}` continuing from the current length. Shrinking
    /// drops slots from the end. Surviving slots are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidCount`] when `n` is zero or above the
    /// maximum; the palette is left unchanged.
    pub fn set_count(&mut self, n: usize) -> PaletteResult<()> {
        if n == 0 || n > self.max_count {
            return Err(PaletteError::InvalidCount {
                requested: n,
                max: self.max_count,
            });
        }

        let current = self.count();
        if n == current {
            return Ok(());
        }

        if n < current {
            debug!(from = current, to = n, "Shrinking palette");
            self.colors.truncate(n);
            self.names.truncate(n);
            self.rederive();
            return Ok(());
        }

        debug!(from = current, to = n, "Growing palette");
        let mut colors = self.colors.clone();
        for _ in current..n {
            let next = self.generator.next_distinct(&colors);
            colors.push(next);
        }

        let mut taken: HashSet<String> = self.names.iter().cloned().collect();
        let mut names = self.names.clone();
        let mut index = current;
        while names.len() < n {
            let candidate = default_name(index);
            index += 1;
            if taken.insert(candidate.clone()) {
                names.push(candidate);
            }
        }

        self.colors = colors;
        self.names = names;
        self.rederive();
        Ok(())
    }

    /// Replaces the base color of slot `index`.
    ///
    /// Input that is not a complete hex color, including a lone `#`, is
    /// treated as an edit in progress and ignored. Returns whether the color
    /// was applied.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::IndexOutOfRange`] for a slot past the end.
    pub fn set_color_at(&mut self, index: usize, input: &str) -> PaletteResult<bool> {
        self.check_index(index)?;

        match Color::parse(input) {
            Ok(color) => {
                self.colors[index] = color;
                self.rederive();
                Ok(true)
            }
            Err(_) => {
                debug!(index, input, "Ignoring incomplete color edit");
                Ok(false)
            }
        }
    }

    /// Renames slot `index`. Duplicate names are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::IndexOutOfRange`] for a slot past the end.
    pub fn set_name_at(&mut self, index: usize, name: impl Into<String>) -> PaletteResult<()> {
        self.check_index(index)?;
        self.names[index] = name.into();
        self.rederive();
        Ok(())
    }

    /// Restores the default count, the initial hue wheel, and default names.
    pub fn reset(&mut self) {
        debug!(count = self.default_count, "Resetting palette");
        self.colors = self.generator.initial_ramp(self.default_count);
        self.names = (0..self.default_count).map(default_name).collect();
        self.rederive();
    }

    /// Snapshot of the current state as a document.
    #[must_use]
    pub fn export(&self) -> PaletteDocument {
        PaletteDocument {
            colors: self.colors.clone(),
            names: self.names.clone(),
            palette: Some(self.palette.clone()),
        }
    }

    /// Replaces the whole state with `doc`.
    ///
    /// A supplied palette is taken as-is; a missing one is derived.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidDocument`] if the document fails
    /// validation; the current state is kept.
    pub fn import(&mut self, doc: PaletteDocument) -> PaletteResult<()> {
        serializer::validate_document(&doc, self.max_count)?;

        let PaletteDocument {
            colors,
            names,
            palette,
        } = doc;

        debug!(
            count = colors.len(),
            derived = palette.is_none(),
            "Importing palette document"
        );

        let palette = palette.unwrap_or_else(|| derive_all(&colors, &names, &self.shades));
        self.colors = colors;
        self.names = names;
        self.palette = palette;
        Ok(())
    }

    /// Parses `json` and imports it, see [`PaletteState::import`].
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidDocument`] for malformed JSON or a
    /// document that fails validation.
    pub fn import_json(&mut self, json: &str) -> PaletteResult<()> {
        let doc = serializer::parse_document(json)?;
        self.import(doc)
    }

    fn check_index(&self, index: usize) -> PaletteResult<()> {
        if index < self.count() {
            Ok(())
        } else {
            Err(PaletteError::IndexOutOfRange {
                index,
                len: self.count(),
            })
        }
    }

    fn rederive(&mut self) {
        self.palette = derive_all(&self.colors, &self.names, &self.shades);
    }
}

impl Default for PaletteState {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}
