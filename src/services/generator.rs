//! Base color generation.
//!
//! Two strategies: an evenly spaced hue wheel for fresh palettes, and a
//! randomized hue that keeps its distance from colors already in use.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Color, Hsl};

/// How the distance between two hues is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueDistance {
    /// Shortest way around the wheel, so 350° and 10° are 20° apart
    #[default]
    Circular,
    /// Plain absolute difference, so 350° and 10° are 340° apart
    Linear,
}

impl HueDistance {
    /// Distance between two hues in degrees.
    #[must_use]
    pub fn between(self, a: f64, b: f64) -> f64 {
        let diff = (a - b).abs();
        match self {
            Self::Linear => diff,
            Self::Circular => {
                let diff = diff % 360.0;
                diff.min(360.0 - diff)
            }
        }
    }
}

/// Tunable constants for color generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Saturation of the initial hue wheel
    pub ramp_saturation: f64,
    /// Lightness of the initial hue wheel
    pub ramp_lightness: f64,
    /// Saturation of randomly generated colors
    pub random_saturation: f64,
    /// Lightness of randomly generated colors
    pub random_lightness: f64,
    /// Minimum hue distance, in degrees, from every existing color
    pub min_hue_distance: f64,
    /// Candidate draws before settling for the best one seen
    pub max_attempts: u32,
    /// Hue distance metric
    pub hue_distance: HueDistance,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            ramp_saturation: 0.8,
            ramp_lightness: 0.45,
            random_saturation: 0.9,
            random_lightness: 0.5,
            min_hue_distance: 30.0,
            max_attempts: 128,
            hue_distance: HueDistance::Circular,
        }
    }
}

/// Produces `n` colors evenly spaced around the hue wheel, starting at red.
///
/// # Examples
///
/// ```
/// use pally::services::generator::initial_ramp;
///
/// let ramp = initial_ramp(4, 0.8, 0.45);
/// assert_eq!(ramp[0].to_hex(), "#cf1717");
/// assert_eq!(ramp.len(), 4);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn initial_ramp(n: usize, saturation: f64, lightness: f64) -> Vec<Color> {
    let step = if n == 0 { 0.0 } else { 360.0 / n as f64 };
    (0..n)
        .map(|i| Color::from_hsl(Hsl::new(i as f64 * step, saturation, lightness)))
        .collect()
}

/// Base color source for a palette.
#[derive(Debug, Clone)]
pub struct ColorGenerator {
    settings: GeneratorSettings,
    rng: StdRng,
}

impl ColorGenerator {
    /// Creates a generator seeded from the operating system.
    #[must_use]
    pub fn new(settings: GeneratorSettings) -> Self {
        Self {
            settings,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a generator with reproducible output.
    #[must_use]
    pub fn with_seed(settings: GeneratorSettings, seed: u64) -> Self {
        Self {
            settings,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The initial hue wheel of `n` colors.
    #[must_use]
    pub fn initial_ramp(&self, n: usize) -> Vec<Color> {
        initial_ramp(n, self.settings.ramp_saturation, self.settings.ramp_lightness)
    }

    /// Draws a random hue that sits at least `min_hue_distance` away from
    /// every chromatic color in `existing`.
    ///
    /// Grays have no hue and never block a candidate. Distance is measured on
    /// the hue of the final rounded color, so re-parsing the result yields a
    /// hue that still clears the threshold. After `max_attempts` misses every
    /// whole-degree hue is scanned and the one furthest from its nearest
    /// neighbour is returned.
    pub fn next_distinct(&mut self, existing: &[Color]) -> Color {
        let existing_hues: Vec<f64> = existing.iter().filter_map(Color::hue).collect();
        let min_distance = self.settings.min_hue_distance;

        for attempt in 0..self.settings.max_attempts {
            let hue = f64::from(self.rng.random_range(0u16..360));
            let (candidate, nearest) = self.candidate(hue, &existing_hues);
            if nearest >= min_distance {
                debug!(attempt, hue, "Accepted distinct hue");
                return candidate;
            }
        }

        let mut best: Option<(Color, f64)> = None;
        for hue in 0u16..360 {
            let (candidate, nearest) = self.candidate(f64::from(hue), &existing_hues);
            if best.is_none_or(|(_, distance)| nearest > distance) {
                best = Some((candidate, nearest));
            }
        }

        let Some((color, nearest)) = best else {
            return self.candidate(0.0, &existing_hues).0;
        };
        if nearest >= min_distance {
            debug!(
                attempts = self.settings.max_attempts,
                "Random draws missed, scanned wheel for a distinct hue"
            );
        } else {
            warn!(
                existing = existing_hues.len(),
                nearest,
                "No hue clears the minimum distance, using the widest gap"
            );
        }
        color
    }

    /// The rounded color for `hue` and its distance to the nearest existing hue.
    fn candidate(&self, hue: f64, existing_hues: &[f64]) -> (Color, f64) {
        let settings = &self.settings;
        let color = Hsl::new(hue, settings.random_saturation, settings.random_lightness).to_color();
        let actual = color.hue().unwrap_or(hue);
        let nearest = existing_hues
            .iter()
            .map(|&h| settings.hue_distance.between(h, actual))
            .fold(f64::INFINITY, f64::min);
        (color, nearest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_distance_circular_wraps() {
        assert!((HueDistance::Circular.between(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((HueDistance::Circular.between(10.0, 350.0) - 20.0).abs() < 1e-9);
        assert!((HueDistance::Circular.between(0.0, 180.0) - 180.0).abs() < 1e-9);
        assert!((HueDistance::Circular.between(90.0, 90.0)).abs() < 1e-9);
    }

    #[test]
    fn test_hue_distance_linear_does_not_wrap() {
        assert!((HueDistance::Linear.between(350.0, 10.0) - 340.0).abs() < 1e-9);
        assert!((HueDistance::Linear.between(120.0, 100.0) - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_initial_ramp_spacing() {
        let ramp = initial_ramp(4, 0.8, 0.45);
        let hexes: Vec<_> = ramp.iter().map(Color::to_hex).collect();
        assert_eq!(hexes, ["#cf1717", "#73cf17", "#17cfcf", "#7317cf"]);

        let hues: Vec<_> = ramp.iter().map(|c| c.hue().unwrap().round()).collect();
        assert_eq!(hues, [0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn test_initial_ramp_edges() {
        assert!(initial_ramp(0, 0.8, 0.45).is_empty());
        let single = initial_ramp(1, 0.8, 0.45);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].hue().map(f64::round), Some(0.0));
    }

    #[test]
    fn test_next_distinct_keeps_distance() {
        let mut generator = ColorGenerator::with_seed(GeneratorSettings::default(), 7);
        let mut colors = generator.initial_ramp(4);

        for _ in 0..3 {
            let next = generator.next_distinct(&colors);
            let hue = next.hue().unwrap();
            for existing in &colors {
                let distance = HueDistance::Circular.between(existing.hue().unwrap(), hue);
                assert!(distance >= 30.0, "{next} is {distance}° from {existing}");
            }
            colors.push(next);
        }
    }

    #[test]
    fn test_next_distinct_uses_generation_constants() {
        let mut generator = ColorGenerator::with_seed(GeneratorSettings::default(), 1);
        let hsl = generator.next_distinct(&[]).to_hsl();
        assert!((hsl.s - 0.9).abs() < 0.02);
        assert!((hsl.l - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_next_distinct_ignores_grays() {
        let grays = [Color::new(0, 0, 0), Color::new(128, 128, 128)];
        let settings = GeneratorSettings {
            max_attempts: 1,
            ..GeneratorSettings::default()
        };
        let mut generator = ColorGenerator::with_seed(settings, 3);
        // A single attempt must succeed when nothing has a hue to avoid
        let next = generator.next_distinct(&grays);
        assert!(next.hue().is_some());
    }

    #[test]
    fn test_next_distinct_terminates_when_wheel_is_full() {
        let settings = GeneratorSettings {
            max_attempts: 16,
            ..GeneratorSettings::default()
        };
        let crowded = initial_ramp(24, 0.9, 0.5);
        let mut generator = ColorGenerator::with_seed(settings, 11);
        let next = generator.next_distinct(&crowded);
        assert!(next.hue().is_some());
    }

    #[test]
    fn test_zero_attempts_scans_for_widest_gap() {
        let settings = GeneratorSettings {
            max_attempts: 0,
            ..GeneratorSettings::default()
        };
        let mut generator = ColorGenerator::with_seed(settings, 0);
        let next = generator.next_distinct(&[Color::new(255, 0, 0)]);
        let hue = next.hue().unwrap();
        assert!((hue - 180.0).abs() < 1.0, "expected the opposite hue, got {hue}");
    }

    #[test]
    fn test_exhausted_draws_still_find_the_only_gap() {
        // Hues 0..=270 every 30° leave free room only between 300° and 330°
        let crowded: Vec<Color> = (0..10u8)
            .map(|i| Color::from_hsl(Hsl::new(f64::from(i) * 30.0, 0.9, 0.5)))
            .collect();
        let settings = GeneratorSettings {
            max_attempts: 1,
            ..GeneratorSettings::default()
        };

        for seed in 0..50 {
            let mut generator = ColorGenerator::with_seed(settings.clone(), seed);
            let next = generator.next_distinct(&crowded);
            let hue = next.hue().unwrap();
            for existing in &crowded {
                let distance = HueDistance::Circular.between(existing.hue().unwrap(), hue);
                assert!(distance >= 30.0, "seed {seed}: {next} is {distance}° from {existing}");
            }
        }
    }

    fn nearest_to(colors: &[Color], hue: f64) -> f64 {
        colors
            .iter()
            .filter_map(Color::hue)
            .map(|h| HueDistance::Circular.between(h, hue))
            .fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn test_growth_from_two_reds_stays_distinct_while_room_remains() {
        for seed in 0..200 {
            let mut generator = ColorGenerator::with_seed(GeneratorSettings::default(), seed);
            let mut colors = vec![
                Color::parse("#ff0000").unwrap(),
                Color::parse("#ff0033").unwrap(),
            ];
            while colors.len() < 8 {
                let feasible = (0u16..360).any(|h| {
                    let candidate = Color::from_hsl(Hsl::new(f64::from(h), 0.9, 0.5));
                    nearest_to(&colors, candidate.hue().unwrap()) >= 30.0
                });
                let next = generator.next_distinct(&colors);
                let distance = nearest_to(&colors, next.hue().unwrap());
                if feasible {
                    assert!(distance >= 30.0, "seed {seed}: {next} is {distance}° from its neighbour");
                }
                colors.push(next);
            }
        }
    }

    #[test]
    fn test_seeded_generators_agree() {
        let existing = initial_ramp(3, 0.8, 0.45);
        let mut a = ColorGenerator::with_seed(GeneratorSettings::default(), 42);
        let mut b = ColorGenerator::with_seed(GeneratorSettings::default(), 42);
        assert_eq!(a.next_distinct(&existing), b.next_distinct(&existing));
    }
}
