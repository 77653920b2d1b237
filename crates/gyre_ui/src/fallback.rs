//! Fallback colors for slices past the palette's end.
//!
//! ARCHITECT'S MANDATE: The palette never runs out. A series with more
//! slices than configured colors gets synthesized ones, and the same
//! seed always synthesizes the same sequence. No surprises between
//! runs, no surprises between frames.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::style::Color;

/// Deterministic color synthesizer, keyed by slice index.
///
/// Colors are generated lazily in index order and memoized, so slice 7
/// keeps its color even when slices 0-6 later come from the palette
/// again.
#[derive(Debug, Clone)]
pub struct FallbackColors {
    /// Stream of channel values. ChaCha8: seedable, portable, fast.
    rng: ChaCha8Rng,
    /// Colors handed out so far, by slice index.
    generated: Vec<Color>,
}

impl FallbackColors {
    /// Seed used when the config does not supply one.
    pub const DEFAULT_SEED: u64 = 0x4759_5245; // "GYRE"

    /// Creates a synthesizer with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            generated: Vec::new(),
        }
    }

    /// Returns the color for a slice index, synthesizing any gaps.
    ///
    /// Always opaque. Channels are uniform in 0-1, which is garish on
    /// purpose: a fallback color showing up means the palette is too
    /// short, and it should be visible.
    pub fn color_for(&mut self, index: usize) -> Color {
        while self.generated.len() <= index {
            let color = Color::rgba(
                self.rng.gen_range(0.0..=1.0),
                self.rng.gen_range(0.0..=1.0),
                self.rng.gen_range(0.0..=1.0),
                1.0,
            );
            self.generated.push(color);
        }

        self.generated[index]
    }
}

impl Default for FallbackColors {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = FallbackColors::new(7);
        let mut second = FallbackColors::new(7);

        for index in 0..8 {
            assert_eq!(first.color_for(index), second.color_for(index));
        }
    }

    #[test]
    fn test_colors_are_memoized() {
        let mut colors = FallbackColors::default();

        let early = colors.color_for(2);
        colors.color_for(40);
        let late = colors.color_for(2);

        assert_eq!(early, late);
    }

    #[test]
    fn test_colors_are_opaque() {
        let mut colors = FallbackColors::default();

        for index in 0..16 {
            let color = colors.color_for(index);
            assert_eq!(color.a, 1.0);
            assert!((0.0..=1.0).contains(&color.r));
            assert!((0.0..=1.0).contains(&color.g));
            assert!((0.0..=1.0).contains(&color.b));
        }
    }

    #[test]
    fn test_adjacent_indices_differ() {
        let mut colors = FallbackColors::default();

        assert_ne!(colors.color_for(0), colors.color_for(1));
    }
}
