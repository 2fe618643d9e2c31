// Group marker colours

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Distinct marker colours handed out in order
const PALETTE: [&str; 12] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6", "#bcf60c",
    "#008080", "#9a6324", "#800000", "#000075",
];

/// Random `#rrggbb` colour
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("#{:06x}", rng.gen_range(0..=0xFF_FFFFu32))
}

/// Source of colours for newly formed groups
#[derive(Debug, Clone, Default)]
pub enum ColorPalette {
    /// Cycles through a fixed list
    #[default]
    Fixed,
    /// Random colours from a seeded generator
    Random(StdRng),
}

impl ColorPalette {
    pub fn random(seed: u64) -> Self {
        ColorPalette::Random(StdRng::seed_from_u64(seed))
    }

    /// Colour for the n-th group of a run (0-based)
    pub fn color_for(&mut self, ordinal: usize) -> String {
        match self {
            ColorPalette::Fixed => PALETTE[ordinal % PALETTE.len()].to_string(),
            ColorPalette::Random(rng) => random_color(rng),
        }
    }
}
