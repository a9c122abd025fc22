use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::Color;

/// Source of random opaque clear colors.
///
/// Each channel is drawn uniformly from `[0, 1]`; alpha is always `1.0`.
/// A fixed seed reproduces the same color sequence across runs.
#[derive(Debug, Clone)]
pub struct RandomColors {
    rng: StdRng,
}

impl RandomColors {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when `seed` is given, entropy-backed otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn next_color(&mut self) -> Color {
        Color::opaque(self.channel(), self.channel(), self.channel())
    }

    #[inline]
    fn channel(&mut self) -> f32 {
        self.rng.gen_range(0.0..=1.0)
    }
}

impl Default for RandomColors {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Iterator for RandomColors {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        Some(self.next_color())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_stay_in_unit_range_and_alpha_is_opaque() {
        let mut colors = RandomColors::from_seed(7);
        for _ in 0..1000 {
            let c = colors.next_color();
            assert!((0.0..=1.0).contains(&c.r));
            assert!((0.0..=1.0).contains(&c.g));
            assert!((0.0..=1.0).contains(&c.b));
            assert_eq!(c.a, 1.0);
        }
    }

    #[test]
    fn same_seed_repeats_sequence() {
        let a: Vec<Color> = RandomColors::from_seed(42).take(16).collect();
        let b: Vec<Color> = RandomColors::from_seed(42).take(16).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let a: Vec<Color> = RandomColors::from_seed(1).take(8).collect();
        let b: Vec<Color> = RandomColors::from_seed(2).take(8).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn consecutive_colors_change() {
        let mut colors = RandomColors::from_seed(3);
        let first = colors.next_color();
        assert!(colors.take(8).any(|c| c != first));
    }
}
