use rand::Rng;
use serde::{Deserialize, Serialize};

pub use glam::{Vec2, Vec4 as Color};

// ------------------------
// Span
// ------------------------

/// Intervalle `[min, max)` dans lequel un attribut de particule est tiré.
///
/// Le tirage se fait par interpolation (`min + (max - min) * u`, `u ∈ [0, 1)`)
/// plutôt qu'avec `random_range`, qui panique sur un intervalle vide :
/// une fenêtre de taille nulle ou un intervalle dégénéré reste valide.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn lerp(&self, u: f32) -> f32 {
        self.min + (self.max - self.min) * u
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.lerp(rng.random::<f32>())
    }

    pub fn contains(&self, value: f32) -> bool {
        let (lo, hi) = if self.min <= self.max {
            (self.min, self.max)
        } else {
            (self.max, self.min)
        };
        (lo..=hi).contains(&value)
    }
}

// ------------------------
// Palette
// ------------------------

/// Convertit une couleur ARGB packée (`0xAARRGGBB`) en `Color` normalisée (r, g, b, a).
pub fn argb_to_color(argb: u32) -> Color {
    let channel = |shift: u32| ((argb >> shift) & 0xFF) as f32 / 255.0;
    Color::new(channel(16), channel(8), channel(0), channel(24))
}

// ------------------------
// UpdateResult
// ------------------------

/// Événements produits par un tick du moteur.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Nombre de particules recyclées pendant ce tick
    pub recycled: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_argb_to_color_white() {
        assert_eq!(argb_to_color(0xFFFFFFFF), Color::ONE);
    }

    #[test]
    fn test_argb_to_color_channels() {
        let c = argb_to_color(0x80FF0000);
        assert_eq!(c.x, 1.0);
        assert_eq!(c.y, 0.0);
        assert_eq!(c.z, 0.0);
        assert!((c.w - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_span_sample_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let span = Span::new(2.0, 6.0);
        for _ in 0..1000 {
            let v = span.sample(&mut rng);
            assert!((2.0..=6.0).contains(&v), "value out of span: {}", v);
        }
    }

    #[test]
    fn test_span_degenerate_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Span::new(0.0, 0.0).sample(&mut rng), 0.0);
    }

    #[test]
    fn test_span_contains_reversed() {
        let span = Span::new(1.0, -1.0);
        assert!(span.contains(0.0));
        assert!(!span.contains(1.5));
    }
}
