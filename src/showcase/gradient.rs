use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::physic_engine::types::{argb_to_color, Color};

/// Étape du dégradé animé : une couleur de fond (ARGB) affichée `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GradientFrame {
    pub color: u32,
    pub duration_ms: u64,
}

/// Fond animé de la section "hero" : les étapes bouclent, chaque changement
/// d'étape est un fondu (la nouvelle entre sur `enter_fade_ms`, l'ancienne
/// sort sur `exit_fade_ms`).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeroGradient {
    pub frames: Vec<GradientFrame>,
    pub enter_fade_ms: u64,
    pub exit_fade_ms: u64,
}

impl Default for HeroGradient {
    fn default() -> Self {
        let frame = |color| GradientFrame {
            color,
            duration_ms: 4000,
        };
        Self {
            // indigo, bleu nuit, violet
            frames: vec![frame(0xFF1A237E), frame(0xFF283593), frame(0xFF4A148C)],
            enter_fade_ms: 2000,
            exit_fade_ms: 2000,
        }
    }
}

impl HeroGradient {
    pub fn cycle_duration(&self) -> Duration {
        Duration::from_millis(self.frames.iter().map(|f| f.duration_ms).sum())
    }

    /// Étapes mélangées à l'instant `elapsed` : la couleur affichée est
    /// `from.lerp(to, t)`. Hors fondu, `from == to` et `t == 0`.
    ///
    /// Le premier passage sur la première étape n'a pas de fondu (rien n'était affiché avant).
    pub fn blend_at(&self, elapsed: Duration) -> (usize, usize, f32) {
        let n = self.frames.len();
        let total = self.cycle_duration().as_millis();
        if n == 0 || total == 0 {
            return (0, 0, 0.0);
        }

        let elapsed_ms = elapsed.as_millis();
        let mut tau = (elapsed_ms % total) as u64;
        let mut i = 0;
        while tau >= self.frames[i].duration_ms {
            tau -= self.frames[i].duration_ms;
            i += 1;
        }

        let first_pass = elapsed_ms < total && i == 0;
        if n == 1 || first_pass {
            return (i, i, 0.0);
        }

        let tau = tau as f32;
        let incoming = if self.enter_fade_ms == 0 {
            1.0
        } else {
            (tau / self.enter_fade_ms as f32).min(1.0)
        };
        let outgoing = if self.exit_fade_ms == 0 {
            0.0
        } else {
            (1.0 - tau / self.exit_fade_ms as f32).max(0.0)
        };
        if incoming >= 1.0 && outgoing <= 0.0 {
            return (i, i, 0.0);
        }

        (
            (i + n - 1) % n,
            i,
            incoming / (incoming + outgoing),
        )
    }

    /// Couleur de fond à l'instant `elapsed` (noir opaque sans étapes).
    pub fn color_at(&self, elapsed: Duration) -> Color {
        if self.frames.is_empty() {
            return Color::new(0.0, 0.0, 0.0, 1.0);
        }
        let (from, to, t) = self.blend_at(elapsed);
        argb_to_color(self.frames[from].color).lerp(argb_to_color(self.frames[to].color), t)
    }

    pub fn rgba8_at(&self, elapsed: Duration) -> [u8; 4] {
        self.color_at(elapsed)
            .to_array()
            .map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_first_frame_has_no_fade_on_start() {
        let gradient = HeroGradient::default();
        assert_eq!(gradient.blend_at(ms(0)), (0, 0, 0.0));
        assert_eq!(gradient.blend_at(ms(1000)), (0, 0, 0.0));
    }

    #[test]
    fn test_crossfade_into_next_frame() {
        let gradient = HeroGradient::default();
        assert_eq!(gradient.blend_at(ms(4000)), (0, 1, 0.0));
        assert_eq!(gradient.blend_at(ms(5000)), (0, 1, 0.5));
        assert_eq!(gradient.blend_at(ms(6000)), (1, 1, 0.0));
    }

    #[test]
    fn test_loops_back_to_first_frame() {
        let gradient = HeroGradient::default();
        assert_eq!(gradient.cycle_duration(), ms(12000));
        assert_eq!(gradient.blend_at(ms(13000)), (2, 0, 0.5));
    }

    #[test]
    fn test_settled_color_is_frame_color() {
        let gradient = HeroGradient::default();
        assert_eq!(gradient.rgba8_at(ms(500)), [0x1A, 0x23, 0x7E, 0xFF]);
    }
}
