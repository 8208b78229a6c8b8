use rand::Rng;

use crate::physic_engine::config::FieldConfig;
use crate::physic_engine::types::{argb_to_color, Color, Vec2};

/// Point lumineux décoratif du champ de particules.
///
/// Les particules ne sont jamais détruites : elles sont recyclées sur place
/// (`respawn`) quand elles quittent la zone visible.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    pub size: f32,
    pub alpha: f32,
}

impl Particle {
    /// Tire une particule n'importe où dans la fenêtre `[0, width] × [0, height]`.
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        config: &FieldConfig,
        width: f32,
        height: f32,
    ) -> Self {
        let mut p = Self::default();
        p.randomize(rng, config, width);
        p.pos.y = rng.random::<f32>() * height;
        p
    }

    /// Réinitialise la particule sous le bord bas de la fenêtre pour qu'elle
    /// remonte dans la zone visible.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        config: &FieldConfig,
        width: f32,
        height: f32,
    ) {
        self.randomize(rng, config, width);
        self.pos.y = height + config.respawn_offset.sample(rng);
    }

    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &FieldConfig, width: f32) {
        self.pos.x = rng.random::<f32>() * width;
        self.vel = Vec2::new(
            config.drift.sample(rng),
            -config.rise_speed.sample(rng),
        );
        self.size = config.size.sample(rng);
        self.alpha = config.alpha.sample(rng);
        self.color = pick_color(rng, &config.palette);
    }

    /// Intègre la vitesse sur un tick et fait décroître l'opacité (plancher à 0).
    #[inline(always)]
    pub fn update(&mut self, alpha_decay: f32) {
        self.pos += self.vel;
        self.alpha = (self.alpha - alpha_decay).max(0.0);
    }

    /// Vrai si la particule est sortie de la fenêtre élargie de `margin` sur chaque bord.
    #[inline(always)]
    pub fn is_out_of_bounds(&self, width: f32, height: f32, margin: f32) -> bool {
        self.pos.x < -margin
            || self.pos.y < -margin
            || self.pos.x > width + margin
            || self.pos.y > height + margin
    }
}

fn pick_color<R: Rng + ?Sized>(rng: &mut R, palette: &[u32]) -> Color {
    if palette.is_empty() {
        return Color::ONE;
    }
    argb_to_color(palette[rng.random_range(0..palette.len())])
}
