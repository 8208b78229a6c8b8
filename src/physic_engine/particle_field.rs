use log::{debug, info, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::physic_engine::{
    config::FieldConfig, particle::Particle, types::UpdateResult, PhysicEngine, PhysicEngineFull,
    PhysicEngineIterator,
};
use crate::renderer_engine::{render_particles, Surface};

/// Champ de particules décoratives dérivant vers le haut.
///
/// Le nombre de particules est fixe : une particule qui sort de la zone visible
/// (élargie de `out_of_bounds_margin`) est recyclée sur place, jamais réallouée.
/// Le générateur aléatoire est injecté pour rendre l'animation reproductible.
#[derive(Debug)]
pub struct ParticleField<R: Rng = StdRng> {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    rng: R,
    config: FieldConfig,
}

impl ParticleField<StdRng> {
    /// Champ déterministe : même graine, même animation.
    pub fn with_seed(config: &FieldConfig, width: f32, height: f32, seed: u64) -> Self {
        Self::new(config, width, height, StdRng::seed_from_u64(seed))
    }

    /// Utilise `config.seed` si elle est renseignée, sinon l'aléa du système.
    pub fn from_config(config: &FieldConfig, width: f32, height: f32) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(config, width, height, rng)
    }
}

impl<R: Rng> ParticleField<R> {
    pub fn new(config: &FieldConfig, width: f32, height: f32, rng: R) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(config.particle_count),
            width: 0.0,
            height: 0.0,
            rng,
            config: config.clone(),
        };
        field.initialize(width, height, config.particle_count);
        field
    }

    /// (Re)peuple le champ avec `count` particules tirées dans `[0, width] × [0, height]`.
    ///
    /// Le stockage est réutilisé : pas de réallocation tant que `count` ne dépasse pas la capacité.
    pub fn initialize(&mut self, width: f32, height: f32, count: usize) {
        (self.width, self.height) = (sanitize_dimension(width), sanitize_dimension(height));
        self.config.particle_count = count;

        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        let config = &self.config;
        self.particles.clear();
        self.particles
            .extend((0..count).map(|_| Particle::random(rng, config, w, h)));

        debug!(
            "✨ Particle field initialized: {} particles in {} x {}",
            count, w, h
        );
    }

    /// Avance toutes les particules d'une frame.
    pub fn tick(&mut self) -> UpdateResult {
        let (w, h) = (self.width, self.height);
        let margin = self.config.out_of_bounds_margin;
        let mut recycled = 0;

        for p in self.particles.iter_mut() {
            p.update(self.config.alpha_decay);

            if p.is_out_of_bounds(w, h, margin) {
                p.respawn(&mut self.rng, &self.config, w, h);
                recycled += 1;
            }
        }

        if recycled > 0 {
            trace!("♻️ {} particles recycled", recycled);
        }

        UpdateResult { recycled }
    }

    /// Émet un cercle plein par particule. Ne modifie pas l'état.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        render_particles(&self.particles, surface);
    }

    /// La fenêtre hôte change de taille : on repart d'un champ neuf.
    pub fn resize(&mut self, width: f32, height: f32) {
        info!("🖥️ Particle field resized: {} x {}", width, height);
        self.initialize(width, height, self.config.particle_count);
    }

    /// Remplace la configuration. Retourne `true` si le champ a été réinitialisé
    /// (changement du nombre de particules).
    pub fn reload_config(&mut self, new_config: &FieldConfig) -> bool {
        let old_count = self.config.particle_count;
        self.config = new_config.clone();

        let count_updated = new_config.particle_count != old_count;
        if count_updated {
            info!(
                "Reinitializing particle field due to particle_count change: {} -> {}",
                old_count, new_config.particle_count
            );
            self.initialize(self.width, self.height, new_config.particle_count);
        }
        count_updated
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Libère la collection de particules (fin de vie de la vue hôte).
    pub fn close(&mut self) {
        self.particles.clear();
        self.particles.shrink_to_fit();
        debug!("ParticleField closed and released.");
    }
}

fn sanitize_dimension(value: f32) -> f32 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warn!("⚠️ Invalid viewport dimension {}, clamped to 0", value);
        0.0
    }
}

// ==================================
// Trait PhysicEngine
// ==================================
impl<R: Rng> PhysicEngineIterator for ParticleField<R> {
    fn iter_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a> {
        Box::new(self.particles.iter())
    }
}

impl<R: Rng> PhysicEngine for ParticleField<R> {
    fn set_viewport(&mut self, width: f32, height: f32) {
        self.resize(width, height);
    }

    fn update(&mut self) -> UpdateResult {
        self.tick()
    }

    fn close(&mut self) {
        self.close();
    }

    fn reload_config(&mut self, config: &FieldConfig) -> bool {
        self.reload_config(config)
    }

    fn get_config(&self) -> &FieldConfig {
        &self.config
    }
}

impl<R: Rng> PhysicEngineFull for ParticleField<R> {}

// ==================================
// Helpers pour tests
// ==================================
#[cfg(any(test, feature = "test_helpers"))]
pub trait ParticleFieldTestHelpers {
    fn particles_mut(&mut self) -> &mut [Particle];
}

#[cfg(any(test, feature = "test_helpers"))]
impl<R: Rng> ParticleFieldTestHelpers for ParticleField<R> {
    fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physic_engine::Vec2;

    #[test]
    fn test_negative_viewport_is_clamped() {
        let field = ParticleField::with_seed(&FieldConfig::default(), -10.0, f32::NAN, 1);
        assert_eq!(field.viewport(), (0.0, 0.0));
        assert_eq!(field.len(), 50);
    }

    #[test]
    fn test_recycle_counted_in_update_result() {
        let mut field = ParticleField::with_seed(&FieldConfig::default(), 100.0, 100.0, 3);
        field.particles_mut()[0].pos = Vec2::new(-500.0, 0.0);
        let result = field.tick();
        assert!(result.recycled >= 1);
    }

    #[test]
    fn test_close_releases_particles() {
        let mut field = ParticleField::with_seed(&FieldConfig::default(), 100.0, 100.0, 3);
        field.close();
        assert!(field.is_empty());
    }
}
