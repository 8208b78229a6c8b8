use crate::physic_engine::config::FieldConfig;
use crate::physic_engine::particle::Particle;
use crate::physic_engine::types::UpdateResult;

pub trait PhysicEngineIterator {
    /// Retourne un itérateur sur les particules vivantes.
    fn iter_particles<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Particle> + 'a>;
}

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune des moteurs d'animation pilotés par le `Simulator` :
/// un tick par frame, redimensionnement de la zone visible, rechargement de la configuration.
pub trait PhysicEngine {
    /// Ajuste la zone visible (la fenêtre hôte a changé de taille).
    fn set_viewport(&mut self, width: f32, height: f32);

    /// Avance la simulation d'une frame.
    fn update(&mut self) -> UpdateResult;

    /// Ferme / libère le moteur.
    fn close(&mut self) {} // Par défaut, fait rien.

    fn reload_config(&mut self, config: &FieldConfig) -> bool;

    fn get_config(&self) -> &FieldConfig;
}

pub trait PhysicEngineFull: PhysicEngine + PhysicEngineIterator {}
