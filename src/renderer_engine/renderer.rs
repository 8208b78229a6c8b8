use crate::physic_engine::Particle;
use crate::renderer_engine::{CircleInstance, Surface};

/// Émet un cercle plein par particule sur la surface. Retourne le nombre de cercles émis.
pub fn render_particles<'a, S, I>(particles: I, surface: &mut S) -> usize
where
    S: Surface + ?Sized,
    I: IntoIterator<Item = &'a Particle>,
{
    let mut drawn = 0;
    for p in particles {
        surface.draw_circle(&CircleInstance::from_particle(p));
        drawn += 1;
    }
    drawn
}
