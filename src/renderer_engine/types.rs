use bytemuck::{Pod, Zeroable};

use crate::physic_engine::Particle;

/// Appel de dessin d'un cercle plein, tel que consommé par la surface hôte.
///
/// Une instance par particule et par frame. Le layout est compact et `Pod`,
/// la liste d'une frame peut donc être envoyée telle quelle dans un buffer
/// d'instances (`bytemuck::cast_slice`).
///
/// | Champ    | Type       | Description                         |
/// |----------|------------|-------------------------------------|
/// | `center` | `[f32; 2]` | Centre, coordonnées de la fenêtre   |
/// | `radius` | `f32`      | Rayon (taille de la particule)      |
/// | `rgba`   | `[f32; 4]` | Couleur de palette + opacité courante |
///
/// **Stride total** : `7 × f32 = 28 octets`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub rgba: [f32; 4],
}

impl CircleInstance {
    /// L'opacité de la palette est remplacée par l'opacité courante de la particule.
    pub fn from_particle(p: &Particle) -> Self {
        Self {
            center: p.pos.to_array(),
            radius: p.size,
            rgba: [p.color.x, p.color.y, p.color.z, p.alpha.clamp(0.0, 1.0)],
        }
    }

    /// Quantification 8 bits, `(c * 255) as u8` (troncature).
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.rgba.map(|c| (c.clamp(0.0, 1.0) * 255.0) as u8)
    }
}
