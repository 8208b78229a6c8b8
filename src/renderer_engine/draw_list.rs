use crate::renderer_engine::{types::CircleInstance, Surface};

/// Surface d'enregistrement : conserve les appels de dessin de la frame courante.
///
/// C'est la sortie brute du champ de particules, à rejouer par l'hôte
/// (canvas, buffer d'instances GPU, ...).
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    circles: Vec<CircleInstance>,
    frames: u64,
}

impl DrawList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            circles: Vec::with_capacity(capacity),
            frames: 0,
        }
    }

    pub fn circles(&self) -> &[CircleInstance] {
        &self.circles
    }

    /// Vue binaire de la frame, prête pour un buffer d'instances.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.circles)
    }

    /// Nombre de frames commencées depuis la création.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Surface for DrawList {
    fn begin_frame(&mut self) {
        self.circles.clear();
        self.frames += 1;
    }

    fn draw_circle(&mut self, circle: &CircleInstance) {
        self.circles.push(*circle);
    }
}
