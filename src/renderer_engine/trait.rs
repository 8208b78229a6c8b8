use crate::renderer_engine::types::CircleInstance;

/// Surface de rendu fournie par l'hôte.
///
/// Le `Simulator` appelle, à chaque frame : `begin_frame`, un `draw_circle`
/// par particule, puis `end_frame`.
pub trait Surface {
    fn begin_frame(&mut self) {}

    fn draw_circle(&mut self, circle: &CircleInstance);

    fn end_frame(&mut self) {}
}
