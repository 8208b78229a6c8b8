pub mod simulator;
pub use simulator::Simulator;
// Renderer engine
pub mod renderer_engine;
pub use renderer_engine::{DrawList, ImageSurface, Surface};
// Physic engine
pub mod physic_engine;
pub use physic_engine::{FieldConfig, ParticleField, PhysicEngine};
// Écran vitrine
pub mod showcase;
// Utilities
pub mod utils;
