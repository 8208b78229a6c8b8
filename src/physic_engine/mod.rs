pub mod r#trait;
pub use r#trait::{PhysicEngine, PhysicEngineFull, PhysicEngineIterator};

pub mod types;
pub use self::types::{Color, Span, UpdateResult, Vec2};

pub mod particle;
pub use self::particle::Particle;

pub mod config;
pub use self::config::{FieldConfig, FieldConfigBuilder};

pub mod particle_field;
pub use self::particle_field::ParticleField;
