pub mod r#trait;
pub use r#trait::Surface;

pub mod types;
pub use self::types::CircleInstance;

pub mod draw_list;
pub use self::draw_list::DrawList;

pub mod image_surface;
pub use self::image_surface::ImageSurface;

pub mod renderer;
pub use self::renderer::render_particles;
