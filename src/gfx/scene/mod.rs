//! Scene management: objects, animation, and the hero viewport lifecycle.

pub mod animation;
pub mod hero_scene;
pub mod object;
pub mod vertex;
pub mod viewport;

pub use animation::AnimationState;
pub use hero_scene::HeroScene;
pub use object::{DrawObject, Object};
pub use vertex::Vertex3D;
pub use viewport::{HeroViewport, Lifecycle, ViewportRect, VIEWPORT_SIZE};
