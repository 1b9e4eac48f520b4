//! # Graphics Module
//!
//! Everything needed to draw the hero scene: the fixed camera, procedural
//! geometry, the scene and its lifecycle owner, GPU resources, and the
//! wgpu render engine.

pub mod camera;
pub mod geometry;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::HeroCamera;
pub use rendering::render_engine::RenderEngine;
