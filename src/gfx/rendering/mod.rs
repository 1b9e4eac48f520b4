//! Rendering: the wgpu engine plus its pipelines and shader.

pub mod render_engine;

pub use render_engine::{RenderEngine, RenderError};
