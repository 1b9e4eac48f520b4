// src/lib.rs
//! Vitrine
//!
//! A personal portfolio application built on wgpu and winit: an animated
//! 3D hero scene rendered into a fixed viewport, with the page content
//! (hero text, about cards, footer) drawn as imgui panels.

pub mod app;
pub mod content;
pub mod gfx;
pub mod theme;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::VitrineApp;
pub use theme::Theme;

/// Creates a default Vitrine application instance
pub fn default() -> anyhow::Result<VitrineApp> {
    VitrineApp::new()
}
