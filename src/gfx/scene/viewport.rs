//! Hero viewport lifecycle.
//!
//! `HeroViewport` is the single owner of the decorative scene and of its
//! lifecycle: `Uninitialized -> Running -> Disposed`. A resource ledger
//! counts allocation and release of the scene's resource units so a
//! disposal that leaks (or double-frees) is detectable in tests.

use log::{info, warn};
use wgpu::Device;

use crate::theme::Theme;

use super::hero_scene::HeroScene;

pub const VIEWPORT_SIZE: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Running,
    Disposed,
}

/// Balance sheet for scene resource units.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceLedger {
    pub allocated: usize,
    pub released: usize,
}

impl ResourceLedger {
    pub fn is_balanced(&self) -> bool {
        self.allocated == self.released
    }
}

/// Screen-space rectangle the scene renders into, in logical pixels.
#[derive(Debug, Clone, Copy)]
pub struct ViewportRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ViewportRect {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

pub struct HeroViewport {
    lifecycle: Lifecycle,
    scene: Option<HeroScene>,
    pub ledger: ResourceLedger,
    pub rect: ViewportRect,
    pointer_inside: bool,
}

impl HeroViewport {
    pub fn new() -> Self {
        Self {
            lifecycle: Lifecycle::Uninitialized,
            scene: None,
            ledger: ResourceLedger::default(),
            rect: ViewportRect {
                x: 0.0,
                y: 0.0,
                width: VIEWPORT_SIZE,
                height: VIEWPORT_SIZE,
            },
            pointer_inside: false,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn scene(&self) -> Option<&HeroScene> {
        self.scene.as_ref()
    }

    pub fn scene_mut(&mut self) -> Option<&mut HeroScene> {
        self.scene.as_mut()
    }

    /// Build the scene and start running. Mounting twice is a no-op.
    pub fn mount(&mut self, theme: Theme) {
        if self.lifecycle != Lifecycle::Uninitialized {
            warn!("hero viewport mount ignored in state {:?}", self.lifecycle);
            return;
        }
        self.scene = Some(HeroScene::new(theme));
        self.ledger.allocated += HeroScene::RESOURCE_UNITS;
        self.lifecycle = Lifecycle::Running;
        info!(
            "hero viewport mounted ({} resource units)",
            HeroScene::RESOURCE_UNITS
        );
    }

    /// Upload GPU buffers once a device exists. Without a device the scene
    /// still runs CPU-side; nothing is rendered and nothing is reported.
    pub fn init_gpu_resources(&mut self, device: &Device) {
        if let Some(scene) = &mut self.scene {
            scene.init_gpu_resources(device);
        }
    }

    /// Advance one animation tick. Silently ignored unless running.
    pub fn update(&mut self, dt: f32) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        if let Some(scene) = &mut self.scene {
            scene.advance(dt);
        }
    }

    /// Cursor moved in window coordinates. Inside the viewport rect the
    /// position is normalized to [-1, 1] (y up) and steers the scene;
    /// crossing out of the rect counts as a pointer leave.
    pub fn handle_cursor(&mut self, px: f32, py: f32) {
        if self.lifecycle != Lifecycle::Running {
            return;
        }
        if self.rect.contains(px, py) {
            let nx = (px - self.rect.x) / self.rect.width * 2.0 - 1.0;
            let ny = -((py - self.rect.y) / self.rect.height * 2.0 - 1.0);
            self.pointer_inside = true;
            if let Some(scene) = &mut self.scene {
                scene.animation.pointer_moved(nx, ny);
            }
        } else if self.pointer_inside {
            self.pointer_left();
        }
    }

    /// Pointer left the viewport (or the window).
    pub fn pointer_left(&mut self) {
        self.pointer_inside = false;
        if let Some(scene) = &mut self.scene {
            scene.animation.pointer_left();
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if let Some(scene) = &mut self.scene {
            scene.apply_theme(theme);
        }
    }

    /// Release everything exactly once. Repeat calls are no-ops; further
    /// updates are ignored.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        if let Some(mut scene) = self.scene.take() {
            self.ledger.released += scene.release_resources();
        }
        self.lifecycle = Lifecycle::Disposed;
        info!(
            "hero viewport disposed (ledger {}/{})",
            self.ledger.released, self.ledger.allocated
        );
    }
}

impl Default for HeroViewport {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_before_mount_is_ignored() {
        let mut viewport = HeroViewport::new();
        viewport.update(1.0 / 60.0);
        assert_eq!(viewport.lifecycle(), Lifecycle::Uninitialized);
        assert!(viewport.scene().is_none());
    }

    #[test]
    fn test_mount_then_dispose_balances_ledger() {
        let mut viewport = HeroViewport::new();
        viewport.mount(Theme::Light);
        assert_eq!(viewport.lifecycle(), Lifecycle::Running);

        viewport.dispose();
        assert_eq!(viewport.lifecycle(), Lifecycle::Disposed);
        assert!(viewport.ledger.is_balanced());
        assert_eq!(viewport.ledger.released, HeroScene::RESOURCE_UNITS);
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let mut viewport = HeroViewport::new();
        viewport.mount(Theme::Dark);
        viewport.dispose();
        let released = viewport.ledger.released;
        viewport.dispose();
        viewport.dispose();
        assert_eq!(viewport.ledger.released, released);
    }

    #[test]
    fn test_mount_then_immediate_dispose() {
        let mut viewport = HeroViewport::new();
        viewport.mount(Theme::Light);
        viewport.dispose();
        assert!(viewport.ledger.is_balanced());

        // Ticks after dispose have no effect
        viewport.update(1.0);
        assert!(viewport.scene().is_none());
    }

    #[test]
    fn test_cursor_steers_toward_corner() {
        let mut viewport = HeroViewport::new();
        viewport.mount(Theme::Light);

        // Top-right corner of the rect normalizes to (1, 1)
        viewport.handle_cursor(399.9, 0.0);
        for _ in 0..600 {
            viewport.update(1.0 / 60.0);
        }
        let rotation = viewport.scene().unwrap().animation.rotation;
        assert!((rotation.x - 0.3).abs() < 0.01);
    }

    #[test]
    fn test_interior_cursor_normalizes_within_unit_range() {
        let mut viewport = HeroViewport::new();
        viewport.mount(Theme::Light);

        // Sweep the rect interior; target = (ny, nx) * 0.3, so targets
        // within [-0.3, 0.3] prove nx and ny stay within [-1, 1]
        for ix in 0..=20 {
            for iy in 0..=20 {
                let px = ix as f32 / 20.0 * 399.9;
                let py = iy as f32 / 20.0 * 399.9;
                viewport.handle_cursor(px, py);
                let target = viewport.scene().unwrap().animation.target_rotation;
                assert!(target.x.abs() <= 0.3 + 1e-6, "at ({px}, {py})");
                assert!(target.y.abs() <= 0.3 + 1e-6, "at ({px}, {py})");
            }
        }
    }

    #[test]
    fn test_cursor_outside_rect_counts_as_leave() {
        let mut viewport = HeroViewport::new();
        viewport.mount(Theme::Light);
        viewport.handle_cursor(200.0, 200.0);
        viewport.handle_cursor(800.0, 200.0);
        let target = viewport.scene().unwrap().animation.target_rotation;
        assert_eq!(target, cgmath::Vector2::new(0.0, 0.0));
    }
}
