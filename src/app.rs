//! Application shell: window, event loop, and per-frame orchestration.
//!
//! `VitrineApp` owns the winit event loop; `AppState` is the
//! `ApplicationHandler` wiring events into the hero viewport, the page
//! scroller, and the imgui panels. UI input gets first refusal; events
//! the UI captures never reach the scene.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context as _;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowAttributes},
};

use crate::gfx::rendering::RenderEngine;
use crate::gfx::scene::HeroViewport;
use crate::theme::Theme;
use crate::ui::{draw_page, hero_viewport_rect, Page, UiActions, UiManager};

pub struct VitrineApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    viewport: HeroViewport,
    page: Page,
    theme: Theme,
    last_frame: Instant,
}

impl VitrineApp {
    pub fn new() -> anyhow::Result<Self> {
        let event_loop = EventLoop::new().context("failed to create event loop")?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                viewport: HeroViewport::new(),
                page: Page::new(800.0),
                theme: Theme::Light,
                last_frame: Instant::now(),
            },
        })
    }

    /// Run the application. Consumes self and blocks until the window
    /// closes.
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .context("event loop terminated abnormally")?;

        // Normal exit paths dispose on the way out; this covers the rest
        self.app_state.viewport.dispose();
        Ok(())
    }
}

impl AppState {
    fn route_pointer_moved(&mut self, x: f32, y: f32) {
        self.viewport.handle_cursor(x, y);
    }

    fn route_wheel(&mut self, delta: MouseScrollDelta) {
        let amount = match delta {
            MouseScrollDelta::LineDelta(_, y) => y * 40.0,
            MouseScrollDelta::PixelDelta(position) => position.y as f32,
        };
        self.page.wheel(amount);
    }

    fn apply_actions(&mut self, actions: UiActions) {
        if let Some(anchor) = actions.scroll_to {
            self.page.scroll_to(anchor);
        }
        if actions.back_to_top {
            self.page.back_to_top();
        }
        if let Some(href) = actions.open_link {
            // No browser integration; surface the destination instead
            info!("link activated: {href}");
        }
        if actions.toggle_theme {
            self.theme = self.theme.toggled();
            info!("theme switched to {:?}", self.theme);
            self.viewport.set_theme(self.theme);
            if let Some(render_engine) = self.render_engine.as_mut() {
                render_engine.set_clear_color(self.theme.palette().background);
            }
        }
    }

    fn redraw(&mut self) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };
        let Some(ui_manager) = self.ui_manager.as_mut() else {
            return;
        };
        let Some(window) = self.window.as_ref() else {
            return;
        };

        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;

        self.page.tick();
        self.viewport.update(dt);

        let (surface_width, _) = render_engine.get_surface_size();
        self.viewport.rect = hero_viewport_rect(surface_width as f32, self.page.scroll());

        let mut actions = UiActions::default();
        let scroll = self.page.scroll();
        let theme = self.theme;
        ui_manager.update_logic(window, |ui| {
            actions = draw_page(ui, scroll, theme);
        });

        if let Some(scene) = self.viewport.scene_mut() {
            let queue = render_engine.queue().clone();
            scene.sync(&queue);
        }

        if let Some(scene) = self.viewport.scene() {
            render_engine.update(&scene.camera, &scene.lights);
            render_engine.render_frame(
                scene,
                self.viewport.rect,
                |device, queue, encoder, color_attachment| {
                    ui_manager.render_display_only(device, queue, encoder, color_attachment);
                },
            );
        } else {
            render_engine.render_ui_only(|device, queue, encoder, color_attachment| {
                ui_manager.render_display_only(device, queue, encoder, color_attachment);
            });
        }

        self.apply_actions(actions);
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            WindowAttributes::default()
                .with_title("vitrine")
                .with_inner_size(winit::dpi::LogicalSize::new(1200, 800)),
        ) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        let (width, height) = window.inner_size().into();

        let window_clone = window.clone();
        let mut render_engine = match pollster::block_on(async move {
            RenderEngine::new(window_clone, width, height).await
        }) {
            Ok(engine) => engine,
            Err(err) => {
                error!("failed to initialize renderer: {err}");
                event_loop.exit();
                return;
            }
        };

        self.viewport.mount(self.theme);
        self.viewport.init_gpu_resources(render_engine.device());

        let mut ui_manager = UiManager::new(
            render_engine.device(),
            render_engine.queue(),
            render_engine.surface_format(),
            &window,
        );
        ui_manager.update_display_size(width, height);

        self.page.set_view_height(height as f32);
        self.last_frame = Instant::now();

        render_engine.set_clear_color(self.theme.palette().background);

        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(render_engine);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // Pointer and wheel input reach the scene and page even when a
        // panel has mouse capture: hovering a panel is a pointer-leave
        // for the scene, and the panels have no scroll regions of their
        // own.
        match &event {
            WindowEvent::CursorMoved { position, .. } => {
                self.route_pointer_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::CursorLeft { .. } => {
                self.viewport.pointer_left();
            }
            WindowEvent::MouseWheel { delta, .. } => {
                self.route_wheel(*delta);
            }
            _ => (),
        }

        // UI gets first refusal on everything else
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            let ui_event: winit::event::Event<()> = winit::event::Event::WindowEvent {
                window_id,
                event: event.clone(),
            };
            if ui_manager.handle_input(&window, &ui_event) {
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: winit::keyboard::PhysicalKey::Code(key_code),
                        ..
                    },
                ..
            } => {
                if matches!(key_code, winit::keyboard::KeyCode::Escape) {
                    self.viewport.dispose();
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    ui_manager.update_display_size(width, height);
                }
                self.page.set_view_height(height as f32);
            }
            WindowEvent::CloseRequested => {
                self.viewport.dispose();
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_state() -> AppState {
        AppState {
            window: None,
            render_engine: None,
            ui_manager: None,
            viewport: HeroViewport::new(),
            page: Page::new(800.0),
            theme: Theme::Light,
            last_frame: Instant::now(),
        }
    }

    #[test]
    fn test_pointer_onto_panel_resets_scene_target() {
        let mut state = app_state();
        state.viewport.mount(Theme::Light);

        // Inside the scene viewport, then across to a panel-covered spot
        state.route_pointer_moved(200.0, 100.0);
        let steered = state.viewport.scene().unwrap().animation.target_rotation;
        assert_ne!(steered, cgmath::Vector2::new(0.0, 0.0));

        state.route_pointer_moved(800.0, 600.0);
        let target = state.viewport.scene().unwrap().animation.target_rotation;
        assert_eq!(target, cgmath::Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_wheel_scrolls_page() {
        let mut state = app_state();
        state.route_wheel(MouseScrollDelta::LineDelta(0.0, -2.0));
        assert!(state.page.scroll() > 0.0);

        state.route_wheel(MouseScrollDelta::PixelDelta(
            winit::dpi::PhysicalPosition::new(0.0, 30.0),
        ));
        assert!(state.page.scroll() < 80.0);
    }
}
