//! WGPU-based rendering engine for the hero scene.
//!
//! Owns the surface, device, queue, depth buffer, and the two render
//! pipelines (solid triangles plus the alpha-blended wireframe overlay).
//! The scene is drawn into a 400x400 sub-rectangle of the window via
//! render-pass viewport and scissor; imgui panels are composited on top
//! through the UI overlay callback.

use std::sync::Arc;

use log::{error, warn};
use thiserror::Error;
use wgpu::{Device, TextureFormat};

use crate::gfx::camera::HeroCamera;
use crate::gfx::resources::{GlobalBindings, LightRig, Material, TextureResource};
use crate::gfx::scene::{DrawObject, HeroScene, Vertex3D, ViewportRect};
use crate::wgpu_utils::binding_builder::BindGroupLayoutBuilder;
use crate::wgpu_utils::binding_types;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("failed to acquire adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("failed to acquire device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
}

pub struct RenderEngine {
    surface: wgpu::Surface<'static>,
    device: Arc<wgpu::Device>,
    queue: Arc<wgpu::Queue>,
    config: wgpu::SurfaceConfiguration,
    depth_texture: TextureResource,
    format: TextureFormat,
    global_bindings: GlobalBindings,
    solid_pipeline: wgpu::RenderPipeline,
    wireframe_pipeline: wgpu::RenderPipeline,
    clear_color: wgpu::Color,
}

impl RenderEngine {
    /// Creates a new render engine for the given window.
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        width: u32,
        height: u32,
    ) -> Result<RenderEngine, RenderError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let surface = instance.create_surface(window)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("WGPU Device"),
                required_features: wgpu::Features::default(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        let surface_capabilities = surface.get_capabilities(&adapter);
        let format = surface_capabilities
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(surface_capabilities.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_capabilities.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_texture =
            TextureResource::create_depth_texture(&device, &config, "depth_texture");

        let mut global_bindings = GlobalBindings::new(&device);
        global_bindings.create_bind_group(&device);

        // Structurally identical to the layout each object builds for its
        // own transform bind group
        let transform_layout = BindGroupLayoutBuilder::new()
            .next_binding_vertex(binding_types::uniform())
            .create(&device, "Transform Bind Group Layout");
        let material_layout = Material::bind_group_layout(&device);

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Scene Pipeline Layout"),
            bind_group_layouts: &[
                &global_bindings.bind_group_layout.layout,
                &transform_layout.layout,
                &material_layout.layout,
            ],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Scene Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
        });

        let solid_pipeline = create_solid_pipeline(&device, &pipeline_layout, &shader, format);
        let wireframe_pipeline =
            create_wireframe_pipeline(&device, &pipeline_layout, &shader, format);

        Ok(RenderEngine {
            surface,
            device: Arc::new(device),
            queue: Arc::new(queue),
            config,
            depth_texture,
            format,
            global_bindings,
            solid_pipeline,
            wireframe_pipeline,
            clear_color: wgpu::Color::BLACK,
        })
    }

    /// Updates the per-frame global uniforms (camera plus light rig).
    pub fn update(&mut self, camera: &HeroCamera, lights: &LightRig) {
        self.global_bindings
            .update_content(&self.queue, camera, lights);
    }

    /// Renders one frame: the scene into `viewport`, then the UI overlay.
    ///
    /// Lost or outdated surfaces are reconfigured and the frame skipped;
    /// the next redraw recovers.
    pub fn render_frame<F>(&mut self, scene: &HeroScene, viewport: ViewportRect, ui_callback: F)
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(err) => {
                error!("failed to acquire surface texture: {err}");
                return;
            }
        };

        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            if let Some((x, y, w, h)) =
                clamp_viewport(viewport, self.config.width, self.config.height)
            {
                if let Some(global_bind_group) = self.global_bindings.bind_group() {
                    render_pass.set_viewport(x as f32, y as f32, w as f32, h as f32, 0.0, 1.0);
                    render_pass.set_scissor_rect(x, y, w, h);
                    render_pass.set_bind_group(0, global_bind_group, &[]);

                    render_pass.set_pipeline(&self.solid_pipeline);
                    if let Some(material_bind_group) = scene.primary_material.bind_group() {
                        render_pass.set_bind_group(2, material_bind_group, &[]);
                        render_pass.draw_object(&scene.primary);
                    }
                    for (satellite, material) in
                        scene.satellites.iter().zip(scene.satellite_materials.iter())
                    {
                        if let Some(material_bind_group) = material.bind_group() {
                            render_pass.set_bind_group(2, material_bind_group, &[]);
                            render_pass.draw_object(satellite);
                        }
                    }

                    render_pass.set_pipeline(&self.wireframe_pipeline);
                    if let Some(material_bind_group) = scene.wireframe_material.bind_group() {
                        render_pass.set_bind_group(2, material_bind_group, &[]);
                        render_pass.draw_object(&scene.wireframe);
                    }
                }
            }
        }

        ui_callback(
            &self.device,
            &self.queue,
            &mut encoder,
            &surface_texture_view,
        );

        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }

    /// Renders a frame with no scene content, just the clear and the UI.
    pub fn render_ui_only<F>(&mut self, ui_callback: F)
    where
        F: FnOnce(&wgpu::Device, &wgpu::Queue, &mut wgpu::CommandEncoder, &wgpu::TextureView),
    {
        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("surface lost or outdated, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                return;
            }
            Err(err) => {
                error!("failed to acquire surface texture: {err}");
                return;
            }
        };
        let surface_texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });
        {
            encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Clear Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_texture_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });
        }
        ui_callback(
            &self.device,
            &self.queue,
            &mut encoder,
            &surface_texture_view,
        );
        self.queue.submit(std::iter::once(encoder.finish()));
        surface_texture.present();
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_texture =
            TextureResource::create_depth_texture(&self.device, &self.config, "depth_texture");
    }

    pub fn set_clear_color(&mut self, [r, g, b]: [f32; 3]) {
        self.clear_color = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: 1.0,
        };
    }

    pub fn get_surface_size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn device(&self) -> &Arc<Device> {
        &self.device
    }

    pub fn queue(&self) -> &Arc<wgpu::Queue> {
        &self.queue
    }

    pub fn surface_format(&self) -> TextureFormat {
        self.format
    }
}

/// Where the scene actually draws, in surface pixels.
///
/// The rect scrolls with the page. A wgpu viewport cannot extend past the
/// surface edges, so once the rect starts leaving the top the draw is
/// skipped entirely; clamping to y 0 would pin the scene over the
/// sections below the hero.
fn clamp_viewport(
    viewport: ViewportRect,
    surface_width: u32,
    surface_height: u32,
) -> Option<(u32, u32, u32, u32)> {
    if viewport.x < 0.0 || viewport.y < 0.0 {
        return None;
    }
    let x = viewport.x as u32;
    let y = viewport.y as u32;
    if x >= surface_width || y >= surface_height {
        return None;
    }
    let w = (viewport.width as u32).min(surface_width - x);
    let h = (viewport.height as u32).min(surface_height - y);
    if w == 0 || h == 0 {
        return None;
    }
    Some((x, y, w, h))
}

fn create_solid_pipeline(
    device: &Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Solid Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex3D::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: TextureResource::DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_wireframe_pipeline(
    device: &Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    format: TextureFormat,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Wireframe Pipeline"),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex3D::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some("fs_wireframe"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: TextureResource::DEPTH_FORMAT,
            depth_write_enabled: false,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32) -> ViewportRect {
        ViewportRect {
            x,
            y,
            width: 400.0,
            height: 400.0,
        }
    }

    #[test]
    fn test_viewport_within_surface_passes_through() {
        assert_eq!(
            clamp_viewport(rect(740.0, 150.0), 1200, 800),
            Some((740, 150, 400, 400))
        );
    }

    #[test]
    fn test_viewport_scrolled_past_top_is_skipped() {
        // Fully above the surface
        assert_eq!(clamp_viewport(rect(740.0, -650.0), 1200, 800), None);
        // Even one pixel above: never pinned back to y 0
        assert_eq!(clamp_viewport(rect(740.0, -1.0), 1200, 800), None);
    }

    #[test]
    fn test_viewport_clamps_to_bottom_edge() {
        assert_eq!(
            clamp_viewport(rect(740.0, 600.0), 1200, 800),
            Some((740, 600, 400, 200))
        );
    }

    #[test]
    fn test_viewport_below_surface_is_skipped() {
        assert_eq!(clamp_viewport(rect(740.0, 900.0), 1200, 800), None);
    }
}
