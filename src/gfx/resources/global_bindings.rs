//! Per-frame global uniforms: camera plus the light rig.
//!
//! Everything that changes once per frame lives in a single uniform
//! buffer bound at group 0 of both pipelines.

use crate::gfx::camera::HeroCamera;
use crate::theme::{rgb, Theme};
use crate::wgpu_utils::binding_builder::{
    BindGroupBuilder, BindGroupLayoutBuilder, BindGroupLayoutWithDesc,
};
use crate::wgpu_utils::binding_types;
use crate::wgpu_utils::uniform_buffer::UniformBuffer;

/// A single positional light, padded to two vec4s for WGSL.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightUniform {
    pub position: [f32; 3],
    pub intensity: f32,
    pub color: [f32; 3],
    pub _padding: f32,
}

/// Contents of the global uniform buffer (group 0, binding 0).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUniformContent {
    pub view_position: [f32; 4],
    pub view_proj: [[f32; 4]; 4],
    pub ambient_color: [f32; 3],
    pub ambient_intensity: f32,
    pub directional_direction: [f32; 3],
    pub directional_intensity: f32,
    pub directional_color: [f32; 3],
    pub _padding: f32,
    pub point_lights: [PointLightUniform; 2],
}

/// CPU-side light rig. Point light positions are rewritten every frame by
/// the light sweep; colors and intensities are fixed apart from the
/// theme-driven ambient term.
#[derive(Debug, Clone, Copy)]
pub struct LightRig {
    pub ambient_intensity: f32,
    pub point_positions: [[f32; 3]; 2],
}

impl LightRig {
    pub fn new(theme: Theme) -> Self {
        Self {
            ambient_intensity: theme.palette().ambient_intensity,
            point_positions: [[5.0, 5.0, 5.0], [-5.0, -5.0, 5.0]],
        }
    }

    pub fn apply_theme(&mut self, theme: Theme) {
        self.ambient_intensity = theme.palette().ambient_intensity;
    }
}

pub struct GlobalBindings {
    pub bind_group_layout: BindGroupLayoutWithDesc,
    bind_group: Option<wgpu::BindGroup>,
    uniform: Option<UniformBuffer<GlobalUniformContent>>,
}

impl GlobalBindings {
    pub fn new(device: &wgpu::Device) -> Self {
        let bind_group_layout = BindGroupLayoutBuilder::new()
            .next_binding_rendering(binding_types::uniform())
            .create(device, "Global Bind Group Layout");

        Self {
            bind_group_layout,
            bind_group: None,
            uniform: None,
        }
    }

    pub fn create_bind_group(&mut self, device: &wgpu::Device) {
        let uniform = UniformBuffer::<GlobalUniformContent>::new(device);
        let bind_group = BindGroupBuilder::new(&self.bind_group_layout)
            .resource(uniform.binding_resource())
            .create(device, "Global Bind Group");

        self.uniform = Some(uniform);
        self.bind_group = Some(bind_group);
    }

    pub fn update_content(&mut self, queue: &wgpu::Queue, camera: &HeroCamera, lights: &LightRig) {
        if let Some(uniform) = &mut self.uniform {
            uniform.update_content(queue, build_content(camera, lights));
        }
    }

    pub fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.bind_group.as_ref()
    }
}

fn build_content(camera: &HeroCamera, lights: &LightRig) -> GlobalUniformContent {
    GlobalUniformContent {
        view_position: camera.uniform.view_position,
        view_proj: camera.uniform.view_proj,
        ambient_color: [1.0, 1.0, 1.0],
        ambient_intensity: lights.ambient_intensity,
        directional_direction: [10.0, 10.0, 5.0],
        directional_intensity: 1.0,
        directional_color: [1.0, 1.0, 1.0],
        _padding: 0.0,
        point_lights: [
            PointLightUniform {
                position: lights.point_positions[0],
                intensity: 0.8,
                color: rgb(0x3B82F6),
                _padding: 0.0,
            },
            PointLightUniform {
                position: lights.point_positions[1],
                intensity: 0.6,
                color: rgb(0x8B5CF6),
                _padding: 0.0,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_uniform_size_matches_wgsl_layout() {
        // vec4 + mat4x4 + three vec4-sized blocks + two 32-byte lights
        assert_eq!(std::mem::size_of::<GlobalUniformContent>(), 192);
    }

    #[test]
    fn test_theme_drives_ambient_intensity() {
        let mut rig = LightRig::new(Theme::Light);
        assert_eq!(rig.ambient_intensity, 0.4);
        rig.apply_theme(Theme::Dark);
        assert_eq!(rig.ambient_intensity, 0.3);
    }
}
