//! Materials for the hero scene solids.
//!
//! A material owns its CPU-side properties plus, once uploaded, a uniform
//! buffer and bind group. Theme changes rewrite the properties and mark
//! the material dirty; the next frame syncs the uniform.

use wgpu::Device;

use crate::wgpu_utils::binding_builder::{BindGroupBuilder, BindGroupLayoutBuilder};
use crate::wgpu_utils::binding_types;
use crate::wgpu_utils::uniform_buffer::UniformBuffer;

/// GPU representation of material properties, padded for WGSL uniform
/// layout rules (48 bytes).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    /// Base color with opacity in the alpha channel
    pub base_color: [f32; 4],
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub metallic: f32,
    pub roughness: f32,
    pub _padding: [f32; 2],
}

/// GPU resources for one material
pub struct MaterialBindings {
    pub uniform: UniformBuffer<MaterialUniform>,
    pub bind_group: wgpu::BindGroup,
}

pub struct Material {
    pub name: &'static str,
    pub base_color: [f32; 3],
    pub opacity: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub metallic: f32,
    pub roughness: f32,
    bindings: Option<MaterialBindings>,
    dirty: bool,
}

impl Material {
    pub fn new(name: &'static str, base_color: [f32; 3]) -> Self {
        Self {
            name,
            base_color,
            opacity: 1.0,
            emissive: [0.0, 0.0, 0.0],
            emissive_intensity: 0.0,
            metallic: 0.0,
            roughness: 0.5,
            bindings: None,
            dirty: false,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_emissive(mut self, emissive: [f32; 3], intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    pub fn with_surface(mut self, metallic: f32, roughness: f32) -> Self {
        self.metallic = metallic;
        self.roughness = roughness;
        self
    }

    fn uniform_content(&self) -> MaterialUniform {
        MaterialUniform {
            base_color: [
                self.base_color[0],
                self.base_color[1],
                self.base_color[2],
                self.opacity,
            ],
            emissive: self.emissive,
            emissive_intensity: self.emissive_intensity,
            metallic: self.metallic,
            roughness: self.roughness,
            _padding: [0.0; 2],
        }
    }

    /// Recolor this material. Takes effect on the next `sync`.
    pub fn set_colors(&mut self, base_color: [f32; 3], emissive: [f32; 3], intensity: f32) {
        self.base_color = base_color;
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self.dirty = true;
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
        self.dirty = true;
    }

    pub fn init_gpu_resources(&mut self, device: &Device) {
        let layout = Self::bind_group_layout(device);
        let uniform = UniformBuffer::new_with_data(device, &self.uniform_content());
        let bind_group = BindGroupBuilder::new(&layout)
            .resource(uniform.binding_resource())
            .create(device, &format!("{} Material Bind Group", self.name));

        self.bindings = Some(MaterialBindings { uniform, bind_group });
        self.dirty = false;
    }

    /// Push pending property changes to the GPU
    pub fn sync(&mut self, queue: &wgpu::Queue) {
        if !self.dirty {
            return;
        }
        let content = self.uniform_content();
        if let Some(bindings) = &mut self.bindings {
            bindings.uniform.update_content(queue, content);
        }
        self.dirty = false;
    }

    pub fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.bindings.as_ref().map(|b| &b.bind_group)
    }

    /// Returns true the first time GPU resources were actually released.
    pub fn release_gpu_resources(&mut self) -> bool {
        self.bindings.take().is_some()
    }

    /// Layout shared by every material bind group (group 2 in the shader).
    pub fn bind_group_layout(
        device: &Device,
    ) -> crate::wgpu_utils::binding_builder::BindGroupLayoutWithDesc {
        BindGroupLayoutBuilder::new()
            .next_binding_fragment(binding_types::uniform())
            .create(device, "Material Bind Group Layout")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size_matches_wgsl_layout() {
        assert_eq!(std::mem::size_of::<MaterialUniform>(), 48);
    }

    #[test]
    fn test_opacity_travels_in_alpha_channel() {
        let material = Material::new("wire", [0.5, 0.5, 1.0]).with_opacity(0.3);
        assert_eq!(material.uniform_content().base_color[3], 0.3);
    }

    #[test]
    fn test_set_colors_marks_dirty() {
        let mut material = Material::new("solid", [1.0, 0.0, 0.0]);
        assert!(!material.dirty);
        material.set_colors([0.0, 1.0, 0.0], [0.0, 0.0, 0.1], 0.05);
        assert!(material.dirty);
    }

    #[test]
    fn test_release_without_gpu_resources_reports_nothing() {
        let mut material = Material::new("solid", [1.0, 0.0, 0.0]);
        assert!(!material.release_gpu_resources());
    }
}
