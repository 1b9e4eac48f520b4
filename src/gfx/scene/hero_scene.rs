//! The decorative hero scene: one dodecahedron, its wireframe shell, and
//! three orbiting octahedra under a small light rig.
//!
//! Objects and materials are direct named fields. Nothing searches a scene
//! graph at runtime; every animated transform is recomputed from the
//! animation state each tick.

use cgmath::{Matrix4, Rad, Vector3};
use wgpu::Device;

use crate::gfx::camera::HeroCamera;
use crate::gfx::geometry::{
    generate_dodecahedron, generate_dodecahedron_edges, generate_octahedron,
};
use crate::gfx::resources::{LightRig, Material};
use crate::theme::{rgb, Theme};

use super::animation::AnimationState;
use super::object::Object;

const SATELLITE_COLORS: [u32; 3] = [0x8B5CF6, 0x06B6D4, 0x10B981];

pub struct HeroScene {
    pub primary: Object,
    pub wireframe: Object,
    pub satellites: [Object; 3],
    pub primary_material: Material,
    pub wireframe_material: Material,
    pub satellite_materials: [Material; 3],
    pub lights: LightRig,
    pub camera: HeroCamera,
    pub animation: AnimationState,
}

impl HeroScene {
    /// CPU-side resource units tracked by the lifecycle ledger:
    /// 5 meshes plus 5 materials.
    pub const RESOURCE_UNITS: usize = 10;

    pub fn new(theme: Theme) -> Self {
        let palette = theme.palette();

        let primary_material = Material::new("primary", palette.primary_color)
            .with_emissive(palette.primary_emissive, palette.primary_emissive_intensity)
            .with_surface(0.7, 0.2);

        let wireframe_material = Material::new("wireframe", palette.wireframe_color)
            .with_opacity(palette.wireframe_opacity);

        let satellite_materials = SATELLITE_COLORS.map(|hex| {
            let color = rgb(hex);
            Material::new("satellite", color)
                .with_emissive(color, 0.1)
                .with_surface(0.8, 0.1)
        });

        let octahedron = generate_octahedron(0.3);
        let satellites = [
            Object::new("satellite-0", &octahedron),
            Object::new("satellite-1", &octahedron),
            Object::new("satellite-2", &octahedron),
        ];

        Self {
            primary: Object::new("primary", &generate_dodecahedron(1.2)),
            wireframe: Object::new("wireframe", &generate_dodecahedron_edges(1.25)),
            satellites,
            primary_material,
            wireframe_material,
            satellite_materials,
            lights: LightRig::new(theme),
            camera: HeroCamera::new(),
            animation: AnimationState::new(),
        }
    }

    /// Advance the animation and recompute every object transform.
    pub fn advance(&mut self, dt: f32) {
        self.animation.tick(dt);

        let group = Matrix4::from_translation(Vector3::new(
            0.0,
            self.animation.group_offset_y(),
            0.0,
        )) * Matrix4::from_angle_x(Rad(self.animation.rotation.x))
            * Matrix4::from_angle_y(Rad(self.animation.rotation.y));

        self.primary.transform = group;

        let wire_rotation = self.animation.wireframe_rotation();
        self.wireframe.transform = group
            * Matrix4::from_angle_x(Rad(wire_rotation.x))
            * Matrix4::from_angle_y(Rad(wire_rotation.y));

        let spin = self.animation.satellite_spin;
        for (index, satellite) in self.satellites.iter_mut().enumerate() {
            let [x, y, z] = self.animation.satellite_position(index);
            satellite.transform = group
                * Matrix4::from_translation(Vector3::new(x, y, z))
                * Matrix4::from_angle_x(Rad(spin.x))
                * Matrix4::from_angle_y(Rad(spin.y));
        }

        self.lights.point_positions = self.animation.point_light_positions();
    }

    /// Recolor materials for a theme change. Touches only color and
    /// intensity fields; geometry and transforms are left alone.
    pub fn apply_theme(&mut self, theme: Theme) {
        let palette = theme.palette();
        self.primary_material.set_colors(
            palette.primary_color,
            palette.primary_emissive,
            palette.primary_emissive_intensity,
        );
        self.wireframe_material
            .set_colors(palette.wireframe_color, [0.0, 0.0, 0.0], 0.0);
        self.wireframe_material.set_opacity(palette.wireframe_opacity);
        self.lights.apply_theme(theme);
    }

    pub fn init_gpu_resources(&mut self, device: &Device) {
        self.primary.init_gpu_resources(device);
        self.wireframe.init_gpu_resources(device);
        for satellite in &mut self.satellites {
            satellite.init_gpu_resources(device);
        }
        self.primary_material.init_gpu_resources(device);
        self.wireframe_material.init_gpu_resources(device);
        for material in &mut self.satellite_materials {
            material.init_gpu_resources(device);
        }
    }

    /// Push transform and material changes to the GPU.
    pub fn sync(&mut self, queue: &wgpu::Queue) {
        self.primary.update_transform(queue);
        self.wireframe.update_transform(queue);
        for satellite in &self.satellites {
            satellite.update_transform(queue);
        }
        self.primary_material.sync(queue);
        self.wireframe_material.sync(queue);
        for material in &mut self.satellite_materials {
            material.sync(queue);
        }
    }

    /// Release every tracked resource unit. Returns the number of units
    /// released so the caller's ledger can balance; GPU buffers that were
    /// never uploaded still count as released CPU units.
    pub fn release_resources(&mut self) -> usize {
        self.primary.release_gpu_resources();
        self.wireframe.release_gpu_resources();
        for satellite in &mut self.satellites {
            satellite.release_gpu_resources();
        }
        self.primary_material.release_gpu_resources();
        self.wireframe_material.release_gpu_resources();
        for material in &mut self.satellite_materials {
            material.release_gpu_resources();
        }
        Self::RESOURCE_UNITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_starts_with_light_palette() {
        let scene = HeroScene::new(Theme::Light);
        assert_eq!(scene.primary_material.base_color, rgb(0x3B82F6));
        assert_eq!(scene.wireframe_material.opacity, 0.3);
    }

    #[test]
    fn test_theme_change_recolors_primary_only() {
        let mut scene = HeroScene::new(Theme::Light);
        scene.advance(1.0 / 60.0);
        let transform_before = scene.primary.transform;
        let satellite_color = scene.satellite_materials[0].base_color;

        scene.apply_theme(Theme::Dark);

        assert_eq!(scene.primary_material.base_color, rgb(0x4F46E5));
        assert_eq!(scene.wireframe_material.opacity, 0.4);
        // Satellites and transforms are untouched
        assert_eq!(scene.satellite_materials[0].base_color, satellite_color);
        assert_eq!(scene.primary.transform, transform_before);
    }

    #[test]
    fn test_advance_moves_lights() {
        let mut scene = HeroScene::new(Theme::Light);
        let before = scene.lights.point_positions;
        scene.advance(0.5);
        assert_ne!(scene.lights.point_positions, before);
    }
}
