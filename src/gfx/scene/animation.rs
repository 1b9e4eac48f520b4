//! Pure animation math for the hero scene.
//!
//! Everything in here is CPU-side and deterministic so the motion rules
//! can be tested without a GPU. Time is accumulated in seconds; the
//! per-tick constants (easing, auto-spin) are applied once per frame.

use std::f32::consts::PI;

use cgmath::Vector2;

/// Fraction of the remaining distance covered each tick while easing
/// toward the pointer-driven target rotation.
const EASING: f32 = 0.05;

/// Constant spin added to the group's y rotation every tick.
const AUTO_SPIN: f32 = 0.005;

/// How strongly the pointer tilts the group, in radians at the viewport
/// edge.
const POINTER_TILT: f32 = 0.3;

/// Orbit radius of the three satellites around the group center.
const SATELLITE_ORBIT_RADIUS: f32 = 2.5;

#[derive(Debug, Clone, Copy)]
pub struct AnimationState {
    /// Current group rotation (x tilt, y yaw) in radians.
    pub rotation: Vector2<f32>,
    /// Rotation the group is easing toward.
    pub target_rotation: Vector2<f32>,
    /// Accumulated scene time in seconds.
    pub time: f32,
    /// Accumulated self-spin of the satellites (x, y) in radians.
    pub satellite_spin: Vector2<f32>,
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            rotation: Vector2::new(0.0, 0.0),
            target_rotation: Vector2::new(0.0, 0.0),
            time: 0.0,
            satellite_spin: Vector2::new(0.0, 0.0),
        }
    }

    /// Advance by `dt` seconds. Easing and auto-spin are per-tick amounts,
    /// matching a frame-callback animation loop.
    pub fn tick(&mut self, dt: f32) {
        self.time += dt;

        self.rotation.x += (self.target_rotation.x - self.rotation.x) * EASING;
        self.rotation.y += (self.target_rotation.y - self.rotation.y) * EASING;
        self.rotation.y += AUTO_SPIN;

        self.satellite_spin.x += 0.02;
        self.satellite_spin.y += 0.03;
    }

    /// Pointer moved over the viewport. `nx` and `ny` are normalized to
    /// [-1, 1] with +y pointing up.
    pub fn pointer_moved(&mut self, nx: f32, ny: f32) {
        self.target_rotation = Vector2::new(ny * POINTER_TILT, nx * POINTER_TILT);
    }

    /// Pointer left the viewport. The group eases back to rest.
    pub fn pointer_left(&mut self) {
        self.target_rotation = Vector2::new(0.0, 0.0);
    }

    /// Vertical bobbing offset of the whole group.
    pub fn group_offset_y(&self) -> f32 {
        (self.time * 0.5).sin() * 0.2
    }

    /// Position of satellite `index` (0..3) relative to the group center.
    pub fn satellite_position(&self, index: usize) -> [f32; 3] {
        let angle = self.time + index as f32 * (2.0 * PI / 3.0);
        [
            angle.cos() * SATELLITE_ORBIT_RADIUS,
            (self.time * 2.0 + index as f32).sin() * 0.5,
            angle.sin() * SATELLITE_ORBIT_RADIUS,
        ]
    }

    /// Rotation (x, y) of the wireframe shell, which spins independently
    /// of the pointer-driven group rotation.
    pub fn wireframe_rotation(&self) -> Vector2<f32> {
        Vector2::new(self.time * 0.2, self.time * 0.3)
    }

    /// World positions of the two sweeping point lights.
    pub fn point_light_positions(&self) -> [[f32; 3]; 2] {
        let t = self.time;
        [
            [t.cos() * 8.0, 5.0, t.sin() * 8.0],
            [(t + PI).cos() * 6.0, -5.0, (t + PI).sin() * 6.0],
        ]
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_rotation_eases_toward_target() {
        let mut state = AnimationState::new();
        state.pointer_moved(1.0, 1.0);

        let mut previous = state.rotation.x;
        for _ in 0..100 {
            state.tick(DT);
            // x tilt approaches 0.3 monotonically and never overshoots
            assert!(state.rotation.x >= previous);
            assert!(state.rotation.x <= POINTER_TILT + 1e-6);
            previous = state.rotation.x;
        }
        assert!((state.rotation.x - POINTER_TILT).abs() < 0.01);
    }

    #[test]
    fn test_auto_spin_accumulates_without_pointer() {
        let mut state = AnimationState::new();
        for _ in 0..10 {
            state.tick(DT);
        }
        assert!((state.rotation.y - 10.0 * AUTO_SPIN).abs() < 1e-5);
        assert_eq!(state.rotation.x, 0.0);
    }

    #[test]
    fn test_pointer_left_returns_to_rest() {
        let mut state = AnimationState::new();
        state.pointer_moved(-1.0, 0.5);
        for _ in 0..50 {
            state.tick(DT);
        }
        assert!(state.rotation.x.abs() > 0.01);

        state.pointer_left();
        for _ in 0..500 {
            state.tick(DT);
        }
        assert!(state.rotation.x.abs() < 1e-3);
    }

    #[test]
    fn test_satellites_stay_on_orbit_radius() {
        let mut state = AnimationState::new();
        for _ in 0..120 {
            state.tick(DT);
            for index in 0..3 {
                let [x, _, z] = state.satellite_position(index);
                let radial = (x * x + z * z).sqrt();
                assert!((radial - SATELLITE_ORBIT_RADIUS).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_satellites_evenly_spaced() {
        let mut state = AnimationState::new();
        state.tick(DT);
        let positions: Vec<[f32; 3]> = (0..3).map(|i| state.satellite_position(i)).collect();
        let angle = |p: [f32; 3]| p[2].atan2(p[0]);
        let separation = (angle(positions[1]) - angle(positions[0])).rem_euclid(2.0 * PI);
        assert!((separation - 2.0 * PI / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_bob_stays_within_amplitude() {
        let mut state = AnimationState::new();
        for _ in 0..600 {
            state.tick(DT);
            assert!(state.group_offset_y().abs() <= 0.2 + 1e-6);
        }
    }

    #[test]
    fn test_point_lights_opposite_phases() {
        let state = AnimationState::new();
        let [a, b] = state.point_light_positions();
        assert_eq!(a[1], 5.0);
        assert_eq!(b[1], -5.0);
        // At t = 0 the lights sit on opposite sides of the origin
        assert!(a[0] > 0.0 && b[0] < 0.0);
    }
}
