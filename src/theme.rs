//! Light/dark theme signal and the two color palettes.
//!
//! The theme only ever drives colors and intensities. Geometry, transforms
//! and animation timing are theme-independent, and the recoloring pass in
//! the scene must uphold that.

/// External light/dark flag affecting only color choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl Theme {
    /// Flips between light and dark.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Returns the fixed palette for this theme.
    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }
}

/// Color/intensity set swapped wholesale on a theme change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub primary_color: [f32; 3],
    pub primary_emissive: [f32; 3],
    pub primary_emissive_intensity: f32,
    pub wireframe_color: [f32; 3],
    pub wireframe_opacity: f32,
    pub ambient_intensity: f32,
    pub background: [f32; 3],
}

pub const LIGHT: Palette = Palette {
    primary_color: rgb(0x3B82F6),
    primary_emissive: rgb(0x1E3A8A),
    primary_emissive_intensity: 0.05,
    wireframe_color: rgb(0x6366F1),
    wireframe_opacity: 0.3,
    ambient_intensity: 0.4,
    background: rgb(0xF5F7FB),
};

pub const DARK: Palette = Palette {
    primary_color: rgb(0x4F46E5),
    primary_emissive: rgb(0x1E1B4B),
    primary_emissive_intensity: 0.1,
    wireframe_color: rgb(0x8B5CF6),
    wireframe_opacity: 0.4,
    ambient_intensity: 0.3,
    background: rgb(0x111827),
};

/// Converts a 24-bit hex color to normalized RGB components.
pub const fn rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_conversion() {
        assert_eq!(rgb(0xFFFFFF), [1.0, 1.0, 1.0]);
        assert_eq!(rgb(0x000000), [0.0, 0.0, 0.0]);
        let [r, g, b] = rgb(0x3B82F6);
        assert!((r - 0x3B as f32 / 255.0).abs() < 1e-6);
        assert!((g - 0x82 as f32 / 255.0).abs() < 1e-6);
        assert!((b - 0xF6 as f32 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn test_palettes_use_designated_values() {
        assert_eq!(LIGHT.primary_color, rgb(0x3B82F6));
        assert_eq!(DARK.primary_color, rgb(0x4F46E5));
        assert_eq!(LIGHT.wireframe_opacity, 0.3);
        assert_eq!(DARK.wireframe_opacity, 0.4);
        assert_eq!(LIGHT.ambient_intensity, 0.4);
        assert_eq!(DARK.ambient_intensity, 0.3);
    }
}
