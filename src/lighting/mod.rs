//! Fixed-size light block shared with the forward shader.
//!
//! The shader declares a uniform block of exactly [`MAX_LIGHTS`] records.
//! [`LightBlock`] mirrors that layout byte for byte so it can be uploaded
//! with a single buffer write; the sizes are checked once at startup by
//! [`LightBlock::validate_layout`].

use std::fmt;

use glam::{Vec3, Vec4};

use crate::error::VoxviewError;
use crate::options::LightingOptions;

/// Number of light slots in the shader block.
pub const MAX_LIGHTS: usize = 128;

/// How the shader interprets a light record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum LightMode {
    /// Uniform light from everywhere.
    #[default]
    Ambient = 0,
    /// Omnidirectional light with distance falloff.
    PointLight = 1,
    /// Cone light along the direction, sharpened by the exponent.
    SpotLight = 2,
    /// Parallel light along the direction.
    Directional = 3,
}

impl LightMode {
    /// Decode the raw shader value. Unknown values yield `None`.
    #[must_use]
    pub fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Ambient),
            1 => Some(Self::PointLight),
            2 => Some(Self::SpotLight),
            3 => Some(Self::Directional),
            _ => None,
        }
    }
}

/// One light record.
/// NOTE: Must match the shader struct layout exactly (64 bytes)
///
/// Layout:
///   position: vec4<f32>   (offset 0,  w = 1)
///   direction: vec4<f32>  (offset 16, w = 0)
///   color: vec4<f32>      (offset 32, alpha = intensity)
///   exponent: f32         (offset 48)
///   falloff: f32          (offset 52)
///   mode: u32             (offset 56)
///   active: u32           (offset 60)
///   Total: 64 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Light {
    position: [f32; 4],
    direction: [f32; 4],
    color: [f32; 4],
    exponent: f32,
    falloff: f32,
    mode: u32,
    active: u32,
}

impl Light {
    /// Active ambient light.
    #[must_use]
    pub fn environment(position: Vec3, color: [f32; 3], intensity: f32) -> Self {
        let mut light = Self::default();
        light.set_position(position);
        light.set_color(color);
        light.set_intensity(intensity);
        light.set_exponent(1.0);
        light.set_falloff(0.0);
        light.set_mode(LightMode::Ambient);
        light.set_active(true);
        light
    }

    /// Active point light.
    #[must_use]
    pub fn point(
        position: Vec3,
        color: [f32; 3],
        intensity: f32,
        falloff: f32,
    ) -> Self {
        let mut light = Self::environment(position, color, intensity);
        light.set_falloff(falloff);
        light.set_mode(LightMode::PointLight);
        light
    }

    /// World position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        Vec4::from_array(self.position).truncate()
    }

    /// Set the world position (stored with w = 1).
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position.extend(1.0).to_array();
    }

    /// Light direction.
    #[must_use]
    pub fn direction(&self) -> Vec3 {
        Vec4::from_array(self.direction).truncate()
    }

    /// Set the light direction (stored with w = 0).
    pub fn set_direction(&mut self, direction: Vec3) {
        self.direction = direction.extend(0.0).to_array();
    }

    /// RGB color.
    #[must_use]
    pub fn color(&self) -> [f32; 3] {
        [self.color[0], self.color[1], self.color[2]]
    }

    /// Set the RGB color, keeping the intensity.
    pub fn set_color(&mut self, color: [f32; 3]) {
        self.color = [color[0], color[1], color[2], self.color[3]];
    }

    /// Intensity, stored in the color's alpha channel.
    #[must_use]
    pub fn intensity(&self) -> f32 {
        self.color[3]
    }

    /// Set the intensity.
    pub fn set_intensity(&mut self, intensity: f32) {
        self.color[3] = intensity;
    }

    /// Spot exponent.
    #[must_use]
    pub fn exponent(&self) -> f32 {
        self.exponent
    }

    /// Set the spot exponent, clamped to at least 1.
    pub fn set_exponent(&mut self, exponent: f32) {
        self.exponent = exponent.max(1.0);
    }

    /// Distance falloff.
    #[must_use]
    pub fn falloff(&self) -> f32 {
        self.falloff
    }

    /// Set the distance falloff, clamped to at least 0.
    pub fn set_falloff(&mut self, falloff: f32) {
        self.falloff = falloff.max(0.0);
    }

    /// Shader mode. Records with an unknown raw value read as ambient.
    #[must_use]
    pub fn mode(&self) -> LightMode {
        LightMode::from_raw(self.mode).unwrap_or_default()
    }

    /// Set the shader mode.
    pub fn set_mode(&mut self, mode: LightMode) {
        self.mode = mode as u32;
    }

    /// Whether the shader uses this slot.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active == 1
    }

    /// Enable or disable this slot.
    pub fn set_active(&mut self, active: bool) {
        self.active = u32::from(active);
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.color();
        write!(
            f,
            "({}active) P:{}  D:{}  C:({r}, {g}, {b})  I:{}  E:{}  F:{}  M:{:?}",
            if self.is_active() { "" } else { "in" },
            self.position(),
            self.direction(),
            self.intensity(),
            self.exponent,
            self.falloff,
            self.mode(),
        )
    }
}

/// All light slots, in shader order.
#[derive(Debug, Clone, PartialEq)]
pub struct LightBlock {
    lights: [Light; MAX_LIGHTS],
}

impl Default for LightBlock {
    fn default() -> Self {
        Self {
            lights: [Light::default(); MAX_LIGHTS],
        }
    }
}

impl LightBlock {
    /// Size of the whole block in bytes.
    pub const SIZE: u64 = (size_of::<Light>() * MAX_LIGHTS) as u64;

    /// Block holding only the configured ambient light in slot 0.
    #[must_use]
    pub fn from_options(options: &LightingOptions) -> Self {
        let mut block = Self::default();
        block.lights[0] = Light::environment(
            Vec3::ZERO,
            options.ambient_color,
            options.ambient_intensity,
        );
        block
    }

    /// Check the shader's declared block size against [`Self::SIZE`].
    pub fn validate_layout(shader_block_size: u64) -> Result<(), VoxviewError> {
        if shader_block_size == Self::SIZE {
            Ok(())
        } else {
            Err(VoxviewError::LayoutMismatch {
                expected: Self::SIZE,
                actual: shader_block_size,
            })
        }
    }

    /// Store `light` in the first inactive slot and activate it.
    /// Returns the slot index, or `None` when every slot is in use.
    pub fn push(&mut self, mut light: Light) -> Option<usize> {
        let Some(slot) = self.lights.iter().position(|l| !l.is_active()) else {
            log::warn!("light block full, dropping light: {light}");
            return None;
        };
        light.set_active(true);
        self.lights[slot] = light;
        Some(slot)
    }

    /// Light in `slot`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<&Light> {
        self.lights.get(slot)
    }

    /// Mutable light in `slot`.
    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Light> {
        self.lights.get_mut(slot)
    }

    /// Deactivate every slot.
    pub fn clear(&mut self) {
        self.lights = [Light::default(); MAX_LIGHTS];
    }

    /// Number of active slots.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.lights.iter().filter(|l| l.is_active()).count()
    }

    /// Raw bytes for upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lights)
    }
}
