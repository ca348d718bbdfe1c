//! Particle generation options

use serde::{Deserialize, Serialize};

use super::range::FloatRange;

/// How the xy-velocity of generated particles is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EmissionType {
    /// Random directions (x and y signs chosen independently)
    #[default]
    Burst,
    /// Straight up (negative y)
    UpOnly,
    /// Straight down (positive y)
    DownOnly,
    /// Straight left (negative x)
    LeftOnly,
    /// Straight right (positive x)
    RightOnly,
}

impl EmissionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmissionType::Burst => "Burst",
            EmissionType::UpOnly => "UpOnly",
            EmissionType::DownOnly => "DownOnly",
            EmissionType::LeftOnly => "LeftOnly",
            EmissionType::RightOnly => "RightOnly",
        }
    }

    /// Parse a name; anything unrecognized falls back to `Burst`
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "up" | "uponly" => EmissionType::UpOnly,
            "down" | "downonly" => EmissionType::DownOnly,
            "left" | "leftonly" => EmissionType::LeftOnly,
            "right" | "rightonly" => EmissionType::RightOnly,
            _ => EmissionType::Burst,
        }
    }
}

/// RGBA color mask, channels in 0-1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Color {
    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Scale every channel by `factor` (premultiplied opacity)
    pub fn scaled(&self, factor: f32) -> Self {
        Self::rgba(
            self.r * factor,
            self.g * factor,
            self.b * factor,
            self.a * factor,
        )
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Everything needed to spawn one batch of particles.
///
/// `T` is the host's texture handle; it is cloned into every particle.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions<T> {
    /// Texture used to render the particles
    pub texture: T,
    /// Number of particles to generate
    pub count: u32,
    /// Color mask used when rendering
    pub color: Color,
    /// Velocity magnitude bounds (distance per update)
    pub velocity: FloatRange,
    /// Direction policy for the velocity
    pub emission_type: EmissionType,
    /// Rotation velocity bounds (before the 0.1 factor)
    pub rotation_velocity: FloatRange,
    /// Render scale bounds
    pub scale: FloatRange,
    /// Lifetime bounds in seconds
    pub time_to_live: FloatRange,
    /// Fade out over the particle's lifetime
    pub fade: bool,
}
