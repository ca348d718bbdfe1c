//! Particle Emitter - 2D sprite particle effects
//!
//! Core modules:
//! - `sim`: Emitter/particle simulation (lifecycle, deferred add/remove, velocity generation)
//! - `renderer`: Host-facing render boundary (textures, draw snapshots, sprite batches)
//! - `settings`: Emitter settings and quality presets
//! - `presets`: Named generation presets loaded from JSON

pub mod presets;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use presets::{GenerationPreset, PresetError, PresetLibrary};
pub use renderer::{DrawSnapshot, SpriteBatch, SpriteInstance, Texture, TextureInfo};
pub use settings::{QualityPreset, Settings};
pub use sim::{
    Color, EmissionType, Emitter, EmitterId, FloatRange, GenerationOptions, Particle, ParticleId,
    ParticleSpawn,
};

/// Engine configuration constants
pub mod consts {
    /// Nominal frame step for hosts that run a fixed 60 Hz loop
    pub const FRAME_DT: f32 = 1.0 / 60.0;

    /// Offset subtracted from velocity and rotation velocity samples
    pub const VELOCITY_SAMPLE_OFFSET: f32 = 1.0;
    /// Rotation velocity samples are scaled down by this factor
    pub const ROTATION_VELOCITY_FACTOR: f32 = 0.1;

    /// Layer depth written into every draw snapshot
    pub const PARTICLE_DEPTH: f32 = 0.0;
}

/// Linear interpolation from `a` to `b` that is exact at both ends
#[inline]
pub fn lerp_precise(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_precise_endpoints() {
        assert_eq!(lerp_precise(1.0, 0.0, 0.0), 1.0);
        assert_eq!(lerp_precise(1.0, 0.0, 1.0), 0.0);
        assert!((lerp_precise(1.0, 0.0, 0.25) - 0.75).abs() < 1e-6);
    }
}
