//! Velocity generation
//!
//! Turns an emission type plus min/max ranges into per-particle initial state.
//! Uniform samples are in [0, 1) and mapped through one of two formulas:
//! - `OffsetScaled`: clamp(sample * max - 1, min, max) for velocity and rotation velocity
//! - `Scaled`: clamp(sample * max, min, max) for scale and lifetime
//!
//! The `- 1` only applies to the velocity-type ranges. Keep it that way; existing
//! effects are tuned against it.

use glam::Vec2;
use rand::Rng;

use super::options::{EmissionType, GenerationOptions};
use super::range::FloatRange;
use crate::consts::{ROTATION_VELOCITY_FACTOR, VELOCITY_SAMPLE_OFFSET};

/// Mapping from a uniform sample to a value inside a range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormula {
    /// clamp(sample * max - VELOCITY_SAMPLE_OFFSET, min, max)
    OffsetScaled,
    /// clamp(sample * max, min, max)
    Scaled,
}

impl SampleFormula {
    #[inline]
    pub fn apply(self, sample: f32, range: &FloatRange) -> f32 {
        let raw = match self {
            SampleFormula::OffsetScaled => sample * range.maximum - VELOCITY_SAMPLE_OFFSET,
            SampleFormula::Scaled => sample * range.maximum,
        };
        range.clamp(raw)
    }

    /// Draw a sample from `rng` and map it
    #[inline]
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R, range: &FloatRange) -> f32 {
        let sample: f32 = rng.random();
        self.apply(sample, range)
    }
}

/// Randomly -1.0 or 1.0
#[inline]
fn random_sign<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    (rng.random_range(0..2) * 2 - 1) as f32
}

/// Initial velocity for one particle
pub fn generate_velocity<R: Rng + ?Sized>(
    rng: &mut R,
    emission_type: EmissionType,
    range: &FloatRange,
) -> Vec2 {
    let magnitude = |rng: &mut R| SampleFormula::OffsetScaled.sample(rng, range);

    match emission_type {
        EmissionType::Burst => {
            let mut value = Vec2::new(magnitude(&mut *rng), magnitude(&mut *rng));
            value.x *= random_sign(rng);
            value.y *= random_sign(rng);
            value
        }
        EmissionType::UpOnly => Vec2::new(0.0, -magnitude(rng)),
        EmissionType::DownOnly => Vec2::new(0.0, magnitude(rng)),
        EmissionType::LeftOnly => Vec2::new(-magnitude(rng), 0.0),
        EmissionType::RightOnly => Vec2::new(magnitude(rng), 0.0),
    }
}

/// Randomized initial state for one particle (everything not copied from options)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InitialState {
    pub velocity: Vec2,
    pub rotation_velocity: f32,
    pub scale: f32,
    pub time_to_live: f32,
}

/// Draw one particle's randomized state. Sample order is velocity, rotation
/// velocity, scale, then lifetime, so a seeded rng reproduces the same batch.
pub fn generate_initial_state<R: Rng + ?Sized, T>(
    rng: &mut R,
    options: &GenerationOptions<T>,
) -> InitialState {
    let velocity = generate_velocity(rng, options.emission_type, &options.velocity);
    let rotation_velocity = ROTATION_VELOCITY_FACTOR
        * SampleFormula::OffsetScaled.sample(rng, &options.rotation_velocity);
    let scale = SampleFormula::Scaled.sample(rng, &options.scale);
    let time_to_live = SampleFormula::Scaled.sample(rng, &options.time_to_live);

    InitialState {
        velocity,
        rotation_velocity,
        scale,
        time_to_live,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_offset_scaled_formula() {
        let range = FloatRange::new(1.0, 4.0);
        // 0.5 * 4 - 1 = 1
        assert_eq!(SampleFormula::OffsetScaled.apply(0.5, &range), 1.0);
        // 0.0 * 4 - 1 = -1, clamped up to minimum
        assert_eq!(SampleFormula::OffsetScaled.apply(0.0, &range), 1.0);
        // 0.99 * 4 - 1 = 2.96
        assert!((SampleFormula::OffsetScaled.apply(0.99, &range) - 2.96).abs() < 1e-5);
    }

    #[test]
    fn test_scaled_formula() {
        let range = FloatRange::new(0.1, 1.0);
        assert_eq!(SampleFormula::Scaled.apply(0.5, &range), 0.5);
        assert_eq!(SampleFormula::Scaled.apply(0.0, &range), 0.1);
    }

    #[test]
    fn test_offset_never_reaches_maximum_with_unit_samples() {
        // sample < 1, so sample * max - 1 < max - 1
        let range = FloatRange::new(0.0, 4.0);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let v = SampleFormula::OffsetScaled.sample(&mut rng, &range);
            assert!(v >= 0.0 && v < 3.0);
        }
    }

    #[test]
    fn test_directional_velocities() {
        let range = FloatRange::new(1.0, 4.0);
        let mut rng = Pcg32::seed_from_u64(42);

        for _ in 0..100 {
            let up = generate_velocity(&mut rng, EmissionType::UpOnly, &range);
            assert_eq!(up.x, 0.0);
            assert!(up.y <= -1.0);

            let down = generate_velocity(&mut rng, EmissionType::DownOnly, &range);
            assert_eq!(down.x, 0.0);
            assert!(down.y >= 1.0);

            let left = generate_velocity(&mut rng, EmissionType::LeftOnly, &range);
            assert!(left.x <= -1.0);
            assert_eq!(left.y, 0.0);

            let right = generate_velocity(&mut rng, EmissionType::RightOnly, &range);
            assert!(right.x >= 1.0);
            assert_eq!(right.y, 0.0);
        }
    }

    #[test]
    fn test_burst_covers_all_quadrants() {
        let range = FloatRange::new(1.0, 4.0);
        let mut rng = Pcg32::seed_from_u64(3);
        let mut quadrants = [false; 4];

        for _ in 0..200 {
            let v = generate_velocity(&mut rng, EmissionType::Burst, &range);
            assert!(v.x.abs() >= 1.0 && v.x.abs() <= 4.0);
            assert!(v.y.abs() >= 1.0 && v.y.abs() <= 4.0);
            let idx = (v.x > 0.0) as usize * 2 + (v.y > 0.0) as usize;
            quadrants[idx] = true;
        }

        assert!(quadrants.iter().all(|&q| q));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let options = GenerationOptions {
            texture: (),
            count: 1,
            color: crate::sim::Color::WHITE,
            velocity: FloatRange::new(1.0, 4.0),
            emission_type: EmissionType::Burst,
            rotation_velocity: FloatRange::new(1.0, 2.0),
            scale: FloatRange::new(0.1, 1.0),
            time_to_live: FloatRange::new(1.0, 1.5),
            fade: false,
        };

        let mut rng1 = Pcg32::seed_from_u64(99999);
        let mut rng2 = Pcg32::seed_from_u64(99999);
        for _ in 0..10 {
            let a = generate_initial_state(&mut rng1, &options);
            let b = generate_initial_state(&mut rng2, &options);
            assert_eq!(a, b);
            assert!((0.1..=0.2).contains(&a.rotation_velocity));
            assert!(options.scale.contains(a.scale));
            assert!(options.time_to_live.contains(a.time_to_live));
        }
    }
}
