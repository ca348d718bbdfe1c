//! Particle simulation module
//!
//! Everything that advances particle state lives here:
//! - Deferred add/remove reconciliation at the top of each update
//! - Seeded RNG per emitter
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies beyond the `Texture` trait

pub mod emitter;
pub mod options;
pub mod particle;
pub mod range;
pub mod velocity;

pub use emitter::{Emitter, EmitterId};
pub use options::{Color, EmissionType, GenerationOptions};
pub use particle::{Particle, ParticleId, ParticleSpawn, RemovalRequest};
pub use range::FloatRange;
pub use velocity::{InitialState, SampleFormula, generate_initial_state, generate_velocity};
