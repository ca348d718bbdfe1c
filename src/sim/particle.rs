//! A single simulated particle
//!
//! Motion is per update call, not per second: `position += velocity` and
//! `rotation += rotation_velocity` each update, independent of `dt`. Only age
//! (and therefore fade and expiry) advances with elapsed time.

use glam::Vec2;

use super::emitter::EmitterId;
use super::options::Color;
use crate::consts::PARTICLE_DEPTH;
use crate::lerp_precise;
use crate::renderer::{DrawSnapshot, Texture};

/// Identity of a particle within its emitter
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParticleId(pub u64);

/// Initial state for a particle handed to `Emitter::add_particle`
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSpawn<T> {
    pub texture: T,
    pub position: Vec2,
    pub velocity: Vec2,
    pub rotation: f32,
    pub rotation_velocity: f32,
    pub scale: f32,
    pub time_to_live: f32,
    pub color: Color,
    pub fade: bool,
}

/// A particle asking its owning emitter to drop it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalRequest {
    pub emitter: EmitterId,
    pub particle: ParticleId,
}

#[derive(Debug, Clone)]
pub struct Particle<T> {
    id: ParticleId,
    texture: T,
    position: Vec2,
    velocity: Vec2,
    rotation: f32,
    rotation_velocity: f32,
    scale: f32,
    color: Color,
    /// Opacity, 1.0 unless fading
    alpha: f32,
    /// Seconds the particle may live
    time_to_live: f32,
    /// Seconds the particle has been alive
    age: f32,
    /// Render anchor, fixed at the texture center
    origin: Vec2,
    fade: bool,
    /// Emitter currently tracking this particle (non-owning)
    owner: Option<EmitterId>,
}

impl<T: Texture> Particle<T> {
    pub(crate) fn new(id: ParticleId, spawn: ParticleSpawn<T>) -> Self {
        let origin = spawn.texture.size() * 0.5;
        Self {
            id,
            texture: spawn.texture,
            position: spawn.position,
            velocity: spawn.velocity,
            rotation: spawn.rotation,
            rotation_velocity: spawn.rotation_velocity,
            scale: spawn.scale,
            color: spawn.color,
            alpha: 1.0,
            time_to_live: spawn.time_to_live,
            age: 0.0,
            origin,
            fade: spawn.fade,
            owner: None,
        }
    }

    /// Snapshot of the particle's visual state for this frame
    pub fn draw(&self) -> DrawSnapshot<T> {
        DrawSnapshot {
            texture: self.texture.clone(),
            position: self.position,
            color: self.color.scaled(self.alpha),
            rotation: self.rotation,
            origin: self.origin,
            scale: self.scale,
            depth: PARTICLE_DEPTH,
        }
    }
}

impl<T> Particle<T> {
    /// Advance by `dt` seconds. Returns a removal request once the particle
    /// has expired while attached to an emitter.
    pub fn update(&mut self, dt: f32) -> Option<RemovalRequest> {
        self.age += dt;

        self.position += self.velocity;
        self.rotation += self.rotation_velocity;

        if self.fade {
            self.alpha = self.fade_alpha();
        }

        if self.is_expired() {
            self.owner.map(|emitter| RemovalRequest {
                emitter,
                particle: self.id,
            })
        } else {
            None
        }
    }

    /// Linear 1 -> 0 over the lifetime, clamped once age overshoots
    fn fade_alpha(&self) -> f32 {
        if self.time_to_live <= 0.0 {
            return 0.0;
        }
        lerp_precise(1.0, 0.0, self.age / self.time_to_live).clamp(0.0, 1.0)
    }

    pub(crate) fn on_added(&mut self, emitter: EmitterId) {
        self.owner = Some(emitter);
    }

    pub(crate) fn on_removed(&mut self) {
        self.owner = None;
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.time_to_live
    }

    pub fn id(&self) -> ParticleId {
        self.id
    }

    pub fn texture(&self) -> &T {
        &self.texture
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn rotation_velocity(&self) -> f32 {
        self.rotation_velocity
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn time_to_live(&self) -> f32 {
        self.time_to_live
    }

    /// Total time alive
    pub fn age(&self) -> f32 {
        self.age
    }

    pub fn fade(&self) -> bool {
        self.fade
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn owner(&self) -> Option<EmitterId> {
        self.owner
    }
}
