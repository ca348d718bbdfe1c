//! Particle emitter
//!
//! Owns the live particles plus two pending queues. Additions and removals are
//! only ever queued; both queues are reconciled at the top of `update`, so the
//! live list is never mutated while it is being iterated.
//!
//! A particle that expires during update N is still live (and drawable) until
//! the reconciliation at the start of update N + 1.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::options::GenerationOptions;
use super::particle::{Particle, ParticleId, ParticleSpawn, RemovalRequest};
use super::velocity::generate_initial_state;
use crate::renderer::{DrawSnapshot, SpriteBatch, Texture};
use crate::settings::Settings;

static NEXT_EMITTER_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique emitter identity, used as the particle back-reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmitterId(u64);

impl EmitterId {
    pub(crate) fn next() -> Self {
        Self(NEXT_EMITTER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub struct Emitter<T> {
    id: EmitterId,
    /// World position new particles spawn at
    position: Vec2,
    /// Active particles (insertion order)
    particles: Vec<Particle<T>>,
    to_add: Vec<Particle<T>>,
    to_remove: BTreeSet<ParticleId>,
    rng: Pcg32,
    seed: u64,
    /// Upper bound on live + pending particles
    max_particles: Option<usize>,
    next_particle_id: u64,
}

/// A clone gets a fresh id and its live particles are re-parented to it
impl<T: Clone> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        let id = EmitterId::next();
        let mut particles = self.particles.clone();
        for particle in particles.iter_mut() {
            particle.on_added(id);
        }

        Self {
            id,
            position: self.position,
            particles,
            to_add: self.to_add.clone(),
            to_remove: self.to_remove.clone(),
            rng: self.rng.clone(),
            seed: self.seed,
            max_particles: self.max_particles,
            next_particle_id: self.next_particle_id,
        }
    }
}

impl<T: Texture> Emitter<T> {
    /// Create an emitter with a random seed
    pub fn new(position: Vec2) -> Self {
        Self::with_seed(position, rand::random())
    }

    /// Create an emitter whose generated batches are reproducible
    pub fn with_seed(position: Vec2, seed: u64) -> Self {
        Self {
            id: EmitterId::next(),
            position,
            particles: Vec::new(),
            to_add: Vec::new(),
            to_remove: BTreeSet::new(),
            rng: Pcg32::seed_from_u64(seed),
            seed,
            max_particles: None,
            next_particle_id: 1,
        }
    }

    /// Create an emitter configured from settings (seed and particle cap)
    pub fn from_settings(position: Vec2, settings: &Settings) -> Self {
        let seed = settings.seed.unwrap_or_else(rand::random);
        let mut emitter = Self::with_seed(position, seed);
        emitter.max_particles = settings.max_particles();
        emitter
    }

    /// Advance the emitter by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        // Lists first, always
        self.update_lists();

        for particle in self.particles.iter_mut() {
            if let Some(request) = particle.update(dt) {
                if request.emitter == self.id {
                    self.to_remove.insert(request.particle);
                }
            }
        }
    }

    /// Move queued particles in and drop queued removals
    fn update_lists(&mut self) {
        let added = self.to_add.len();
        for mut particle in self.to_add.drain(..) {
            particle.on_added(self.id);
            self.particles.push(particle);
        }

        let mut removed = 0;
        if !self.to_remove.is_empty() {
            let to_remove = &self.to_remove;
            self.particles.retain_mut(|particle| {
                if to_remove.contains(&particle.id()) {
                    particle.on_removed();
                    removed += 1;
                    false
                } else {
                    true
                }
            });
            self.to_remove.clear();
        }

        if added > 0 || removed > 0 {
            log::trace!(
                "Emitter {:?}: +{} -{} -> {} live",
                self.id,
                added,
                removed,
                self.particles.len()
            );
        }
    }

    /// Queue a particle; it becomes live on the next `update`
    pub fn add_particle(&mut self, spawn: ParticleSpawn<T>) -> ParticleId {
        let id = ParticleId(self.next_particle_id);
        self.next_particle_id += 1;
        self.to_add.push(Particle::new(id, spawn));
        id
    }

    /// Queue a particle for removal on the next `update`. Repeated requests
    /// and unknown ids are ignored.
    pub fn remove_particle(&mut self, id: ParticleId) {
        if self.tracks(id) {
            self.to_remove.insert(id);
        }
    }

    /// Live or pending addition
    fn tracks(&self, id: ParticleId) -> bool {
        self.particles
            .iter()
            .chain(self.to_add.iter())
            .any(|p| p.id() == id)
    }

    /// Route a particle's own removal request (ignored if addressed elsewhere)
    pub fn request_removal(&mut self, request: RemovalRequest) {
        if request.emitter == self.id {
            self.remove_particle(request.particle);
        }
    }

    /// Queue every live and pending particle for removal
    pub fn clear(&mut self) {
        let ids = self
            .particles
            .iter()
            .chain(self.to_add.iter())
            .map(Particle::id);
        self.to_remove.extend(ids);
    }

    /// Generate a batch of particles at the current position. They become
    /// visible after the next `update`.
    pub fn generate(&mut self, options: &GenerationOptions<T>) {
        let mut count = options.count as usize;
        if let Some(max) = self.max_particles {
            // Particles queued for removal free their slot at the next reconciliation
            let in_use = self
                .particles
                .iter()
                .chain(self.to_add.iter())
                .filter(|p| !self.to_remove.contains(&p.id()))
                .count();
            let room = max.saturating_sub(in_use);
            if count > room {
                log::warn!(
                    "Emitter {:?}: particle cap {} reached, generating {} of {}",
                    self.id,
                    max,
                    room,
                    count
                );
                count = room;
            }
        }

        self.to_add.reserve(count);
        for _ in 0..count {
            let state = generate_initial_state(&mut self.rng, options);
            self.add_particle(ParticleSpawn {
                texture: options.texture.clone(),
                position: self.position,
                velocity: state.velocity,
                rotation: 0.0,
                rotation_velocity: state.rotation_velocity,
                scale: state.scale,
                time_to_live: state.time_to_live,
                color: options.color,
                fade: options.fade,
            });
        }

        log::debug!(
            "Emitter {:?}: queued {} {} particles at ({}, {})",
            self.id,
            count,
            options.emission_type.as_str(),
            self.position.x,
            self.position.y
        );
    }

    /// One snapshot per live particle, in iteration order
    pub fn draw(&self) -> Vec<DrawSnapshot<T>> {
        self.particles.iter().map(Particle::draw).collect()
    }

    /// Feed every live particle into a sprite batch
    pub fn draw_to<B: SpriteBatch<T> + ?Sized>(&self, batch: &mut B) {
        for particle in &self.particles {
            batch.draw(&particle.draw());
        }
    }
}

impl<T> Emitter<T> {
    pub fn id(&self) -> EmitterId {
        self.id
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }

    pub fn set_y(&mut self, y: f32) {
        self.position.y = y;
    }

    pub fn max_particles(&self) -> Option<usize> {
        self.max_particles
    }

    pub fn set_max_particles(&mut self, max: Option<usize>) {
        self.max_particles = max;
    }

    /// Live particles
    pub fn particles(&self) -> &[Particle<T>] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn pending_additions(&self) -> usize {
        self.to_add.len()
    }

    pub fn pending_removals(&self) -> usize {
        self.to_remove.len()
    }
}
