//! Per-frame draw snapshots and the sprite batch they feed

use glam::Vec2;

use crate::sim::Color;

/// Renderer-facing description of one particle for a single frame
#[derive(Debug, Clone, PartialEq)]
pub struct DrawSnapshot<T> {
    pub texture: T,
    pub position: Vec2,
    /// Color mask already multiplied by the particle's alpha
    pub color: Color,
    pub rotation: f32,
    /// Render anchor in texture pixels (texture center)
    pub origin: Vec2,
    pub scale: f32,
    pub depth: f32,
}

/// Something that consumes draw snapshots, usually a host sprite batcher
pub trait SpriteBatch<T> {
    fn draw(&mut self, snapshot: &DrawSnapshot<T>);
}

impl<T: Clone> SpriteBatch<T> for Vec<DrawSnapshot<T>> {
    fn draw(&mut self, snapshot: &DrawSnapshot<T>) {
        self.push(snapshot.clone());
    }
}
