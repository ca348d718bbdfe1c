//! Texture handles supplied by the host

use std::rc::Rc;
use std::sync::Arc;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Anything with a queryable pixel size can texture a particle
pub trait Texture: Clone {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Pixel size as a vector
    fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }
}

impl<T: Texture> Texture for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }
}

impl<T: Texture> Texture for Rc<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }
}

impl<T: Texture> Texture for Arc<T> {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }
}

/// Plain texture handle: a host-side id plus its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureInfo {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    pub const fn new(id: u32, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }
}

impl Texture for TextureInfo {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_through_wrappers() {
        let tex = TextureInfo::new(1, 16, 8);
        assert_eq!(tex.size(), Vec2::new(16.0, 8.0));
        assert_eq!(Rc::new(tex).size(), Vec2::new(16.0, 8.0));
        assert_eq!(Arc::new(tex).width(), 16);
        assert_eq!((&tex).height(), 8);
    }
}
