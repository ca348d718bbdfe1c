//! Host-facing render boundary
//!
//! The simulation never touches pixels. It hands out `DrawSnapshot`s that a
//! host renderer rasterizes as scaled, rotated, origin-anchored sprites.

pub mod instance;
pub mod snapshot;
pub mod texture;

pub use instance::SpriteInstance;
pub use snapshot::{DrawSnapshot, SpriteBatch};
pub use texture::{Texture, TextureInfo};
