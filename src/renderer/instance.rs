//! Flat instance data for hosts that upload sprites to a GPU buffer

use bytemuck::{Pod, Zeroable};

use super::snapshot::DrawSnapshot;

/// One sprite instance, laid out for a vertex/instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub position: [f32; 2],
    pub origin: [f32; 2],
    pub color: [f32; 4],
    pub rotation: f32,
    pub scale: f32,
    pub depth: f32,
    pub _pad: f32,
}

impl SpriteInstance {
    pub fn from_snapshot<T>(snapshot: &DrawSnapshot<T>) -> Self {
        Self {
            position: snapshot.position.to_array(),
            origin: snapshot.origin.to_array(),
            color: snapshot.color.to_array(),
            rotation: snapshot.rotation,
            scale: snapshot.scale,
            depth: snapshot.depth,
            _pad: 0.0,
        }
    }
}

impl<T> From<&DrawSnapshot<T>> for SpriteInstance {
    fn from(snapshot: &DrawSnapshot<T>) -> Self {
        Self::from_snapshot(snapshot)
    }
}

/// Convert a frame's snapshots into instance data (caller reuses `out`)
pub fn write_instances<T>(snapshots: &[DrawSnapshot<T>], out: &mut Vec<SpriteInstance>) {
    out.clear();
    out.extend(snapshots.iter().map(SpriteInstance::from_snapshot));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Color;
    use glam::Vec2;

    #[test]
    fn test_instance_layout() {
        // 12 floats, no implicit padding
        assert_eq!(std::mem::size_of::<SpriteInstance>(), 12 * 4);
    }

    #[test]
    fn test_from_snapshot() {
        let snapshot = DrawSnapshot {
            texture: (),
            position: Vec2::new(10.0, 20.0),
            color: Color::rgba(0.5, 0.5, 0.5, 0.5),
            rotation: 0.3,
            origin: Vec2::new(8.0, 8.0),
            scale: 2.0,
            depth: 0.0,
        };

        let mut out = vec![SpriteInstance::zeroed()];
        write_instances(&[snapshot.clone(), snapshot], &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].position, [10.0, 20.0]);
        assert_eq!(out[0].color, [0.5; 4]);
        assert_eq!(bytemuck::cast_slice::<SpriteInstance, f32>(&out).len(), 24);
    }
}
