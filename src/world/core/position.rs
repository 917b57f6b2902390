use crate::constants::chunk::{CHUNK_SIZE, CHUNK_SIZE_F32};
use cgmath::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Position of a chunk in the world (chunk coordinates)
///
/// Identifies a chunk by its discrete coordinates in chunk space, not in
/// voxel space. Structurally equal and hashable, so it can be used directly
/// as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChunkPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Create ChunkPos from a VoxelPos (floor division, correct for
    /// negative coordinates)
    pub fn from_voxel_pos(voxel_pos: VoxelPos) -> Self {
        voxel_pos.to_chunk_pos()
    }

    /// Chunk containing a continuous world-space point (e.g. the player
    /// or camera position).
    pub fn from_world_point(point: Point3<f32>) -> Self {
        Self::new(
            (point.x / CHUNK_SIZE_F32).floor() as i32,
            (point.y / CHUNK_SIZE_F32).floor() as i32,
            (point.z / CHUNK_SIZE_F32).floor() as i32,
        )
    }

    /// Convert to world position (multiply by chunk size)
    pub fn to_world_pos(&self) -> Vector3<f32> {
        Vector3::new(
            (self.x * CHUNK_SIZE as i32) as f32,
            (self.y * CHUNK_SIZE as i32) as f32,
            (self.z * CHUNK_SIZE as i32) as f32,
        )
    }

    /// Create a new chunk position offset by the given amounts
    pub fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Calculate squared distance to another chunk position.
    ///
    /// Near-range helper: stays in `i32`, so it is only safe for
    /// positions within ~46k chunks of each other. Use
    /// [`ChunkPos::distance_to`] when the displacement is unbounded.
    pub fn distance_squared_to(&self, other: ChunkPos) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Euclidean distance to another chunk position, in chunk units.
    ///
    /// Distances for eviction are measured in chunk space, not voxel
    /// space. Deltas are widened to `f64` before squaring, so arbitrary
    /// key displacements never overflow.
    pub fn distance_to(&self, other: ChunkPos) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dz = f64::from(self.z) - f64::from(other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Position of a voxel in the world (world coordinates)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoxelPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl VoxelPos {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Get the chunk this voxel belongs to.
    ///
    /// Uses floor division, so negative world coordinates map to negative
    /// chunk coordinates (`-1` maps to chunk `-1`, not `0`).
    pub fn to_chunk_pos(&self) -> ChunkPos {
        let size = CHUNK_SIZE as i32;
        ChunkPos::new(
            self.x.div_euclid(size),
            self.y.div_euclid(size),
            self.z.div_euclid(size),
        )
    }

    /// Get local position within the containing chunk.
    ///
    /// Floor modulo keeps every component in `[0, CHUNK_SIZE)` even for
    /// negative world coordinates.
    pub fn to_local_pos(&self) -> LocalVoxelPos {
        let size = CHUNK_SIZE as i32;
        LocalVoxelPos::new(
            self.x.rem_euclid(size) as u32,
            self.y.rem_euclid(size) as u32,
            self.z.rem_euclid(size) as u32,
        )
    }

    /// Create VoxelPos from a continuous world position (glam Vec3)
    pub fn from_world_pos(pos: glam::Vec3) -> Self {
        Self {
            x: pos.x.floor() as i32,
            y: pos.y.floor() as i32,
            z: pos.z.floor() as i32,
        }
    }
}

/// Local voxel coordinates inside a chunk.
///
/// Every component is in `[0, CHUNK_SIZE)`. The core only produces values
/// in range (via [`VoxelPos::to_local_pos`] or chunk iteration); chunk
/// accessors still validate before indexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalVoxelPos {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl LocalVoxelPos {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_pos_for_origin() {
        assert_eq!(
            VoxelPos::new(0, 0, 0).to_chunk_pos(),
            ChunkPos::new(0, 0, 0)
        );
    }

    #[test]
    fn chunk_pos_uses_floor_division_for_negatives() {
        assert_eq!(
            VoxelPos::new(-1, -1, -1).to_chunk_pos(),
            ChunkPos::new(-1, -1, -1)
        );
        assert_eq!(
            VoxelPos::new(-16, 0, 0).to_chunk_pos(),
            ChunkPos::new(-1, 0, 0)
        );
        assert_eq!(
            VoxelPos::new(-17, 0, 0).to_chunk_pos(),
            ChunkPos::new(-2, 0, 0)
        );
    }

    #[test]
    fn local_pos_stays_in_range_for_negatives() {
        let local = VoxelPos::new(-1, -16, -17).to_local_pos();
        assert_eq!(local, LocalVoxelPos::new(15, 0, 15));
    }

    #[test]
    fn world_coordinate_round_trip() {
        let size = CHUNK_SIZE as i32;
        for w in [-33, -17, -16, -15, -1, 0, 1, 15, 16, 17, 100] {
            let pos = VoxelPos::new(w, w, w);
            let chunk = pos.to_chunk_pos();
            let local = pos.to_local_pos();
            assert_eq!(chunk.x * size + local.x as i32, w);
            assert_eq!(chunk.y * size + local.y as i32, w);
            assert_eq!(chunk.z * size + local.z as i32, w);
        }
    }

    #[test]
    fn distance_is_euclidean_in_chunk_space() {
        let a = ChunkPos::new(0, 0, 0);
        let b = ChunkPos::new(3, 4, 0);
        assert_eq!(a.distance_squared_to(b), 25);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_handles_widely_separated_chunks() {
        let origin = ChunkPos::new(0, 0, 0);
        let far = ChunkPos::new(46_341, 0, 0);
        assert!((far.distance_to(origin) - 46_341.0).abs() < 1e-6);

        let min = ChunkPos::new(i32::MIN, i32::MIN, i32::MIN);
        let max = ChunkPos::new(i32::MAX, i32::MAX, i32::MAX);
        let span = f64::from(u32::MAX);
        assert!((min.distance_to(max) - span * 3f64.sqrt()).abs() < 1.0);
    }

    #[test]
    fn from_world_point_floors_toward_negative_infinity() {
        let pos = ChunkPos::from_world_point(Point3::new(-0.5, 20.0, 16.0));
        assert_eq!(pos, ChunkPos::new(-1, 1, 1));
    }

    #[test]
    fn to_world_pos_scales_by_chunk_size() {
        let world = ChunkPos::new(-1, 2, 0).to_world_pos();
        assert_eq!(world, Vector3::new(-16.0, 32.0, 0.0));
    }

    #[test]
    fn voxel_pos_from_continuous_world_position_floors() {
        let pos = VoxelPos::from_world_pos(glam::Vec3::new(-0.5, 15.9, 16.0));
        assert_eq!(pos, VoxelPos::new(-1, 15, 16));
    }
}
