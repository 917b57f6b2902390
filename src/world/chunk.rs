use crate::constants::chunk::{CHUNK_SIZE, VOXELS_PER_CHUNK};
use crate::error::{WorldError, WorldResult};
use crate::world::core::{ChunkPos, LocalVoxelPos, VoxelType};

/// A fixed-size cubic block of voxels, the unit of loading and unloading.
///
/// Storage is a flat array of `CHUNK_SIZE³` voxel types, default
/// initialized to [`VoxelType::Air`]. Every access validates local
/// coordinates; out-of-range access is a programmer error surfaced as
/// [`WorldError::VoxelOutOfBounds`] rather than silently clamped.
#[derive(Debug, Clone)]
pub struct Chunk {
    position: ChunkPos,
    voxels: Vec<VoxelType>,
}

impl Chunk {
    /// Create an empty (all-air) chunk at the given chunk position.
    pub fn new(position: ChunkPos) -> Self {
        Self {
            position,
            voxels: vec![VoxelType::Air; VOXELS_PER_CHUNK],
        }
    }

    /// Chunk-space position this chunk was created for.
    pub fn position(&self) -> ChunkPos {
        self.position
    }

    /// Get the voxel type at a local position.
    pub fn get(&self, pos: LocalVoxelPos) -> WorldResult<VoxelType> {
        Self::validate(pos)?;
        Ok(self.voxels[Self::index(pos)])
    }

    /// Set the voxel type at a local position.
    pub fn set(&mut self, pos: LocalVoxelPos, voxel_type: VoxelType) -> WorldResult<()> {
        Self::validate(pos)?;
        self.voxels[Self::index(pos)] = voxel_type;
        Ok(())
    }

    /// Overwrite every voxel in the chunk with the given type.
    pub fn fill(&mut self, voxel_type: VoxelType) {
        self.voxels.fill(voxel_type);
    }

    /// Visit all voxels in y-outer, z-middle, x-inner order.
    ///
    /// The iteration order matches the linear storage layout and is part
    /// of the contract: callers that rebuild chunk content based on visit
    /// order rely on it.
    pub fn for_each_voxel(&self, mut visitor: impl FnMut(LocalVoxelPos, VoxelType)) {
        for y in 0..CHUNK_SIZE {
            for z in 0..CHUNK_SIZE {
                for x in 0..CHUNK_SIZE {
                    let pos = LocalVoxelPos::new(x, y, z);
                    visitor(pos, self.voxels[Self::index(pos)]);
                }
            }
        }
    }

    // Flattens local coordinates with x fastest, z middle, y slowest.
    // Assumes coordinates were validated.
    fn index(pos: LocalVoxelPos) -> usize {
        (pos.x + pos.z * CHUNK_SIZE + pos.y * CHUNK_SIZE * CHUNK_SIZE) as usize
    }

    fn validate(pos: LocalVoxelPos) -> WorldResult<()> {
        if pos.x >= CHUNK_SIZE || pos.y >= CHUNK_SIZE || pos.z >= CHUNK_SIZE {
            return Err(WorldError::VoxelOutOfBounds {
                x: pos.x,
                y: pos.y,
                z: pos.z,
                size: CHUNK_SIZE,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_chunk_is_all_air() {
        let chunk = Chunk::new(ChunkPos::new(0, 0, 0));
        let mut air = 0;
        chunk.for_each_voxel(|_, voxel_type| {
            if voxel_type == VoxelType::Air {
                air += 1;
            }
        });
        assert_eq!(air, VOXELS_PER_CHUNK);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut chunk = Chunk::new(ChunkPos::new(1, 2, 3));
        let pos = LocalVoxelPos::new(3, 7, 11);
        chunk.set(pos, VoxelType::Solid).unwrap();
        assert_eq!(chunk.get(pos).unwrap(), VoxelType::Solid);
        assert_eq!(
            chunk.get(LocalVoxelPos::new(4, 7, 11)).unwrap(),
            VoxelType::Air
        );
    }

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0, 0));
        for pos in [
            LocalVoxelPos::new(CHUNK_SIZE, 0, 0),
            LocalVoxelPos::new(0, CHUNK_SIZE, 0),
            LocalVoxelPos::new(0, 0, CHUNK_SIZE),
        ] {
            assert!(matches!(
                chunk.get(pos),
                Err(WorldError::VoxelOutOfBounds { .. })
            ));
            assert!(matches!(
                chunk.set(pos, VoxelType::Solid),
                Err(WorldError::VoxelOutOfBounds { .. })
            ));
        }
    }

    #[test]
    fn linear_layout_is_x_fastest_then_z_then_y() {
        assert_eq!(Chunk::index(LocalVoxelPos::new(0, 0, 0)), 0);
        assert_eq!(Chunk::index(LocalVoxelPos::new(1, 0, 0)), 1);
        assert_eq!(
            Chunk::index(LocalVoxelPos::new(0, 0, 1)),
            CHUNK_SIZE as usize
        );
        assert_eq!(
            Chunk::index(LocalVoxelPos::new(0, 1, 0)),
            (CHUNK_SIZE * CHUNK_SIZE) as usize
        );
    }

    #[test]
    fn for_each_visits_in_storage_order() {
        let chunk = Chunk::new(ChunkPos::new(0, 0, 0));
        let mut expected = 0;
        chunk.for_each_voxel(|pos, _| {
            assert_eq!(Chunk::index(pos), expected);
            expected += 1;
        });
        assert_eq!(expected, VOXELS_PER_CHUNK);
    }

    #[test]
    fn fill_overwrites_every_voxel() {
        let mut chunk = Chunk::new(ChunkPos::new(0, 0, 0));
        chunk.fill(VoxelType::Solid);
        let mut solid = 0;
        chunk.for_each_voxel(|_, voxel_type| {
            if voxel_type == VoxelType::Solid {
                solid += 1;
            }
        });
        assert_eq!(solid, VOXELS_PER_CHUNK);
    }
}
