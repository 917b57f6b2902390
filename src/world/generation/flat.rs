use crate::world::chunk::Chunk;
use crate::world::core::{ChunkPos, VoxelType};
use crate::world::generation::WorldGenerator;

/// Simple flat world generator.
///
/// Chunks at or below the configured base height (in chunk coordinates)
/// are filled entirely solid; chunks above it stay empty. Deterministic
/// for any `(seed, position)` pair; the seed is accepted for contract
/// uniformity but does not influence the flat layer.
#[derive(Debug, Clone)]
pub struct FlatWorldGenerator {
    base_height: i32,
}

impl FlatWorldGenerator {
    pub fn new() -> Self {
        Self { base_height: 0 }
    }

    pub fn with_base_height(base_height: i32) -> Self {
        Self { base_height }
    }
}

impl Default for FlatWorldGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldGenerator for FlatWorldGenerator {
    fn generate_chunk(&self, _seed: u64, position: ChunkPos) -> Chunk {
        let mut chunk = Chunk::new(position);
        if position.y <= self.base_height {
            chunk.fill(VoxelType::Solid);
        }
        chunk
    }
}
