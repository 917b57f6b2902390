//! Pluggable, deterministic chunk generation.

mod flat;

pub use flat::FlatWorldGenerator;

use crate::world::chunk::Chunk;
use crate::world::core::ChunkPos;

/// A generator capable of producing chunks for a voxel world.
///
/// Implementations must be pure functions of `(seed, position)`: given the
/// same inputs they must always produce bit-identical chunk content. They
/// must not retain references to generated chunks and must not read or
/// write any world state.
pub trait WorldGenerator: Send + Sync {
    /// Generate the chunk at `position` for the given world seed.
    fn generate_chunk(&self, seed: u64, position: ChunkPos) -> Chunk;
}
