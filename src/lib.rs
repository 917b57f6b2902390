pub mod constants;
pub mod error;
pub mod world;

pub use error::{WorldError, WorldResult};
pub use world::{
    Chunk, ChunkEvictionPolicy, ChunkPos, ChunkStreamingController,
    DistanceBasedChunkEvictionPolicy, DistanceBasedChunkStreamingController,
    FlatWorldGenerator, FuzzyDistanceChunkEvictionPolicy,
    FuzzyDistanceChunkStreamingController, LocalVoxelPos, Voxel, VoxelPos,
    VoxelType, World, WorldEventListener, WorldGenerator, WorldView,
};
