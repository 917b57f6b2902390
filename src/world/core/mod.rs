//! Fundamental world value types.

pub mod position;
pub mod voxel;

pub use position::{ChunkPos, LocalVoxelPos, VoxelPos};
pub use voxel::{Voxel, VoxelType};
