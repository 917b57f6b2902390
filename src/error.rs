//! Crate-wide error types.

use crate::world::core::ChunkPos;

pub type WorldResult<T> = Result<T, WorldError>;

/// World access and configuration errors
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("local voxel coordinate out of bounds: ({x}, {y}, {z}) for chunk size {size}")]
    VoxelOutOfBounds { x: u32, y: u32, z: u32, size: u32 },

    #[error("world y coordinate {y} outside [{min_y}, {max_y})")]
    WorldBoundsExceeded { y: i32, min_y: i32, max_y: i32 },

    #[error("no chunk loaded at {position:?}")]
    ChunkNotLoaded { position: ChunkPos },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}
