// Voxel Sandbox constants - single source of truth.
//
// Every chunk-size or world-bound value used in the crate comes from here.
// Do not define these constants anywhere else in the codebase.

/// Chunk dimension constants
pub mod chunk {
    /// Edge length of a chunk in voxels. Chunks are always cubic.
    pub const CHUNK_SIZE: u32 = 16;
    pub const CHUNK_SIZE_F32: f32 = 16.0;

    /// Total voxel count of one chunk.
    pub const VOXELS_PER_CHUNK: usize =
        (CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE) as usize;
}

/// Vertical world limits, in world-space voxel coordinates.
pub mod world_bounds {
    /// Lowest voxel Y (inclusive) addressable through the world surface.
    pub const MIN_Y: i32 = 0;

    /// Upper voxel Y limit. Writes above `MAX_Y - 1` are rejected.
    pub const MAX_Y: i32 = 256;
}
