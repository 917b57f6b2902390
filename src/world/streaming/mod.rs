//! Chunk streaming controllers.
//!
//! A streaming controller keeps a cubic region of chunks around a focus
//! position loaded and delegates unloading to a pluggable eviction policy.
//! `update` is meant to be driven repeatedly (once per tick or frame) and
//! is idempotent: repeating it with an unchanged focus neither generates
//! nor evicts anything further.

mod distance;
mod fuzzy;

pub use distance::DistanceBasedChunkStreamingController;
pub use fuzzy::FuzzyDistanceChunkStreamingController;

use cgmath::Point3;

use crate::world::core::ChunkPos;
use crate::world::world::World;

/// High-level controller responsible for chunk streaming decisions.
///
/// Implementations decide when chunks are loaded and unloaded around a
/// focus, not how they are generated, rendered, or stored. They must be
/// deterministic and hold no mutable state of their own.
pub trait ChunkStreamingController {
    /// Update the streamed world state around a focus chunk position.
    ///
    /// Safe to call repeatedly with an unchanged focus: already-loaded
    /// chunks are re-touched (re-emitting `on_chunk_loaded`) but never
    /// regenerated, and nothing further is evicted.
    fn update(&self, world: &mut World, focus: ChunkPos);

    /// Convenience for callers tracking a continuous position (player or
    /// camera): converts it to the containing focus chunk, then updates.
    fn update_from_world_pos(&self, world: &mut World, position: Point3<f32>) {
        self.update(world, ChunkPos::from_world_point(position));
    }
}
