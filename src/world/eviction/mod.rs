//! Chunk eviction policies.
//!
//! A policy answers one question: given the current loaded set and a focus
//! position, which chunks are eligible for unloading? Selection is pure;
//! the canonical trigger for actual removal is
//! [`World::apply_eviction_policy`](crate::world::World::apply_eviction_policy).

mod distance;
mod fuzzy;

pub use distance::DistanceBasedChunkEvictionPolicy;
pub use fuzzy::FuzzyDistanceChunkEvictionPolicy;

use crate::world::core::ChunkPos;
use crate::world::world::{World, WorldView};

/// Strategy interface for chunk eviction.
///
/// Implementations decide which chunks should be unloaded based on a focus
/// position (e.g. the player or camera chunk). They must not generate or
/// load chunks, and must not mutate world state except through
/// [`World::unload_chunk`].
pub trait ChunkEvictionPolicy {
    /// Select the chunk positions eligible for eviction.
    ///
    /// Pure selection: no unloading, no events, no mutation. Deterministic
    /// given the same world snapshot and focus.
    fn select_eviction_candidates(
        &self,
        world: &dyn WorldView,
        focus: ChunkPos,
    ) -> Vec<ChunkPos>;

    /// Apply the policy: unload every selected candidate.
    ///
    /// Unload events are emitted by the world as a consequence of
    /// `unload_chunk`; this method emits nothing itself.
    fn evict(&self, world: &mut World, focus: ChunkPos) {
        for position in self.select_eviction_candidates(&*world, focus) {
            world.unload_chunk(position);
        }
    }
}
