//! Chunk lifecycle event notifications.

use crate::world::chunk::Chunk;
use crate::world::core::ChunkPos;

/// Listener for world lifecycle events.
///
/// Callbacks are invoked synchronously from world operations, in listener
/// registration order. Every callback defaults to a no-op.
///
/// Implementations MUST NOT mutate world state from inside a callback.
pub trait WorldEventListener: Send + Sync {
    /// Called when a chunk is generated for the first time (or regenerated
    /// after an unload).
    fn on_chunk_generated(&self, position: ChunkPos, chunk: &Chunk) {
        let _ = (position, chunk);
    }

    /// Called every time a chunk becomes available through a load,
    /// including loads of chunks that were already present.
    fn on_chunk_loaded(&self, position: ChunkPos, chunk: &Chunk) {
        let _ = (position, chunk);
    }

    /// Called exactly once when a loaded chunk is removed from the world.
    fn on_chunk_unloaded(&self, position: ChunkPos, chunk: &Chunk) {
        let _ = (position, chunk);
    }
}
