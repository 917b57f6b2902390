//! Crate-private chunk storage.
//!
//! The store owns the `ChunkPos -> Chunk` map exclusively; it never emits
//! events and never decides when to generate. Lifecycle decisions belong
//! to [`crate::world::World`].

use rustc_hash::FxHashMap;

use crate::world::chunk::Chunk;
use crate::world::core::ChunkPos;
use crate::world::generation::WorldGenerator;

/// Mutable chunk map backing a world instance.
#[derive(Default)]
pub(crate) struct ChunkStore {
    chunks: FxHashMap<ChunkPos, Chunk>,
}

impl ChunkStore {
    pub(crate) fn new() -> Self {
        Self {
            chunks: FxHashMap::default(),
        }
    }

    /// Read-only view of all loaded chunks.
    pub(crate) fn chunks(&self) -> &FxHashMap<ChunkPos, Chunk> {
        &self.chunks
    }

    /// Chunk at `position` if already loaded. Never generates.
    pub(crate) fn get_if_present(&self, position: ChunkPos) -> Option<&Chunk> {
        self.chunks.get(&position)
    }

    pub(crate) fn get_mut(&mut self, position: ChunkPos) -> Option<&mut Chunk> {
        self.chunks.get_mut(&position)
    }

    pub(crate) fn is_present(&self, position: ChunkPos) -> bool {
        self.chunks.contains_key(&position)
    }

    /// Insert a chunk, keyed by its own position. Overwrites any chunk
    /// already stored there.
    pub(crate) fn put(&mut self, chunk: Chunk) {
        self.chunks.insert(chunk.position(), chunk);
    }

    /// Remove and return the chunk at `position`. Pure removal: no events,
    /// no generation.
    pub(crate) fn remove(&mut self, position: ChunkPos) -> Option<Chunk> {
        self.chunks.remove(&position)
    }

    /// Get-or-generate. Returns the chunk at `position`, invoking the
    /// generator and inserting the result on a miss. Check and insert are
    /// one map operation, so a single caller never observes an
    /// intermediate missing state.
    pub(crate) fn ensure_present(
        &mut self,
        position: ChunkPos,
        seed: u64,
        generator: &dyn WorldGenerator,
    ) -> &Chunk {
        self.chunks
            .entry(position)
            .or_insert_with(|| generator.generate_chunk(seed, position))
    }

    pub(crate) fn len(&self) -> usize {
        self.chunks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generation::FlatWorldGenerator;

    #[test]
    fn put_makes_chunk_present() {
        let mut store = ChunkStore::new();
        let position = ChunkPos::new(0, 0, 0);

        store.put(Chunk::new(position));

        assert!(store.is_present(position));
        assert!(store.get_if_present(position).is_some());
    }

    #[test]
    fn remove_returns_the_stored_chunk() {
        let mut store = ChunkStore::new();
        let position = ChunkPos::new(1, 2, 3);
        store.put(Chunk::new(position));

        let removed = store.remove(position);

        assert_eq!(removed.map(|c| c.position()), Some(position));
        assert!(!store.is_present(position));
        assert!(store.get_if_present(position).is_none());
    }

    #[test]
    fn remove_on_missing_chunk_returns_none() {
        let mut store = ChunkStore::new();
        let position = ChunkPos::new(5, 5, 5);

        assert!(store.remove(position).is_none());
        assert!(!store.is_present(position));
    }

    #[test]
    fn remove_does_not_affect_other_chunks() {
        let mut store = ChunkStore::new();
        let first = ChunkPos::new(0, 0, 0);
        let second = ChunkPos::new(1, 0, 0);
        store.put(Chunk::new(first));
        store.put(Chunk::new(second));

        store.remove(first);

        assert!(!store.is_present(first));
        assert!(store.is_present(second));
    }

    #[test]
    fn ensure_present_generates_only_on_miss() {
        let mut store = ChunkStore::new();
        let generator = FlatWorldGenerator::new();
        let position = ChunkPos::new(0, 0, 0);

        store.ensure_present(position, 42, &generator);
        assert_eq!(store.len(), 1);

        // Second call must return the stored instance, not regenerate.
        let chunk = store.ensure_present(position, 42, &generator) as *const Chunk;
        let again = store.ensure_present(position, 42, &generator) as *const Chunk;
        assert_eq!(chunk, again);
        assert_eq!(store.len(), 1);
    }
}
