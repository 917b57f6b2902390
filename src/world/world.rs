use std::sync::Arc;

use crate::constants::world_bounds;
use crate::error::{WorldError, WorldResult};
use crate::world::chunk::Chunk;
use crate::world::core::{ChunkPos, VoxelPos, VoxelType};
use crate::world::event::WorldEventListener;
use crate::world::eviction::ChunkEvictionPolicy;
use crate::world::generation::WorldGenerator;
use crate::world::storage::ChunkStore;

/// Read-only view of a voxel world.
///
/// Exposes the pure query surface only: none of these methods generate,
/// load, mutate, or emit events, so the view can be handed to consumers
/// (e.g. a render subsystem) that must never touch the mutation surface.
pub trait WorldView {
    /// Chunk at `position` if loaded. Never generates.
    fn get_chunk(&self, position: ChunkPos) -> Option<&Chunk>;

    /// Positions of all currently loaded chunks.
    fn loaded_chunk_positions(&self) -> Vec<ChunkPos>;

    fn is_chunk_loaded(&self, position: ChunkPos) -> bool;

    fn chunk_count(&self) -> usize;

    /// Voxel type at world coordinates.
    ///
    /// Out-of-vertical-bounds coordinates and missing chunks are not
    /// errors; both fall back to [`VoxelType::Air`].
    fn get_voxel(&self, x: i32, y: i32, z: i32) -> VoxelType;
}

/// A voxel world composed of lazily generated chunks.
///
/// The world is the aggregate root: it owns the chunk store exclusively,
/// holds a shared reference to its generator, and dispatches lifecycle
/// events to registered listeners in registration order. Per chunk key the
/// implicit state machine is `Absent -> Present -> Absent -> ...`;
/// generation happens only on the `Absent -> Present` transition.
///
/// All operations run on a single logical thread: every public call runs
/// to completion before the next begins, and listener fan-out is
/// synchronous and sequential.
pub struct World {
    seed: u64,
    generator: Arc<dyn WorldGenerator>,
    state: ChunkStore,
    listeners: Vec<Arc<dyn WorldEventListener>>,
}

impl World {
    /// Lowest voxel Y (inclusive) addressable through the world surface.
    pub const MIN_Y: i32 = world_bounds::MIN_Y;

    /// Upper voxel Y limit. `set_voxel` rejects `y >= MAX_Y`.
    pub const MAX_Y: i32 = world_bounds::MAX_Y;

    /// Create an empty world with the given seed and generator.
    pub fn new(seed: u64, generator: Arc<dyn WorldGenerator>) -> Self {
        Self {
            seed,
            generator,
            state: ChunkStore::new(),
            listeners: Vec::new(),
        }
    }

    /// World seed, fixed for the lifetime of the instance.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Register a lifecycle listener. Listeners are notified in
    /// registration order.
    pub fn add_event_listener(&mut self, listener: Arc<dyn WorldEventListener>) {
        self.listeners.push(listener);
    }

    /// Iterate over all loaded chunks. Read-only snapshot surface for
    /// external consumers.
    pub fn chunks(&self) -> impl Iterator<Item = (ChunkPos, &Chunk)> {
        self.state.chunks().iter().map(|(pos, chunk)| (*pos, chunk))
    }

    /// Chunk at `position` if loaded. Never generates.
    pub fn get_chunk_if_present(&self, position: ChunkPos) -> Option<&Chunk> {
        self.state.get_if_present(position)
    }

    /// Load the chunk at `position`, generating it on first access.
    ///
    /// Emits `on_chunk_generated` then `on_chunk_loaded` (in that order)
    /// when the chunk was absent; emits only `on_chunk_loaded` when it was
    /// already present.
    pub fn load_chunk(&mut self, position: ChunkPos) -> &Chunk {
        let first_load = !self.state.is_present(position);
        let chunk = self
            .state
            .ensure_present(position, self.seed, self.generator.as_ref());

        if first_load {
            log::debug!("generated chunk at {:?}", position);
            for listener in &self.listeners {
                listener.on_chunk_generated(position, chunk);
            }
        }
        log::trace!("loaded chunk at {:?}", position);
        for listener in &self.listeners {
            listener.on_chunk_loaded(position, chunk);
        }
        chunk
    }

    /// Remove the chunk at `position`, returning it if it was loaded.
    ///
    /// Emits `on_chunk_unloaded` exactly once per actual removal; a miss
    /// is a silent no-op.
    pub fn unload_chunk(&mut self, position: ChunkPos) -> Option<Chunk> {
        let chunk = self.state.remove(position)?;
        log::debug!("unloaded chunk at {:?}", position);
        for listener in &self.listeners {
            listener.on_chunk_unloaded(position, &chunk);
        }
        Some(chunk)
    }

    /// Set the voxel at world coordinates, loading (and possibly
    /// generating) the containing chunk first.
    pub fn set_voxel(
        &mut self,
        x: i32,
        y: i32,
        z: i32,
        voxel_type: VoxelType,
    ) -> WorldResult<()> {
        if y < Self::MIN_Y || y >= Self::MAX_Y {
            return Err(WorldError::WorldBoundsExceeded {
                y,
                min_y: Self::MIN_Y,
                max_y: Self::MAX_Y,
            });
        }

        let voxel = VoxelPos::new(x, y, z);
        let chunk_pos = voxel.to_chunk_pos();
        let local = voxel.to_local_pos();

        self.load_chunk(chunk_pos);
        match self.state.get_mut(chunk_pos) {
            Some(chunk) => chunk.set(local, voxel_type),
            None => Err(WorldError::ChunkNotLoaded { position: chunk_pos }),
        }
    }

    /// Run a pure candidate selection, then unload every selected chunk.
    ///
    /// Returns the number of chunks actually removed; candidates that were
    /// not loaded are not counted.
    pub fn apply_eviction_policy(
        &mut self,
        policy: &dyn ChunkEvictionPolicy,
        focus: ChunkPos,
    ) -> usize {
        let candidates = policy.select_eviction_candidates(&*self, focus);
        let mut unloaded = 0;
        for position in candidates {
            if self.unload_chunk(position).is_some() {
                unloaded += 1;
            }
        }
        if unloaded > 0 {
            log::debug!("evicted {} chunks around {:?}", unloaded, focus);
        }
        unloaded
    }
}

impl WorldView for World {
    fn get_chunk(&self, position: ChunkPos) -> Option<&Chunk> {
        self.state.get_if_present(position)
    }

    fn loaded_chunk_positions(&self) -> Vec<ChunkPos> {
        self.state.chunks().keys().copied().collect()
    }

    fn is_chunk_loaded(&self, position: ChunkPos) -> bool {
        self.state.is_present(position)
    }

    fn chunk_count(&self) -> usize {
        self.state.len()
    }

    fn get_voxel(&self, x: i32, y: i32, z: i32) -> VoxelType {
        if y < Self::MIN_Y || y > Self::MAX_Y {
            return VoxelType::Air;
        }
        let voxel = VoxelPos::new(x, y, z);
        match self.state.get_if_present(voxel.to_chunk_pos()) {
            Some(chunk) => chunk.get(voxel.to_local_pos()).unwrap_or(VoxelType::Air),
            None => VoxelType::Air,
        }
    }
}
