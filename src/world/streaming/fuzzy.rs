use crate::error::{WorldError, WorldResult};
use crate::world::core::ChunkPos;
use crate::world::eviction::ChunkEvictionPolicy;
use crate::world::streaming::ChunkStreamingController;
use crate::world::world::World;

/// Streaming controller pairing eager cube loading with fuzzy eviction.
///
/// Loading is identical to the hard-threshold controller: the full
/// `(2 * load_radius + 1)³` cube around the focus is touched on every
/// update. Unloading goes through a smooth distance policy (typically
/// [`FuzzyDistanceChunkEvictionPolicy`]), so chunks fade out of the loaded
/// set gradually instead of popping at a hard boundary.
///
/// [`FuzzyDistanceChunkEvictionPolicy`]: crate::world::eviction::FuzzyDistanceChunkEvictionPolicy
pub struct FuzzyDistanceChunkStreamingController {
    load_radius: i32,
    eviction_policy: Box<dyn ChunkEvictionPolicy>,
}

impl FuzzyDistanceChunkStreamingController {
    /// Create a controller keeping `load_radius` chunks (per axis, in each
    /// direction) around the focus loaded.
    pub fn new(
        load_radius: i32,
        eviction_policy: Box<dyn ChunkEvictionPolicy>,
    ) -> WorldResult<Self> {
        if load_radius < 0 {
            return Err(WorldError::InvalidConfiguration {
                message: format!("load radius must be >= 0, got {load_radius}"),
            });
        }
        Ok(Self {
            load_radius,
            eviction_policy,
        })
    }
}

impl ChunkStreamingController for FuzzyDistanceChunkStreamingController {
    fn update(&self, world: &mut World, focus: ChunkPos) {
        for dx in -self.load_radius..=self.load_radius {
            for dy in -self.load_radius..=self.load_radius {
                for dz in -self.load_radius..=self.load_radius {
                    world.load_chunk(focus.offset(dx, dy, dz));
                }
            }
        }

        world.apply_eviction_policy(self.eviction_policy.as_ref(), focus);
    }
}
