use crate::error::{WorldError, WorldResult};
use crate::world::core::ChunkPos;
use crate::world::eviction::ChunkEvictionPolicy;
use crate::world::streaming::ChunkStreamingController;
use crate::world::world::World;

/// Streaming controller pairing eager cube loading with hard-threshold
/// eviction.
///
/// Every update loads the full `(2 * load_radius + 1)³` cube of chunks
/// around the focus, then applies the injected eviction policy. Pairing it
/// with [`DistanceBasedChunkEvictionPolicy`] gives classic hard-edged
/// world streaming.
///
/// [`DistanceBasedChunkEvictionPolicy`]: crate::world::eviction::DistanceBasedChunkEvictionPolicy
pub struct DistanceBasedChunkStreamingController {
    load_radius: i32,
    eviction_policy: Box<dyn ChunkEvictionPolicy>,
}

impl DistanceBasedChunkStreamingController {
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

impl ChunkStreamingController for DistanceBasedChunkStreamingController {
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
