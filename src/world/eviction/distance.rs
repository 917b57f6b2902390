use crate::world::core::ChunkPos;
use crate::world::eviction::ChunkEvictionPolicy;
use crate::world::world::WorldView;

/// Hard-threshold eviction based on distance from a focus position.
///
/// A chunk is a candidate when its Euclidean distance from the focus,
/// measured in chunk space, is strictly greater than the configured
/// eviction distance.
#[derive(Debug, Clone)]
pub struct DistanceBasedChunkEvictionPolicy {
    eviction_distance: f64,
}

impl DistanceBasedChunkEvictionPolicy {
    /// Create a policy with the given eviction distance in chunk units.
    pub fn new(eviction_distance: f64) -> Self {
        Self { eviction_distance }
    }
}

impl ChunkEvictionPolicy for DistanceBasedChunkEvictionPolicy {
    fn select_eviction_candidates(
        &self,
        world: &dyn WorldView,
        focus: ChunkPos,
    ) -> Vec<ChunkPos> {
        world
            .loaded_chunk_positions()
            .into_iter()
            .filter(|position| position.distance_to(focus) > self.eviction_distance)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::generation::FlatWorldGenerator;
    use crate::world::world::World;
    use std::sync::Arc;

    #[test]
    fn selects_only_chunks_beyond_the_threshold() {
        let mut world = World::new(42, Arc::new(FlatWorldGenerator::new()));
        let focus = ChunkPos::new(0, 0, 0);

        let near = ChunkPos::new(1, 0, 0);
        let far = ChunkPos::new(5, 0, 0);
        world.load_chunk(near);
        world.load_chunk(far);

        let policy = DistanceBasedChunkEvictionPolicy::new(2.0);
        let candidates = policy.select_eviction_candidates(&world, focus);

        assert_eq!(candidates, vec![far]);
    }

    #[test]
    fn chunk_exactly_at_threshold_is_kept() {
        let mut world = World::new(42, Arc::new(FlatWorldGenerator::new()));
        let focus = ChunkPos::new(0, 0, 0);
        let boundary = ChunkPos::new(2, 0, 0);
        world.load_chunk(boundary);

        let policy = DistanceBasedChunkEvictionPolicy::new(2.0);
        let candidates = policy.select_eviction_candidates(&world, focus);

        assert!(candidates.is_empty());
    }

    #[test]
    fn selection_does_not_mutate_the_world() {
        let mut world = World::new(42, Arc::new(FlatWorldGenerator::new()));
        world.load_chunk(ChunkPos::new(9, 0, 0));

        let policy = DistanceBasedChunkEvictionPolicy::new(1.0);
        policy.select_eviction_candidates(&world, ChunkPos::new(0, 0, 0));

        assert!(world.get_chunk_if_present(ChunkPos::new(9, 0, 0)).is_some());
    }
}
