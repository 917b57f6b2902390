use crate::error::{WorldError, WorldResult};
use crate::world::core::ChunkPos;
use crate::world::eviction::ChunkEvictionPolicy;
use crate::world::world::WorldView;

/// Smooth-threshold eviction based on a fuzzy distance score.
///
/// Instead of a hard cutoff, each chunk gets a score in `[0, 1]` computed
/// with a hyperbolic tangent of its distance from the focus:
///
/// ```text
/// score = 0.5 * (tanh((d - center) / softness) + 1)
/// ```
///
/// A chunk is a candidate when its score reaches the eviction threshold.
/// The smooth transition avoids sudden unloading spikes as the focus
/// moves.
#[derive(Debug, Clone)]
pub struct FuzzyDistanceChunkEvictionPolicy {
    center_distance: f64,
    softness: f64,
    eviction_threshold: f64,
}

impl FuzzyDistanceChunkEvictionPolicy {
    /// Create a fuzzy eviction policy.
    ///
    /// `center_distance` is the distance (in chunk units) at which the
    /// score reaches 0.5; `softness` controls how gradual the transition
    /// is (smaller means closer to a hard threshold); chunks scoring at or
    /// above `eviction_threshold` become candidates.
    pub fn new(
        center_distance: f64,
        softness: f64,
        eviction_threshold: f64,
    ) -> WorldResult<Self> {
        if softness <= 0.0 {
            return Err(WorldError::InvalidConfiguration {
                message: format!("softness must be > 0, got {softness}"),
            });
        }
        if !(0.0..=1.0).contains(&eviction_threshold) {
            return Err(WorldError::InvalidConfiguration {
                message: format!(
                    "eviction threshold must be in [0, 1], got {eviction_threshold}"
                ),
            });
        }
        Ok(Self {
            center_distance,
            softness,
            eviction_threshold,
        })
    }

    fn eviction_score(&self, position: ChunkPos, focus: ChunkPos) -> f64 {
        let distance = position.distance_to(focus);
        0.5 * (((distance - self.center_distance) / self.softness).tanh() + 1.0)
    }
}

impl ChunkEvictionPolicy for FuzzyDistanceChunkEvictionPolicy {
    fn select_eviction_candidates(
        &self,
        world: &dyn WorldView,
        focus: ChunkPos,
    ) -> Vec<ChunkPos> {
        world
            .loaded_chunk_positions()
            .into_iter()
            .filter(|position| self.eviction_score(*position, focus) >= self.eviction_threshold)
            .collect()
    }
}
