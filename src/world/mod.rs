//! Chunked voxel world with lazy generation and distance-driven streaming.
//!
//! # Architecture Overview
//!
//! - **Core**: Fundamental value types (positions, voxel types)
//! - **Chunk**: Fixed-size flat-array voxel storage
//! - **Generation**: Pluggable, deterministic chunk generators
//! - **Storage**: Crate-private chunk map owned by the world
//! - **Event**: Synchronous, ordered chunk lifecycle notifications
//! - **Eviction**: Pure candidate selection for unloading distant chunks
//! - **Streaming**: Keeps a cube of chunks around a focus loaded,
//!   delegating unloads to an eviction policy
//!
//! The [`World`] aggregate owns the storage exclusively; everything else
//! operates through its public contract. Read-only consumers (e.g. a
//! renderer) should be handed a [`WorldView`] rather than the aggregate.

pub mod chunk;
pub mod core;
pub mod event;
pub mod eviction;
pub mod generation;
pub mod storage;
pub mod streaming;
#[allow(clippy::module_inception)]
pub mod world;

pub use chunk::Chunk;
pub use core::{ChunkPos, LocalVoxelPos, Voxel, VoxelPos, VoxelType};
pub use event::WorldEventListener;
pub use eviction::{
    ChunkEvictionPolicy, DistanceBasedChunkEvictionPolicy,
    FuzzyDistanceChunkEvictionPolicy,
};
pub use generation::{FlatWorldGenerator, WorldGenerator};
pub use streaming::{
    ChunkStreamingController, DistanceBasedChunkStreamingController,
    FuzzyDistanceChunkStreamingController,
};
pub use world::{World, WorldView};
