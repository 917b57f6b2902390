use std::sync::Arc;

use voxel_sandbox::{
    ChunkPos, ChunkStreamingController, FlatWorldGenerator,
    FuzzyDistanceChunkEvictionPolicy, FuzzyDistanceChunkStreamingController, World,
    WorldView,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Voxel Sandbox - World Streaming Demo");
    println!("====================================");

    let mut world = World::new(42, Arc::new(FlatWorldGenerator::new()));

    let eviction = FuzzyDistanceChunkEvictionPolicy::new(4.0, 1.5, 0.7)?;
    let controller = FuzzyDistanceChunkStreamingController::new(2, Box::new(eviction))?;

    // Walk the focus along the X axis, one chunk per tick, like a player
    // crossing the world.
    for step in 0..16 {
        let focus = ChunkPos::new(step, 0, 0);
        controller.update(&mut world, focus);
        println!(
            "tick {:2}: focus {:?}, {} chunks loaded",
            step,
            focus,
            world.chunk_count()
        );
    }

    let surface = world.get_voxel(0, 0, 0);
    println!("\nvoxel at origin: {:?}", surface);
    println!("world seed: {}", world.seed());

    Ok(())
}
