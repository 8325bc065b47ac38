//! Quick benchmark for profiling the falling sand engine
//!
//! Run with: cargo run --release --example bench -p sandsim

use sandsim::{Material, PointerInput, SimConfig, Simulation};
use std::time::Instant;

fn main() {
    const FRAMES: usize = 600; // 10 seconds at 60 FPS
    const SEED: u64 = 2024;

    let config = SimConfig::default();
    println!(
        "Setting up simulation {}x{} with {} passes per tick",
        config.width, config.height, config.passes
    );

    let mut sim = match Simulation::with_seed(config, SEED) {
        Ok(sim) => sim,
        Err(err) => {
            eprintln!("invalid configuration: {err}");
            std::process::exit(1);
        }
    };

    // Warm up
    println!("Warming up (60 frames)...");
    for _ in 0..60 {
        sim.step();
    }

    println!("Running {} frames...", FRAMES);
    let start = Instant::now();
    let mut moves = 0;

    for frame in 0..FRAMES {
        // Alternate a sand and a water stream like a user sweeping the mouse
        let x = 40 + ((frame * 3) % 240) as i32;
        let mut input = PointerInput::pressed(x, 10);
        input.water = frame % 4 < 2;

        moves += sim.tick(&input).moves;

        if frame % 120 == 0 {
            let counts = sim.grid().counts();
            println!(
                "  Frame {}: {} sand, {} water",
                frame, counts.sand, counts.water
            );
        }
    }

    let elapsed = start.elapsed();
    let avg_frame_time = elapsed.as_secs_f64() / FRAMES as f64;

    println!("\n=== Results ===");
    println!("Total time: {:.2?}", elapsed);
    println!("Avg frame: {:.3} ms ({:.1} FPS)", avg_frame_time * 1000.0, 1.0 / avg_frame_time);
    println!("Moves per frame: {:.0}", moves as f64 / FRAMES as f64);
    println!("Final water cells: {}", sim.grid().count(Material::Water));
}
