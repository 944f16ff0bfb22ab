//! Headless drape run: hang a cloth from its top corners and print energy,
//! momentum and sag as it settles.
//!
//! Usage: cargo run --example drape_diagnostic -- [config.json] [resolution]

use cloth::{ClothConfig, ClothSimulation};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let config = match args.get(1) {
        Some(path) => ClothConfig::load_json(Path::new(path))?,
        None => ClothConfig::default(),
    };
    let resolution: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 20,
    };

    println!("=== DRAPE DIAGNOSTIC ===\n");
    println!("Resolution: {}x{}", resolution, resolution);
    println!("Config: {:?}\n", config);

    let mut sim = ClothSimulation::new(resolution, config)?;
    let dt = 0.001;

    for frame in 0..=3000 {
        if frame % 250 == 0 {
            let n = sim.resolution();
            let lowest = sim
                .positions()
                .iter()
                .map(|p| p.y)
                .fold(f64::INFINITY, f64::min);
            let center = sim.position(n / 2, n / 2);
            let momentum = sim.total_momentum();
            println!(
                "F{:5}: KE={:10.4}, lowest_y={:7.3}, center=({:6.3},{:6.3},{:6.3}), p=({:.3},{:.3},{:.3})",
                frame,
                sim.kinetic_energy(),
                lowest,
                center.x,
                center.y,
                center.z,
                momentum.x,
                momentum.y,
                momentum.z
            );
        }

        if let Err(err) = sim.advance(dt) {
            println!("\n!!! Step {} failed: {}", frame, err);
            return Err(err.into());
        }
    }

    println!("\nFinished {} steps, finite = {}", sim.frame, sim.is_finite());
    Ok(())
}
