//! # Emitter Loop
//!
//! Drives a fountain emitter through the per-frame cycle a canvas host would
//! run, printing the live-particle counter an on-screen overlay would show.
//!
//! Run with: `cargo run --example emitter_loop`

use trefoil::{EmitterConfig, ParticleSystem, Vec2};

fn main() {
    let config = EmitterConfig::fountain().seed(2024);
    let mut particles = ParticleSystem::new(config).expect("preset config is valid");
    particles.set_viewport(Vec2::new(640.0, 480.0));

    for frame in 1..=240u32 {
        particles.spawn();
        particles.step();

        if frame % 30 == 0 {
            let mut lowest = f32::MIN;
            particles.for_each_live(|view| lowest = lowest.max(view.position.y));
            let color = particles.config().color_at(1.0);
            println!(
                "frame {frame:3}: {:4} live, lowest y {:7.1}, end color ({:.1}, {:.1}, {:.1})",
                particles.live_count(),
                lowest,
                color.x,
                color.y,
                color.z,
            );
        }
    }
}
