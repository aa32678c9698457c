//! # Trefoil Points
//!
//! Streams the trefoil knot point mesh at a few slider densities and prints
//! what a renderer would receive.
//!
//! Run with: `cargo run --example trefoil_points`

use trefoil::SurfaceSampler;

fn main() {
    let sampler = SurfaceSampler::trefoil();

    for density in [0.4, 0.2, 0.1] {
        let mut stream = sampler.sample(density, 48.0).expect("positive density and scale");

        println!("density {density}:");
        for (i, point) in stream.by_ref().take(3).enumerate() {
            println!("  point[{i}] = ({:8.3}, {:8.3}, {:8.3})", point.x, point.y, point.z);
        }
        // The stream is lazy; draining the rest just counts the mesh.
        println!("  ... {} points total", 3 + stream.count());
    }
}
