// End-to-end friends-of-friends on a clustered random box.
//
// Usage: bench_fof [--n-blobs B] [--n-noise N] [--box L] [--r R] [--grid G]
//
// Run with RUST_LOG=debug for per-phase timings.

use std::time::Instant;

use fof3::{link, LinkParams};
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

fn main() {
    env_logger::init();

    let mut n_blobs: usize = 2000;
    let mut n_noise: usize = 500_000;
    let mut box_size: f32 = 1000.0;
    let mut r: f32 = 2.0;
    let mut grid_res: usize = 500;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        let mut next = |name: &str| -> String {
            args.next().unwrap_or_else(|| panic!("{name} requires a value"))
        };
        match arg.as_str() {
            "--n-blobs" => n_blobs = next("--n-blobs").parse().expect("invalid --n-blobs"),
            "--n-noise" => n_noise = next("--n-noise").parse().expect("invalid --n-noise"),
            "--box" => box_size = next("--box").parse().expect("invalid --box"),
            "--r" => r = next("--r").parse().expect("invalid --r"),
            "--grid" => grid_res = next("--grid").parse().expect("invalid --grid"),
            _ => {}
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(31415);
    let mut x = Vec::new();
    for _ in 0..n_blobs {
        let c = Vec3::new(
            rng.gen_range(0.0..box_size),
            rng.gen_range(0.0..box_size),
            rng.gen_range(0.0..box_size),
        );
        for _ in 0..rng.gen_range(10..200) {
            let jitter = Vec3::new(
                rng.gen_range(-1.5 * r..1.5 * r),
                rng.gen_range(-1.5 * r..1.5 * r),
                rng.gen_range(-1.5 * r..1.5 * r),
            );
            x.push(c + jitter);
        }
    }
    for _ in 0..n_noise {
        x.push(Vec3::new(
            rng.gen_range(0.0..box_size),
            rng.gen_range(0.0..box_size),
            rng.gen_range(0.0..box_size),
        ));
    }

    // Every 100th point, nudged, doubles as a probe.
    let cen: Vec<Vec3> = x
        .iter()
        .step_by(100)
        .map(|&p| p + Vec3::splat(0.25 * r))
        .collect();

    let params = LinkParams {
        box_size,
        linking_length: r,
        grid_res,
        min_group_size: 10,
    };

    println!(
        "{} particles ({n_blobs} blobs + {n_noise} noise), {} probes, box {box_size}, r {r}, grid {grid_res}^3",
        x.len(),
        cen.len(),
    );

    let start = Instant::now();
    let out = link(&x, &cen, &params).expect("valid params");
    let total_ms = start.elapsed().as_secs_f64() * 1000.0;

    let assigned = out.groups.iter().filter(|&&g| g >= 0).count();
    let matched = out.cen_groups.iter().filter(|&&g| g >= 0).count();
    println!("  total: {total_ms:.1}ms");
    println!(
        "  {} groups >= {}, {assigned} particles assigned, {matched} probes matched",
        out.n_groups, params.min_group_size
    );

    let mut sizes: FxHashMap<i32, usize> = FxHashMap::default();
    for &g in &out.groups {
        if g >= 0 {
            *sizes.entry(g).or_insert(0) += 1;
        }
    }
    let mut sizes: Vec<usize> = sizes.into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    sizes.truncate(8);
    println!("  largest groups: {sizes:?}");
}
