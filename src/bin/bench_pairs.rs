// Slab-walk pair finding vs the quadratic scan on one dense cell.
//
// Usage: bench_pairs [--n N] [--r R]

use std::time::Instant;

use fof3::pairs::{sort_particles, Pairer};
use fof3::Particle;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();

    let mut n: usize = 5000;
    let mut r: f32 = 0.05;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--n" => {
                n = args
                    .next()
                    .expect("--n requires a value")
                    .parse()
                    .expect("invalid --n value");
            }
            "--r" => {
                r = args
                    .next()
                    .expect("--r requires a value")
                    .parse()
                    .expect("invalid --r value");
            }
            _ => {}
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(6789);
    let mut p: Vec<Particle> = (0..n)
        .map(|i| {
            Particle::new(
                i as u64,
                Vec3::new(rng.gen(), rng.gen(), rng.gen()),
            )
        })
        .collect();

    let mut pairer = Pairer::default();

    let start = Instant::now();
    let (i1, _) = pairer.find_pairs_one_cell(&p, r, None);
    let quadratic_pairs = i1.len();
    let quadratic_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    sort_particles(&mut p, 0);
    let sort_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let (i1, _) = pairer.find_pairs_one_cell(&p, r, Some(0));
    let slab_pairs = i1.len();
    let slab_ms = start.elapsed().as_secs_f64() * 1000.0;

    assert_eq!(quadratic_pairs, slab_pairs);

    println!("{n} particles in one cell, r = {r}");
    println!("  quadratic scan: {quadratic_ms:8.1}ms  ({quadratic_pairs} pairs)");
    println!("  sort:           {sort_ms:8.1}ms");
    println!("  slab walk:      {slab_ms:8.1}ms  ({slab_pairs} pairs)");
}
