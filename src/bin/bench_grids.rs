// Binning throughput for every grid variant.
//
// Usage: bench_grids [--n N] [--span S] [--reps R]

use std::time::Instant;

use fof3::grid::{make_grid, GridKind};
use fof3::Particle;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn main() {
    env_logger::init();

    let mut n: usize = 1_000_000;
    let mut span: usize = 64;
    let mut reps: usize = 5;

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
            "--span" => {
                span = args
                    .next()
                    .expect("--span requires a value")
                    .parse()
                    .expect("invalid --span value");
            }
            "--reps" => {
                reps = args
                    .next()
                    .expect("--reps requires a value")
                    .parse()
                    .expect("invalid --reps value");
            }
            _ => {}
        }
    }

    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let base: Vec<Particle> = (0..n)
        .map(|i| {
            let x = Vec3::new(
                rng.gen_range(0.0..span as f32),
                rng.gen_range(0.0..span as f32),
                rng.gen_range(0.0..span as f32),
            );
            Particle::new(i as u64, x)
        })
        .collect();

    println!("{n} particles, {span}^3 cells, {reps} reps\n");

    for kind in GridKind::ALL {
        let start = Instant::now();
        for _ in 0..reps {
            let mut points = base.clone();
            let mut grid = make_grid(kind);
            grid.resize([span; 3]);
            grid.bin(&mut points);
        }
        let bin_ms = start.elapsed().as_secs_f64() * 1000.0 / reps as f64;

        let mut points = base.clone();
        let mut grid = make_grid(kind);
        grid.resize([span; 3]);
        grid.bin(&mut points);

        // Sweep every cell once so the list variants pay their get cost.
        let mut buf = Vec::new();
        let mut total = 0usize;
        let start = Instant::now();
        for iz in 0..span {
            for iy in 0..span {
                for ix in 0..span {
                    total += grid.get([ix, iy, iz], &mut buf).len();
                }
            }
        }
        let get_ms = start.elapsed().as_secs_f64() * 1000.0;
        assert_eq!(total, n);

        println!("  {kind:<12?} bin {bin_ms:8.1}ms/rep   get sweep {get_ms:8.1}ms");
    }
}
