use super::*;
use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn p(id: u64, x: f32, y: f32, z: f32) -> Particle {
    Particle::new(id, Vec3::new(x, y, z))
}

fn cell_of(pt: &Particle) -> [usize; 3] {
    [pt.x.x as usize, pt.x.y as usize, pt.x.z as usize]
}

/// Assert the universal contract properties against an independently
/// computed expectation: per-cell id membership, size/get agreement, and
/// count conservation.
fn check_cells(grid: &dyn BinnedGrid<'_>, source: &[Particle], span: [usize; 3]) {
    let mut buf = Vec::new();
    let mut total = 0;

    for iz in 0..span[2] {
        for iy in 0..span[1] {
            for ix in 0..span[0] {
                let idx = [ix, iy, iz];
                let got = grid.get(idx, &mut buf);
                assert_eq!(
                    grid.size(idx),
                    got.len(),
                    "size/get disagree at {idx:?}"
                );
                total += got.len();

                let mut got_ids: Vec<u64> = got.iter().map(|q| q.id).collect();
                got_ids.sort_unstable();
                let mut want_ids: Vec<u64> = source
                    .iter()
                    .filter(|q| cell_of(q) == idx)
                    .map(|q| q.id)
                    .collect();
                want_ids.sort_unstable();
                assert_eq!(got_ids, want_ids, "wrong members at {idx:?}");
            }
        }
    }

    assert_eq!(total, source.len(), "particles lost or duplicated");
}

/// The seven-point occupancy scenario: cells (0,0,0) and (1,1,1) hold two
/// particles, (1,2,0) holds three, everything else is empty.
fn small_grid_points() -> Vec<Particle> {
    vec![
        p(0, 0.5, 0.5, 0.5),
        p(1, 0.55, 0.25, 0.15),
        p(2, 1.5, 2.0, 0.0),
        p(30000, 1.2, 1.9, 1.1),
        p(3, 1.0, 2.0, 0.0),
        p(10, 1.0, 1.0, 1.0),
        p(9, 1.999, 2.999, 0.999),
    ]
}

#[test]
fn small_grid_occupancy() {
    let source = small_grid_points();
    for kind in GridKind::ALL {
        let mut points = source.clone();
        let mut grid = make_grid(kind);
        grid.resize([2, 3, 2]);
        grid.bin(&mut points);
        check_cells(&*grid, &source, [2, 3, 2]);
    }
}

#[test]
fn resize_up_and_down() {
    let spans: [[usize; 3]; 5] = [
        [0, 0, 0],
        [10, 10, 10],
        [1, 3, 2],
        [0, 0, 0],
        [10, 10, 10],
    ];
    let reps = 3;

    // For each span, `reps` particles per cell.
    let base: Vec<Vec<Particle>> = spans
        .iter()
        .map(|&span| {
            let mut pts = Vec::new();
            for _ in 0..reps {
                for iz in 0..span[2] {
                    for iy in 0..span[1] {
                        for ix in 0..span[0] {
                            let id = pts.len() as u64;
                            pts.push(p(id, ix as f32 + 0.5, iy as f32 + 0.5, iz as f32 + 0.5));
                        }
                    }
                }
            }
            pts
        })
        .collect();

    for kind in GridKind::ALL {
        let mut points = base.clone();
        let mut grid = make_grid(kind);
        for (span, pts) in spans.iter().zip(points.iter_mut()) {
            grid.resize(*span);
            grid.bin(pts);
            for iz in 0..span[2] {
                for iy in 0..span[1] {
                    for ix in 0..span[0] {
                        assert_eq!(
                            grid.size([ix, iy, iz]),
                            reps,
                            "{kind:?}, span {span:?}: cell ({ix},{iy},{iz})"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn repeated_resize_leaves_cells_empty() {
    let span = [3, 3, 3];
    let source = small_grid_points();
    for kind in GridKind::ALL {
        let mut points = source.clone();
        let mut grid = make_grid(kind);

        grid.resize(span);
        grid.resize(span);
        grid.bin(&mut points);
        check_cells(&*grid, &source, span);

        // A resize after binning empties every cell again.
        grid.resize(span);
        for iz in 0..span[2] {
            for iy in 0..span[1] {
                for ix in 0..span[0] {
                    assert_eq!(grid.size([ix, iy, iz]), 0, "{kind:?}");
                }
            }
        }
    }
}

#[test]
fn second_bin_replaces_first() {
    let span = [3, 2, 2];
    let first = vec![p(0, 0.1, 0.1, 0.1), p(1, 0.2, 0.3, 0.4), p(2, 2.5, 1.5, 1.5)];
    let second = vec![p(7, 1.5, 0.5, 0.5), p(8, 2.9, 1.9, 0.9)];

    for kind in GridKind::ALL {
        let mut a = first.clone();
        let mut b = second.clone();
        let mut grid = make_grid(kind);
        grid.resize(span);
        grid.bin(&mut a);
        grid.bin(&mut b);
        check_cells(&*grid, &second, span);
    }
}

#[test]
fn random_points_conserved() {
    let span = [7, 5, 6];
    let mut rng = ChaCha8Rng::seed_from_u64(0xF0F);
    let source: Vec<Particle> = (0..2000)
        .map(|i| {
            p(
                i,
                rng.gen_range(0.0..span[0] as f32),
                rng.gen_range(0.0..span[1] as f32),
                rng.gen_range(0.0..span[2] as f32),
            )
        })
        .collect();

    for kind in GridKind::ALL {
        let mut points = source.clone();
        let mut grid = make_grid(kind);
        grid.resize(span);
        grid.bin(&mut points);
        check_cells(&*grid, &source, span);
    }
}

#[test]
fn empty_input_bins_cleanly() {
    for kind in GridKind::ALL {
        let mut points: Vec<Particle> = Vec::new();
        let mut grid = make_grid(kind);
        grid.resize([2, 2, 2]);
        grid.bin(&mut points);
        let mut buf = Vec::new();
        for iz in 0..2 {
            for iy in 0..2 {
                for ix in 0..2 {
                    assert_eq!(grid.size([ix, iy, iz]), 0);
                    assert!(grid.get([ix, iy, iz], &mut buf).is_empty());
                }
            }
        }
    }
}

#[test]
fn cycle_sort_permutes_caller_slice_by_cell() {
    let span = [4, 3, 2];
    let layout = Layout::new(span);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let source: Vec<Particle> = (0..500)
        .map(|i| {
            p(
                i,
                rng.gen_range(0.0..span[0] as f32),
                rng.gen_range(0.0..span[1] as f32),
                rng.gen_range(0.0..span[2] as f32),
            )
        })
        .collect();

    let mut points = source.clone();
    let mut grid = CycleSortGrid::default();
    grid.resize(span);
    grid.bin(&mut points);
    check_cells(&grid, &source, span);
    drop(grid);

    // The caller's slice now holds the same ids, grouped by ascending
    // flat cell index.
    let mut got_ids: Vec<u64> = points.iter().map(|q| q.id).collect();
    got_ids.sort_unstable();
    let mut want_ids: Vec<u64> = source.iter().map(|q| q.id).collect();
    want_ids.sort_unstable();
    assert_eq!(got_ids, want_ids);

    let cells: Vec<usize> = points.iter().map(|q| layout.cell_of(q)).collect();
    assert!(cells.windows(2).all(|w| w[0] <= w[1]), "cells out of order");
}

#[test]
fn flat_list_get_is_stable_across_calls() {
    let source = small_grid_points();
    let mut points = source.clone();
    let mut grid = FlatListGrid::default();
    grid.resize([2, 3, 2]);
    grid.bin(&mut points);

    let mut buf1 = Vec::new();
    let mut buf2 = Vec::new();
    let first: Vec<Particle> = grid.get([1, 2, 0], &mut buf1).to_vec();
    let second: Vec<Particle> = grid.get([1, 2, 0], &mut buf2).to_vec();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}
