//! Periodic radius queries over a binned grid.

use glam::Vec3;

use crate::grid::{BinnedGrid, CountingSortGrid};
use crate::particle::Particle;

/// Spatial index for radius queries in a periodic cubic box.
///
/// Construction wraps every position into `[0, L)`, scales it into cell
/// units, and bins an id-tagged copy into a `res`-per-axis counting-sort
/// grid, so candidate gathering is a walk over contiguous slices. Queries
/// then check the true separation of every candidate under the
/// minimum-image convention, in the caller's units: the returned indices
/// are exact neighbors, not candidates.
///
/// The query radius must not exceed the cell width `L / res`; wider radii
/// would need more than the 27-cell neighborhood a query visits.
pub struct Finder {
    grid: CountingSortGrid,
    res: usize,
    /// Cells per unit length.
    scale: f32,
    box_size: f32,
}

impl Finder {
    /// Index `x` for radius queries in a periodic box of side `box_size`,
    /// with `res` grid cells per axis.
    pub fn new(box_size: f32, x: &[Vec3], res: usize) -> Finder {
        let scale = res as f32 / box_size;
        let mut particles: Vec<Particle> = x
            .iter()
            .enumerate()
            .map(|(i, &xi)| Particle::new(i as u64, wrap_to_cells(xi, box_size, scale, res)))
            .collect();

        let mut grid = CountingSortGrid::default();
        grid.resize([res; 3]);
        grid.bin(&mut particles);

        Finder {
            grid,
            res,
            scale,
            box_size,
        }
    }

    /// Collect the indices of every indexed point within `r` of `q`,
    /// including `q` itself when it is one of the indexed points.
    ///
    /// `x` must be the slice the finder was built over. `out` is cleared
    /// first and reused.
    pub fn find_into(&self, x: &[Vec3], q: Vec3, r: f32, out: &mut Vec<u32>) {
        out.clear();
        self.visit(x, q, r, |id| {
            out.push(id);
            true
        });
    }

    /// First indexed point within `r` of `q`, if any.
    pub fn find_first(&self, x: &[Vec3], q: Vec3, r: f32) -> Option<u32> {
        let mut hit = None;
        self.visit(x, q, r, |id| {
            hit = Some(id);
            false
        });
        hit
    }

    /// Walk the 3x3x3 cell neighborhood of `q`'s home cell, wrapping cell
    /// indices around the box, and feed every true neighbor to `visit`.
    /// `visit` returning false stops the walk.
    fn visit<F: FnMut(u32) -> bool>(&self, x: &[Vec3], q: Vec3, r: f32, mut visit: F) {
        if x.is_empty() {
            return;
        }
        let r2 = r * r;
        let qs = wrap_to_cells(q, self.box_size, self.scale, self.res);
        let home = [qs.x as i64, qs.y as i64, qs.z as i64];

        // Wrapped neighbor indices per axis, deduplicated so a one- or
        // two-cell span is never visited twice.
        let mut axes = [[0usize; 3]; 3];
        let mut lens = [0usize; 3];
        for d in 0..3 {
            for off in -1..=1i64 {
                let c = (home[d] + off).rem_euclid(self.res as i64) as usize;
                if !axes[d][..lens[d]].contains(&c) {
                    axes[d][lens[d]] = c;
                    lens[d] += 1;
                }
            }
        }

        let (dy, dz) = (self.res, self.res * self.res);
        for &iz in &axes[2][..lens[2]] {
            for &iy in &axes[1][..lens[1]] {
                for &ix in &axes[0][..lens[0]] {
                    for p in self.grid.cell(ix + iy * dy + iz * dz) {
                        let d = q - x[p.id as usize];
                        if min_image_dist_sq(d, self.box_size) <= r2 && !visit(p.id as u32) {
                            return;
                        }
                    }
                }
            }
        }
    }
}

/// Wrap into `[0, L)` and scale into cell units, pinching the top edge so
/// rounding can never push the floored coordinate to `res`.
fn wrap_to_cells(x: Vec3, box_size: f32, scale: f32, res: usize) -> Vec3 {
    let wrapped = x - box_size * (x / box_size).floor();
    let top = res as f32 * (1.0 - f32::EPSILON);
    (wrapped * scale).clamp(Vec3::ZERO, Vec3::splat(top))
}

/// Squared minimum-image separation for a displacement in a cubic
/// periodic box.
#[inline]
fn min_image_dist_sq(d: Vec3, box_size: f32) -> f32 {
    let d = d - box_size * (d / box_size).round();
    d.length_squared()
}
