//! Pair enumeration within and across grid cells.
//!
//! Given cells of already-binned particles, find every index pair closer
//! than a linking length. When the cells are pre-sorted along one axis,
//! monotone slab cursors cut the scan from quadratic to
//! O(|p1| + |p2| + pairs).

use crate::particle::Particle;

/// Reusable pair-finding buffers.
///
/// Both finders report hits through the same pair of internal index
/// arrays, so the results of one call have to be consumed (or copied out)
/// before the next call on the same `Pairer`. A pair is a hit when its
/// squared separation is at most `r * r`.
#[derive(Default)]
pub struct Pairer {
    /// Stop after the first hit. Turns either finder into an existence
    /// check: at most one pair is reported.
    pub stop_early: bool,
    i1: Vec<usize>,
    i2: Vec<usize>,
}

impl Pairer {
    /// All unordered index pairs `(i, j)`, `i < j`, within `r` of each
    /// other inside one cell.
    ///
    /// `sort_dim: Some(d)` promises `p` is sorted ascending along axis
    /// `d` and enables the slab walk: a forward-only `high` cursor
    /// excludes every `j` whose axis-`d` offset from `i` already exceeds
    /// `r`.
    pub fn find_pairs_one_cell(
        &mut self,
        p: &[Particle],
        r: f32,
        sort_dim: Option<usize>,
    ) -> (&[usize], &[usize]) {
        let r2 = r * r;
        self.i1.clear();
        self.i2.clear();

        match sort_dim {
            None => {
                for i in 0..p.len().saturating_sub(1) {
                    for j in i + 1..p.len() {
                        if (p[i].x - p[j].x).length_squared() <= r2 {
                            self.i1.push(i);
                            self.i2.push(j);
                            if self.stop_early {
                                return (&self.i1, &self.i2);
                            }
                        }
                    }
                }
            }
            Some(dim) => {
                let mut high = 1;
                for i in 0..p.len().saturating_sub(1) {
                    while high < p.len() && p[high].x[dim] - p[i].x[dim] <= r {
                        high += 1;
                    }
                    for j in i + 1..high {
                        if (p[i].x - p[j].x).length_squared() <= r2 {
                            self.i1.push(i);
                            self.i2.push(j);
                            if self.stop_early {
                                return (&self.i1, &self.i2);
                            }
                        }
                    }
                }
            }
        }

        (&self.i1, &self.i2)
    }

    /// All ordered pairs `(i, j)` with `p1[i]` within `r` of `p2[j]`.
    ///
    /// With `sort_dim: Some(d)` both slices must be sorted ascending along
    /// axis `d`. A `low` and a `high` cursor then bound the slab of `p2`
    /// that can hold partners for the current `p1[i]`; because `p1` is
    /// sorted too, neither cursor ever rewinds.
    pub fn find_pairs_two_cells(
        &mut self,
        p1: &[Particle],
        p2: &[Particle],
        r: f32,
        sort_dim: Option<usize>,
    ) -> (&[usize], &[usize]) {
        let r2 = r * r;
        self.i1.clear();
        self.i2.clear();

        match sort_dim {
            None => {
                for i in 0..p1.len() {
                    for j in 0..p2.len() {
                        if (p1[i].x - p2[j].x).length_squared() <= r2 {
                            self.i1.push(i);
                            self.i2.push(j);
                            if self.stop_early {
                                return (&self.i1, &self.i2);
                            }
                        }
                    }
                }
            }
            Some(dim) => {
                let (mut low, mut high) = (0, 0);
                for i in 0..p1.len() {
                    while low < p2.len() && p1[i].x[dim] - p2[low].x[dim] > r {
                        low += 1;
                    }
                    while high < p2.len() && p2[high].x[dim] - p1[i].x[dim] <= r {
                        high += 1;
                    }
                    for j in low..high {
                        if (p1[i].x - p2[j].x).length_squared() <= r2 {
                            self.i1.push(i);
                            self.i2.push(j);
                            if self.stop_early {
                                return (&self.i1, &self.i2);
                            }
                        }
                    }
                }
            }
        }

        (&self.i1, &self.i2)
    }
}

/// Sort particles ascending along one axis. Destructive.
///
/// Lengths 0-3 are hand-specialized (the three-particle case is a single
/// decision tree); longer slices fall back to an unstable comparator
/// sort.
pub fn sort_particles(p: &mut [Particle], dim: usize) {
    match p.len() {
        0 | 1 => {}
        2 => {
            if p[0].x[dim] > p[1].x[dim] {
                p.swap(0, 1);
            }
        }
        3 => {
            let (max, mid, min) = sort3_index(p[0].x[dim], p[1].x[dim], p[2].x[dim], 0, 1, 2);
            let (a, b, c) = (p[min], p[mid], p[max]);
            p[0] = a;
            p[1] = b;
            p[2] = c;
        }
        _ => p.sort_unstable_by(|a, b| a.x[dim].total_cmp(&b.x[dim])),
    }
}

/// Indices of the max, mid, and min of three values.
fn sort3_index(x: f32, y: f32, z: f32, ix: usize, iy: usize, iz: usize) -> (usize, usize, usize) {
    if x > y {
        if x > z {
            if y > z {
                (ix, iy, iz)
            } else {
                (ix, iz, iy)
            }
        } else {
            (iz, ix, iy)
        }
    } else if y > z {
        if x > z {
            (iy, ix, iz)
        } else {
            (iy, iz, ix)
        }
    } else {
        (iz, iy, ix)
    }
}
