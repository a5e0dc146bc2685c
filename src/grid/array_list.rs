//! Reference grid: one owned growable list per cell.

use crate::grid::{BinnedGrid, Layout};
use crate::particle::Particle;

/// The simplest correct binning: a `Vec<Particle>` per cell.
///
/// Appends are amortized O(1) and `get` is zero-copy, but every occupied
/// cell owns a separate heap allocation, which scatters a cell sweep
/// across memory. The other variants exist to beat this one; it stays as
/// the reference the contract tests trust.
#[derive(Default)]
pub struct ArrayListGrid {
    data: Vec<Vec<Particle>>,
    layout: Layout,
}

impl ArrayListGrid {
    // Cell buffers are dropped rather than truncated: a reset releases
    // per-cell capacity, only the outer table is kept at its high-water
    // length.
    fn reset(&mut self) {
        for cell in &mut self.data {
            *cell = Vec::new();
        }
    }
}

impl<'p> BinnedGrid<'p> for ArrayListGrid {
    fn resize(&mut self, span: [usize; 3]) {
        self.layout = Layout::new(span);
        self.data.resize_with(self.layout.n_cells(), Vec::new);
        self.reset();
    }

    fn bin(&mut self, p: &'p mut [Particle]) {
        self.reset();
        for &pi in p.iter() {
            let j = self.layout.cell_of(&pi);
            self.data[j].push(pi);
        }
    }

    fn size(&self, idx: [usize; 3]) -> usize {
        self.data[self.layout.flat(idx)].len()
    }

    fn get<'a>(&'a self, idx: [usize; 3], _out: &'a mut Vec<Particle>) -> &'a [Particle] {
        &self.data[self.layout.flat(idx)]
    }
}
