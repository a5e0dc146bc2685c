//! Top-level friends-of-friends driver.

use glam::Vec3;

use crate::error::FofError;
use crate::finder::Finder;
use crate::union_find::UnionFind;
use crate::util::Timed;

/// Parameters for [`link`].
#[derive(Debug, Clone)]
pub struct LinkParams {
    /// Side of the periodic box, in the same units as the positions.
    pub box_size: f32,
    /// Maximum separation at which two points are friends.
    pub linking_length: f32,
    /// Cells per axis of the internal search grid. The implied cell width
    /// `box_size / grid_res` must be at least the linking length.
    pub grid_res: usize,
    /// Groups smaller than this are reported as unassigned.
    pub min_group_size: usize,
}

impl LinkParams {
    fn validate(&self, n_points: usize) -> Result<(), FofError> {
        if !self.box_size.is_finite() || self.box_size <= 0.0 {
            return Err(FofError::BadBoxSize(self.box_size));
        }
        if !self.linking_length.is_finite() || self.linking_length <= 0.0 {
            return Err(FofError::BadLinkingLength(self.linking_length));
        }
        if self.grid_res == 0 {
            return Err(FofError::ZeroGridRes);
        }
        let cell = self.box_size / self.grid_res as f32;
        if self.linking_length > cell {
            return Err(FofError::LinkingLengthExceedsCell {
                linking_length: self.linking_length,
                cell,
            });
        }
        if n_points > i32::MAX as usize {
            return Err(FofError::TooManyPoints(n_points));
        }
        Ok(())
    }
}

/// Result of [`link`].
#[derive(Debug, Clone)]
pub struct LinkOutput {
    /// Group label per primary point, or `-1` when its group fell below
    /// the size cut. Labels are opaque and stable only within this run.
    pub groups: Vec<i32>,
    /// Group label per probe point: the label of some primary within the
    /// linking length of it, or `-1` when there is none.
    pub cen_groups: Vec<i32>,
    /// Number of groups that survived the size cut.
    pub n_groups: usize,
}

/// Friends-of-friends clustering over a periodic box.
///
/// Two primaries in `x` share a group iff a chain of primaries connects
/// them with every hop at most `linking_length` (distances are periodic,
/// minimum-image). Probe points in `cen` are classified by whichever
/// group owns a primary within the linking length of them.
///
/// Empty inputs are fine: no primaries means empty `groups`, no probes
/// means empty `cen_groups`.
pub fn link(x: &[Vec3], cen: &[Vec3], params: &LinkParams) -> Result<LinkOutput, FofError> {
    params.validate(x.len())?;
    let r = params.linking_length;

    let finder = {
        let _t = Timed::debug("fof index build");
        Finder::new(params.box_size, x, params.grid_res)
    };

    let mut uf = UnionFind::new(x.len() as u32);
    {
        let _t = Timed::debug("fof linking");
        let mut neighbors = Vec::new();
        for i in 0..x.len() as u32 {
            finder.find_into(x, x[i as usize], r, &mut neighbors);
            for &j in &neighbors {
                if i != j {
                    uf.union(i, j);
                }
            }
        }
    }

    let mut groups = vec![0i32; x.len()];
    let mut n_groups = 0;
    for i in 0..x.len() {
        let root = uf.find(i as u32);
        if (uf.group_size(root) as usize) < params.min_group_size {
            groups[i] = -1;
        } else {
            groups[i] = root as i32;
            if root as usize == i {
                n_groups += 1;
            }
        }
    }

    let mut cen_groups = vec![0i32; cen.len()];
    {
        let _t = Timed::debug("fof probe classification");
        for (c, &q) in cen.iter().enumerate() {
            cen_groups[c] = match finder.find_first(x, q, r) {
                Some(j) => groups[j as usize],
                None => -1,
            };
        }
    }

    log::debug!(
        "fof: {} primaries, {} probes, {} groups of size >= {}",
        x.len(),
        cen.len(),
        n_groups,
        params.min_group_size
    );

    Ok(LinkOutput {
        groups,
        cen_groups,
        n_groups,
    })
}
