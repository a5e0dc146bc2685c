//! Disjoint-set forest used to merge linked particles into groups.

/// Union-find over `0..n` with path compression and union by size.
///
/// `find` runs two iterative passes (root walk, then compression walk), so
/// pathological parent chains never recurse. Sizes are only authoritative
/// at roots.
pub struct UnionFind {
    parent: Vec<u32>,
    size: Vec<u32>,
    n_groups: u32,
}

impl UnionFind {
    /// A partition of `0..n` into n singleton groups.
    pub fn new(n: u32) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            n_groups: n,
        }
    }

    /// Representative of `i`'s group.
    pub fn find(&mut self, i: u32) -> u32 {
        let mut j = i;
        while self.parent[j as usize] != j {
            j = self.parent[j as usize];
        }
        let root = j;

        let mut j = i;
        while self.parent[j as usize] != j {
            let next = self.parent[j as usize];
            self.parent[j as usize] = root;
            j = next;
        }

        root
    }

    /// Merge the groups containing `i` and `j`.
    ///
    /// The strictly smaller tree is attached under the larger; ties keep
    /// `j`'s root under `i`'s.
    pub fn union(&mut self, i: u32, j: u32) {
        let root_i = self.find(i);
        let root_j = self.find(j);
        if root_i == root_j {
            return;
        }

        let size_i = self.size[root_i as usize];
        let size_j = self.size[root_j as usize];
        if size_i < size_j {
            self.parent[root_i as usize] = root_j;
            self.size[root_j as usize] = size_i + size_j;
        } else {
            self.parent[root_j as usize] = root_i;
            self.size[root_i as usize] = size_i + size_j;
        }
        self.n_groups -= 1;
    }

    /// Size of the group rooted at `root`. Only meaningful when `root` is
    /// a value returned by [`find`](Self::find).
    #[inline]
    pub fn group_size(&self, root: u32) -> u32 {
        self.size[root as usize]
    }

    /// Number of groups in the partition.
    #[inline]
    pub fn n_groups(&self) -> u32 {
        self.n_groups
    }

    /// Number of elements in the partition.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn singletons_are_their_own_roots() {
        let mut uf = UnionFind::new(5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
            assert_eq!(uf.group_size(i), 1);
        }
        assert_eq!(uf.n_groups(), 5);
        assert_eq!(uf.len(), 5);
    }

    #[test]
    fn chain_unions_share_a_root() {
        let mut uf = UnionFind::new(6);
        uf.union(0, 1);
        uf.union(1, 2);
        uf.union(4, 5);

        assert_eq!(uf.find(0), uf.find(2));
        assert_eq!(uf.find(1), uf.find(2));
        assert_ne!(uf.find(0), uf.find(4));
        assert_ne!(uf.find(0), uf.find(3));

        let root = uf.find(1);
        assert_eq!(uf.group_size(root), 3);
        assert_eq!(uf.n_groups(), 3);
    }

    #[test]
    fn redundant_unions_change_nothing() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(0, 1);
        uf.union(1, 0);
        assert_eq!(uf.n_groups(), 3);
        let root = uf.find(0);
        assert_eq!(uf.group_size(root), 2);
    }

    #[test]
    fn matches_bruteforce_components() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let n = 64usize;
        let edges: Vec<(u32, u32)> = (0..80)
            .map(|_| (rng.gen_range(0..n as u32), rng.gen_range(0..n as u32)))
            .collect();

        let mut uf = UnionFind::new(n as u32);
        for &(i, j) in &edges {
            uf.union(i, j);
        }

        // Reference labeling by depth-first flood fill.
        let mut adj = vec![Vec::new(); n];
        for &(i, j) in &edges {
            adj[i as usize].push(j as usize);
            adj[j as usize].push(i as usize);
        }
        let mut label = vec![usize::MAX; n];
        let mut n_components = 0;
        for start in 0..n {
            if label[start] != usize::MAX {
                continue;
            }
            let mut stack = vec![start];
            while let Some(v) = stack.pop() {
                if label[v] != usize::MAX {
                    continue;
                }
                label[v] = start;
                stack.extend(adj[v].iter().copied());
            }
            n_components += 1;
        }

        assert_eq!(uf.n_groups() as usize, n_components);
        for i in 0..n as u32 {
            let component_size = label.iter().filter(|&&l| l == label[i as usize]).count();
            let root = uf.find(i);
            assert_eq!(uf.group_size(root) as usize, component_size);
            for j in 0..n as u32 {
                let same_uf = uf.find(i) == uf.find(j);
                let same_ref = label[i as usize] == label[j as usize];
                assert_eq!(same_uf, same_ref, "points {i} and {j} disagree");
            }
        }
    }
}
