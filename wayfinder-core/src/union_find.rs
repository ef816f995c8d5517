//! Union-find (disjoint set forest) used by Kruskal's cycle check.
//!
//! Roots are found with an iterative two-pass walk: the first pass locates the
//! root, the second re-points every visited node directly at it. Unions attach
//! the lower-rank root beneath the higher-rank one; equal ranks resolve to the
//! smaller index as parent.

#[derive(Clone, Debug)]
pub(crate) struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSet {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    pub(crate) const fn components(&self) -> usize {
        self.components
    }

    pub(crate) fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }

        root
    }

    /// Merges the sets holding `left` and `right`.
    ///
    /// Returns `false` when both already share a root, meaning the edge
    /// between them would close a cycle.
    pub(crate) fn union(&mut self, left: usize, right: usize) -> bool {
        let left = self.find(left);
        let right = self.find(right);
        if left == right {
            return false;
        }

        let (parent, child) = choose_parent_child(left, right, self.rank[left], self.rank[right]);
        self.parent[child] = parent;
        if self.rank[left] == self.rank[right] {
            self.rank[parent] = self.rank[parent].saturating_add(1);
        }
        self.components -= 1;
        true
    }

    #[cfg(test)]
    fn parent_of(&self, node: usize) -> usize {
        self.parent[node]
    }

    #[cfg(test)]
    fn rank_of(&self, node: usize) -> u8 {
        self.rank[node]
    }
}

const fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: u8,
    right_rank: u8,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }
    if left_root <= right_root {
        (left_root, right_root)
    } else {
        (right_root, left_root)
    }
}
