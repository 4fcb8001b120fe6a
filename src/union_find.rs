//! Union-find over flattened cell indices with an edge-priority merge.
//!
//! Besides tracking which stones form one chain, the merge policy prefers
//! to keep a root that sits on one of the merging color's goal edges. The
//! root position is then a hint that the chain touches that edge. This hint
//! is exact for a merge of two fresh chains but is not re-checked after
//! longer merge sequences; win detection therefore never relies on it and
//! compares root sets instead (see [`Game::has_won`](crate::game::Game::has_won)).

use log::trace;

use crate::board::Color;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectivityTracker {
    size: usize,
    parent: Vec<usize>,
    tree_size: Vec<usize>,
}

impl ConnectivityTracker {
    /// One singleton tree per cell of a `size`x`size` board.
    pub fn new(size: usize) -> Self {
        let cells = size * size;
        Self {
            size,
            parent: (0..cells).collect(),
            tree_size: vec![1; cells],
        }
    }

    /// Number of cells tracked.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the tree containing `x`, pointing every node on the way
    /// directly at the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Root of `x` without path compression.
    pub fn root_of(&self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        root
    }

    #[inline]
    pub fn is_root(&self, x: usize) -> bool {
        self.parent[x] == x
    }

    /// Number of nodes in the tree rooted at `root`.
    pub fn subtree_size(&self, root: usize) -> usize {
        debug_assert!(self.is_root(root), "{root} is not a root");
        self.tree_size[root]
    }

    /// Merges the trees of `a` and `b`; `color` is the color of the stone
    /// that was just placed.
    ///
    /// A root on one of `color`'s goal edges is kept as parent when the other
    /// root is not on such an edge. Otherwise the larger tree absorbs the
    /// smaller, and on equal sizes `a`'s root wins.
    pub fn union(&mut self, a: usize, b: usize, color: Color) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return;
        }

        let (edge_a, edge_b) = match color {
            Color::Blue => (self.on_side_column(root_a), self.on_side_column(root_b)),
            Color::Red => (self.on_end_row(root_a), self.on_end_row(root_b)),
        };

        let (parent, child) = match (edge_a, edge_b) {
            (true, false) => (root_a, root_b),
            (false, true) => (root_b, root_a),
            _ if self.subtree_size(root_a) < self.subtree_size(root_b) => (root_b, root_a),
            _ => (root_a, root_b),
        };

        self.parent[child] = parent;
        self.tree_size[parent] += self.tree_size[child];
        debug_assert_eq!(self.root_of(b), self.root_of(a));
        trace!("union {a}+{b} ({color}): root {parent} absorbs {child}");
    }

    /// Copies `other` into `self`, reusing the existing allocations.
    pub fn restore_from(&mut self, other: &ConnectivityTracker) {
        self.size = other.size;
        self.parent.clone_from(&other.parent);
        self.tree_size.clone_from(&other.tree_size);
    }

    fn on_side_column(&self, index: usize) -> bool {
        let col = index % self.size;
        col == 0 || col == self.size - 1
    }

    fn on_end_row(&self, index: usize) -> bool {
        let row = index / self.size;
        row == 0 || row == self.size - 1
    }
}
