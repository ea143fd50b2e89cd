//! Disjoint-set forest over dense `usize` ids.
//!
//! Parents and ranks live in two parallel vectors indexed by element id.
//! `find` is an iterative two-pass walk (locate root, then repoint every node
//! on the path at it), so deep chains never touch the call stack.
//!
//! ```text
//!   before find(3):  3 ─► 2 ─► 1 ─► 0 (root)
//!   after  find(3):  3 ─► 0,  2 ─► 0,  1 ─► 0
//! ```
//!
//! | Operation   | Complexity (amortized) |
//! |-------------|------------------------|
//! | `find`      | O(α(n))                |
//! | `union`     | O(α(n))                |
//! | `connected` | O(α(n))                |
//! | `count`     | O(1)                   |

use crate::error::InvariantError;

/// Union-find with path compression and union by rank.
///
/// # Example
///
/// ```
/// use lruheap::ds::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// uf.union(0, 1);
/// uf.union(2, 3);
/// assert_eq!(uf.count(), 3);
///
/// uf.union(0, 2);
/// assert!(uf.connected(1, 3));
/// assert_eq!(uf.count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
    count: usize,
}

impl UnionFind {
    /// `size` singleton sets, ids `0..size`.
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![1; size],
            count: size,
        }
    }

    /// Number of elements (not sets).
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Representative of the set holding `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= len()`.
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

    /// Merges the sets of `x` and `y`; `false` if they were already one set.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            },
        }
        self.count -= 1;
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Verifies the set count and that every parent chain ends at a root.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut roots = 0usize;
        for (node, &parent) in self.parent.iter().enumerate() {
            if parent >= self.parent.len() {
                return Err(InvariantError::new(format!(
                    "node {} points outside the forest",
                    node
                )));
            }
            if parent == node {
                roots += 1;
            } else if self.rank[parent] <= self.rank[node] && self.parent[parent] == parent {
                return Err(InvariantError::new(format!(
                    "root {} does not outrank child {}",
                    parent, node
                )));
            }
        }
        if roots != self.count {
            return Err(InvariantError::new(format!(
                "count is {} but forest has {} roots",
                self.count, roots
            )));
        }
        Ok(())
    }
}
