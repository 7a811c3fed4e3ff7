/// A disjoint-set forest over the elements `0..len`.
///
/// Elements are plain indices, so the forest is two flat vectors: a parent pointer and a
/// component size per element. Unions attach the smaller tree beneath the root of the
/// larger one, and `find` halves the path it walks, which together keep both operations
/// amortized near-constant.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent pointer of each element; roots point at themselves.
    parent: Vec<usize>,
    /// Size of the component rooted at each element. Only meaningful for roots.
    size: Vec<usize>,
}

impl UnionFind {
    /// Creates a forest of `len` singleton components.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.parent.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components, counted as the number of roots.
    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        (0..self.parent.len())
            .filter(|&i| self.parent[i] == i)
            .count()
    }

    /// Returns the root of the component containing `p`.
    ///
    /// Every visited element is re-pointed at its grandparent on the way up.
    ///
    /// # Panics
    ///
    /// Panics if `p` is not an element of the forest. Callers own the index mapping and
    /// validate it first.
    pub fn find(&mut self, mut p: usize) -> usize {
        while self.parent[p] != p {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }

    /// Returns `true` if `p` and `q` belong to the same component.
    pub fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merges the components containing `p` and `q`.
    ///
    /// # Return
    ///
    /// Returns `true` if two distinct components were merged, `false` if `p` and `q`
    /// were already connected.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return false;
        }

        let (small, large) = if self.size[root_p] < self.size[root_q] {
            (root_p, root_q)
        } else {
            (root_q, root_p)
        };
        self.parent[small] = large;
        self.size[large] += self.size[small];
        true
    }

    #[cfg(test)]
    pub(crate) fn component_size(&mut self, p: usize) -> usize {
        let root = self.find(p);
        self.size[root]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_forest_has_only_singletons() {
        let mut uf = UnionFind::new(5);
        assert_eq!(uf.len(), 5);
        assert_eq!(uf.count(), 5);
        for i in 0..5 {
            assert_eq!(uf.find(i), i);
            assert_eq!(uf.component_size(i), 1);
        }
    }

    #[test]
    fn empty_forest_is_empty() {
        let uf = UnionFind::new(0);
        assert!(uf.is_empty());
        assert_eq!(uf.count(), 0);
    }

    #[test]
    fn union_merges_components_and_updates_count() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert_eq!(uf.count(), 4);
        assert!(uf.connected(0, 1));
        assert!(!uf.connected(1, 2));

        assert!(uf.union(1, 3));
        assert_eq!(uf.count(), 3);
        assert!(uf.connected(0, 2));
        assert_eq!(uf.component_size(3), 4);
    }

    #[test]
    fn union_of_connected_elements_is_a_no_op() {
        let mut uf = UnionFind::new(3);
        uf.union(0, 1);
        assert!(!uf.union(1, 0));
        assert_eq!(uf.count(), 2);
        assert_eq!(uf.component_size(0), 2);
    }

    #[test]
    fn smaller_tree_is_attached_under_larger_root() {
        let mut uf = UnionFind::new(4);
        uf.union(0, 1);
        uf.union(0, 2);
        let big_root = uf.find(0);

        uf.union(3, 0);
        assert_eq!(uf.find(3), big_root);
    }

    #[test]
    fn long_chain_is_compressed_by_find() {
        let mut uf = UnionFind::new(64);
        for i in 1..64 {
            uf.union(i - 1, i);
        }
        let root = uf.find(63);
        for i in 0..64 {
            assert_eq!(uf.find(i), root);
        }
        assert_eq!(uf.count(), 1);
        assert_eq!(uf.component_size(10), 64);
    }
}
