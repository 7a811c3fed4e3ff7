use super::error::{PercolationError, Result};
use super::union_find::UnionFind;

/// Index of the virtual node attached to every open site in the first row.
const VIRTUAL_TOP: usize = 0;

/// An n-by-n grid of sites that are either blocked or open.
///
/// Sites are addressed by 1-indexed `(row, col)` pairs. Connectivity between open sites is
/// tracked incrementally in a [`UnionFind`] over `n*n + 2` elements: element `0` is a
/// virtual top node, elements `1..=n*n` are the sites in row-major order and element
/// `n*n + 1` is a virtual bottom node. The grid percolates exactly when the two virtual
/// nodes share a component.
#[derive(Debug, Clone)]
pub struct Percolation {
    /// Grid dimension, always at least 1.
    n: usize,
    /// Open state per site, indexed by `site_index - 1`.
    open: Vec<bool>,
    /// Number of `true` entries in `open`.
    open_count: usize,
    /// Connectivity of sites and virtual nodes.
    uf: UnionFind,
    /// Index of the virtual bottom node, `n*n + 1`.
    virtual_bottom: usize,
}

impl Percolation {
    /// Creates an `n`-by-`n` grid with every site blocked.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidArgument`] if `n` is zero.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::InvalidArgument(
                "grid size must be at least 1".to_string(),
            ));
        }
        let sites = n.checked_mul(n).ok_or_else(|| {
            PercolationError::InvalidArgument(format!("grid size {} is too large", n))
        })?;

        Ok(Self {
            n,
            open: vec![false; sites],
            open_count: 0,
            uf: UnionFind::new(sites + 2),
            virtual_bottom: sites + 1,
        })
    }

    /// Returns the grid dimension.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Opens the site at `(row, col)` if it is not open already.
    ///
    /// The site is joined with each open neighbour, with the virtual top node when it lies in
    /// the first row and with the virtual bottom node when it lies in the last row. Opening a
    /// site that is already open changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidArgument`] if `row` or `col` lies outside `[1, n]`.
    /// The grid is left untouched in that case.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let p = self.site_index(row, col)?;
        if self.open[p - 1] {
            return Ok(());
        }

        let n = self.n;
        if row > 1 {
            self.union_if_open(p, p - n);
        }
        if row < n {
            self.union_if_open(p, p + n);
        }
        if col > 1 {
            self.union_if_open(p, p - 1);
        }
        if col < n {
            self.union_if_open(p, p + 1);
        }

        if row == 1 {
            self.uf.union(p, VIRTUAL_TOP);
        }
        if row == n {
            self.uf.union(p, self.virtual_bottom);
        }

        self.open[p - 1] = true;
        self.open_count += 1;
        Ok(())
    }

    /// Returns `true` if the site at `(row, col)` is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let p = self.site_index(row, col)?;
        Ok(self.open[p - 1])
    }

    /// Returns `true` if the site at `(row, col)` is open and connected to the top row.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let p = self.site_index(row, col)?;
        Ok(self.open[p - 1] && self.uf.connected(VIRTUAL_TOP, p))
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Fraction of sites that are open, in `[0, 1]`.
    pub fn open_fraction(&self) -> f64 {
        self.open_count as f64 / self.open.len() as f64
    }

    /// Returns `true` if an open path connects the top row to the bottom row.
    pub fn percolates(&mut self) -> bool {
        self.uf.connected(VIRTUAL_TOP, self.virtual_bottom)
    }

    fn union_if_open(&mut self, p: usize, neighbor: usize) {
        if self.open[neighbor - 1] {
            self.uf.union(p, neighbor);
        }
    }

    fn site_index(&self, row: usize, col: usize) -> Result<usize> {
        if !(1..=self.n).contains(&row) || !(1..=self.n).contains(&col) {
            return Err(PercolationError::InvalidArgument(format!(
                "site ({}, {}) is outside the {}x{} grid",
                row, col, self.n, self.n
            )));
        }
        Ok(self.n * (row - 1) + col)
    }
}
