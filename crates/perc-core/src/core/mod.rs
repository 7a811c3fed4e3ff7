//! # Core Module
//!
//! Stateless foundations of the percolation model.
//!
//! - **Disjoint-set** ([`union_find`]) - Weighted quick-union with path halving over a flat,
//!   index-addressed forest.
//! - **Grid model** ([`grid`]) - The n-by-n site grid with virtual top and bottom nodes.
//! - **Statistics** ([`stats`]) - Sample mean, standard deviation and confidence bounds.
//! - **Errors** ([`error`]) - The argument-validation error raised at the API boundary.

pub mod error;
pub mod grid;
pub mod stats;
pub mod union_find;
