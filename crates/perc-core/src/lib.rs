//! # Percolation Core Library
//!
//! Monte Carlo estimation of the percolation threshold of an n-by-n site grid.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that the connectivity model, the simulation
//! machinery and the user-facing entry points stay independent and testable.
//!
//! - **[`core`]: The Foundation.** The disjoint-set forest (`UnionFind`), the grid model
//!   (`Percolation`) that tracks open sites and top-to-bottom connectivity, and pure
//!   sample statistics.
//!
//! - **[`engine`]: The Simulation Machinery.** Run configuration, progress reporting and the
//!   single-trial routine that opens random sites until the grid percolates.
//!
//! - **[`workflows`]: The Public API.** `PercolationStats` runs a batch of trials and exposes
//!   the threshold estimate, and [`workflows::estimate::run`] drives a full seeded estimation
//!   from an `EstimationConfig`.

pub mod core;
pub mod engine;
pub mod workflows;
