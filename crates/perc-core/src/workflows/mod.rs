//! # Workflows Module
//!
//! Top-level entry points for estimating a percolation threshold.
//!
//! - **Estimation Workflow** ([`estimate`]) - [`estimate::PercolationStats`], which runs a
//!   batch of trials at construction and exposes the threshold statistics, and
//!   [`estimate::run`], which seeds the RNG from an `EstimationConfig`, reports progress and
//!   returns the statistics.

pub mod estimate;
