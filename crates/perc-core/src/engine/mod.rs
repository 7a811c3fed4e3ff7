//! # Engine Module
//!
//! The simulation machinery that sits between the grid model and the public workflows.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Run parameters and their validating builder
//! - **Trials** ([`trial`]) - A single Monte Carlo trial on a fresh grid
//! - **Progress Monitoring** ([`progress`]) - Progress events for callers that display them
//! - **Error Handling** ([`error`]) - Engine-level error type wrapping configuration and
//!   argument failures
//!
//! Randomness is always passed in by the caller as a `rand::Rng`, so every trial is
//! reproducible from a seed.

pub mod config;
pub mod error;
pub mod progress;
pub mod trial;
