use crate::core::error::Result;
use crate::core::grid::Percolation;
use rand::Rng;
use tracing::{instrument, trace};

/// Runs one percolation trial on a fresh `n`-by-`n` grid.
///
/// Sites are drawn uniformly and independently, with replacement, and opened until the grid
/// percolates. Drawing an already-open site is allowed and changes nothing. The loop always
/// terminates because a fully open grid percolates.
///
/// # Return
///
/// The fraction of open sites at the moment percolation first occurs, in `(0, 1]`.
///
/// # Errors
///
/// Returns `InvalidArgument` if `n` is zero.
#[instrument(level = "trace", skip(rng))]
pub fn run_trial(n: usize, rng: &mut impl Rng) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    let mut draws: u64 = 0;

    while !grid.percolates() {
        let row = rng.gen_range(1..=n);
        let col = rng.gen_range(1..=n);
        grid.open(row, col)?;
        draws += 1;
    }

    trace!(
        draws,
        open_sites = grid.number_of_open_sites(),
        "Grid percolated."
    );
    Ok(grid.open_fraction())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::PercolationError;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn single_site_trial_always_yields_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..10 {
            assert_eq!(run_trial(1, &mut rng).unwrap(), 1.0);
        }
    }

    #[test]
    fn fraction_is_within_unit_interval_and_on_the_site_lattice() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let n = 10;
        for _ in 0..50 {
            let fraction = run_trial(n, &mut rng).unwrap();
            assert!(fraction > 0.0 && fraction <= 1.0);
            // A percolating path needs at least one site per row.
            assert!(fraction >= n as f64 / (n * n) as f64);
            let open_sites = fraction * (n * n) as f64;
            assert!((open_sites - open_sites.round()).abs() < 1e-9);
        }
    }

    #[test]
    fn same_seed_gives_same_fraction() {
        let mut a = ChaCha8Rng::seed_from_u64(2024);
        let mut b = ChaCha8Rng::seed_from_u64(2024);
        for _ in 0..5 {
            assert_eq!(run_trial(16, &mut a).unwrap(), run_trial(16, &mut b).unwrap());
        }
    }

    #[test]
    fn zero_size_trial_is_rejected() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            run_trial(0, &mut rng),
            Err(PercolationError::InvalidArgument(_))
        ));
    }
}
