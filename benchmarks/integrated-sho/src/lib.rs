//! Reproducible hyperparameter draws for the benchmarks.

use rand::prelude::*;
use rand_distr::{Normal, Uniform};

/// One draw of `(log_S0, log_Q, log_omega0, t_exp)`.
pub type Draw = [f64; 4];

/// Hyperparameters scattered around the asteroseismic reference fit,
/// covering both damping regimes.
pub fn generate_draws(size: usize, seed: u64) -> Vec<Draw> {
    let mut rng = StdRng::seed_from_u64(seed);
    let log_s0 = Normal::new(-4.16, 1.0).unwrap();
    let log_q = Uniform::new(-3.0, 4.0).unwrap();
    let log_omega0 = Normal::new(1.13, 0.5).unwrap();
    let t_exp = Uniform::new(0.5 / 60.0, 30.0 / 60.0).unwrap();

    (0..size)
        .map(|_| {
            [
                log_s0.sample(&mut rng),
                log_q.sample(&mut rng),
                log_omega0.sample(&mut rng),
                t_exp.sample(&mut rng),
            ]
        })
        .collect()
}

/// Evenly spaced lags from 0 to `max_lag`.
pub fn lag_grid(size: usize, max_lag: f64) -> Vec<f64> {
    (0..size)
        .map(|i| i as f64 * max_lag / (size.max(2) - 1) as f64)
        .collect()
}
