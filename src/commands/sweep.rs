//! Random-game sweep command
//!
//! Generates random integer-valued payoff matrices and measures how often
//! optimal play is deterministic (a pure saddle point exists).

use crate::core::PayoffMatrix;
use crate::solver::find_saddle_point;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Configuration for a sweep run
pub struct SweepConfig {
    pub count: usize,
    pub rows: usize,
    pub cols: usize,
    /// Smallest payoff generated (inclusive)
    pub lo: i32,
    /// Largest payoff generated (inclusive)
    pub hi: i32,
    /// Fixed seed for reproducible sweeps
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            rows: 3,
            cols: 3,
            lo: -9,
            hi: 9,
            seed: None,
        }
    }
}

/// Result of a sweep run
pub struct SweepResult {
    pub total: usize,
    pub determined: usize,
    /// How often each game value occurred among determined games
    pub value_distribution: FxHashMap<i64, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SweepResult {
    /// Fraction of games with a pure saddle point
    #[must_use]
    pub fn determined_rate(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.determined as f64 / self.total as f64
        }
    }
}

/// Analyze `count` random games and tally how many are strictly determined
///
/// Payoffs are integers drawn uniformly from `lo..=hi`, so every game value
/// in the distribution map is exact.
///
/// # Panics
/// Panics if `rows` or `cols` is zero, or if `lo > hi`.
pub fn run_sweep(config: &SweepConfig) -> SweepResult {
    assert!(config.rows >= 1 && config.cols >= 1, "games need both players");
    assert!(config.lo <= config.hi, "payoff range is empty");

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Progress bar
    let pb = ProgressBar::new(config.count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut determined = 0;
    let mut value_distribution: FxHashMap<i64, usize> = FxHashMap::default();

    let start = Instant::now();

    for _ in 0..config.count {
        let matrix = random_matrix(&mut rng, config);

        if let Some(saddle) = find_saddle_point(&matrix) {
            determined += 1;
            *value_distribution.entry(saddle.value as i64).or_insert(0) += 1;
        }

        pb.inc(1);
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    SweepResult {
        total: config.count,
        determined,
        value_distribution,
        duration,
        games_per_second: config.count as f64 / duration.as_secs_f64(),
    }
}

fn random_matrix(rng: &mut StdRng, config: &SweepConfig) -> PayoffMatrix {
    let rows = (0..config.rows)
        .map(|_| {
            (0..config.cols)
                .map(|_| f64::from(rng.random_range(config.lo..=config.hi)))
                .collect()
        })
        .collect();

    PayoffMatrix::new(rows).expect("generated rows are rectangular and finite")
}
