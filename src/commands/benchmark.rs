//! Benchmark command
//!
//! Samples solvable word pairs and runs every strategy on each.

use crate::core::Word;
use crate::game::{GameError, sample_pair};
use crate::search::{PathFinder, SearchStrategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::warn;

/// Accumulated numbers for one strategy
#[derive(Debug, Clone, Default)]
pub struct StrategyTotals {
    pub strategy: SearchStrategy,
    pub total_cost: usize,
    pub expanded: usize,
    pub generated: usize,
    pub duration: Duration,
}

impl StrategyTotals {
    #[must_use]
    pub fn average_cost(&self, pairs: usize) -> f64 {
        if pairs == 0 {
            0.0
        } else {
            self.total_cost as f64 / pairs as f64
        }
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub pairs: usize,
    /// In `SearchStrategy::ALL` order
    pub totals: Vec<StrategyTotals>,
    /// Pairs on which the strategies reported different costs
    pub mismatches: Vec<(Word, Word)>,
    pub duration: Duration,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Run `count` sampled pairs through every strategy
///
/// # Errors
///
/// Returns `GameError` if a solvable pair cannot be sampled.
pub fn run_benchmark<R: Rng + ?Sized>(
    finder: &PathFinder<'_>,
    candidates: &[&Word],
    count: usize,
    rng: &mut R,
    show_progress: bool,
) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();
    let mut totals: Vec<StrategyTotals> = SearchStrategy::ALL
        .iter()
        .map(|&strategy| StrategyTotals {
            strategy,
            ..StrategyTotals::default()
        })
        .collect();
    let mut mismatches = Vec::new();

    let pb = progress_bar(count, show_progress);

    for _ in 0..count {
        let (from, to) = sample_pair(finder, candidates, rng)?;
        pb.set_message(format!("{from} → {to}"));

        let mut costs = Vec::with_capacity(totals.len());
        for entry in &mut totals {
            let timer = Instant::now();
            let (result, stats) = finder.find_path_with_stats(&from, &to, entry.strategy)?;
            entry.duration += timer.elapsed();
            entry.expanded += stats.expanded;
            entry.generated += stats.generated;

            let cost = result.map(|r| r.cost);
            entry.total_cost += cost.unwrap_or(0);
            costs.push(cost);
        }

        if costs.windows(2).any(|pair| pair[0] != pair[1]) {
            warn!(%from, %to, ?costs, "strategies disagree on cost");
            mismatches.push((from, to));
        }

        pb.inc(1);
    }

    pb.finish_with_message("done");

    Ok(BenchmarkResult {
        pairs: count,
        totals,
        mismatches,
        duration: start.elapsed(),
    })
}
