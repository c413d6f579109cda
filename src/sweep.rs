//! Sweep of the optimal query node over transmission probability and chain length.

use std::fmt;

use crate::error::{check_chain_length, CascadeError, Result};
use crate::search::optimal_query_node;

/// Chain lengths swept by default.
pub const DEFAULT_CHAIN_LENGTHS: [usize; 6] = [5, 10, 20, 50, 100, 500];

// ── Probability grid ─────────────────────────────────────────────────────────

/// Evenly spaced transmission probabilities `start, start+step, …` up to and
/// including `stop` (within a small tolerance).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbabilityGrid {
    start: f64,
    stop: f64,
    step: f64,
}

impl ProbabilityGrid {
    /// Tolerance on the last point, in units of `step`.
    const STOP_SLACK: f64 = 1e-9;

    /// Upper bound on the number of grid points.
    pub const MAX_POINTS: usize = 1_000_000;

    pub fn new(start: f64, stop: f64, step: f64) -> Result<Self> {
        let reason = if !(step.is_finite() && step > 0.0) {
            format!("step must be positive, got {step}")
        } else if !(start > 0.0 && start < 1.0) || !(stop > 0.0 && stop < 1.0) {
            format!("bounds [{start}, {stop}] must lie inside (0, 1)")
        } else if start > stop {
            format!("start {start} is greater than stop {stop}")
        } else {
            let intervals = Self::intervals(start, stop, step);
            if intervals.is_finite() && intervals < Self::MAX_POINTS as f64 {
                return Ok(Self { start, stop, step });
            }
            format!(
                "step {step} over [{start}, {stop}] gives more than {} points",
                Self::MAX_POINTS
            )
        };
        Err(CascadeError::InvalidGrid { reason })
    }

    fn intervals(start: f64, stop: f64, step: f64) -> f64 {
        ((stop - start) / step + Self::STOP_SLACK).floor()
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn stop(&self) -> f64 {
        self.stop
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        Self::intervals(self.start, self.stop, self.step) as usize + 1
    }

    /// A validated grid always contains `start`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Grid points, each computed as `start + i·step` so rounding does not accumulate.
    pub fn points(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.start + i as f64 * self.step)
    }
}

impl Default for ProbabilityGrid {
    /// 0.05, 0.10, …, 0.95 (19 points).
    fn default() -> Self {
        Self { start: 0.05, stop: 0.95, step: 0.05 }
    }
}

// ── Sweep configuration and results ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub grid: ProbabilityGrid,
    pub chain_lengths: Vec<usize>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            grid: ProbabilityGrid::default(),
            chain_lengths: DEFAULT_CHAIN_LENGTHS.to_vec(),
        }
    }
}

/// Optimum for one transmission probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub p: f64,
    pub node: usize,
    pub entropy: f64,
}

/// All optima for one chain length, in grid order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSeries {
    pub chain_length: usize,
    pub points: Vec<SweepPoint>,
}

impl SweepSeries {
    pub fn max_node(&self) -> Option<usize> {
        self.points.iter().map(|pt| pt.node).max()
    }
}

impl fmt::Display for SweepSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = format!("══ Path graph N={} ", self.chain_length);
        writeln!(f, "{title:═<48}")?;
        writeln!(f, "{:>8} {:>10} {:>16}", "p", "k_opt", "min H(Y|X_k)")?;
        writeln!(f, "{}", "─".repeat(36))?;
        for pt in &self.points {
            writeln!(f, "{:>8.2} {:>10} {:>16.4}", pt.p, pt.node, pt.entropy)?;
        }
        Ok(())
    }
}

/// Optimal query node for every grid probability on a chain of `chain_length` nodes.
pub fn run_sweep(chain_length: usize, grid: &ProbabilityGrid) -> Result<SweepSeries> {
    check_chain_length(chain_length)?;

    let points = grid
        .points()
        .map(|p| {
            optimal_query_node(p, chain_length).map(|opt| SweepPoint {
                p,
                node: opt.node,
                entropy: opt.entropy,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::info!(chain_length, points = points.len(), "sweep complete");
    Ok(SweepSeries { chain_length, points })
}

/// One series per configured chain length, in configuration order.
pub fn run_all(config: &SweepConfig) -> Result<Vec<SweepSeries>> {
    config
        .chain_lengths
        .iter()
        .map(|&n| run_sweep(n, &config.grid))
        .collect()
}
