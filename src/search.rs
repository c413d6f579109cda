//! Brute-force search for the query node that minimizes H(Y | X_k).
//!
//! Candidates are k = 2, 3, …, N−1. The scan keeps the first strict minimum,
//! so when several nodes share the smallest entropy the smallest index wins.
//! An empty candidate range (N ≤ 2) yields `None` rather than a sentinel.

use crate::entropy::{cond_entropy_cascade_size, conditional_entropy};
use crate::error::{check_chain_length, check_probability, CascadeError, Result};

/// Smallest index allowed as a query node.
pub const FIRST_QUERY_NODE: usize = 2;

/// Minimizing node and the entropy it achieves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryOptimum {
    pub node: usize,
    pub entropy: f64,
}

/// First-minimum scan of `objective` over `candidates`.
///
/// Comparison is strict `<`, so ties keep the earliest candidate. Only NaN
/// objectives are skipped: ±∞ compares normally, so an infinite first
/// candidate stands until a finite value undercuts it. Returns `None` when
/// every candidate is NaN or the range is empty.
pub fn first_minimum<I, F>(candidates: I, mut objective: F) -> Option<QueryOptimum>
where
    I: IntoIterator<Item = usize>,
    F: FnMut(usize) -> f64,
{
    let mut best: Option<QueryOptimum> = None;
    for node in candidates {
        let entropy = objective(node);
        if entropy.is_nan() {
            continue;
        }
        match best {
            Some(b) if entropy >= b.entropy => {}
            _ => best = Some(QueryOptimum { node, entropy }),
        }
    }
    best
}

/// Unchecked scan over k in [2, N). `None` for N ≤ 2 or when every
/// candidate evaluates to NaN.
pub fn scan_query_nodes(p: f64, chain_length: usize) -> Option<QueryOptimum> {
    first_minimum(FIRST_QUERY_NODE..chain_length, |k| {
        cond_entropy_cascade_size(p, k, chain_length)
    })
}

/// Every (k, H(Y | X_k)) pair of the scan, in increasing k.
pub fn entropy_profile(p: f64, chain_length: usize) -> Result<Vec<(usize, f64)>> {
    check_probability(p)?;
    check_chain_length(chain_length)?;
    (FIRST_QUERY_NODE..chain_length)
        .map(|k| conditional_entropy(p, k, chain_length).map(|h| (k, h)))
        .collect()
}

/// Checked search: p ∈ (0, 1), N ≥ 3, and every candidate entropy finite.
pub fn optimal_query_node(p: f64, chain_length: usize) -> Result<QueryOptimum> {
    let profile = entropy_profile(p, chain_length)?;
    let opt = first_minimum(FIRST_QUERY_NODE..chain_length, |k| profile[k - FIRST_QUERY_NODE].1)
        .ok_or(CascadeError::ChainTooShort { chain_length })?;

    tracing::debug!(p, chain_length, node = opt.node, entropy = opt.entropy, "optimal query node");
    Ok(opt)
}
