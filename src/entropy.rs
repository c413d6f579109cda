//! Conditional entropy of the cascade size given the state of one query node.
//!
//! ## Closed forms
//!
//! With q = p^(k−1) the probability that node k is reached and
//! S(·, ·) the finite series from [`crate::series`]:
//!
//!   H₀(k)    = −(1 − q)·ln(1 − p) − (1 − p)·ln p · S(p, k−2)
//!   H₁(k, N) = −(q − p^(N−1))·ln(1 − p)
//!              − (1 − p)·ln p · (S(p, N−2) − S(p, k−2))
//!              − N·pᴺ·ln p
//!
//!   H(Y | X_k) = (1 − q)·H₀ + q·H₁
//!
//! H₀ is the entropy sum −Σ P(Y=j)·ln P(Y=j) over the sizes j < k that leave
//! node k unreached. H₁ is the same sum over k ≤ j < N plus the boundary term
//! −N·pᴺ·ln p for the cascade running to the end of the chain.
//!
//! All logarithms are natural. Every term is a sum of non-negative pieces for
//! p ∈ (0, 1), so the result is ≥ 0 there. Outside that interval the logs
//! produce NaN or ±∞; [`cond_entropy_cascade_size`] passes those through and
//! [`conditional_entropy`] rejects the inputs up front.

use crate::error::{check_chain_length, check_probability, check_query_node, CascadeError, Result};
use crate::series::finite_sum;

/// H₀: contribution of the outcomes where node `k` is never reached.
///
/// NaN for k < 2.
pub fn entropy_given_unreached(p: f64, k: usize) -> f64 {
    if k < 2 {
        return f64::NAN;
    }
    let q = p.powi(k as i32 - 1);
    -(1.0 - q) * (1.0 - p).ln() - (1.0 - p) * p.ln() * finite_sum(p, k - 2)
}

/// H₁: contribution of the outcomes where node `k` is reached, on a chain of
/// `chain_length` nodes.
///
/// NaN for k < 2 or N < 2.
pub fn entropy_given_reached(p: f64, k: usize, chain_length: usize) -> f64 {
    if k < 2 || chain_length < 2 {
        return f64::NAN;
    }
    let n = chain_length;
    let q = p.powi(k as i32 - 1);
    let tail = p.powi(n as i32 - 1);
    -(q - tail) * (1.0 - p).ln()
        - (1.0 - p) * p.ln() * (finite_sum(p, n - 2) - finite_sum(p, k - 2))
        - n as f64 * p.powi(n as i32) * p.ln()
}

/// H(Y | X_k) for query node `k` on a chain of `chain_length` nodes.
///
/// No validation: p outside (0, 1) yields NaN/∞, and k < 2 or N < 2 yields
/// NaN. The optimal-node scan never selects a NaN candidate.
pub fn cond_entropy_cascade_size(p: f64, k: usize, chain_length: usize) -> f64 {
    let q = p.powi(k as i32 - 1);
    (1.0 - q) * entropy_given_unreached(p, k) + q * entropy_given_reached(p, k, chain_length)
}

/// Checked H(Y | X_k): requires p ∈ (0, 1), N ≥ 3, 2 ≤ k < N and a finite result.
pub fn conditional_entropy(p: f64, k: usize, chain_length: usize) -> Result<f64> {
    check_probability(p)?;
    check_chain_length(chain_length)?;
    check_query_node(k, chain_length)?;

    let h = cond_entropy_cascade_size(p, k, chain_length);
    if h.is_finite() {
        Ok(h)
    } else {
        Err(CascadeError::NonFiniteEntropy { p, node: k, chain_length })
    }
}
