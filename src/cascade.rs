//! Cascade-size distribution on a path graph.
//!
//! ## Model
//!
//! Nodes 1..=N sit on a line. Node 1 is seeded; the cascade crosses each edge
//! independently with probability p and stops at the first failed edge. The
//! cascade size Y is the number of nodes reached:
//!
//!   P(Y = j) = p^(j−1)·(1 − p)     for 1 ≤ j < N
//!   P(Y = N) = p^(N−1)
//!
//! Observing node k splits the outcomes into X_k = 1 (Y ≥ k, probability
//! p^(k−1)) and X_k = 0 (Y < k).

/// `pmf[j - 1] = P(Y = j)` for j in 1..=N.
pub fn size_pmf(p: f64, chain_length: usize) -> Vec<f64> {
    if chain_length == 0 {
        return Vec::new();
    }
    let mut pmf = Vec::with_capacity(chain_length);
    let mut reach = 1.0f64; // p^(j-1)
    for _ in 1..chain_length {
        pmf.push(reach * (1.0 - p));
        reach *= p;
    }
    pmf.push(reach);
    pmf
}

/// P(X_k = 1): the cascade reaches node k.
pub fn reach_probability(p: f64, node: usize) -> f64 {
    p.powi(node as i32 - 1)
}

/// −Σ P·ln P over the given masses, skipping zeros (0·ln 0 = 0).
///
/// Masses need not sum to one: on a slice of the pmf this is the partial
/// entropy sum that the closed forms in [`crate::entropy`] evaluate.
pub fn partial_entropy(masses: &[f64]) -> f64 {
    masses
        .iter()
        .filter(|&&m| m > 0.0)
        .map(|&m| -m * m.ln())
        .sum()
}

/// H(Y), the unconditional entropy of the cascade size (nats).
pub fn size_entropy(p: f64, chain_length: usize) -> f64 {
    partial_entropy(&size_pmf(p, chain_length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn pmf_sums_to_one() {
        for &n in &[1usize, 2, 5, 50, 500] {
            for &p in &[0.05f64, 0.5, 0.95] {
                let pmf = size_pmf(p, n);
                assert_eq!(pmf.len(), n);
                assert_relative_eq!(pmf.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
                assert!(pmf.iter().all(|&m| (0.0..=1.0).contains(&m)));
            }
        }
    }

    #[test]
    fn pmf_shape() {
        let pmf = size_pmf(0.5, 4);
        assert_relative_eq!(pmf[0], 0.5);
        assert_relative_eq!(pmf[1], 0.25);
        assert_relative_eq!(pmf[2], 0.125);
        // terminal node absorbs the tail
        assert_relative_eq!(pmf[3], 0.125);
    }

    #[test]
    fn reach_probability_matches_pmf_tail() {
        let p = 0.7;
        let n = 12;
        let pmf = size_pmf(p, n);
        for k in 1..=n {
            let tail: f64 = pmf[k - 1..].iter().sum();
            assert_relative_eq!(reach_probability(p, k), tail, epsilon = 1e-12);
        }
    }

    #[test]
    fn entropy_of_degenerate_and_uniform_masses() {
        assert_eq!(partial_entropy(&[1.0]), 0.0);
        assert_eq!(partial_entropy(&[0.0, 1.0, 0.0]), 0.0);
        assert_relative_eq!(partial_entropy(&[0.25; 4]), 4.0f64.ln(), epsilon = 1e-12);
    }

    /// Two-node chain is a single Bernoulli(p) edge.
    #[test]
    fn two_node_chain_is_bernoulli() {
        let p = 0.3f64;
        let expected = -(p * p.ln() + (1.0 - p) * (1.0 - p).ln());
        assert_relative_eq!(size_entropy(p, 2), expected, epsilon = 1e-12);
    }
}
