//! Property-based checks of the series, entropy and search invariants.

use cascade_query::cascade::{partial_entropy, size_pmf};
use cascade_query::series::finite_sum_direct;
use cascade_query::{
    cond_entropy_cascade_size, entropy_profile, finite_sum, first_minimum, optimal_query_node,
    scan_query_nodes,
};
use proptest::prelude::*;

// ===== Strategies =====

/// Transmission probability kept away from the singular endpoints.
fn arb_probability() -> impl Strategy<Value = f64> {
    0.01f64..0.99
}

/// (N, k) with N ≥ 3 and 2 ≤ k < N.
fn arb_chain_and_node() -> impl Strategy<Value = (usize, usize)> {
    (3usize..200).prop_flat_map(|n| (Just(n), 2..n))
}

// ===== Properties =====

proptest! {
    #[test]
    fn prop_series_matches_direct_sum(z in 0.01f64..0.99, n in 0usize..40) {
        let closed = finite_sum(z, n);
        let direct = finite_sum_direct(z, n);
        prop_assert!((closed - direct).abs() <= 1e-9 * direct.abs().max(1.0),
            "z={} n={} closed={} direct={}", z, n, closed, direct);
    }

    #[test]
    fn prop_entropy_non_negative(p in arb_probability(), (n, k) in arb_chain_and_node()) {
        let h = cond_entropy_cascade_size(p, k, n);
        prop_assert!(h.is_finite());
        prop_assert!(h >= 0.0, "H={} at p={}, k={}, N={}", h, p, k, n);
    }

    /// H(Y|X_k) never exceeds the entropy mass of the whole pmf plus the
    /// boundary term; both per-outcome pieces are bounded by it.
    #[test]
    fn prop_entropy_bounded_by_total_mass(p in arb_probability(), (n, k) in arb_chain_and_node()) {
        let pmf = size_pmf(p, n);
        let boundary = -(n as f64) * p.powi(n as i32) * p.ln();
        let bound = partial_entropy(&pmf[..n - 1]) + boundary;
        let h = cond_entropy_cascade_size(p, k, n);
        prop_assert!(h <= bound + 1e-9, "H={} bound={}", h, bound);
    }

    #[test]
    fn prop_search_returns_first_profile_minimum(p in arb_probability(), n in 3usize..120) {
        let profile = entropy_profile(p, n).unwrap();
        let opt = optimal_query_node(p, n).unwrap();

        prop_assert!(profile.iter().all(|&(_, h)| opt.entropy <= h));
        let mut before_opt = profile.iter().take_while(|&&(k, _)| k < opt.node);
        prop_assert!(before_opt.all(|&(_, h)| h > opt.entropy));
        prop_assert_eq!(scan_query_nodes(p, n), Some(opt));
    }

    #[test]
    fn prop_ties_resolve_to_smallest(values in prop::collection::vec(0u8..4, 1..30)) {
        // small alphabet forces repeated minima
        let opt = first_minimum(0..values.len(), |i| values[i] as f64).unwrap();
        let min = *values.iter().min().unwrap();
        let first = values.iter().position(|&v| v == min).unwrap();
        prop_assert_eq!(opt.node, first);
        prop_assert_eq!(opt.entropy, min as f64);
    }
}
