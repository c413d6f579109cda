//! Finite arithmetic-geometric series.
//!
//! ## Closed form
//!
//! For z ≠ 1 and n ≥ 0:
//!
//!   S(z, n) = Σ_{m=1}^{n} m·zᵐ = z·(1 − (n+1)·zⁿ + n·zⁿ⁺¹) / (1 − z)²
//!
//! The cascade entropy terms only ever need S(p, ·) with p ∈ (0, 1), where the
//! denominator is bounded away from zero. At z = 1 the closed form is 0/0 and
//! evaluates to NaN; no check is made here, the value propagates to the caller.

/// Closed-form value of `z + 2z² + … + n·zⁿ`.
///
/// `n = 0` is the empty sum and returns 0 for every z ≠ 1.
pub fn finite_sum(z: f64, n: usize) -> f64 {
    let n_f = n as f64;
    let numer = z * (1.0 - (n_f + 1.0) * z.powi(n as i32) + n_f * z.powi(n as i32 + 1));
    let denom = (1.0 - z) * (1.0 - z);
    numer / denom
}

/// Term-by-term evaluation of the same series. O(n); used as the reference
/// the closed form is checked against, and valid at z = 1 as well.
pub fn finite_sum_direct(z: f64, n: usize) -> f64 {
    let mut acc = 0.0f64;
    let mut z_pow = 1.0f64;
    for m in 1..=n {
        z_pow *= z;
        acc += m as f64 * z_pow;
    }
    acc
}
