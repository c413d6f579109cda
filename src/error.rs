//! Error types for the cascade-query crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CascadeError {
    #[error("transmission probability {p} is outside the open interval (0, 1)")]
    ProbabilityOutOfRange { p: f64 },
    #[error("chain length {chain_length} has no query candidates (need N >= 3)")]
    ChainTooShort { chain_length: usize },
    #[error("query node {node} out of range for chain length {chain_length} (need 2 <= k < N)")]
    QueryNodeOutOfRange { node: usize, chain_length: usize },
    #[error("invalid probability grid: {reason}")]
    InvalidGrid { reason: String },
    #[error("conditional entropy is not finite at p={p}, k={node}, N={chain_length}")]
    NonFiniteEntropy {
        p: f64,
        node: usize,
        chain_length: usize,
    },
    #[error("plot rendering failed: {0}")]
    Plot(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CascadeError>;

/// Reject probabilities that are not strictly inside (0, 1). NaN is rejected too.
pub(crate) fn check_probability(p: f64) -> Result<()> {
    if p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(CascadeError::ProbabilityOutOfRange { p })
    }
}

pub(crate) fn check_chain_length(chain_length: usize) -> Result<()> {
    if chain_length >= 3 {
        Ok(())
    } else {
        Err(CascadeError::ChainTooShort { chain_length })
    }
}

pub(crate) fn check_query_node(node: usize, chain_length: usize) -> Result<()> {
    if node >= 2 && node < chain_length {
        Ok(())
    } else {
        Err(CascadeError::QueryNodeOutOfRange { node, chain_length })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_bounds_are_exclusive() {
        assert!(check_probability(0.5).is_ok());
        assert!(check_probability(1e-12).is_ok());
        for p in [0.0, 1.0, -0.1, 1.5, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(check_probability(p), Err(CascadeError::ProbabilityOutOfRange { .. })),
                "p={p} should be rejected"
            );
        }
    }

    #[test]
    fn chain_and_node_bounds() {
        assert!(check_chain_length(3).is_ok());
        assert!(matches!(
            check_chain_length(2),
            Err(CascadeError::ChainTooShort { chain_length: 2 })
        ));

        assert!(check_query_node(2, 3).is_ok());
        assert!(check_query_node(1, 10).is_err());
        assert!(check_query_node(10, 10).is_err());
    }

    #[test]
    fn messages_name_the_offending_values() {
        let e = CascadeError::QueryNodeOutOfRange { node: 7, chain_length: 5 };
        let msg = e.to_string();
        assert!(msg.contains('7') && msg.contains('5'), "{msg}");
    }
}
