//! Optimal query node for cascade-size entropy on a path graph.
//!
//! A cascade starts at node 1 of an N-node chain and crosses each edge with
//! probability p. Observing whether node k was reached leaves some residual
//! uncertainty about the final cascade size Y; this crate finds the node k
//! that minimizes that residual, H(Y | X_k), and sweeps the answer over p and N.
//!
//! # Modules
//!
//! - [`series`]   — closed form of Σ m·zᵐ and its direct-sum reference
//! - [`cascade`]  — cascade-size pmf, reach probability, plain entropy sums
//! - [`entropy`]  — H(Y | X_k) closed form, unchecked and validated
//! - [`search`]   — first-minimum scan over query nodes
//! - [`sweep`]    — probability grid × chain length sweep and result tables
//! - [`plot`]     — PNG rendering of a sweep (one file per chain length)
//! - [`error`]    — [`CascadeError`] and the crate `Result`
//!
//! # Running
//!
//! ```bash
//! cargo test -- --nocapture           # tables for every check
//! cargo run --release                 # writes path_graph_k_vs_p_N<N>.png
//! ```

pub mod cascade;
pub mod entropy;
pub mod error;
pub mod plot;
pub mod search;
pub mod series;
pub mod sweep;

pub use entropy::{cond_entropy_cascade_size, conditional_entropy};
pub use error::{CascadeError, Result};
pub use plot::{annotation_label, plot_file_name, render_all, render_series, PlotStyle};
pub use search::{
    entropy_profile, first_minimum, optimal_query_node, scan_query_nodes, QueryOptimum,
};
pub use series::finite_sum;
pub use sweep::{run_all, run_sweep, ProbabilityGrid, SweepConfig, SweepPoint, SweepSeries};
