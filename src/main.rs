//! path-graph-sweep — optimal query node vs transmission probability.
//!
//! Usage:
//!   path-graph-sweep                         # N ∈ {5,10,20,50,100,500}, p = 0.05..0.95
//!   path-graph-sweep -n 100                  # single chain length
//!   path-graph-sweep -n 20 --profile --no-plot

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cascade_query::search::entropy_profile;
use cascade_query::sweep::DEFAULT_CHAIN_LENGTHS;
use cascade_query::{render_all, run_all, PlotStyle, ProbabilityGrid, SweepConfig};

#[derive(Parser)]
#[command(name = "path-graph-sweep")]
#[command(about = "Optimal node to query for cascade-size entropy on a path graph")]
#[command(version)]
struct Cli {
    /// Chain length N (repeat for several; default 5,10,20,50,100,500)
    #[arg(short = 'n', long = "chain-length")]
    chain_lengths: Vec<usize>,

    /// First transmission probability of the grid
    #[arg(long, default_value_t = 0.05)]
    p_start: f64,

    /// Last transmission probability of the grid (inclusive)
    #[arg(long, default_value_t = 0.95)]
    p_stop: f64,

    /// Grid spacing
    #[arg(long, default_value_t = 0.05)]
    p_step: f64,

    /// Directory for the PNG files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print tables only, write no images
    #[arg(long)]
    no_plot: bool,

    /// Also print H(Y|X_k) for every k at every grid point
    #[arg(long)]
    profile: bool,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let grid = ProbabilityGrid::new(cli.p_start, cli.p_stop, cli.p_step)?;
    let chain_lengths = if cli.chain_lengths.is_empty() {
        DEFAULT_CHAIN_LENGTHS.to_vec()
    } else {
        cli.chain_lengths
    };
    let config = SweepConfig { grid, chain_lengths };

    tracing::info!(
        chain_lengths = ?config.chain_lengths,
        points = config.grid.len(),
        "starting sweep"
    );
    let all = run_all(&config)?;

    for series in &all {
        println!("\n{series}");
        if cli.profile {
            print_profiles(series.chain_length, &config.grid)?;
        }
    }

    if !cli.no_plot {
        let paths = render_all(&all, &cli.out_dir, &PlotStyle::default())
            .with_context(|| format!("rendering plots into {}", cli.out_dir.display()))?;
        for path in paths {
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn print_profiles(chain_length: usize, grid: &ProbabilityGrid) -> Result<()> {
    for p in grid.points() {
        println!("\n  p = {p:.2}");
        println!("  {:>6} {:>14}", "k", "H(Y|X_k)");
        println!("  {}", "─".repeat(21));
        for (k, h) in entropy_profile(p, chain_length)? {
            println!("  {k:>6} {h:>14.6}");
        }
    }
    Ok(())
}
