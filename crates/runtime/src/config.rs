use clap::{Parser, ValueEnum};

/// Controller used to choose actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Always apply zero force.
    Zero,
    /// Uniform random actions in [-1, 1].
    Random,
    /// Proportional-derivative balancing controller.
    Balance,
}

/// Command-line configuration for a run.
#[derive(Debug, Clone, Parser)]
#[command(name = "runtime_main", about = "Run cart-pole episodes headlessly")]
pub struct RunConfig {
    /// Number of episodes to run.
    #[arg(long, default_value_t = 5)]
    pub episodes: u32,

    /// Seed for the simulator and the random policy. Entropy-seeded when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = PolicyKind::Balance)]
    pub policy: PolicyKind,

    /// Log progress every N steps within an episode.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub log_every: u32,
}
