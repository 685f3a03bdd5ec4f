//! # Episode Loop
//!
//! Drives a [`cartpole::CartPole`] through the configured number of episodes,
//! querying the selected [`Policy`] every step and logging results.

use anyhow::{Context, Result};
use cartpole::CartPole;

use crate::config::RunConfig;
use crate::policy::Policy;

/// Outcome of a single episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeResult {
    pub steps: u32,
    pub total_reward: f64,
    pub terminated: bool,
    pub truncated: bool,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub episodes: Vec<EpisodeResult>,
}

impl RunSummary {
    /// Mean undiscounted return, or zero when no episode ran.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_return(&self) -> f64 {
        if self.episodes.is_empty() {
            return 0.0;
        }
        let total: f64 = self.episodes.iter().map(|e| e.total_reward).sum();
        total / self.episodes.len() as f64
    }

    #[must_use]
    pub fn truncated_count(&self) -> usize {
        self.episodes.iter().filter(|e| e.truncated).count()
    }
}

/// Offset between the simulator seed and the random policy's seed, so the two
/// generators never share a stream.
const POLICY_SEED_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

fn policy_seed(seed: Option<u64>) -> Option<u64> {
    seed.map(|s| s.wrapping_add(POLICY_SEED_SALT))
}

/// Run every configured episode and collect their results.
///
/// # Errors
///
/// Returns an error if the simulator rejects a step, which indicates the loop
/// stepped past the end of an episode.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let mut env = match config.seed {
        Some(seed) => CartPole::with_seed(seed),
        None => CartPole::new(),
    };
    let mut policy = Policy::new(config.policy, policy_seed(config.seed));
    let mut summary = RunSummary::default();

    for episode in 0..config.episodes {
        let result = run_episode(&mut env, &mut policy, config.log_every)
            .with_context(|| format!("episode {episode} failed"))?;
        tracing::info!(
            episode,
            steps = result.steps,
            total_reward = result.total_reward,
            terminated = result.terminated,
            truncated = result.truncated,
            "episode complete"
        );
        summary.episodes.push(result);
    }

    Ok(summary)
}

fn run_episode(env: &mut CartPole, policy: &mut Policy, log_every: u32) -> Result<EpisodeResult> {
    let mut obs = env.reset();
    let mut total_reward = 0.0;

    loop {
        let action = policy.act(&obs);
        let step = env
            .step(action)
            .with_context(|| format!("step {} rejected", env.step_count() + 1))?;
        total_reward += step.reward;
        obs = step.state;

        let steps = env.step_count();
        if steps % log_every == 0 {
            tracing::info!(steps, cart_position = obs[0], pole_angle = obs[2], "episode progress");
        }

        if step.done() {
            return Ok(EpisodeResult {
                steps,
                total_reward,
                terminated: step.terminated,
                truncated: step.truncated,
            });
        }
    }
}
