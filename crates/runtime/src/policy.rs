//! Built-in controllers for driving the simulator.

use cartpole::consts::{ACTION_SIZE, OBSERVATION_SIZE};
use cartpole::State;

use crate::config::PolicyKind;

/// Gains on `[cart_position, cart_velocity, pole_angle, pole_angular_velocity]`.
const BALANCE_GAINS: [f64; OBSERVATION_SIZE] = [1.0, 1.5, 15.0, 2.0];

// Policies emit a single scalar force command.
const _: () = assert!(ACTION_SIZE == 1);

pub enum Policy {
    Zero,
    Random(fastrand::Rng),
    Balance,
}

impl Policy {
    pub fn new(kind: PolicyKind, seed: Option<u64>) -> Self {
        match kind {
            PolicyKind::Zero => Self::Zero,
            PolicyKind::Random => {
                Self::Random(seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed))
            }
            PolicyKind::Balance => Self::Balance,
        }
    }

    /// Action in `[-1, 1]` for the observed state.
    pub fn act(&mut self, obs: &State) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Random(rng) => rng.f64() * 2.0 - 1.0,
            Self::Balance => {
                let u: f64 = BALANCE_GAINS.iter().zip(obs).map(|(k, x)| k * x).sum();
                u.clamp(-1.0, 1.0)
            }
        }
    }
}
