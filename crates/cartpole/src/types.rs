//! Observation and transition types returned by the simulator.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Observable state `[cart_position, cart_velocity, pole_angle, pole_angular_velocity]`.
pub type State = [f64; 4];

/// Auxiliary diagnostics attached to a step. Always empty for now.
pub type Info = HashMap<String, serde_json::Value>;

/// Lifecycle of a simulator instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// An episode is running and `step` may be called.
    Active,
    /// No episode is running; `reset` must be called before stepping.
    Done,
}

/// Result of one successful [`crate::CartPole::step`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step {
    pub state: State,
    pub reward: f64,
    /// The cart or the pole left its safety bounds.
    pub terminated: bool,
    /// The episode reached the step limit.
    pub truncated: bool,
    pub info: Info,
}

impl Step {
    /// Whether this step ended the episode.
    #[must_use]
    pub fn done(&self) -> bool {
        self.terminated || self.truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(terminated: bool, truncated: bool) -> Step {
        Step { state: [0.0; 4], reward: 1.0, terminated, truncated, info: Info::new() }
    }

    #[test]
    fn done_when_either_flag_is_set() {
        assert!(!step(false, false).done());
        assert!(step(true, false).done());
        assert!(step(false, true).done());
        assert!(step(true, true).done());
    }

    #[test]
    fn step_serializes_with_empty_info() {
        let json = serde_json::to_value(step(false, true)).unwrap();
        assert_eq!(json["reward"], 1.0);
        assert_eq!(json["truncated"], true);
        assert!(json["info"].as_object().unwrap().is_empty());
    }
}
