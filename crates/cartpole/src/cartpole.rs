//! CartPole simulator for reinforcement learning and control experiments
//!
//! [`CartPole`] owns the four dynamical variables of the system and advances
//! them one fixed timestep per [`CartPole::step`] call. Episodes start with
//! [`CartPole::reset`] and end when the cart or pole leaves its bounds or the
//! step limit is reached.

use std::f64::consts::{PI, TAU};

use crate::consts::{
    CART_MASS, FORCE_NOISE_BOUND, GRAVITY, MAX_STEPS, POLE_LENGTH, POLE_MASS,
    RESET_POSITION_SCALE, RESET_POSITION_STD_DEV, RESET_UNIFORM_BOUND, THETA_THRESHOLD, TIMESTEP,
    X_THRESHOLD,
};
use crate::error::CartPoleError;
use crate::noise::{FastrandNoise, NoiseSource};
use crate::types::{Info, Phase, State, Step};

/// Wrap an angle into `[-π, π)` via `(angle + π) mod 2π − π`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// A cart on a bounded track balancing an inverted pole.
///
/// A fresh simulator is in [`Phase::Done`]: call [`CartPole::reset`] before
/// the first [`CartPole::step`].
#[derive(Debug, Clone)]
pub struct CartPole<N = FastrandNoise> {
    noise: N,
    step_count: u32,
    cart_position: f64,
    cart_velocity: f64,
    pole_angle: f64,
    pole_angular_velocity: f64,
    phase: Phase,
}

impl CartPole<FastrandNoise> {
    /// Simulator backed by an entropy-seeded noise source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_noise(FastrandNoise::new())
    }

    /// Simulator whose resets and force noise are reproducible from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_noise(FastrandNoise::with_seed(seed))
    }
}

impl Default for CartPole<FastrandNoise> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NoiseSource> CartPole<N> {
    /// Simulator drawing all randomness from `noise`.
    #[must_use]
    pub fn with_noise(noise: N) -> Self {
        Self {
            noise,
            step_count: 0,
            cart_position: 0.0,
            cart_velocity: 0.0,
            pole_angle: 0.0,
            pole_angular_velocity: 0.0,
            phase: Phase::Done,
        }
    }

    /// Start a new episode from a randomized state and return it.
    ///
    /// The cart position is `tanh(N(0, 0.01)) * 4.8`, which can land outside
    /// [`X_THRESHOLD`]; such an episode terminates on its first step.
    pub fn reset(&mut self) -> State {
        self.step_count = 0;
        self.cart_position =
            self.noise.gauss(0.0, RESET_POSITION_STD_DEV).tanh() * RESET_POSITION_SCALE;
        self.cart_velocity = self.noise.uniform(-RESET_UNIFORM_BOUND, RESET_UNIFORM_BOUND);
        let raw_angle = self.noise.uniform(-RESET_UNIFORM_BOUND, RESET_UNIFORM_BOUND);
        self.pole_angle = normalize_angle(raw_angle);
        self.pole_angular_velocity = self.noise.uniform(-RESET_UNIFORM_BOUND, RESET_UNIFORM_BOUND);
        self.phase = Phase::Active;

        if self.cart_position.abs() > X_THRESHOLD {
            tracing::debug!(
                cart_position = self.cart_position,
                "episode starts outside the track bounds"
            );
        }
        tracing::debug!(state = ?self.state(), "cartpole reset");

        self.state()
    }

    /// Advance the simulation by one timestep under `action`.
    ///
    /// `action` is nominally in `[-1, 1]` but is not clamped; a uniform
    /// perturbation in `[-0.02, 0.02]` is added before it is applied as a
    /// force. Every successful step earns a reward of `1.0`.
    ///
    /// # Errors
    ///
    /// Returns [`CartPoleError::IllegalState`] if no episode is running. The
    /// simulator is left untouched in that case.
    pub fn step(&mut self, action: f64) -> Result<Step, CartPoleError> {
        if self.phase == Phase::Done {
            return Err(CartPoleError::IllegalState);
        }

        self.step_count += 1;

        let force = action + self.noise.uniform(-FORCE_NOISE_BOUND, FORCE_NOISE_BOUND);
        let (linear_accel, angular_accel) = self.accelerations(force);

        // Positions advance with the pre-update velocities.
        self.cart_position += TIMESTEP * self.cart_velocity;
        self.cart_velocity += TIMESTEP * linear_accel;
        self.pole_angle = normalize_angle(self.pole_angle + TIMESTEP * self.pole_angular_velocity);
        self.pole_angular_velocity += TIMESTEP * angular_accel;

        let terminated = self.out_of_bounds();
        let truncated = self.step_count == MAX_STEPS;
        if terminated || truncated {
            self.phase = Phase::Done;
            tracing::debug!(steps = self.step_count, terminated, truncated, "episode finished");
        }

        let state = self.state();
        tracing::trace!(step = self.step_count, force, ?state, "cartpole step");

        Ok(Step { state, reward: 1.0, terminated, truncated, info: Info::new() })
    }

    /// Cart and pole accelerations under `force` for the current state.
    fn accelerations(&self, force: f64) -> (f64, f64) {
        let total_mass = CART_MASS + POLE_MASS;
        let half_length = POLE_LENGTH / 2.0;
        let pole_moment = POLE_MASS * half_length;

        let cos_theta = self.pole_angle.cos();
        let sin_theta = self.pole_angle.sin();

        let temp = (force + pole_moment * self.pole_angular_velocity.powi(2) * sin_theta)
            / total_mass;
        let angular_accel = (GRAVITY * sin_theta - cos_theta * temp)
            / (half_length * (4.0 / 3.0 - POLE_MASS * cos_theta.powi(2) / total_mass));
        let linear_accel = temp - pole_moment * angular_accel * cos_theta / total_mass;

        (linear_accel, angular_accel)
    }

    fn out_of_bounds(&self) -> bool {
        self.cart_position < -X_THRESHOLD
            || self.cart_position > X_THRESHOLD
            || self.pole_angle < -THETA_THRESHOLD
            || self.pole_angle > THETA_THRESHOLD
    }

    /// Current `[cart_position, cart_velocity, pole_angle, pole_angular_velocity]`.
    #[must_use]
    pub fn state(&self) -> State {
        [self.cart_position, self.cart_velocity, self.pole_angle, self.pole_angular_velocity]
    }

    /// Steps taken since the last reset.
    #[must_use]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Whether an episode is running.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether `step` is currently refused.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Done
    }

    /// The injected noise source, for reseeding or queueing scripted draws.
    pub fn noise_mut(&mut self) -> &mut N {
        &mut self.noise
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::noise::ScriptedNoise;

    fn silent() -> CartPole<ScriptedNoise> {
        CartPole::with_noise(ScriptedNoise::silent())
    }

    #[test]
    fn starts_done() {
        let env = silent();
        assert_eq!(env.phase(), Phase::Done);
        assert!(env.is_terminated());
    }

    #[test]
    fn phase_follows_the_episode() {
        let mut env = silent();
        env.reset();
        assert_eq!(env.phase(), Phase::Active);
        assert!(!env.is_terminated());
    }

    #[test]
    fn zero_draws_keep_the_upright_equilibrium() {
        let mut env = CartPole::with_noise(ScriptedNoise::new([0.0, 0.0, 0.0, 0.0, 0.0]));
        assert_eq!(env.reset(), [0.0; 4]);

        let step = env.step(0.0).unwrap();
        assert_eq!(step.state, [0.0; 4]);
        assert_eq!(step.reward, 1.0);
        assert!(!step.terminated);
        assert!(!step.truncated);
        assert!(step.info.is_empty());
    }

    #[test]
    fn step_before_reset_is_rejected() {
        let mut env = silent();
        assert_eq!(env.step(0.0), Err(CartPoleError::IllegalState));
        assert_eq!(env.step_count(), 0);
    }

    #[test]
    fn normalize_matches_floor_modulo() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(-0.03), -0.029_999_999_999_999_805);
        assert!((normalize_angle(PI + 0.1) - (-PI + 0.1)).abs() < 1e-12);
        assert!((normalize_angle(-PI - 0.1) - (PI - 0.1)).abs() < 1e-12);
        assert!((normalize_angle(5.0 * TAU + 0.25) - 0.25).abs() < 1e-12);
        assert_eq!(normalize_angle(PI), -PI);
    }

    #[test]
    fn gravity_pulls_a_tilted_pole_further_over() {
        let mut env = CartPole::with_noise(ScriptedNoise::new([0.0, 0.0, 0.1, 0.0]));
        env.reset();
        env.step(0.0).unwrap();
        let [_, _, angle, angular_velocity] = env.step(0.0).unwrap().state;
        assert!(angular_velocity > 0.0);
        assert!(angle > 0.1);
    }

    #[test]
    fn pushing_right_accelerates_the_cart_right() {
        let mut env = silent();
        env.reset();
        let [_, velocity, _, angular_velocity] = env.step(1.0).unwrap().state;
        assert!(velocity > 0.0);
        assert!(angular_velocity < 0.0, "the pole should lag behind the cart");
    }

    #[test]
    fn reset_restarts_a_finished_episode() {
        let mut env = CartPole::with_noise(ScriptedNoise::new([0.5]));
        env.reset();
        assert!(env.step(0.0).unwrap().terminated);
        assert!(env.is_terminated());

        env.reset();
        assert_eq!(env.phase(), Phase::Active);
        assert_eq!(env.step_count(), 0);
        assert!(!env.step(0.0).unwrap().terminated);
    }
}
