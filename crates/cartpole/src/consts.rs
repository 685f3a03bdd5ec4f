//! Fixed physical parameters and episode limits.
//!
//! These are not configurable: every simulator instance uses the same values.

use std::f64::consts::PI;

/// Cart mass (kg).
pub const CART_MASS: f64 = 0.31;
/// Pole mass (kg).
pub const POLE_MASS: f64 = 0.055;
/// Full pole length (m).
pub const POLE_LENGTH: f64 = 0.4;

/// Gravitational acceleration (m/s²).
pub const GRAVITY: f64 = 9.8;
/// Integration timestep (s).
pub const TIMESTEP: f64 = 0.02;
/// Steps after which an episode is truncated.
pub const MAX_STEPS: u32 = 500;

/// Maximum absolute cart displacement (m) before termination.
pub const X_THRESHOLD: f64 = 1.0;
/// Maximum absolute pole angle (rad) before termination, 12 degrees.
pub const THETA_THRESHOLD: f64 = 12.0 * 2.0 * PI / 360.0;

/// Scale applied to the squashed Gaussian draw for the initial cart position.
pub const RESET_POSITION_SCALE: f64 = 4.8;
/// Standard deviation of the Gaussian behind the initial cart position.
pub const RESET_POSITION_STD_DEV: f64 = 0.01;
/// Half-width of the uniform draws for the other initial state variables.
pub const RESET_UNIFORM_BOUND: f64 = 0.05;
/// Half-width of the uniform noise added to every applied force.
pub const FORCE_NOISE_BOUND: f64 = 0.02;

/// Length of the observation vector.
pub const OBSERVATION_SIZE: usize = 4;
/// Length of the action vector.
pub const ACTION_SIZE: usize = 1;
