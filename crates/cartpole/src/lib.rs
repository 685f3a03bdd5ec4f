#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Cart-Pole Simulator
//!
//! A stateful simulator of the classic cart-pole benchmark: a cart moving on a
//! bounded track carrying an inverted pole hinged at its base, driven by a
//! horizontal force.
//!
//! The simulator integrates the nonlinear equations of motion one fixed
//! timestep at a time with explicit Euler updates and reports whether the
//! episode ended because the cart or pole left its safety bounds
//! (termination) or because the step limit was reached (truncation).
//!
//! ## Key Components
//!
//! -   **Simulator:** [`CartPole`] in the [`cartpole`] module owns the
//!     dynamical state and exposes [`CartPole::reset`] and
//!     [`CartPole::step`].
//! -   **Noise:** every reset draws a random initial state and every step
//!     perturbs the applied force. Randomness comes from an injected
//!     [`NoiseSource`]; [`FastrandNoise`] is the seedable default and
//!     [`ScriptedNoise`] replays a fixed sequence of draws.
//! -   **Constants:** the physical parameters and thresholds live in
//!     [`consts`] and never change.
//!
//! ## Usage
//!
//! ```rust
//! use cartpole::CartPole;
//!
//! let mut env = CartPole::with_seed(7);
//! let mut obs = env.reset();
//! loop {
//!     let action = (obs[2] * 10.0).clamp(-1.0, 1.0);
//!     let step = env.step(action)?;
//!     obs = step.state;
//!     if step.done() {
//!         break;
//!     }
//! }
//! # Ok::<(), cartpole::CartPoleError>(())
//! ```

pub mod cartpole;
pub mod consts;
pub mod error;
pub mod noise;
pub mod types;

pub use cartpole::CartPole;
pub use consts::{THETA_THRESHOLD, X_THRESHOLD};
pub use error::CartPoleError;
pub use noise::{FastrandNoise, NoiseSource, ScriptedNoise};
pub use types::{Info, Phase, State, Step};
