//! # Noise Sources
//!
//! The simulator draws its initial state and its per-step force perturbation
//! from a [`NoiseSource`]. Injecting the source keeps the simulator free of
//! global RNG state: seed a [`FastrandNoise`] for reproducible runs, or use a
//! [`ScriptedNoise`] to replay an exact sequence of draws.

use std::collections::VecDeque;
use std::f64::consts::TAU;

/// Supplier of the random draws consumed by [`crate::CartPole`].
pub trait NoiseSource {
    /// Sample from a normal distribution with the given mean and standard deviation.
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64;

    /// Sample uniformly from the interval `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<N: NoiseSource + ?Sized> NoiseSource for &mut N {
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        (**self).gauss(mean, std_dev)
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }
}

/// Pseudo-random noise backed by [`fastrand::Rng`].
///
/// Gaussian samples come from the Box-Muller transform. Each transform yields
/// two independent standard normals; the second is cached and consumed by the
/// next `gauss` call.
#[derive(Debug, Clone)]
pub struct FastrandNoise {
    rng: fastrand::Rng,
    spare_normal: Option<f64>,
}

impl FastrandNoise {
    /// Entropy-seeded source.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new(), spare_normal: None }
    }

    /// Deterministic source: equal seeds produce equal draw sequences.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed), spare_normal: None }
    }

    /// Reseed in place, discarding any cached normal sample.
    pub fn reseed(&mut self, seed: u64) {
        self.rng.seed(seed);
        self.spare_normal = None;
    }

    fn standard_normal(&mut self) -> f64 {
        if let Some(z) = self.spare_normal.take() {
            return z;
        }
        // 1 - u keeps the radius argument in (0, 1] so ln never sees zero.
        let u1 = 1.0 - self.rng.f64();
        let u2 = self.rng.f64();
        let radius = (-2.0 * u1.ln()).sqrt();
        let (sin, cos) = (TAU * u2).sin_cos();
        self.spare_normal = Some(radius * sin);
        radius * cos
    }
}

impl Default for FastrandNoise {
    fn default() -> Self {
        Self::new()
    }
}

impl NoiseSource for FastrandNoise {
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.standard_normal()
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.rng.f64()
    }
}

/// Replays a fixed sequence of raw draws.
///
/// Queued values are returned verbatim regardless of the requested
/// distribution parameters. Once the queue is empty, `gauss` returns the mean
/// and `uniform` returns the midpoint of its interval, so an exhausted script
/// behaves like a noise-free source.
#[derive(Debug, Clone, Default)]
pub struct ScriptedNoise {
    draws: VecDeque<f64>,
}

impl ScriptedNoise {
    #[must_use]
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self { draws: draws.into_iter().collect() }
    }

    /// Source that never perturbs anything.
    #[must_use]
    pub fn silent() -> Self {
        Self::default()
    }

    /// Queue more draws after the existing ones.
    pub fn extend(&mut self, draws: impl IntoIterator<Item = f64>) {
        self.draws.extend(draws);
    }

    /// Draws still queued.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl NoiseSource for ScriptedNoise {
    fn gauss(&mut self, mean: f64, _std_dev: f64) -> f64 {
        self.draws.pop_front().unwrap_or(mean)
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.draws.pop_front().unwrap_or((low + high) / 2.0)
    }
}
