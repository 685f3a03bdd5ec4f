#![deny(clippy::all, clippy::pedantic)]
//! # Cart-Pole Runtime
//!
//! Headless driver for the cart-pole simulator. Runs a number of episodes
//! under one of the built-in controllers and logs per-episode results.

mod app;
mod config;
mod policy;

use anyhow::Result;
use clap::Parser;

use crate::config::RunConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = RunConfig::parse();
    tracing::info!(?config, "starting cart-pole runtime");

    let summary = app::run(&config)?;
    tracing::info!(
        episodes = summary.episodes.len(),
        mean_return = summary.mean_return(),
        truncated = summary.truncated_count(),
        "all episodes finished"
    );

    Ok(())
}
