//! Conway's Game of Life on the unbounded 64-bit signed integer plane
//!
//! This library runs sparse Game of Life simulations: a generation is a set
//! of live-cell coordinates, and stepping only ever touches live cells and
//! their neighbors, so the full i64 coordinate range is usable without a
//! dense grid.

pub mod config;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{LifeGrid, LifeRules, Point};

use anyhow::{Context, Result};

/// Run a configured simulation from its pattern file and return the final generation
pub fn run_from_settings(settings: &Settings) -> Result<LifeGrid> {
    let pattern_file = settings
        .input
        .pattern_file
        .as_ref()
        .context("No pattern file configured")?;

    let initial = game_of_life::load_generation_from_file(pattern_file)?;
    Ok(LifeRules::run(initial, settings.simulation.generations))
}
