//! Game of Life rules over the sparse unbounded grid

use super::{LifeGrid, Point};
use itertools::Itertools;
use std::collections::HashMap;

/// Game of Life rules engine
pub struct LifeRules;

impl LifeRules {
    /// Advance the grid one generation
    ///
    /// Tallies live neighbors for every cell adjacent to a live cell, then
    /// keeps exactly the cells the rules mark alive. Cells with no live
    /// neighbor never enter the tally and can never be born, so only the
    /// live set and its halo are ever touched. The input is not mutated and
    /// the result does not depend on iteration order.
    pub fn step(current: &LifeGrid) -> LifeGrid {
        let mut neighbor_counts: HashMap<Point, u8> = HashMap::new();

        for &cell in current {
            for neighbor in Self::neighbors(cell) {
                *neighbor_counts.entry(neighbor).or_insert(0) += 1;
            }
        }

        neighbor_counts
            .into_iter()
            .filter(|&(point, count)| Self::should_be_alive(current.contains(&point), count))
            .map(|(point, _)| point)
            .collect()
    }

    /// Advance the grid a fixed number of generations
    ///
    /// Zero generations returns the input unchanged. No cycle detection;
    /// oscillators and still lifes are re-stepped like anything else.
    pub fn run(mut grid: LifeGrid, generations: usize) -> LifeGrid {
        for _ in 0..generations {
            grid = Self::step(&grid);
        }
        grid
    }

    /// Whether a cell is alive next generation given its state and neighbor count
    pub fn should_be_alive(currently_alive: bool, neighbor_count: u8) -> bool {
        matches!(
            (currently_alive, neighbor_count),
            (true, 2) | (true, 3) | (false, 3)
        )
    }

    /// The Moore neighborhood of a point
    ///
    /// Yields up to 8 positions; neighbors that would fall outside the i64
    /// coordinate range are skipped.
    pub fn neighbors(point: Point) -> impl Iterator<Item = Point> {
        (-1..=1)
            .cartesian_product(-1..=1)
            .filter(|&d| d != (0, 0))
            .filter_map(move |(dx, dy)| point.offset(dx, dy))
    }

    /// Check if two generations hold the same living cells
    pub fn generations_equal(a: &LifeGrid, b: &LifeGrid) -> bool {
        a == b
    }
}
