//! Sparse grid representation for Game of Life on the unbounded plane

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A cell position on the unbounded 64-bit signed integer plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Create a new point
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Offset this point by (dx, dy)
    ///
    /// Returns `None` when either coordinate would leave the 64-bit signed
    /// range; such positions do not exist on the plane.
    pub fn offset(&self, dx: i64, dy: i64) -> Option<Point> {
        Some(Point {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// One generation of live cells, stored sparsely
///
/// The grid is conceptually the full i64 x i64 plane; only live cells are
/// materialized. Equality is set equality over live cells. Duplicate
/// insertions are absorbed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeGrid {
    pub cells: HashSet<Point>,
}

impl LifeGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a cell as alive
    pub fn insert(&mut self, point: Point) {
        self.cells.insert(point);
    }

    /// Check whether a cell is alive
    pub fn contains(&self, point: &Point) -> bool {
        self.cells.contains(point)
    }

    /// Get all living cell coordinates in sorted order
    pub fn living_cells(&self) -> Vec<Point> {
        self.cells.iter().copied().sorted().collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Smallest and largest corner of the rectangle enclosing all live cells,
    /// or `None` for an empty grid
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        use itertools::MinMaxResult::*;

        let (min_x, max_x) = match self.cells.iter().map(|p| p.x).minmax() {
            NoElements => return None,
            OneElement(x) => (x, x),
            MinMax(lo, hi) => (lo, hi),
        };
        let (min_y, max_y) = match self.cells.iter().map(|p| p.y).minmax() {
            NoElements => return None,
            OneElement(y) => (y, y),
            MinMax(lo, hi) => (lo, hi),
        };

        Some((Point::new(min_x, min_y), Point::new(max_x, max_y)))
    }
}

impl FromIterator<Point> for LifeGrid {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LifeGrid {
    type Item = &'a Point;
    type IntoIter = std::collections::hash_set::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for LifeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for point in self.cells.iter().sorted() {
            writeln!(f, "{}", point)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = LifeGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.living_count(), 0);
        assert_eq!(grid.bounding_box(), None);
    }

    #[test]
    fn test_duplicate_insertions_absorbed() {
        let mut grid = LifeGrid::new();
        grid.insert(Point::new(3, -7));
        grid.insert(Point::new(3, -7));
        assert_eq!(grid.living_count(), 1);
        assert!(grid.contains(&Point::new(3, -7)));
    }

    #[test]
    fn test_set_equality_ignores_insertion_order() {
        let a: LifeGrid = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
            .into_iter()
            .collect();
        let b: LifeGrid = [Point::new(2, 0), Point::new(0, 0), Point::new(1, 0)]
            .into_iter()
            .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_living_cells_sorted() {
        let grid: LifeGrid = [Point::new(5, 5), Point::new(-2, 9), Point::new(5, -1)]
            .into_iter()
            .collect();
        assert_eq!(
            grid.living_cells(),
            vec![Point::new(-2, 9), Point::new(5, -1), Point::new(5, 5)]
        );
    }

    #[test]
    fn test_bounding_box() {
        let grid: LifeGrid = [Point::new(-4, 2), Point::new(10, -3), Point::new(0, 0)]
            .into_iter()
            .collect();
        assert_eq!(
            grid.bounding_box(),
            Some((Point::new(-4, -3), Point::new(10, 2)))
        );
    }

    #[test]
    fn test_offset_at_i64_boundary() {
        let corner = Point::new(i64::MAX, i64::MAX);
        assert_eq!(corner.offset(1, 0), None);
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(
            corner.offset(-1, -1),
            Some(Point::new(i64::MAX - 1, i64::MAX - 1))
        );

        let origin = Point::new(i64::MIN, 0);
        assert_eq!(origin.offset(-1, 0), None);
        assert_eq!(origin.offset(1, 0), Some(Point::new(i64::MIN + 1, 0)));
    }

    #[test]
    fn test_display_sorted_coordinate_lines() {
        let grid: LifeGrid = [Point::new(1, 0), Point::new(0, 0), Point::new(2, 0)]
            .into_iter()
            .collect();
        assert_eq!(grid.to_string(), "0 0\n1 0\n2 0\n");
    }
}
