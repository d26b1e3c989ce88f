//! Display and output formatting utilities

use crate::config::OutputFormat;
use crate::game_of_life::{io, LifeGrid};
use anyhow::{Context, Result};
use std::path::Path;

/// Formats generations for console and file output
pub struct GenerationFormatter;

impl GenerationFormatter {
    /// Format a generation as bare coordinate lines in sorted order
    pub fn format_generation(grid: &LifeGrid) -> String {
        grid.to_string()
    }

    /// One-line run report: cell count and bounding box
    pub fn format_summary(grid: &LifeGrid, generations: usize) -> String {
        match grid.bounding_box() {
            Some((min, max)) => format!(
                "After {} generation(s): {} live cell(s) within ({}) .. ({})",
                generations,
                grid.living_count(),
                min,
                max
            ),
            None => format!("After {} generation(s): no live cells", generations),
        }
    }

    /// Save a generation in the configured output format
    pub fn save_generation<P: AsRef<Path>>(
        grid: &LifeGrid,
        path: P,
        format: &OutputFormat,
    ) -> Result<()> {
        match format {
            OutputFormat::Life => io::save_generation_to_file(grid, path),
            OutputFormat::Json => {
                let content = serde_json::to_string_pretty(&grid.living_cells())
                    .context("Failed to serialize generation")?;

                std::fs::write(&path, content).with_context(|| {
                    format!("Failed to write JSON file: {}", path.as_ref().display())
                })?;
                Ok(())
            }
        }
    }

    /// File extension matching an output format
    pub fn extension(format: &OutputFormat) -> &'static str {
        match format {
            OutputFormat::Life => "life",
            OutputFormat::Json => "json",
        }
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Point;
    use tempfile::tempdir;

    fn sample_grid() -> LifeGrid {
        [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_format_generation() {
        let formatted = GenerationFormatter::format_generation(&sample_grid());
        assert_eq!(formatted, "0 0\n1 0\n2 0\n");
    }

    #[test]
    fn test_format_summary() {
        let summary = GenerationFormatter::format_summary(&sample_grid(), 2);
        assert!(summary.contains("3 live cell(s)"));
        assert!(summary.contains("(0 0) .. (2 0)"));

        let empty = GenerationFormatter::format_summary(&LifeGrid::new(), 5);
        assert!(empty.contains("no live cells"));
    }

    #[test]
    fn test_save_generation_life_format() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.life");

        GenerationFormatter::save_generation(&sample_grid(), &path, &OutputFormat::Life).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "#Life 1.06\n0 0\n1 0\n2 0\n");
    }

    #[test]
    fn test_save_generation_json_format() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.json");

        GenerationFormatter::save_generation(&sample_grid(), &path, &OutputFormat::Json).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let points: Vec<Point> = serde_json::from_str(&content).unwrap();
        assert_eq!(points, sample_grid().living_cells());
    }

    #[test]
    fn test_extension() {
        assert_eq!(GenerationFormatter::extension(&OutputFormat::Life), "life");
        assert_eq!(GenerationFormatter::extension(&OutputFormat::Json), "json");
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
