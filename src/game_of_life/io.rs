//! Life 1.06 file and console I/O for sparse generations

use super::{LifeGrid, Point};
use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Canonical Life 1.06 header line
pub const LIFE_HEADER: &str = "#Life 1.06";

/// Errors raised while parsing Life 1.06 coordinate lines
///
/// Parsing aborts on the first bad line; a partially parsed generation is
/// never handed to the simulation.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A non-comment line did not hold exactly two tokens.
    #[error("line {line}: expected \"x y\", found {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A coordinate token was not a 64-bit signed integer.
    #[error("line {line}: invalid coordinate {token:?}")]
    InvalidCoordinate {
        line: usize,
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Parse a generation from Life 1.06 text
///
/// Each non-empty, non-`#` line holds two whitespace-separated i64
/// coordinates. Lines starting with `#` (the `#Life 1.06` header included)
/// are skipped. A cell listed twice is absorbed by set semantics.
pub fn parse_generation(content: &str) -> Result<LifeGrid, ParseError> {
    let mut grid = LifeGrid::new();

    for (idx, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        grid.insert(parse_coordinate_line(line, idx + 1)?);
    }

    Ok(grid)
}

fn parse_coordinate_line(line: &str, number: usize) -> Result<Point, ParseError> {
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(x), Some(y), None) => Ok(Point::new(
            parse_token(x, number)?,
            parse_token(y, number)?,
        )),
        _ => Err(ParseError::MalformedLine {
            line: number,
            content: line.to_string(),
        }),
    }
}

fn parse_token(token: &str, number: usize) -> Result<i64, ParseError> {
    token.parse().map_err(|source| ParseError::InvalidCoordinate {
        line: number,
        token: token.to_string(),
        source,
    })
}

/// Load a generation from a Life 1.06 file
pub fn load_generation_from_file<P: AsRef<Path>>(path: P) -> Result<LifeGrid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read Life 1.06 file: {}", path.as_ref().display()))?;

    parse_generation(&content)
        .with_context(|| format!("Failed to parse Life 1.06 file: {}", path.as_ref().display()))
}

/// Read a generation from coordinate lines until a blank line or EOF
///
/// This is the interactive entry collaborator; each line is parsed like a
/// Life 1.06 body line, and `#` comment lines are accepted and skipped.
pub fn read_generation<R: BufRead>(reader: R) -> Result<LifeGrid> {
    let mut grid = LifeGrid::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read coordinate line")?;
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if line.starts_with('#') {
            continue;
        }
        grid.insert(parse_coordinate_line(line, idx + 1)?);
    }

    Ok(grid)
}

/// Read a generation interactively from standard input
pub fn read_generation_from_console() -> Result<LifeGrid> {
    read_generation(std::io::stdin().lock())
}

/// Render a generation as Life 1.06 text
///
/// Header line followed by one `x y` line per live cell, sorted so equal
/// generations always serialize identically.
pub fn generation_to_string(grid: &LifeGrid) -> String {
    let mut result = String::with_capacity(LIFE_HEADER.len() + 1 + grid.living_count() * 8);
    result.push_str(LIFE_HEADER);
    result.push('\n');

    for point in grid.living_cells() {
        result.push_str(&point.to_string());
        result.push('\n');
    }

    result
}

/// Save a generation to a Life 1.06 file
pub fn save_generation_to_file<P: AsRef<Path>>(grid: &LifeGrid, path: P) -> Result<()> {
    let content = generation_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write Life 1.06 file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Result-file name for a simulation started from `input`
///
/// `blinker.life` run for 2 generations becomes `blinker-Result2.life`
/// (or `.json` for JSON output) in the current directory.
pub fn result_file_path(input: &Path, generations: usize, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("board");
    PathBuf::from(format!("{}-Result{}.{}", stem, generations, extension))
}

/// Create example Life 1.06 pattern files
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Blinker (period-2 oscillator)
    let blinker = "#Life 1.06\n0 0\n1 0\n2 0\n";
    std::fs::write(dir.join("blinker.life"), blinker).context("Failed to write blinker.life")?;

    // Block (still life)
    let block = "#Life 1.06\n0 0\n1 0\n0 1\n1 1\n";
    std::fs::write(dir.join("block.life"), block).context("Failed to write block.life")?;

    // Glider
    let glider = "#Life 1.06\n1 0\n2 1\n0 2\n1 2\n2 2\n";
    std::fs::write(dir.join("glider.life"), glider).context("Failed to write glider.life")?;

    // Beacon (period-2 oscillator)
    let beacon = "#Life 1.06\n0 0\n1 0\n0 1\n3 2\n2 3\n3 3\n";
    std::fs::write(dir.join("beacon.life"), beacon).context("Failed to write beacon.life")?;

    Ok(())
}
