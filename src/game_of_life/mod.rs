//! Game of Life core functionality

pub mod grid;
pub mod rules;
pub mod io;

pub use grid::{LifeGrid, Point};
pub use rules::LifeRules;
pub use io::{
    load_generation_from_file, parse_generation, read_generation, read_generation_from_console,
    save_generation_to_file, ParseError,
};
