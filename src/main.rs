//! Main CLI application for the unbounded Game of Life runner

use anyhow::{Context, Result};
use clap::Parser;
use game_of_life_unbounded::{
    config::{CliOverrides, Settings},
    game_of_life::{io, LifeGrid, LifeRules},
    utils::{ColorOutput, GenerationFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_unbounded")]
#[command(about = "Conway's Game of Life on the unbounded 64-bit signed integer plane")]
#[command(version = "0.1.0")]
struct Cli {
    /// Number of generations to simulate
    #[arg(short = 'n', long = "numberOfGens")]
    number_of_gens: Option<usize>,

    /// Life 1.06 pattern file (console input is read when omitted)
    #[arg(short = 'f', long = "filename")]
    filename: Option<PathBuf>,

    /// Life 1.06 solution file to compare the final board against
    #[arg(short = 's', long = "solutionFilename")]
    solution_filename: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut settings = match &cli.config {
        Some(path) if path.exists() => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        Some(path) => {
            println!(
                "{}",
                ColorOutput::warning(&format!(
                    "Config file {} not found, using defaults",
                    path.display()
                ))
            );
            Settings::default()
        }
        None => Settings::default(),
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        generations: cli.number_of_gens,
        pattern_file: cli.filename,
        solution_file: cli.solution_filename,
    };
    settings.merge_with_cli(&cli_overrides);

    if cli.verbose {
        println!("Configuration:");
        println!("  Generations: {}", settings.simulation.generations);
        match &settings.input.pattern_file {
            Some(path) => println!("  Pattern file: {}", path.display()),
            None => println!("  Pattern file: (console input)"),
        }
        if let Some(path) = &settings.input.solution_file {
            println!("  Solution file: {}", path.display());
        }
        println!();
    }

    // Validate settings
    settings
        .validate()
        .context("Configuration validation failed")?;

    run_simulation(&settings)
}

fn run_simulation(settings: &Settings) -> Result<()> {
    // Load the initial board
    let initial = match &settings.input.pattern_file {
        Some(path) => {
            println!(
                "{}",
                ColorOutput::info(&format!(
                    "Reading live cells from Life 1.06 file: {}",
                    path.display()
                ))
            );
            io::load_generation_from_file(path)?
        }
        None => {
            println!(
                "{}",
                ColorOutput::info(
                    "Reading live cells from console input (blank line ends entry):"
                )
            );
            io::read_generation_from_console()?
        }
    };

    let generations = settings.simulation.generations;
    println!(
        "Running Game of Life through {} generation(s)...",
        generations
    );

    let final_generation = LifeRules::run(initial, generations);
    println!(
        "{}",
        GenerationFormatter::format_summary(&final_generation, generations)
    );

    write_result(settings, &final_generation)?;
    compare_with_solution(settings, &final_generation)?;

    Ok(())
}

/// Write the final board next to the working directory, or print it when the
/// run started from console input
fn write_result(settings: &Settings, final_generation: &LifeGrid) -> Result<()> {
    match &settings.input.pattern_file {
        Some(path) if settings.output.write_result_file => {
            let extension = GenerationFormatter::extension(&settings.output.format);
            let result_path =
                io::result_file_path(path, settings.simulation.generations, extension);

            GenerationFormatter::save_generation(
                final_generation,
                &result_path,
                &settings.output.format,
            )?;
            println!(
                "{}",
                ColorOutput::success(&format!(
                    "Wrote final board to file: {}",
                    result_path.display()
                ))
            );
        }
        _ => {
            print!("{}", io::generation_to_string(final_generation));
        }
    }

    Ok(())
}

fn compare_with_solution(settings: &Settings, final_generation: &LifeGrid) -> Result<()> {
    let Some(solution_path) = &settings.input.solution_file else {
        return Ok(());
    };

    let solution = io::load_generation_from_file(solution_path)
        .with_context(|| format!("Failed to load solution from {}", solution_path.display()))?;

    if LifeRules::generations_equal(final_generation, &solution) {
        println!(
            "{}",
            ColorOutput::success("Test Passed: Final board matches expected solution.")
        );
    } else {
        println!(
            "{}",
            ColorOutput::error("Test Failed: Final board does not match expected solution.")
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "game_of_life_unbounded",
            "--numberOfGens",
            "5",
            "--filename",
            "blinker.life",
            "--solutionFilename",
            "expected.life",
        ])
        .unwrap();

        assert_eq!(cli.number_of_gens, Some(5));
        assert_eq!(cli.filename, Some(PathBuf::from("blinker.life")));
        assert_eq!(cli.solution_filename, Some(PathBuf::from("expected.life")));
    }

    #[test]
    fn test_cli_short_flags() {
        let cli =
            Cli::try_parse_from(["game_of_life_unbounded", "-n", "2", "-f", "in.life"]).unwrap();
        assert_eq!(cli.number_of_gens, Some(2));
        assert_eq!(cli.filename, Some(PathBuf::from("in.life")));
        assert_eq!(cli.solution_filename, None);
    }

    #[test]
    fn test_cli_rejects_negative_generations() {
        let result = Cli::try_parse_from(["game_of_life_unbounded", "--numberOfGens", "-3"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["game_of_life_unbounded"]).unwrap();
        assert_eq!(cli.number_of_gens, None);
        assert_eq!(cli.filename, None);
        assert_eq!(cli.solution_filename, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_run_simulation_writes_result_file() {
        let temp_dir = tempdir().unwrap();
        let pattern = temp_dir.path().join("block.life");
        std::fs::write(&pattern, "#Life 1.06\n0 0\n1 0\n0 1\n1 1\n").unwrap();

        let mut settings = Settings::default();
        settings.simulation.generations = 4;
        settings.input.pattern_file = Some(pattern);

        // Result files land in the working directory; point it at the tempdir
        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(temp_dir.path()).unwrap();
        let result = run_simulation(&settings);
        std::env::set_current_dir(original_dir).unwrap();
        result.unwrap();

        let written = temp_dir.path().join("block-Result4.life");
        assert!(written.exists());
        let content = std::fs::read_to_string(written).unwrap();
        assert_eq!(content, "#Life 1.06\n0 0\n0 1\n1 0\n1 1\n");
    }
}
