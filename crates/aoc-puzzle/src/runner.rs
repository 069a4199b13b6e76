use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{CommandFactory, FromArgMatches, Parser};
use log::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{Puzzle, PuzzleError};

/// Command-line arguments of a puzzle binary.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct PuzzleArgs {
    /// Input file.
    #[arg(short, long, default_value = "input.txt")]
    pub file: PathBuf,
    /// Run part 1.
    #[arg(short = '1', long = "part1")]
    pub part1: bool,
    /// Run part 2.
    #[arg(short = '2', long = "part2")]
    pub part2: bool,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    #[arg(short, long)]
    pub verbose: bool,
}

/// The clap command for puzzle `day` of `year`.
pub fn command(year: u16, day: u8) -> clap::Command {
    PuzzleArgs::command()
        .name(format!("aoc-{year}-{day}"))
        .about(format!("AoC puzzle {day} ({year})"))
}

/// Run `P` with the process arguments.
pub fn run_puzzle<P: Puzzle>(year: u16, day: u8) -> ExitCode {
    run_puzzle_from::<P, _, _>(year, day, std::env::args_os())
}

/// Run `P` with explicit arguments; the first one is the program name.
pub fn run_puzzle_from<P, I, T>(year: u16, day: u8, args: I) -> ExitCode
where
    P: Puzzle,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match command(year, day)
        .try_get_matches_from(args)
        .and_then(|m| PuzzleArgs::from_arg_matches(&m))
    {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too, with exit code 0.
            let _ = e.print();
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    init_logging(args.verbose);

    match run_with::<P, _>(&args, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    // A subscriber may already be installed when running under a harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Parse the input named by `args` and run the requested parts, writing
/// results to `out`.
pub fn run_with<P: Puzzle, W: Write>(args: &PuzzleArgs, out: &mut W) -> Result<(), PuzzleError> {
    let file = File::open(&args.file).map_err(|source| PuzzleError::OpenInput {
        path: args.file.clone(),
        source,
    })?;
    debug!("reading puzzle input from {}", args.file.display());

    let puzzle = P::parse(BufReader::new(file)).map_err(|e| PuzzleError::Parse(Box::new(e)))?;

    if args.part1 {
        run_part(1, out, || puzzle.part1())?;
    }
    if args.part2 {
        run_part(2, out, || puzzle.part2())?;
    }
    Ok(())
}

fn run_part<O, E, W>(
    part: u8,
    out: &mut W,
    solve: impl FnOnce() -> Result<O, E>,
) -> Result<(), PuzzleError>
where
    O: std::fmt::Display,
    E: std::error::Error + 'static,
    W: Write,
{
    writeln!(out, "running part {part} ...")?;
    let start = Instant::now();
    let result = solve().map_err(|e| PuzzleError::Part {
        part,
        source: Box::new(e),
    })?;
    let elapsed = start.elapsed();
    writeln!(out, "part {part} result: {result}")?;
    writeln!(out, "part {part} took {elapsed:.2?}")?;
    info!("part {part} solved in {elapsed:.2?}");
    Ok(())
}
