//! Command-line runner for two-part puzzles.
//!
//! A puzzle implements [`Puzzle`]: it is parsed from its input once and then
//! answers part 1 and part 2. [`puzzle_main!`] turns such a type into a
//! binary that understands
//!
//! ```text
//! aoc-<year>-<day> [-f <FILE>] [-1] [-2] [-v]
//! ```
//!
//! reads the input file (default `input.txt`), runs the requested parts and
//! prints each result with its running time.

mod error;
mod runner;

use std::fmt;
use std::io::BufRead;

pub use error::PuzzleError;
pub use runner::{PuzzleArgs, command, run_puzzle, run_puzzle_from, run_with};

/// A two-part puzzle.
pub trait Puzzle: Sized {
    /// Answer type of both parts.
    type Output: fmt::Display;
    /// Error raised while parsing or solving.
    type Error: std::error::Error + 'static;

    /// Build the puzzle from its input.
    fn parse<R: BufRead>(input: R) -> Result<Self, Self::Error>;

    fn part1(&self) -> Result<Self::Output, Self::Error>;

    fn part2(&self) -> Result<Self::Output, Self::Error>;
}

/// Generate a `main` running `$puzzle` for the given year and day.
///
/// ```ignore
/// aoc_puzzle::puzzle_main!(2021, 15, Chiton);
/// ```
#[macro_export]
macro_rules! puzzle_main {
    ($year:expr, $day:expr, $puzzle:ty) => {
        fn main() -> ::std::process::ExitCode {
            $crate::run_puzzle::<$puzzle>($year, $day)
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! assert_part {
    ($part:ident, $puzzle:ty, $input:expr, $expected:expr) => {{
        let puzzle = <$puzzle as $crate::Puzzle>::parse(::std::io::Cursor::new($input))
            .expect("puzzle input should parse");
        let result =
            <$puzzle as $crate::Puzzle>::$part(&puzzle).expect("puzzle part should succeed");
        assert_eq!(result, $expected);
    }};
}

/// Assert that part 1 of `$puzzle` on `$input` yields `$expected`.
#[macro_export]
macro_rules! assert_part1 {
    ($puzzle:ty, $input:expr, $expected:expr) => {
        $crate::assert_part!(part1, $puzzle, $input, $expected)
    };
}

/// Assert that part 2 of `$puzzle` on `$input` yields `$expected`.
#[macro_export]
macro_rules! assert_part2 {
    ($puzzle:ty, $input:expr, $expected:expr) => {
        $crate::assert_part!(part2, $puzzle, $input, $expected)
    };
}
