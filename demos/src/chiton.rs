//! Lowest total risk through a cave of chitons (2021, day 15).
//!
//! Part 1 walks the cave as given, part 2 the cave tiled five times in both
//! directions, each tile one risk level higher than the one to its left or
//! above and wrapping from 9 back to 1.

use std::fmt;
use std::io::BufRead;
use std::mem::size_of;

use aoc_dijkstra::{Dijkstra, SearchConfig, SearchError, SearchNode};
use aoc_grid::{GridError, NumericGrid};
use aoc_puzzle::Puzzle;
use log::debug;

#[derive(Debug)]
pub enum ChitonError {
    Grid(GridError),
    EmptyCave,
    Search(SearchError),
    /// The search finished without reaching the exit.
    NoPath,
}

impl fmt::Display for ChitonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "invalid cave map: {e}"),
            Self::EmptyCave => f.write_str("cave map is empty"),
            Self::Search(e) => write!(f, "search failed: {e}"),
            Self::NoPath => f.write_str("no path to the exit"),
        }
    }
}

impl std::error::Error for ChitonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::EmptyCave | Self::NoPath => None,
        }
    }
}

impl From<GridError> for ChitonError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<SearchError> for ChitonError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// The parsed cave.
#[derive(Debug, Clone)]
pub struct Chiton {
    cave: NumericGrid,
}

impl Puzzle for Chiton {
    type Output = u32;
    type Error = ChitonError;

    fn parse<R: BufRead>(input: R) -> Result<Self, ChitonError> {
        let cave = NumericGrid::from_reader(input)?;
        if cave.is_empty() {
            return Err(ChitonError::EmptyCave);
        }
        Ok(Self { cave })
    }

    fn part1(&self) -> Result<u32, ChitonError> {
        lowest_risk(&self.cave)
    }

    fn part2(&self) -> Result<u32, ChitonError> {
        lowest_risk(&tile(&self.cave, 5))
    }
}

/// Repeat `cave` `times` times in both directions.
pub fn tile(cave: &NumericGrid, times: usize) -> NumericGrid {
    let (columns, rows) = (cave.columns(), cave.rows());
    NumericGrid::from_fn(columns * times, rows * times, |x, y| {
        let shift = (x / columns + y / rows) as u32;
        let risk = u32::from(cave[(x % columns, y % rows)]) + shift;
        ((risk - 1) % 9 + 1) as u8
    })
}

/// Lowest total risk from the top left to the bottom right of `cave`. The
/// risk of the starting cell is not counted.
pub fn lowest_risk(cave: &NumericGrid) -> Result<u32, ChitonError> {
    if cave.is_empty() {
        return Err(ChitonError::EmptyCave);
    }
    // The start is never goal-tested, so a single-cell cave needs no search.
    if cave.size() == 1 {
        return Ok(0);
    }

    // Each cell is queued at most once per neighbour that improves it.
    let config = SearchConfig::new(cave.size() * 4).with_extra_mem(cave.size() * size_of::<u32>());
    let start = Position {
        cave,
        x: 0,
        y: 0,
        risk: 0,
    };
    let solution = Dijkstra::new(start, config)?.solve()?;
    debug!("chiton search on {}x{}: {}", cave.columns(), cave.rows(), solution.stats);
    solution
        .into_pair()
        .map(|(risk, _)| risk)
        .ok_or(ChitonError::NoPath)
}

/// A cell reached with a given total risk.
struct Position<'c> {
    cave: &'c NumericGrid,
    x: usize,
    y: usize,
    risk: u32,
}

impl Position<'_> {
    fn slot(&self, x: usize, y: usize) -> usize {
        y * self.cave.columns() + x
    }
}

impl SearchNode for Position<'_> {
    type Cost = u32;
    /// Lowest known risk per cell, row-major.
    type Scratch = Vec<u32>;

    fn expand(&self, best: &mut Vec<u32>, out: &mut Vec<(u32, Self)>) {
        if best.is_empty() {
            best.resize(self.cave.size(), u32::MAX);
        }
        let here = self.slot(self.x, self.y);
        if best[here] < self.risk {
            return;
        }
        best[here] = self.risk;

        for (x, y) in self.cave.cardinal_neighbors(self.x, self.y) {
            let risk = self.risk + u32::from(self.cave[(x, y)]);
            let slot = self.slot(x, y);
            if risk < best[slot] {
                best[slot] = risk;
                out.push((
                    risk,
                    Position {
                        cave: self.cave,
                        x,
                        y,
                        risk,
                    },
                ));
            }
        }
    }

    fn is_goal(&self) -> bool {
        self.x + 1 == self.cave.columns() && self.y + 1 == self.cave.rows()
    }
}
