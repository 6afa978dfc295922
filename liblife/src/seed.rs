//! The initial-state text format: `rows cols` followed by `row col` pairs of live cells, all
//! whitespace separated.

use std::str::FromStr;

use itertools::Itertools;
use tracing::debug;

use crate::{
    error::SeedError,
    pos::Position,
    universe::{Topology, Universe},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seed {
    pub rows: usize,
    pub cols: usize,
    pub live_cells: Vec<Position>,
}

impl Seed {
    /// Builds a universe with the seed's live cells. Fails if any cell lies outside the grid.
    pub fn universe(&self, topology: Topology) -> Result<Universe, SeedError> {
        if Universe::cell_count(self.rows, self.cols).is_none() {
            return Err(SeedError::TooLarge {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let mut universe = Universe::new(self.rows, self.cols, topology);
        universe.populate(self.live_cells.iter().copied())?;

        debug!(
            rows = self.rows,
            cols = self.cols,
            live = self.live_cells.len(),
            %topology,
            "seeded universe"
        );

        Ok(universe)
    }
}

impl FromStr for Seed {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut numbers = s.split_whitespace().map(parse_number);

        let rows = numbers.next().ok_or(SeedError::MissingDimensions)??;
        let cols = numbers.next().ok_or(SeedError::MissingDimensions)??;

        if Universe::cell_count(rows, cols).is_none() {
            return Err(SeedError::TooLarge { rows, cols });
        }

        let numbers = numbers.collect::<Result<Vec<_>, _>>()?;

        if numbers.len() % 2 != 0
            && let Some(&row) = numbers.last()
        {
            return Err(SeedError::UnpairedCoordinate { row });
        }

        let live_cells = numbers
            .into_iter()
            .tuples::<(usize, usize)>()
            .map(Position::from)
            .collect();

        Ok(Self {
            rows,
            cols,
            live_cells,
        })
    }
}

fn parse_number(token: &str) -> Result<usize, SeedError> {
    token.parse().map_err(|_| SeedError::Malformed {
        token: token.to_owned(),
    })
}
