use std::{fmt, io};

use itertools::Itertools;
use strum::Display;

use crate::{error::OutOfBounds, pos::Position};

const ALIVE_CHAR: char = 'o';
const DEAD_CHAR: char = '.';

const NEIGHBOR_RELATIVE_POSITIONS: &[[isize; 2]] = &[
    [-1, -1],
    [-1, 0],
    [-1, 1],
    [0, -1],
    [0, 1],
    [1, -1],
    [1, 0],
    [1, 1],
];

/// How the edges of a universe behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Topology {
    /// Cells past the edge don't exist.
    #[default]
    Flat,

    /// The first and last rows (and columns) are adjacent.
    Toroidal,
}

impl Topology {
    pub fn from_toroidal(toroidal: bool) -> Self {
        if toroidal {
            Self::Toroidal
        } else {
            Self::Flat
        }
    }
}

/// A fixed-size grid of alive/dead cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Universe {
    rows: usize,
    cols: usize,
    topology: Topology,
    cells: Vec<bool>,
}

impl Universe {
    /// Creates a universe with every cell dead. Zero rows or columns is allowed and yields an empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` doesn't fit in an allocation, see [`Universe::cell_count`].
    pub fn new(rows: usize, cols: usize, topology: Topology) -> Self {
        let Some(cell_count) = Self::cell_count(rows, cols) else {
            panic!("{rows}x{cols} universe is too large");
        };

        Self {
            rows,
            cols,
            topology,
            cells: vec![false; cell_count],
        }
    }

    /// Number of cells in a `rows` by `cols` grid, `None` if it overflows or exceeds `isize::MAX`.
    pub fn cell_count(rows: usize, cols: usize) -> Option<usize> {
        rows.checked_mul(cols)
            .filter(|&cell_count| cell_count <= isize::MAX as usize)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn contains<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        self.pos_to_index(pos).is_some()
    }

    /// Returns whether the cell is alive. Anything outside the grid reads as dead.
    pub fn get<P>(&self, pos: P) -> bool
    where
        P: Into<Position>,
    {
        self.pos_to_index(pos)
            .is_some_and(|index| self.cells[index])
    }

    /// Writes a cell. Writes outside the grid are ignored.
    pub fn set<P>(&mut self, pos: P, alive: bool)
    where
        P: Into<Position>,
    {
        if let Some(index) = self.pos_to_index(pos) {
            self.cells[index] = alive;
        }
    }

    pub fn set_live<P>(&mut self, pos: P)
    where
        P: Into<Position>,
    {
        self.set(pos, true);
    }

    pub fn set_dead<P>(&mut self, pos: P)
    where
        P: Into<Position>,
    {
        self.set(pos, false);
    }

    /// Marks every given cell alive, in order.
    ///
    /// Stops at the first position outside the grid and reports it. Cells written before that
    /// position stay alive; callers wanting all-or-nothing semantics should discard the universe
    /// on error.
    pub fn populate<I, P>(&mut self, cells: I) -> Result<(), OutOfBounds>
    where
        I: IntoIterator<Item = P>,
        P: Into<Position>,
    {
        for pos in cells {
            let pos = pos.into();

            if !self.contains(pos) {
                return Err(OutOfBounds {
                    position: pos,
                    rows: self.rows,
                    cols: self.cols,
                });
            }

            self.set_live(pos);
        }

        Ok(())
    }

    /// Counts the live neighbours of a cell, `0` for positions outside the grid.
    ///
    /// The surrounding 3x3 block is clipped to the grid for both topologies. A toroidal universe
    /// then adds the cell straight across the opposite edge: the row wrap applies on the first and
    /// last rows, the column wrap only on the rows in between, so a corner gets its row wrap and
    /// nothing else. Diagonal wraps are never counted.
    pub fn neighbor_count<P>(&self, pos: P) -> usize
    where
        P: Into<Position>,
    {
        let pos = pos.into();

        if !self.contains(pos) {
            return 0;
        }

        fn abs_pos(center_pos: usize, offset_pos: isize) -> Option<usize> {
            center_pos.checked_add_signed(offset_pos)
        }

        let block_neighbors = NEIGHBOR_RELATIVE_POSITIONS.iter().filter_map(|rel_pos| {
            Some(Position {
                row: abs_pos(pos.row, rel_pos[0])?,
                col: abs_pos(pos.col, rel_pos[1])?,
            })
        });

        block_neighbors
            .chain(self.wrapped_neighbors(pos))
            .filter(|&neighbor| self.get(neighbor))
            .count()
    }

    // `pos` must be inside the grid.
    fn wrapped_neighbors(&self, pos: Position) -> Vec<Position> {
        if self.topology == Topology::Flat {
            return Vec::new();
        }

        let last_row = self.rows - 1;
        let last_col = self.cols - 1;
        let mut wrapped = Vec::with_capacity(2);

        if pos.row == 0 {
            wrapped.push(Position::new(last_row, pos.col));
        }

        if pos.row == last_row {
            wrapped.push(Position::new(0, pos.col));
        }

        if pos.row != 0 && pos.row != last_row {
            if pos.col == 0 {
                wrapped.push(Position::new(pos.row, last_col));
            }

            if pos.col == last_col {
                wrapped.push(Position::new(pos.row, 0));
            }
        }

        wrapped
    }

    /// Every cell in row-major order.
    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, bool)> {
        (0..self.rows)
            .cartesian_product(0..self.cols)
            .map(Position::from)
            .zip(self.cells.iter().copied())
    }

    pub fn live_cells(&self) -> impl Iterator<Item = Position> {
        self.enumerate_cells()
            .filter_map(|(pos, alive)| alive.then_some(pos))
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|alive| **alive).count()
    }

    /// Writes the grid as one line per row, `o` for live cells and `.` for dead ones.
    pub fn render<W>(&self, mut sink: W) -> io::Result<()>
    where
        W: io::Write,
    {
        write!(sink, "{self}")
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if row >= self.rows {
            return None;
        }

        if col >= self.cols {
            return None;
        }

        Some(col + (row * self.cols))
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.cols)
                .map(|col| {
                    if self.get((row, col)) {
                        ALIVE_CHAR
                    } else {
                        DEAD_CHAR
                    }
                })
                .collect();

            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
