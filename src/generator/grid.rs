/*
grid.rs

Copyright 2025 Hervé Quatremain

This file is part of Labyrinthe.

Labyrinthe is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Labyrinthe is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Labyrinthe. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Grid of cells and their walls.
//!
//! The [`Grid`] object stores the cells in a flat vector, row after row.
//! Each cell only stores its south and east walls. The north wall of a cell is the south wall of
//! the cell above it, and its west wall is the east wall of the cell on its left.

use std::collections::HashSet;
use std::error::Error;
use std::fmt;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// The grid must have at least one row and one column.
    InvalidDimensions { rows: i64, cols: i64 },

    /// The position is not inside the grid.
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid maze dimensions {rows}x{cols}: rows and columns must be positive"
            ),
            GridError::OutOfBounds {
                position,
                rows,
                cols,
            } => write!(f, "Position {position} is outside the {rows}x{cols} maze"),
        }
    }
}

impl Error for GridError {}

/// Position of a cell in the grid.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Connected component a cell belongs to while the maze is being generated.
///
/// Each cell of a new grid gets its own tag. When two components are merged, all the cells of
/// one component take the tag of the other one. Once the maze is complete, the tags do not carry
/// any meaning anymore.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PartitionTag(usize);

impl PartitionTag {
    /// Tag that all the cells receive once the maze is complete.
    pub const SETTLED: PartitionTag = PartitionTag(usize::MAX);
}

/// Cell of the grid.
#[derive(Debug, Copy, Clone)]
pub struct Cell {
    /// Whether the wall between the cell and the cell below is present.
    pub south_wall: bool,

    /// Whether the wall between the cell and the cell on its right is present.
    pub east_wall: bool,

    /// Component the cell belongs to during generation.
    pub(crate) label: PartitionTag,
}

/// Rectangular grid of cells.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,

    /// Cells, row-major.
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a [`Grid`] object with all its walls present.
    ///
    /// Each cell receives a distinct [`PartitionTag`], numbered row after row.
    ///
    /// # Errors
    ///
    /// The method returns [`GridError::InvalidDimensions`] when `rows` or `cols` is zero, or when
    /// the number of cells does not fit in memory.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let num_cells: usize = match rows.checked_mul(cols) {
            Some(n) if n > 0 => n,
            _ => {
                return Err(GridError::InvalidDimensions {
                    rows: i64::try_from(rows).unwrap_or(i64::MAX),
                    cols: i64::try_from(cols).unwrap_or(i64::MAX),
                });
            }
        };
        let cells: Vec<Cell> = (0..num_cells)
            .map(|index| Cell {
                south_wall: true,
                east_wall: true,
                label: PartitionTag(index),
            })
            .collect();
        Ok(Self { rows, cols, cells })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.cols
    }

    /// Return [`GridError::OutOfBounds`] if the position is not inside the grid.
    pub fn check(&self, position: Position) -> Result<(), GridError> {
        if self.contains(position) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                position,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Return the cell at the given position.
    pub fn cell(&self, position: Position) -> Result<&Cell, GridError> {
        self.check(position)?;
        Ok(&self.cells[self.index(position)])
    }

    /// Whether the passage from the cell to the cell below is open.
    pub fn south_wall_open(&self, position: Position) -> Result<bool, GridError> {
        Ok(!self.cell(position)?.south_wall)
    }

    /// Whether the passage from the cell to the cell on its right is open.
    pub fn east_wall_open(&self, position: Position) -> Result<bool, GridError> {
        Ok(!self.cell(position)?.east_wall)
    }

    /// Number of walls that have been removed.
    pub fn open_walls(&self) -> usize {
        self.cells
            .iter()
            .map(|c| usize::from(!c.south_wall) + usize::from(!c.east_wall))
            .sum()
    }

    /// Iterate over all the positions, row after row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    pub(crate) fn index(&self, position: Position) -> usize {
        position.row * self.cols + position.col
    }

    pub(crate) fn position(&self, index: usize) -> Position {
        Position::new(index / self.cols, index % self.cols)
    }

    pub(crate) fn label(&self, position: Position) -> PartitionTag {
        self.cells[self.index(position)].label
    }

    /// Whether all the cells belong to the same component.
    pub(crate) fn is_single_component(&self) -> bool {
        let first: PartitionTag = self.cells[0].label;
        self.cells.iter().all(|c| c.label == first)
    }

    /// Number of distinct tags in the grid.
    pub(crate) fn count_components(&self) -> usize {
        self.cells
            .iter()
            .map(|c| c.label)
            .collect::<HashSet<PartitionTag>>()
            .len()
    }

    /// Give the `new` tag to every cell that has the `old` tag.
    ///
    /// All the cells are scanned. Returns the number of relabeled cells.
    pub(crate) fn relabel(&mut self, new: PartitionTag, old: PartitionTag) -> usize {
        let mut count: usize = 0;
        for cell in self.cells.iter_mut().filter(|c| c.label == old) {
            cell.label = new;
            count += 1;
        }
        count
    }

    /// Remove the wall between two adjacent cells.
    ///
    /// The wall is stored in the upper cell for a vertical pair, and in the left cell for a
    /// horizontal pair.
    pub(crate) fn open_wall(&mut self, cell1: Position, cell2: Position) {
        if cell1.row == cell2.row {
            let left: Position = if cell1.col < cell2.col { cell1 } else { cell2 };
            let i: usize = self.index(left);
            self.cells[i].east_wall = false;
        } else {
            let upper: Position = if cell1.row < cell2.row { cell1 } else { cell2 };
            let i: usize = self.index(upper);
            self.cells[i].south_wall = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_has_all_walls() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.open_walls(), 0);
        for p in grid.positions() {
            let cell = grid.cell(p).unwrap();
            assert!(cell.south_wall);
            assert!(cell.east_wall);
        }
    }

    #[test]
    fn test_new_grid_labels_are_row_major() {
        let grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.label(Position::new(0, 0)), PartitionTag(0));
        assert_eq!(grid.label(Position::new(1, 2)), PartitionTag(6));
        assert_eq!(grid.label(Position::new(2, 3)), PartitionTag(11));
        assert!(!grid.is_single_component());
        assert_eq!(grid.count_components(), 12);
    }

    #[test]
    fn test_large_grid_labels_are_distinct() {
        let grid = Grid::new(64, 64).unwrap();
        assert_eq!(grid.count_components(), 64 * 64);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 3).unwrap_err(),
            GridError::InvalidDimensions { rows: 0, cols: 3 }
        );
        assert!(Grid::new(3, 0).is_err());
    }

    #[test]
    fn test_overflowing_dimensions() {
        assert_eq!(
            Grid::new(usize::MAX, 2).unwrap_err(),
            GridError::InvalidDimensions {
                rows: i64::MAX,
                cols: 2
            }
        );
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(grid.cell(Position::new(1, 1)).is_ok());
        assert_eq!(
            grid.cell(Position::new(2, 0)).unwrap_err(),
            GridError::OutOfBounds {
                position: Position::new(2, 0),
                rows: 2,
                cols: 2
            }
        );
        assert!(grid.south_wall_open(Position::new(0, 2)).is_err());
    }

    #[test]
    fn test_open_wall_owner() {
        let mut grid = Grid::new(2, 2).unwrap();

        // Horizontal pair: the left cell owns the wall
        grid.open_wall(Position::new(0, 1), Position::new(0, 0));
        assert!(grid.east_wall_open(Position::new(0, 0)).unwrap());
        assert!(!grid.east_wall_open(Position::new(0, 1)).unwrap());

        // Vertical pair: the upper cell owns the wall
        grid.open_wall(Position::new(1, 1), Position::new(0, 1));
        assert!(grid.south_wall_open(Position::new(0, 1)).unwrap());
        assert!(!grid.south_wall_open(Position::new(1, 1)).unwrap());

        assert_eq!(grid.open_walls(), 2);
    }

    #[test]
    fn test_relabel() {
        let mut grid = Grid::new(1, 3).unwrap();
        let tag0 = grid.label(Position::new(0, 0));
        let tag2 = grid.label(Position::new(0, 2));
        assert_eq!(grid.relabel(tag0, tag2), 1);
        assert_eq!(grid.label(Position::new(0, 2)), tag0);
        assert_eq!(grid.relabel(PartitionTag::SETTLED, tag0), 2);
        assert!(!grid.is_single_component());
    }
}
