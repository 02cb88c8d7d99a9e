/*
navigator.rs

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

//! Moves inside a generated maze.
//!
//! The functions of this module only read the [`Grid`] object. They can be called any number of
//! times, in any order.

use std::collections::BTreeMap;
use std::fmt;

use super::grid::{Grid, GridError, Position};

/// Directions in which the player can move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Direction that brings the player back.
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Direction for a key, or None if the key is not a direction.
    ///
    /// `o` (ouest) is accepted for the west direction.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'n' => Some(Direction::North),
            's' => Some(Direction::South),
            'e' => Some(Direction::East),
            'w' | 'o' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::South => write!(f, "south"),
            Direction::East => write!(f, "east"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// Legal moves from a cell, with the destination cell for each direction.
pub type Moves = BTreeMap<Direction, Position>;

/// Return the cells next to the given cell, in the order west, east, north, south.
///
/// Corner cells have two neighbors, border cells have three.
pub fn adjacent_cells(grid: &Grid, position: Position) -> Vec<Position> {
    let mut positions: Vec<Position> = Vec::with_capacity(4);

    if position.col > 0 {
        positions.push(Position::new(position.row, position.col - 1));
    }
    if position.col + 1 < grid.cols() {
        positions.push(Position::new(position.row, position.col + 1));
    }
    if position.row > 0 {
        positions.push(Position::new(position.row - 1, position.col));
    }
    if position.row + 1 < grid.rows() {
        positions.push(Position::new(position.row + 1, position.col));
    }
    positions
}

/// Return the directions in which the player can move from the given position.
///
/// # Errors
///
/// The function returns [`GridError::OutOfBounds`] if the position is not inside the grid.
pub fn legal_moves(grid: &Grid, position: Position) -> Result<Moves, GridError> {
    let current = grid.cell(position)?;
    let mut moves: Moves = Moves::new();

    for cell in adjacent_cells(grid, position) {
        let neighbor = grid.cell(cell)?;
        let direction: Option<Direction> = if cell.row > position.row {
            (!current.south_wall).then_some(Direction::South)
        } else if cell.row < position.row {
            // The wall is stored in the cell above
            (!neighbor.south_wall).then_some(Direction::North)
        } else if cell.col > position.col {
            (!current.east_wall).then_some(Direction::East)
        } else {
            // The wall is stored in the cell on the left
            (!neighbor.east_wall).then_some(Direction::West)
        };

        if let Some(d) = direction {
            moves.insert(d, cell);
        }
    }
    Ok(moves)
}
