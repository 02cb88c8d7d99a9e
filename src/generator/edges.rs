/*
edges.rs

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

//! Start and goal of the maze.
//!
//! The start is a cell of the first column and the goal is a cell of the last column. The
//! player enters the maze through the west border of the start cell, and leaves it through the
//! east border of the goal cell.

use log::debug;
use rand::Rng;

use super::grid::{Grid, Position};

/// Entry and exit of the maze.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edges {
    /// Cell in the first column where the player starts.
    pub start: Position,

    /// Cell in the last column that the player must reach.
    pub goal: Position,
}

/// Select random edges by using the thread random generator.
pub fn pick_edges(grid: &Grid) -> Edges {
    pick_edges_with_rng(grid, &mut rand::rng())
}

/// Select random edges for the given grid.
///
/// The rows of the start and the goal are drawn independently. For a grid with a single column,
/// the start and the goal can be the same cell.
pub fn pick_edges_with_rng<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Edges {
    let edges = Edges {
        start: Position::new(rng.random_range(0..grid.rows()), 0),
        goal: Position::new(rng.random_range(0..grid.rows()), grid.cols() - 1),
    };
    debug!("Start = {}  Goal = {}", edges.start, edges.goal);
    edges
}
