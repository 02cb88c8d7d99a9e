/*
generator.rs

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

//! Generate random mazes and answer navigation queries.
//!
//! A maze is built in three steps:
//!
//! * An empty [`grid::Grid`] object is created with [`grid::Grid::new`]. All the walls are
//!   present, and each cell is in its own component.
//!
//! * A [`spanning_tree::Generator`] object removes walls with its
//!   [`spanning_tree::Generator::run`] method until all the cells are connected.
//!   There are no loops in the result: exactly one path exists between any two cells.
//!
//! * [`edges::pick_edges`] selects the start, in the first column, and the goal, in the last
//!   column.
//!
//! Once the maze is complete, the grid is not modified anymore.
//! [`navigator::legal_moves`] returns the directions in which the player can move from a cell.
//! To get a new maze, build a new grid and run the generator again.

pub mod edges;
pub mod grid;
pub mod navigator;
pub mod spanning_tree;
