/*
lib.rs

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

//! Random maze generation and navigation.
//!
//! The [`generator`] module builds a perfect maze on a rectangular grid: every cell can be reached
//! from any other cell by exactly one path. The [`maze::Maze`] object groups the generated grid
//! with its start and goal, and the [`session::Session`] object moves a player inside the maze.
//!
//! Rendering is limited to the text drawing in [`draw`], used by the command-line tool.

pub mod config;
pub mod draw;
pub mod generator;
pub mod maze;
pub mod session;
