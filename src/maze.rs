/*
maze.rs

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

//! Generated maze and its start and goal.

use log::debug;
use rand::Rng;

use crate::generator::edges::{self, Edges};
use crate::generator::grid::{Grid, GridError, Position};
use crate::generator::navigator::{self, Moves};
use crate::generator::spanning_tree::{GenerationStats, Generator};

/// Complete maze, ready to be played.
#[derive(Debug, Clone)]
pub struct Maze {
    /// Grid with its walls.
    grid: Grid,

    /// Start and goal.
    edges: Edges,

    /// Statistics of the generation.
    stats: GenerationStats,
}

impl Maze {
    /// Generate a maze by using the thread random generator.
    ///
    /// # Errors
    ///
    /// The method returns [`GridError::InvalidDimensions`] when `rows` or `cols` is zero.
    pub fn generate(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::generate_with_rng(rows, cols, &mut rand::rng())
    }

    /// Generate a maze with the provided random generator.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid: Grid = Grid::new(rows, cols)?;
        let stats: GenerationStats = Generator::new().run_with_rng(&mut grid, rng);
        let edges: Edges = edges::pick_edges_with_rng(&grid, rng);
        Ok(Self { grid, edges, stats })
    }

    /// Replace the maze with a new one by using the thread random generator.
    pub fn regenerate(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        self.regenerate_with_rng(rows, cols, &mut rand::rng())
    }

    /// Replace the maze with a new one, possibly with a different size.
    ///
    /// On error, the current maze is kept.
    pub fn regenerate_with_rng<R: Rng + ?Sized>(
        &mut self,
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<(), GridError> {
        debug!("Regenerating the maze ({rows}x{cols})");
        *self = Self::generate_with_rng(rows, cols, rng)?;
        Ok(())
    }

    /// Return the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the start and the goal.
    pub fn edges(&self) -> Edges {
        self.edges
    }

    /// Return the generation statistics.
    pub fn stats(&self) -> GenerationStats {
        self.stats
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Return the legal moves from the given position.
    pub fn legal_moves(&self, position: Position) -> Result<Moves, GridError> {
        navigator::legal_moves(&self.grid, position)
    }
}
