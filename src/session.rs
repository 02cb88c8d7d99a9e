/*
session.rs

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

//! Manage a game in progress.
//!
//! A [`Session`] owns the maze and the player position. The player starts on the start cell.
//! When they reach the goal, a new maze is generated and the player is moved to its start.
//! If the session was created from a [`ConfigSet`], then the size of every new maze comes from
//! that set.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ConfigSet;
use crate::generator::grid::{GridError, Position};
use crate::generator::navigator::{Direction, Moves};
use crate::maze::Maze;

/// Result of a move.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MoveOutcome {
    /// A wall or the border of the maze is in the way.
    Blocked,

    /// The player moved to the given position.
    Moved(Position),

    /// The player reached the goal after the given number of moves. A new maze is ready.
    Escaped { moves: usize },
}

/// Game in progress.
pub struct Session {
    /// Current maze.
    maze: Maze,

    /// Position of the player.
    player: Position,

    /// Number of moves since the beginning of the current maze.
    moves: usize,

    /// Number of mazes the player escaped.
    escaped: usize,

    /// Sizes for the next mazes, if any.
    configs: Option<ConfigSet>,

    rng: StdRng,
}

impl Session {
    /// Create a [`Session`] object with a maze of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        Self::with_rng(rows, cols, StdRng::from_os_rng())
    }

    /// Create a [`Session`] object with a seeded random generator, for reproducible games.
    pub fn with_seed(rows: usize, cols: usize, seed: u64) -> Result<Self, GridError> {
        Self::with_rng(rows, cols, StdRng::seed_from_u64(seed))
    }

    /// Create a [`Session`] object that draws the size of every maze from the given set.
    pub fn with_configs(configs: ConfigSet, seed: Option<u64>) -> Result<Self, GridError> {
        let mut rng: StdRng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let (rows, cols) = configs.pick(&mut rng).size()?;
        let mut session: Session = Self::with_rng(rows, cols, rng)?;
        session.configs = Some(configs);
        Ok(session)
    }

    fn with_rng(rows: usize, cols: usize, mut rng: StdRng) -> Result<Self, GridError> {
        let maze: Maze = Maze::generate_with_rng(rows, cols, &mut rng)?;
        let player: Position = maze.edges().start;
        Ok(Self {
            maze,
            player,
            moves: 0,
            escaped: 0,
            configs: None,
            rng,
        })
    }

    /// Return the current maze.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Return the position of the player.
    pub fn player(&self) -> Position {
        self.player
    }

    /// Number of moves in the current maze.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Number of mazes the player escaped.
    pub fn escaped(&self) -> usize {
        self.escaped
    }

    /// Return the legal moves from the player position.
    pub fn legal_moves(&self) -> Moves {
        // The player position always comes from the maze, so it is inside the grid
        debug_assert!(self.maze.grid().contains(self.player));
        self.maze.legal_moves(self.player).unwrap_or_default()
    }

    /// Move the player in the given direction.
    ///
    /// When the player reaches the goal, a new maze is generated.
    pub fn move_player(&mut self, direction: Direction) -> Result<MoveOutcome, GridError> {
        let destination: Position = match self.legal_moves().get(&direction) {
            Some(p) => *p,
            None => {
                debug!("Move {direction} from {} blocked", self.player);
                return Ok(MoveOutcome::Blocked);
            }
        };
        self.player = destination;
        self.moves += 1;
        debug!("Move {direction} to {destination} (move {})", self.moves);

        if destination == self.maze.edges().goal {
            let moves: usize = self.moves;
            self.escaped += 1;
            debug!("Goal reached in {moves} moves");
            self.reset()?;
            return Ok(MoveOutcome::Escaped { moves });
        }
        Ok(MoveOutcome::Moved(destination))
    }

    /// Replace the maze with a new one and move the player to its start.
    pub fn reset(&mut self) -> Result<(), GridError> {
        let (rows, cols) = match &self.configs {
            Some(configs) => configs.pick(&mut self.rng).size()?,
            None => (self.maze.rows(), self.maze.cols()),
        };
        self.maze.regenerate_with_rng(rows, cols, &mut self.rng)?;
        self.player = self.maze.edges().start;
        self.moves = 0;
        Ok(())
    }
}
