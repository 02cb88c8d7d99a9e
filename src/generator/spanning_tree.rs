/*
spanning_tree.rs

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

//! Carve a random spanning tree into a grid.
//!
//! Each cell starts in its own component. The generator repeatedly draws a random cell and one of
//! its neighbors. When they belong to different components, the wall between them is removed and
//! the two components are merged. A draw for two cells already in the same component is discarded,
//! because removing that wall would create a loop.
//!
//! The generation stops when all the cells are in the same component. At this point, exactly
//! `rows * cols - 1` walls have been removed and there is a single path between any two cells.

use log::debug;
use rand::Rng;
use std::time::Instant;

use super::grid::{Grid, PartitionTag, Position};
use super::navigator;

/// Generator state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GeneratorState {
    /// Some cells are not connected yet.
    Running,

    /// All the cells are connected.
    Finished,
}

/// Statistics about the last generation.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GenerationStats {
    /// Number of random (cell, neighbor) draws.
    pub draws: usize,

    /// Number of draws discarded because both cells were already connected.
    pub rejections: usize,

    /// Number of merged components, which is also the number of removed walls.
    pub merges: usize,

    /// Duration in seconds of the generation.
    pub duration: f32,
}

/// [`Generator`] object.
pub struct Generator {
    /// Current state.
    pub state: GeneratorState,

    /// Statistics for the last run.
    pub stats: GenerationStats,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create the object.
    pub fn new() -> Self {
        Self {
            state: GeneratorState::Running,
            stats: GenerationStats::default(),
        }
    }

    /// Generate the maze in the given grid by using the thread random generator.
    pub fn run(&mut self, grid: &mut Grid) -> GenerationStats {
        self.run_with_rng(grid, &mut rand::rng())
    }

    /// Generate the maze in the given grid.
    ///
    /// The grid must be a new grid, with all its walls and a distinct tag for every cell.
    /// The method does not return before the maze is complete.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &mut self,
        grid: &mut Grid,
        rng: &mut R,
    ) -> GenerationStats {
        let start: Instant = Instant::now();
        self.stats = GenerationStats::default();
        self.state = GeneratorState::Running;

        debug!(
            "Generating a {}x{} maze ({} cells)",
            grid.rows(),
            grid.cols(),
            grid.len()
        );

        // Each merge removes one component
        let mut components: usize = grid.count_components();
        while components > 1 {
            if self.draw(grid, rng) {
                components -= 1;
            }
        }
        debug_assert!(grid.is_single_component());
        self.state = GeneratorState::Finished;

        // The tags are not used anymore
        let tag: PartitionTag = grid.label(Position::new(0, 0));
        grid.relabel(PartitionTag::SETTLED, tag);

        self.stats.duration = start.elapsed().as_secs_f32();
        debug!(
            "Draws = {}  Rejections = {}  Merges = {}  Duration = {}",
            self.stats.draws, self.stats.rejections, self.stats.merges, self.stats.duration
        );
        self.stats
    }

    /// Perform one draw and return the new state.
    ///
    /// A draw either merges two components or is discarded. The state is computed from the
    /// provided grid, so the same generator can be used for several grids.
    pub fn step<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> GeneratorState {
        if grid.is_single_component() {
            self.state = GeneratorState::Finished;
            return self.state;
        }
        self.draw(grid, rng);
        self.state = if grid.is_single_component() {
            GeneratorState::Finished
        } else {
            GeneratorState::Running
        };
        self.state
    }

    /// Draw a random cell and a random neighbor, and merge their components if they differ.
    ///
    /// Return whether a merge occurred.
    fn draw<R: Rng + ?Sized>(&mut self, grid: &mut Grid, rng: &mut R) -> bool {
        self.stats.draws += 1;

        let cell: Position = grid.position(rng.random_range(0..grid.len()));
        let adjacent: Vec<Position> = navigator::adjacent_cells(grid, cell);
        if adjacent.is_empty() {
            return false;
        }
        let neighbor: Position = adjacent[rng.random_range(0..adjacent.len())];

        let cell_tag: PartitionTag = grid.label(cell);
        let neighbor_tag: PartitionTag = grid.label(neighbor);
        if cell_tag == neighbor_tag {
            self.stats.rejections += 1;
            return false;
        }

        grid.open_wall(cell, neighbor);
        grid.relabel(cell_tag, neighbor_tag);
        self.stats.merges += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::navigator::legal_moves;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn generate(rows: usize, cols: usize, seed: u64) -> (Grid, GenerationStats) {
        let mut grid = Grid::new(rows, cols).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let stats = Generator::new().run_with_rng(&mut grid, &mut rng);
        (grid, stats)
    }

    /// Number of cells reachable from the top left cell.
    fn reachable(grid: &Grid) -> usize {
        let mut visited: HashSet<Position> = HashSet::new();
        let mut stack: Vec<Position> = vec![Position::new(0, 0)];
        while let Some(p) = stack.pop() {
            if !visited.insert(p) {
                continue;
            }
            for (_, next) in legal_moves(grid, p).unwrap() {
                if !visited.contains(&next) {
                    stack.push(next);
                }
            }
        }
        visited.len()
    }

    #[test]
    fn test_open_walls_count() {
        for (rows, cols) in [(1, 1), (1, 7), (7, 1), (2, 2), (5, 8), (16, 16)] {
            let (grid, stats) = generate(rows, cols, 7);
            assert_eq!(grid.open_walls(), rows * cols - 1);
            assert_eq!(stats.merges, rows * cols - 1);
            assert_eq!(stats.draws, stats.merges + stats.rejections);
        }
    }

    #[test]
    fn test_spanning_tree() {
        for seed in 0..10 {
            let (grid, _) = generate(9, 13, seed);
            assert_eq!(reachable(&grid), grid.len());
            assert_eq!(grid.open_walls(), grid.len() - 1);
        }
    }

    #[test]
    fn test_border_walls_stay_closed() {
        let (grid, _) = generate(6, 6, 3);
        for col in 0..6 {
            assert!(grid.cell(Position::new(5, col)).unwrap().south_wall);
        }
        for row in 0..6 {
            assert!(grid.cell(Position::new(row, 5)).unwrap().east_wall);
        }
    }

    #[test]
    fn test_labels_settled() {
        let (grid, _) = generate(4, 5, 11);
        assert!(grid.is_single_component());
        assert_eq!(grid.label(Position::new(3, 4)), PartitionTag::SETTLED);
    }

    #[test]
    fn test_single_cell_is_finished() {
        let mut grid = Grid::new(1, 1).unwrap();
        let mut generator = Generator::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generator.step(&mut grid, &mut rng), GeneratorState::Finished);
        assert_eq!(generator.stats.draws, 0);
    }

    #[test]
    fn test_generator_reused_on_new_grid() {
        let mut generator = Generator::new();
        let mut rng = StdRng::seed_from_u64(4);

        let mut first = Grid::new(2, 2).unwrap();
        generator.run_with_rng(&mut first, &mut rng);
        assert_eq!(generator.state, GeneratorState::Finished);

        let mut second = Grid::new(3, 3).unwrap();
        assert_eq!(
            generator.step(&mut second, &mut rng),
            GeneratorState::Running
        );
        while generator.step(&mut second, &mut rng) == GeneratorState::Running {}
        assert!(second.is_single_component());
        assert_eq!(second.open_walls(), 8);
    }

    #[test]
    fn test_step_by_step() {
        let mut grid = Grid::new(3, 3).unwrap();
        let mut generator = Generator::new();
        let mut rng = StdRng::seed_from_u64(5);
        let mut steps: usize = 0;
        while generator.step(&mut grid, &mut rng) == GeneratorState::Running {
            steps += 1;
            assert!(grid.open_walls() < 8);
        }
        assert_eq!(generator.state, GeneratorState::Finished);
        assert_eq!(grid.open_walls(), 8);
        assert!(steps >= 7);
    }

    #[test]
    fn test_large_grid() {
        let (grid, _) = generate(32, 32, 2);
        assert_eq!(grid.open_walls(), 32 * 32 - 1);
        assert_eq!(reachable(&grid), 32 * 32);
    }

    #[test]
    fn test_different_seeds_give_different_mazes() {
        let layout = |grid: &Grid| -> Vec<(bool, bool)> {
            grid.positions()
                .map(|p| {
                    let c = grid.cell(p).unwrap();
                    (c.south_wall, c.east_wall)
                })
                .collect()
        };
        let layouts: HashSet<Vec<(bool, bool)>> =
            (0..10).map(|seed| layout(&generate(8, 8, seed).0)).collect();
        assert!(layouts.len() > 1);
    }
}
