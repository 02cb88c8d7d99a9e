/*
draw.rs

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

//! Draw a maze as text.
//!
//! Each cell and each wall takes one character. For a maze of `rows` by `cols` cells, the
//! drawing is `2 * rows + 1` lines of `2 * cols + 1` characters. The cell at `(row, col)` is
//! drawn at line `2 * row + 1`, column `2 * col + 1`.
//!
//! The west border is open in front of the start cell, and the east border is open in front of
//! the goal cell.

use crate::generator::grid::{Grid, Position};
use crate::maze::Maze;

/// Character for a wall.
pub const WALL: char = '#';

/// Character for a passage.
pub const PASSAGE: char = ' ';

/// Character for the player.
pub const PLAYER: char = '@';

/// Return the drawing of the maze, with the player at the given position.
pub fn render(maze: &Maze, player: Option<Position>) -> String {
    let grid: &Grid = maze.grid();
    let height: usize = 2 * grid.rows() + 1;
    let width: usize = 2 * grid.cols() + 1;
    let mut canvas: Vec<Vec<char>> = vec![vec![WALL; width]; height];

    for p in grid.positions() {
        let (y, x) = (2 * p.row + 1, 2 * p.col + 1);
        canvas[y][x] = PASSAGE;

        // Positions come from the grid, so the cells exist
        if let Ok(cell) = grid.cell(p) {
            if !cell.east_wall {
                canvas[y][x + 1] = PASSAGE;
            }
            if !cell.south_wall {
                canvas[y + 1][x] = PASSAGE;
            }
        }
    }

    // Entry and exit
    let edges = maze.edges();
    canvas[2 * edges.start.row + 1][0] = PASSAGE;
    canvas[2 * edges.goal.row + 1][width - 1] = PASSAGE;

    if let Some(p) = player.filter(|p| grid.contains(*p)) {
        canvas[2 * p.row + 1][2 * p.col + 1] = PLAYER;
    }

    let mut s: String = String::with_capacity(height * (width + 1));
    for line in canvas {
        s.extend(line);
        s.push('\n');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn lines(s: &str) -> Vec<Vec<char>> {
        s.lines().map(|l| l.chars().collect()).collect()
    }

    #[test]
    fn test_dimensions() {
        let mut rng = StdRng::seed_from_u64(8);
        let maze = Maze::generate_with_rng(4, 7, &mut rng).unwrap();
        let drawing = lines(&render(&maze, None));
        assert_eq!(drawing.len(), 9);
        assert!(drawing.iter().all(|l| l.len() == 15));
    }

    #[test]
    fn test_openings_and_player() {
        let mut rng = StdRng::seed_from_u64(12);
        let maze = Maze::generate_with_rng(5, 5, &mut rng).unwrap();
        let edges = maze.edges();
        let drawing = lines(&render(&maze, Some(edges.start)));

        assert_eq!(drawing[2 * edges.start.row + 1][0], PASSAGE);
        assert_eq!(drawing[2 * edges.goal.row + 1][10], PASSAGE);
        assert_eq!(drawing[2 * edges.start.row + 1][1], PLAYER);

        // Two openings in the border
        let border: usize = (0..11)
            .filter(|&y| drawing[y][0] == PASSAGE)
            .count()
            + (0..11).filter(|&y| drawing[y][10] == PASSAGE).count();
        assert_eq!(border, 2);
        assert!(drawing[0].iter().all(|c| *c == WALL));
        assert!(drawing[10].iter().all(|c| *c == WALL));
    }

    #[test]
    fn test_passages_match_open_walls() {
        let mut rng = StdRng::seed_from_u64(2);
        let maze = Maze::generate_with_rng(6, 6, &mut rng).unwrap();
        let drawing = render(&maze, None);
        let passages: usize = drawing.chars().filter(|c| *c == PASSAGE).count();
        // Cells, open walls, and the two border openings
        assert_eq!(passages, 36 + 35 + 2);
    }

    #[test]
    fn test_single_cell() {
        let mut rng = StdRng::seed_from_u64(0);
        let maze = Maze::generate_with_rng(1, 1, &mut rng).unwrap();
        assert_eq!(render(&maze, None), "###\n   \n###\n");
    }
}
