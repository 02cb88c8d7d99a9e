/*
cli_options.rs

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

//! Process command-line options.
//!
//! By default, Labyrinthe prints random mazes. With the `--play` option, it runs a game in the
//! terminal where the player must go from the entry on the west side of the maze to the exit on
//! the east side.
//!
//! # Examples
//!
//! Print a 4x6 maze:
//!
//! ```text
//! $ labyrinthe --rows 4 --cols 6
//! #############
//! #           #
//! # # ### #####
//!   #   #      
//! # ####### # #
//! # #       # #
//! ##### #######
//! #           #
//! #############
//! ```
//!
//! Play with mazes of the sizes provided in configuration files, selecting one file at random for
//! every new maze:
//!
//! ```text
//! $ labyrinthe --config configs/8_8_maze.json --config configs/16_16_maze.json --multiple --play
//! ```

use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use labyrinthe::config::{ConfigSet, MazeConfig};
use labyrinthe::draw;
use labyrinthe::generator::navigator::Direction;
use labyrinthe::maze::Maze;
use labyrinthe::session::{MoveOutcome, Session};

/// Generate random mazes and play them in the terminal.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// Number of rows (overrides the configuration files)
    #[arg(short, long, allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Number of columns (overrides the configuration files)
    #[arg(short, long, allow_negative_numbers = true)]
    cols: Option<i64>,

    /// JSON configuration file. Can be repeated
    #[arg(short = 'f', long)]
    config: Vec<PathBuf>,

    /// Select a random configuration file for every maze
    #[arg(short, long, default_value_t = false)]
    multiple: bool,

    /// Number of mazes to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Seed for the random generator, for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Print some statistics after generating the mazes
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Play in the terminal
    #[arg(short, long, default_value_t = false)]
    play: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let res: Result<(), Box<dyn Error>> = match build_configs(&args) {
        Ok(configs) => {
            if args.play {
                play(configs, args.seed)
            } else {
                print_mazes(&configs, &args)
            }
        }
        Err(e) => Err(e),
    };

    match res {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Build the list of configurations from the configuration files and the size options.
fn build_configs(args: &Args) -> Result<ConfigSet, Box<dyn Error>> {
    if args.rows.is_some() || args.cols.is_some() || args.config.is_empty() {
        let default: MazeConfig = MazeConfig::default();
        let config = MazeConfig {
            maze_size: (
                args.rows.unwrap_or(default.maze_size.0),
                args.cols.unwrap_or(default.maze_size.1),
            ),
        };
        config.size()?;
        debug!("Maze size from the command line: {:?}", config.maze_size);
        return ConfigSet::new(vec![config], false);
    }
    ConfigSet::load(&args.config, args.multiple)
}

fn new_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Print random mazes.
fn print_mazes(configs: &ConfigSet, args: &Args) -> Result<(), Box<dyn Error>> {
    let mut rng: StdRng = new_rng(args.seed);
    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut draws: usize = 0;
    let mut rejections: usize = 0;

    for i in 0..args.count {
        debug!("Maze {i}");
        let (rows, cols) = configs.pick(&mut rng).size()?;
        let maze: Maze = Maze::generate_with_rng(rows, cols, &mut rng)?;
        let stats = maze.stats();
        total += stats.duration;
        if stats.duration > max {
            max = stats.duration;
        }
        draws += stats.draws;
        rejections += stats.rejections;

        if i > 0 {
            println!();
        }
        print!("{}", draw::render(&maze, None));
    }

    if args.summary && args.count > 0 {
        println!(
            "
        total time = {}s
      average time = {}s
          max time = {}s
     average draws = {}
average rejections = {}",
            total,
            total / args.count as f32,
            max,
            draws / args.count,
            rejections / args.count
        );
    }
    Ok(())
}

/// Print the legal moves from the player position.
fn print_moves(session: &Session) {
    let moves: Vec<String> = session
        .legal_moves()
        .keys()
        .map(|d| d.to_string())
        .collect();
    println!("Moves: {}", moves.join(", "));
}

/// Play in the terminal, reading commands from the standard input.
fn play(configs: ConfigSet, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    let mut session: Session = Session::with_configs(configs, seed)?;
    let stdin = io::stdin();

    println!("n, s, e, w (or o): move    r: new maze    q: quit");
    print!("{}", draw::render(session.maze(), Some(session.player())));
    print_moves(&session);

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line: String = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let key: char = match line.trim().chars().next() {
            Some(c) => c,
            None => continue,
        };

        match key {
            'q' | 'Q' => break,
            'r' | 'R' => {
                session.reset()?;
                println!("New maze");
            }
            _ => match Direction::from_key(key) {
                Some(direction) => match session.move_player(direction)? {
                    MoveOutcome::Blocked => {
                        println!("There is a wall {direction}");
                        continue;
                    }
                    MoveOutcome::Moved(_) => (),
                    MoveOutcome::Escaped { moves } => {
                        println!(
                            "You escaped in {moves} moves ({} mazes so far). New maze",
                            session.escaped()
                        );
                    }
                },
                None => {
                    println!("Unknown command {key:?}");
                    continue;
                }
            },
        }
        print!("{}", draw::render(session.maze(), Some(session.player())));
        print_moves(&session);
    }
    Ok(())
}
