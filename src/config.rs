/*
config.rs

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

//! Load the maze configuration from JSON files.
//!
//! A configuration file looks like this:
//!
//! ```json
//! {
//!     "SCREEN": [1024, 1024],
//!     "WALL_SIZE": 8,
//!     "MAZE_SIZE": [32, 32],
//!     "BASE_POSITION": "CENTER",
//!     "PLAYER_SIZE": 6
//! }
//! ```
//!
//! Only `MAZE_SIZE`, the number of rows and columns, is used. The other keys are screen layout
//! parameters for graphical front-ends and are ignored.
//! When `MAZE_SIZE` is missing, a 16x16 maze is generated.
//!
//! Several configuration files can be loaded in a [`ConfigSet`]. With multiple selection enabled,
//! each new maze uses one of these configurations, selected at random.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::generator::grid::GridError;

/// Default number of rows and columns.
const DEFAULT_MAZE_SIZE: (i64, i64) = (16, 16);

fn default_maze_size() -> (i64, i64) {
    DEFAULT_MAZE_SIZE
}

/// Maze configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MazeConfig {
    /// Number of rows and columns.
    #[serde(rename = "MAZE_SIZE", default = "default_maze_size")]
    pub maze_size: (i64, i64),
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            maze_size: DEFAULT_MAZE_SIZE,
        }
    }
}

impl MazeConfig {
    /// Read a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path: &Path = path.as_ref();
        debug!("Loading configuration file {path:?}");
        let file: File = File::open(path)?;
        let reader: BufReader<File> = BufReader::new(file);
        let config: MazeConfig = serde_json::from_reader(reader)?;
        config.size()?;
        Ok(config)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json(data: &str) -> Result<Self, Box<dyn Error>> {
        let config: MazeConfig = serde_json::from_str(data)?;
        config.size()?;
        Ok(config)
    }

    /// Return the validated number of rows and columns.
    ///
    /// # Errors
    ///
    /// The method returns [`GridError::InvalidDimensions`] when a dimension is not positive.
    pub fn size(&self) -> Result<(usize, usize), GridError> {
        let (rows, cols) = self.maze_size;
        match (usize::try_from(rows), usize::try_from(cols)) {
            (Ok(r), Ok(c)) if r > 0 && c > 0 => Ok((r, c)),
            _ => Err(GridError::InvalidDimensions { rows, cols }),
        }
    }
}

/// List of configurations.
#[derive(Debug, Clone)]
pub struct ConfigSet {
    configs: Vec<MazeConfig>,

    /// Whether a random configuration is selected for every maze. Otherwise, the first
    /// configuration is always used.
    multiple: bool,
}

impl ConfigSet {
    /// Create a [`ConfigSet`] object.
    ///
    /// # Errors
    ///
    /// The list must not be empty.
    pub fn new(configs: Vec<MazeConfig>, multiple: bool) -> Result<Self, Box<dyn Error>> {
        if configs.is_empty() {
            return Err("At least one configuration is required".into());
        }
        Ok(Self { configs, multiple })
    }

    /// Load all the given configuration files.
    pub fn load<P: AsRef<Path>>(paths: &[P], multiple: bool) -> Result<Self, Box<dyn Error>> {
        let mut configs: Vec<MazeConfig> = Vec::with_capacity(paths.len());
        for path in paths {
            configs.push(MazeConfig::load(path)?);
        }
        Self::new(configs, multiple)
    }

    /// Number of configurations.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Select the configuration for the next maze.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &MazeConfig {
        if !self.multiple {
            return &self.configs[0];
        }
        let i: usize = rng.random_range(0..self.configs.len());
        debug!("Using configuration {i} of {}", self.configs.len());
        &self.configs[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;
    use std::io::Write;

    #[test]
    fn test_parse_full_file() {
        let config = MazeConfig::from_json(
            r#"{
                "SCREEN": [1024, 1024],
                "WALL_SIZE": 8,
                "MAZE_SIZE": [32, 48],
                "BASE_POSITION": "CENTER",
                "PLAYER_SIZE": 6
            }"#,
        )
        .unwrap();
        assert_eq!(config.maze_size, (32, 48));
        assert_eq!(config.size().unwrap(), (32, 48));
    }

    #[test]
    fn test_default_size() {
        let config = MazeConfig::from_json(r#"{"WALL_SIZE": 64}"#).unwrap();
        assert_eq!(config, MazeConfig::default());
        assert_eq!(config.size().unwrap(), (16, 16));
    }

    #[test]
    fn test_invalid_size() {
        assert!(MazeConfig::from_json(r#"{"MAZE_SIZE": [0, 4]}"#).is_err());
        assert!(MazeConfig::from_json(r#"{"MAZE_SIZE": [-3, 4]}"#).is_err());
        let config = MazeConfig { maze_size: (4, -1) };
        assert_eq!(
            config.size().unwrap_err(),
            GridError::InvalidDimensions { rows: 4, cols: -1 }
        );
    }

    #[test]
    fn test_malformed_json() {
        assert!(MazeConfig::from_json("{ MAZE_SIZE: ").is_err());
        assert!(MazeConfig::from_json(r#"{"MAZE_SIZE": "big"}"#).is_err());
    }

    #[test]
    fn test_load_file() {
        let mut path = std::env::temp_dir();
        path.push(format!("labyrinthe-config-{}.json", std::process::id()));
        let mut file = File::create(&path).unwrap();
        file.write_all(br#"{"MAZE_SIZE": [8, 8]}"#).unwrap();
        drop(file);

        let configs = ConfigSet::load(&[&path], false).unwrap();
        assert_eq!(configs.len(), 1);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(configs.pick(&mut rng).maze_size, (8, 8));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file() {
        assert!(MazeConfig::load("/nonexistent/labyrinthe.json").is_err());
    }

    #[test]
    fn test_empty_set() {
        assert!(ConfigSet::new(Vec::new(), true).is_err());
    }

    #[test]
    fn test_pick() {
        let configs = vec![
            MazeConfig { maze_size: (8, 8) },
            MazeConfig { maze_size: (16, 16) },
            MazeConfig { maze_size: (32, 32) },
        ];
        let mut rng = StdRng::seed_from_u64(6);

        let single = ConfigSet::new(configs.clone(), false).unwrap();
        for _ in 0..20 {
            assert_eq!(single.pick(&mut rng).maze_size, (8, 8));
        }

        let multiple = ConfigSet::new(configs, true).unwrap();
        let sizes: HashSet<(i64, i64)> = (0..50)
            .map(|_| multiple.pick(&mut rng).maze_size)
            .collect();
        assert!(sizes.len() > 1);
    }
}
