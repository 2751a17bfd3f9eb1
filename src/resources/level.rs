//! Level layouts and level progression resources.
//!
//! A [`LevelLayout`] is plain data: where the ground tiles, ledges, pipes,
//! enemies, coins and the flag go. [`LevelSource`] produces the layout for a
//! level index, either from the built-in design or from JSON files in a
//! directory. Spawning the layout into the world is done by
//! [`crate::game::spawn_layout`].
//!
//! Asking for a level that does not exist is a construction bug, not a
//! gameplay outcome, so it surfaces as a [`LevelError`].

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::enemy::ENEMY_SIZE;
use crate::components::flag::{FLAG_HEIGHT, FLAG_WIDTH};

pub const TILE_SIZE: f32 = 40.0;
pub const DEFAULT_MAX_LEVELS: u32 = 32;
const CANVAS_HEIGHT: f32 = 400.0;
const GROUND_TILES: u32 = 30;
const LEDGE_WIDTH: f32 = 100.0;
const LEDGE_HEIGHT: f32 = 20.0;
const PIPE_WIDTH: f32 = 50.0;
const COIN_COUNT: u32 = 10;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("level {index} is out of range (valid levels are 1..={max_levels})")]
    OutOfRange { index: u32, max_levels: u32 },
    #[error("level file {} not found", .path.display())]
    Missing { path: PathBuf },
    #[error("failed to read level file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse level file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("level {index} is unplayable: {reason}")]
    Invalid { index: u32, reason: String },
}

/// Axis-aligned rectangle in world units (top-left origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectSpec {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectSpec {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }
}

/// Top-left corner of a fixed-size entity (enemy, coin, flag).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub x: f32,
    pub y: f32,
}

impl Spot {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Everything needed to spawn one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub ground: Vec<RectSpec>,
    #[serde(default)]
    pub ledges: Vec<RectSpec>,
    #[serde(default)]
    pub pipes: Vec<RectSpec>,
    #[serde(default)]
    pub enemies: Vec<Spot>,
    #[serde(default)]
    pub coins: Vec<Spot>,
    pub flag: Spot,
}

impl LevelLayout {
    /// The hand-built stage used for every level index.
    pub fn classic() -> Self {
        let ground_y = CANVAS_HEIGHT - TILE_SIZE;
        let ground = (0..GROUND_TILES)
            .map(|i| RectSpec::new(i as f32 * TILE_SIZE, ground_y, TILE_SIZE, TILE_SIZE))
            .collect();

        let ledges = [(200.0, 300.0), (400.0, 250.0), (600.0, 200.0), (800.0, 250.0), (1000.0, 300.0)]
            .into_iter()
            .map(|(x, y)| RectSpec::new(x, y, LEDGE_WIDTH, LEDGE_HEIGHT))
            .collect();

        let pipes = vec![
            RectSpec::new(350.0, CANVAS_HEIGHT - 100.0, PIPE_WIDTH, 60.0),
            RectSpec::new(750.0, CANVAS_HEIGHT - 120.0, PIPE_WIDTH, 80.0),
        ];

        let enemy_y = CANVAS_HEIGHT - 70.0;
        let enemies = [300.0, 500.0, 700.0, 900.0]
            .into_iter()
            .map(|x| Spot::new(x, enemy_y))
            .collect();

        let coins = (0..COIN_COUNT)
            .map(|i| Spot::new(250.0 + i as f32 * 50.0, 250.0))
            .collect();

        Self {
            ground,
            ledges,
            pipes,
            enemies,
            coins,
            flag: Spot::new(1200.0, CANVAS_HEIGHT - 90.0),
        }
    }

    /// Number of platform rectangles (ground tiles plus ledges).
    pub fn platform_count(&self) -> usize {
        self.ground.len() + self.ledges.len()
    }

    /// Right edge of the farthest piece of geometry. Scrolling stops there.
    pub fn world_width(&self) -> f32 {
        let solids = self.ground.iter().chain(&self.ledges).chain(&self.pipes);
        let enemies = self.enemies.iter().map(|e| e.x + ENEMY_SIZE);
        solids
            .map(RectSpec::right)
            .chain(enemies)
            .chain(std::iter::once(self.flag_rect().right()))
            .fold(0.0, f32::max)
    }

    /// Flag rectangle.
    pub fn flag_rect(&self) -> RectSpec {
        RectSpec::new(self.flag.x, self.flag.y, FLAG_WIDTH, FLAG_HEIGHT)
    }

    fn validate(self, index: u32) -> Result<Self, LevelError> {
        if self.ground.is_empty() && self.ledges.is_empty() {
            return Err(LevelError::Invalid {
                index,
                reason: "no platforms to stand on".to_string(),
            });
        }
        let degenerate = self
            .ground
            .iter()
            .chain(&self.ledges)
            .chain(&self.pipes)
            .any(|r| r.w <= 0.0 || r.h <= 0.0);
        if degenerate {
            return Err(LevelError::Invalid {
                index,
                reason: "solid with non-positive size".to_string(),
            });
        }
        Ok(self)
    }

    /// Read and validate a layout from a JSON file.
    pub fn from_json_file(path: &Path, index: u32) -> Result<Self, LevelError> {
        let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LevelError::Missing {
                path: path.to_path_buf(),
            },
            _ => LevelError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;
        let layout: LevelLayout =
            serde_json::from_str(&text).map_err(|source| LevelError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        layout.validate(index)
    }
}

/// Where level layouts come from.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub enum LevelSource {
    /// [`LevelLayout::classic`] for every index.
    #[default]
    Builtin,
    /// `level_NN.json` files in a directory; a missing file is an error.
    Directory(PathBuf),
}

impl LevelSource {
    /// File name used for level `index` inside a level directory.
    pub fn file_name(index: u32) -> String {
        format!("level_{index:02}.json")
    }

    /// Build the layout for a 1-based level `index`.
    pub fn load(&self, index: u32, max_levels: u32) -> Result<LevelLayout, LevelError> {
        if index == 0 || index > max_levels {
            return Err(LevelError::OutOfRange { index, max_levels });
        }
        match self {
            LevelSource::Builtin => Ok(LevelLayout::classic()),
            LevelSource::Directory(dir) => {
                LevelLayout::from_json_file(&dir.join(Self::file_name(index)), index)
            }
        }
    }
}

/// Which level is being played and how many there are.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    /// 1-based.
    pub index: u32,
    pub max_levels: u32,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEVELS)
    }
}

impl LevelProgress {
    pub fn new(max_levels: u32) -> Self {
        Self {
            index: 1,
            max_levels,
        }
    }

    /// Start from `index` instead of 1.
    pub fn starting_at(mut self, index: u32) -> Result<Self, LevelError> {
        if index == 0 || index > self.max_levels {
            return Err(LevelError::OutOfRange {
                index,
                max_levels: self.max_levels,
            });
        }
        self.index = index;
        Ok(self)
    }

    /// Move to the next level. Returns false (and stays put) on the last one.
    pub fn advance(&mut self) -> bool {
        if self.index >= self.max_levels {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn restart(&mut self) {
        self.index = 1;
    }
}

/// Horizontal extent of the level currently spawned.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct LevelBounds {
    pub width: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_layout_counts() {
        let layout = LevelLayout::classic();
        assert_eq!(layout.ground.len(), 30);
        assert_eq!(layout.ledges.len(), 5);
        assert_eq!(layout.platform_count(), 35);
        assert_eq!(layout.pipes.len(), 2);
        assert_eq!(layout.enemies.len(), 4);
        assert_eq!(layout.coins.len(), 10);
    }

    #[test]
    fn test_classic_layout_geometry() {
        let layout = LevelLayout::classic();
        assert_eq!(layout.ground[0], RectSpec::new(0.0, 360.0, 40.0, 40.0));
        assert_eq!(layout.ground[29], RectSpec::new(1160.0, 360.0, 40.0, 40.0));
        assert_eq!(layout.pipes[1], RectSpec::new(750.0, 280.0, 50.0, 80.0));
        assert_eq!(layout.enemies[0], Spot::new(300.0, 330.0));
        assert_eq!(layout.coins[9], Spot::new(700.0, 250.0));
        assert_eq!(layout.flag_rect(), RectSpec::new(1200.0, 310.0, 10.0, 50.0));
    }

    #[test]
    fn test_world_width_reaches_flag() {
        assert_eq!(LevelLayout::classic().world_width(), 1210.0);
    }

    #[test]
    fn test_builtin_source_rejects_out_of_range() {
        let source = LevelSource::Builtin;
        assert!(source.load(1, 32).is_ok());
        assert!(source.load(32, 32).is_ok());
        assert!(matches!(
            source.load(0, 32),
            Err(LevelError::OutOfRange { index: 0, max_levels: 32 })
        ));
        assert!(matches!(
            source.load(33, 32),
            Err(LevelError::OutOfRange { index: 33, .. })
        ));
    }

    #[test]
    fn test_directory_source_reads_json() {
        let dir = tempfile::tempdir().unwrap();
        let json = serde_json::to_string(&LevelLayout::classic()).unwrap();
        std::fs::write(dir.path().join(LevelSource::file_name(2)), json).unwrap();

        let source = LevelSource::Directory(dir.path().to_path_buf());
        let layout = source.load(2, 5).unwrap();
        assert_eq!(layout, LevelLayout::classic());
    }

    #[test]
    fn test_directory_source_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let source = LevelSource::Directory(dir.path().to_path_buf());
        let err = source.load(3, 5).unwrap_err();
        assert!(matches!(err, LevelError::Missing { .. }));
        assert!(err.to_string().contains("level_03.json"));
    }

    #[test]
    fn test_directory_source_malformed_json_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LevelSource::file_name(1)), "{ not json").unwrap();
        let source = LevelSource::Directory(dir.path().to_path_buf());
        assert!(matches!(source.load(1, 1), Err(LevelError::Parse { .. })));
    }

    #[test]
    fn test_layout_without_platforms_is_invalid() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(LevelSource::file_name(1)),
            r#"{ "ground": [], "flag": { "x": 10.0, "y": 10.0 } }"#,
        )
        .unwrap();
        let source = LevelSource::Directory(dir.path().to_path_buf());
        assert!(matches!(source.load(1, 1), Err(LevelError::Invalid { index: 1, .. })));
    }

    #[test]
    fn test_progress_advance_stops_at_last_level() {
        let mut progress = LevelProgress::new(2);
        assert!(progress.advance());
        assert_eq!(progress.index, 2);
        assert!(!progress.advance());
        assert_eq!(progress.index, 2);
        progress.restart();
        assert_eq!(progress.index, 1);
    }

    #[test]
    fn test_progress_starting_at_rejects_out_of_range() {
        assert_eq!(LevelProgress::new(32).starting_at(7).unwrap().index, 7);
        assert_eq!(LevelProgress::new(32).starting_at(32).unwrap().index, 32);

        let err = LevelProgress::new(32).starting_at(40).unwrap_err();
        assert!(matches!(
            err,
            LevelError::OutOfRange { index: 40, max_levels: 32 }
        ));
        assert!(err.to_string().contains("1..=32"));
        assert!(matches!(
            LevelProgress::new(32).starting_at(0),
            Err(LevelError::OutOfRange { index: 0, .. })
        ));
    }

    #[test]
    fn test_unreadable_level_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be: exists, but cannot be read as text.
        let path = dir.path().join(LevelSource::file_name(1));
        std::fs::create_dir(&path).unwrap();
        assert!(matches!(
            LevelLayout::from_json_file(&path, 1),
            Err(LevelError::Io { .. })
        ));
    }
}
