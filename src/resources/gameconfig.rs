//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 600
//! height = 400
//!
//! [window]
//! width = 1200
//! height = 800
//! fullscreen = false
//! vsync = true
//! target_fps = 60
//!
//! [game]
//! max_levels = 32
//! confirm_on_hold = false
//! levels_dir = ./levels
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::level::{DEFAULT_MAX_LEVELS, LevelSource};
use crate::resources::screensize::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1200;
const DEFAULT_WINDOW_HEIGHT: u32 = 800;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_CONFIRM_ON_HOLD: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Stores canvas resolution, window settings and gameplay options.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Canvas width in pixels.
    pub render_width: u32,
    /// Canvas height in pixels.
    pub render_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target ticks per second. Physics constants are per tick.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// Number of levels before the game is complete.
    pub max_levels: u32,
    /// When true, holding confirm keeps re-triggering on message screens
    /// instead of needing a fresh press.
    pub confirm_on_hold: bool,
    /// Directory with `level_NN.json` files. `None` uses the built-in layout.
    pub levels_dir: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_CANVAS_WIDTH as u32,
            render_height: DEFAULT_CANVAS_HEIGHT as u32,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            max_levels: DEFAULT_MAX_LEVELS,
            confirm_on_hold: DEFAULT_CONFIRM_ON_HOLD,
            levels_dir: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [game] section
        if let Some(max_levels) = config.getuint("game", "max_levels").ok().flatten() {
            self.max_levels = (max_levels as u32).max(1);
        }
        if let Some(on_hold) = config.getbool("game", "confirm_on_hold").ok().flatten() {
            self.confirm_on_hold = on_hold;
        }
        if let Some(dir) = config.get("game", "levels_dir") {
            let dir = dir.trim();
            self.levels_dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
        }

        info!(
            "Loaded config: {}x{} canvas, {}x{} window, fps={}, vsync={}, fullscreen={}, levels={}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.vsync,
            self.fullscreen,
            self.max_levels
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [render] section
        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));
        config.set("window", "vsync", Some(self.vsync.to_string()));
        config.set("window", "fullscreen", Some(self.fullscreen.to_string()));

        // [game] section
        config.set("game", "max_levels", Some(self.max_levels.to_string()));
        config.set(
            "game",
            "confirm_on_hold",
            Some(self.confirm_on_hold.to_string()),
        );
        if let Some(dir) = &self.levels_dir {
            config.set("game", "levels_dir", Some(dir.display().to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Where level layouts should come from.
    pub fn level_source(&self) -> LevelSource {
        match &self.levels_dir {
            Some(dir) => LevelSource::Directory(dir.clone()),
            None => LevelSource::Builtin,
        }
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!((config.render_width, config.render_height), (600, 400));
        assert_eq!(config.window_size(), (1200, 800));
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.max_levels, 32);
        assert!(!config.confirm_on_hold);
        assert_eq!(config.level_source(), LevelSource::Builtin);
    }

    #[test]
    fn test_missing_file_is_an_error_and_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = GameConfig::with_path(dir.path().join("nope.ini"));
        assert!(config.load_from_file().is_err());
        assert_eq!(config.max_levels, DEFAULT_MAX_LEVELS);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        std::fs::write(
            &path,
            "[window]\ntarget_fps = 30\n\n[game]\nmax_levels = 4\nconfirm_on_hold = true\nlevels_dir = ./maps\n",
        )
        .unwrap();

        let mut config = GameConfig::with_path(&path);
        config.load_from_file().unwrap();
        assert_eq!(config.target_fps, 30);
        assert_eq!(config.max_levels, 4);
        assert!(config.confirm_on_hold);
        assert_eq!(
            config.level_source(),
            LevelSource::Directory(PathBuf::from("./maps"))
        );
        // untouched
        assert_eq!(config.render_width, 600);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.ini");
        let mut original = GameConfig::with_path(&path);
        original.max_levels = 8;
        original.fullscreen = true;
        original.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded, original);
    }
}
