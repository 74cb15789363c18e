//! Stage configuration resource.
//!
//! Manages stage settings loaded from an INI configuration file. Provides
//! defaults for safe startup when the file is missing or incomplete.
//!
//! # Configuration File Format
//!
//! ```ini
//! [stage]
//! width = 640
//! height = 480
//! spawn_x = 50
//! spawn_y = 50
//!
//! [playback]
//! easing = quad_in_out
//! time_scale = 1.0
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;

use crate::components::playback::Easing;

/// Default safe values for startup
const DEFAULT_CANVAS_WIDTH: u32 = 640;
const DEFAULT_CANVAS_HEIGHT: u32 = 480;
const DEFAULT_SPAWN_X: f32 = 50.0;
const DEFAULT_SPAWN_Y: f32 = 50.0;
const DEFAULT_EASING: Easing = Easing::QuadInOut;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./stage.ini";

/// Stage configuration resource.
///
/// Canvas dimensions are hints for the UI layer; the engine imposes no
/// bounds on sprite positions. The spawn point is where newly added sprites
/// land when no explicit position is given.
#[derive(Resource, Debug, Clone)]
pub struct StageConfig {
    /// Canvas width hint in pixels.
    pub canvas_width: u32,
    /// Canvas height hint in pixels.
    pub canvas_height: u32,
    /// Default x for newly added sprites.
    pub spawn_x: f32,
    /// Default y for newly added sprites.
    pub spawn_y: f32,
    /// Interpolation curve for playback steps.
    pub easing: Easing,
    /// Initial time scale for the world clock.
    pub time_scale: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl StageConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            spawn_x: DEFAULT_SPAWN_X,
            spawn_y: DEFAULT_SPAWN_Y,
            easing: DEFAULT_EASING,
            time_scale: DEFAULT_TIME_SCALE,
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

        self.apply(&config);

        info!(
            "Loaded config: {}x{} canvas, spawn ({}, {}), easing {:?}, time_scale {}",
            self.canvas_width,
            self.canvas_height,
            self.spawn_x,
            self.spawn_y,
            self.easing,
            self.time_scale
        );

        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [stage] section
        if let Some(width) = config.getuint("stage", "width").ok().flatten() {
            self.canvas_width = width as u32;
        }
        if let Some(height) = config.getuint("stage", "height").ok().flatten() {
            self.canvas_height = height as u32;
        }
        if let Some(x) = config.getfloat("stage", "spawn_x").ok().flatten() {
            self.spawn_x = x as f32;
        }
        if let Some(y) = config.getfloat("stage", "spawn_y").ok().flatten() {
            self.spawn_y = y as f32;
        }

        // [playback] section
        if let Some(name) = config.get("playback", "easing") {
            match Easing::from_name(&name) {
                Some(easing) => self.easing = easing,
                None => warn!(
                    "Unknown easing {:?} in config, keeping {:?}",
                    name, self.easing
                ),
            }
        }
        if let Some(scale) = config.getfloat("playback", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }
    }

    /// Get the canvas size hint.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    /// Get the default spawn point for new sprites.
    pub fn spawn_point(&self) -> (f32, f32) {
        (self.spawn_x, self.spawn_y)
    }
}
