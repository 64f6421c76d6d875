use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub visual: VisualConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for randomly generated grids
#[derive(Debug, Clone, Deserialize)]
pub struct GridConfig {
    #[serde(default = "default_rows")]
    pub rows: i32,
    #[serde(default = "default_cols")]
    pub cols: i32,
    /// Probability that a random cell is passable
    #[serde(default = "default_passable_ratio")]
    pub passable_ratio: f64,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_title")]
    pub title: String,
    #[serde(default = "default_window_width")]
    pub width: i32,
    #[serde(default = "default_window_height")]
    pub height: i32,
    /// Space left around the grid, in pixels
    #[serde(default = "default_margin")]
    pub margin: i32,
    #[serde(default = "default_fps")]
    pub fps: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisualConfig {
    #[serde(default = "default_background")]
    pub background: [u8; 3],
    #[serde(default = "default_grid_lines")]
    pub grid_lines: [u8; 3],
    #[serde(default = "default_blocked")]
    pub blocked: [u8; 3],
    #[serde(default = "default_start")]
    pub start: [u8; 3],
    #[serde(default = "default_goal")]
    pub goal: [u8; 3],
    #[serde(default = "default_path")]
    pub path: [u8; 3],
    #[serde(default = "default_grid_line_thickness")]
    pub grid_line_thickness: f32,
    #[serde(default = "default_path_thickness")]
    pub path_thickness: f32,
    #[serde(default)]
    pub show_search_overlay: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
}

// Default values
fn default_rows() -> i32 { 10 }
fn default_cols() -> i32 { 10 }
fn default_passable_ratio() -> f64 { 0.5 }
fn default_window_title() -> String { "A* Path Finder".to_string() }
fn default_window_width() -> i32 { 1280 }
fn default_window_height() -> i32 { 720 }
fn default_margin() -> i32 { 40 }
fn default_fps() -> u32 { 60 }
fn default_background() -> [u8; 3] { [0, 0, 0] }
fn default_grid_lines() -> [u8; 3] { [60, 150, 50] }
fn default_blocked() -> [u8; 3] { [128, 128, 128] }
fn default_start() -> [u8; 3] { [255, 0, 0] }
fn default_goal() -> [u8; 3] { [0, 0, 255] }
fn default_path() -> [u8; 3] { [0, 255, 0] }
fn default_grid_line_thickness() -> f32 { 2.0 }
fn default_path_thickness() -> f32 { 3.0 }
fn default_log_level() -> String { "info".to_string() }

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            passable_ratio: default_passable_ratio(),
            seed: None,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: default_window_title(),
            width: default_window_width(),
            height: default_window_height(),
            margin: default_margin(),
            fps: default_fps(),
        }
    }
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            grid_lines: default_grid_lines(),
            blocked: default_blocked(),
            start: default_start(),
            goal: default_goal(),
            path: default_path(),
            grid_line_thickness: default_grid_line_thickness(),
            path_thickness: default_path_thickness(),
            show_search_overlay: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Load configuration from file, or use defaults if the file is missing or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match Self::from_toml(&contents) {
                Ok(config) => {
                    log::info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", path.display(), e);
                    log::warn!("Using default configuration");
                    Config::default()
                }
            },
            Err(_) => {
                log::info!("No {} found, using default configuration", path.display());
                Config::default()
            }
        }
    }
}
