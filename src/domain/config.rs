//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::domain::colour::Colour;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Main window configuration
    pub window: WindowConfig,
    /// Square board configuration
    pub board: BoardConfig,
}

/// Main window size in logical pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 600.0,
        }
    }
}

/// Square board configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// One tile per colour, in display order
    pub colours: Vec<Colour>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let colours = ["blue", "green", "purple"]
            .into_iter()
            .filter_map(|name| name.parse().ok())
            .collect();
        Self { colours }
    }
}
