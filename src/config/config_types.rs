// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;
use std::time::Duration;

/// Number of arrows in the chain.
pub const NODE_COUNT: usize = 5;
/// Arrow fill colour (#7B1FA2).
pub const NODE_COLOR: u32 = 0x7B1FA2;
/// Surface background colour (#BDBDBD).
pub const BACKGROUND_COLOR: u32 = 0xBDBDBD;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub fullscreen: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("arrowfillrot"),
            width: 480,
            height: 800,
            fullscreen: false,
        }
    }
}

/************************* Animation Configs ********************/

/// Per-frame scale increment of a cycling node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationSpeed {
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    pub fn step(self) -> f32 {
        match self {
            AnimationSpeed::Normal => 0.025,
            AnimationSpeed::Fast => 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub speed: AnimationSpeed,
    pub frame_interval_ms: u64, // pause between two animation frames
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            speed: AnimationSpeed::Normal,
            frame_interval_ms: 50,
        }
    }
}

impl AnimationConfig {
    pub fn step(&self) -> f32 {
        self.speed.step()
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/************************* Layout Configs ********************/

/// Axis the chain of arrows is laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Which nodes get drawn each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawMode {
    /// Every node, head to tail.
    #[default]
    Chain,
    /// Only the active node. Experimental.
    Active,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub orientation: Orientation,
    pub draw_mode: DrawMode,
}
