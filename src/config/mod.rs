pub mod config_load;
pub mod config_types;

pub use config_load::{Config, ConfigError};
pub use config_types::{
    AnimationConfig, AnimationSpeed, DrawMode, LayoutConfig, Orientation, WindowConfig,
    BACKGROUND_COLOR, NODE_COLOR, NODE_COUNT,
};
