// src/animation/mod.rs
//
// Node progress and the frame loop that advances it.

pub mod animation_state;
pub mod driver;
pub mod ticker;

pub use animation_state::AnimationState;
pub use driver::{AnimationDriver, FrameControl};
pub use ticker::{FrameTicker, ScheduleError};
