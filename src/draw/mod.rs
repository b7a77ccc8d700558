// src/draw/mod.rs
// The drawing module: canvas abstraction, transforms and arrow geometry

pub mod arrow_draw;
pub mod canvas;
pub mod nannou_canvas;
#[cfg(test)]
pub mod recording;
pub mod transform;

pub use arrow_draw::{draw_arrow_node, fold_phases, FoldPhase, NodeLayout};
pub use canvas::{Canvas, Paint};
pub use nannou_canvas::NannouCanvas;
pub use transform::{Transform2D, TransformStack};
