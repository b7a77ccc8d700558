// src/render/mod.rs
// Per-frame coordination of drawing and animation

pub mod renderer;

pub use renderer::Renderer;
