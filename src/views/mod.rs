// src/views/mod.rs

pub mod arrow_view;

pub use arrow_view::{ArrowFillRotView, ViewError};
