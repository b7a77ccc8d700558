pub mod color;

pub use color::hex_color;
