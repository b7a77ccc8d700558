//src/utilities/color.rs

use nannou::prelude::*;

/// Converts a 0xRRGGBB value into a colour.
pub fn hex_color(hex: u32) -> Rgb {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    rgb(channel(16), channel(8), channel(0))
}
