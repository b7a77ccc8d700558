// src/draw/canvas.rs
//
// The drawing surface the arrows are painted on.

use nannou::prelude::*;

use super::transform::TransformStack;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Rgb,
    pub stroke_weight: f32,
}

impl Paint {
    /// Node paint for a surface of the given size.
    pub fn for_surface(color: Rgb, width: f32, height: f32) -> Self {
        Self {
            color,
            stroke_weight: width.min(height) / 80.0,
        }
    }
}

/// A screen-style 2D canvas (origin top-left, y down, clockwise rotation)
/// with a save/restore transform stack.
///
/// Implementors supply the surface size, the stack and the two raw fill
/// operations. Shapes reach `fill_polygon` already in surface coordinates.
pub trait Canvas {
    fn width(&self) -> f32;
    fn height(&self) -> f32;
    fn transform_stack(&mut self) -> &mut TransformStack;
    fn fill_background(&mut self, color: Rgb);
    fn fill_polygon(&mut self, points: &[Point2], paint: &Paint);

    fn save(&mut self) {
        self.transform_stack().save();
    }

    fn restore(&mut self) {
        self.transform_stack().restore();
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.transform_stack().translate(dx, dy);
    }

    fn rotate(&mut self, degrees: f32) {
        self.transform_stack().rotate(degrees);
    }

    fn fill_rect(&mut self, left: f32, top: f32, right: f32, bottom: f32, paint: &Paint) {
        let corners = [
            pt2(left, top),
            pt2(right, top),
            pt2(right, bottom),
            pt2(left, bottom),
        ];
        self.fill_path(&corners, paint);
    }

    fn fill_path(&mut self, points: &[Point2], paint: &Paint) {
        let stack = self.transform_stack();
        let mapped: Vec<Point2> = points.iter().map(|p| stack.map(*p)).collect();
        self.fill_polygon(&mapped, paint);
    }
}
