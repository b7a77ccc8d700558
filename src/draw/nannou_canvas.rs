// src/draw/nannou_canvas.rs
//
// Canvas backed by a nannou Draw. nannou's origin is the window centre
// with y pointing up, so every point is flipped on the way out.

use nannou::prelude::*;

use super::canvas::{Canvas, Paint};
use super::transform::TransformStack;

pub struct NannouCanvas<'a> {
    draw: &'a Draw,
    width: f32,
    height: f32,
    stack: TransformStack,
}

impl<'a> NannouCanvas<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect) -> Self {
        Self {
            draw,
            width: window_rect.w(),
            height: window_rect.h(),
            stack: TransformStack::new(),
        }
    }

    fn to_nannou(&self, point: Point2) -> Point2 {
        pt2(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }
}

impl Canvas for NannouCanvas<'_> {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn transform_stack(&mut self) -> &mut TransformStack {
        &mut self.stack
    }

    fn fill_background(&mut self, color: Rgb) {
        self.draw.background().color(color);
    }

    fn fill_polygon(&mut self, points: &[Point2], paint: &Paint) {
        let points: Vec<Point2> = points.iter().map(|p| self.to_nannou(*p)).collect();
        self.draw
            .polygon()
            .color(paint.color)
            .stroke(paint.color)
            .stroke_weight(paint.stroke_weight)
            .join_round()
            .points(points);
    }
}
