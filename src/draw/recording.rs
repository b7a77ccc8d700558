// src/draw/recording.rs
//
// Headless canvas that records what would have been drawn.

use nannou::prelude::*;

use super::canvas::{Canvas, Paint};
use super::transform::TransformStack;

#[derive(Debug, Clone)]
pub struct RecordedPolygon {
    pub points: Vec<Point2>,
    pub paint: Paint,
}

#[derive(Debug)]
pub struct RecordingCanvas {
    pub width: f32,
    pub height: f32,
    pub stack: TransformStack,
    pub backgrounds: Vec<Rgb>,
    pub polygons: Vec<RecordedPolygon>,
}

impl RecordingCanvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            stack: TransformStack::new(),
            backgrounds: Vec::new(),
            polygons: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.backgrounds.clear();
        self.polygons.clear();
    }
}

impl Canvas for RecordingCanvas {
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
        self.backgrounds.push(color);
    }

    fn fill_polygon(&mut self, points: &[Point2], paint: &Paint) {
        self.polygons.push(RecordedPolygon {
            points: points.to_vec(),
            paint: *paint,
        });
    }
}
