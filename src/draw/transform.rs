// src/draw/transform.rs
//
// 2D transforms and the save/restore stack behind every Canvas.
// Screen-style coordinates: y grows downward, positive rotation is clockwise.

use nannou::prelude::*;
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform2D {
    pub translation: Vec2,
    pub rotation: f32, // degrees
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    pub fn translate(dx: f32, dy: f32) -> Self {
        Self {
            translation: vec2(dx, dy),
            ..Self::default()
        }
    }

    pub fn rotate(degrees: f32) -> Self {
        Self {
            rotation: degrees,
            ..Self::default()
        }
    }

    /// Applies `local` first, then `self`.
    pub fn compose(&self, local: &Transform2D) -> Transform2D {
        Transform2D {
            translation: self.apply_to_point(local.translation),
            rotation: self.rotation + local.rotation,
        }
    }

    pub fn apply_to_point(&self, point: Point2) -> Point2 {
        // 1. Rotate
        let rotation = self.rotation * PI / 180.0;
        let cos_rot = rotation.cos();
        let sin_rot = rotation.sin();
        let rotated = pt2(
            point.x * cos_rot - point.y * sin_rot,
            point.x * sin_rot + point.y * cos_rot,
        );

        // 2. Translate
        rotated + self.translation
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransformStack {
    current: Transform2D,
    saved: Vec<Transform2D>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    /// Pops the last saved transform. Unbalanced restores are ignored.
    pub fn restore(&mut self) {
        if let Some(transform) = self.saved.pop() {
            self.current = transform;
        }
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.current = self.current.compose(&Transform2D::translate(dx, dy));
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.current = self.current.compose(&Transform2D::rotate(degrees));
    }

    pub fn map(&self, point: Point2) -> Point2 {
        self.current.apply_to_point(point)
    }
}
