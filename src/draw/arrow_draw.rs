// src/draw/arrow_draw.rs
//
// Geometry and drawing of one arrow node.
//
// Each node is a pair of arrows. While the node's scale sweeps 0 -> 1 the
// first arrow (pass 0) rotates a quarter turn and then slides out to one
// edge; during the second half the other arrow (pass 1) mirrors it to the
// opposite edge. Sweeping back retraces the motion.

use nannou::prelude::*;

use super::canvas::{Canvas, Paint};
use crate::config::Orientation;

/// Per-frame layout of the chain on the current surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeLayout {
    pub orientation: Orientation,
    pub width: f32,
    pub height: f32,
    pub gap: f32,
    pub arrow_width: f32,
    pub shaft_height: f32,
}

impl NodeLayout {
    pub fn new(width: f32, height: f32, node_count: usize, orientation: Orientation) -> Self {
        let along = match orientation {
            Orientation::Vertical => height,
            Orientation::Horizontal => width,
        };
        let gap = along / (node_count as f32 + 1.0);
        Self {
            orientation,
            width,
            height,
            gap,
            arrow_width: gap / 3.0,
            shaft_height: gap / 2.0,
        }
    }

    /// Extent of the surface perpendicular to the chain.
    pub fn across(&self) -> f32 {
        match self.orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }

    /// Shaft plus head.
    pub fn arrow_length(&self) -> f32 {
        self.shaft_height + self.arrow_width
    }

    /// Distance a fully deployed arrow travels from the chain axis; its tip
    /// then touches the surface edge.
    pub fn max_offset(&self) -> f32 {
        self.across() / 2.0 - self.arrow_length()
    }

    pub fn slot(&self, index: usize) -> Point2 {
        let along = self.gap * (index as f32 + 1.0);
        match self.orientation {
            Orientation::Vertical => pt2(self.width / 2.0, along),
            Orientation::Horizontal => pt2(along, self.height / 2.0),
        }
    }
}

/// Progress of one of the two arrows of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoldPhase {
    /// +1 for the first arrow, -1 for its mirror.
    pub fold: f32,
    /// Quarter-turn progress in [0, 1].
    pub rotation: f32,
    /// Slide-out progress in [0, 1].
    pub offset: f32,
}

impl FoldPhase {
    pub fn for_pass(scale: f32, pass: usize) -> Self {
        let j = pass as f32;
        let sc = (scale - j * 0.5).clamp(0.0, 0.5) * 2.0;
        Self {
            fold: 1.0 - 2.0 * j,
            rotation: sc.min(0.5) * 2.0,
            offset: (sc - 0.5).clamp(0.0, 0.5) * 2.0,
        }
    }

    pub fn angle(&self) -> f32 {
        90.0 * self.fold * self.rotation
    }

    pub fn displacement(&self, layout: &NodeLayout) -> f32 {
        layout.max_offset() * self.offset * self.fold
    }
}

pub fn fold_phases(scale: f32) -> [FoldPhase; 2] {
    [FoldPhase::for_pass(scale, 0), FoldPhase::for_pass(scale, 1)]
}

pub fn draw_arrow_node<C>(
    canvas: &mut C,
    layout: &NodeLayout,
    index: usize,
    scale: f32,
    paint: &Paint,
) where
    C: Canvas + ?Sized,
{
    let slot = layout.slot(index);
    let half_width = layout.arrow_width / 2.0;

    canvas.save();
    canvas.translate(slot.x, slot.y);
    if layout.orientation == Orientation::Horizontal {
        // lay the node frame along the x axis before the per-arrow moves
        canvas.rotate(-90.0);
    }
    for phase in fold_phases(scale) {
        canvas.save();
        canvas.translate(phase.displacement(layout), layout.gap / 2.0);
        canvas.rotate(phase.angle());

        canvas.fill_rect(-half_width, -layout.shaft_height, half_width, 0.0, paint);
        let head = [
            pt2(-half_width, -layout.shaft_height),
            pt2(0.0, -layout.arrow_length()),
            pt2(half_width, -layout.shaft_height),
        ];
        canvas.fill_path(&head, paint);

        canvas.restore();
    }
    canvas.restore();
}
