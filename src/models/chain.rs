// src/models/chain.rs
//
// The fixed sequence of arrow nodes and the cursor that walks it.

use log::debug;

use super::node::{Direction, Node, Settled};
use crate::config::{DrawMode, Orientation};
use crate::draw::{Canvas, NodeLayout, Paint};

#[derive(Debug, Clone)]
pub struct Chain {
    nodes: Vec<Node>,
    active: usize,
    direction: Direction,
}

impl Chain {
    /// Builds every node upfront. A chain always holds at least one node.
    pub fn new(node_count: usize) -> Self {
        let node_count = node_count.max(1);
        let nodes = (0..node_count)
            .map(|index| Node::new(index, node_count))
            .collect();
        Self {
            nodes,
            active: 0,
            direction: Direction::Forward,
        }
    }

    pub fn active(&self) -> &Node {
        &self.nodes[self.active]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn draw<C>(&self, canvas: &mut C, paint: &Paint, orientation: Orientation, mode: DrawMode)
    where
        C: Canvas + ?Sized,
    {
        let layout = NodeLayout::new(
            canvas.width(),
            canvas.height(),
            self.nodes.len(),
            orientation,
        );
        match mode {
            DrawMode::Chain => {
                let mut cursor = Some(0);
                while let Some(index) = cursor {
                    let node = &self.nodes[index];
                    node.draw(canvas, &layout, paint);
                    cursor = node.next();
                }
            }
            DrawMode::Active => self.active().draw(canvas, &layout, paint),
        }
    }

    /// Advances the active node by one frame. When it settles, the cursor
    /// moves to the neighbour in the current direction, or stays and
    /// reverses at either end of the chain.
    pub fn advance(&mut self, step: f32) -> Option<Settled> {
        let settled = self.nodes[self.active].update(step)?;

        let current = self.direction;
        let mut reached_end = false;
        self.active = self.nodes[self.active].neighbor(current, || reached_end = true);
        if reached_end {
            self.direction = current.reversed();
        }

        debug!(
            "Node {} settled at {}, active node is now {}",
            settled.index,
            settled.scale,
            self.active()
        );
        Some(settled)
    }

    /// Starts a cycle on the active node. False when it is already cycling.
    pub fn start_cycle(&mut self) -> bool {
        self.nodes[self.active].start_cycle()
    }
}
