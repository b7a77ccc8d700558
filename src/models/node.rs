// src/models/node.rs
//
// One arrow in the chain. Neighbours are indices into the owning Chain.

use log::debug;
use std::fmt;

use crate::animation::AnimationState;
use crate::draw::{draw_arrow_node, Canvas, NodeLayout, Paint};

/// Traversal direction along the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}

/// A node that finished its cycle this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settled {
    pub index: usize,
    pub scale: f32,
}

#[derive(Debug, Clone)]
pub struct Node {
    index: usize,
    state: AnimationState,
    next: Option<usize>,
    prev: Option<usize>,
}

impl Node {
    pub fn new(index: usize, node_count: usize) -> Self {
        Self {
            index,
            state: AnimationState::new(),
            next: (index + 1 < node_count).then_some(index + 1),
            prev: index.checked_sub(1),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn draw<C>(&self, canvas: &mut C, layout: &NodeLayout, paint: &Paint)
    where
        C: Canvas + ?Sized,
    {
        draw_arrow_node(canvas, layout, self.index, self.state.scale, paint);
    }

    pub fn update(&mut self, step: f32) -> Option<Settled> {
        let index = self.index;
        self.state
            .update(step)
            .map(|scale| Settled { index, scale })
    }

    pub fn start_cycle(&mut self) -> bool {
        debug!("Cycle requested on node {}", self);
        self.state.start_cycle()
    }

    /// Index of the neighbour in `direction`. At either end of the chain
    /// `on_missing` is called and the node's own index is returned.
    pub fn neighbor<F>(&self, direction: Direction, on_missing: F) -> usize
    where
        F: FnOnce(),
    {
        let neighbor = match direction {
            Direction::Forward => self.next,
            Direction::Backward => self.prev,
        };
        neighbor.unwrap_or_else(|| {
            on_missing();
            self.index
        })
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, next: {:?}, prev: {:?}",
            self.index, self.next, self.prev
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_reverse() {
        assert_eq!(Direction::Forward.reversed(), Direction::Backward);
        assert_eq!(Direction::Backward.reversed().reversed(), Direction::Backward);
    }

    #[test]
    fn test_links_at_ends_and_middle() {
        let head = Node::new(0, 5);
        assert_eq!(head.prev(), None);
        assert_eq!(head.next(), Some(1));

        let middle = Node::new(2, 5);
        assert_eq!(middle.prev(), Some(1));
        assert_eq!(middle.next(), Some(3));

        let tail = Node::new(4, 5);
        assert_eq!(tail.prev(), Some(3));
        assert_eq!(tail.next(), None);
    }

    #[test]
    fn test_neighbor_inside_chain() {
        let node = Node::new(2, 5);
        let mut missing = 0;
        assert_eq!(node.neighbor(Direction::Forward, || missing += 1), 3);
        assert_eq!(node.neighbor(Direction::Backward, || missing += 1), 1);
        assert_eq!(missing, 0);
    }

    #[test]
    fn test_neighbor_past_tail_reverses() {
        let tail = Node::new(4, 5);
        let mut direction = Direction::Forward;
        let next = tail.neighbor(direction, || direction = direction.reversed());
        assert_eq!(next, 4);
        assert_eq!(direction, Direction::Backward);
    }

    #[test]
    fn test_neighbor_before_head_reverses() {
        let head = Node::new(0, 5);
        let mut called = false;
        assert_eq!(head.neighbor(Direction::Backward, || called = true), 0);
        assert!(called);
    }

    #[test]
    fn test_update_reports_own_index() {
        let mut node = Node::new(3, 5);
        assert!(node.start_cycle());
        let settled = (0..100).find_map(|_| node.update(0.1)).unwrap();
        assert_eq!(settled, Settled { index: 3, scale: 1.0 });
    }

    #[test]
    fn test_display() {
        assert_eq!(Node::new(0, 2).to_string(), "0, next: Some(1), prev: None");
    }
}
