pub mod chain;
pub mod node;

pub use chain::Chain;
pub use node::{Direction, Node, Settled};
