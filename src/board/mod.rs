//! The 10×10 board: squares, ladder/snake topology, and grid layout.
//!
//! Topology is pure data. The turn engine asks it one question per move
//! ([`BoardTopology::resolve_landing`]) and never chains lookups.

mod layout;
mod square;
mod topology;

pub use layout::{square_at, GRID_SIZE};
pub use square::Square;
pub use topology::{BoardTopology, JumpKind, JumpSpec, Landing, TopologyBuilder, TopologySpec};
