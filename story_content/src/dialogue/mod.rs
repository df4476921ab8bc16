//! Dialogue data types - nodes, options, and the graph that holds them.
//!
//! The dialogue graph consists of:
//! - **Nodes**: Display text plus an ordered list of options
//! - **Options**: Labeled transitions to other nodes
//! - **Graph**: A keyed mapping from node identifier to node

mod graph;
mod node;

pub use graph::*;
pub use node::*;
