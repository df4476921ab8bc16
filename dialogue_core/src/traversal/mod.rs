//! Traversal module - the observable record of where a session is in the graph.
//!
//! The traversal state consists of:
//! - **State**: The current node identifier plus the ordered visit history
//! - **Store**: The single-owner wrapper that mutates the state and notifies subscribers

mod state;
mod store;

pub use state::*;
pub use store::*;
