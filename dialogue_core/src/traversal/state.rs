//! Traversal state - the session-scoped snapshot of position and history.

use serde::{Deserialize, Serialize};
use story_content::NodeId;

/// The record of a session's position in the dialogue graph.
///
/// `current_node` is expected to be a valid key of the graph being traversed;
/// `history` lists previously visited identifiers, oldest first, append-only
/// during normal play. Serializes with the original camelCase field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalState {
    /// Identifier of the node currently presented.
    pub current_node: NodeId,

    /// Previously visited node identifiers, oldest first.
    pub history: Vec<NodeId>,
}

impl TraversalState {
    /// Create a fresh state positioned at the designated root with no history.
    pub fn new() -> Self {
        Self::starting_at(NodeId::root())
    }

    /// Create a fresh state positioned at an arbitrary node.
    pub fn starting_at(node: impl Into<NodeId>) -> Self {
        Self {
            current_node: node.into(),
            history: Vec::new(),
        }
    }

    /// Number of nodes visited before the current one.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Move to `next`, recording the departed node in history.
    pub(crate) fn advance_to(&mut self, next: NodeId) {
        let departed = std::mem::replace(&mut self.current_node, next);
        self.history.push(departed);
    }
}

impl Default for TraversalState {
    fn default() -> Self {
        Self::new()
    }
}
