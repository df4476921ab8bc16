//! Dialogue Graph - the keyed mapping of node identifiers to nodes.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{DialogueNode, NodeId};

/// An option whose target identifier resolves to no node in the graph.
///
/// The graph does not reject these at insertion time (authoring contract);
/// [`DialogueGraph::dangling_references`] audits for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DanglingReference {
    /// The node whose option points nowhere.
    pub from: NodeId,
    /// Display label of the offending option.
    pub option_text: String,
    /// The target identifier that is absent from the graph.
    pub target: NodeId,
}

impl std::fmt::Display for DanglingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "option \"{}\" on node \"{}\" references unknown node \"{}\"",
            self.option_text, self.from, self.target
        )
    }
}

/// The main dialogue graph structure.
///
/// The graph maps node identifiers to their content. It is built once at
/// startup and treated as immutable afterwards: lookups are by key only and
/// declaration order carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DialogueGraph {
    /// All nodes stored by identifier.
    nodes: HashMap<NodeId, DialogueNode>,
}

impl DialogueGraph {
    /// Create a new empty dialogue graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the graph, returning its identifier.
    ///
    /// Inserting under an existing identifier replaces the previous node;
    /// authored content never does this.
    pub fn insert(&mut self, id: impl Into<NodeId>, node: DialogueNode) -> NodeId {
        let id = id.into();
        self.nodes.insert(id.clone(), node);
        id
    }

    /// Add a node to the graph, builder-style.
    pub fn with_node(mut self, id: impl Into<NodeId>, node: DialogueNode) -> Self {
        self.insert(id, node);
        self
    }

    /// Get a node by identifier.
    pub fn get(&self, id: &NodeId) -> Option<&DialogueNode> {
        self.nodes.get(id)
    }

    /// Check if an identifier exists in the graph.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Get the total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Iterate over all node identifiers.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Iterate over all nodes with their identifiers.
    pub fn nodes(&self) -> impl Iterator<Item = (&NodeId, &DialogueNode)> {
        self.nodes.iter()
    }

    /// Get all terminal nodes (nodes with no options).
    pub fn terminal_nodes(&self) -> Vec<&NodeId> {
        self.nodes
            .iter()
            .filter(|(_, node)| node.is_terminal())
            .map(|(id, _)| id)
            .collect()
    }

    /// Audit the graph for options whose targets resolve to no node.
    ///
    /// A well-formed graph returns an empty list: every option's `next_node`
    /// is a key present in the graph.
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();

        for (id, node) in &self.nodes {
            for option in &node.options {
                if !self.nodes.contains_key(&option.next_node) {
                    dangling.push(DanglingReference {
                        from: id.clone(),
                        option_text: option.text.clone(),
                        target: option.next_node.clone(),
                    });
                }
            }
        }

        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_graph() -> DialogueGraph {
        DialogueGraph::new()
            .with_node("root", DialogueNode::new("Start here.").with_option("Onward", "end"))
            .with_node("end", DialogueNode::new("The end."))
    }

    #[test]
    fn test_insert_and_get() {
        let graph = two_room_graph();

        let node = graph.get(&NodeId::root());
        assert!(node.is_some());
        assert_eq!(node.unwrap().text, "Start here.");

        assert!(graph.get(&NodeId::new("missing")).is_none());
    }

    #[test]
    fn test_contains_and_count() {
        let graph = two_room_graph();

        assert_eq!(graph.node_count(), 2);
        assert!(graph.contains(&NodeId::new("end")));
        assert!(!graph.contains(&NodeId::new("middle")));
    }

    #[test]
    fn test_terminal_nodes() {
        let graph = two_room_graph();

        let terminals = graph.terminal_nodes();
        assert_eq!(terminals.len(), 1);
        assert_eq!(*terminals[0], NodeId::new("end"));
    }

    #[test]
    fn test_well_formed_graph_has_no_dangling_references() {
        let graph = two_room_graph();
        assert!(graph.dangling_references().is_empty());
    }

    #[test]
    fn test_dangling_reference_is_reported() {
        let graph = DialogueGraph::new().with_node(
            "root",
            DialogueNode::new("Start here.").with_option("Jump", "nowhere"),
        );

        let dangling = graph.dangling_references();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].from, NodeId::root());
        assert_eq!(dangling[0].option_text, "Jump");
        assert_eq!(dangling[0].target, NodeId::new("nowhere"));

        let message = dangling[0].to_string();
        assert!(message.contains("nowhere"));
        assert!(message.contains("Jump"));
    }

    #[test]
    fn test_insert_replaces_existing_node() {
        let mut graph = two_room_graph();
        graph.insert("end", DialogueNode::new("A different end."));

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.get(&NodeId::new("end")).unwrap().text, "A different end.");
    }
}
