//! Node and option definitions - the building blocks of the dialogue graph.

use serde::{Deserialize, Serialize};

/// Identifier for dialogue nodes.
///
/// Node identifiers are author-chosen strings (e.g. `"root"`, `"leftPath"`),
/// unique within a graph by map construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a node ID from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The designated root identifier every session starts at.
    pub fn root() -> Self {
        Self::new("root")
    }

    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A labeled transition from one node to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueOption {
    /// Display label for the choice.
    pub text: String,

    /// Identifier of the node this option leads to.
    ///
    /// Must be a key present in the graph; the data itself does not enforce
    /// this (authoring contract, auditable via
    /// [`DialogueGraph::dangling_references`](crate::DialogueGraph::dangling_references)).
    #[serde(rename = "nextNode")]
    pub next_node: NodeId,
}

impl DialogueOption {
    /// Create a new option with the given label and target node.
    pub fn new(text: impl Into<String>, next_node: impl Into<NodeId>) -> Self {
        Self {
            text: text.into(),
            next_node: next_node.into(),
        }
    }
}

/// A single point in the dialogue graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueNode {
    /// Display text shown to the user at this node.
    pub text: String,

    /// Ordered choices offered at this node. Empty means terminal.
    pub options: Vec<DialogueOption>,
}

impl DialogueNode {
    /// Create a new node with the given display text and no options.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            options: Vec::new(),
        }
    }

    /// Add an option to this node.
    pub fn with_option(mut self, text: impl Into<String>, next_node: impl Into<NodeId>) -> Self {
        self.options.push(DialogueOption::new(text, next_node));
        self
    }

    /// Add multiple options to this node.
    pub fn with_options(mut self, options: impl IntoIterator<Item = DialogueOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// A node with no options is terminal: the traversal cannot advance from it.
    pub fn is_terminal(&self) -> bool {
        self.options.is_empty()
    }

    /// Find an option by its display label.
    pub fn option_with_text(&self, text: &str) -> Option<&DialogueOption> {
        self.options.iter().find(|o| o.text == text)
    }
}
