//! Dialogue session - checked playback over a graph and a store.
//!
//! The session couples a [`DialogueGraph`] with a [`DialogueStore`] and owns
//! the lookup edge between them: reading the current node, listing its
//! options, and advancing by option index. A current identifier that resolves
//! to no node is surfaced as a dangling-reference error rather than ignored.

use story_content::{DialogueGraph, DialogueNode, DialogueOption, NodeId};
use thiserror::Error;

use crate::traversal::{DialogueStore, SubscriberId, TraversalState};

/// Errors produced while playing a dialogue session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// The current identifier resolves to no node in the graph.
    #[error("dangling reference: node \"{id}\" is not present in the graph")]
    UnknownNode { id: NodeId },

    /// The chosen option index is out of range for the current node.
    #[error("no option {index} at the current node ({available} available)")]
    NoSuchOption { index: usize, available: usize },

    /// No option at the current node carries the given display label.
    #[error("no option labeled \"{text}\" at the current node")]
    NoSuchLabel { text: String },
}

/// A playable dialogue session.
///
/// Construct one per session; the graph is immutable for its whole lifetime
/// and the store is the single mutable record of progress.
#[derive(Debug)]
pub struct DialogueSession {
    graph: DialogueGraph,
    store: DialogueStore,
}

impl DialogueSession {
    /// Start a session on `graph` at the designated root node.
    pub fn new(graph: DialogueGraph) -> Self {
        Self {
            graph,
            store: DialogueStore::new(),
        }
    }

    /// Start a session on `graph` at an arbitrary node.
    pub fn starting_at(graph: DialogueGraph, root: impl Into<NodeId>) -> Self {
        Self {
            graph,
            store: DialogueStore::starting_at(root),
        }
    }

    /// The graph this session plays.
    pub fn graph(&self) -> &DialogueGraph {
        &self.graph
    }

    /// Identifier of the node currently presented.
    pub fn current(&self) -> &NodeId {
        self.store.current()
    }

    /// Previously visited node identifiers, oldest first.
    pub fn history(&self) -> &[NodeId] {
        self.store.history()
    }

    /// Look up the node currently presented.
    pub fn current_node(&self) -> Result<&DialogueNode, TraversalError> {
        self.graph
            .get(self.store.current())
            .ok_or_else(|| TraversalError::UnknownNode {
                id: self.store.current().clone(),
            })
    }

    /// The choices offered at the current node.
    pub fn options(&self) -> Result<&[DialogueOption], TraversalError> {
        Ok(&self.current_node()?.options)
    }

    /// Whether the session has reached a terminal node.
    pub fn is_finished(&self) -> Result<bool, TraversalError> {
        Ok(self.current_node()?.is_terminal())
    }

    /// Advance along the current node's option at `index`.
    ///
    /// On a terminal node this is a no-op: there is nothing to select, so the
    /// state stays unchanged until a restart. An out-of-range index on a
    /// non-terminal node is an error.
    pub fn choose(&mut self, index: usize) -> Result<(), TraversalError> {
        let node = self.current_node()?;
        if node.is_terminal() {
            return Ok(());
        }

        let option = node
            .options
            .get(index)
            .ok_or(TraversalError::NoSuchOption {
                index,
                available: node.options.len(),
            })?
            .clone();

        self.store.select_option(&option);
        Ok(())
    }

    /// Advance along the option with the given display label.
    pub fn choose_by_text(&mut self, text: &str) -> Result<(), TraversalError> {
        let node = self.current_node()?;
        if node.is_terminal() {
            return Ok(());
        }

        match node.option_with_text(text).cloned() {
            Some(option) => {
                self.store.select_option(&option);
                Ok(())
            }
            None => Err(TraversalError::NoSuchLabel { text: text.into() }),
        }
    }

    /// Restart the session at its root with cleared history.
    pub fn restart(&mut self) {
        self.store.reset();
    }

    /// Register an observer on the underlying store.
    pub fn subscribe(&mut self, callback: impl FnMut(&TraversalState) + 'static) -> SubscriberId {
        self.store.subscribe(callback)
    }

    /// Remove a subscription from the underlying store.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.store.unsubscribe(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_content::adventure;

    #[test]
    fn test_scenario_go_left() {
        let mut session = DialogueSession::new(adventure());

        session.choose_by_text("Go Left").unwrap();

        assert_eq!(*session.current(), NodeId::new("leftPath"));
        assert_eq!(session.history(), [NodeId::root()]);
    }

    #[test]
    fn test_scenario_befriend_the_dragon() {
        let mut session = DialogueSession::new(adventure());

        session.choose_by_text("Go Left").unwrap();
        session.choose_by_text("Befriend the dragon").unwrap();

        assert_eq!(*session.current(), NodeId::new("befriendDragon"));
        assert_eq!(session.history(), [NodeId::root(), NodeId::new("leftPath")]);
        assert!(session.current_node().unwrap().is_terminal());
        assert!(session.is_finished().unwrap());
    }

    #[test]
    fn test_scenario_leave_the_chest() {
        let mut session = DialogueSession::new(adventure());

        session.choose_by_text("Go Right").unwrap();
        session.choose_by_text("Leave it alone").unwrap();

        assert_eq!(*session.current(), NodeId::new("leaveChest"));
        assert_eq!(session.history(), [NodeId::root(), NodeId::new("rightPath")]);
    }

    #[test]
    fn test_choose_by_index() {
        let mut session = DialogueSession::new(adventure());

        session.choose(1).unwrap(); // "Go Right"
        session.choose(0).unwrap(); // "Open the chest"

        assert_eq!(*session.current(), NodeId::new("openChest"));
        assert_eq!(session.history(), [NodeId::root(), NodeId::new("rightPath")]);
    }

    #[test]
    fn test_terminal_choose_is_a_no_op() {
        let mut session = DialogueSession::new(adventure());
        session.choose_by_text("Go Left").unwrap();
        session.choose_by_text("Run away").unwrap();
        assert!(session.is_finished().unwrap());

        let before = session.history().to_vec();
        session.choose(0).unwrap();
        session.choose_by_text("anything").unwrap();

        assert_eq!(*session.current(), NodeId::new("runAway"));
        assert_eq!(session.history(), before);
    }

    #[test]
    fn test_out_of_range_option_is_an_error() {
        let mut session = DialogueSession::new(adventure());

        let result = session.choose(5);
        assert_eq!(
            result,
            Err(TraversalError::NoSuchOption {
                index: 5,
                available: 2
            })
        );
        // State unchanged on error.
        assert_eq!(*session.current(), NodeId::root());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_unknown_label_is_an_error() {
        let mut session = DialogueSession::new(adventure());

        let result = session.choose_by_text("Go Up");
        assert_eq!(
            result,
            Err(TraversalError::NoSuchLabel {
                text: "Go Up".into()
            })
        );
        assert_eq!(*session.current(), NodeId::root());
    }

    #[test]
    fn test_dangling_current_node_is_reported() {
        let graph = DialogueGraph::new().with_node(
            "root",
            DialogueNode::new("Start.").with_option("Jump", "nowhere"),
        );
        let mut session = DialogueSession::new(graph);

        session.choose(0).unwrap();

        let error = session.current_node().unwrap_err();
        assert_eq!(
            error,
            TraversalError::UnknownNode {
                id: NodeId::new("nowhere")
            }
        );
        assert!(error.to_string().contains("dangling reference"));
    }

    #[test]
    fn test_restart_after_ending() {
        let mut session = DialogueSession::new(adventure());
        session.choose_by_text("Go Right").unwrap();
        session.choose_by_text("Open the chest").unwrap();
        assert!(session.is_finished().unwrap());

        session.restart();

        assert_eq!(*session.current(), NodeId::root());
        assert!(session.history().is_empty());
        assert!(!session.is_finished().unwrap());
    }

    #[test]
    fn test_full_walk_notifies_subscribers() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut session = DialogueSession::new(adventure());
        let visited = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&visited);
        session.subscribe(move |state| sink.borrow_mut().push(state.current_node.clone()));

        session.choose_by_text("Go Left").unwrap();
        session.choose_by_text("Befriend the dragon").unwrap();

        assert_eq!(
            *visited.borrow(),
            vec![NodeId::new("leftPath"), NodeId::new("befriendDragon")]
        );
    }
}
