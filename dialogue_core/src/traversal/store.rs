//! Dialogue store - the single-owner mutable state with observer notification.

use serde::{Deserialize, Serialize};
use story_content::{DialogueOption, NodeId};
use uuid::Uuid;

use super::TraversalState;

/// Unique handle for a subscription, returned by [`DialogueStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriberId(pub Uuid);

impl SubscriberId {
    /// Create a new random subscriber ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriberId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Observer callback invoked with the new state snapshot after every change.
type Callback = Box<dyn FnMut(&TraversalState)>;

struct Subscriber {
    id: SubscriberId,
    callback: Callback,
}

/// The observable traversal store.
///
/// Exactly one writer path exists: [`select_option`](Self::select_option)
/// (and the session-level [`reset`](Self::reset)). Reads are pure and
/// idempotent. All notification is synchronous and in subscription order;
/// the store is single-threaded by design, so no locking is involved.
///
/// The store is an explicit object: construct it once per session and pass
/// it by handle to whatever needs it, rather than reaching for a global.
pub struct DialogueStore {
    root: NodeId,
    state: TraversalState,
    subscribers: Vec<Subscriber>,
}

impl DialogueStore {
    /// Create a store positioned at the designated root node.
    pub fn new() -> Self {
        Self::starting_at(NodeId::root())
    }

    /// Create a store positioned at an arbitrary root node.
    pub fn starting_at(root: impl Into<NodeId>) -> Self {
        let root = root.into();
        Self {
            state: TraversalState::starting_at(root.clone()),
            root,
            subscribers: Vec::new(),
        }
    }

    /// Identifier of the node currently presented.
    pub fn current(&self) -> &NodeId {
        &self.state.current_node
    }

    /// Previously visited node identifiers, oldest first.
    pub fn history(&self) -> &[NodeId] {
        &self.state.history
    }

    /// The whole current snapshot.
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Advance along `option`: append the departed node to history, move to
    /// `option.next_node`, and notify every subscriber with the new snapshot.
    ///
    /// The option is expected to come from the current node's `options` list;
    /// no membership or target-existence check is performed here (caller
    /// contract).
    pub fn select_option(&mut self, option: &DialogueOption) {
        self.state.advance_to(option.next_node.clone());
        self.notify();
    }

    /// Return to the root node with cleared history, then notify subscribers.
    pub fn reset(&mut self) {
        self.state = TraversalState::starting_at(self.root.clone());
        self.notify();
    }

    /// Register an observer invoked with the new snapshot after every change.
    pub fn subscribe(&mut self, callback: impl FnMut(&TraversalState) + 'static) -> SubscriberId {
        let id = SubscriberId::new();
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        id
    }

    /// Remove a subscription. Returns `false` if the ID was not registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() < before
    }

    /// Get the number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            (subscriber.callback)(&self.state);
        }
    }
}

impl Default for DialogueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DialogueStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogueStore")
            .field("root", &self.root)
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
