//! The shipped adventure - the fixed dialogue content compiled into the crate.
//!
//! Seven nodes: the root, two branch nodes (`leftPath`, `rightPath`), and
//! four terminal endings. Every option target is a valid key, so the graph
//! audits clean.

use crate::dialogue::{DialogueGraph, DialogueNode};

/// Build the shipped adventure graph.
///
/// The graph is literal data: created once at startup, immutable thereafter.
pub fn adventure() -> DialogueGraph {
    DialogueGraph::new()
        .with_node(
            "root",
            DialogueNode::new("Welcome to the adventure! Do you want to go left or right?")
                .with_option("Go Left", "leftPath")
                .with_option("Go Right", "rightPath"),
        )
        .with_node(
            "leftPath",
            DialogueNode::new("You encounter a friendly dragon! What do you do?")
                .with_option("Befriend the dragon", "befriendDragon")
                .with_option("Run away", "runAway"),
        )
        .with_node(
            "rightPath",
            DialogueNode::new("You find a treasure chest! Do you want to open it?")
                .with_option("Open the chest", "openChest")
                .with_option("Leave it alone", "leaveChest"),
        )
        .with_node(
            "befriendDragon",
            DialogueNode::new("The dragon becomes your ally! You win!"),
        )
        .with_node(
            "runAway",
            DialogueNode::new("You safely return home. The end."),
        )
        .with_node(
            "openChest",
            DialogueNode::new("The chest is filled with gold! You are rich!"),
        )
        .with_node(
            "leaveChest",
            DialogueNode::new("You walk away, wondering what was inside. The end."),
        )
}
