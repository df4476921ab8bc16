//! # Story Content
//!
//! The "Story Bible" crate - contains the dialogue data types, the shipped
//! adventure graph, and the schema for authored guide documents.
//! This crate is the single source of truth for story data and does not
//! contain any traversal logic.

pub mod adventure;
pub mod dialogue;
pub mod guides;

pub use adventure::*;
pub use dialogue::*;
pub use guides::*;
