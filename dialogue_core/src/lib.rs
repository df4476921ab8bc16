//! # Dialogue Core (The Storyline)
//!
//! The traversal engine of the dialogue system. This crate interfaces with
//! `story_content`, tracks the session position through the dialogue graph,
//! and publishes every change to subscribed observers.
//!
//! ## Core Components
//!
//! - **traversal**: The observable store holding the current node and visit history
//! - **session**: A facade coupling a dialogue graph with a store for checked playback
//!
//! ## Design Philosophy
//!
//! - **Single writer**: All mutation flows through one synchronous path, `select_option`
//! - **Observable**: Subscribers receive the new state snapshot after every change
//! - **Content-agnostic**: The engine never inspects node text, only identifiers

pub mod session;
pub mod traversal;

pub use session::*;
pub use traversal::*;
