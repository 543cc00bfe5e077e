//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and tracks the held
//! state of the ascend key, including for terminals that never report key
//! releases.

pub mod handler;
pub mod map;

pub use paper_plane_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, is_ascend_key, should_quit};
