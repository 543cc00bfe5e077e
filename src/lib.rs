//! Paper Plane (workspace facade crate).
//!
//! Re-exports the workspace crates as `paper_plane::{core,input,term,types}`
//! and hosts the pieces shared by the binary: logging setup and the headless
//! simulation.

pub mod logging;
pub mod sim;

pub use paper_plane_core as core;
pub use paper_plane_input as input;
pub use paper_plane_term as term;
pub use paper_plane_types as types;
