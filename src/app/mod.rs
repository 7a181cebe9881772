//! Application Layer
//!
//! Contains app initialization, window management and the workspace.

pub mod application;
pub mod workspace;
