//! Clicky Library
//!
//! Two small GPUI exercise components, a toggle label that remembers it was
//! clicked and a square tile whose selection is owned by its parent board,
//! plus the window shell and config loading around them.

pub mod app;
pub mod components;
pub mod domain;
pub mod error;
pub mod state;
pub mod theme;
pub mod utils;
