//! State - Plain component state
//!
//! Framework-free structs owned by the views: [`toggle_state::ToggleState`]
//! lives inside `ToggleLabel`, [`selection_state::SelectionState`] inside
//! `SquareBoard`.

pub mod selection_state;
pub mod toggle_state;
