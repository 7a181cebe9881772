//! Primitive Components
//!
//! The two exercise components: a toggle label and a selectable square.

pub mod square;
pub mod toggle_label;
