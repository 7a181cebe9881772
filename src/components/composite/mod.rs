//! Composite Components

pub mod square_board;
