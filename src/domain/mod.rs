//! Domain Models
//!
//! Plain data types shared by state, components and config.

pub mod colour;
pub mod config;
