//! Core data models for the tennis stats API.

mod player;
mod stats;

pub use player::*;
pub use stats::*;
