//! Core data models for the prediction pool.

mod game;
mod participant;
mod prediction;
mod score;

pub use game::*;
pub use participant::*;
pub use prediction::*;
pub use score::*;
