//! # Quiniela
//!
//! A football prediction pool with a deterministic scoring engine.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (scores, games, predictions, participants)
//! - **calculate**: Outcome resolution and point rules
//! - **pool**: The pool itself: registration, result entry, totals and winners
//! - **prompt**: Line-oriented terminal prompts
//! - **session**: Interactive pool flow built on the prompts
//! - **report**: Serializable pool reports and their text rendering
//! - **sheet**: Loading a whole pool from a TOML sheet
//! - **config**: Configuration loading and validation

pub mod calculate;
pub mod config;
pub mod models;
pub mod pool;
pub mod prompt;
pub mod report;
pub mod session;
pub mod sheet;

pub use models::*;
pub use pool::{Pool, PoolError, Standing};
