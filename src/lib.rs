//! Inspect and repair the `type` field of a Wekan board stored in MongoDB.
//!
//! A board that accidentally became a `template-container` disappears from the
//! Wekan UI. This crate looks the board up by title and can set its type back.

pub mod board;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mongo;
pub mod report;

pub use board::{
    count_matches, get_type, set_type, Board, BoardStore, Lookup, SetOutcome, UpdateCount,
};
pub use config::ConnectionConfig;
pub use error::{BoardError, Result};
