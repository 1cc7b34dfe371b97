//! TastePoints command-line front end.
//!
//! The points ledger and reward rules live in the `loyalty` crate; this crate
//! adds configuration, HTTP calls for feedback and reviews, and terminal
//! rendering.

pub mod api;
pub mod config;
pub mod render;
