//! Shared domain types and ports for `netrevive`.
//!
//! Everything the recovery flow talks to lives behind a trait in [`ports`], so the
//! decision logic in `netrevive-core` never touches a real adapter or network on its own.

pub mod config;
pub mod error;
pub mod log;
pub mod network;
pub mod ports;
pub mod recovery;
