//! Recovery logic and the system adapters it runs against.
//!
//! [`recovery::RecoveryFlow`] holds the decision logic and depends only on the
//! ports from `netrevive-common`. The [`system`] module provides the real
//! implementations (`ping`, `netsh`, `start`), and [`elevation`] covers the
//! privilege precondition that has to hold before any toggle is attempted.

pub mod elevation;
pub mod probe;
pub mod recovery;
pub mod system;
