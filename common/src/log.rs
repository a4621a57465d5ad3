//! Status macro shared by every crate.
//!
//! It forwards to `tracing` so the CLI formatter decides how each line looks.
//! `success!` uses a dedicated target so it can be rendered apart from plain info lines.

pub const SUCCESS_TARGET: &str = "netrevive::success";

#[doc(hidden)]
pub use tracing as __tracing;

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}
