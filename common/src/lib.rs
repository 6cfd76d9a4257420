//! Shared types for the `gin-make` workspace.
//!
//! * [`config`]: runtime settings assembled by the command line.
//! * [`project`]: the validated project name.
//! * [`error`]: the generation error taxonomy.
//!
//! The status macros ([`success!`], [`info!`], [`warn!`]) emit `tracing`
//! events under dedicated targets so the terminal formatter can pick a
//! symbol for each of them.

pub mod config;
pub mod error;
pub mod project;

#[doc(hidden)]
pub use tracing;

/// Reports a completed step.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "ginmake::success", $($arg)*)
    };
}

/// Reports a step that is about to start.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "ginmake::info", $($arg)*)
    };
}

/// Reports something the user should notice but that does not abort anything.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: "ginmake::warn", $($arg)*)
    };
}
