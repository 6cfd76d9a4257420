//! # gin-make core
//!
//! Everything needed to lay down a Gin service skeleton on disk.
//!
//! * **[`layout`]**: the fixed directory and file tables.
//! * **[`template`]**: placeholder substitution.
//! * **[`progress`]**: the reporting port the generator drives.
//! * **[`resolver`]**: the external dependency resolver port (`go mod tidy`).
//! * **[`generator`]**: the pipeline tying the four stages together.
//!
//! The crate never touches the process working directory and never sleeps;
//! pacing and display are left to [`progress::ProgressSink`] implementors.

pub mod generator;
pub mod layout;
pub mod progress;
pub mod resolver;
pub mod template;

pub use generator::generate;
pub use layout::Layout;
