//! Progress reporting port.
//!
//! The generator drives one `start` / `advance`* / `finish` cycle per
//! stage. `finish` is also called when a stage fails part way. How the
//! progress is shown (and whether it is paced) is up to the implementor.

use std::fmt;

/// Stages that report progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Directories,
    Files,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Directories => f.write_str("directories"),
            Stage::Files => f.write_str("files"),
        }
    }
}

pub trait ProgressSink {
    fn start(&mut self, stage: Stage, total: usize);

    /// One unit done. `item` is the relative path just created.
    fn advance(&mut self, item: &str);

    fn finish(&mut self);
}

/// Discards all progress.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn start(&mut self, _stage: Stage, _total: usize) {}

    fn advance(&mut self, _item: &str) {}

    fn finish(&mut self) {}
}
