use std::time::Duration;

/// Cosmetic delay between progress steps when nothing else is configured.
pub const DEFAULT_PACE: Duration = Duration::from_millis(50);

/// Go toolchain binary used when no override is given.
pub const DEFAULT_GO_BINARY: &str = "go";

#[derive(Clone, Debug)]
pub struct Config {
    /// Delay applied after every progress step.
    ///
    /// Purely for interactive feedback. `Duration::ZERO` disables it.
    pub pace: Duration,
    /// Skips `go mod tidy` after the files are written.
    pub skip_resolve: bool,
    /// Binary invoked as `<go_binary> mod tidy`.
    pub go_binary: String,
    /// 0 prints everything, 1 drops banner and headers, 2 also drops hints.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pace: DEFAULT_PACE,
            skip_resolve: false,
            go_binary: DEFAULT_GO_BINARY.to_string(),
            quiet: 0,
        }
    }
}
