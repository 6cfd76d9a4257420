pub mod completion;
pub mod generate;

use std::time::Duration;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use ginmake_common::config::{Config, DEFAULT_GO_BINARY};
use ginmake_common::project::ProjectName;

#[derive(Parser)]
#[command(name = "gin-make", version)]
#[command(about = "A CLI tool to generate Gin project structures")]
pub struct CommandLine {
    /// Generate a new Gin project structure with the given name
    #[arg(short = 'g', long = "generate", value_name = "NAME")]
    pub generate: Option<ProjectName>,

    /// Delay in milliseconds after each progress step, 0 disables it
    #[arg(long, env = "GIN_MAKE_PACE_MS", default_value_t = 50, value_name = "MS", global = true)]
    pub pace_ms: u64,

    /// Do not run `go mod tidy` in the generated project
    #[arg(long, env = "GIN_MAKE_NO_TIDY", global = true)]
    pub no_tidy: bool,

    /// Go binary used to resolve dependencies
    #[arg(long = "go", env = "GIN_MAKE_GO", default_value = DEFAULT_GO_BINARY, value_name = "PATH", global = true)]
    pub go_binary: String,

    /// Print less; repeat for even less
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new Gin project structure
    #[command(alias = "g")]
    Generate {
        #[arg(value_name = "PROJECT_NAME")]
        name: ProjectName,
    },
    /// Generate the autocompletion script for the specified shell
    #[command(alias = "c")]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            pace: Duration::from_millis(self.pace_ms),
            skip_resolve: self.no_tidy,
            go_binary: self.go_binary.clone(),
            quiet: self.quiet,
        }
    }
}
