use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use colored::*;
use ginmake_common::config::Config;
use ginmake_common::project::ProjectName;
use ginmake_common::{success, warn};
use ginmake_core::layout::DEFAULT_PORT;
use ginmake_core::{Layout, generator, resolver};

use crate::terminal::{print, progress::BarProgress};

/// Generates `name` in the current directory.
pub fn generate(name: &ProjectName, cfg: &Config) -> anyhow::Result<()> {
    print::banner(cfg.quiet);
    print::header("generating project", cfg.quiet);

    let resolver = resolver::from_config(cfg);
    if cfg.skip_resolve {
        warn!("Skipping dependency resolution, run `go mod tidy` inside '{name}' later");
    }

    let start_time: Instant = Instant::now();
    let mut progress = BarProgress::new(cfg.pace);
    let root: PathBuf = generator::generate(
        name,
        Path::new("."),
        &Layout::standard(),
        &mut progress,
        resolver.as_ref(),
    )
    .context("Error generating project")?;

    success!("Project '{}' generated successfully!", name.as_str().green().bold());
    print_summary(name, &root, start_time.elapsed().as_secs_f64(), cfg);
    Ok(())
}

fn print_summary(name: &ProjectName, root: &Path, secs: f64, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    print::header("next steps", cfg.quiet);
    print::aligned_line("Location", &root.display().to_string());
    print::aligned_line("Run", &format!("cd {name} && go run ./cmd"));
    print::aligned_line("Ping", &format!("curl http://localhost{DEFAULT_PORT}/ping"));

    if cfg.quiet == 0 {
        print::fat_separator();
        let elapsed: ColoredString = format!("{secs:.2}s").bold().yellow();
        print::centerln(&format!("Generation complete in {elapsed}"));
    }
}
