use crate::domain::constants::DEFAULT_SOURCES_DIR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "code-standards",
    version,
    about = "Python coding-standards check"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Settings file (TOML); defaults to ~/.config/code-standards/config.toml"
    )]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Fail when the delegated interpreter or runner exits unsuccessfully"
    )]
    pub strict: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download the enforcement script and run it
    Check {
        #[arg(help = "Sources directory name; `src` when empty")]
        sources_dir: Option<String>,
    },
    /// Check required project files, install tox.ini and run the runner
    Enforce {
        #[arg(help = "Sources directory name; `src` when empty")]
        sources_dir: Option<String>,
    },
    /// Report required project files without fetching or running anything
    Verify,
}

/// Absent and empty both mean the default; anything else is kept verbatim.
pub fn effective_sources_dir(raw: Option<&str>) -> &str {
    match raw {
        Some(dir) if !dir.is_empty() => dir,
        _ => DEFAULT_SOURCES_DIR,
    }
}
