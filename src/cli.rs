use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "vibe-lint")]
#[command(author, version, about = "Vibe standards linter - enforce naming conventions")]
#[command(long_about = "Checks that documentation file names under docs/ contain localized \
    characters and that code directories under src/, components/, pages/, lib/ and utils/ \
    are kebab-case.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Naming violations found\n  \
    2 - Runtime error")]
pub struct Cli {
    /// Project root to check
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
