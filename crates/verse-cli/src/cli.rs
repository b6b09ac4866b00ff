//! # CLI Structure and Argument Parsing
//!
//! `verse` takes positional references and an optional search in a single
//! invocation; there are no subcommands.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Look up references
//! verse "John 3:16" "Psalms 23"
//!
//! # Search, with the first 10 matches (config `search_limit`) highlighted
//! verse --search "/lov(e|ed)/i"
//!
//! # Bare text, custom highlight color
//! verse -s God --resultColor "0, 200, 255" --onlyVerses
//! ```

use std::path::PathBuf;

use clap::Parser;
use verse_core::CliOptions;

/// Main CLI structure for the `verse` command
#[derive(Parser, Clone, Debug)]
#[command(name = "verse")]
#[command(version, disable_version_flag = true)]
#[command(about = "verse - Scripture references and search in the terminal", long_about = None)]
#[command(override_usage = "verse [REFERENCES]... [OPTIONS]")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// References to look up, e.g. "John 3:16" or "Genesis 1:1-3"
    #[arg(value_name = "REFERENCES")]
    pub references: Vec<String>,

    /// Translation language (overrides the config file)
    #[arg(long = "language", visible_alias = "lang", value_name = "LANG")]
    pub language: Option<String>,

    /// Search verses; plain text is used as a regular expression, `/body/flags` is also accepted
    #[arg(short = 's', long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Highlight color for search matches as "r, g, b" (overrides the config file)
    #[arg(
        long = "resultColor",
        visible_aliases = ["rc", "result-color"],
        value_name = "R, G, B"
    )]
    pub result_color: Option<String>,

    /// Print only the verse text, without table borders or reference labels
    #[arg(long = "onlyVerses", visible_alias = "only-verses")]
    pub only_verses: bool,

    /// Path to configuration file. Also via `VERSE_CONFIG`.
    #[arg(long, value_name = "FILE", env = "VERSE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print version information
    #[arg(short = 'v', short_alias = 'V', long = "version")]
    pub display_version: bool,

    /// Show debug logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color")]
    pub no_color: bool,
}

impl Cli {
    /// Whether there is anything to look up.
    pub fn has_work(&self) -> bool {
        !self.references.is_empty() || self.search.is_some()
    }

    pub fn options(&self) -> CliOptions {
        CliOptions {
            language: self.language.clone(),
            result_color: self.result_color.clone(),
            only_verses: self.only_verses,
        }
    }
}
