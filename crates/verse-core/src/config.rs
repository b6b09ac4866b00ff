//! Configuration loading and option resolution.
//!
//! Two layers feed the effective options of one invocation:
//!
//! 1. **Persisted config**: a TOML file at the platform config directory
//!    (see [`Config::default_path`]), created from [`Config::sample`] on first run
//! 2. **CLI options**: flags given on the command line ([`CliOptions`])
//!
//! [`EffectiveOptions::resolve`] merges the two. CLI values win for `language`
//! and `result_color`; `search_limit` is only ever read from the config file.
//!
//! ## Example Configuration File
//!
//! ```toml
//! language = "en"
//! result_color = "255, 0, 0"
//! search_limit = 10
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use verse_core::{CliOptions, Config, EffectiveOptions, Rgb};
//!
//! let config = Config::sample();
//! let cli = CliOptions {
//!     result_color: Some("0 128 255".to_string()),
//!     ..CliOptions::default()
//! };
//! let options = EffectiveOptions::resolve(&cli, &config)?;
//! assert_eq!(options.result_color, Rgb::new(0, 128, 255));
//! assert_eq!(options.search_limit.get(), 10);
//! # Ok::<(), verse_core::Error>(())
//! ```

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{Error, Result, Rgb};

/// Environment variable that points at an explicit config file.
pub const CONFIG_ENV: &str = "VERSE_CONFIG";

/// Search limit applied when the config file does not set one.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Persisted configuration record.
///
/// Every field is optional on disk so partially written files still load;
/// the gaps are filled during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default translation language, e.g. `en`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Highlight color for search matches as `"r, g, b"`.
    #[serde(default, alias = "resultColor", skip_serializing_if = "Option::is_none")]
    pub result_color: Option<String>,

    /// Maximum number of results rendered for one search.
    #[serde(default, alias = "searchLimit", skip_serializing_if = "Option::is_none")]
    pub search_limit: Option<usize>,
}

impl Config {
    /// The configuration written on first run.
    pub fn sample() -> Self {
        Self {
            language: Some("en".to_string()),
            result_color: Some(Rgb::RED.to_string()),
            search_limit: Some(DEFAULT_SEARCH_LIMIT),
        }
    }

    /// Resolve the config file location.
    ///
    /// `VERSE_CONFIG` wins; otherwise the platform config directory is used:
    /// - Linux: `~/.config/verse/config.toml`
    /// - macOS: `~/Library/Application Support/dev.verse.verse/config.toml`
    /// - Windows: `%APPDATA%\verse\verse\config\config.toml`
    pub fn default_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Ok(PathBuf::from(trimmed));
            }
        }

        let project_dirs = directories::ProjectDirs::from("dev", "verse", "verse")
            .ok_or_else(|| Error::Config("Failed to determine project directories".into()))?;
        Ok(project_dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Load the config at `path`, creating it from [`Config::sample`] if it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be read or parsed, or if
    /// the sample file cannot be written.
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::load(path);
        }

        warn!("No configuration file was found. Initializing the configuration file.");
        let sample = Self::sample();
        sample.save(path)?;
        warn!(
            "The configuration file was created at the following location: {}",
            path.display()
        );
        Ok(sample)
    }

    /// Load the config at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {e}")))?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Write the config to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::Config(format!("Failed to create config directory: {e}"))
                })?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config: {e}")))?;
        Ok(())
    }
}

/// Options supplied on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// `--language`, overriding the config file.
    pub language: Option<String>,
    /// `--resultColor` as typed, overriding the config file.
    pub result_color: Option<String>,
    /// `--onlyVerses`.
    pub only_verses: bool,
}

/// The options one invocation renders with. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveOptions {
    /// Translation language passed to the provider.
    pub language: String,
    /// Highlight color for search matches.
    pub result_color: Rgb,
    /// Maximum records rendered per block while a search is active.
    pub search_limit: NonZeroUsize,
    /// Print bare verse text instead of a table.
    pub only_verses: bool,
}

impl EffectiveOptions {
    /// Merge CLI options over the persisted config.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidColorFormat`] if the chosen color is missing or does
    ///   not parse to three integers
    /// - [`Error::Config`] if no language is set anywhere or the search limit is zero
    pub fn resolve(cli: &CliOptions, config: &Config) -> Result<Self> {
        let language = cli
            .language
            .as_deref()
            .or(config.language.as_deref())
            .map(str::trim)
            .filter(|lang| !lang.is_empty())
            .ok_or_else(|| Error::Config("No language configured".into()))?
            .to_string();

        let color_source = cli
            .result_color
            .as_deref()
            .or(config.result_color.as_deref())
            .unwrap_or_default();
        let result_color = Rgb::parse(color_source)?;

        let limit = config.search_limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let search_limit = NonZeroUsize::new(limit)
            .ok_or_else(|| Error::Config("search_limit must be greater than zero".into()))?;

        Ok(Self {
            language,
            result_color,
            search_limit,
            only_verses: cli.only_verses,
        })
    }
}
