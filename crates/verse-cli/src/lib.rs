//! verse CLI - scripture references and search in the terminal
//!
//! Startup order matters: configuration and the search pattern are resolved
//! completely before any provider call, so a bad color or pattern stops the
//! run with nothing fetched.
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing::{debug, warn};
use verse_core::{Config, EffectiveOptions, LocalProvider, SearchPattern, TableStyle};

mod cli;
mod commands;
pub mod error;
mod utils;

use crate::cli::Cli;
use crate::commands::LookupContext;
use crate::error::CliError;
use crate::utils::initialize_logging;

/// Execute the verse CLI with the currently configured environment.
///
/// # Errors
///
/// Returns a [`CliError`] if the configuration, result color or search
/// pattern is invalid, or if output cannot be written. Failed lookups are
/// printed inline and are not errors.
pub async fn run() -> Result<()> {
    // Convert Broken pipe panics into a clean exit
    std::panic::set_hook(Box::new(|info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe") || msg.contains("broken pipe") {
            std::process::exit(0);
        }
        eprintln!("{msg}");
    }));

    let cli = Cli::parse();
    initialize_logging(&cli)?;

    if cli.display_version {
        print!("{}", Cli::command().render_version());
        return Ok(());
    }
    if !cli.has_work() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = load_config(cli.config.clone())?;
    let options = EffectiveOptions::resolve(&cli.options(), &config).map_err(CliError::from)?;
    let search = cli
        .search
        .as_deref()
        .map(SearchPattern::parse)
        .transpose()
        .map_err(CliError::from)?;
    debug!(?options, search = ?search.as_ref().map(SearchPattern::source), "resolved options");

    let data_dir = LocalProvider::default_data_dir().map_err(CliError::from)?;
    let provider = LocalProvider::new(options.language.clone(), data_dir);

    let ctx = LookupContext {
        provider: Arc::new(provider),
        options,
        style: TableStyle::default(),
        search,
    };
    commands::execute_lookups(ctx, cli.references).await?;
    Ok(())
}

/// Load the config file, creating it on first run.
///
/// A file that exists but cannot be read or parsed is reported and the
/// sample defaults are used instead.
fn load_config(explicit: Option<PathBuf>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path,
        None => Config::default_path().map_err(CliError::from)?,
    };

    if path.exists() {
        match Config::load(&path) {
            Ok(config) => Ok(config),
            Err(err) => {
                warn!("Cannot read the configuration file. Reason: {err}");
                Ok(Config::sample())
            },
        }
    } else {
        Config::load_or_init(&path).map_err(|err| CliError::from(err).into())
    }
}
