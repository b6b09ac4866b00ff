//! # verse-core
//!
//! Core functionality for verse - scripture references and search, rendered
//! for the terminal.
//!
//! ## Architecture
//!
//! - **Configuration**: persisted settings merged with CLI options into
//!   [`EffectiveOptions`]
//! - **Providers**: the [`VerseProvider`] seam and the on-disk [`LocalProvider`]
//! - **Rendering**: [`highlight`], [`wrap`], [`table`] and the [`output`]
//!   controller that drives them per lookup
//!
//! ## Quick Start
//!
//! ```rust
//! use verse_core::{CliOptions, Config, EffectiveOptions, Renderer, TableStyle, VerseRecord};
//!
//! let options = EffectiveOptions::resolve(&CliOptions::default(), &Config::sample())?;
//! let style = TableStyle::default();
//! let renderer = Renderer::new(&options, &style);
//!
//! let verses = vec![VerseRecord::new("John", 3, 16, "For God so loved the world")];
//! let (block, _) = renderer.render_block(None, Ok(verses), None);
//! assert!(block.contains("│ John 3:16 │"));
//! # Ok::<(), verse_core::Error>(())
//! ```

/// Configuration loading and option resolution
pub mod config;
/// Error types and result aliases
pub mod error;
/// Search match highlighting
pub mod highlight;
/// Rendering of provider results into printable blocks
pub mod output;
/// Search expression compilation
pub mod pattern;
/// Verse providers
pub mod provider;
/// Reference parsing
pub mod reference;
/// Box-drawn table layout
pub mod table;
/// Core data types
pub mod types;
/// Word wrapping
pub mod wrap;

pub use config::{CliOptions, Config, DEFAULT_SEARCH_LIMIT, EffectiveOptions};
pub use error::{Error, ProviderError, Result};
pub use output::{BlockHeader, RenderState, RenderSummary, Renderer};
pub use pattern::SearchPattern;
pub use provider::{LocalProvider, ProviderResult, VerseProvider};
pub use reference::Reference;
pub use table::{Alignment, Table, TableStyle};
pub use types::*;
