//! Rendering of one provider lookup into a printable block.
//!
//! Each lookup (a reference or a search) gets its own block. The block is
//! assembled in memory and written with a single call so blocks produced by
//! concurrent lookups never interleave mid-block.
//!
//! The records of one lookup move through these states:
//!
//! - `Error`: the provider failed; the block is `Error: <message>`
//! - `Empty`: the provider returned nothing; the block is `Verses not found`
//! - streaming: records are highlighted (if a search is active), wrapped and
//!   collected into table rows, or printed bare in only-verses mode; with an
//!   active search the remaining-results counter drops once per record and
//!   streaming stops as soon as it reaches zero
//! - flush: the table (if any) is rendered

use std::io::{self, Write};

use tracing::debug;

use crate::highlight::highlight;
use crate::provider::ProviderResult;
use crate::table::{Alignment, Table, TableStyle};
use crate::wrap::{DEFAULT_WRAP_WIDTH, wrap};
use crate::{EffectiveOptions, RenderRow, SearchPattern, VerseRecord};

/// Message printed when a lookup yields no verses.
pub const NOT_FOUND_MESSAGE: &str = "Verses not found";

/// Terminal state of one rendered lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// The provider failed; `Error: <message>` was printed.
    Error,
    /// The provider returned no verses; the not-found message was printed.
    Empty,
    /// Verses were rendered and the block was written.
    Flushed,
}

/// What a [`Renderer`] did with one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// How the lookup ended.
    pub state: RenderState,
    /// Records that were processed before streaming ended.
    pub rendered: usize,
}

/// The heading line printed above a block outside only-verses mode.
#[derive(Debug, Clone, Copy)]
pub enum BlockHeader<'a> {
    /// `Reference: <reference>`
    Reference(&'a str),
    /// `Results for search: <query>`
    Search(&'a SearchPattern),
}

/// Renders provider results with one fixed set of options and glyphs.
#[derive(Debug, Clone)]
pub struct Renderer<'a> {
    options: &'a EffectiveOptions,
    style: &'a TableStyle,
    width: usize,
}

impl<'a> Renderer<'a> {
    /// Create a renderer that wraps verse bodies at the default width.
    pub const fn new(options: &'a EffectiveOptions, style: &'a TableStyle) -> Self {
        Self {
            options,
            style,
            width: DEFAULT_WRAP_WIDTH,
        }
    }

    /// Override the body wrap width.
    #[must_use]
    pub const fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Render one lookup, header included, into a string.
    pub fn render_block(
        &self,
        header: Option<BlockHeader<'_>>,
        outcome: ProviderResult,
        search: Option<&SearchPattern>,
    ) -> (String, RenderSummary) {
        let mut block = String::new();
        if !self.options.only_verses {
            match header {
                Some(BlockHeader::Reference(reference)) => {
                    block.push_str(&format!("Reference: {reference}\n"));
                },
                Some(BlockHeader::Search(pattern)) => {
                    block.push_str(&format!("Results for search: {pattern}\n"));
                },
                None => {},
            }
        }
        let summary = self.render_outcome(outcome, search, &mut block);
        (block, summary)
    }

    /// Render one lookup and write it to `writer` in a single call.
    pub fn write_block<W: Write>(
        &self,
        writer: &mut W,
        header: Option<BlockHeader<'_>>,
        outcome: ProviderResult,
        search: Option<&SearchPattern>,
    ) -> io::Result<RenderSummary> {
        let (block, summary) = self.render_block(header, outcome, search);
        writer.write_all(block.as_bytes())?;
        writer.flush()?;
        Ok(summary)
    }

    /// Append the rendering of `outcome` to `out`. Every emitted line ends in
    /// a newline.
    pub fn render_outcome(
        &self,
        outcome: ProviderResult,
        search: Option<&SearchPattern>,
        out: &mut String,
    ) -> RenderSummary {
        let records = match outcome {
            Err(err) => {
                out.push_str(&format!("Error: {err}\n"));
                return RenderSummary {
                    state: RenderState::Error,
                    rendered: 0,
                };
            },
            Ok(records) if records.is_empty() => {
                out.push_str(NOT_FOUND_MESSAGE);
                out.push('\n');
                return RenderSummary {
                    state: RenderState::Empty,
                    rendered: 0,
                };
            },
            Ok(records) => records,
        };

        let mut table = Table::with_columns(self.style, vec![Alignment::Right, Alignment::Left]);
        let mut remaining = self.options.search_limit.get();
        let mut rendered = 0;

        for record in records {
            let row = self.render_record(record, search);
            rendered += 1;

            if self.options.only_verses {
                out.push_str(&row.body_lines.join(" "));
                out.push('\n');
            } else {
                table.add_row(vec![vec![row.reference_label], row.body_lines]);
            }

            if search.is_some() {
                remaining -= 1;
                if remaining == 0 {
                    break;
                }
            }
        }

        if !self.options.only_verses {
            out.push_str(&table.render());
            out.push('\n');
        }

        debug!(rendered, searching = search.is_some(), "rendered verse block");
        RenderSummary {
            state: RenderState::Flushed,
            rendered,
        }
    }

    /// Consume a record, highlighting its text once when a search is active.
    fn render_record(&self, record: VerseRecord, search: Option<&SearchPattern>) -> RenderRow {
        let reference_label = record.reference_label();
        let text = match search {
            Some(pattern) => highlight(&record.text, pattern, self.options.result_color),
            None => record.text,
        };

        let body_lines = if self.options.only_verses {
            vec![text]
        } else {
            wrap(&text, self.width)
        };

        RenderRow {
            reference_label,
            body_lines,
        }
    }
}
