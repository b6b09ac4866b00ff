//! Search match highlighting.
//!
//! Text that already sits inside a color span is passed through untouched,
//! so highlighting its own output again changes nothing.

use std::cmp::Reverse;

use colored::control::SHOULD_COLORIZE;
use regex::{Captures, Regex};
use tracing::debug;

use crate::wrap::{RESET, is_reset};
use crate::{Rgb, SearchPattern};

/// Wrap `text` in a 24-bit foreground escape for `color`.
///
/// The escape always carries the full `38;2;r;g;b` triple. Returns `text`
/// unchanged when color output is disabled (`NO_COLOR`, `--no-color`, or no
/// terminal).
pub fn colorize(text: &str, color: Rgb) -> String {
    if SHOULD_COLORIZE.should_colorize() {
        format!("\u{1b}[38;2;{};{};{}m{text}{RESET}", color.r, color.g, color.b)
    } else {
        text.to_string()
    }
}

/// Color every occurrence of every distinct substring `pattern` matches in `text`.
///
/// Matches are deduplicated by value in the order they were found. All
/// occurrences of those values are then replaced in one pass over the
/// original text, so colored output is never scanned again: a value that is
/// a substring of another colored value does not get wrapped twice. Where two
/// values could start at the same position the longer one wins, and among
/// values of equal length the one found first.
///
/// Returns `text` unchanged when nothing matches.
pub fn highlight(text: &str, pattern: &SearchPattern, color: Rgb) -> String {
    let segments = segments(text);

    let mut values: Vec<&str> = Vec::new();
    for segment in segments.iter().filter(|segment| segment.plain) {
        for found in pattern.regex().find_iter(segment.text) {
            let value = found.as_str();
            if !value.is_empty() && !values.contains(&value) {
                values.push(value);
            }
        }
    }
    if values.is_empty() {
        return text.to_string();
    }
    values.sort_by_key(|value| Reverse(value.len()));

    let alternation = values
        .iter()
        .map(|value| regex::escape(value))
        .collect::<Vec<_>>()
        .join("|");
    let literals = match Regex::new(&alternation) {
        Ok(literals) => Some(literals),
        Err(err) => {
            debug!(%err, "match literals do not compile; coloring pattern matches instead");
            None
        },
    };
    let replacer = literals.as_ref().unwrap_or_else(|| pattern.regex());

    let mut out = String::with_capacity(text.len() + values.len() * 24);
    for segment in segments {
        if segment.plain {
            let colored = replacer.replace_all(segment.text, |caps: &Captures<'_>| colorize(&caps[0], color));
            out.push_str(&colored);
        } else {
            out.push_str(segment.text);
        }
    }
    out
}

/// A slice of the input, either plain text or escapes and the text they style.
struct Segment<'a> {
    plain: bool,
    text: &'a str,
}

/// Split `text` into plain runs and styled runs.
///
/// A styled run starts at any SGR sequence other than a reset and extends
/// through the reset that closes it (or to the end of the text).
fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut styled = false;
    let mut run_start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find("\u{1b}[") {
        let start = cursor + offset;
        let Some(len) = text[start..].find('m').map(|end| end + 1) else {
            break;
        };
        let sequence = &text[start..start + len];
        cursor = start + len;

        match (styled, is_reset(sequence)) {
            (false, false) => {
                if start > run_start {
                    segments.push(Segment {
                        plain: true,
                        text: &text[run_start..start],
                    });
                }
                run_start = start;
                styled = true;
            },
            (true, true) => {
                segments.push(Segment {
                    plain: false,
                    text: &text[run_start..cursor],
                });
                run_start = cursor;
                styled = false;
            },
            (false, true) => {
                if start > run_start {
                    segments.push(Segment {
                        plain: true,
                        text: &text[run_start..start],
                    });
                }
                segments.push(Segment {
                    plain: false,
                    text: sequence,
                });
                run_start = cursor;
            },
            (true, false) => {},
        }
    }

    if run_start < text.len() {
        segments.push(Segment {
            plain: !styled,
            text: &text[run_start..],
        });
    }
    segments
}
