//! Greedy word wrapping for verse bodies.
//!
//! Width is counted in terminal columns. ANSI SGR sequences (the color codes
//! inserted by highlighting) take no columns, and a colored span that crosses
//! a line break is closed at the end of the line and reopened on the next so
//! the color never bleeds into table borders.

use unicode_width::UnicodeWidthChar;

/// Default body width, in columns.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

const ESC: char = '\u{1b}';
pub(crate) const RESET: &str = "\u{1b}[0m";

/// Wrap `text` into lines of at most `width` columns.
///
/// Words are never split: a token wider than `width` sits alone on its own
/// line. Runs of whitespace collapse to a single space and no line carries
/// trailing whitespace. Empty or all-whitespace input yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = display_width(word);
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    carry_styles(lines)
}

/// Display width of `s` in terminal columns, ignoring ANSI escape sequences.
pub fn display_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == ESC {
            skip_escape(&mut chars);
        } else {
            width += c.width().unwrap_or(0);
        }
    }
    width
}

fn skip_escape(chars: &mut std::str::Chars<'_>) {
    // CSI: ESC '[' params... final byte in '@'..='~'
    if chars.next() == Some('[') {
        for c in chars.by_ref() {
            if ('@'..='~').contains(&c) {
                break;
            }
        }
    }
}

/// Close styles left open at a line end and reopen them on the next line.
fn carry_styles(lines: Vec<String>) -> Vec<String> {
    let mut active: Option<String> = None;
    lines
        .into_iter()
        .map(|line| {
            let mut out = String::with_capacity(line.len() + 16);
            if let Some(style) = &active {
                out.push_str(style);
            }
            out.push_str(&line);
            for sequence in sgr_sequences(&line) {
                if is_reset(sequence) {
                    active = None;
                } else {
                    active = Some(sequence.to_string());
                }
            }
            if active.is_some() {
                out.push_str(RESET);
            }
            out
        })
        .collect()
}

fn sgr_sequences(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let start = rest.find("\u{1b}[")?;
        let tail = &rest[start..];
        let end = tail.find('m')? + 1;
        let sequence = &tail[..end];
        rest = &tail[end..];
        Some(sequence)
    })
}

pub(crate) fn is_reset(sequence: &str) -> bool {
    sequence == RESET || sequence == "\u{1b}[m"
}
