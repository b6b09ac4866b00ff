//! Search expression compilation.
//!
//! A search argument is either a delimited pattern literal such as `/lov(e|ed)/i`
//! or plain text. Plain text is compiled as a regular expression as-is; it is
//! not escaped, so `a.b` matches `a-b` too.

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::{Error, Result};

/// A compiled search expression plus the text it was compiled from.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    source: String,
    regex: Regex,
}

impl SearchPattern {
    /// Compile a search argument.
    ///
    /// `/body/flags` is recognized when the input starts with `/` and contains
    /// a second, closing `/`. Supported flags: `i`, `m`, `s`, `x`; `g`, `u`
    /// and `y` are accepted and have no effect.
    pub fn parse(input: &str) -> Result<Self> {
        let regex = match split_delimited(input) {
            Some((body, flags)) => {
                let mut builder = RegexBuilder::new(body);
                for flag in flags.chars() {
                    match flag {
                        'i' => builder.case_insensitive(true),
                        'm' => builder.multi_line(true),
                        's' => builder.dot_matches_new_line(true),
                        'x' => builder.ignore_whitespace(true),
                        'g' | 'u' | 'y' => &mut builder,
                        other => {
                            return Err(Error::InvalidPattern(format!(
                                "unsupported flag '{other}' in {input}"
                            )));
                        },
                    };
                }
                builder.build()
            },
            None => Regex::new(input),
        }
        .map_err(|e| Error::InvalidPattern(e.to_string()))?;

        Ok(Self {
            source: input.to_string(),
            regex,
        })
    }

    /// The search argument as the user typed it.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled expression.
    pub const fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Whether `text` contains a match.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl fmt::Display for SearchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn split_delimited(input: &str) -> Option<(&str, &str)> {
    let rest = input.strip_prefix('/')?;
    let close = rest.rfind('/')?;
    let (body, flags) = rest.split_at(close);
    let flags = &flags[1..];
    if flags.chars().all(|c| c.is_ascii_alphabetic()) {
        Some((body, flags))
    } else {
        None
    }
}
