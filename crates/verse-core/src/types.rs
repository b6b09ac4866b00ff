use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One scripture verse as delivered by a verse provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    /// Book name as the translation spells it, e.g. `1 John`.
    #[serde(alias = "bookname")]
    pub book_name: String,
    /// Chapter number, starting at 1.
    pub chapter: u32,
    /// Verse number within the chapter, starting at 1.
    pub verse: u32,
    /// Verse text, unstyled.
    pub text: String,
}

impl VerseRecord {
    /// Build a record from its parts.
    pub fn new(book_name: impl Into<String>, chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            book_name: book_name.into(),
            chapter,
            verse,
            text: text.into(),
        }
    }

    /// Reference label in `Book chapter:verse` form, e.g. `John 3:16`.
    pub fn reference_label(&self) -> String {
        format!("{} {}:{}", self.book_name, self.chapter, self.verse)
    }
}

/// A 24-bit foreground color used to highlight search matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure red, the default highlight color.
    pub const RED: Self = Self::new(255, 0, 0);

    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `"r, g, b"`, accepting any mix of commas and whitespace between
    /// the components.
    ///
    /// Exactly three integers in `0..=255` are required; anything else is
    /// [`Error::InvalidColorFormat`].
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || Error::InvalidColorFormat(input.to_string());
        let mut parts = input
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        let mut channels = [0u8; 3];
        for channel in &mut channels {
            let token = parts.next().ok_or_else(invalid)?;
            *channel = token.parse::<u8>().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        let [r, g, b] = channels;
        Ok(Self::new(r, g, b))
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.r, self.g, self.b)
    }
}

/// One table row: the reference label and the wrapped body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    /// `Book chapter:verse` label for the left column.
    pub reference_label: String,
    /// Highlighted, wrapped verse text.
    pub body_lines: Vec<String>,
}
