//! Scripture reference parsing.
//!
//! Accepted shapes, with the book name allowed to contain spaces and digits:
//!
//! ```text
//! John 3          whole chapter
//! John 3:16       one verse
//! John 3:16-18    verse range (inclusive)
//! 1 John 4:7
//! Song of Solomon 2:1
//! ```

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result, VerseRecord};

/// A parsed verse locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Book name with inner whitespace collapsed.
    pub book: String,
    /// Chapter number.
    pub chapter: u32,
    /// Inclusive verse range; `None` selects the whole chapter.
    pub verses: Option<(u32, u32)>,
}

impl Reference {
    /// Parse `<book> <chapter>[:<verse>[-<verse>]]`.
    ///
    /// Chapter and verse numbers start at 1; a reversed range is rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = |why: &str| Error::InvalidReference(format!("'{}': {why}", input.trim()));

        let trimmed = input.trim();
        let (book, locator) = trimmed
            .rsplit_once(char::is_whitespace)
            .ok_or_else(|| invalid("expected '<book> <chapter>[:<verse>[-<verse>]]'"))?;

        let book = book.split_whitespace().collect::<Vec<_>>().join(" ");
        if book.is_empty() {
            return Err(invalid("missing book name"));
        }

        let (chapter, verses) = match locator.split_once(':') {
            Some((chapter, verses)) => (chapter, Some(verses)),
            None => (locator, None),
        };
        let chapter = parse_number(chapter).ok_or_else(|| invalid("bad chapter number"))?;

        let verses = match verses {
            None => None,
            Some(range) => {
                let (start, end) = match range.split_once('-') {
                    Some((start, end)) => (start, end),
                    None => (range, range),
                };
                let start = parse_number(start).ok_or_else(|| invalid("bad verse number"))?;
                let end = parse_number(end).ok_or_else(|| invalid("bad verse number"))?;
                if end < start {
                    return Err(invalid("verse range is reversed"));
                }
                Some((start, end))
            },
        };

        Ok(Self {
            book,
            chapter,
            verses,
        })
    }

    /// Whether `record` falls inside this reference.
    pub fn contains(&self, record: &VerseRecord) -> bool {
        if !record.book_name.eq_ignore_ascii_case(&self.book) || record.chapter != self.chapter {
            return false;
        }
        self.verses
            .is_none_or(|(start, end)| (start..=end).contains(&record.verse))
    }
}

impl FromStr for Reference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.book, self.chapter)?;
        match self.verses {
            Some((start, end)) if start == end => write!(f, ":{start}"),
            Some((start, end)) => write!(f, ":{start}-{end}"),
            None => Ok(()),
        }
    }
}

fn parse_number(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_verse() {
        let reference = Reference::parse("John 3:16").unwrap();
        assert_eq!(reference.book, "John");
        assert_eq!(reference.chapter, 3);
        assert_eq!(reference.verses, Some((16, 16)));
        assert_eq!(reference.to_string(), "John 3:16");
    }

    #[test]
    fn test_range_and_multi_word_book() {
        let reference = Reference::parse("  Song of   Solomon 2:1-3 ").unwrap();
        assert_eq!(reference.book, "Song of Solomon");
        assert_eq!(reference.verses, Some((1, 3)));
        assert_eq!(reference.to_string(), "Song of Solomon 2:1-3");
    }

    #[test]
    fn test_numbered_book_whole_chapter() {
        let reference = Reference::parse("1 John 4").unwrap();
        assert_eq!(reference.book, "1 John");
        assert_eq!(reference.chapter, 4);
        assert_eq!(reference.verses, None);
    }

    #[test]
    fn test_rejects_malformed_references() {
        for input in ["John", "", "John x:1", "John 3:", "John 3:5-2", "John 0:1", "John 3:1-"] {
            assert!(Reference::parse(input).is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn test_contains_is_case_insensitive_on_book() {
        let reference = Reference::parse("john 3:16-17").unwrap();
        assert!(reference.contains(&VerseRecord::new("John", 3, 16, "")));
        assert!(reference.contains(&VerseRecord::new("John", 3, 17, "")));
        assert!(!reference.contains(&VerseRecord::new("John", 3, 18, "")));
        assert!(!reference.contains(&VerseRecord::new("John", 4, 16, "")));
        assert!(!reference.contains(&VerseRecord::new("1 John", 3, 16, "")));
    }

    #[test]
    fn test_whole_chapter_contains_every_verse() {
        let reference = Reference::parse("Psalms 23").unwrap();
        assert!(reference.contains(&VerseRecord::new("Psalms", 23, 1, "")));
        assert!(reference.contains(&VerseRecord::new("Psalms", 23, 6, "")));
    }
}
