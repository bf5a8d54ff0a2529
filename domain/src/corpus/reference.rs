//! Composite verse reference (Value Object)

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when a verse reference string cannot be parsed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid verse reference '{0}': expected \"Book Chapter:Verse\"")]
pub struct ParseVerseRefError(pub String);

/// A value-comparable verse key: book name, chapter number, verse number
///
/// This is the identity used to compare verses across corpus reloads:
/// two references are equal when their components are equal, never by
/// object identity. It round-trips with the human-readable
/// `"Genesis 1:1"` form via [`std::fmt::Display`] and [`std::str::FromStr`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerseRef {
    book: String,
    chapter: u32,
    verse: u32,
}

impl VerseRef {
    /// Create a reference from its components
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// Name of the referenced book
    pub fn book(&self) -> &str {
        &self.book
    }

    /// 1-based chapter number
    pub fn chapter(&self) -> u32 {
        self.chapter
    }

    /// 1-based verse number
    pub fn verse(&self) -> u32 {
        self.verse
    }
}

impl std::fmt::Display for VerseRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

impl std::str::FromStr for VerseRef {
    type Err = ParseVerseRefError;

    /// Parse `"Book Chapter:Verse"`
    ///
    /// The book name is everything before the last space, so names with
    /// spaces or leading digits (`"1 John 3:16"`) parse correctly.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVerseRefError(s.to_string());

        let (book, numbers) = s.trim().rsplit_once(' ').ok_or_else(err)?;
        let (chapter, verse) = numbers.split_once(':').ok_or_else(err)?;

        let book = book.trim();
        let chapter: u32 = chapter.parse().map_err(|_| err())?;
        let verse: u32 = verse.parse().map_err(|_| err())?;

        if book.is_empty() || chapter == 0 || verse == 0 {
            return Err(err());
        }

        Ok(VerseRef::new(book, chapter, verse))
    }
}

impl Serialize for VerseRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for VerseRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
