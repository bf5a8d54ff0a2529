//! Indexed verse catalog
//!
//! Builds the traversable corpus from the flat record sequence and exposes
//! reading-order traversal over it. A [`Corpus`] value only exists after a
//! successful load, so plan generation can never observe a half-initialized
//! catalog.

use crate::corpus::entities::{Book, Chapter, Verse, VerseId};
use crate::corpus::record::VerseRecord;
use crate::corpus::reference::VerseRef;
use crate::error::DomainError;
use std::collections::HashMap;

/// A validated, forward-ordered pair of verse identities (inclusive)
///
/// Ranges are only handed out by [`Corpus::range`] and
/// [`Corpus::full_range`], which reject inverted bounds, so a range is
/// always traversable front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerseRange {
    from: VerseId,
    to: VerseId,
}

impl VerseRange {
    /// First verse of the range
    pub fn from(&self) -> VerseId {
        self.from
    }

    /// Last verse of the range (inclusive)
    pub fn to(&self) -> VerseId {
        self.to
    }

    /// Number of verses covered
    pub fn len(&self) -> usize {
        self.to.index() - self.from.index() + 1
    }

    /// A range always covers at least one verse
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// The full ordered collection of books, chapters and verses
///
/// Verses live in a flat arena in reading order; books and chapters
/// reference spans of that arena. Crossing a chapter or book boundary
/// during traversal is therefore a single index step.
#[derive(Debug, Clone)]
pub struct Corpus {
    books: Vec<Book>,
    verses: Vec<Verse>,
    book_index: HashMap<String, usize>,
}

impl Corpus {
    /// Build a corpus from pre-sorted records
    ///
    /// Consecutive records are grouped into books by name change and into
    /// chapters by number change; the input is trusted to be sorted in
    /// reading order and is never re-sorted. Each verse is assigned a
    /// strictly increasing [`VerseId`] in encounter order.
    ///
    /// Fails with [`DomainError::EmptyCorpus`] when no records arrive.
    pub fn from_records(
        records: impl IntoIterator<Item = VerseRecord>,
    ) -> Result<Self, DomainError> {
        let mut books: Vec<Book> = Vec::new();
        let mut verses: Vec<Verse> = Vec::new();
        let mut book_index = HashMap::new();

        for record in records {
            let new_book = books
                .last()
                .map_or(true, |book| book.name != record.book_name);
            if new_book {
                book_index.insert(record.book_name.clone(), books.len());
                books.push(Book {
                    ordinal: record.book_ordinal,
                    name: record.book_name.clone(),
                    chapters: Vec::new(),
                });
            }

            let owning_book = books.len() - 1;
            let book = &mut books[owning_book];

            let new_chapter = book
                .chapters
                .last()
                .map_or(true, |chapter| chapter.number != record.chapter_num);
            if new_chapter {
                let at = verses.len();
                book.chapters.push(Chapter {
                    number: record.chapter_num,
                    verses: at..at,
                });
            }

            let owning_chapter = book.chapters.len() - 1;
            verses.push(Verse {
                id: VerseId(verses.len()),
                book_index: owning_book,
                chapter_index: owning_chapter,
                number: record.verse_num,
                text_length: record.text_length,
            });
            book.chapters[owning_chapter].verses.end = verses.len();
        }

        if verses.is_empty() {
            return Err(DomainError::EmptyCorpus);
        }

        Ok(Self {
            books,
            verses,
            book_index,
        })
    }

    /// All books in reading order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of verses in the corpus
    pub fn len(&self) -> usize {
        self.verses.len()
    }

    /// A corpus is never empty by construction
    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Look up a verse by identity
    pub fn verse(&self, id: VerseId) -> Option<&Verse> {
        self.verses.get(id.index())
    }

    /// The verse immediately following `id` in global reading order
    ///
    /// Crosses chapter and book boundaries; `None` past the final verse of
    /// the corpus.
    pub fn next(&self, id: VerseId) -> Option<VerseId> {
        let next = id.index() + 1;
        (next < self.verses.len()).then_some(VerseId(next))
    }

    /// First verse of the corpus
    pub fn first_verse(&self) -> VerseId {
        VerseId(0)
    }

    /// Last verse of the corpus
    pub fn last_verse(&self) -> VerseId {
        VerseId(self.verses.len() - 1)
    }

    /// The full corpus span
    pub fn full_range(&self) -> VerseRange {
        VerseRange {
            from: self.first_verse(),
            to: self.last_verse(),
        }
    }

    /// Composite reference for a verse identity
    pub fn verse_ref(&self, id: VerseId) -> Option<VerseRef> {
        let verse = self.verse(id)?;
        let book = &self.books[verse.book_index];
        let chapter = &book.chapters[verse.chapter_index];
        Some(VerseRef::new(book.name.clone(), chapter.number, verse.number))
    }

    /// Resolve a composite reference to its verse identity
    ///
    /// Chapters and verses number contiguously from 1, so both lookups are
    /// direct index arithmetic; the stored numbers are verified so a
    /// reference into malformed data resolves to `None` rather than to the
    /// wrong verse.
    pub fn resolve(&self, reference: &VerseRef) -> Option<VerseId> {
        let book = self.books.get(*self.book_index.get(reference.book())?)?;
        let chapter = book
            .chapters
            .get(reference.chapter().checked_sub(1)? as usize)?;

        let index = chapter.verses.start + reference.verse().checked_sub(1)? as usize;
        if !chapter.verses.contains(&index) {
            return None;
        }

        let verse = &self.verses[index];
        (chapter.number == reference.chapter() && verse.number == reference.verse())
            .then_some(verse.id)
    }

    /// Validated range between two composite references
    pub fn range(&self, from: &VerseRef, to: &VerseRef) -> Result<VerseRange, DomainError> {
        let from_id = self
            .resolve(from)
            .ok_or_else(|| DomainError::UnknownVerse(from.to_string()))?;
        let to_id = self
            .resolve(to)
            .ok_or_else(|| DomainError::UnknownVerse(to.to_string()))?;

        if to_id < from_id {
            return Err(DomainError::InvertedVerseRange {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        Ok(VerseRange {
            from: from_id,
            to: to_id,
        })
    }

    /// Verses from the range start to its end, inclusive
    ///
    /// Finite and restartable; the walk follows [`Corpus::next`] order and
    /// terminates at the range end. The range must have been produced by
    /// this corpus.
    pub fn verses_between(&self, range: &VerseRange) -> impl Iterator<Item = &Verse> {
        self.verses[range.from().index()..=range.to().index()].iter()
    }
}
