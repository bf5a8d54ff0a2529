//! Verse record input boundary

use serde::{Deserialize, Serialize};

/// A single verse row of the flat corpus document
///
/// Records arrive pre-sorted by reading order (book ordinal, then chapter
/// number, then verse number); the corpus build trusts that order and never
/// re-sorts. Field names follow the camelCase wire form of the corpus
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerseRecord {
    /// Position of the owning book in reading order
    pub book_ordinal: u32,
    /// Name of the owning book (e.g. "Genesis")
    pub book_name: String,
    /// 1-based chapter number within the book
    pub chapter_num: u32,
    /// 1-based verse number within the chapter
    pub verse_num: u32,
    /// Reading-effort weight of the verse text
    pub text_length: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_format() {
        let json = r#"{
            "bookOrdinal": 1,
            "bookName": "Genesis",
            "chapterNum": 1,
            "verseNum": 3,
            "textLength": 27
        }"#;

        let record: VerseRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.book_name, "Genesis");
        assert_eq!(record.chapter_num, 1);
        assert_eq!(record.verse_num, 3);
        assert_eq!(record.text_length, 27);
    }

    #[test]
    fn test_record_roundtrip() {
        let record = VerseRecord {
            book_ordinal: 2,
            book_name: "Exodus".to_string(),
            chapter_num: 20,
            verse_num: 3,
            text_length: 12,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"bookName\":\"Exodus\""));
        assert_eq!(serde_json::from_str::<VerseRecord>(&json).unwrap(), record);
    }
}
