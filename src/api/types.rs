use serde::Deserialize;

/// Where a surah was revealed. The service sends the strings
/// "Meccan" / "Medinan" verbatim.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevelationType {
    Meccan,
    Medinan,
}

impl RevelationType {
    /// Uppercase display form used in the chapter row metadata line.
    pub fn label(self) -> &'static str {
        match self {
            RevelationType::Meccan => "MECCAN",
            RevelationType::Medinan => "MEDINAN",
        }
    }
}

/// One entry in the surah index. Immutable once fetched; the whole list is
/// replaced wholesale by a successful index fetch, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    /// Canonical surah number, 1 through 114. Unique within the index.
    pub number: u16,
    pub english_name: String,
    /// Native-script name, rendered right-aligned in the row.
    pub arabic_name: String,
    pub revelation: RevelationType,
    pub verse_count: u16,
}

impl Chapter {
    /// Metadata line shown under the name, e.g. "MECCAN - 7 VERSES".
    pub fn meta_line(&self) -> String {
        format!("{} - {} VERSES", self.revelation.label(), self.verse_count)
    }
}

/// The verses of a single surah in one translation edition.
/// Fetched lazily, one chapter at a time, on expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDetail {
    pub chapter_number: u16,
    pub verses: Vec<Verse>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verse {
    /// 1-based position within the chapter (not the global ayah number).
    pub number_in_chapter: u16,
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revelation_labels() {
        assert_eq!(RevelationType::Meccan.label(), "MECCAN");
        assert_eq!(RevelationType::Medinan.label(), "MEDINAN");
    }

    #[test]
    fn test_revelation_deserializes_service_strings() {
        let meccan: RevelationType = serde_json::from_str("\"Meccan\"").unwrap();
        let medinan: RevelationType = serde_json::from_str("\"Medinan\"").unwrap();
        assert_eq!(meccan, RevelationType::Meccan);
        assert_eq!(medinan, RevelationType::Medinan);
        assert!(serde_json::from_str::<RevelationType>("\"Lunar\"").is_err());
    }

    #[test]
    fn test_meta_line_format() {
        let chapter = Chapter {
            number: 1,
            english_name: "Al-Faatiha".to_string(),
            arabic_name: "سُورَةُ ٱلْفَاتِحَةِ".to_string(),
            revelation: RevelationType::Meccan,
            verse_count: 7,
        };
        assert_eq!(chapter.meta_line(), "MECCAN - 7 VERSES");
    }
}
