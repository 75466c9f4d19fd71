//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{ApiError, Chapter, ChapterDetail, ChapterSource, RevelationType, Verse};

/// A chapter source for tests that never perform real API calls.
pub struct NoopSource;

#[async_trait]
impl ChapterSource for NoopSource {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_chapters(&self) -> Result<Vec<Chapter>, ApiError> {
        Ok(vec![])
    }

    async fn fetch_verses(&self, number: u16) -> Result<ChapterDetail, ApiError> {
        Ok(sample_detail(number, 0))
    }
}

/// Creates a test App with a NoopSource.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopSource), "en.asad".to_string())
}

/// Builds `count` chapters numbered 1..=count, alternating revelation type.
pub fn sample_chapters(count: u16) -> Vec<Chapter> {
    (1..=count)
        .map(|number| Chapter {
            number,
            english_name: format!("Surah {number}"),
            arabic_name: format!("سورة {number}"),
            revelation: if number % 2 == 1 {
                RevelationType::Meccan
            } else {
                RevelationType::Medinan
            },
            verse_count: 3 + number,
        })
        .collect()
}

/// Builds a detail for `chapter_number` with verses numbered 1..=count.
pub fn sample_detail(chapter_number: u16, count: u16) -> ChapterDetail {
    ChapterDetail {
        chapter_number,
        verses: (1..=count)
            .map(|n| Verse {
                number_in_chapter: n,
                text: format!("Verse {n} of surah {chapter_number}."),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_source_returns_empty_data() {
        let source = NoopSource;
        assert_eq!(source.name(), "noop");

        let chapters = tokio_test::block_on(source.fetch_chapters()).unwrap();
        assert!(chapters.is_empty());

        let detail = tokio_test::block_on(source.fetch_verses(3)).unwrap();
        assert_eq!(detail.chapter_number, 3);
        assert!(detail.verses.is_empty());
    }
}
