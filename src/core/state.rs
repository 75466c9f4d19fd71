//! # Application State
//!
//! Core business state for mushaf. This module contains domain logic only -
//! no TUI-specific types. Presentation state (scroll offset, row selection)
//! lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn ChapterSource>       // surah service
//! ├── chapters: Fetch<Vec<Chapter>>        // the one-shot surah index
//! ├── expanded: Option<Expansion>          // at most one open chapter
//! │   ├── number                           // which surah is open
//! │   ├── token                            // request generation
//! │   └── detail: Fetch<ChapterDetail>     // its verses
//! ├── status_message: String               // status bar text
//! └── edition: String                      // translation edition in use
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use crate::api::{Chapter, ChapterDetail, ChapterSource};
use std::sync::Arc;

/// Lifecycle of one remote fetch. Exactly one variant holds at a time, so
/// "loading with a stale error showing" cannot be represented.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetch<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for Fetch<T> {
    fn default() -> Self {
        Fetch::Idle
    }
}

impl<T> Fetch<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Fetch::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Fetch::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if this fetch failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            Fetch::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// The one open chapter, with the verse fetch it triggered. The token is the
/// generation of that fetch: a response only applies while its token matches,
/// so superseded and post-collapse responses fall away on arrival.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    pub number: u16,
    pub token: u64,
    pub detail: Fetch<ChapterDetail>,
}

pub struct App {
    pub source: Arc<dyn ChapterSource>,
    pub chapters: Fetch<Vec<Chapter>>,
    pub expanded: Option<Expansion>,
    pub status_message: String,
    pub edition: String,
    detail_seq: u64,
}

impl App {
    pub fn new(source: Arc<dyn ChapterSource>, edition: String) -> Self {
        Self {
            source,
            chapters: Fetch::Idle,
            expanded: None,
            status_message: String::from("Loading surah index..."),
            edition,
            detail_seq: 0,
        }
    }

    /// The surah index, or an empty slice until it has loaded.
    pub fn chapter_list(&self) -> &[Chapter] {
        match &self.chapters {
            Fetch::Loaded(list) => list,
            _ => &[],
        }
    }

    /// Number of the currently expanded chapter, if any.
    pub fn expanded_number(&self) -> Option<u16> {
        self.expanded.as_ref().map(|e| e.number)
    }

    /// Number of the chapter at `idx` in the index, copied out of the list
    /// so the caller keeps no borrow on it.
    pub fn chapter_number_at(&self, idx: usize) -> Option<u16> {
        self.chapter_list().get(idx).map(|c| c.number)
    }

    /// True while any request is outstanding. Drives the redraw cadence.
    pub fn is_fetching(&self) -> bool {
        self.chapters.is_loading()
            || self
                .expanded
                .as_ref()
                .is_some_and(|e| e.detail.is_loading())
    }

    /// Issues the next detail request token. Strictly increasing for the
    /// lifetime of the app, never reused.
    pub fn next_detail_token(&mut self) -> u64 {
        self.detail_seq += 1;
        self.detail_seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_chapters, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Loading surah index...");
        assert_eq!(app.chapters, Fetch::Idle);
        assert!(app.expanded.is_none());
        assert_eq!(app.edition, "en.asad");
    }

    #[test]
    fn test_chapter_list_empty_until_loaded() {
        let mut app = test_app();
        assert!(app.chapter_list().is_empty());
        app.chapters = Fetch::Loading;
        assert!(app.chapter_list().is_empty());
        app.chapters = Fetch::Failed("boom".to_string());
        assert!(app.chapter_list().is_empty());
    }

    #[test]
    fn test_chapter_number_at_maps_list_indices() {
        let mut app = test_app();
        assert_eq!(app.chapter_number_at(0), None);

        app.chapters = Fetch::Loaded(sample_chapters(3));
        assert_eq!(app.chapter_number_at(0), Some(1));
        assert_eq!(app.chapter_number_at(2), Some(3));
        assert_eq!(app.chapter_number_at(3), None);
    }

    #[test]
    fn test_detail_tokens_strictly_increase() {
        let mut app = test_app();
        let first = app.next_detail_token();
        let second = app.next_detail_token();
        let third = app.next_detail_token();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_is_fetching_tracks_both_requests() {
        let mut app = test_app();
        assert!(!app.is_fetching());
        app.chapters = Fetch::Loading;
        assert!(app.is_fetching());
        app.chapters = Fetch::Loaded(vec![]);
        assert!(!app.is_fetching());
        app.expanded = Some(Expansion {
            number: 1,
            token: 1,
            detail: Fetch::Loading,
        });
        assert!(app.is_fetching());
    }
}
