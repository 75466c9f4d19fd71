//! # ChapterList Component
//!
//! Scrollable view of the 114 surah cards.
//!
//! ## Responsibilities
//!
//! - Display the chapter cards, growing the expanded one in place
//! - Manage scrolling and keyboard selection
//! - Cache row heights so layout work happens only when something changed
//!
//! ## Architecture
//!
//! `ChapterList` is a transient component (created each frame) that wraps
//! `&'a mut ChapterListState` (persistent state) plus the chapter slice and
//! expansion borrowed from core state (props).
//!
//! Row heights are a pure function of (chapter count, content width,
//! expansion), so the cache is keyed on exactly that triple and rebuilt
//! wholesale when the key changes. Collapsed cards are constant-height;
//! only the one expanded card ever costs a wrap calculation.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::api::Chapter;
use crate::core::state::{Expansion, Fetch};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::chapter_row::ChapterRow;
use crate::tui::event::TuiEvent;

/// Layout and scroll state for the chapter list.
/// Must be persisted in the parent TuiState.
pub struct ChapterListState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Cached layout measurements
    pub layout: LayoutCache,
    /// Currently selected row index (hover or keyboard navigation)
    pub selected_index: Option<usize>,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for ChapterListState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChapterListState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::new(),
            selected_index: None,
            viewport_height: 0,
        }
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    /// Prevents overscrolling past the last chapter.
    pub fn clamp_scroll(&mut self) {
        let max_y = self
            .layout
            .total_height()
            .saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so the selected row is fully visible.
    /// If the row is taller than the viewport, align its top edge.
    pub fn scroll_to_selected(&mut self) {
        let Some(idx) = self.selected_index else {
            return;
        };
        if idx >= self.layout.prefix_heights.len() {
            return;
        }

        let row_top = if idx == 0 {
            0
        } else {
            self.layout.prefix_heights[idx - 1]
        };
        let row_bottom = self.layout.prefix_heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if row_top < offset_y {
            // Selected row is above the viewport — scroll up to its top
            self.scroll_state.set_offset(Position { x: 0, y: row_top });
        } else if row_bottom > offset_y + self.viewport_height {
            // Selected row is below the viewport — scroll down to its bottom
            let new_y = row_bottom.saturating_sub(self.viewport_height);
            let new_y = new_y.min(row_top);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }

    /// Move the selection down one row and keep it in view.
    pub fn select_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) => (i + 1).min(count - 1),
            None => 0,
        });
        self.scroll_to_selected();
    }

    /// Move the selection up one row and keep it in view.
    pub fn select_prev(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(i) => i.saturating_sub(1),
            None => 0,
        });
        self.scroll_to_selected();
    }

    fn scroll_to_top(&mut self) {
        self.scroll_state.set_offset(Position { x: 0, y: 0 });
    }

    fn scroll_to_end(&mut self) {
        let max_y = self
            .layout
            .total_height()
            .saturating_sub(self.viewport_height);
        self.scroll_state.set_offset(Position { x: 0, y: max_y });
    }
}

/// Scrollable chapter view component.
/// Created fresh each frame with references to state and data.
pub struct ChapterList<'a> {
    // Mutable reference to persistent state
    pub state: &'a mut ChapterListState,
    pub chapters: &'a [Chapter],
    pub expanded: Option<&'a Expansion>,
    pub spinner_frame: usize,
}

impl<'a> ChapterList<'a> {
    pub fn new(
        state: &'a mut ChapterListState,
        chapters: &'a [Chapter],
        expanded: Option<&'a Expansion>,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            chapters,
            expanded,
            spinner_frame,
        }
    }
}

impl<'a> Component for ChapterList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        // 1. Refresh the layout cache (no-op unless the key changed)
        self.state
            .layout
            .refresh(self.chapters, self.expanded, content_width);
        let total_height = self.state.layout.total_height();

        // 2. Clamp scroll offset to prevent overscrolling past content
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible rows into a ScrollView
        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = if visible_range.start > 0 {
            self.state.layout.prefix_heights[visible_range.start - 1]
        } else {
            0
        };

        for i in visible_range {
            let chapter = &self.chapters[i];
            let height = self.state.layout.heights[i];
            let row_rect = Rect::new(0, y_offset, content_width, height);

            let expansion = self
                .expanded
                .filter(|e| e.number == chapter.number)
                .map(|e| &e.detail);

            let row = ChapterRow {
                chapter,
                expansion,
                is_selected: self.state.selected_index == Some(i),
                spinner_frame: self.spinner_frame,
            };
            scroll_view.render_widget(row, row_rect);

            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// EventHandler is implemented on `ChapterListState` rather than `ChapterList`
/// because event handling needs the persistent scroll state, while the
/// component itself is recreated each frame with fresh props.
impl EventHandler for ChapterListState {
    type Event = (); // Scrolling is handled internally; taps are translated by the parent

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            TuiEvent::ScrollToTop => {
                self.scroll_to_top();
                None
            }
            TuiEvent::ScrollToBottom => {
                self.scroll_to_end();
                None
            }
            // Mouse events are handled by the parent, which owns hit testing
            _ => None,
        }
    }
}

// ─── Layout Cache ────────────────────────────────────────────────────

/// Everything row heights depend on. When this key is unchanged the cached
/// heights are reused as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct CacheKey {
    chapter_count: usize,
    content_width: u16,
    /// (number, token, detail phase) of the expansion, if any. The token
    /// changes on every new fetch and the phase on every fetch transition,
    /// so either kind of change invalidates the heights.
    expansion: Option<(u16, u64, u8)>,
}

impl CacheKey {
    fn of(chapters: &[Chapter], expanded: Option<&Expansion>, content_width: u16) -> Self {
        let expansion = expanded.map(|e| {
            let phase = match e.detail {
                Fetch::Idle => 0,
                Fetch::Loading => 1,
                Fetch::Loaded(_) => 2,
                Fetch::Failed(_) => 3,
            };
            (e.number, e.token, phase)
        });
        Self {
            chapter_count: chapters.len(),
            content_width,
            expansion,
        }
    }
}

/// Cached layout measurements
pub struct LayoutCache {
    pub heights: Vec<u16>,
    pub prefix_heights: Vec<u16>,
    key: CacheKey,
}

impl Default for LayoutCache {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutCache {
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            prefix_heights: Vec::new(),
            key: CacheKey::default(),
        }
    }

    /// Recompute heights if anything they depend on changed.
    pub fn refresh(
        &mut self,
        chapters: &[Chapter],
        expanded: Option<&Expansion>,
        content_width: u16,
    ) {
        let key = CacheKey::of(chapters, expanded, content_width);
        if key == self.key && !self.heights.is_empty() {
            return;
        }

        self.heights = chapters
            .iter()
            .map(|chapter| {
                let expansion = expanded
                    .filter(|e| e.number == chapter.number)
                    .map(|e| &e.detail);
                ChapterRow::calculate_height(expansion, content_width)
            })
            .collect();
        self.rebuild_prefix_heights();
        self.key = key;
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    fn rebuild_prefix_heights(&mut self) {
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc += h;
                Some(*acc)
            })
            .collect();
    }

    /// Rows overlapping the viewport, padded by half a screen on each side
    /// so partially scrolled rows never pop in late.
    pub fn visible_range(
        &self,
        scroll_offset: u16,
        viewport_height: u16,
    ) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_chapters, sample_detail};

    fn expansion(number: u16, token: u64, detail: Fetch<crate::api::ChapterDetail>) -> Expansion {
        Expansion {
            number,
            token,
            detail,
        }
    }

    #[test]
    fn test_refresh_builds_uniform_collapsed_heights() {
        let chapters = sample_chapters(5);
        let mut cache = LayoutCache::new();
        cache.refresh(&chapters, None, 60);

        assert_eq!(cache.heights, vec![4, 4, 4, 4, 4]);
        assert_eq!(cache.prefix_heights, vec![4, 8, 12, 16, 20]);
        assert_eq!(cache.total_height(), 20);
    }

    #[test]
    fn test_refresh_grows_expanded_row_only() {
        let chapters = sample_chapters(5);
        let exp = expansion(3, 1, Fetch::Loaded(sample_detail(3, 4)));
        let mut cache = LayoutCache::new();
        cache.refresh(&chapters, Some(&exp), 60);

        assert_eq!(cache.heights[0], 4);
        assert_eq!(cache.heights[1], 4);
        // header (2) + borders (2) + separator (1) + 4 verses
        assert_eq!(cache.heights[2], 9);
        assert_eq!(cache.heights[3], 4);
    }

    #[test]
    fn test_refresh_reuses_cache_for_same_key() {
        let chapters = sample_chapters(3);
        let mut cache = LayoutCache::new();
        cache.refresh(&chapters, None, 60);

        // Poke a height; an unchanged key must not recompute it.
        cache.heights[0] = 99;
        cache.refresh(&chapters, None, 60);
        assert_eq!(cache.heights[0], 99);

        // A width change recomputes everything.
        cache.refresh(&chapters, None, 50);
        assert_eq!(cache.heights[0], 4);
    }

    #[test]
    fn test_refresh_invalidates_on_detail_phase_change() {
        let chapters = sample_chapters(3);
        let mut cache = LayoutCache::new();

        let loading = expansion(2, 7, Fetch::Loading);
        cache.refresh(&chapters, Some(&loading), 60);
        let loading_height = cache.heights[1];

        let loaded = expansion(2, 7, Fetch::Loaded(sample_detail(2, 10)));
        cache.refresh(&chapters, Some(&loaded), 60);
        assert!(cache.heights[1] > loading_height);
    }

    #[test]
    fn test_refresh_invalidates_on_new_token() {
        let chapters = sample_chapters(3);
        let mut cache = LayoutCache::new();
        cache.refresh(&chapters, Some(&expansion(2, 1, Fetch::Loading)), 60);
        cache.heights[1] = 99;

        // Same chapter, same phase, fresh request generation.
        cache.refresh(&chapters, Some(&expansion(2, 2, Fetch::Loading)), 60);
        assert_ne!(cache.heights[1], 99);
    }

    #[test]
    fn test_visible_range_windows_rows() {
        let chapters = sample_chapters(20);
        let mut cache = LayoutCache::new();
        cache.refresh(&chapters, None, 60); // 20 rows × 4 = 80 tall

        let top = cache.visible_range(0, 12);
        assert_eq!(top.start, 0);
        assert!(top.end < 20);

        let bottom = cache.visible_range(68, 12);
        assert_eq!(bottom.end, 20);
        assert!(bottom.start > 0);
    }

    #[test]
    fn test_scroll_to_selected_moves_offset_down_and_up() {
        let chapters = sample_chapters(20);
        let mut state = ChapterListState::new();
        state.layout.refresh(&chapters, None, 60);
        state.viewport_height = 12;

        // Selecting a row below the viewport scrolls down to its bottom edge
        state.selected_index = Some(9); // rows 0..=9 span 40 cells
        state.scroll_to_selected();
        assert_eq!(state.scroll_state.offset().y, 40 - 12);

        // Selecting a row above the viewport scrolls up to its top edge
        state.selected_index = Some(0);
        state.scroll_to_selected();
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_selection_navigation_clamps_at_ends() {
        let mut state = ChapterListState::new();
        let chapters = sample_chapters(3);
        state.layout.refresh(&chapters, None, 60);
        state.viewport_height = 40;

        state.select_next(3);
        assert_eq!(state.selected_index, Some(0));
        state.select_next(3);
        state.select_next(3);
        state.select_next(3);
        assert_eq!(state.selected_index, Some(2));

        state.select_prev(3);
        state.select_prev(3);
        state.select_prev(3);
        assert_eq!(state.selected_index, Some(0));
    }

    #[test]
    fn test_clamp_scroll_limits_overscroll() {
        let chapters = sample_chapters(5);
        let mut state = ChapterListState::new();
        state.layout.refresh(&chapters, None, 60); // total 20
        state.viewport_height = 8;

        state.scroll_state.set_offset(Position { x: 0, y: 100 });
        state.clamp_scroll();
        assert_eq!(state.scroll_state.offset().y, 12);
    }
}
