//! # ChapterRow Component
//!
//! Renders one surah as a bordered card, closed or open.
//!
//! **Collapsed**:
//!   `╭──────────────────────────────────────╮`
//!   `│   1  Al-Faatiha          ٱلْفَاتِحَة │`
//!   `│      MECCAN - 7 VERSES               │`
//!   `╰──────────────────────────────────────╯`
//!
//! **Expanded** (the card grows downward with the verses, a spinner while
//! they load, or the fetch error):
//!   `╭──────────────────────────────────────╮`
//!   `│   1  Al-Faatiha          ٱلْفَاتِحَة │`
//!   `│      MECCAN - 7 VERSES               │`
//!   `│                                      │`
//!   `│   1. In the name of God, the Most    │`
//!   `│      Gracious, the Dispenser of      │`
//!   `│      Grace.                          │`
//!   `│   2. All praise is due to God alone… │`
//!   `╰──────────────────────────────────────╯`

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::api::{Chapter, ChapterDetail};
use crate::core::state::Fetch;
use crate::tui::ui::spinner_glyph;

/// Horizontal padding (per side) inside the bordered card.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal overhead: borders (2) + padding (2 × CONTENT_PAD_H).
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical overhead: top border + bottom border.
const VERTICAL_OVERHEAD: u16 = 2;
/// Header lines inside the card: name line + metadata line.
const HEADER_LINES: u16 = 2;
/// Width of the `  1. ` verse prefix; continuation lines indent to match.
const VERSE_PREFIX_WIDTH: usize = 5;

// ─── Styles ──────────────────────────────────────────────────────────
// Magenta = chapter identity (number, Arabic name), White = the reading text.

const fn accent_style() -> Style {
    Style::new().fg(Color::Magenta)
}
const fn name_style() -> Style {
    Style::new().fg(Color::White).add_modifier(Modifier::BOLD)
}
const fn meta_style() -> Style {
    Style::new().fg(Color::DarkGray)
}
const fn verse_style() -> Style {
    Style::new().fg(Color::Gray)
}
const fn pending_style() -> Style {
    Style::new().fg(Color::DarkGray)
}
const fn error_style() -> Style {
    Style::new().fg(Color::Red)
}

// ─── ChapterRow ──────────────────────────────────────────────────────

/// One surah card. `expansion` is `Some` only on the row the user has open;
/// it carries that row's verse fetch state.
pub struct ChapterRow<'a> {
    pub chapter: &'a Chapter,
    pub expansion: Option<&'a Fetch<ChapterDetail>>,
    pub is_selected: bool,
    pub spinner_frame: usize,
}

impl<'a> ChapterRow<'a> {
    /// Calculate the height needed to render a row at the given width.
    ///
    /// Collapsed: borders + two header lines. The header never wraps, so
    /// every collapsed card is the same height. Expanded: borders + header +
    /// the same body lines `render` will draw, so the layout cache and the
    /// drawn card can never disagree.
    pub fn calculate_height(expansion: Option<&Fetch<ChapterDetail>>, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        if content_width == 0 {
            return 1;
        }

        let body = match expansion {
            Some(detail) => body_lines(detail, content_width, 0).len() as u16,
            None => 0,
        };
        HEADER_LINES + body + VERTICAL_OVERHEAD
    }
}

impl<'a> Widget for ChapterRow<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let expanded = self.expansion.is_some();
        let border_style = if expanded {
            accent_style()
        } else if self.is_selected {
            Style::new().fg(Color::White)
        } else {
            Style::new().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(ratatui::widgets::BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let content_width = inner.width as usize;
        let mut lines = header_lines(self.chapter, content_width);
        if let Some(detail) = self.expansion {
            lines.extend(body_lines(detail, content_width, self.spinner_frame));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

// ─── Line Construction ───────────────────────────────────────────────

/// The two header lines: number, English name, right-aligned Arabic name,
/// then the metadata line. The Arabic name is dropped when it cannot fit.
fn header_lines(chapter: &Chapter, content_width: usize) -> Vec<Line<'static>> {
    let number = format!("{:>3}", chapter.number);
    let gap = "  ";
    let mut name_line = vec![
        Span::styled(number, accent_style()),
        Span::raw(gap),
        Span::styled(chapter.english_name.clone(), name_style()),
    ];

    let left_width = 3 + gap.len() + chapter.english_name.width();
    let arabic_width = chapter.arabic_name.width();
    if left_width + 1 + arabic_width <= content_width {
        let pad = content_width - left_width - arabic_width;
        name_line.push(Span::raw(" ".repeat(pad)));
        name_line.push(Span::styled(chapter.arabic_name.clone(), accent_style()));
    }

    vec![
        Line::from(name_line),
        Line::from(vec![
            Span::raw(" ".repeat(VERSE_PREFIX_WIDTH)),
            Span::styled(chapter.meta_line(), meta_style()),
        ]),
    ]
}

/// The expanded card body: a blank separator, then one of spinner line,
/// wrapped error text, or the numbered verses with a hanging indent.
fn body_lines(
    detail: &Fetch<ChapterDetail>,
    content_width: usize,
    spinner_frame: usize,
) -> Vec<Line<'static>> {
    let mut lines = vec![Line::raw("")];

    match detail {
        Fetch::Idle | Fetch::Loading => {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(VERSE_PREFIX_WIDTH)),
                Span::styled(
                    format!("{} Loading verses…", spinner_glyph(spinner_frame)),
                    pending_style(),
                ),
            ]));
        }
        Fetch::Failed(message) => {
            for wrapped in wrap_with_hanging_indent(&format!("✗ {message}"), content_width) {
                lines.push(Line::styled(wrapped, error_style()));
            }
        }
        Fetch::Loaded(detail) => {
            for verse in &detail.verses {
                lines.extend(verse_lines(
                    verse.number_in_chapter,
                    &verse.text,
                    content_width,
                ));
            }
        }
    }

    lines
}

/// One verse as `  1. text…` with continuation lines indented under the text.
fn verse_lines(number: u16, text: &str, content_width: usize) -> Vec<Line<'static>> {
    let avail = content_width.saturating_sub(VERSE_PREFIX_WIDTH);
    if avail == 0 {
        return vec![Line::styled(format!("{number}."), verse_style())];
    }

    let wrapped = textwrap::wrap(text, textwrap::Options::new(avail));
    let mut lines = Vec::with_capacity(wrapped.len().max(1));
    let indent = " ".repeat(VERSE_PREFIX_WIDTH);

    for (i, piece) in wrapped.iter().enumerate() {
        if i == 0 {
            lines.push(Line::from(vec![
                Span::styled(format!("{number:>3}. "), accent_style().add_modifier(Modifier::DIM)),
                Span::styled(piece.to_string(), verse_style()),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(piece.to_string(), verse_style()),
            ]));
        }
    }

    // textwrap returns no lines for whitespace-only text; keep the number
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            format!("{number:>3}."),
            accent_style().add_modifier(Modifier::DIM),
        )));
    }

    lines
}

/// Wrap plain text so continuation lines align under the first character.
fn wrap_with_hanging_indent(text: &str, content_width: usize) -> Vec<String> {
    let indent = " ".repeat(VERSE_PREFIX_WIDTH);
    let options = textwrap::Options::new(content_width.max(1))
        .initial_indent(&indent)
        .subsequent_indent(&indent);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|c| c.into_owned())
        .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{RevelationType, Verse};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_chapter() -> Chapter {
        Chapter {
            number: 1,
            english_name: "Al-Faatiha".to_string(),
            arabic_name: "ٱلْفَاتِحَة".to_string(),
            revelation: RevelationType::Meccan,
            verse_count: 7,
        }
    }

    fn make_detail(verses: &[&str]) -> ChapterDetail {
        ChapterDetail {
            chapter_number: 1,
            verses: verses
                .iter()
                .enumerate()
                .map(|(i, text)| Verse {
                    number_in_chapter: (i + 1) as u16,
                    text: text.to_string(),
                })
                .collect(),
        }
    }

    fn render_to_text(row: ChapterRow, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(row, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    // ── Height tests ─────────────────────────────────────────────────

    #[test]
    fn collapsed_height_is_header_plus_borders() {
        assert_eq!(ChapterRow::calculate_height(None, 60), 4);
    }

    #[test]
    fn loading_expansion_adds_separator_and_spinner_line() {
        let height = ChapterRow::calculate_height(Some(&Fetch::Loading), 60);
        assert_eq!(height, 4 + 2);
    }

    #[test]
    fn loaded_expansion_grows_with_verses() {
        let detail = Fetch::Loaded(make_detail(&["short", "also short"]));
        let height = ChapterRow::calculate_height(Some(&detail), 60);
        // borders (2) + header (2) + separator (1) + one line per verse (2)
        assert_eq!(height, 7);
    }

    #[test]
    fn long_verse_wraps_and_height_matches() {
        let long = "In the name of God, the Most Gracious, the Dispenser of Grace";
        let detail = Fetch::Loaded(make_detail(&[long]));
        let narrow = ChapterRow::calculate_height(Some(&detail), 30);
        let wide = ChapterRow::calculate_height(Some(&detail), 120);
        assert!(narrow > wide);
        assert_eq!(wide, 4 + 1 + 1);
    }

    #[test]
    fn zero_width_degrades_to_single_line() {
        assert_eq!(ChapterRow::calculate_height(None, 0), 1);
        assert_eq!(
            ChapterRow::calculate_height(Some(&Fetch::Loading), HORIZONTAL_OVERHEAD),
            1
        );
    }

    // ── Render tests ─────────────────────────────────────────────────

    #[test]
    fn collapsed_row_shows_name_and_meta() {
        let chapter = make_chapter();
        let text = render_to_text(
            ChapterRow {
                chapter: &chapter,
                expansion: None,
                is_selected: false,
                spinner_frame: 0,
            },
            60,
            4,
        );
        assert!(text.contains("1"));
        assert!(text.contains("Al-Faatiha"));
        assert!(text.contains("MECCAN - 7 VERSES"));
    }

    #[test]
    fn expanded_row_shows_numbered_verses() {
        let chapter = make_chapter();
        let detail = Fetch::Loaded(make_detail(&["first verse", "second verse"]));
        let height = ChapterRow::calculate_height(Some(&detail), 60);
        let text = render_to_text(
            ChapterRow {
                chapter: &chapter,
                expansion: Some(&detail),
                is_selected: true,
                spinner_frame: 0,
            },
            60,
            height,
        );
        assert!(text.contains("1. first verse"));
        assert!(text.contains("2. second verse"));
    }

    #[test]
    fn failed_expansion_shows_error_inline() {
        let chapter = make_chapter();
        let detail = Fetch::Failed("network error: offline".to_string());
        let height = ChapterRow::calculate_height(Some(&detail), 60);
        let text = render_to_text(
            ChapterRow {
                chapter: &chapter,
                expansion: Some(&detail),
                is_selected: false,
                spinner_frame: 0,
            },
            60,
            height,
        );
        assert!(text.contains("✗ network error: offline"));
        // The header stays visible above the error
        assert!(text.contains("Al-Faatiha"));
    }

    #[test]
    fn loading_expansion_shows_spinner_line() {
        let chapter = make_chapter();
        let text = render_to_text(
            ChapterRow {
                chapter: &chapter,
                expansion: Some(&Fetch::Loading),
                is_selected: false,
                spinner_frame: 0,
            },
            60,
            6,
        );
        assert!(text.contains("Loading verses"));
    }

    #[test]
    fn narrow_row_drops_arabic_name_without_panicking() {
        let chapter = make_chapter();
        // 19 wide leaves exactly enough for the number and English name
        let text = render_to_text(
            ChapterRow {
                chapter: &chapter,
                expansion: None,
                is_selected: false,
                spinner_frame: 0,
            },
            19,
            4,
        );
        assert!(text.contains("Al-Faatiha"));
        assert!(!text.contains('ٱ'));
    }
}
