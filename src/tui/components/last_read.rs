//! # LastRead Component
//!
//! Banner card above the chapter list showing the reading bookmark.
//!
//! ## Responsibilities
//!
//! - Display the "Last Read" card with chapter name and ayah position
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! The bookmark is fixed at Al-Fatiah, ayah 1. There is no persistence layer
//! behind it yet, so the component takes no props at all: it renders the same
//! card no matter what the rest of the application is doing. When reading
//! positions are ever tracked, the constants below become props and nothing
//! else has to change.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

use crate::tui::component::Component;

/// Card height including borders: three content lines plus top and bottom.
pub const BANNER_HEIGHT: u16 = 5;

const BANNER_LABEL: &str = "Last Read";
const BANNER_CHAPTER: &str = "Al-Fatiah";
const BANNER_POSITION: &str = "Ayah No: 1";

const fn label_style() -> Style {
    Style::new().fg(Color::Magenta)
}

const fn chapter_style() -> Style {
    Style::new()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

const fn position_style() -> Style {
    Style::new().fg(Color::DarkGray)
}

/// Bookmark banner card.
pub struct LastRead;

impl Component for LastRead {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(Color::Magenta))
            .padding(Padding::horizontal(1));

        let lines = vec![
            Line::from(Span::styled(BANNER_LABEL, label_style())),
            Line::from(Span::styled(BANNER_CHAPTER, chapter_style())),
            Line::from(Span::styled(BANNER_POSITION, position_style())),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
