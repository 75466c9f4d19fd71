//! # TabBar Component
//!
//! Navigation strip above the chapter list. Only the Surah view exists, so
//! the Surah tab is permanently active and the rest are visual placeholders
//! that accept no input.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::tui::component::Component;

pub const TAB_BAR_HEIGHT: u16 = 1;

const TAB_LABELS: [&str; 4] = ["Surah", "Para", "Page", "Hijb"];
const ACTIVE_TAB: usize = 0;

/// Static tab strip with the Surah tab selected.
pub struct TabBar;

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let tabs = Tabs::new(TAB_LABELS.to_vec())
            .style(Style::new().fg(Color::DarkGray))
            .highlight_style(
                Style::new()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .select(ACTIVE_TAB);

        frame.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_all_four_tabs_render() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                TabBar.render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.contains("Surah"));
        assert!(text.contains("Para"));
        assert!(text.contains("Page"));
        assert!(text.contains("Hijb"));
    }

    #[test]
    fn test_surah_tab_is_highlighted() {
        let backend = TestBackend::new(40, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                TabBar.render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let has_active = buffer
            .content()
            .iter()
            .any(|c| c.symbol() == "S" && c.style().fg == Some(Color::Magenta));
        let has_inert = buffer
            .content()
            .iter()
            .any(|c| c.symbol() == "P" && c.style().fg == Some(Color::DarkGray));

        assert!(has_active);
        assert!(has_inert);
    }
}
