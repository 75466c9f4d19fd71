//! Frame composition: fixed banner and tab strip on top, the chapter area
//! in the middle, a one-line status bar at the bottom.
//!
//! The chapter area dispatches on the index fetch phase. Until the surah
//! list arrives it shows a centered spinner; a failed fetch shows the error
//! in place; once loaded the scrollable `ChapterList` takes over.

use crate::core::state::{App, Fetch};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::last_read::BANNER_HEIGHT;
use crate::tui::components::tab_bar::TAB_BAR_HEIGHT;
use crate::tui::components::{ChapterList, LastRead, TabBar};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph, Wrap};

/// Braille spinner cycle shared by the loading views.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER_FRAMES[frame % SPINNER_FRAMES.len()]
}

const KEY_HINTS: &str = "↑/↓ select  Enter expand  q quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([
        Length(BANNER_HEIGHT),
        Length(TAB_BAR_HEIGHT),
        Min(0),
        Length(1),
    ]);
    let [banner_area, tab_area, list_area, status_area] = layout.areas(frame.area());

    LastRead.render(frame, banner_area);
    TabBar.render(frame, tab_area);

    // Chapter area - dispatch on the index fetch phase
    match &app.chapters {
        Fetch::Idle | Fetch::Loading => {
            draw_loading_view(frame, list_area, spinner_frame);
        }
        Fetch::Failed(message) => {
            draw_error_view(frame, list_area, message);
        }
        Fetch::Loaded(chapters) => {
            let mut list = ChapterList::new(
                &mut tui.chapter_list,
                chapters,
                app.expanded.as_ref(),
                spinner_frame,
            );
            list.render(frame, list_area);
        }
    }

    // Status bar
    let status_text = if app.status_message.is_empty() {
        format!("Mushaf (edition: {}) | {}", app.edition, KEY_HINTS)
    } else {
        format!(
            "Mushaf (edition: {}) | {} | {}",
            app.edition, app.status_message, KEY_HINTS
        )
    };
    frame.render_widget(
        Span::styled(status_text, Style::new().fg(Color::DarkGray)),
        status_area,
    );
}

fn draw_loading_view(frame: &mut Frame, area: Rect, spinner_frame: usize) {
    use Constraint::{Length, Min, Percentage};
    let [_, line_area, _] = Layout::vertical([Percentage(40), Length(1), Min(0)]).areas(area);

    let text = format!("{} Loading surahs...", spinner_glyph(spinner_frame));
    let paragraph = Paragraph::new(text)
        .style(Style::new().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, line_area);
}

fn draw_error_view(frame: &mut Frame, area: Rect, error_msg: &str) {
    let error_paragraph = Paragraph::new(error_msg)
        .block(
            Block::bordered()
                .title("ERROR")
                .border_style(Style::new().fg(Color::Red)),
        )
        .style(Style::new().fg(Color::Red))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(error_paragraph, area);
}

/// Hit test: given a screen Y coordinate, find which chapter row (if any)
/// is at that position.
pub fn hit_test_row(
    screen_y: u16,
    frame_area: Rect,
    scroll_offset_y: u16,
    row_heights: &[u16],
) -> Option<usize> {
    use Constraint::{Length, Min};

    // Calculate layout to find the list area
    let layout = Layout::vertical([
        Length(BANNER_HEIGHT),
        Length(TAB_BAR_HEIGHT),
        Min(0),
        Length(1),
    ]);
    let [_banner_area, _tab_area, list_area, _status_area] = layout.areas(frame_area);

    // Check if the position is within the list area
    if screen_y < list_area.y || screen_y >= list_area.y + list_area.height {
        return None;
    }

    // Convert screen Y to content Y (accounting for scroll)
    let content_y = (screen_y - list_area.y) + scroll_offset_y;

    // Walk through cached heights to find which row contains content_y
    let mut accumulated_height: u16 = 0;
    for (index, &height) in row_heights.iter().enumerate() {
        accumulated_height += height;
        if content_y < accumulated_height {
            return Some(index);
        }
    }

    None // Below all rows
}
