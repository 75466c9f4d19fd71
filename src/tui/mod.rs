//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (web, native, etc.)
//! in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (index or verse fetch in flight): draws every ~80ms for a
//!   smooth spinner.
//! - **Idle** (browsing, nothing in flight): sleeps up to 500ms, only redraws
//!   on events or terminal resize.
//!
//! ## Request Lifecycles
//!
//! The surah index is fetched exactly once, spawned before the loop starts.
//! Verse fetches are spawned per expansion; the abort handle of the current
//! one is kept so that collapsing or switching chapters can cancel it. The
//! reducer independently drops results whose token no longer matches, so a
//! response that slips past the abort still cannot touch state.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::api::{AlQuranCloud, ChapterSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Fetch};
use crate::tui::component::EventHandler;
use crate::tui::components::ChapterListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub chapter_list: ChapterListState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            chapter_list: ChapterListState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the chapter source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn ChapterSource> {
    Arc::new(AlQuranCloud::new(
        Some(config.base_url.clone()),
        config.edition.clone(),
    ))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::new(source, config.edition.clone());
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // The surah index is fetched exactly once per run, before the loop starts.
    app.chapters = Fetch::Loading;
    spawn_chapters_fetch(app.source.clone(), tx.clone());

    // Abort handle for the in-flight verse request, if any
    let mut detail_abort: Option<tokio::task::AbortHandle> = None;

    // Animation timer
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        // Determine if the spinner is animating (any fetch in flight)
        let animating = app.is_fetching();
        if animating {
            needs_redraw = true;
        }

        // Only draw when something changed
        if needs_redraw {
            let elapsed = start_time.elapsed().as_secs_f32();
            let spinner_frame = (elapsed * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // q, Esc, and Ctrl+C all quit
            if matches!(event, TuiEvent::Quit | TuiEvent::ForceQuit) {
                let effect = update(&mut app, Action::Quit);
                if apply_effect(effect, &app, &tx, &mut detail_abort) {
                    should_quit = true;
                }
                continue;
            }

            // Mouse hover moves the selection highlight
            if let TuiEvent::MouseMove(_col, row) = event {
                let frame_area = terminal.get_frame().area();
                let scroll_offset = tui.chapter_list.scroll_state.offset().y;

                tui.chapter_list.selected_index = ui::hit_test_row(
                    row,
                    frame_area,
                    scroll_offset,
                    &tui.chapter_list.layout.heights,
                );
                continue;
            }

            // Mouse click toggles the chapter under the cursor
            if let TuiEvent::MouseClick(_col, row) = event {
                let frame_area = terminal.get_frame().area();
                let scroll_offset = tui.chapter_list.scroll_state.offset().y;

                let hit = ui::hit_test_row(
                    row,
                    frame_area,
                    scroll_offset,
                    &tui.chapter_list.layout.heights,
                );

                if let Some(idx) = hit {
                    tui.chapter_list.selected_index = Some(idx);
                    if let Some(number) = app.chapter_number_at(idx) {
                        let effect = update(&mut app, Action::SelectChapter(number));
                        if apply_effect(effect, &app, &tx, &mut detail_abort) {
                            should_quit = true;
                        }
                    }
                }
                continue;
            }

            // Scroll events go straight to the list
            if matches!(
                event,
                TuiEvent::ScrollUp
                    | TuiEvent::ScrollDown
                    | TuiEvent::ScrollPageUp
                    | TuiEvent::ScrollPageDown
                    | TuiEvent::ScrollToTop
                    | TuiEvent::ScrollToBottom
            ) {
                tui.chapter_list.handle_event(&event);
                continue;
            }

            match event {
                // Up/Down move the keyboard selection
                TuiEvent::CursorUp => {
                    tui.chapter_list.select_prev(app.chapter_list().len());
                }
                TuiEvent::CursorDown => {
                    tui.chapter_list.select_next(app.chapter_list().len());
                }
                // Enter/Space toggle the selected chapter
                TuiEvent::Select => {
                    if let Some(idx) = tui.chapter_list.selected_index
                        && let Some(number) = app.chapter_number_at(idx)
                    {
                        let effect = update(&mut app, Action::SelectChapter(number));
                        if apply_effect(effect, &app, &tx, &mut detail_abort) {
                            should_quit = true;
                        }
                    }
                }
                _ => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            if apply_effect(effect, &app, &tx, &mut detail_abort) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Apply a reducer effect. Returns true when the app should quit.
fn apply_effect(
    effect: Effect,
    app: &App,
    tx: &mpsc::Sender<Action>,
    detail_abort: &mut Option<tokio::task::AbortHandle>,
) -> bool {
    match effect {
        Effect::None => false,
        Effect::Quit => true,
        Effect::CancelDetail => {
            if let Some(handle) = detail_abort.take() {
                handle.abort();
            }
            false
        }
        Effect::FetchDetail { number, token } => {
            // A new fetch supersedes whatever was in flight
            if let Some(handle) = detail_abort.take() {
                handle.abort();
            }
            *detail_abort = Some(spawn_detail_fetch(
                app.source.clone(),
                number,
                token,
                tx.clone(),
            ));
            false
        }
    }
}

fn spawn_chapters_fetch(source: Arc<dyn ChapterSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning surah index request ({})", source.name());
    tokio::spawn(async move {
        let action = match source.fetch_chapters().await {
            Ok(chapters) => Action::ChaptersLoaded(chapters),
            Err(e) => Action::ChaptersFailed(e.to_string()),
        };
        if tx.send(action).is_err() {
            warn!("Failed to send surah index result: receiver dropped");
        }
    });
}

fn spawn_detail_fetch(
    source: Arc<dyn ChapterSource>,
    number: u16,
    token: u64,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    info!("Spawning verse request for surah {} (token={})", number, token);
    let handle = tokio::spawn(async move {
        let action = match source.fetch_verses(number).await {
            Ok(detail) => Action::DetailLoaded { token, detail },
            Err(e) => Action::DetailFailed {
                token,
                message: e.to_string(),
            },
        };
        if tx.send(action).is_err() {
            warn!(
                "Failed to send verse result for surah {}: receiver dropped",
                number
            );
        }
    });
    handle.abort_handle()
}
