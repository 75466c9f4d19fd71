//! # Actions
//!
//! Everything that can happen in mushaf becomes an `Action`.
//! User taps a chapter row? That's `Action::SelectChapter(n)`.
//! The verse request lands? That's `Action::DetailLoaded { token, detail }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` for the shell to execute. No side effects
//! here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable: apply actions, assert on state and effect.
//! It is also where the request-generation check lives: a verse response
//! carries the token of the request that produced it, and only the response
//! whose token matches the current expansion is ever applied.

use log::{debug, info, warn};

use crate::api::{Chapter, ChapterDetail};
use crate::core::state::{App, Expansion, Fetch};

#[derive(Debug, Clone)]
pub enum Action {
    /// The one-shot surah index fetch succeeded.
    ChaptersLoaded(Vec<Chapter>),
    /// The one-shot surah index fetch failed. No retry exists; the list
    /// stays empty with the error shown inline.
    ChaptersFailed(String),
    /// A chapter row was tapped (keyboard or mouse).
    SelectChapter(u16),
    /// A verse fetch completed. `token` identifies which request.
    DetailLoaded { token: u64, detail: ChapterDetail },
    /// A verse fetch failed. `token` identifies which request.
    DetailFailed { token: u64, message: String },
    Quit,
}

/// What the shell must do after an update. The reducer never performs I/O
/// itself; it describes the I/O and the event loop carries it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Abort any in-flight verse request, then fetch this chapter's verses.
    FetchDetail { number: u16, token: u64 },
    /// Abort any in-flight verse request.
    CancelDetail,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::ChaptersLoaded(chapters) => {
            info!("surah index loaded: {} chapters", chapters.len());
            app.status_message = format!("{} surahs", chapters.len());
            app.chapters = Fetch::Loaded(chapters);
            Effect::None
        }
        Action::ChaptersFailed(message) => {
            warn!("surah index fetch failed: {message}");
            app.status_message = String::from("Surah index unavailable");
            app.chapters = Fetch::Failed(message);
            Effect::None
        }
        Action::SelectChapter(number) => {
            // Tapping the open chapter closes it. The collapse alone makes
            // any in-flight response unmatchable; CancelDetail just stops
            // the wasted work sooner.
            if app.expanded_number() == Some(number) {
                debug!("collapsing surah {number}");
                app.expanded = None;
                return Effect::CancelDetail;
            }
            let token = app.next_detail_token();
            debug!("expanding surah {number} (token={token})");
            app.expanded = Some(Expansion {
                number,
                token,
                detail: Fetch::Loading,
            });
            Effect::FetchDetail { number, token }
        }
        Action::DetailLoaded { token, detail } => {
            match &mut app.expanded {
                Some(exp) if exp.token == token => {
                    debug!(
                        "verses arrived: surah {} ({} ayahs, token={token})",
                        exp.number,
                        detail.verses.len()
                    );
                    exp.detail = Fetch::Loaded(detail);
                }
                _ => debug!("dropping superseded verse response (token={token})"),
            }
            Effect::None
        }
        Action::DetailFailed { token, message } => {
            match &mut app.expanded {
                Some(exp) if exp.token == token => {
                    warn!(
                        "verse fetch failed: surah {} (token={token}): {message}",
                        exp.number
                    );
                    exp.detail = Fetch::Failed(message);
                }
                _ => debug!("dropping superseded verse failure (token={token})"),
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
