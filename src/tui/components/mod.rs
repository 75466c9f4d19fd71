//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `LastRead`: Bookmark banner card above the list
//! - `TabBar`: Navigation strip with the Surah tab active
//! - `ChapterRow`: Single surah card (a plain ratatui `Widget`, rendered by
//!   the list rather than wired into the component tree directly)
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `ChapterList`: Scrollable chapter view with layout caching
//!
//! ## Design Philosophy
//!
//! ### Composition Over Inheritance
//!
//! Components compose naturally. `ChapterList` renders many `ChapterRow`
//! widgets into its scroll surface. This mirrors React's component model.
//!
//! ### Co-location of Concerns
//!
//! Each component file contains everything related to that component:
//! - State types
//! - Rendering logic
//! - Event handling
//! - Tests
//!
//! **Why:** Makes components self-contained and easy to understand. You can
//! read one file to understand how a component works, rather than jumping
//! between multiple files.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props", not by directly accessing
//! global state. The chapter slice and the current expansion are borrowed
//! from core state each frame and handed to the list; the list never reaches
//! into `App` itself. This makes dependencies explicit and components
//! testable.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── last_read.rs     (Bookmark banner card)
//! ├── tab_bar.rs       (Static navigation tabs)
//! ├── chapter_row.rs   (Single surah card renderer)
//! └── chapter_list.rs  (Scrollable chapter container)
//! ```

pub mod chapter_list;
pub mod chapter_row;
pub mod last_read;
pub mod tab_bar;

pub use chapter_list::{ChapterList, ChapterListState};
pub use last_read::LastRead;
pub use tab_bar::TabBar;
