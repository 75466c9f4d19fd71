pub mod client;
pub mod types;

pub use client::{AlQuranCloud, ApiError, ChapterSource, DEFAULT_BASE_URL};
pub use types::{Chapter, ChapterDetail, RevelationType, Verse};
