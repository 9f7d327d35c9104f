//! Clock face rendering
//!
//! Maps a time of day onto six columns of BCD indicator dots plus an
//! optional numeric overlay, issuing only the panel writes that changed.

pub mod engine;
pub mod layout;
pub mod overlay;

pub use engine::RenderEngine;
pub use layout::{Column, ColumnLayout, COLUMN_COUNT, SLOT_WEIGHTS};
pub use overlay::GlyphCache;
