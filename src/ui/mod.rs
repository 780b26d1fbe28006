//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`render`]: preview pane, editor pane and layout
//! - [`style`]: Theming and colors

pub mod style;

mod overlays;
mod render;
mod status;

pub use render::{
    char_index_at, editor_scroll_offset, editor_text_area, preview_lines, render, split_panes,
};
pub use status::selection_summary;

/// Share of the screen height given to the preview pane.
pub const PREVIEW_HEIGHT_PERCENT: u16 = 45;

#[cfg(test)]
mod tests;
