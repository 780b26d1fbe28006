//! Theming for the preview, editor and bars.
//!
//! Uses ANSI colors that adapt to the terminal's color palette.

use ratatui::style::{Color, Modifier, Style};

use crate::segment::StyleFlags;

/// Shown in the preview pane while there is no text.
pub const PLACEHOLDER: &str = "Type something below...";

/// Terminal modifiers equivalent to a segment's style flags.
pub fn segment_modifier(styles: StyleFlags) -> Modifier {
    let mut modifier = Modifier::empty();
    if styles.bold {
        modifier |= Modifier::BOLD;
    }
    if styles.italic {
        modifier |= Modifier::ITALIC;
    }
    if styles.underline {
        modifier |= Modifier::UNDERLINED;
    }
    modifier
}

/// Style for a segment in the preview; the selected one gets a background.
pub fn segment_style(styles: StyleFlags, selected: bool) -> Style {
    let style = Style::default().add_modifier(segment_modifier(styles));
    if selected {
        style.bg(Color::Indexed(238))
    } else {
        style
    }
}

pub fn placeholder_style() -> Style {
    Style::default().fg(Color::Indexed(245))
}

pub fn markup_style() -> Style {
    Style::default().fg(Color::Indexed(245))
}

/// Highlight for selected text in the editor pane.
pub fn selection_style() -> Style {
    Style::default().bg(Color::Blue).fg(Color::White)
}

pub fn section_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn status_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}
