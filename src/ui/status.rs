use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::Model;
use crate::segment::{StyleFlag, StyleFlags};

use super::style;

/// Longest selected text shown in the status bar before truncation.
const MAX_SELECTION_CHARS: usize = 24;

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let filename = model
        .file_path
        .as_ref()
        .and_then(|p| p.file_name())
        .map_or_else(|| "untitled".to_string(), |s| s.to_string_lossy().to_string());

    let (line, col) = model.editor.position();
    let carry_indicator = if model.session.carries_styles() {
        " [carry]"
    } else {
        ""
    };

    let status = format!(
        " {}{}  Ln {}, Col {}  {}  F1:help",
        filename,
        carry_indicator,
        line + 1,
        col + 1,
        selection_summary(model)
    );

    let status_bar = Paragraph::new(status).style(style::status_style());
    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        crate::app::ToastLevel::Info => ("[info]", style::status_style()),
        crate::app::ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}

/// Describe the selected segment and its current flags.
pub fn selection_summary(model: &Model) -> String {
    let Some(selected) = model.session.selected() else {
        return "no selection".to_string();
    };
    let mut text: String = selected.text.chars().take(MAX_SELECTION_CHARS).collect();
    if selected.text.chars().count() > MAX_SELECTION_CHARS {
        text.push('\u{2026}');
    }
    let flags = model
        .session
        .selected_styles()
        .map_or_else(|| "stale".to_string(), flag_letters);
    format!("[{}..{}] {text:?} {flags}", selected.start, selected.end)
}

fn flag_letters(styles: StyleFlags) -> String {
    if styles.is_plain() {
        return "plain".to_string();
    }
    StyleFlag::ALL
        .into_iter()
        .filter(|flag| styles.get(*flag))
        .map(|flag| flag.tag().to_ascii_uppercase())
        .collect::<Vec<_>>()
        .join("")
}
