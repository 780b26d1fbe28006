use std::ops::Range;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Wrap};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::Model;
use crate::segment::Segment;

use super::{PREVIEW_HEIGHT_PERCENT, overlays, status, style};

/// Split the screen into preview pane, editor pane and status row.
pub fn split_panes(area: Rect) -> [Rect; 3] {
    Layout::vertical([
        Constraint::Percentage(PREVIEW_HEIGHT_PERCENT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area)
}

/// The area inside the editor pane border where text is drawn.
pub fn editor_text_area(area: Rect) -> Rect {
    Block::bordered().inner(split_panes(area)[1])
}

/// First visible editor line, keeping the caret line on screen.
pub fn editor_scroll_offset(cursor_line: usize, visible_rows: u16) -> usize {
    cursor_line.saturating_sub(usize::from(visible_rows).saturating_sub(1))
}

/// Map a screen cell inside the editor pane to a char index in the buffer.
pub fn char_index_at(model: &Model, area: Rect, column: u16, row: u16) -> Option<usize> {
    let inner = editor_text_area(area);
    if !inner.contains(Position::new(column, row)) {
        return None;
    }
    let buf = &model.editor;
    let (cursor_line, _) = buf.position();
    let line = editor_scroll_offset(cursor_line, inner.height) + usize::from(row - inner.y);
    if line >= buf.line_count() {
        return Some(buf.len_chars());
    }

    let text = buf.line_at(line).unwrap_or_default();
    let target = usize::from(column - inner.x);
    let mut width = 0;
    let mut col = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > target {
            break;
        }
        width += w;
        col += 1;
    }
    Some(buf.line_start(line) + col)
}

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let [preview_area, editor_area, status_area] = split_panes(area);

    render_preview(model, frame, preview_area);
    render_editor(model, frame, editor_area);

    if model.active_toast().is_some() {
        status::render_toast_bar(model, frame, status_area);
    } else {
        status::render_status_bar(model, frame, status_area);
    }

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

/// Styled preview lines: one span per segment, separators between them.
///
/// Line breaks inside a segment start a new terminal line.
pub fn preview_lines(model: &Model) -> Vec<Line<'static>> {
    let session = &model.session;
    if session.is_empty() {
        return vec![Line::styled(style::PLACEHOLDER, style::placeholder_style())];
    }

    let selected = session.selected().map(Segment::key);
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    for segment in session.segments() {
        let seg_style = style::segment_style(segment.styles, selected == Some(segment.key()));
        for (idx, part) in segment.text.split('\n').enumerate() {
            if idx > 0 {
                lines.push(Line::from(std::mem::take(&mut current)));
            }
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), seg_style));
            }
        }
        current.push(Span::raw(" "));
    }
    lines.push(Line::from(current));
    lines
}

fn render_preview(model: &Model, frame: &mut Frame, area: Rect) {
    let mut lines = preview_lines(model);
    if model.show_markup && !model.session.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            model.session.preview().replace('\n', "\u{21b5}"),
            style::markup_style(),
        ));
    }

    let block = Block::bordered().title(" Preview ");
    let preview = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(preview, area);
}

fn render_editor(model: &Model, frame: &mut Frame, area: Rect) {
    let block = Block::bordered().title(" Text ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let buf = &model.editor;
    let (cursor_line, cursor_col) = buf.position();
    let offset = editor_scroll_offset(cursor_line, inner.height);
    let end = (offset + usize::from(inner.height)).min(buf.line_count());
    let selection = buf.selection_range();

    let content: Vec<Line> = (offset..end)
        .map(|line_idx| {
            let text = buf.line_at(line_idx).unwrap_or_default();
            highlight_selection(&text, buf.line_start(line_idx), selection.as_ref())
        })
        .collect();
    frame.render_widget(Paragraph::new(content), inner);

    if model.help_visible || inner.is_empty() {
        return;
    }
    let line_text = buf.line_at(cursor_line).unwrap_or_default();
    let prefix: String = line_text.chars().take(cursor_col).collect();
    let x = u16::try_from(prefix.width())
        .unwrap_or(u16::MAX)
        .min(inner.width.saturating_sub(1));
    let y = u16::try_from(cursor_line - offset).unwrap_or(0);
    frame.set_cursor_position(Position::new(inner.x + x, inner.y + y));
}

/// Split a line into runs inside and outside the selected char range.
fn highlight_selection(
    text: &str,
    line_start: usize,
    selection: Option<&Range<usize>>,
) -> Line<'static> {
    let Some(selection) = selection else {
        return Line::raw(text.to_string());
    };

    let mut spans = Vec::new();
    let mut run = String::new();
    let mut run_selected = false;
    for (idx, ch) in text.chars().enumerate() {
        let selected = selection.contains(&(line_start + idx));
        if selected != run_selected && !run.is_empty() {
            spans.push(selection_run(std::mem::take(&mut run), run_selected));
        }
        run_selected = selected;
        run.push(ch);
    }
    if !run.is_empty() {
        spans.push(selection_run(run, run_selected));
    }
    Line::from(spans)
}

fn selection_run(text: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(text, style::selection_style())
    } else {
        Span::raw(text)
    }
}
