use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;

use super::style;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = style::section_style();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("Editing", section_style));
    lines.push(Line::raw("  Type, Enter, paste   Insert text"));
    lines.push(Line::raw("  Backspace / Delete   Delete"));
    lines.push(Line::raw("  Arrows, Home/End     Move caret"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Selection", section_style));
    lines.push(Line::raw("  Shift+arrows         Extend selection"));
    lines.push(Line::raw("  Mouse drag           Select"));
    lines.push(Line::raw("  Ctrl-a               Select all"));
    lines.push(Line::raw("  Esc                  Clear selection"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Styles (select one word)", section_style));
    lines.push(Line::raw("  Ctrl-b / Alt-b       Bold"));
    lines.push(Line::raw("  Ctrl-i / Alt-i / Tab Italic"));
    lines.push(Line::raw("  Ctrl-u / Alt-u       Underline"));
    lines.push(Line::raw("  F2                   Toggle markup line"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Other", section_style));
    lines.push(Line::raw("  Ctrl-q / Ctrl-c      Quit"));
    lines.push(Line::raw("  F1                   Toggle help"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Config", section_style));
    lines.push(Line::raw(format!("  Global: {global_cfg}")));
    lines.push(Line::raw(format!("  Local override: {local_cfg}")));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
