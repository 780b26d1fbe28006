use super::*;
use crate::app::{Message, Model, update};
use crate::editor::Direction;
use crate::segment::StyleFlag;
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::style::Modifier;

fn create_test_terminal() -> Terminal<TestBackend> {
    let backend = TestBackend::new(60, 20);
    Terminal::new(backend).unwrap()
}

fn draw(model: &Model) -> Terminal<TestBackend> {
    let mut terminal = create_test_terminal();
    terminal.draw(|frame| render(model, frame)).unwrap();
    terminal
}

fn rendered_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.height)
        .map(|row| {
            (0..buffer.area.width)
                .map(|col| buffer[(col, row)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Find the first cell at which `needle` starts.
fn find_text(terminal: &Terminal<TestBackend>, needle: &str) -> Option<(u16, u16)> {
    rendered_rows(terminal).iter().enumerate().find_map(|(row, line)| {
        line.find(needle).map(|byte_idx| {
            let col = line[..byte_idx].chars().count();
            (u16::try_from(col).unwrap(), u16::try_from(row).unwrap())
        })
    })
}

fn select_first_word(model: Model, len: usize) -> Model {
    let mut model = update(model, Message::MoveTo(0));
    for _ in 0..len {
        model = update(model, Message::ExtendSelection(Direction::Right));
    }
    model
}

#[test]
fn test_empty_model_shows_placeholder() {
    let model = Model::new("", (60, 20));
    let terminal = draw(&model);
    assert!(find_text(&terminal, style::PLACEHOLDER).is_some());
}

#[test]
fn test_placeholder_disappears_after_typing() {
    let model = update(Model::new("", (60, 20)), Message::InsertChar('a'));
    let terminal = draw(&model);
    assert!(find_text(&terminal, style::PLACEHOLDER).is_none());
}

#[test]
fn test_bold_segment_rendered_with_bold_modifier() {
    let model = select_first_word(Model::new("hello world", (60, 20)), 5);
    let model = update(model, Message::ToggleStyle(StyleFlag::Bold));
    let terminal = draw(&model);

    let preview_area = split_panes(Rect::new(0, 0, 60, 20))[0];
    let (col, row) = find_text(&terminal, "hello world").unwrap();
    assert!(row < preview_area.bottom(), "first match should be in the preview");

    let buffer = terminal.backend().buffer();
    assert!(buffer[(col, row)].modifier.contains(Modifier::BOLD));
    assert!(!buffer[(col + 6, row)].modifier.contains(Modifier::BOLD));
}

#[test]
fn test_markup_line_shown_and_toggled() {
    let model = select_first_word(Model::new("hi there", (60, 20)), 2);
    let model = update(model, Message::ToggleStyle(StyleFlag::Underline));
    let terminal = draw(&model);
    assert!(find_text(&terminal, "<u>hi</u> there").is_some());

    let model = update(model, Message::ToggleMarkup);
    let terminal = draw(&model);
    assert!(find_text(&terminal, "<u>hi</u>").is_none());
}

#[test]
fn test_status_bar_describes_selection() {
    let model = select_first_word(Model::new("hello world", (60, 20)), 5);
    let model = update(model, Message::ToggleStyle(StyleFlag::Italic));
    assert_eq!(selection_summary(&model), "[0..5] \"hello\" I");
    let terminal = draw(&model);
    assert!(find_text(&terminal, "[0..5] \"hello\" I").is_some());
}

#[test]
fn test_status_bar_without_selection() {
    let model = Model::new("hello", (60, 20));
    assert_eq!(selection_summary(&model), "no selection");
}

#[test]
fn test_selection_summary_marks_stale_selection() {
    let model = select_first_word(Model::new("hello world", (60, 20)), 5);
    let model = update(model, Message::MoveEnd(false));
    let model = update(model, Message::MoveHome(false));
    let model = update(model, Message::InsertChar('x'));
    assert_eq!(selection_summary(&model), "[0..5] \"hello\" stale");
}

#[test]
fn test_preview_lines_break_on_newlines() {
    let model = Model::new("one\ntwo three", (60, 20));
    let lines = preview_lines(&model);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].to_string(), "one");
    assert_eq!(lines[1].to_string(), "two three ");
}

#[test]
fn test_char_index_at_maps_editor_cells() {
    let model = Model::new("hello world", (60, 20));
    let area = Rect::new(0, 0, 60, 20);
    let inner = editor_text_area(area);
    assert_eq!(char_index_at(&model, area, inner.x + 6, inner.y), Some(6));
    assert_eq!(char_index_at(&model, area, inner.x + 40, inner.y), Some(11));
    assert_eq!(char_index_at(&model, area, inner.x, inner.y + 3), Some(11));
    assert_eq!(char_index_at(&model, area, 0, 0), None);
}

#[test]
fn test_editor_scroll_keeps_caret_visible() {
    assert_eq!(editor_scroll_offset(0, 5), 0);
    assert_eq!(editor_scroll_offset(4, 5), 0);
    assert_eq!(editor_scroll_offset(7, 5), 3);
    assert_eq!(editor_scroll_offset(2, 0), 2);
}

#[test]
fn test_help_overlay_renders() {
    let model = update(Model::new("", (60, 20)), Message::ToggleHelp);
    let terminal = draw(&model);
    assert!(find_text(&terminal, "Help").is_some());
    assert!(find_text(&terminal, "Shift+arrows").is_some());
}
