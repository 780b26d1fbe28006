use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::app::{App, Message, Model};
use crate::editor::Direction;
use crate::segment::StyleFlag;

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Paste(text) if !model.help_visible => {
                Some(Message::InsertText(normalize_newlines(text)))
            }
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        match key.code {
            KeyCode::Char('q' | 'c') if ctrl => Some(Message::Quit),
            KeyCode::Char('a') if ctrl => Some(Message::SelectAll),
            KeyCode::Char('b') if ctrl || alt => Some(Message::ToggleStyle(StyleFlag::Bold)),
            KeyCode::Char('i') if ctrl || alt => Some(Message::ToggleStyle(StyleFlag::Italic)),
            KeyCode::Char('u') if ctrl || alt => {
                Some(Message::ToggleStyle(StyleFlag::Underline))
            }
            // Terminals deliver Ctrl-i as Tab
            KeyCode::Tab => Some(Message::ToggleStyle(StyleFlag::Italic)),
            KeyCode::Char(c) if !ctrl && !alt => Some(Message::InsertChar(c)),
            KeyCode::Enter => Some(Message::InsertChar('\n')),
            KeyCode::Backspace => Some(Message::DeleteBack),
            KeyCode::Delete => Some(Message::DeleteForward),
            KeyCode::Left => Some(caret_message(Direction::Left, shift)),
            KeyCode::Right => Some(caret_message(Direction::Right, shift)),
            KeyCode::Up => Some(caret_message(Direction::Up, shift)),
            KeyCode::Down => Some(caret_message(Direction::Down, shift)),
            KeyCode::Home => Some(Message::MoveHome(shift)),
            KeyCode::End => Some(Message::MoveEnd(shift)),
            KeyCode::Esc => Some(Message::ClearSelection),
            KeyCode::F(1) => Some(Message::ToggleHelp),
            KeyCode::F(2) => Some(Message::ToggleMarkup),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return None;
        }
        let area = Rect::new(0, 0, model.width, model.height);
        let idx = crate::ui::char_index_at(model, area, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => idx.map(Message::MoveTo),
            MouseEventKind::Drag(MouseButton::Left) => idx.map(Message::ExtendTo),
            _ => None,
        }
    }

    pub(super) fn view(model: &Model, frame: &mut Frame) {
        crate::ui::render(model, frame);
    }
}

/// Terminals deliver pasted line breaks as `\r` or `\r\n`.
fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

const fn caret_message(direction: Direction, extend: bool) -> Message {
    if extend {
        Message::ExtendSelection(direction)
    } else {
        Message::MoveCursor(direction)
    }
}
