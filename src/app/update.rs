use crate::app::{Model, ToastLevel};
use crate::editor::Direction;
use crate::segment::StyleFlag;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Editing
    /// Insert a character at the caret
    InsertChar(char),
    /// Insert pasted text at the caret
    InsertText(String),
    /// Delete selection or character before caret (Backspace)
    DeleteBack,
    /// Delete selection or character at caret (Delete)
    DeleteForward,

    // Caret and selection
    /// Move caret, dropping the selection
    MoveCursor(Direction),
    /// Move caret, extending the selection (Shift+arrow)
    ExtendSelection(Direction),
    /// Move caret to start of line (Home), extending when `true`
    MoveHome(bool),
    /// Move caret to end of line (End), extending when `true`
    MoveEnd(bool),
    /// Move caret to a char index (mouse down)
    MoveTo(usize),
    /// Extend selection to a char index (mouse drag)
    ExtendTo(usize),
    /// Select the whole text
    SelectAll,
    /// Drop the selection
    ClearSelection,

    // Styling
    /// Toggle a style flag on the selected segment
    ToggleStyle(StyleFlag),
    /// Show or hide the raw markup line
    ToggleMarkup,

    // Window
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here. Every edit
/// is reported to the session as a full text snapshot, and every caret or
/// selection move as a selection observation.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        Message::InsertChar(ch) => {
            model.editor.insert_char(ch);
            model.sync_text();
        }
        Message::InsertText(text) => {
            if !text.is_empty() {
                model.editor.insert_str(&text);
                model.sync_text();
            }
        }
        Message::DeleteBack => {
            if model.editor.delete_back() {
                model.sync_text();
            }
        }
        Message::DeleteForward => {
            if model.editor.delete_forward() {
                model.sync_text();
            }
        }

        Message::MoveCursor(dir) => {
            model.editor.move_cursor(dir);
            model.sync_selection();
        }
        Message::ExtendSelection(dir) => {
            model.editor.extend_selection(dir);
            model.sync_selection();
        }
        Message::MoveHome(extend) => {
            model.editor.move_home(extend);
            model.sync_selection();
        }
        Message::MoveEnd(extend) => {
            model.editor.move_end(extend);
            model.sync_selection();
        }
        Message::MoveTo(idx) => {
            model.editor.move_to(idx, false);
            model.sync_selection();
        }
        Message::ExtendTo(idx) => {
            model.editor.move_to(idx, true);
            model.sync_selection();
        }
        Message::SelectAll => {
            model.editor.select_all();
            model.sync_selection();
        }
        Message::ClearSelection => {
            if model.editor.clear_selection() {
                model.sync_selection();
            }
        }

        Message::ToggleStyle(flag) => {
            if !model.session.toggle_style(flag) {
                let reason = if model.session.selected().is_some() {
                    "Selected word changed, select it again"
                } else {
                    "Select a word first"
                };
                model.show_toast(ToastLevel::Warning, format!("{}: {reason}", flag.label()));
            }
        }
        Message::ToggleMarkup => {
            model.show_markup = !model.show_markup;
            let state = if model.show_markup { "shown" } else { "hidden" };
            model.show_toast(ToastLevel::Info, format!("Markup line {state}"));
        }

        Message::ToggleHelp => {
            model.help_visible = !model.help_visible;
        }
        Message::HideHelp => {
            model.help_visible = false;
        }
        Message::Resize(width, height) => {
            model.width = width;
            model.height = height;
        }

        Message::Quit => {
            model.should_quit = true;
        }
    }
    model
}
