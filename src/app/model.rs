use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::editor::EditorBuffer;
use crate::selection::SelectionObservation;
use crate::session::Session;

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
#[derive(Debug, Default)]
pub struct Model {
    /// Annotation state: segments, selection, styles
    pub session: Session,
    /// The editable text surface
    pub editor: EditorBuffer,
    /// File the initial text was loaded from, shown in the status bar
    pub file_path: Option<PathBuf>,
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    /// Whether the raw markup line is shown under the styled preview
    pub show_markup: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Last selection seen in the editor, to report only changes
    last_observation: Option<SelectionObservation>,
    toast: Option<Toast>,
}

impl Model {
    /// Create a model whose editor and session both start from `text`.
    pub fn new(text: &str, terminal_size: (u16, u16)) -> Self {
        let mut model = Self {
            editor: EditorBuffer::from_text(text),
            width: terminal_size.0,
            height: terminal_size.1,
            show_markup: true,
            ..Self::default()
        };
        model.sync_text();
        model
    }

    /// Replace the session, re-feeding it the current text.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self.last_observation = None;
        self.sync_text();
        self
    }

    /// Report the editor's full text to the session, then its selection.
    pub(super) fn sync_text(&mut self) {
        self.session.text_changed(&self.editor.text());
        self.sync_selection();
    }

    /// Report the editor's selection to the session if it changed.
    ///
    /// Dropping back to a bare caret reports nothing, so the session keeps
    /// its last selected segment.
    pub(super) fn sync_selection(&mut self) {
        let observation = self.editor.selection_observation();
        if self.last_observation == observation {
            return;
        }
        if let Some(observation) = &observation {
            self.session.selection_changed(observation);
        }
        self.last_observation = observation;
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }

    /// Drop an expired toast. Returns `true` if one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
            return true;
        }
        false
    }
}
