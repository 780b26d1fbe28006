//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: Option<PathBuf>,
    carry_styles: bool,
    show_markup: bool,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
}

impl App {
    /// Create a new application, optionally seeded from a text file.
    pub const fn new(file_path: Option<PathBuf>) -> Self {
        Self {
            file_path,
            carry_styles: false,
            show_markup: true,
            config_global_path: None,
            config_local_path: None,
        }
    }

    /// Keep styles of unchanged words across edits.
    pub const fn with_carry_styles(mut self, enabled: bool) -> Self {
        self.carry_styles = enabled;
        self
    }

    /// Show or hide the raw markup line under the preview.
    pub const fn with_markup_visible(mut self, visible: bool) -> Self {
        self.show_markup = visible;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }
}
