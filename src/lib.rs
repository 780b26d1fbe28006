// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. segment::SegmentKey)
    clippy::module_name_repetitions
)]

//! # Annotext
//!
//! Word-level rich-text annotation with a live markup preview.
//!
//! Text is split into space-separated segments. A host selection is
//! resolved to one segment, style commands toggle bold, italic or
//! underline on it, and the segment list serializes to inline markup
//! such as `<u>a</u> b `.
//!
//! ## Architecture
//!
//! The engine is a plain state machine ([`session::Session`]) with no
//! terminal dependency. The interactive editor wraps it using The Elm
//! Architecture (TEA):
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`segment`]: Segments, style flags, segmentation and style carry-over
//! - [`store`]: The ordered segment list and the selected copy
//! - [`selection`]: Mapping host selections onto segments
//! - [`markup`]: Markup serialization and preview
//! - [`session`]: The annotation state machine
//! - [`script`]: JSON-lines event scripts
//! - [`editor`]: Rope-backed text buffer with caret and selection
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Persistent default flags
//! - [`logging`]: Tracing subscriber setup

pub mod app;
pub mod config;
pub mod editor;
pub mod logging;
pub mod markup;
pub mod script;
pub mod segment;
pub mod selection;
pub mod session;
pub mod store;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::segment::{Segment, StyleFlag, StyleFlags};
    pub use crate::selection::SelectionObservation;
    pub use crate::session::{Event, Session};
}
