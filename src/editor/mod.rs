//! The editable surface.
//!
//! Provides a rope-backed text buffer with a caret and a selection anchor.
//! The buffer reports full text snapshots and selection observations to
//! the annotation session; it knows nothing about segments.

mod buffer;

pub use buffer::{Direction, EditorBuffer};
