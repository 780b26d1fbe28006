//! The annotation state machine.
//!
//! A [`Session`] is fed by two independent input channels, text changes
//! and selection changes, plus style commands. Each input is processed
//! synchronously and in arrival order.

use serde::{Deserialize, Serialize};

use crate::markup::render_preview;
use crate::segment::{Segment, StyleFlag, StyleFlags, carry_styles, segment_text};
use crate::selection::{SelectionObservation, resolve_selection};
use crate::store::SegmentStore;

/// One input to a [`Session`], as read from event scripts.
///
/// Serialized externally tagged with lowercase names, e.g.
/// `{"text": "a b"}`, `{"select": {"start": 0, "end": 1, "text": "a"}}`,
/// `{"toggle": "bold"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Event {
    /// The full text snapshot after an edit.
    Text(String),
    /// The host selection changed.
    Select(SelectionObservation),
    /// A style command.
    Toggle(StyleFlag),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    store: SegmentStore,
    carry_styles: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep style flags of unchanged words across edits instead of
    /// resetting every segment on each text change.
    #[must_use]
    pub const fn with_carry_styles(mut self, enabled: bool) -> Self {
        self.carry_styles = enabled;
        self
    }

    pub const fn carries_styles(&self) -> bool {
        self.carry_styles
    }

    /// Re-segment the full text snapshot and replace the segment list.
    ///
    /// The selected segment is left as is, even if it no longer exists.
    pub fn text_changed(&mut self, text: &str) {
        let mut segments = segment_text(text);
        if self.carry_styles {
            segments = carry_styles(self.store.segments(), segments);
        }
        tracing::debug!(
            chars = text.chars().count(),
            segments = segments.len(),
            "text changed"
        );
        self.store.replace_all(segments);
    }

    /// Resolve a selection observation and select the matching segment.
    ///
    /// Returns whether a segment matched. Without a match the previous
    /// selection stays in place.
    pub fn selection_changed(&mut self, observation: &SelectionObservation) -> bool {
        let Some(segment) = resolve_selection(self.store.segments(), observation).cloned() else {
            tracing::trace!(?observation, "selection matched no segment");
            return false;
        };
        tracing::debug!(
            start = segment.start,
            end = segment.end,
            text = %segment.text,
            "segment selected"
        );
        self.store.set_selected(Some(segment));
        true
    }

    /// Toggle `flag` on the selected segment. No-op without a selection.
    pub fn toggle_style(&mut self, flag: StyleFlag) -> bool {
        let toggled = self.store.toggle_selected(flag);
        tracing::debug!(flag = flag.label(), toggled, "toggle style");
        toggled
    }

    pub fn toggle_bold(&mut self) -> bool {
        self.toggle_style(StyleFlag::Bold)
    }

    pub fn toggle_italic(&mut self) -> bool {
        self.toggle_style(StyleFlag::Italic)
    }

    pub fn toggle_underline(&mut self) -> bool {
        self.toggle_style(StyleFlag::Underline)
    }

    /// Dispatch a scripted event.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::Text(text) => self.text_changed(text),
            Event::Select(observation) => {
                self.selection_changed(observation);
            }
            Event::Toggle(flag) => {
                self.toggle_style(*flag);
            }
        }
    }

    /// The serialized markup of every segment.
    pub fn preview(&self) -> String {
        render_preview(self.store.segments())
    }

    /// Whether there is nothing to preview.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        self.store.segments()
    }

    /// The selected segment as it was copied at selection time.
    pub const fn selected(&self) -> Option<&Segment> {
        self.store.selected()
    }

    /// Current flags of the stored segment matching the selection, if the
    /// selection still identifies one.
    pub fn selected_styles(&self) -> Option<StyleFlags> {
        let selected = self.store.selected()?;
        self.store.find(selected.key()).map(|s| s.styles)
    }
}
