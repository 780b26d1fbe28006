//! Authoritative segment list and current selection for a session.

use crate::segment::{Segment, SegmentKey, StyleFlag, StyleFlags};

/// Holds the current segment list and the selected segment, if any.
///
/// The list is replaced wholesale on every text change. The selected
/// segment is a copy; nothing here refreshes it when the list changes.
#[derive(Debug, Clone, Default)]
pub struct SegmentStore {
    segments: Vec<Segment>,
    selected: Option<Segment>,
}

impl SegmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the segment list. Styles of the old list are dropped.
    pub fn replace_all(&mut self, segments: Vec<Segment>) {
        self.segments = segments;
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn set_selected(&mut self, segment: Option<Segment>) {
        self.selected = segment;
    }

    pub const fn selected(&self) -> Option<&Segment> {
        self.selected.as_ref()
    }

    /// Find the stored segment whose triple equals `key`.
    pub fn find(&self, key: SegmentKey<'_>) -> Option<&Segment> {
        self.segments.iter().find(|s| s.matches(key))
    }

    /// Apply `transform` to the styles of the segment matching `key`.
    ///
    /// Returns `false`, leaving the list untouched, when nothing matches.
    pub fn update_segment(
        &mut self,
        key: SegmentKey<'_>,
        transform: impl FnOnce(StyleFlags) -> StyleFlags,
    ) -> bool {
        update_in(&mut self.segments, key, transform)
    }

    /// Toggle `flag` on the stored segment matching the selected one.
    ///
    /// No-op without a selection or when the selection no longer matches
    /// any stored segment. The selected copy keeps its old styles.
    pub fn toggle_selected(&mut self, flag: StyleFlag) -> bool {
        let Some(selected) = &self.selected else {
            return false;
        };
        update_in(&mut self.segments, selected.key(), |styles| {
            styles.toggled(flag)
        })
    }
}

fn update_in(
    segments: &mut [Segment],
    key: SegmentKey<'_>,
    transform: impl FnOnce(StyleFlags) -> StyleFlags,
) -> bool {
    let Some(segment) = segments.iter_mut().find(|s| s.matches(key)) else {
        return false;
    };
    segment.styles = transform(segment.styles);
    true
}
