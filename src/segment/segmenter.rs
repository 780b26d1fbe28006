use std::collections::HashSet;

use super::Segment;

/// The single character separating segments.
pub const SEPARATOR: char = ' ';

/// Accumulates segments while refusing duplicate `(start, end, text)` triples.
#[derive(Debug, Default)]
pub struct SegmentListBuilder {
    segments: Vec<Segment>,
    seen: HashSet<(usize, usize, String)>,
}

impl SegmentListBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently appended segment.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Offset where the next token starts: one past the separator that
    /// follows the last appended segment, or 0 for the first token.
    pub fn next_start(&self) -> usize {
        self.last().map_or(0, |prev| prev.end + 1)
    }

    /// Append `segment` unless its triple is already present.
    ///
    /// Returns `false` when the segment was suppressed as a duplicate.
    pub fn push(&mut self, segment: Segment) -> bool {
        let triple = (segment.start, segment.end, segment.text.clone());
        if !self.seen.insert(triple) {
            return false;
        }
        self.segments.push(segment);
        true
    }

    pub fn finish(self) -> Vec<Segment> {
        self.segments
    }
}

/// Split `text` on [`SEPARATOR`] into unstyled segments.
///
/// Empty tokens produced by consecutive, leading or trailing separators are
/// kept as zero-length segments. Empty input yields an empty list.
pub fn segment_text(text: &str) -> Vec<Segment> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut builder = SegmentListBuilder::new();
    let mut tokens = 0_usize;
    for token in text.split(SEPARATOR) {
        tokens += 1;
        let start = builder.next_start();
        if !builder.push(Segment::new(start, token)) {
            tracing::debug!(start, token, "suppressed duplicate segment");
        }
    }
    let segments = builder.finish();
    tracing::trace!(tokens, segments = segments.len(), "segmented text");
    segments
}
