//! Mapping host selection observations back to segments.

use serde::{Deserialize, Serialize};

use crate::segment::{SEPARATOR, Segment, SegmentKey};

/// A selection as reported by the editable surface.
///
/// `start` and `end` are `char` offsets into the text; `text` is the
/// selected substring.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectionObservation {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

impl SelectionObservation {
    pub fn new(start: usize, end: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
        }
    }

    /// The triple to match against, after dropping one trailing separator.
    ///
    /// Selecting a word by double click or drag commonly includes the
    /// space after it; exactly one such space is removed along with one
    /// unit of `end`.
    pub fn normalized(&self) -> SegmentKey<'_> {
        match self.text.strip_suffix(SEPARATOR) {
            Some(trimmed) => SegmentKey {
                start: self.start,
                end: self.end.saturating_sub(1),
                text: trimmed,
            },
            None => SegmentKey {
                start: self.start,
                end: self.end,
                text: &self.text,
            },
        }
    }
}

/// Find the segment whose triple exactly equals the normalized observation.
pub fn resolve_selection<'a>(
    segments: &'a [Segment],
    observation: &SelectionObservation,
) -> Option<&'a Segment> {
    let key = observation.normalized();
    segments.iter().find(|segment| segment.matches(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::segment_text;

    #[test]
    fn test_exact_selection_matches_first_word() {
        let segments = segment_text("hello world");
        let found = resolve_selection(&segments, &SelectionObservation::new(0, 5, "hello"));
        assert_eq!(found, segments.first());
    }

    #[test]
    fn test_trailing_space_is_normalized() {
        let segments = segment_text("hello world");
        let found = resolve_selection(&segments, &SelectionObservation::new(0, 6, "hello "));
        assert_eq!(found, segments.first());
    }

    #[test]
    fn test_second_word_matches() {
        let segments = segment_text("hello world");
        let found = resolve_selection(&segments, &SelectionObservation::new(6, 11, "world"));
        assert_eq!(found, segments.get(1));
    }

    #[test]
    fn test_only_one_trailing_space_is_removed() {
        let segments = segment_text("a  b");
        let obs = SelectionObservation::new(0, 3, "a  ");
        assert_eq!(
            obs.normalized(),
            SegmentKey {
                start: 0,
                end: 2,
                text: "a ",
            }
        );
        assert!(resolve_selection(&segments, &obs).is_none());
    }

    #[test]
    fn test_partial_selection_does_not_match() {
        let segments = segment_text("hello world");
        assert!(resolve_selection(&segments, &SelectionObservation::new(0, 4, "hell")).is_none());
        assert!(
            resolve_selection(&segments, &SelectionObservation::new(0, 11, "hello world"))
                .is_none()
        );
    }

    #[test]
    fn test_offsets_must_agree_with_text() {
        let segments = segment_text("hello world");
        assert!(resolve_selection(&segments, &SelectionObservation::new(1, 6, "hello")).is_none());
    }

    #[test]
    fn test_empty_selection_matches_nothing_in_plain_text() {
        let segments = segment_text("hello world");
        let caret = SelectionObservation::new(3, 3, "");
        assert!(resolve_selection(&segments, &caret).is_none());
        assert!(resolve_selection(&[], &caret).is_none());
    }

    #[test]
    fn test_caret_on_empty_token_matches_it() {
        let segments = segment_text("a  b");
        let found = resolve_selection(&segments, &SelectionObservation::new(2, 2, ""));
        assert_eq!(found.map(|s| s.key()), Some(SegmentKey { start: 2, end: 2, text: "" }));
    }

    #[test]
    fn test_lone_space_at_zero_does_not_underflow() {
        let obs = SelectionObservation::new(0, 0, " ");
        assert_eq!(obs.normalized().end, 0);
    }
}
