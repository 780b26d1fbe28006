//! Text segments and their style flags.
//!
//! A [`Segment`] is one space-delimited span of the source text. Segments
//! carry no stable handle: across independent computations they are
//! compared by their `(start, end, text)` triple, see [`SegmentKey`].

mod reconcile;
mod segmenter;

pub use reconcile::carry_styles;
pub use segmenter::{SEPARATOR, SegmentListBuilder, segment_text};

use serde::{Deserialize, Serialize};

/// One of the three independently togglable style flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleFlag {
    Bold,
    Italic,
    Underline,
}

impl StyleFlag {
    /// All flags, in markup nesting order (innermost first).
    pub const ALL: [Self; 3] = [Self::Bold, Self::Italic, Self::Underline];

    /// Markup tag name emitted for this flag.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Bold => "b",
            Self::Italic => "i",
            Self::Underline => "u",
        }
    }

    /// Human readable name, used in the status bar and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Italic => "Italic",
            Self::Underline => "Underline",
        }
    }
}

/// Per-segment style state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StyleFlags {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl StyleFlags {
    /// Read a single flag.
    pub const fn get(self, flag: StyleFlag) -> bool {
        match flag {
            StyleFlag::Bold => self.bold,
            StyleFlag::Italic => self.italic,
            StyleFlag::Underline => self.underline,
        }
    }

    /// Return a copy with `flag` negated and the other two untouched.
    #[must_use]
    pub const fn toggled(mut self, flag: StyleFlag) -> Self {
        match flag {
            StyleFlag::Bold => self.bold = !self.bold,
            StyleFlag::Italic => self.italic = !self.italic,
            StyleFlag::Underline => self.underline = !self.underline,
        }
        self
    }

    /// Whether no flag is set.
    pub const fn is_plain(self) -> bool {
        !self.bold && !self.italic && !self.underline
    }
}

/// Comparison identity of a segment: its `(start, end, text)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentKey<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

/// A contiguous span of the source text with its own style flags.
///
/// `start` and `end` are offsets in `char`s into the source text, with
/// `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub styles: StyleFlags,
}

impl Segment {
    /// Create an unstyled segment for `text` starting at `start`.
    pub fn new(start: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let end = start + text.chars().count();
        Self {
            start,
            end,
            text,
            styles: StyleFlags::default(),
        }
    }

    /// Builder-style helper to attach style flags.
    #[must_use]
    pub const fn with_styles(mut self, styles: StyleFlags) -> Self {
        self.styles = styles;
        self
    }

    /// The identity triple of this segment.
    pub fn key(&self) -> SegmentKey<'_> {
        SegmentKey {
            start: self.start,
            end: self.end,
            text: &self.text,
        }
    }

    /// Whether this segment's triple equals `key`. Styles are ignored.
    pub fn matches(&self, key: SegmentKey<'_>) -> bool {
        self.key() == key
    }
}
