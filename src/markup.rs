//! Nested markup serialization for the preview.

use crate::segment::{SEPARATOR, Segment, StyleFlag, StyleFlags};

/// Wrap `text` in one tag per set flag: bold innermost, then italic, then
/// underline outermost.
///
/// Text is emitted verbatim, without escaping.
pub fn serialize_segment(text: &str, styles: StyleFlags) -> String {
    let mut markup = text.to_owned();
    for flag in StyleFlag::ALL {
        if styles.get(flag) {
            let tag = flag.tag();
            markup = format!("<{tag}>{markup}</{tag}>");
        }
    }
    markup
}

/// Serialize every segment, each followed by one separator.
pub fn render_preview(segments: &[Segment]) -> String {
    let mut preview = String::new();
    for segment in segments {
        preview.push_str(&serialize_segment(&segment.text, segment.styles));
        preview.push(SEPARATOR);
    }
    preview
}
