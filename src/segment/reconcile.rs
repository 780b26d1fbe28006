//! Best-effort carry-forward of style flags across re-segmentation.
//!
//! Segments are matched by text only: a common prefix and suffix are
//! paired first, then the remaining middle is aligned with a longest
//! common subsequence. Matched new segments inherit the old flags; their
//! offsets are whatever the fresh segmentation computed.

use super::Segment;

/// Upper bound on the LCS table for the unmatched middle of an edit.
const MAX_LCS_CELLS: usize = 1 << 22;

/// Copy style flags from `previous` onto the matching segments of `next`.
pub fn carry_styles(previous: &[Segment], mut next: Vec<Segment>) -> Vec<Segment> {
    if previous.is_empty() || next.is_empty() {
        return next;
    }

    let prefix = previous
        .iter()
        .zip(&next)
        .take_while(|(old, new)| old.text == new.text)
        .count();
    let max_suffix = previous.len().min(next.len()) - prefix;
    let suffix = previous
        .iter()
        .rev()
        .zip(next.iter().rev())
        .take(max_suffix)
        .take_while(|(old, new)| old.text == new.text)
        .count();

    for (new, old) in next.iter_mut().zip(previous).take(prefix) {
        new.styles = old.styles;
    }
    for (new, old) in next.iter_mut().rev().zip(previous.iter().rev()).take(suffix) {
        new.styles = old.styles;
    }

    let old_mid = &previous[prefix..previous.len() - suffix];
    let new_start = prefix;
    let new_end = next.len() - suffix;
    if old_mid.is_empty() || new_start == new_end {
        return next;
    }

    let cells = (old_mid.len() + 1).saturating_mul(new_end - new_start + 1);
    if cells > MAX_LCS_CELLS {
        tracing::debug!(
            old = old_mid.len(),
            new = new_end - new_start,
            "edit too large to align, carrying prefix and suffix only"
        );
        return next;
    }

    let pairs = lcs_pairs(old_mid, &next[new_start..new_end]);
    for (old_idx, new_idx) in pairs {
        next[new_start + new_idx].styles = old_mid[old_idx].styles;
    }
    next
}

/// Index pairs `(old, new)` of one longest common subsequence by text.
fn lcs_pairs(old: &[Segment], new: &[Segment]) -> Vec<(usize, usize)> {
    let (rows, cols) = (old.len(), new.len());
    let width = cols + 1;
    let mut table = vec![0_u32; (rows + 1) * width];

    for i in (0..rows).rev() {
        for j in (0..cols).rev() {
            table[i * width + j] = if old[i].text == new[j].text {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let mut pairs = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < rows && j < cols {
        if old[i].text == new[j].text {
            pairs.push((i, j));
            i += 1;
            j += 1;
        } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }
    pairs
}
