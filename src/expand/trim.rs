//! Trailing trim — drop positions that repeat what came before them.

use crate::model::{BreakpointSet, Value};

/// Keep the shortest prefix of a filled sequence that still carries every
/// change. Non-list values pass through.
///
/// Scanning from the tail, a later element is redundant when it is a gap or
/// equals the element before it. The first non-redundant later element is the
/// last one kept; if there is none, only position 0 survives.
///
/// `points` is the set the sequence was filled against. The cutoff depends on
/// the values alone, so any set gives the same result.
pub fn drop_needless_gaps(points: &BreakpointSet, sequence: &Value) -> Value {
    match sequence {
        Value::List(items) => Value::List(trim_sequence(points, items).to_vec()),
        other => other.clone(),
    }
}

pub(crate) fn trim_sequence<'a>(points: &BreakpointSet, items: &'a [Value]) -> &'a [Value] {
    if items.is_empty() {
        return items;
    }
    let keep = cutoff(items) + 1;
    if keep < items.len() {
        tracing::trace!(
            breakpoints = points.len(),
            kept = keep,
            dropped = items.len() - keep,
            "trimmed trailing repeats"
        );
    }
    &items[..keep]
}

fn cutoff(items: &[Value]) -> usize {
    for i in (0..items.len() - 1).rev() {
        let later = &items[i + 1];
        if !later.is_gap() && *later != items[i] {
            return i + 1;
        }
    }
    0
}
