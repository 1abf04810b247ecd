//! Value expansion — the pipeline from sparse author input to resolved
//! per-breakpoint sequences.
//!
//! ```text
//! raw input ─▶ gapless_playback (implicit only) ─▶ fill_gaps ─▶ drop_needless_gaps
//! ```
//!
//! Every stage is a pure function over [`Value`]; nothing here can fail.
//! Leftover leading gaps and non-scalar leaves are reported later, when the
//! result is normalized for composition.

pub mod fill;
pub mod pattern;
pub mod trim;

pub use fill::fill_gaps;
pub use pattern::{base_template, gapless_playback, is_pattern_object};
pub use trim::drop_needless_gaps;

use crate::model::{BreakpointSet, PropertyMap, Value};

/// Run the whole expansion pipeline over `input`.
///
/// With `implicit` set, pattern objects are expanded first. Every sequence is
/// then filled and trimmed.
pub fn resolve(points: &BreakpointSet, input: &Value, implicit: bool) -> Value {
    let filled = if implicit {
        fill_gaps(points, &gapless_playback(points, input))
    } else {
        fill_gaps(points, input)
    };
    trim_all(points, &filled)
}

/// Apply [`drop_needless_gaps`] to every sequence under `value`.
pub fn trim_all(points: &BreakpointSet, value: &Value) -> Value {
    match value {
        Value::Map(props) => Value::Map(
            props
                .iter()
                .map(|(k, v)| (k.to_owned(), trim_all(points, v)))
                .collect::<PropertyMap>(),
        ),
        other => drop_needless_gaps(points, other),
    }
}
