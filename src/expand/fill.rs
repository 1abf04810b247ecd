//! Gap filling — pad sequences to the breakpoint count and carry values forward.

use crate::model::{BreakpointSet, PropertyMap, Value};

/// Resolve gaps in every sequence of `input`.
///
/// Lists shorter than the breakpoint set are right-padded with gaps, then each
/// gap takes the closest preceding value. Longer lists are never truncated.
/// A leading gap has nothing to inherit from and stays a gap.
///
/// Maps are walked and keep their shape; scalars come back unchanged.
pub fn fill_gaps(points: &BreakpointSet, input: &Value) -> Value {
    match input {
        Value::List(items) => Value::List(fill_sequence(points.len(), items)),
        Value::Map(props) => Value::Map(
            props
                .iter()
                .map(|(k, v)| (k.to_owned(), fill_gaps(points, v)))
                .collect::<PropertyMap>(),
        ),
        other => other.clone(),
    }
}

pub(crate) fn fill_sequence(count: usize, items: &[Value]) -> Vec<Value> {
    let mut filled: Vec<Value> = Vec::with_capacity(items.len().max(count));
    let padding = count.saturating_sub(items.len());

    for item in items.iter().chain(std::iter::repeat_n(&Value::Gap, padding)) {
        let next = match (item, filled.last()) {
            (Value::Gap, Some(prev)) => prev.clone(),
            _ => item.clone(),
        };
        filled.push(next);
    }
    filled
}
