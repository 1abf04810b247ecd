//! Pattern objects — maps keyed by breakpoint names.

use crate::model::{BreakpointSet, PropertyMap, Value};

/// True iff `candidate` is a map whose every key names a breakpoint.
///
/// Lists and scalars never are. The empty map vacuously is.
pub fn is_pattern_object(points: &BreakpointSet, candidate: &Value) -> bool {
    match candidate {
        Value::Map(props) => props.keys().all(|k| points.contains(k)),
        _ => false,
    }
}

/// Every breakpoint name mapped to the gap sentinel, in breakpoint order.
pub fn base_template(points: &BreakpointSet) -> PropertyMap {
    points.names().map(|name| (name.to_owned(), Value::Gap)).collect()
}

/// Expand pattern objects nested anywhere under `input` into gapped sequences.
///
/// For each entry of a map, a pattern-object value is merged onto the base
/// template and projected onto breakpoint order, so omitted breakpoints become
/// explicit gaps. Other maps are expanded recursively. Lists and scalars are
/// left as they are. Entry order is kept.
pub fn gapless_playback(points: &BreakpointSet, input: &Value) -> Value {
    let Value::Map(props) = input else {
        return input.clone();
    };

    let template = base_template(points);
    let mut expanded = PropertyMap::with_capacity(props.len());
    for (key, value) in props.iter() {
        let next = match value {
            Value::Map(pattern) if is_pattern_object(points, value) => {
                tracing::trace!(key, keys = pattern.len(), "expanding pattern object");
                Value::List(template.merge_right(pattern).into_values())
            }
            Value::Map(_) => gapless_playback(points, value),
            other => other.clone(),
        };
        expanded.insert(key, next);
    }
    Value::Map(expanded)
}
