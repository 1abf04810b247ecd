//! Normalized style tree — resolved values classified once, with failures
//! split off per leaf.

use crate::model::{PropertyMap, Value};
use crate::Error;

/// A resolved style value, classified for composition.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleNode {
    /// A plain declaration, the same at every breakpoint.
    Leaf(Value),
    /// One scalar per position. Interior gaps mean "no declaration here".
    Sequence(Vec<Value>),
    /// A nested selector holding its own properties.
    Nested(Vec<(String, StyleNode)>),
}

/// A property that could not be resolved. Its siblings are unaffected.
#[derive(Debug)]
pub struct LeafFailure {
    pub path: String,
    pub error: Error,
}

/// Classify every entry of `props`, collecting failing leaves instead of
/// aborting. Paths are rooted at `$`.
pub fn normalize(props: &PropertyMap) -> (Vec<(String, StyleNode)>, Vec<LeafFailure>) {
    let mut failures = Vec::new();
    let nodes = normalize_map(props, "$", &mut failures);
    (nodes, failures)
}

fn normalize_map(
    props: &PropertyMap,
    path: &str,
    failures: &mut Vec<LeafFailure>,
) -> Vec<(String, StyleNode)> {
    let mut nodes = Vec::with_capacity(props.len());
    for (key, value) in props.iter() {
        let here = format!("{path}.{key}");
        let node = match value {
            Value::Map(children) => Ok(StyleNode::Nested(normalize_map(children, &here, failures))),
            Value::List(items) => check_sequence(items, &here).map(|()| StyleNode::Sequence(items.clone())),
            Value::Gap => Err(Error::UnresolvedLeadingGap { path: here.clone() }),
            scalar => Ok(StyleNode::Leaf(scalar.clone())),
        };
        match node {
            Ok(node) => nodes.push((key.to_owned(), node)),
            Err(error) => {
                let path = error.path().map_or(here, str::to_owned);
                tracing::warn!(%path, %error, "dropping unresolved style property");
                failures.push(LeafFailure { path, error });
            }
        }
    }
    nodes
}

fn check_sequence(items: &[Value], path: &str) -> crate::Result<()> {
    if items.first().is_some_and(Value::is_gap) {
        return Err(Error::UnresolvedLeadingGap { path: path.to_owned() });
    }
    for (i, item) in items.iter().enumerate() {
        if !item.is_scalar() && !item.is_gap() {
            return Err(Error::TypeMismatch {
                path: format!("{path}[{i}]"),
                expected: "scalar".into(),
                got: item.type_name().into(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GAP;

    #[test]
    fn test_classifies_shapes() {
        let props = Value::map([
            ("color", Value::from("red")),
            ("width", Value::list(["1px", "2px"])),
            ("&:hover", Value::map([("top", Value::from(0))])),
        ]);
        let (nodes, failures) = normalize(props.as_map().unwrap());
        assert!(failures.is_empty());
        assert_eq!(nodes[0], ("color".to_string(), StyleNode::Leaf(Value::from("red"))));
        assert!(matches!(nodes[1].1, StyleNode::Sequence(ref s) if s.len() == 2));
        assert!(matches!(nodes[2].1, StyleNode::Nested(ref n) if n.len() == 1));
    }

    #[test]
    fn test_leading_gap_is_a_leaf_failure() {
        let props = Value::map([
            ("width", Value::list([GAP, Value::from("1px")])),
            ("color", Value::from("red")),
        ]);
        let (nodes, failures) = normalize(props.as_map().unwrap());
        assert_eq!(nodes.len(), 1);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, "$.width");
        assert!(matches!(failures[0].error, Error::UnresolvedLeadingGap { .. }));
    }

    #[test]
    fn test_non_scalar_entry_is_a_type_mismatch() {
        let props = Value::map([(
            "&:hover",
            Value::map([
                ("margin", Value::list([Value::from(1), Value::list([2, 3])])),
                ("padding", Value::list([4])),
            ]),
        )]);
        let (nodes, failures) = normalize(props.as_map().unwrap());
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, "$.&:hover.margin[1]");
        assert_eq!(failures[0].error.path(), Some("$.&:hover.margin[1]"));
        match &nodes[0].1 {
            StyleNode::Nested(children) => assert_eq!(children.len(), 1),
            other => panic!("expected nested node, got {other:?}"),
        }
    }
}
