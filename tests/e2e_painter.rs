//! End-to-end tests for painters.
//!
//! Each test exercises: config -> expand -> fill -> trim -> normalize -> compose.

use bodypaint::{
    bodypaint, make_painter, paint, vpaint, BreakpointSet, Error, MediaBlockComposer, MediaFeature,
    Painter, PainterConfig, StyleComposer, StyleDefinition, StyleEntry, StyleNode, Value, GAP,
    HORIZONTAL, VERTICAL,
};
use pretty_assertions::assert_eq;

fn three_points() -> BreakpointSet {
    BreakpointSet::new([("sm", 320), ("md", 640), ("lg", 960)]).unwrap()
}

fn painter(implicit: bool, literal: bool) -> Painter {
    let config = PainterConfig {
        points: three_points(),
        implicit,
        ..PainterConfig::default()
    };
    let composer = if literal { MediaBlockComposer::literal() } else { MediaBlockComposer::new() };
    Painter::with_composer(config, composer).unwrap()
}

// ============================================================================
// 1. Default painter
// ============================================================================

#[test]
fn test_bodypaint_sequence_to_blocks() {
    let input = Value::map([("width", Value::list(["100%", "50%", "25%"]))]);
    let styles = bodypaint().paint(&input).unwrap().into_result().unwrap();

    assert_eq!(styles.declaration("width"), Some("100%"));
    assert_eq!(
        styles.block("@media(min-width: 20rem)").and_then(|b| b.declaration("width")),
        Some("50%")
    );
    assert_eq!(
        styles.block("@media(min-width: 30rem)").and_then(|b| b.declaration("width")),
        Some("25%")
    );
    assert_eq!(styles.len(), 3);
}

#[test]
fn test_bodypaint_pattern_object() {
    let input = Value::map([("padding", Value::map([("T0", "4px"), ("S0", "8px")]))]);
    let styles = bodypaint().paint(&input).unwrap().into_result().unwrap();

    // [4px, 4px, 8px] after fill and trim
    assert_eq!(styles.declaration("padding"), Some("4px"));
    assert_eq!(
        styles.block("@media(min-width: 20rem)").and_then(|b| b.declaration("padding")),
        Some("4px")
    );
    assert_eq!(
        styles.block("@media(min-width: 30rem)").and_then(|b| b.declaration("padding")),
        Some("8px")
    );
    assert!(styles.block("@media(min-width: 37.5rem)").is_none());
}

#[test]
fn test_trailing_repeats_emit_no_blocks() {
    let input = Value::map([("color", Value::list(["red", "red", "red"]))]);
    let styles = bodypaint().paint(&input).unwrap().into_result().unwrap();
    assert_eq!(styles.keys().collect::<Vec<_>>(), vec!["color"]);
}

#[test]
fn test_css_output() {
    let input = Value::map([
        ("display", Value::from("flex")),
        ("gap", Value::list(["4px", "8px"])),
    ]);
    let css = painter(true, false).paint(&input).unwrap().into_result().unwrap().to_css(".row");
    let expected = "\
.row {
  display: flex;
  gap: 4px;
}
@media(min-width: 20rem) {
  .row {
    gap: 8px;
  }
}
";
    assert_eq!(css, expected);
}

// ============================================================================
// 2. Literal composition and explicit mode
// ============================================================================

#[test]
fn test_literal_composer_one_rule_per_breakpoint() {
    let input = Value::map([("top", Value::list([1, 2, 3]))]);
    let styles = painter(true, true).paint(&input).unwrap().into_result().unwrap();
    assert_eq!(
        styles.keys().collect::<Vec<_>>(),
        vec!["@media(min-width: 20rem)", "@media(min-width: 40rem)", "@media(min-width: 60rem)"]
    );
}

#[test]
fn test_named_keys_shift_one_query_unless_literal() {
    let input = Value::map([("padding", Value::map([("T0", "4px"), ("S0", "8px")]))]);

    let base_first = bodypaint().paint(&input).unwrap().into_result().unwrap();
    assert_eq!(
        base_first.block("@media(min-width: 30rem)").and_then(|b| b.declaration("padding")),
        Some("8px")
    );

    let config = PainterConfig { points: HORIZONTAL.clone(), ..PainterConfig::default() };
    let literal = Painter::with_composer(config, MediaBlockComposer::literal())
        .unwrap()
        .paint(&input)
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(literal.declaration("padding"), None);
    assert_eq!(
        literal.block("@media(min-width: 20rem)").and_then(|b| b.declaration("padding")),
        Some("4px")
    );
    assert_eq!(
        literal.block("@media(min-width: 37.5rem)").and_then(|b| b.declaration("padding")),
        Some("8px")
    );
}

#[test]
fn test_explicit_mode_treats_pattern_keys_as_selectors() {
    let input = Value::map([("sm", Value::map([("color", "red")]))]);
    let styles = painter(false, false).paint(&input).unwrap().into_result().unwrap();
    assert_eq!(styles.block("sm").and_then(|b| b.declaration("color")), Some("red"));
}

// ============================================================================
// 3. Orientation
// ============================================================================

#[test]
fn test_vertical_max_painter() {
    let config = PainterConfig {
        use_height: true,
        use_min: false,
        base_font_size: 10.0,
        points: VERTICAL.clone(),
        implicit: true,
    };
    let painter = make_painter(config).unwrap();
    assert_eq!(painter.queries()[0], "@media(max-height: 16rem)");
    assert_eq!(painter.queries().len(), 9);

    let styles = painter
        .paint(&Value::map([("height", Value::map([("H0", "10px"), ("H1", "20px")]))]))
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(
        styles.block("@media(max-height: 16rem)").and_then(|b| b.declaration("height")),
        Some("20px")
    );
}

#[test]
fn test_unbound_helpers_compose_resolved_input() {
    let horizontal = paint(false, 16.0, &HORIZONTAL).unwrap();
    let vertical = vpaint(true, 16.0, &VERTICAL).unwrap();

    let resolved = Value::map([("margin", Value::list([0, 8]))]);
    let h = horizontal.compose(&resolved).unwrap().into_result().unwrap();
    let v = vertical.compose(&resolved).unwrap().into_result().unwrap();

    assert!(h.block("@media(max-width: 20rem)").is_some());
    assert!(v.block("@media(min-height: 10rem)").is_some());
}

// ============================================================================
// 4. Failures stay local
// ============================================================================

#[test]
fn test_leading_gap_fails_only_its_property() {
    let input = Value::map([
        ("width", Value::list([GAP, Value::from("10px")])),
        ("color", Value::from("red")),
    ]);
    let painted = bodypaint().paint(&input).unwrap();

    assert!(!painted.is_clean());
    assert_eq!(painted.failures.len(), 1);
    assert_eq!(painted.failures[0].path, "$.width");
    assert_eq!(painted.styles.declaration("color"), Some("red"));
    assert_eq!(painted.styles.declaration("width"), None);
    assert!(matches!(painted.into_result(), Err(Error::UnresolvedLeadingGap { .. })));
}

#[test]
fn test_pattern_without_first_breakpoint_is_unresolved() {
    let input = Value::map([("width", Value::map([("S0", "10px")]))]);
    let painted = bodypaint().paint(&input).unwrap();
    assert!(matches!(painted.failures[0].error, Error::UnresolvedLeadingGap { .. }));
}

#[test]
fn test_empty_pattern_object_is_unresolved() {
    let input = Value::map([("width", Value::map(Vec::<(String, Value)>::new()))]);
    let painted = bodypaint().paint(&input).unwrap();
    assert_eq!(painted.failures.len(), 1);
    assert!(painted.styles.is_empty());
}

#[test]
fn test_non_scalar_pattern_value_is_a_local_type_mismatch() {
    let input = Value::map([
        ("margin", Value::map([("T0", Value::list([1, 2]))])),
        ("padding", Value::map([("T0", "2px")])),
    ]);
    let painted = bodypaint().paint(&input).unwrap();

    assert_eq!(painted.failures.len(), 1);
    assert_eq!(painted.failures[0].path, "$.margin[0]");
    assert_eq!(painted.failures[0].error.path(), Some("$.margin[0]"));
    assert!(matches!(painted.failures[0].error, Error::TypeMismatch { .. }));
    assert_eq!(painted.styles.declaration("padding"), Some("2px"));
}

#[test]
fn test_non_map_input_is_rejected() {
    let err = bodypaint().paint(&Value::from("1px")).unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

// ============================================================================
// 5. Custom composer
// ============================================================================

/// Emits every position under its query, prefixed, and counts nothing else.
struct PrefixComposer;

impl StyleComposer for PrefixComposer {
    fn render_query(&self, feature: MediaFeature, value: &str) -> String {
        format!("@container ({feature} >= {value})")
    }

    fn compose(&self, queries: &[String], styles: &[(String, StyleNode)]) -> StyleDefinition {
        let mut def = StyleDefinition::new();
        for (key, node) in styles {
            if let StyleNode::Sequence(values) = node {
                for (query, value) in queries.iter().zip(values) {
                    let mut block = StyleDefinition::new();
                    block.push(key, StyleEntry::Declaration(value.to_css().unwrap_or_default()));
                    def.push(query, StyleEntry::Block(block));
                }
            }
        }
        def
    }
}

#[test]
fn test_custom_composer_receives_rendered_queries() {
    let config = PainterConfig { points: three_points(), ..PainterConfig::default() };
    let painter = Painter::with_composer(config, PrefixComposer).unwrap();
    assert_eq!(painter.queries()[1], "@container (min-width >= 40rem)");

    let styles = painter
        .paint(&Value::map([("width", Value::list(["1px", "2px"]))]))
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(
        styles.keys().collect::<Vec<_>>(),
        vec!["@container (min-width >= 20rem)", "@container (min-width >= 40rem)"]
    );
}
