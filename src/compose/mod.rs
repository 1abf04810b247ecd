//! # Style Composer
//!
//! The seam between resolved per-breakpoint values and the style object a
//! caller consumes. A composer renders media queries and distributes sequence
//! positions across them.
//!
//! ## Implementations
//!
//! | Composer | Description |
//! |----------|-------------|
//! | `MediaBlockComposer` | Base declarations plus one block per media query |

pub mod definition;
pub mod node;

pub use definition::{StyleDefinition, StyleEntry};
pub use node::{normalize, LeafFailure, StyleNode};

use crate::media::{media, MediaFeature};
use crate::Result;

// ============================================================================
// StyleComposer Trait
// ============================================================================

/// Turns one query per breakpoint and a normalized style tree into a
/// [`StyleDefinition`].
pub trait StyleComposer: Send + Sync {
    /// Render a single media feature test. Default: `@media(<feature>: <value>)`.
    fn render_query(&self, feature: MediaFeature, value: &str) -> String {
        media(feature.as_str(), value)
    }

    /// Compose `styles` against `queries`, which are in breakpoint order.
    fn compose(&self, queries: &[String], styles: &[(String, StyleNode)]) -> StyleDefinition;
}

// ============================================================================
// MediaBlockComposer
// ============================================================================

/// Array-to-media-block composer.
///
/// By default position 0 of a sequence is the unconditioned base declaration
/// and position `i` lands in the block for query `i - 1`. In literal mode
/// position `i` lands in the block for query `i`.
///
/// Base-first placement shifts named breakpoint keys one query early: with the
/// horizontal table, a pattern value keyed `S0` lands under the `T1` query
/// (`min-width: 30rem`), not under `S0`'s own `min-width: 37.5rem`. Use
/// [`MediaBlockComposer::literal`] to place each key under its own threshold.
///
/// Base declarations and nested selectors come first, in input order, then one
/// block per query that received anything, in query order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaBlockComposer {
    pub literal: bool,
}

impl MediaBlockComposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn literal() -> Self {
        Self { literal: true }
    }

    fn slot(&self, position: usize) -> Option<usize> {
        if self.literal { Some(position) } else { position.checked_sub(1) }
    }
}

impl StyleComposer for MediaBlockComposer {
    fn compose(&self, queries: &[String], styles: &[(String, StyleNode)]) -> StyleDefinition {
        let mut base = StyleDefinition::new();
        let mut blocks: Vec<StyleDefinition> = vec![StyleDefinition::new(); queries.len()];

        for (key, node) in styles {
            match node {
                StyleNode::Leaf(value) => {
                    if let Some(css) = value.to_css() {
                        base.push(key, StyleEntry::Declaration(css));
                    }
                }
                StyleNode::Sequence(values) => {
                    for (position, value) in values.iter().enumerate() {
                        let Some(css) = value.to_css() else { continue };
                        match self.slot(position) {
                            None => base.push(key, StyleEntry::Declaration(css)),
                            Some(q) if q < queries.len() => {
                                blocks[q].push(key, StyleEntry::Declaration(css));
                            }
                            Some(_) => {
                                tracing::warn!(property = %key, position, "no media query for position, dropped");
                            }
                        }
                    }
                }
                StyleNode::Nested(children) => {
                    base.push(key, StyleEntry::Block(self.compose(queries, children)));
                }
            }
        }

        for (query, block) in queries.iter().zip(blocks) {
            if !block.is_empty() {
                base.push(query, StyleEntry::Block(block));
            }
        }
        base
    }
}

// ============================================================================
// Painted
// ============================================================================

/// Composition result: the style object plus every property that had to be
/// left out.
#[derive(Debug)]
pub struct Painted {
    pub styles: StyleDefinition,
    pub failures: Vec<LeafFailure>,
}

impl Painted {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// The styles if every property resolved, otherwise the first failure.
    pub fn into_result(self) -> Result<StyleDefinition> {
        match self.failures.into_iter().next() {
            None => Ok(self.styles),
            Some(failure) => Err(failure.error),
        }
    }
}
