//! Media queries — feature renderers and the directional painter that turns a
//! breakpoint set into one query per breakpoint.

use std::fmt;

use crate::compose::{normalize, MediaBlockComposer, Painted, StyleComposer};
use crate::model::{BreakpointSet, Value};
use crate::units::as_rem;
use crate::{Error, Result};

// ============================================================================
// Features and renderers
// ============================================================================

/// The media feature a painter tests against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFeature {
    MinWidth,
    MaxWidth,
    MinHeight,
    MaxHeight,
}

impl MediaFeature {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaFeature::MinWidth => "min-width",
            MediaFeature::MaxWidth => "max-width",
            MediaFeature::MinHeight => "min-height",
            MediaFeature::MaxHeight => "max-height",
        }
    }
}

impl fmt::Display for MediaFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `@media(<feature>: <value>)`
pub fn media(feature: &str, value: &str) -> String {
    format!("@media({feature}: {value})")
}

pub fn min_width(value: &str) -> String { media("min-width", value) }
pub fn max_width(value: &str) -> String { media("max-width", value) }
pub fn min_height(value: &str) -> String { media("min-height", value) }
pub fn max_height(value: &str) -> String { media("max-height", value) }

// ============================================================================
// Orientation
// ============================================================================

/// Which axis, and which end of it, the breakpoints bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    HorizontalMin,
    HorizontalMax,
    VerticalMin,
    VerticalMax,
}

impl Orientation {
    pub fn from_flags(use_height: bool, use_min: bool) -> Self {
        match (use_height, use_min) {
            (false, true) => Orientation::HorizontalMin,
            (false, false) => Orientation::HorizontalMax,
            (true, true) => Orientation::VerticalMin,
            (true, false) => Orientation::VerticalMax,
        }
    }

    pub fn feature(&self) -> MediaFeature {
        match self {
            Orientation::HorizontalMin => MediaFeature::MinWidth,
            Orientation::HorizontalMax => MediaFeature::MaxWidth,
            Orientation::VerticalMin => MediaFeature::MinHeight,
            Orientation::VerticalMax => MediaFeature::MaxHeight,
        }
    }
}

// ============================================================================
// DirectionalPainter
// ============================================================================

/// Renders a breakpoint set as rem-based queries along one orientation and
/// composes already-resolved styles against them.
///
/// It does no gap handling of its own: feed it filled, trimmed values, or use
/// [`crate::Painter`], which runs the expansion pipeline first.
#[derive(Debug, Clone)]
pub struct DirectionalPainter<C: StyleComposer = MediaBlockComposer> {
    orientation: Orientation,
    queries: Vec<String>,
    composer: C,
}

impl DirectionalPainter {
    pub fn new(orientation: Orientation, base_font_size: f64, points: &BreakpointSet) -> Result<Self> {
        Self::with_composer(orientation, base_font_size, points, MediaBlockComposer::new())
    }
}

impl<C: StyleComposer> DirectionalPainter<C> {
    pub fn with_composer(
        orientation: Orientation,
        base_font_size: f64,
        points: &BreakpointSet,
        composer: C,
    ) -> Result<Self> {
        let feature = orientation.feature();
        let queries = as_rem(base_font_size, points)?
            .into_iter()
            .map(|(_, length)| composer.render_query(feature, &length))
            .collect();
        Ok(Self { orientation, queries, composer })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// One query per breakpoint, in breakpoint order.
    pub fn queries(&self) -> &[String] {
        &self.queries
    }

    pub fn composer(&self) -> &C {
        &self.composer
    }

    /// Compose a resolved style object. Properties that cannot be written
    /// out are reported in [`Painted::failures`]; the rest still compose.
    pub fn compose(&self, resolved: &Value) -> Result<Painted> {
        let Value::Map(props) = resolved else {
            return Err(Error::TypeMismatch {
                path: "$".into(),
                expected: "MAP".into(),
                got: resolved.type_name().into(),
            });
        };
        let (nodes, failures) = normalize(props);
        let styles = self.composer.compose(&self.queries, &nodes);
        Ok(Painted { styles, failures })
    }
}

/// A directional painter for the given flags with the default composer.
pub fn directional_paint(
    use_height: bool,
    use_min: bool,
    base_font_size: f64,
    points: &BreakpointSet,
) -> Result<DirectionalPainter> {
    DirectionalPainter::new(Orientation::from_flags(use_height, use_min), base_font_size, points)
}

/// Width-based [`directional_paint`].
pub fn paint(use_min: bool, base_font_size: f64, points: &BreakpointSet) -> Result<DirectionalPainter> {
    directional_paint(false, use_min, base_font_size, points)
}

/// Height-based [`directional_paint`].
pub fn vpaint(use_min: bool, base_font_size: f64, points: &BreakpointSet) -> Result<DirectionalPainter> {
    directional_paint(true, use_min, base_font_size, points)
}
