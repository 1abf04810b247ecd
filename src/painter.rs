//! Painter factory — configuration plus the full pipeline in one callable.
//!
//! ```text
//! input ─▶ [gapless_playback] ─▶ fill_gaps ─▶ drop_needless_gaps
//!       ─▶ normalize ─▶ DirectionalPainter ─▶ StyleComposer ─▶ StyleDefinition
//! ```

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::compose::{MediaBlockComposer, Painted, StyleComposer};
use crate::expand;
use crate::media::{DirectionalPainter, Orientation};
use crate::model::{BreakpointSet, Value, HORIZONTAL};
use crate::{Error, Result};

// ============================================================================
// Configuration
// ============================================================================

/// Painter configuration.
///
/// Field names follow the camelCase configuration surface when read from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PainterConfig {
    /// Bound heights instead of widths.
    pub use_height: bool,
    /// Emit `min-*` features instead of `max-*`.
    pub use_min: bool,
    /// Pixels per rem.
    pub base_font_size: f64,
    pub points: BreakpointSet,
    /// Expand breakpoint-keyed objects into sequences before filling gaps.
    pub implicit: bool,
}

impl Default for PainterConfig {
    fn default() -> Self {
        Self {
            use_height: false,
            use_min: true,
            base_font_size: 16.0,
            points: HORIZONTAL.clone(),
            implicit: true,
        }
    }
}

impl PainterConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn orientation(&self) -> Orientation {
        Orientation::from_flags(self.use_height, self.use_min)
    }
}

// ============================================================================
// Painter
// ============================================================================

/// The public entry point: sparse style input in, composed styles out.
#[derive(Debug, Clone)]
pub struct Painter<C: StyleComposer = MediaBlockComposer> {
    points: BreakpointSet,
    implicit: bool,
    directional: DirectionalPainter<C>,
}

impl Painter {
    /// Create a painter with the default composer.
    pub fn new(config: PainterConfig) -> Result<Self> {
        Self::with_composer(config, MediaBlockComposer::new())
    }
}

impl<C: StyleComposer> Painter<C> {
    /// Create a painter that hands its queries to `composer`.
    pub fn with_composer(config: PainterConfig, composer: C) -> Result<Self> {
        let orientation = config.orientation();
        let directional = DirectionalPainter::with_composer(
            orientation,
            config.base_font_size,
            &config.points,
            composer,
        )?;
        tracing::debug!(
            ?orientation,
            base_font_size = config.base_font_size,
            breakpoints = config.points.len(),
            implicit = config.implicit,
            "painter ready"
        );
        Ok(Self { points: config.points, implicit: config.implicit, directional })
    }

    /// Resolve and compose a style object.
    ///
    /// Fails only when `input` is not a map. Properties that cannot resolve
    /// are listed in [`Painted::failures`] and left out of the styles.
    pub fn paint(&self, input: &Value) -> Result<Painted> {
        if !input.is_map() {
            return Err(Error::TypeMismatch {
                path: "$".into(),
                expected: "MAP".into(),
                got: input.type_name().into(),
            });
        }
        let resolved = expand::resolve(&self.points, input, self.implicit);
        self.directional.compose(&resolved)
    }

    pub fn points(&self) -> &BreakpointSet {
        &self.points
    }

    pub fn is_implicit(&self) -> bool {
        self.implicit
    }

    pub fn orientation(&self) -> Orientation {
        self.directional.orientation()
    }

    pub fn queries(&self) -> &[String] {
        self.directional.queries()
    }
}

/// Build a painter from `config`.
pub fn make_painter(config: PainterConfig) -> Result<Painter> {
    Painter::new(config)
}

static BODYPAINT: LazyLock<Painter> = LazyLock::new(|| {
    Painter::new(PainterConfig::default()).expect("default painter configuration is valid")
});

/// The default painter: horizontal `min-width`, 16px base, implicit expansion.
pub fn bodypaint() -> &'static Painter {
    &BODYPAINT
}
