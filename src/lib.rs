//! # bodypaint — Breakpoint-Aware Media Query Generation
//!
//! Turns sparse, possibly nested style values into one media query block per
//! breakpoint.
//!
//! ## Design Principles
//!
//! 1. **Pure pipeline**: expansion, filling and trimming are plain functions over `Value`
//! 2. **Explicit gaps**: `Value::Gap` is a variant, never a magic string
//! 3. **Trait seam**: `StyleComposer` is the contract with whatever consumes the queries
//! 4. **Local failures**: a bad property is reported, its siblings still render
//!
//! ## Quick Start
//!
//! ```rust
//! use bodypaint::{bodypaint, Value, GAP};
//!
//! # fn example() -> bodypaint::Result<()> {
//! let input = Value::map([
//!     ("width", Value::list([Value::from("100%"), GAP, Value::from("50%")])),
//!     ("margin", Value::map([("T0", "0"), ("M0", "auto")])),
//! ]);
//!
//! let styles = bodypaint().paint(&input)?.into_result()?;
//! println!("{}", styles.to_css(".card"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Function | Description |
//! |-------|----------|-------------|
//! | Expand | `gapless_playback` | Breakpoint-keyed objects → gapped sequences (implicit mode) |
//! | Fill | `fill_gaps` | Pad to breakpoint count, carry values forward |
//! | Trim | `drop_needless_gaps` | Drop trailing repeats |
//! | Paint | `DirectionalPainter` | One rem-based query per breakpoint |
//! | Compose | `StyleComposer` | Distribute positions into query blocks |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod expand;
pub mod units;
pub mod media;
pub mod compose;
pub mod painter;

// ============================================================================
// Re-exports: Model
// ============================================================================

pub use model::{
    Value, PropertyMap, Breakpoint, BreakpointSet, GAP, __,
    HORIZONTAL, VERTICAL, LEGACY,
    HORIZONTAL_BREAKPOINTS, VERTICAL_BREAKPOINTS, LEGACY_BREAKPOINTS,
};

// ============================================================================
// Re-exports: Expansion
// ============================================================================

pub use expand::{
    fill_gaps, is_pattern_object, gapless_playback, drop_needless_gaps,
    base_template, resolve,
};

// ============================================================================
// Re-exports: Units and media queries
// ============================================================================

pub use units::{as_px, as_rem, as_relative_unit, with_unit};
pub use media::{
    MediaFeature, Orientation, DirectionalPainter,
    directional_paint, paint, vpaint,
    media, min_width, max_width, min_height, max_height,
};

// ============================================================================
// Re-exports: Composition
// ============================================================================

pub use compose::{
    StyleComposer, MediaBlockComposer, StyleDefinition, StyleEntry,
    StyleNode, Painted, LeafFailure,
};

// ============================================================================
// Re-exports: Painter
// ============================================================================

pub use painter::{Painter, PainterConfig, make_painter, bodypaint};

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Breakpoint set is empty")]
    EmptyBreakpointSet,

    #[error("Duplicate breakpoint name: {name}")]
    DuplicateBreakpoint { name: String },

    #[error("Breakpoint {name} has threshold {threshold}, not above previous {previous}")]
    NonIncreasingThreshold { name: String, threshold: u32, previous: u32 },

    #[error("Breakpoint {name} must have a positive threshold")]
    InvalidThreshold { name: String },

    #[error("Unresolved leading gap at {path}")]
    UnresolvedLeadingGap { path: String },

    #[error("Type error at {path}: expected {expected}, got {got}")]
    TypeMismatch { path: String, expected: String, got: String },

    #[error("Base font size must be a positive number, got {0}")]
    InvalidBaseFontSize(f64),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The property path a leaf error points at, if it has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            Error::UnresolvedLeadingGap { path } | Error::TypeMismatch { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
