//! # Style Value Model
//!
//! Plain data shared by every stage: raw values, ordered property maps and
//! breakpoint sets.
//!
//! This module is pure data — no rendering, no state.

pub mod value;
pub mod property_map;
pub mod breakpoints;

pub use value::{Value, GAP, __};
pub use property_map::PropertyMap;
pub use breakpoints::{
    Breakpoint, BreakpointSet,
    HORIZONTAL, VERTICAL, LEGACY,
    HORIZONTAL_BREAKPOINTS, VERTICAL_BREAKPOINTS, LEGACY_BREAKPOINTS,
};
