//! Unit conversion for breakpoint thresholds.
//!
//! Thresholds are pixels. Media queries can be written in pixels or in rem
//! relative to a base font size.

use crate::model::BreakpointSet;
use crate::{Error, Result};

/// Breakpoint name → rendered length, in breakpoint order.
pub type UnitTable = Vec<(String, String)>;

/// Append `suffix` to a number, printing integral values without a fraction.
pub fn with_unit(suffix: &str, value: f64) -> String {
    format!("{value}{suffix}")
}

/// Map every threshold through `ratio` and label it with `unit`.
pub fn as_relative_unit<F>(points: &BreakpointSet, ratio: F, unit: &str) -> UnitTable
where
    F: Fn(f64) -> f64,
{
    points
        .iter()
        .map(|p| (p.name.clone(), with_unit(unit, ratio(f64::from(p.threshold)))))
        .collect()
}

pub fn as_px(points: &BreakpointSet) -> UnitTable {
    as_relative_unit(points, |px| px, "px")
}

/// Thresholds divided by `base` font size, in rem.
pub fn as_rem(base: f64, points: &BreakpointSet) -> Result<UnitTable> {
    check_base(base)?;
    Ok(as_relative_unit(points, |px| px / base, "rem"))
}

pub(crate) fn check_base(base: f64) -> Result<()> {
    if base.is_finite() && base > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidBaseFontSize(base))
    }
}
