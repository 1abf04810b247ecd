//! Breakpoints — named viewport thresholds and the built-in tables.

use std::fmt;
use std::sync::LazyLock;

use hashbrown::HashMap;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{Error, Result};

/// A single named threshold, in pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Breakpoint {
    pub name: String,
    pub threshold: u32,
}

/// An ordered, validated, immutable set of breakpoints.
///
/// Declaration order defines the positional index used by value sequences.
/// Names are unique and thresholds strictly increase; both are checked once in
/// [`BreakpointSet::new`] and there is no way to mutate the set afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointSet {
    points: SmallVec<[Breakpoint; 16]>,
    index: HashMap<String, usize>,
}

impl BreakpointSet {
    /// Build a set from ordered `(name, threshold)` pairs.
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        let mut points: SmallVec<[Breakpoint; 16]> = SmallVec::new();
        let mut index = HashMap::new();

        for (name, threshold) in pairs {
            let name = name.into();
            if threshold == 0 {
                return Err(Error::InvalidThreshold { name });
            }
            if index.contains_key(&name) {
                return Err(Error::DuplicateBreakpoint { name });
            }
            if let Some(prev) = points.last() {
                if threshold <= prev.threshold {
                    return Err(Error::NonIncreasingThreshold {
                        name,
                        threshold,
                        previous: prev.threshold,
                    });
                }
            }
            index.insert(name.clone(), points.len());
            points.push(Breakpoint { name, threshold });
        }

        if points.is_empty() {
            return Err(Error::EmptyBreakpointSet);
        }
        Ok(Self { points, index })
    }

    // Constant tables are checked by tests, not at runtime.
    fn from_table(table: &[(&str, u32)]) -> Self {
        let points: SmallVec<[Breakpoint; 16]> = table
            .iter()
            .map(|(name, threshold)| Breakpoint { name: (*name).to_owned(), threshold: *threshold })
            .collect();
        let index = points.iter().enumerate().map(|(i, p)| (p.name.clone(), i)).collect();
        Self { points, index }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: an empty set is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.points.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|p| p.name.as_str())
    }

    pub fn thresholds(&self) -> impl Iterator<Item = u32> + '_ {
        self.points.iter().map(|p| p.threshold)
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.index_of(name).map(|i| self.points[i].threshold)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }
}

// ============================================================================
// Serde (JSON object, declaration order preserved)
// ============================================================================

impl Serialize for BreakpointSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for p in self.iter() {
            map.serialize_entry(&p.name, &p.threshold)?;
        }
        map.end()
    }
}

struct BreakpointSetVisitor;

impl<'de> Visitor<'de> for BreakpointSetVisitor {
    type Value = BreakpointSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of breakpoint names to pixel thresholds")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<BreakpointSet, A::Error> {
        let mut pairs: Vec<(String, u32)> = Vec::new();
        while let Some(entry) = access.next_entry::<String, u32>()? {
            pairs.push(entry);
        }
        BreakpointSet::new(pairs).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for BreakpointSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(BreakpointSetVisitor)
    }
}

// ============================================================================
// Built-in tables
// ============================================================================

pub const HORIZONTAL_BREAKPOINTS: &[(&str, u32)] = &[
    ("T0", 320),
    ("T1", 480),
    ("S0", 600),
    ("S1", 736),
    ("S2", 864),
    ("S3", 900),
    ("M0", 976),
    ("M1", 1088),
    ("M2", 1200),
    ("M3", 1300),
    ("L0", 1800),
    ("L1", 2048),
    ("L2", 2560),
    ("L3", 4000),
];

pub const VERTICAL_BREAKPOINTS: &[(&str, u32)] = &[
    ("H0", 160),
    ("H1", 320),
    ("H2", 480),
    ("H3", 640),
    ("H4", 800),
    ("H5", 960),
    ("H6", 1120),
    ("H7", 1280),
    ("H8", 1440),
];

pub const LEGACY_BREAKPOINTS: &[(&str, u32)] = &[
    ("XT", 320),
    ("T", 480),
    ("XXXS", 600),
    ("XXS", 736),
    ("XS", 864),
    ("S", 900),
    ("XXM", 1088),
    ("XM", 1200),
    ("M", 1300),
    ("L", 1800),
    ("XL", 2048),
    ("XXL", 2560),
    ("XXXL", 4000),
];

/// 14-point horizontal table.
pub static HORIZONTAL: LazyLock<BreakpointSet> =
    LazyLock::new(|| BreakpointSet::from_table(HORIZONTAL_BREAKPOINTS));

/// 9-point vertical table.
pub static VERTICAL: LazyLock<BreakpointSet> =
    LazyLock::new(|| BreakpointSet::from_table(VERTICAL_BREAKPOINTS));

/// 13-point legacy table.
pub static LEGACY: LazyLock<BreakpointSet> =
    LazyLock::new(|| BreakpointSet::from_table(LEGACY_BREAKPOINTS));
