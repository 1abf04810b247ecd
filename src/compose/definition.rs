//! StyleDefinition — the composed output handed back to callers.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One entry of a composed style object.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleEntry {
    /// `property: value`
    Declaration(String),
    /// A media query or nested selector block.
    Block(StyleDefinition),
}

/// An ordered style object: declarations, nested selectors and media blocks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDefinition {
    entries: Vec<(String, StyleEntry)>,
}

impl StyleDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, key: impl Into<String>, entry: StyleEntry) {
        self.entries.push((key.into(), entry));
    }

    pub fn get(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    /// The declaration value for `property`, if it is one.
    pub fn declaration(&self, property: &str) -> Option<&str> {
        match self.get(property) {
            Some(StyleEntry::Declaration(v)) => Some(v.as_str()),
            _ => None,
        }
    }

    /// The nested block under `key`, if it is one.
    pub fn block(&self, key: &str) -> Option<&StyleDefinition> {
        match self.get(key) {
            Some(StyleEntry::Block(b)) => Some(b),
            _ => None,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Render as CSS text under `selector`.
    ///
    /// Nested keys containing `&` substitute the parent selector; other nested
    /// keys are descendants. `@` keys wrap their contents in an at-rule.
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        self.write_css(selector, &mut out)
            .expect("writing into a String does not fail");
        out
    }

    /// [`to_css`](Self::to_css) into any writer, propagating its errors.
    pub fn write_css<W: fmt::Write>(&self, selector: &str, out: &mut W) -> fmt::Result {
        self.write_rule(selector, 0, out)
    }

    fn write_rule<W: fmt::Write>(&self, selector: &str, depth: usize, out: &mut W) -> fmt::Result {
        let indent = "  ".repeat(depth);
        let declarations: Vec<(&str, &str)> = self
            .iter()
            .filter_map(|(k, e)| match e {
                StyleEntry::Declaration(v) => Some((k, v.as_str())),
                StyleEntry::Block(_) => None,
            })
            .collect();

        if !declarations.is_empty() {
            writeln!(out, "{indent}{selector} {{")?;
            for (property, value) in declarations {
                writeln!(out, "{indent}  {property}: {value};")?;
            }
            writeln!(out, "{indent}}}")?;
        }

        for (key, entry) in self.iter() {
            let StyleEntry::Block(block) = entry else { continue };
            if key.starts_with('@') {
                writeln!(out, "{indent}{key} {{")?;
                block.write_rule(selector, depth + 1, out)?;
                writeln!(out, "{indent}}}")?;
            } else if key.contains('&') {
                block.write_rule(&key.replace('&', selector), depth, out)?;
            } else {
                block.write_rule(&format!("{selector} {key}"), depth, out)?;
            }
        }
        Ok(())
    }
}

impl Serialize for StyleDefinition {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, entry) in self.iter() {
            match entry {
                StyleEntry::Declaration(v) => map.serialize_entry(key, v)?,
                StyleEntry::Block(b) => map.serialize_entry(key, b)?,
            }
        }
        map.end()
    }
}
