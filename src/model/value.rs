//! Universal style value type.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};

use super::PropertyMap;

/// A raw style value as supplied by the caller.
///
/// - Scalars: Int, Float, String
/// - Containers: List (positional, aligned to a breakpoint set), Map
/// - `Gap`: "no explicit value here, inherit from the previous breakpoint"
///
/// `Gap` is its own variant, so no legitimate string can ever collide with it.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Gap,
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(PropertyMap),
}

/// The gap sentinel. Put it in a sequence to skip a breakpoint.
pub const GAP: Value = Value::Gap;

/// Short alias for [`GAP`].
pub const __: Value = GAP;

// ============================================================================
// Type checking
// ============================================================================

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Gap => "GAP",
            Value::Int(_) => "INTEGER",
            Value::Float(_) => "FLOAT",
            Value::String(_) => "STRING",
            Value::List(_) => "LIST",
            Value::Map(_) => "MAP",
        }
    }

    pub fn is_gap(&self) -> bool { matches!(self, Value::Gap) }
    pub fn is_list(&self) -> bool { matches!(self, Value::List(_)) }
    pub fn is_map(&self) -> bool { matches!(self, Value::Map(_)) }

    /// True for values that can be written out as a single declaration value.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_) | Value::String(_))
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l.as_slice()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&PropertyMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Render a scalar as a CSS declaration value. Containers and gaps have no
    /// declaration form.
    pub fn to_css(&self) -> Option<String> {
        match self {
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::String(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Build a list value.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a map value from ordered pairs.
    pub fn map<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| -> (String, Value) { (k.into(), v.into()) })
                .collect(),
        )
    }

    /// Parse JSON, keeping object key order. `null` becomes [`Value::Gap`].
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<i32> for Value { fn from(v: i32) -> Self { Value::Int(v as i64) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::Int(v) } }
impl From<u32> for Value { fn from(v: u32) -> Self { Value::Int(v as i64) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Float(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::String(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::String(v.to_owned()) } }
impl From<PropertyMap> for Value { fn from(v: PropertyMap) -> Self { Value::Map(v) } }
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Gap) }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Gap => write!(f, "__"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "\"{}\"", s.replace('"', "\\\"")),
            Value::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

// ============================================================================
// Serde (plain JSON shape, gap <-> null)
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Gap => serializer.serialize_unit(),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(l) => {
                let mut seq = serializer.serialize_seq(Some(l.len()))?;
                for v in l {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Value::Map(m) => {
                let mut map = serializer.serialize_map(Some(m.len()))?;
                for (k, v) in m.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, string, null, array or object")
    }

    fn visit_unit<E: de::Error>(self) -> std::result::Result<Value, E> { Ok(Value::Gap) }
    fn visit_none<E: de::Error>(self) -> std::result::Result<Value, E> { Ok(Value::Gap) }
    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<Value, E> { Ok(Value::Int(v)) }
    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<Value, E> { Ok(Value::Float(v)) }
    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<Value, E> { Ok(Value::from(v)) }
    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<Value, E> { Ok(Value::String(v)) }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<Value, E> {
        i64::try_from(v)
            .map(Value::Int)
            .map_err(|_| E::custom(format!("integer {v} out of range")))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(v) = seq.next_element()? {
            items.push(v);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Value, A::Error> {
        let mut map = PropertyMap::new();
        while let Some((k, v)) = access.next_entry::<String, Value>()? {
            map.insert(k, v);
        }
        Ok(Value::Map(map))
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from("1px"), Value::String("1px".into()));
        assert_eq!(Value::from(42), Value::Int(42));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from(None::<i64>), Value::Gap);
    }

    #[test]
    fn test_gap_never_equals_a_string() {
        assert_ne!(GAP, Value::from("%GAP%"));
        assert_eq!(__, GAP);
    }

    #[test]
    fn test_json_keeps_key_order_and_maps_null_to_gap() {
        let v = Value::from_json(r#"{"z": [1, null], "a": "2px"}"#).unwrap();
        let m = v.as_map().unwrap();
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["z", "a"]);
        assert_eq!(m.get("z"), Some(&Value::list([Value::Int(1), GAP])));
        assert_eq!(v.to_json().unwrap(), r#"{"z":[1,null],"a":"2px"}"#);
    }

    #[test]
    fn test_json_rejects_booleans() {
        assert!(Value::from_json("true").is_err());
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Value::from(2.0).to_css().as_deref(), Some("2"));
        assert_eq!(Value::from("auto").to_css().as_deref(), Some("auto"));
        assert_eq!(GAP.to_css(), None);
    }
}
