//! Scalar and container types used by filter descriptions.
//!
//! Option values are a closed set (text or number), so they are modelled as an
//! enum. Serde handles them untagged, which lets JSON and TOML documents use
//! plain `1280`, `0.5` or `"PTS-STARTPTS"` without wrapping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A value passed to a filter: either text or a number.
///
/// Also used for filter names, which are usually text but may be numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterOptionValue {
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 text, possibly an expression such as `between(t, 10, 20)`
    Text(String),
}

impl FilterOptionValue {
    /// Try to get this value as text.
    pub fn as_text(&self) -> Option<&str> {
        if let FilterOptionValue::Text(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Try to get this value as a float (integers are widened).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FilterOptionValue::Integer(i) => Some(*i as f64),
            FilterOptionValue::Float(f) => Some(*f),
            FilterOptionValue::Text(_) => None,
        }
    }

    /// Whether this is a numeric value.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, FilterOptionValue::Text(_))
    }

    /// Whether this value counts as absent when a filter is formatted:
    /// `0`, `0.0`, `-0.0`, `NaN` and empty text.
    pub fn is_falsy(&self) -> bool {
        match self {
            FilterOptionValue::Integer(i) => *i == 0,
            FilterOptionValue::Float(v) => *v == 0.0 || v.is_nan(),
            FilterOptionValue::Text(s) => s.is_empty(),
        }
    }
}

/// Plain stringification with no escaping.
///
/// Numbers use their shortest decimal form, so `10.0` prints as `10`.
/// Negative zero prints as `0`; infinities print as `Infinity`/`-Infinity`.
impl fmt::Display for FilterOptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterOptionValue::Integer(i) => write!(f, "{}", i),
            FilterOptionValue::Float(v) if *v == 0.0 => f.write_str("0"),
            FilterOptionValue::Float(v) if v.is_infinite() => {
                f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            FilterOptionValue::Float(v) => write!(f, "{}", v),
            FilterOptionValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FilterOptionValue {
    fn from(s: &str) -> Self {
        FilterOptionValue::Text(s.to_string())
    }
}

impl From<String> for FilterOptionValue {
    fn from(s: String) -> Self {
        FilterOptionValue::Text(s)
    }
}

impl From<i64> for FilterOptionValue {
    fn from(i: i64) -> Self {
        FilterOptionValue::Integer(i)
    }
}

impl From<i32> for FilterOptionValue {
    fn from(i: i32) -> Self {
        FilterOptionValue::Integer(i64::from(i))
    }
}

impl From<u32> for FilterOptionValue {
    fn from(i: u32) -> Self {
        FilterOptionValue::Integer(i64::from(i))
    }
}

impl From<f64> for FilterOptionValue {
    fn from(f: f64) -> Self {
        FilterOptionValue::Float(f)
    }
}

/// Options attached to a single filter invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterOptions {
    /// Named options, rendered as `key=value` pairs in insertion order
    Named(IndexMap<String, FilterOptionValue>),
    /// A single unnamed option, e.g. the `PTS-STARTPTS` in `setpts=PTS-STARTPTS`
    Positional(FilterOptionValue),
}

impl FilterOptions {
    /// Number of options (a positional option counts as one).
    pub fn len(&self) -> usize {
        match self {
            FilterOptions::Named(map) => map.len(),
            FilterOptions::Positional(_) => 1,
        }
    }

    /// Whether there are no options at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the options count as absent: a falsy positional value.
    /// A mapping is never falsy, even when empty.
    pub fn is_falsy(&self) -> bool {
        match self {
            FilterOptions::Named(_) => false,
            FilterOptions::Positional(value) => value.is_falsy(),
        }
    }
}

impl From<FilterOptionValue> for FilterOptions {
    fn from(value: FilterOptionValue) -> Self {
        FilterOptions::Positional(value)
    }
}

impl From<&str> for FilterOptions {
    fn from(s: &str) -> Self {
        FilterOptions::Positional(s.into())
    }
}

impl From<String> for FilterOptions {
    fn from(s: String) -> Self {
        FilterOptions::Positional(s.into())
    }
}

impl From<i64> for FilterOptions {
    fn from(i: i64) -> Self {
        FilterOptions::Positional(i.into())
    }
}

impl From<f64> for FilterOptions {
    fn from(f: f64) -> Self {
        FilterOptions::Positional(f.into())
    }
}

impl<K, V> FromIterator<(K, V)> for FilterOptions
where
    K: Into<String>,
    V: Into<FilterOptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        FilterOptions::Named(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Either a single item or an ordered list of items.
///
/// Chains accept one label or several, and one filter or several. The list
/// form is tried first when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    /// Ordered list
    Many(Vec<T>),
    /// Single item
    One(T),
}

impl<T> OneOrMany<T> {
    /// View the items as a slice, in order.
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => std::slice::from_ref(item),
        }
    }

    /// Iterate over the items in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether there are no items (only possible with an empty list).
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    /// Append an item, promoting a single item to a list.
    pub fn push(&mut self, item: T) {
        let previous = std::mem::replace(self, OneOrMany::Many(Vec::new()));
        *self = match previous {
            OneOrMany::Many(mut items) => {
                items.push(item);
                OneOrMany::Many(items)
            }
            OneOrMany::One(first) => OneOrMany::Many(vec![first, item]),
        };
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(items: Vec<T>) -> Self {
        OneOrMany::Many(items)
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(s: &str) -> Self {
        OneOrMany::One(s.to_string())
    }
}

impl From<String> for OneOrMany<String> {
    fn from(s: String) -> Self {
        OneOrMany::One(s)
    }
}

impl From<Vec<&str>> for OneOrMany<String> {
    fn from(items: Vec<&str>) -> Self {
        OneOrMany::Many(items.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for OneOrMany<String> {
    fn from(items: [&str; N]) -> Self {
        OneOrMany::Many(items.iter().map(|s| s.to_string()).collect())
    }
}

impl<'a, T> IntoIterator for &'a OneOrMany<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_display() {
        assert_eq!(FilterOptionValue::Integer(10).to_string(), "10");
        assert_eq!(FilterOptionValue::Float(10.0).to_string(), "10");
        assert_eq!(FilterOptionValue::Float(0.5).to_string(), "0.5");
        assert_eq!(FilterOptionValue::Integer(-3).to_string(), "-3");
    }

    #[test]
    fn test_special_float_display() {
        assert_eq!(FilterOptionValue::Float(-0.0).to_string(), "0");
        assert_eq!(FilterOptionValue::Float(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(FilterOptionValue::Float(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(FilterOptionValue::Float(f64::NAN).to_string(), "NaN");
    }

    #[test]
    fn test_falsy_values() {
        assert!(FilterOptionValue::Integer(0).is_falsy());
        assert!(FilterOptionValue::Float(0.0).is_falsy());
        assert!(FilterOptionValue::Float(-0.0).is_falsy());
        assert!(FilterOptionValue::Float(f64::NAN).is_falsy());
        assert!(FilterOptionValue::from("").is_falsy());

        assert!(!FilterOptionValue::Integer(-1).is_falsy());
        assert!(!FilterOptionValue::Float(0.5).is_falsy());
        assert!(!FilterOptionValue::from("0").is_falsy());
        assert!(!FilterOptions::Named(IndexMap::new()).is_falsy());
        assert!(FilterOptions::from(0i64).is_falsy());
    }

    #[test]
    fn test_value_accessors() {
        let text = FilterOptionValue::from("PTS-STARTPTS");
        assert_eq!(text.as_text(), Some("PTS-STARTPTS"));
        assert!(!text.is_numeric());
        assert_eq!(text.as_f64(), None);

        let int = FilterOptionValue::from(720);
        assert!(int.is_numeric());
        assert_eq!(int.as_f64(), Some(720.0));
    }

    #[test]
    fn test_untagged_values() {
        let values: Vec<FilterOptionValue> =
            serde_json::from_str(r#"[1280, 0.25, "iw/2"]"#).unwrap();
        assert_eq!(values[0], FilterOptionValue::Integer(1280));
        assert_eq!(values[1], FilterOptionValue::Float(0.25));
        assert_eq!(values[2], FilterOptionValue::Text("iw/2".to_string()));
    }

    #[test]
    fn test_options_keep_insertion_order() {
        let options: FilterOptions =
            serde_json::from_str(r#"{"w": 1280, "h": 720, "flags": "lanczos"}"#).unwrap();
        match options {
            FilterOptions::Named(map) => {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                assert_eq!(keys, vec!["w", "h", "flags"]);
            }
            other => panic!("expected named options, got {:?}", other),
        }
    }

    #[test]
    fn test_positional_option() {
        let options: FilterOptions = serde_json::from_str(r#""PTS-STARTPTS""#).unwrap();
        assert_eq!(options, FilterOptions::from("PTS-STARTPTS"));
        assert_eq!(options.len(), 1);
    }

    #[test]
    fn test_one_or_many() {
        let one: OneOrMany<String> = serde_json::from_str(r#""0:v""#).unwrap();
        assert_eq!(one.as_slice(), &["0:v".to_string()]);

        let many: OneOrMany<String> = serde_json::from_str(r#"["0:v", "1:v"]"#).unwrap();
        assert_eq!(many.len(), 2);

        let mut labels: OneOrMany<String> = OneOrMany::from("a");
        labels.push("b".to_string());
        assert_eq!(labels, OneOrMany::from(["a", "b"]));
    }
}
