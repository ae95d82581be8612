use std::ops::Index;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ExpandoError;

static NULL: Value = Value::Null;

/// Method names of [`Expando`] itself.
///
/// Attribute syntax refuses these names so a field can never be confused with
/// a record operation. Fields with these names are still reachable through
/// key syntax.
pub const RESERVED_NAMES: &[&str] = &[
    "get",
    "set",
    "remove",
    "contains",
    "keys",
    "len",
    "is_empty",
    "iter",
    "attr",
    "set_attr",
    "del_attr",
    "as_map",
    "as_map_mut",
    "into_map",
    "into_value",
];

/// A record whose fields live in one keyed mapping and can be read, written
/// and deleted either by key or by attribute name.
///
/// Key syntax accepts every string. Attribute syntax is a checked alias of key
/// syntax for identifier names (see [`check_attr_name`]). Both views always go
/// through the same backing map.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use wave_expando::Expando;
///
/// let mut e = Expando::new();
/// assert!(e.get("answer").is_null());
/// assert!(!e.contains("answer"));
///
/// e.set_attr("answer", 42).unwrap();
/// assert_eq!(e["answer"], json!(42));
/// assert!(e.contains("answer"));
///
/// e.set("#hash", "spam");
/// assert_eq!(e.get("#hash"), &json!("spam"));
/// assert!(e.attr("#hash").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Expando {
    map: Map<String, Value>,
}

/// Check that `name` may be used with attribute syntax.
///
/// # Errors
///
/// - [`ExpandoError::NotAnAttribute`] if `name` is not an identifier
/// - [`ExpandoError::ReservedName`] if `name` is one of [`RESERVED_NAMES`]
pub fn check_attr_name(name: &str) -> Result<(), ExpandoError> {
    if !wave_pointer::is_identifier(name) {
        return Err(ExpandoError::NotAnAttribute(name.to_owned()));
    }
    if RESERVED_NAMES.contains(&name) {
        return Err(ExpandoError::ReservedName(name.to_owned()));
    }
    Ok(())
}

impl Expando {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bound value, or null when `key` is absent.
    pub fn get(&self, key: &str) -> &Value {
        self.map.get(key).unwrap_or(&NULL)
    }

    /// Binds `key` to `value`, returning the previous binding.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.map.insert(key.into(), value.into())
    }

    /// Removes the binding for `key`. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.map.remove(key)
    }

    /// True iff `key` is bound, including bindings to null.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    pub fn attr(&self, name: &str) -> Result<&Value, ExpandoError> {
        check_attr_name(name)?;
        Ok(self.get(name))
    }

    pub fn set_attr(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ExpandoError> {
        check_attr_name(name)?;
        Ok(self.set(name, value))
    }

    pub fn del_attr(&mut self, name: &str) -> Result<Option<Value>, ExpandoError> {
        check_attr_name(name)?;
        Ok(self.remove(name))
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.map.iter()
    }

    /// The backing map. Writes through [`Expando::as_map_mut`] are visible
    /// through the record and vice versa.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.map
    }

    pub fn as_map_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.map
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.map
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.map)
    }
}

impl Index<&str> for Expando {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key)
    }
}

impl From<Map<String, Value>> for Expando {
    fn from(map: Map<String, Value>) -> Self {
        Self { map }
    }
}

impl TryFrom<Value> for Expando {
    type Error = ExpandoError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self { map }),
            _ => Err(ExpandoError::NotAnObject),
        }
    }
}

impl From<Expando> for Value {
    fn from(e: Expando) -> Self {
        e.into_value()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Expando {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
