//! Concrete storage locations.
//!
//! A name path says how the owner addressed a field; a list of [`Step`]s
//! says where that field actually lives inside a JSON value.

use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Key(String),
    Index(usize),
}

/// Get a value by concrete location.
pub fn get<'a>(value: &'a Value, steps: &[Step]) -> Option<&'a Value> {
    let mut cur = value;
    for step in steps {
        cur = match (step, cur) {
            (Step::Key(key), Value::Object(map)) => map.get(key)?,
            (Step::Index(idx), Value::Array(arr)) => arr.get(*idx)?,
            _ => return None,
        };
    }
    Some(cur)
}

/// Get a mutable reference to a value by concrete location.
pub fn get_mut<'a>(value: &'a mut Value, steps: &[Step]) -> Option<&'a mut Value> {
    let mut cur = value;
    for step in steps {
        cur = match (step, cur) {
            (Step::Key(key), Value::Object(map)) => map.get_mut(key)?,
            (Step::Index(idx), Value::Array(arr)) => arr.get_mut(*idx)?,
            _ => return None,
        };
    }
    Some(cur)
}
