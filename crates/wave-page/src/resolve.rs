//! Name path resolution inside a card.
//!
//! Each name resolves against the current value as a direct key, then as an
//! array index, then (if enabled) as the `name` of a nested widget found by a
//! depth-first search. The result is the concrete list of steps from the card
//! root.

use serde_json::{Map, Value};
use wave_pointer::{is_valid_index, Step};

use crate::PageOptions;

/// A resolved container that a leaf name can be read from.
#[derive(Clone, Copy)]
pub(crate) enum Slot<'a> {
    Record(&'a Map<String, Value>),
    List(&'a [Value]),
}

/// A resolved container that a leaf name can be written to.
pub(crate) enum SlotMut<'a> {
    Record(&'a mut Map<String, Value>),
    List(&'a mut Vec<Value>),
}

fn list_index(list_len: usize, key: &str) -> Option<usize> {
    if !is_valid_index(key) {
        return None;
    }
    key.parse::<usize>().ok().filter(|idx| *idx < list_len)
}

impl<'a> Slot<'a> {
    /// Resolves `name` inside this container the same way intermediate names
    /// resolve. Returns steps relative to the container.
    pub(crate) fn find(self, name: &str, options: &PageOptions) -> Option<Vec<Step>> {
        match self {
            Slot::Record(map) => step_into_record(map, name, options),
            Slot::List(list) => step_into_list(list, name, options),
        }
    }

    fn value(self, steps: &[Step]) -> Option<&'a Value> {
        let (first, rest) = steps.split_first()?;
        let child = match (self, first) {
            (Slot::Record(map), Step::Key(key)) => map.get(key)?,
            (Slot::List(list), Step::Index(idx)) => list.get(*idx)?,
            _ => return None,
        };
        wave_pointer::get(child, rest)
    }

    /// Value bound to `name`, or null when nothing resolves.
    pub(crate) fn get(self, name: &str, options: &PageOptions) -> Value {
        self.find(name, options)
            .and_then(|steps| self.value(&steps))
            .cloned()
            .unwrap_or(Value::Null)
    }

    pub(crate) fn contains(self, name: &str, options: &PageOptions) -> bool {
        self.find(name, options).is_some()
    }
}

impl SlotMut<'_> {
    fn as_slot(&self) -> Slot<'_> {
        match self {
            SlotMut::Record(map) => Slot::Record(map),
            SlotMut::List(list) => Slot::List(list),
        }
    }

    fn value_mut(&mut self, steps: &[Step]) -> Option<&mut Value> {
        let (first, rest) = steps.split_first()?;
        let child = match (self, first) {
            (SlotMut::Record(map), Step::Key(key)) => map.get_mut(key)?,
            (SlotMut::List(list), Step::Index(idx)) => list.get_mut(*idx)?,
            _ => return None,
        };
        wave_pointer::get_mut(child, rest)
    }

    /// Binds `name`. A binding that resolves (directly or by name) is replaced
    /// where it lives; otherwise a record gains a new key. Lists only accept
    /// names that resolve.
    pub(crate) fn set(&mut self, name: &str, value: Value, options: &PageOptions) -> bool {
        let found = self.as_slot().find(name, options);
        match found {
            Some(steps) => match self.value_mut(&steps) {
                Some(target) => {
                    *target = value;
                    true
                }
                None => false,
            },
            None => match self {
                SlotMut::Record(map) => {
                    map.insert(name.to_owned(), value);
                    true
                }
                SlotMut::List(_) => false,
            },
        }
    }

    /// Unbinds whatever `name` resolves to, at its concrete location.
    ///
    /// Removing a list element shifts the elements after it down by one.
    pub(crate) fn remove(&mut self, name: &str, options: &PageOptions) -> Option<Value> {
        let steps = self.as_slot().find(name, options)?;
        let (last, parent) = steps.split_last()?;
        if parent.is_empty() {
            return take(self, last);
        }
        match self.value_mut(parent)? {
            Value::Object(map) => take(&mut SlotMut::Record(map), last),
            Value::Array(list) => take(&mut SlotMut::List(list), last),
            _ => None,
        }
    }
}

fn take(container: &mut SlotMut<'_>, step: &Step) -> Option<Value> {
    match (container, step) {
        (SlotMut::Record(map), Step::Key(key)) => map.remove(key),
        (SlotMut::List(list), Step::Index(idx)) if *idx < list.len() => Some(list.remove(*idx)),
        _ => None,
    }
}

/// Resolves `names` below `card`. On failure returns the index of the first
/// name that could not be resolved.
pub(crate) fn locate(
    card: &Map<String, Value>,
    names: &[String],
    options: &PageOptions,
) -> Result<Vec<Step>, usize> {
    let mut steps = Vec::new();
    for (i, name) in names.iter().enumerate() {
        let found = if steps.is_empty() {
            step_into_record(card, name, options)
        } else {
            value_in(card, &steps).and_then(|current| step_into(current, name, options))
        };
        steps.extend(found.ok_or(i)?);
    }
    Ok(steps)
}

pub(crate) fn slot<'a>(card: &'a Map<String, Value>, steps: &[Step]) -> Option<Slot<'a>> {
    if steps.is_empty() {
        return Some(Slot::Record(card));
    }
    match value_in(card, steps)? {
        Value::Object(map) => Some(Slot::Record(map)),
        Value::Array(list) => Some(Slot::List(list)),
        _ => None,
    }
}

pub(crate) fn slot_mut<'a>(card: &'a mut Map<String, Value>, steps: &[Step]) -> Option<SlotMut<'a>> {
    let Some((first, rest)) = steps.split_first() else {
        return Some(SlotMut::Record(card));
    };
    let Step::Key(key) = first else {
        return None;
    };
    match wave_pointer::get_mut(card.get_mut(key)?, rest)? {
        Value::Object(map) => Some(SlotMut::Record(map)),
        Value::Array(list) => Some(SlotMut::List(list)),
        _ => None,
    }
}

fn value_in<'a>(card: &'a Map<String, Value>, steps: &[Step]) -> Option<&'a Value> {
    let (first, rest) = steps.split_first()?;
    let Step::Key(key) = first else {
        return None;
    };
    wave_pointer::get(card.get(key)?, rest)
}

fn step_into(current: &Value, name: &str, options: &PageOptions) -> Option<Vec<Step>> {
    match current {
        Value::Object(map) => step_into_record(map, name, options),
        Value::Array(list) => step_into_list(list, name, options),
        _ => None,
    }
}

fn step_into_list(list: &[Value], name: &str, options: &PageOptions) -> Option<Vec<Step>> {
    if let Some(idx) = list_index(list.len(), name) {
        return Some(vec![Step::Index(idx)]);
    }
    if options.resolve_by_name {
        find_named_in_list(list, name, options.max_search_depth)
    } else {
        None
    }
}

fn step_into_record(
    map: &Map<String, Value>,
    name: &str,
    options: &PageOptions,
) -> Option<Vec<Step>> {
    if map.contains_key(name) {
        return Some(vec![Step::Key(name.to_owned())]);
    }
    if options.resolve_by_name {
        find_named_in_record(map, name, options.max_search_depth)
    } else {
        None
    }
}

fn is_named(value: &Value, name: &str) -> bool {
    value.get("name").and_then(Value::as_str) == Some(name)
}

fn find_named(value: &Value, name: &str, depth: usize) -> Option<Vec<Step>> {
    match value {
        Value::Object(map) => find_named_in_record(map, name, depth),
        Value::Array(list) => find_named_in_list(list, name, depth),
        _ => None,
    }
}

fn find_named_in_list(list: &[Value], name: &str, depth: usize) -> Option<Vec<Step>> {
    if depth == 0 {
        return None;
    }
    for (idx, child) in list.iter().enumerate() {
        if is_named(child, name) {
            return Some(vec![Step::Index(idx)]);
        }
        if let Some(mut rest) = find_named(child, name, depth - 1) {
            rest.insert(0, Step::Index(idx));
            return Some(rest);
        }
    }
    None
}

fn find_named_in_record(map: &Map<String, Value>, name: &str, depth: usize) -> Option<Vec<Step>> {
    if depth == 0 {
        return None;
    }
    for (key, child) in map {
        if is_named(child, name) {
            return Some(vec![Step::Key(key.clone())]);
        }
        if let Some(mut rest) = find_named(child, name, depth - 1) {
            rest.insert(0, Step::Key(key.clone()));
            return Some(rest);
        }
    }
    None
}
