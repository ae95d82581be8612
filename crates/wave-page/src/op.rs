//! Recorded page mutations.

use serde_json::Value;
use wave_pointer::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Set,
    Delete,
}

impl OpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Set => "set",
            OpKind::Delete => "delete",
        }
    }
}

/// A single mutation at a name path from the page root.
///
/// The path is the one the owner addressed (`["wizard", "back", "label"]`),
/// not the location the field happens to be stored at. An empty path means
/// the whole page.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Set { path: Path, value: Value },
    Delete { path: Path },
}

impl Op {
    pub fn kind(&self) -> OpKind {
        match self {
            Op::Set { .. } => OpKind::Set,
            Op::Delete { .. } => OpKind::Delete,
        }
    }

    pub fn path(&self) -> &[String] {
        match self {
            Op::Set { path, .. } | Op::Delete { path } => path,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Op::Set { value, .. } => Some(value),
            Op::Delete { .. } => None,
        }
    }
}

/// An ordered sequence of ops drained from a page in one flush.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffBatch {
    ops: Vec<Op>,
}

impl DiffBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.ops.iter()
    }

    pub fn into_ops(self) -> Vec<Op> {
        self.ops
    }
}

impl From<Vec<Op>> for DiffBatch {
    fn from(ops: Vec<Op>) -> Self {
        Self { ops }
    }
}

impl IntoIterator for DiffBatch {
    type Item = Op;
    type IntoIter = std::vec::IntoIter<Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a DiffBatch {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
