//! JSON codec for page ops.
//!
//! An op is encoded as `{"path": [name, ...], "kind": "set", "value": v}` or
//! `{"path": [name, ...], "kind": "delete"}`. A batch is a JSON array of ops.

use serde_json::{json, Value};
use thiserror::Error;

use crate::op::{DiffBatch, Op};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
}

fn encode_path(path: &[String]) -> Value {
    Value::Array(path.iter().cloned().map(Value::String).collect())
}

fn decode_path(v: Option<&Value>) -> Result<Vec<String>, CodecError> {
    let arr = v
        .and_then(Value::as_array)
        .ok_or_else(|| CodecError::InvalidOp("path must be an array".into()))?;
    arr.iter()
        .map(|name| {
            name.as_str()
                .map(str::to_owned)
                .ok_or_else(|| CodecError::InvalidOp("path names must be strings".into()))
        })
        .collect()
}

/// Serialize an [`Op`] to its JSON form.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Set { path, value } => json!({
            "path": encode_path(path),
            "kind": "set",
            "value": value
        }),
        Op::Delete { path } => json!({
            "path": encode_path(path),
            "kind": "delete"
        }),
    }
}

/// Deserialize an [`Op`] from its JSON form.
pub fn from_json(v: &Value) -> Result<Op, CodecError> {
    let obj = v
        .as_object()
        .ok_or_else(|| CodecError::InvalidOp("op must be an object".into()))?;
    let path = decode_path(obj.get("path"))?;
    match obj.get("kind").and_then(Value::as_str) {
        Some("set") => {
            let value = obj
                .get("value")
                .cloned()
                .ok_or_else(|| CodecError::InvalidOp("set requires a value".into()))?;
            Ok(Op::Set { path, value })
        }
        Some("delete") => Ok(Op::Delete { path }),
        Some(other) => Err(CodecError::InvalidOp(format!("unknown kind: {other}"))),
        None => Err(CodecError::InvalidOp("kind must be a string".into())),
    }
}

pub fn batch_to_json(batch: &DiffBatch) -> Value {
    Value::Array(batch.iter().map(to_json).collect())
}

pub fn batch_from_json(v: &Value) -> Result<DiffBatch, CodecError> {
    let arr = v
        .as_array()
        .ok_or_else(|| CodecError::InvalidOp("batch must be an array".into()))?;
    arr.iter()
        .map(from_json)
        .collect::<Result<Vec<_>, _>>()
        .map(DiffBatch::from)
}
