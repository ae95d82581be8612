//! wave-expando - dynamic records for UI element state
//!
//! An [`Expando`] is a record backed by a single JSON object. Fields can be
//! read, written and deleted by key (any string) or by attribute name (a
//! checked identifier). Reading an absent field yields null rather than an
//! error, and deleting an absent field is a no-op.
//!
//! The [`transform`] module builds new records from existing ones: full
//! clones, copies onto a target, and filtered clones.

use thiserror::Error;

pub mod expando;
pub mod transform;

pub use expando::{check_attr_name, Expando, RESERVED_NAMES};
pub use transform::{clone_expando, clone_expando_filtered, copy_expando};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandoError {
    #[error("{0:?} is not a valid attribute name; use key access")]
    NotAnAttribute(String),
    #[error("{0:?} is a reserved record method; use key access")]
    ReservedName(String),
    #[error("record must be a JSON object")]
    NotAnObject,
}
