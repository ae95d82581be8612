//! Name paths for page addressing.
//!
//! A page is addressed by a path of names from the page root: the card name,
//! then the names of nested widgets, then the field. Names are arbitrary
//! strings; `#hash` or `a/b` are as valid as `text_name`. This crate formats
//! and parses such paths as [RFC 6901](https://tools.ietf.org/html/rfc6901)
//! pointers and resolves concrete storage locations inside JSON values.
//!
//! # Example
//!
//! ```
//! use wave_pointer::{format_pointer, parse_pointer, get, Step};
//!
//! let path = parse_pointer("/nav/#hash/label").unwrap();
//! assert_eq!(path, vec!["nav", "#hash", "label"]);
//! assert_eq!(format_pointer(&path), "/nav/#hash/label");
//!
//! let doc = serde_json::json!({"items": [{"label": "Spam"}]});
//! let steps = [Step::Key("items".into()), Step::Index(0), Step::Key("label".into())];
//! assert_eq!(get(&doc, &steps), Some(&serde_json::json!("Spam")));
//! ```

use thiserror::Error;

pub mod step;
pub mod util;
pub mod validate;

pub use step::{get, get_mut, Step};
pub use util::{
    escape_component, format_dotted, format_pointer, is_identifier, is_valid_index, parse_pointer,
    unescape_component,
};
pub use validate::{validate_path, validate_pointer};

/// A path of names from the page root.
pub type Path = Vec<String>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PointerError {
    #[error("pointer must be empty or start with '/'")]
    PointerInvalid,
    #[error("pointer too long")]
    PointerTooLong,
    #[error("path too long")]
    PathTooLong,
}
