//! Page state with mutation tracking.
//!
//! A [`Page`] holds named cards. Each card is an [`Expando`] whose fields may
//! nest further widgets. Fields are addressed by a path of names: the card
//! name, then widget names (resolved as direct keys, array indices, or the
//! `name` of a nested widget), then the field. Every write made through the
//! page is recorded as an [`Op`] in the page's [`ChangeTracker`], and
//! [`Page::save`] hands the ordered [`DiffBatch`] to a [`Transport`].
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use wave_expando::Expando;
//! use wave_page::{Op, Page};
//!
//! let mut page = Page::new("/");
//! let wizard = Expando::try_from(json!({
//!     "view": "form",
//!     "items": [{"text_xl": {"name": "text_name", "content": "Wizard"}}]
//! })).unwrap();
//! page.add("wizard", wizard);
//! page.flush();
//!
//! page.card("wizard").attr("text_name")?.set_attr("content", "foo1")?;
//!
//! let batch = page.flush();
//! assert_eq!(batch.ops(), &[Op::Set {
//!     path: vec!["wizard".into(), "text_name".into(), "content".into()],
//!     value: json!("foo1"),
//! }]);
//! # Ok::<(), wave_page::PageError>(())
//! ```

use thiserror::Error;
use wave_expando::ExpandoError;
use wave_pointer::{format_dotted, Path, PointerError};

pub mod codec;
pub mod handle;
pub mod op;
pub mod page;
mod resolve;
pub mod tracker;
pub mod transport;

pub use codec::CodecError;
pub use handle::Ref;
pub use op::{DiffBatch, Op, OpKind};
pub use page::{Page, PageOptions};
pub use tracker::{ChangeTracker, TrackerState};
pub use transport::{Transport, TransportError};
pub use wave_expando::Expando;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PageError {
    /// An intermediate name did not resolve, or resolved to a scalar.
    #[error("path not found: {}", format_dotted(.path))]
    PathNotFound { path: Path },
    #[error("the page root cannot be written or removed as a field")]
    RootWrite,
    #[error(transparent)]
    Expando(#[from] ExpandoError),
    #[error(transparent)]
    Pointer(#[from] PointerError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}
