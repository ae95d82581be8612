//! The seam between a page and whatever delivers its batches to a renderer.

use thiserror::Error;

use crate::op::DiffBatch;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection closed")]
    Closed,
    #[error("delivery failed: {0}")]
    Delivery(String),
}

/// Delivers flushed batches to a remote renderer.
///
/// Wire encoding (see [`crate::codec`]), connection handling and any retry
/// policy belong to the implementor. [`crate::Page::save`] calls `deliver`
/// once per non-empty batch and never retries.
pub trait Transport {
    fn deliver(&mut self, url: &str, batch: DiffBatch) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn deliver(&mut self, url: &str, batch: DiffBatch) -> Result<(), TransportError> {
        (**self).deliver(url, batch)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn deliver(&mut self, url: &str, batch: DiffBatch) -> Result<(), TransportError> {
        (**self).deliver(url, batch)
    }
}
