//! Shared fixtures: minimal widget builders and in-memory transports.
#![allow(dead_code)]

use serde_json::{json, Value};
use wave_page::{DiffBatch, Expando, Transport, TransportError};

pub fn expando(value: Value) -> Expando {
    Expando::try_from(value).expect("card fixture must be an object")
}

pub fn path(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub mod ui {
    use super::*;

    pub fn form_card(box_: &str, items: Vec<Value>) -> Expando {
        expando(json!({"view": "form", "box": box_, "items": items}))
    }

    pub fn header_card(box_: &str, title: &str, subtitle: &str, secondary_items: Vec<Value>) -> Expando {
        expando(json!({
            "view": "header",
            "box": box_,
            "title": title,
            "subtitle": subtitle,
            "secondary_items": secondary_items
        }))
    }

    pub fn tab_card(box_: &str, items: Vec<Value>) -> Expando {
        expando(json!({"view": "tab", "box": box_, "items": items}))
    }

    pub fn text_xl(name: &str, content: &str) -> Value {
        json!({"text_xl": {"name": name, "content": content}})
    }

    pub fn inline(items: Vec<Value>) -> Value {
        json!({"inline": {"items": items}})
    }

    pub fn buttons(items: Vec<Value>) -> Value {
        json!({"buttons": {"items": items}})
    }

    pub fn button(name: &str, label: &str, primary: bool) -> Value {
        json!({"button": {"name": name, "label": label, "primary": primary}})
    }

    pub fn tab(name: &str, label: &str) -> Value {
        json!({"tab": {"name": name, "label": label}})
    }
}

/// Keeps every delivered batch.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub delivered: Vec<(String, DiffBatch)>,
}

impl Transport for RecordingTransport {
    fn deliver(&mut self, url: &str, batch: DiffBatch) -> Result<(), TransportError> {
        self.delivered.push((url.to_owned(), batch));
        Ok(())
    }
}

/// Rejects every batch, counting attempts.
#[derive(Debug, Default)]
pub struct ClosedTransport {
    pub attempts: usize,
}

impl Transport for ClosedTransport {
    fn deliver(&mut self, _url: &str, _batch: DiffBatch) -> Result<(), TransportError> {
        self.attempts += 1;
        Err(TransportError::Closed)
    }
}

/// Routes `tracing` output to the test harness. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
