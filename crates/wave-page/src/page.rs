use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use wave_expando::Expando;
use wave_pointer::{parse_pointer, validate_path};

use crate::handle::Ref;
use crate::op::{DiffBatch, Op};
use crate::resolve::{locate, slot, slot_mut};
use crate::tracker::{ChangeTracker, TrackerState};
use crate::transport::Transport;
use crate::PageError;

/// Options for name resolution on a page.
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Resolve names that are not direct keys by searching nested widgets
    /// for a matching `name` field.
    pub resolve_by_name: bool,
    /// How many levels below the current record the by-name search descends.
    pub max_search_depth: usize,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            resolve_by_name: true,
            max_search_depth: 64,
        }
    }
}

/// One screen's state: named cards plus the ops not yet flushed.
///
/// All writes go through the page (directly or via [`Ref`]), so every
/// mutation is captured by the page's [`ChangeTracker`]. A page is owned by a
/// single writer; it does no locking of its own.
#[derive(Debug)]
pub struct Page {
    url: String,
    cards: IndexMap<String, Expando>,
    tracker: ChangeTracker,
    options: PageOptions,
}

fn not_found(path: &[String]) -> PageError {
    PageError::PathNotFound {
        path: path.to_vec(),
    }
}

impl Page {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_options(url, PageOptions::default())
    }

    pub fn with_options(url: impl Into<String>, options: PageOptions) -> Self {
        Self {
            url: url.into(),
            cards: IndexMap::new(),
            tracker: ChangeTracker::new(),
            options,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.cards.keys()
    }

    /// Read-only view of a card.
    pub fn view(&self, name: &str) -> Option<&Expando> {
        self.cards.get(name)
    }

    /// Binds a card, replacing any card of the same name, and returns a
    /// handle to it.
    pub fn add(&mut self, name: impl Into<String>, card: impl Into<Expando>) -> Ref<'_> {
        let name = name.into();
        let card = card.into();
        self.tracker.record(Op::Set {
            path: vec![name.clone()],
            value: card.clone().into_value(),
        });
        self.cards.insert(name.clone(), card);
        Ref::new(self, vec![name])
    }

    /// Unbinds a card. Returns `false` (and records nothing) if it was absent.
    pub fn remove(&mut self, name: &str) -> bool {
        if self.cards.shift_remove(name).is_none() {
            return false;
        }
        self.tracker.record(Op::Delete {
            path: vec![name.to_owned()],
        });
        true
    }

    /// Removes every card. Recorded as a delete of the page root.
    pub fn drop_cards(&mut self) {
        self.cards.clear();
        self.tracker.record(Op::Delete { path: Vec::new() });
    }

    /// Handle to a card by name. The card does not need to exist yet; paths
    /// are resolved when the handle is used.
    pub fn card(&mut self, name: impl Into<String>) -> Ref<'_> {
        Ref::new(self, vec![name.into()])
    }

    /// Handle for a pointer such as `/nav/#hash`.
    pub fn pointer(&mut self, pointer: &str) -> Result<Ref<'_>, PageError> {
        let path = parse_pointer(pointer)?;
        validate_path(&path)?;
        Ok(Ref::new(self, path))
    }

    /// Reads the value at `path`. Every name after the card, the last one
    /// included, resolves as a direct key, a list index, or a widget name.
    /// Absent leaves read as null; unresolvable intermediates are
    /// [`PageError::PathNotFound`].
    pub fn get_at(&self, path: &[String]) -> Result<Value, PageError> {
        match path {
            [] => Ok(Value::Object(
                self.cards
                    .iter()
                    .map(|(name, card)| (name.clone(), card.clone().into_value()))
                    .collect::<Map<String, Value>>(),
            )),
            [name] => Ok(self
                .cards
                .get(name)
                .map(|card| card.clone().into_value())
                .unwrap_or(Value::Null)),
            [name, inner @ .., leaf] => {
                let card = self.cards.get(name).ok_or_else(|| not_found(&path[..1]))?;
                let steps = locate(card.as_map(), inner, &self.options)
                    .map_err(|i| not_found(&path[..i + 2]))?;
                let slot = slot(card.as_map(), &steps)
                    .ok_or_else(|| not_found(&path[..path.len() - 1]))?;
                Ok(slot.get(leaf, &self.options))
            }
        }
    }

    pub fn contains_at(&self, path: &[String]) -> Result<bool, PageError> {
        match path {
            [] => Ok(true),
            [name] => Ok(self.cards.contains_key(name)),
            [name, inner @ .., leaf] => {
                let card = self.cards.get(name).ok_or_else(|| not_found(&path[..1]))?;
                let steps = locate(card.as_map(), inner, &self.options)
                    .map_err(|i| not_found(&path[..i + 2]))?;
                let slot = slot(card.as_map(), &steps)
                    .ok_or_else(|| not_found(&path[..path.len() - 1]))?;
                Ok(slot.contains(leaf, &self.options))
            }
        }
    }

    /// Writes `value` at `path` and records a set op.
    ///
    /// A one-name path binds a whole card, so `value` must be an object. The
    /// write is resolved and applied before the op is recorded; a failed
    /// write records nothing.
    pub fn set_at(&mut self, path: &[String], value: impl Into<Value>) -> Result<(), PageError> {
        let value = value.into();
        match path {
            [] => return Err(PageError::RootWrite),
            [name] => {
                let card = Expando::try_from(value.clone())?;
                self.cards.insert(name.clone(), card);
            }
            [name, inner @ .., leaf] => {
                let card = self
                    .cards
                    .get_mut(name)
                    .ok_or_else(|| not_found(&path[..1]))?;
                let steps = locate(card.as_map(), inner, &self.options)
                    .map_err(|i| not_found(&path[..i + 2]))?;
                let mut slot = slot_mut(card.as_map_mut(), &steps)
                    .ok_or_else(|| not_found(&path[..path.len() - 1]))?;
                if !slot.set(leaf, value.clone(), &self.options) {
                    return Err(not_found(path));
                }
            }
        }
        self.tracker.record(Op::Set {
            path: path.to_vec(),
            value,
        });
        Ok(())
    }

    /// Removes the binding at `path`. Returns whether a binding existed; a
    /// delete op is recorded only in that case.
    ///
    /// Removing a list element shifts the later elements down, so index
    /// names in ops recorded after the delete refer to the shifted list. Ops
    /// recorded before it keep their meaning as long as the batch is applied
    /// in order.
    pub fn remove_at(&mut self, path: &[String]) -> Result<bool, PageError> {
        match path {
            [] => Err(PageError::RootWrite),
            [name] => Ok(self.remove(name)),
            [name, inner @ .., leaf] => {
                let card = self
                    .cards
                    .get_mut(name)
                    .ok_or_else(|| not_found(&path[..1]))?;
                let steps = locate(card.as_map(), inner, &self.options)
                    .map_err(|i| not_found(&path[..i + 2]))?;
                let mut slot = slot_mut(card.as_map_mut(), &steps)
                    .ok_or_else(|| not_found(&path[..path.len() - 1]))?;
                if slot.remove(leaf, &self.options).is_none() {
                    return Ok(false);
                }
                self.tracker.record(Op::Delete {
                    path: path.to_vec(),
                });
                Ok(true)
            }
        }
    }

    pub fn state(&self) -> TrackerState {
        self.tracker.state()
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    pub fn pending(&self) -> &[Op] {
        self.tracker.pending()
    }

    /// Drains the pending ops. Flushing an idle page returns an empty batch.
    pub fn flush(&mut self) -> DiffBatch {
        let batch = self.tracker.flush();
        debug!(url = %self.url, ops = batch.len(), "page flushed");
        batch
    }

    /// Flushes and hands the batch to `transport`.
    ///
    /// Returns the number of ops delivered. An empty batch is not delivered.
    /// A delivery failure is returned as is; the drained ops are not put back.
    pub fn save<T: Transport + ?Sized>(&mut self, transport: &mut T) -> Result<usize, PageError> {
        let batch = self.flush();
        if batch.is_empty() {
            return Ok(0);
        }
        let count = batch.len();
        debug!(url = %self.url, ops = count, "saving page");
        transport.deliver(&self.url, batch).map_err(|err| {
            warn!(url = %self.url, ops = count, error = %err, "page delivery failed");
            err
        })?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wave_pointer::Path;

    fn path(names: &[&str]) -> Path {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn card(value: Value) -> Expando {
        Expando::try_from(value).unwrap()
    }

    #[test]
    fn test_add_records_whole_card() {
        let mut page = Page::new("/");
        page.add("hello", card(json!({"view": "markdown", "content": "hi"})));
        assert_eq!(
            page.flush().into_ops(),
            vec![Op::Set {
                path: path(&["hello"]),
                value: json!({"view": "markdown", "content": "hi"}),
            }]
        );
    }

    #[test]
    fn test_set_card_requires_object() {
        let mut page = Page::new("/");
        assert!(matches!(
            page.set_at(&path(&["hello"]), json!(1)),
            Err(PageError::Expando(_))
        ));
        assert!(!page.is_dirty());
    }

    #[test]
    fn test_root_writes_rejected() {
        let mut page = Page::new("/");
        assert_eq!(page.set_at(&[], json!({})), Err(PageError::RootWrite));
        assert_eq!(page.remove_at(&[]), Err(PageError::RootWrite));
    }

    #[test]
    fn test_remove_card() {
        let mut page = Page::new("/");
        page.add("a", card(json!({})));
        page.flush();
        assert!(page.remove("a"));
        assert!(!page.remove("a"));
        assert_eq!(
            page.flush().into_ops(),
            vec![Op::Delete { path: path(&["a"]) }]
        );
    }

    #[test]
    fn test_drop_cards() {
        let mut page = Page::new("/");
        page.add("a", card(json!({})));
        page.add("b", card(json!({})));
        page.flush();
        page.drop_cards();
        assert!(page.is_empty());
        assert_eq!(page.flush().into_ops(), vec![Op::Delete { path: vec![] }]);
    }

    #[test]
    fn test_get_at_page_root() {
        let mut page = Page::new("/");
        page.add("b", card(json!({"x": 1})));
        page.add("a", card(json!({"y": 2})));
        assert_eq!(page.get_at(&[]).unwrap(), json!({"b": {"x": 1}, "a": {"y": 2}}));
        assert_eq!(page.names().collect::<Vec<_>>(), vec!["b", "a"]);
        assert_eq!(page.get_at(&path(&["missing"])).unwrap(), Value::Null);
    }
}
