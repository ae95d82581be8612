use serde_json::Value;
use wave_expando::check_attr_name;
use wave_pointer::Path;

use crate::page::Page;
use crate::PageError;

/// A name path into a page, holding the page mutably.
///
/// Descending with [`Ref::at`] (key syntax) accepts any name, including ones
/// like `#hash`; [`Ref::attr`] (attribute syntax) only accepts identifier
/// names that are not reserved. Both build the same path, so
/// `card.attr("back")` and `card.at("back")` address the identical widget.
/// Nothing is resolved until the handle reads or writes.
///
/// ```
/// use serde_json::json;
/// use wave_expando::Expando;
/// use wave_page::Page;
///
/// let mut page = Page::new("/");
/// let nav = Expando::try_from(json!({
///     "view": "tab",
///     "items": [{"tab": {"name": "#hash", "label": "Spam"}}]
/// })).unwrap();
/// page.add("nav", nav);
///
/// page.card("nav").at("#hash").set("label", "foo5").unwrap();
/// assert_eq!(page.card("nav").at("#hash").get("label").unwrap(), json!("foo5"));
/// ```
pub struct Ref<'a> {
    page: &'a mut Page,
    path: Path,
}

impl<'a> Ref<'a> {
    pub(crate) fn new(page: &'a mut Page, path: Path) -> Self {
        Self { page, path }
    }

    /// Descends by key. Any string is a valid name.
    pub fn at(mut self, name: impl Into<String>) -> Self {
        self.path.push(name.into());
        self
    }

    /// Descends by attribute name.
    pub fn attr(self, name: &str) -> Result<Self, PageError> {
        check_attr_name(name)?;
        Ok(self.at(name))
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// The value this handle addresses.
    pub fn read(&self) -> Result<Value, PageError> {
        self.page.get_at(&self.path)
    }

    pub fn get(&self, key: &str) -> Result<Value, PageError> {
        self.page.get_at(&self.child(key))
    }

    pub fn contains(&self, key: &str) -> Result<bool, PageError> {
        self.page.contains_at(&self.child(key))
    }

    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<(), PageError> {
        let path = self.child(key);
        self.page.set_at(&path, value)
    }

    /// Removes `key`. Returns whether it was bound.
    pub fn remove(&mut self, key: &str) -> Result<bool, PageError> {
        let path = self.child(key);
        self.page.remove_at(&path)
    }

    pub fn attr_value(&self, name: &str) -> Result<Value, PageError> {
        check_attr_name(name)?;
        self.get(name)
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Result<(), PageError> {
        check_attr_name(name)?;
        self.set(name, value)
    }

    pub fn del_attr(&mut self, name: &str) -> Result<bool, PageError> {
        check_attr_name(name)?;
        self.remove(name)
    }

    fn child(&self, key: &str) -> Path {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(key.to_owned());
        path
    }
}
