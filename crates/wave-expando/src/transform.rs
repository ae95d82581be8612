//! Pure operations producing records from records.

use crate::Expando;

/// Creates an independent deep copy of a record.
///
/// Nested records and arrays are cloned too, so no mutation of the result is
/// ever visible through `source`.
pub fn clone_expando(source: &Expando) -> Expando {
    source.clone()
}

/// Copies every binding of `source` into `target` and returns `target`.
///
/// Keys bound in both are overwritten with the source value; keys only bound
/// in `target` are left alone.
pub fn copy_expando<'a>(source: &Expando, target: &'a mut Expando) -> &'a mut Expando {
    for (key, value) in source.iter() {
        target.set(key.clone(), value.clone());
    }
    target
}

/// Clones a record keeping only selected keys.
///
/// The kept key set is `include` (or every key of `source` when `None`)
/// minus `exclude`. A key named in both lists is excluded. Included keys that
/// `source` does not bind are skipped. Source order is preserved.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use wave_expando::{clone_expando_filtered, Expando};
///
/// let e = Expando::try_from(json!({"a": 1, "b": 2, "c": 3})).unwrap();
/// let only_a = clone_expando_filtered(&e, Some(&["a", "b"]), Some(&["b", "c"]));
/// assert_eq!(only_a.into_value(), json!({"a": 1}));
/// ```
pub fn clone_expando_filtered(
    source: &Expando,
    include: Option<&[&str]>,
    exclude: Option<&[&str]>,
) -> Expando {
    let exclude = exclude.unwrap_or(&[]);
    source
        .iter()
        .filter(|(key, _)| include.map_or(true, |keys| keys.contains(&key.as_str())))
        .filter(|(key, _)| !exclude.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn abc() -> Expando {
        Expando::try_from(json!({"a": 1, "b": 2, "c": 3})).unwrap()
    }

    #[test]
    fn test_clone_is_deep() {
        let source = Expando::try_from(json!({"items": [{"label": "x"}]})).unwrap();
        let mut cloned = clone_expando(&source);
        cloned.as_map_mut()["items"][0]["label"] = json!("y");
        assert_eq!(source["items"][0]["label"], json!("x"));
        assert_eq!(cloned["items"][0]["label"], json!("y"));
    }

    #[test]
    fn test_copy_overwrites_and_keeps_target_only_keys() {
        let source = Expando::try_from(json!({"a": 1, "b": 2})).unwrap();
        let mut target = Expando::try_from(json!({"b": 20, "z": 26})).unwrap();
        copy_expando(&source, &mut target);
        assert_eq!(target.into_value(), json!({"b": 2, "z": 26, "a": 1}));
    }

    #[test]
    fn test_filtered_without_lists_is_full_clone() {
        assert_eq!(clone_expando_filtered(&abc(), None, None), abc());
    }

    #[test]
    fn test_filtered_include_missing_key_skipped() {
        let e = clone_expando_filtered(&abc(), Some(&["a", "zzz"]), None);
        assert!(e.contains("a"));
        assert!(!e.contains("zzz"));
        assert_eq!(e.len(), 1);
    }

    #[test]
    fn test_filtered_empty_include_keeps_nothing() {
        assert!(clone_expando_filtered(&abc(), Some(&[]), None).is_empty());
    }
}
