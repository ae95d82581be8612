use crate::PointerError;

/// Unescapes a pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 must be replaced before ~0
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a pointer path component.
///
/// Per RFC 6901, `/` is replaced with `~1` and `~` is replaced with `~0`.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    // ~ must be escaped before /
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a pointer string into a name path.
///
/// The empty string is the page root. Any other pointer must start with `/`.
///
/// # Example
///
/// ```
/// use wave_pointer::parse_pointer;
///
/// assert_eq!(parse_pointer("").unwrap(), Vec::<String>::new());
/// assert_eq!(parse_pointer("/nav/#hash").unwrap(), vec!["nav", "#hash"]);
/// assert_eq!(parse_pointer("/a~0b/c~1d").unwrap(), vec!["a~b", "c/d"]);
/// assert!(parse_pointer("nav").is_err());
/// ```
pub fn parse_pointer(pointer: &str) -> Result<Vec<String>, PointerError> {
    if pointer.is_empty() {
        return Ok(Vec::new());
    }
    crate::validate_pointer(pointer)?;
    Ok(pointer[1..].split('/').map(unescape_component).collect())
}

/// Format a name path into a pointer string.
///
/// Returns an empty string for the root path.
pub fn format_pointer(path: &[String]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::new();
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Render a name path as a dotted key, e.g. `wizard.text_name.content`.
///
/// Names that are not identifiers are rendered in brackets so the output
/// stays readable: `nav["#hash"].label`. This form is for logs and error
/// messages only; it is never parsed back.
pub fn format_dotted(path: &[String]) -> String {
    let mut out = String::new();
    for (i, name) in path.iter().enumerate() {
        if is_identifier(name) {
            if i > 0 {
                out.push('.');
            }
            out.push_str(name);
        } else {
            out.push_str("[\"");
            out.push_str(&name.replace('\\', "\\\\").replace('"', "\\\""));
            out.push_str("\"]");
        }
    }
    out
}

/// Check whether a name can be written with attribute syntax.
///
/// # Example
///
/// ```
/// use wave_pointer::is_identifier;
///
/// assert!(is_identifier("text_name"));
/// assert!(is_identifier("_private"));
/// assert!(!is_identifier("#hash"));
/// assert!(!is_identifier("1st"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

/// Check if a string represents a valid non-negative integer array index.
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // No leading zero unless the index is just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_escape_roundtrip() {
        assert_eq!(escape_component("a~b/c"), "a~0b~1c");
        assert_eq!(unescape_component("a~0b~1c"), "a~b/c");
        assert_eq!(escape_component("#hash"), "#hash");
        assert_eq!(unescape_component("~01"), "~1");
    }

    #[test]
    fn test_format_pointer() {
        assert_eq!(format_pointer(&[]), "");
        assert_eq!(format_pointer(&path(&["nav", "#hash"])), "/nav/#hash");
        assert_eq!(format_pointer(&path(&[""])), "/");
    }

    #[test]
    fn test_parse_pointer_trailing_slashes() {
        assert_eq!(parse_pointer("/foo///").unwrap(), vec!["foo", "", "", ""]);
    }

    #[test]
    fn test_format_dotted() {
        assert_eq!(
            format_dotted(&path(&["wizard", "text_name", "content"])),
            "wizard.text_name.content"
        );
        assert_eq!(
            format_dotted(&path(&["nav", "#hash", "label"])),
            "nav[\"#hash\"].label"
        );
        assert_eq!(format_dotted(&path(&["a\"b"])), "[\"a\\\"b\"]");
        assert_eq!(format_dotted(&[]), "");
    }

    #[test]
    fn test_is_valid_index() {
        assert!(is_valid_index("0"));
        assert!(is_valid_index("123"));
        assert!(!is_valid_index("-1"));
        assert!(!is_valid_index("01"));
        assert!(!is_valid_index(""));
        assert!(!is_valid_index("#hash"));
    }
}
