//! Path resolution over the configuration document.
//!
//! A document is a `serde_json::Value` rooted at an object. Paths address
//! mapping keys only; resolution returns a [`Slot`] through which the caller
//! reads the old value and writes the new one.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{Error, OverrideError, Result};

/// Top-level sections the resolver may create as empty mappings.
pub const SPECIAL_SECTIONS: &[&str] = &["core_services", "database"];

/// Join path segments with dots for diagnostics.
#[must_use]
pub fn dotted(segments: &[&str]) -> String {
    segments.join(".")
}

/// A writable location inside the document: a parent mapping plus the
/// terminal key. The key need not exist yet.
#[derive(Debug)]
pub struct Slot<'a> {
    parent: &'a mut Map<String, Value>,
    key: String,
}

impl Slot<'_> {
    /// Current value at the location, if any.
    #[must_use]
    pub fn get(&self) -> Option<&Value> {
        self.parent.get(&self.key)
    }

    /// Replace (or insert) the value at the location.
    pub fn set(self, value: Value) {
        self.parent.insert(self.key, value);
    }
}

/// Resolve `path` inside `root` to a [`Slot`].
///
/// Every non-terminal segment must name a mapping; a missing or non-mapping
/// intermediate is a `PathNotFound` error, never silently skipped. When
/// `create_special` is set, a missing first segment naming one of
/// [`SPECIAL_SECTIONS`] is inserted as an empty mapping instead.
///
/// # Errors
///
/// Returns `PathNotFound` when descent fails, or `InvalidProperty` for an
/// empty path.
pub fn resolve<'a>(
    root: &'a mut Value,
    path: &[&str],
    create_special: bool,
) -> Result<Slot<'a>, OverrideError> {
    let (leaf, parents) = path
        .split_last()
        .ok_or_else(|| OverrideError::invalid_property(""))?;

    let mut node = root;
    for (idx, seg) in parents.iter().enumerate() {
        let map = match node {
            Value::Object(map) => map,
            _ => return Err(OverrideError::path_not_found(dotted(path))),
        };
        let allow_create = create_special && idx == 0 && SPECIAL_SECTIONS.contains(seg);
        node = if allow_create {
            map.entry((*seg).to_string())
                .or_insert_with(|| Value::Object(Map::new()))
        } else {
            map.get_mut(*seg)
                .ok_or_else(|| OverrideError::path_not_found(dotted(path)))?
        };
    }

    match node {
        Value::Object(parent) => Ok(Slot {
            parent,
            key: (*leaf).to_string(),
        }),
        _ => Err(OverrideError::path_not_found(dotted(path))),
    }
}

/// Load a configuration document from disk.
///
/// # Errors
///
/// I/O and JSON parse failures are fatal, as is a root that is not a JSON
/// object.
pub fn load_document(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&text)?;
    if !document.is_object() {
        return Err(Error::config(format!(
            "configuration root must be a JSON object: {}",
            path.display()
        )));
    }
    Ok(document)
}

/// Pretty-print a document with 2-space indentation and a trailing newline.
///
/// # Errors
///
/// Returns a JSON error when the document cannot be serialized.
pub fn render_document(document: &Value) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(document)?;
    rendered.push('\n');
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_top_level_leaf() {
        let mut doc = json!({"secret_key": "abc"});
        let slot = resolve(&mut doc, &["secret_key"], false).unwrap();
        assert_eq!(slot.get(), Some(&json!("abc")));
    }

    #[test]
    fn test_resolve_nested_leaf() {
        let mut doc = json!({"rankings": {"port": 8890}});
        let slot = resolve(&mut doc, &["rankings", "port"], false).unwrap();
        assert_eq!(slot.get(), Some(&json!(8890)));
    }

    #[test]
    fn test_slot_set_replaces_value() {
        let mut doc = json!({"rankings": {"port": 8890}});
        let slot = resolve(&mut doc, &["rankings", "port"], false).unwrap();
        slot.set(json!(9000));
        assert_eq!(doc, json!({"rankings": {"port": 9000}}));
    }

    #[test]
    fn test_slot_set_inserts_missing_leaf() {
        let mut doc = json!({"rankings": {}});
        let slot = resolve(&mut doc, &["rankings", "port"], false).unwrap();
        assert!(slot.get().is_none());
        slot.set(json!(9000));
        assert_eq!(doc, json!({"rankings": {"port": 9000}}));
    }

    #[test]
    fn test_missing_intermediate_is_path_not_found() {
        let mut doc = json!({"rankings": {}});
        let err = resolve(&mut doc, &["ghost", "port"], false).unwrap_err();
        assert!(matches!(err, OverrideError::PathNotFound { .. }));
        assert!(err.to_string().contains("ghost.port"));
    }

    #[test]
    fn test_non_mapping_intermediate_is_path_not_found() {
        let mut doc = json!({"secret_key": "abc"});
        let err = resolve(&mut doc, &["secret_key", "inner"], false).unwrap_err();
        assert!(matches!(err, OverrideError::PathNotFound { .. }));
    }

    #[test]
    fn test_special_section_is_created_on_demand() {
        let mut doc = json!({});
        let slot = resolve(&mut doc, &["core_services", "Worker"], true).unwrap();
        assert!(slot.get().is_none());
        slot.set(json!([["w", 1]]));
        assert_eq!(doc, json!({"core_services": {"Worker": [["w", 1]]}}));
    }

    #[test]
    fn test_special_section_not_created_without_flag() {
        let mut doc = json!({});
        let err = resolve(&mut doc, &["core_services", "Worker"], false).unwrap_err();
        assert!(matches!(err, OverrideError::PathNotFound { .. }));
    }

    #[test]
    fn test_non_special_section_never_created() {
        let mut doc = json!({});
        let err = resolve(&mut doc, &["rankings", "port"], true).unwrap_err();
        assert!(matches!(err, OverrideError::PathNotFound { .. }));
    }

    #[test]
    fn test_empty_path_is_invalid() {
        let mut doc = json!({});
        let err = resolve(&mut doc, &[], false).unwrap_err();
        assert!(matches!(err, OverrideError::InvalidProperty { .. }));
    }

    #[test]
    fn test_dotted_join() {
        assert_eq!(dotted(&["core_services", "worker"]), "core_services.worker");
        assert_eq!(dotted(&["database"]), "database");
    }

    #[test]
    fn test_load_document() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("cms.conf");
        fs::write(&path, r#"{"secret_key": "abc"}"#).unwrap();
        let doc = load_document(&path).unwrap();
        assert_eq!(doc, json!({"secret_key": "abc"}));
    }

    #[test]
    fn test_load_document_missing_file_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = load_document(&tmp.path().join("nope.conf")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_document_bad_json_is_json_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("cms.conf");
        fs::write(&path, "{oops").unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_load_document_non_object_root_is_config_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("cms.conf");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let err = load_document(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_render_document_indent_and_newline() {
        let rendered = render_document(&json!({"a": {"b": 1}})).unwrap();
        assert_eq!(rendered, "{\n  \"a\": {\n    \"b\": 1\n  }\n}\n");
    }
}
