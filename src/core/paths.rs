//! Key-to-path composition
//!
//! Cache keys are trusted: they are joined into file names as-is.

use serde_json::Value;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// File extension of every item file
const ITEM_EXTENSION: &str = ".json";

/// Build `<folder>/<key>.json`
pub fn item_path(folder: &Path, key: &str) -> PathBuf {
    let mut path = OsString::from(folder.as_os_str());
    path.push("/");
    path.push(key);
    path.push(ITEM_EXTENSION);
    PathBuf::from(path)
}

/// Text appended to a key for the given version.
///
/// Matches the key names written by the JavaScript browscap library:
/// integer-valued numbers drop their fraction, arrays are comma-joined with
/// null elements left empty, objects become `[object Object]`. An unresolved
/// version renders as `null`.
pub fn version_suffix(version: Option<&Value>) -> String {
    match version {
        Some(value) => script_text(value),
        None => "null".to_string(),
    }
}

fn script_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.is_f64() {
                number_text(n.as_f64().unwrap_or_default())
            } else {
                n.to_string()
            }
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => script_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(f: f64) -> String {
    if f == 0.0 {
        "0".to_string()
    } else if f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{:.0}", f)
    } else {
        f.to_string()
    }
}

/// Build `<key>.<version>`
pub fn qualify_key(key: &str, version: Option<&Value>) -> String {
    format!("{}.{}", key, version_suffix(version))
}

/// Normalize a path to use '/' as separator (for cross-platform consistency)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_path() {
        let path = item_path(Path::new("/data"), "browscap.version");
        assert_eq!(path, PathBuf::from("/data/browscap.version.json"));
    }

    #[test]
    fn test_item_path_keeps_trailing_slash() {
        let path = item_path(Path::new("./test-cache/"), "k");
        assert_eq!(normalize_path(&path), "./test-cache//k.json");
    }

    #[test]
    fn test_item_path_no_sanitization() {
        let path = item_path(Path::new("/data"), "../x y");
        assert_eq!(normalize_path(&path), "/data/../x y.json");
    }

    #[test]
    fn test_version_suffix() {
        assert_eq!(version_suffix(Some(&json!("6009"))), "6009");
        assert_eq!(version_suffix(Some(&json!(6009))), "6009");
        assert_eq!(version_suffix(Some(&json!(true))), "true");
        assert_eq!(version_suffix(None), "null");
    }

    #[test]
    fn test_version_suffix_numbers_drop_integer_fraction() {
        assert_eq!(version_suffix(Some(&json!(6009.0))), "6009");
        assert_eq!(version_suffix(Some(&json!(-0.0))), "0");
        assert_eq!(version_suffix(Some(&json!(6009.5))), "6009.5");
        assert_eq!(version_suffix(Some(&json!(-12))), "-12");
    }

    #[test]
    fn test_version_suffix_arrays_and_objects() {
        assert_eq!(version_suffix(Some(&json!(["a", "b"]))), "a,b");
        assert_eq!(version_suffix(Some(&json!([1, null, ["x", 2.0]]))), "1,,x,2");
        assert_eq!(version_suffix(Some(&json!([]))), "");
        assert_eq!(version_suffix(Some(&json!({"v": 1}))), "[object Object]");
    }

    #[test]
    fn test_qualify_key() {
        assert_eq!(qualify_key("browscap.ini", Some(&json!("6009"))), "browscap.ini.6009");
        assert_eq!(qualify_key("invalid key", None), "invalid key.null");
    }

    #[test]
    fn test_normalize_path_nested() {
        let path = Path::new("a/b/c/d.json");
        assert_eq!(normalize_path(path), "a/b/c/d.json");
    }
}
