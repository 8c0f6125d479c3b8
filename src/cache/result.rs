//! Result value returned by cache reads

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a cache lookup.
///
/// `success` is true only when the item file was found, parsed and carried a
/// `content` field. A miss always has `Null` content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCacheResult")]
pub struct CacheResult {
    content: Value,
    success: bool,
}

#[derive(Deserialize)]
struct RawCacheResult {
    #[serde(default)]
    content: Value,
    #[serde(default)]
    success: bool,
}

impl TryFrom<RawCacheResult> for CacheResult {
    type Error = String;

    fn try_from(raw: RawCacheResult) -> Result<Self, Self::Error> {
        if raw.success {
            Ok(Self::hit(raw.content))
        } else if raw.content.is_null() {
            Ok(Self::miss())
        } else {
            Err("unsuccessful cache result must have null content".to_string())
        }
    }
}

impl CacheResult {
    /// A lookup that found nothing
    pub fn miss() -> Self {
        Self {
            content: Value::Null,
            success: false,
        }
    }

    /// A lookup that found `content`
    pub fn hit(content: Value) -> Self {
        Self {
            content,
            success: true,
        }
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn into_content(self) -> Value {
        self.content
    }

    /// True for a hit with non-null content
    pub fn is_present(&self) -> bool {
        self.success && !self.content.is_null()
    }

    /// Decode the content into `T`.
    ///
    /// Returns `None` on a miss or when the content does not fit `T`.
    pub fn content_as<T: DeserializeOwned>(&self) -> Option<T> {
        if !self.success {
            return None;
        }
        serde_json::from_value(self.content.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_miss_is_null_and_unsuccessful() {
        let result = CacheResult::miss();
        assert!(result.content().is_null());
        assert!(!result.success());
        assert!(!result.is_present());
        assert_eq!(result, CacheResult::default());
    }

    #[test]
    fn test_hit_with_null_content_is_not_present() {
        let result = CacheResult::hit(Value::Null);
        assert!(result.success());
        assert!(!result.is_present());
    }

    #[test]
    fn test_content_as() {
        let result = CacheResult::hit(json!(["a", "b"]));
        let list: Vec<String> = result.content_as().unwrap();
        assert_eq!(list, vec!["a", "b"]);

        assert_eq!(result.content_as::<u32>(), None);
        assert_eq!(CacheResult::miss().content_as::<Value>(), None);
    }

    #[test]
    fn test_deserialize_rejects_content_on_miss() {
        let err = serde_json::from_value::<CacheResult>(json!({"content": "x", "success": false}))
            .unwrap_err();
        assert!(err.to_string().contains("must have null content"));
    }

    #[test]
    fn test_deserialize_accepts_hit_and_miss() {
        let hit: CacheResult =
            serde_json::from_value(json!({"content": "6009", "success": true})).unwrap();
        assert_eq!(hit, CacheResult::hit(json!("6009")));

        let miss: CacheResult = serde_json::from_value(json!({"success": false})).unwrap();
        assert_eq!(miss, CacheResult::miss());
    }

    #[test]
    fn test_serialized_shape() {
        let result = CacheResult::hit(json!("6009"));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value, json!({"content": "6009", "success": true}));
    }
}
