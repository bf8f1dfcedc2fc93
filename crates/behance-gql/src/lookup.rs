//! Defaulting lookups into untyped JSON nodes
//!
//! Every function here takes a [JSON Pointer][rfc] (e.g.,
//! `"/stats/views/all"`) and returns an empty/zero value instead of failing
//! when any step of the path is missing or has the wrong type.
//!
//! [rfc]: https://www.rfc-editor.org/rfc/rfc6901
use crate::types::Id;
use serde_json::Value;

/// Return the string at `pointer`.  Numbers are rendered in decimal.
pub fn str_at(value: &Value, pointer: &str) -> String {
    match value.pointer(pointer) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Return the unsigned integer at `pointer`.  Numeric strings are parsed.
pub fn u64_at(value: &Value, pointer: &str) -> u64 {
    match value.pointer(pointer) {
        Some(Value::Number(n)) => n.as_u64().unwrap_or_default(),
        Some(Value::String(s)) => s.trim().parse().unwrap_or_default(),
        _ => 0,
    }
}

pub fn bool_at(value: &Value, pointer: &str) -> bool {
    value
        .pointer(pointer)
        .and_then(Value::as_bool)
        .unwrap_or_default()
}

pub fn id_at(value: &Value, pointer: &str) -> Id {
    value.pointer(pointer).map(Id::from_value).unwrap_or_default()
}

/// Return the elements of the array at `pointer`
pub fn array_at<'a>(value: &'a Value, pointer: &str) -> &'a [Value] {
    value
        .pointer(pointer)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Given an object of named image sizes of the form `{"size_404": {"url":
/// …}, …}`, return the URL for the first size in `preference` that is present
/// with a nonempty URL
pub fn first_url(sizes: &Value, preference: &[&str]) -> String {
    preference
        .iter()
        .find_map(|size| {
            sizes
                .get(size)
                .and_then(|img| img.get("url"))
                .and_then(Value::as_str)
                .filter(|url| !url.is_empty())
        })
        .map(str::to_owned)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn missing_intermediate_keys_default() {
        let node = json!({"stats": {"views": null}});
        assert_eq!(u64_at(&node, "/stats/views/all"), 0);
        assert_eq!(str_at(&node, "/owner/url"), "");
        assert!(!bool_at(&node, "/isFeatured"));
        assert!(id_at(&node, "/id").is_empty());
        assert!(array_at(&node, "/fields").is_empty());
    }

    #[test]
    fn wrong_types_default() {
        let node = json!({"name": ["x"], "stats": {"views": {"all": "many"}}, "fields": {}});
        assert_eq!(str_at(&node, "/name"), "");
        assert_eq!(u64_at(&node, "/stats/views/all"), 0);
        assert!(array_at(&node, "/fields").is_empty());
    }

    #[test]
    fn present_values() {
        let node = json!({
            "id": 42,
            "name": "Turning Red",
            "stats": {"views": {"all": 1200}, "comments": {"all": "7"}},
            "modules": [{"url": "https://a"}, {"url": "https://b"}],
        });
        assert_eq!(id_at(&node, "/id").as_str(), "42");
        assert_eq!(str_at(&node, "/name"), "Turning Red");
        assert_eq!(u64_at(&node, "/stats/views/all"), 1200);
        assert_eq!(u64_at(&node, "/stats/comments/all"), 7);
        assert_eq!(str_at(&node, "/modules/1/url"), "https://b");
        assert_eq!(array_at(&node, "/modules").len(), 2);
    }

    #[test]
    fn first_url_follows_preference() {
        let covers = json!({
            "size_202": {"url": "https://img/202.png"},
            "size_404": {"url": "https://img/404.png"},
            "size_808": {"url": ""},
        });
        assert_eq!(
            first_url(&covers, &["size_808", "size_404", "size_202"]),
            "https://img/404.png"
        );
        assert_eq!(first_url(&covers, &["size_original"]), "");
        assert_eq!(first_url(&Value::Null, &["size_808"]), "");
    }
}
