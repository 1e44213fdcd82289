//! Content entries

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::filter::{filter_enabled, prune_disabled, Enabled, ENABLED_FIELD};

/// One addressable content item: a journal, a bank program, a flight
/// program, ...
///
/// Entries keep their authored fields as a JSON object so that every
/// collection shares the same loading and filtering path. A constructed
/// entry always has a string `slug`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entry(Map<String, Value>);

impl Entry {
    /// Wrap a JSON value, which must be an object with a string `slug`
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) if fields.get("slug").is_some_and(Value::is_string) => {
                Some(Self(fields))
            }
            _ => None,
        }
    }

    /// URL slug, unique within its collection
    pub fn slug(&self) -> &str {
        self.0.get("slug").and_then(Value::as_str).unwrap_or_default()
    }

    pub fn title(&self) -> Option<&str> {
        self.0.get("title").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl Enabled for Entry {
    fn is_enabled(&self) -> bool {
        !matches!(self.0.get(ENABLED_FIELD), Some(Value::Bool(false)))
    }
}

/// Turn raw collection items into render-ready entries.
///
/// Disabled items are dropped first, then the survivors are deep-filtered.
/// Items that are not objects with a string `slug` are skipped.
pub fn collect_entries(source: &str, items: Vec<Value>) -> Vec<Entry> {
    filter_enabled(items)
        .into_iter()
        .filter_map(|mut item| {
            if !item.get("slug").is_some_and(Value::is_string) {
                tracing::warn!(
                    "Skipping {} in {}: not an object with a slug",
                    describe(&item),
                    source
                );
                return None;
            }
            prune_disabled(&mut item);
            Entry::from_value(item)
        })
        .collect()
}

/// Short label for an item in log output
fn describe(item: &Value) -> String {
    match item.get("title").and_then(Value::as_str) {
        Some(title) => format!("item {:?}", title),
        None => {
            let text = item.to_string();
            match text.char_indices().nth(60) {
                Some((cut, _)) => format!("item {}...", &text[..cut]),
                None => format!("item {}", text),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::capture_logs;
    use serde_json::json;

    #[test]
    fn test_from_value_requires_string_slug() {
        assert!(Entry::from_value(json!({"slug": "amex"})).is_some());
        assert!(Entry::from_value(json!({"slug": 7})).is_none());
        assert!(Entry::from_value(json!({"title": "No slug"})).is_none());
        assert!(Entry::from_value(json!(["slug"])).is_none());
    }

    #[test]
    fn test_accessors() {
        let entry = Entry::from_value(json!({
            "slug": "united-mileageplus",
            "title": "United MileagePlus",
            "alliance": "Star Alliance"
        }))
        .unwrap();

        assert_eq!(entry.slug(), "united-mileageplus");
        assert_eq!(entry.title(), Some("United MileagePlus"));
        assert_eq!(entry.get("alliance"), Some(&json!("Star Alliance")));
        assert!(entry.is_enabled());
    }

    #[test]
    fn test_collect_entries() {
        let items = vec![
            json!({"slug": "a", "sections": [{"h": 1}, {"h": 2, "enabled": false}]}),
            json!({"slug": "b", "enabled": false}),
            json!({"title": "missing slug"}),
            json!("not an object"),
            json!({"slug": "c"}),
        ];

        let entries = collect_entries("test.json", items);
        let slugs: Vec<_> = entries.iter().map(Entry::slug).collect();
        assert_eq!(slugs, vec!["a", "c"]);
        assert_eq!(entries[0].get("sections"), Some(&json!([{"h": 1}])));
    }

    #[test]
    fn test_skipped_item_is_named_in_warning() {
        let (logs, _guard) = capture_logs();
        let items = vec![
            json!({"slug": "hidden", "enabled": false}),
            json!({"slug": "a"}),
            json!({"title": "Chase Ultimate Rewards"}),
            json!(42),
        ];

        let entries = collect_entries("bank-programs.json", items);
        assert_eq!(entries.len(), 1);

        let output = logs.contents();
        assert!(output.contains(r#"Skipping item "Chase Ultimate Rewards" in bank-programs.json"#));
        assert!(output.contains("Skipping item 42 in bank-programs.json"));
    }

    #[test]
    fn test_describe_truncates_long_items() {
        let long = json!({ "note": "x".repeat(200) });
        let label = describe(&long);
        assert!(label.ends_with("..."));
        assert!(label.len() < 80);
    }
}
