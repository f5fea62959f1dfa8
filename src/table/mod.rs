pub mod column;
pub mod engine;
pub mod filter;
pub mod pagination;
pub mod search_box;
pub mod sort;
pub mod view;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

pub use column::Column;
pub use filter::{FilterDescriptor, FilterOption, FilterValue};
pub use pagination::Pagination;
pub use sort::{SortDirection, SortDirective};
pub use view::DataTable;

/// A row that can be shown in a [`DataTable`].
///
/// Every record carries a stable unique key. Row selection follows the key,
/// so re-sorting or re-filtering never moves the cursor onto another record.
pub trait Record: Serialize {
    fn key(&self) -> String;

    /// String form of every top-level field, used by free-text search.
    fn search_fields(&self) -> Vec<String> {
        serialized_fields(self)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("filter '{filter}' has duplicate option value '{value}'")]
    DuplicateFilterOption { filter: String, value: String },

    #[error("filter '{filter}' cannot use the reserved option value '{value}'")]
    ReservedFilterValue { filter: String, value: String },

    #[error("filter '{filter}' has no option '{value}'")]
    UnknownFilterValue { filter: String, value: String },

    #[error("no filter named '{0}'")]
    UnknownFilter(String),
}

/// Flatten a record into `(field, value)` pairs in serialization order.
///
/// Records that do not serialize to an object yield a single unnamed field.
pub fn record_fields<T: Serialize + ?Sized>(record: &T) -> Vec<(String, String)> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map
            .iter()
            .map(|(name, value)| (name.clone(), value_to_string(value)))
            .collect(),
        Ok(other) => vec![(String::new(), value_to_string(&other))],
        Err(_) => vec![],
    }
}

/// Values of [`record_fields`] without their names.
pub fn serialized_fields<T: Serialize + ?Sized>(record: &T) -> Vec<String> {
    record_fields(record).into_iter().map(|(_, v)| v).collect()
}

/// Display form of a JSON value: strings unquoted, null empty, containers as compact JSON.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Person {
        id: u32,
        name: String,
        nickname: Option<String>,
        tags: Vec<String>,
    }

    impl Record for Person {
        fn key(&self) -> String {
            self.id.to_string()
        }
    }

    #[test]
    fn value_to_string_forms() {
        assert_eq!(value_to_string(&json!(null)), "");
        assert_eq!(value_to_string(&json!("Acme")), "Acme");
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!(true)), "true");
        assert_eq!(value_to_string(&json!(["a", "b"])), r#"["a","b"]"#);
    }

    #[test]
    fn record_fields_cover_every_field() {
        let p = Person {
            id: 7,
            name: "Ada".into(),
            nickname: None,
            tags: vec!["math".into()],
        };
        let fields = record_fields(&p);
        let names: Vec<&str> = fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names.len(), 4);
        for name in ["id", "name", "nickname", "tags"] {
            assert!(names.contains(&name), "missing {name}");
        }
        assert!(p.search_fields().contains(&"Ada".to_string()));
        assert!(p.search_fields().contains(&"7".to_string()));
    }

    #[test]
    fn non_object_record_yields_single_field() {
        let fields = record_fields(&"plain");
        assert_eq!(fields, vec![(String::new(), "plain".to_string())]);
    }
}
