//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! The server owns ids; the client only compares and displays them, so
//! `TodoId` accepts any JSON scalar the server chooses and renders it back
//! verbatim.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned identifier of a todo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for TodoId {
    fn from(id: u64) -> Self {
        TodoId::Number(id.into())
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        TodoId::Text(id.to_string())
    }
}

/// A single todo item returned by the API.
///
/// A missing or `null` text field reads as empty: the server has already
/// accepted the record, so it is rendered rather than rejected.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Request payload for creating a new todo. Fields are sent exactly as typed;
/// empty strings included.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodo {
    pub title: String,
    pub description: String,
}

impl CreateTodo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_displays_as_number() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":7,"title":"Buy milk","description":"2%"}"#).unwrap();
        assert_eq!(todo.id, TodoId::from(7u64));
        assert_eq!(todo.id.to_string(), "7");
    }

    #[test]
    fn textual_id_is_kept_verbatim() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":"00000000-0000-0000-0000-000000000001","title":"A","description":""}"#,
        )
        .unwrap();
        assert_eq!(todo.id.to_string(), "00000000-0000-0000-0000-000000000001");
    }

    #[test]
    fn missing_or_null_text_fields_read_as_empty() {
        let todo: Todo = serde_json::from_str(r#"{"id":1,"title":"A"}"#).unwrap();
        assert_eq!(todo.description, "");

        let todo: Todo = serde_json::from_str(r#"{"id":2,"title":null,"description":null}"#).unwrap();
        assert_eq!(todo.title, "");
        assert_eq!(todo.description, "");
    }

    #[test]
    fn todo_requires_id() {
        let result: Result<Todo, _> = serde_json::from_str(r#"{"title":"A","description":"d"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn create_todo_serializes_both_fields() {
        let json = serde_json::to_value(CreateTodo::new("", "")).unwrap();
        assert_eq!(json, serde_json::json!({"title": "", "description": ""}));
    }
}
