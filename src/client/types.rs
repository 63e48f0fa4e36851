//! Wire types shared by both backend families.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned todo identifier.
///
/// The two families assign ids from independent namespaces and do not
/// agree on a representation, so the client keeps ids opaque and only
/// ever echoes them back into request paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Int(u64),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Int(n) => write!(f, "{}", n),
            TodoId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        TodoId::Int(n)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        match s.parse::<u64>() {
            Ok(n) => TodoId::Int(n),
            Err(_) => TodoId::Text(s.to_string()),
        }
    }
}

/// A single todo item as returned by the list endpoints.
///
/// Unknown extra fields are ignored; the backends own the storage schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub task: String,
}

/// Request body for the add endpoints.
#[derive(Debug, Serialize)]
pub struct NewTodo<'a> {
    pub task: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_numeric_id() {
        let todos: Vec<Todo> =
            serde_json::from_str(r#"[{"id":1,"task":"buy milk"}]"#).unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, TodoId::Int(1));
        assert_eq!(todos[0].task, "buy milk");
    }

    #[test]
    fn test_deserialize_string_id() {
        let todo: Todo =
            serde_json::from_str(r#"{"id":"a1b2","task":"water plants"}"#).unwrap();
        assert_eq!(todo.id, TodoId::Text("a1b2".to_string()));
    }

    #[test]
    fn test_extra_fields_ignored() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":3,"task":"call bank","created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(todo.id, TodoId::Int(3));
    }

    #[test]
    fn test_id_display_goes_into_paths() {
        assert_eq!(TodoId::Int(42).to_string(), "42");
        assert_eq!(TodoId::Text("x-9".into()).to_string(), "x-9");
    }

    #[test]
    fn test_new_todo_body() {
        let body = serde_json::to_string(&NewTodo { task: "buy milk" }).unwrap();
        assert_eq!(body, r#"{"task":"buy milk"}"#);
    }
}
