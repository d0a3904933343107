//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! The caller executes the actual HTTP round-trip, keeping the core
//! deterministic and free of I/O dependencies.

use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateTodo, Todo};

/// Stateless client for the todo collection endpoint.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(&config.base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/todos/", self.base_url)
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(&self, input: &CreateTodo) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: self.collection_url(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        parse_json(response)
    }
}

/// Reject non-2xx responses, then deserialize the body.
fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    if !response.is_success() {
        return Err(ApiError::HttpError {
            status: response.status,
            body: response.body,
        });
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TodoId;

    fn client() -> TodoClient {
        TodoClient::new("http://127.0.0.1:8080")
    }

    #[test]
    fn build_list_todos_produces_correct_request() {
        let req = client().build_list_todos();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://127.0.0.1:8080/todos/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_todo_produces_correct_request() {
        let input = CreateTodo::new("Buy milk", "2%");
        let req = client().build_create_todo(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://127.0.0.1:8080/todos/");
        assert_eq!(
            req.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
        assert_eq!(
            req.body.as_deref(),
            Some(r#"{"title":"Buy milk","description":"2%"}"#)
        );
    }

    #[test]
    fn build_create_todo_sends_untrimmed_input() {
        let input = CreateTodo::new("  spaced  ", "");
        let req = client().build_create_todo(&input).unwrap();
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "  spaced  ");
        assert_eq!(body["description"], "");
    }

    #[test]
    fn parse_list_todos_keeps_server_order() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":2,"title":"B","description":"d2"},{"id":1,"title":"A","description":"d1"}]"#,
        );
        let todos = client().parse_list_todos(response).unwrap();
        let ids: Vec<String> = todos.iter().map(|t| t.id.to_string()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn parse_create_todo_accepts_200_and_201() {
        let body = r#"{"id":7,"title":"Buy milk","description":"2%"}"#;
        for status in [200, 201] {
            let todo = client().parse_create_todo(HttpResponse::new(status, body)).unwrap();
            assert_eq!(todo.id, TodoId::from(7u64));
            assert_eq!(todo.title, "Buy milk");
        }
    }

    #[test]
    fn parse_create_todo_null_description_is_accepted() {
        let response = HttpResponse::new(201, r#"{"id":7,"title":"Buy milk","description":null}"#);
        let todo = client().parse_create_todo(response).unwrap();
        assert_eq!(todo.id, TodoId::from(7u64));
        assert_eq!(todo.description, "");
    }

    #[test]
    fn parse_list_todos_keeps_partial_records() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":1,"title":"A","description":"d1"},{"id":2,"title":"B"}]"#,
        );
        let todos = client().parse_list_todos(response).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[1].title, "B");
        assert_eq!(todos[1].description, "");
    }

    #[test]
    fn parse_create_todo_wrong_status() {
        let response = HttpResponse::new(500, "internal error");
        let err = client().parse_create_todo(response).unwrap_err();
        assert_eq!(
            err,
            ApiError::HttpError {
                status: 500,
                body: "internal error".to_string()
            }
        );
    }

    #[test]
    fn parse_create_todo_non_json_body() {
        let response = HttpResponse::new(200, "<html>oops</html>");
        let err = client().parse_create_todo(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_list_todos_bad_json() {
        let response = HttpResponse::new(200, "not json");
        let err = client().parse_list_todos(response).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://127.0.0.1:8080/");
        let req = client.build_list_todos();
        assert_eq!(req.path, "http://127.0.0.1:8080/todos/");
    }

    #[test]
    fn from_config_uses_base_url() {
        let client = TodoClient::from_config(&ClientConfig::new("http://example.test"));
        assert_eq!(client.base_url(), "http://example.test");
    }
}
