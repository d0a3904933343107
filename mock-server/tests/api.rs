use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with_store, CreateTodo, Store, Todo};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- greeting routes ---

#[tokio::test]
async fn root_and_home_greet() {
    let resp = app().oneshot(get("/")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["message"], "Hello root!");

    let resp = app().oneshot(get("/home")).await.unwrap();
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["message"], "Home!");
}

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    for uri in ["/todos", "/todos/"] {
        let resp = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let todos: Vec<Todo> = body_json(resp).await;
        assert!(todos.is_empty(), "{uri}");
    }
}

#[tokio::test]
async fn list_todos_in_creation_order() {
    let mut store = Store::default();
    for (title, description) in [("A", "d1"), ("B", "d2")] {
        store.insert(CreateTodo {
            title: title.to_string(),
            description: description.to_string(),
        });
    }

    let resp = app_with_store(store).oneshot(get("/todos/")).await.unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    let body = serde_json::to_value(&todos).unwrap();
    assert_eq!(
        body,
        serde_json::json!([
            {"id": 1, "title": "A", "description": "d1"},
            {"id": 2, "title": "B", "description": "d2"}
        ])
    );
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_201() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/todos/",
            r#"{"title":"Buy milk","description":"2%"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let todo: Todo = body_json(resp).await;
    assert_eq!(
        todo,
        Todo {
            id: 1,
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
        }
    );
}

#[tokio::test]
async fn create_todo_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/todos/", r#"{"not_title":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn preflight_is_allowed_from_any_origin() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/todos/")
                .header(http::header::ORIGIN, "http://localhost:5500")
                .header(http::header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(http::header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[http::header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

// --- create then list ---

#[tokio::test]
async fn create_then_list() {
    use tower::Service;

    let mut app = app().into_service();

    for title in ["first", "second"] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request(
                "POST",
                "/todos/",
                &format!(r#"{{"title":"{title}","description":""}}"#),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/todos/"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    let summary: Vec<(u64, &str)> = todos.iter().map(|t| (t.id, t.title.as_str())).collect();
    assert_eq!(summary, [(1, "first"), (2, "second")]);
}
