//! `window.fetch` as a `Transport`.

use todo_core::{ApiError, HttpRequest, HttpResponse, Transport};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Window};

use crate::error::describe;

fn transport_error(value: JsValue) -> ApiError {
    ApiError::Transport(describe(&value))
}

#[derive(Debug, Clone)]
pub struct FetchTransport {
    window: Window,
}

impl FetchTransport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    async fn fetch(&self, request: HttpRequest) -> Result<HttpResponse, JsValue> {
        let init = RequestInit::new();
        init.set_method(request.method.as_str());
        if let Some(body) = &request.body {
            init.set_body(&JsValue::from_str(body));
        }

        let js_request = Request::new_with_str_and_init(&request.path, &init)?;
        for (name, value) in &request.headers {
            js_request.headers().set(name, value)?;
        }

        let response: Response = JsFuture::from(self.window.fetch_with_request(&js_request))
            .await?
            .dyn_into()?;
        let headers = match response.headers().get("content-type")? {
            Some(value) => vec![("content-type".to_string(), value)],
            None => Vec::new(),
        };
        let body = JsFuture::from(response.text()?)
            .await?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse {
            status: response.status(),
            headers,
            body,
        })
    }
}

impl Transport for FetchTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.fetch(request).await.map_err(transport_error)
    }
}
