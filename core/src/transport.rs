//! The seam through which hosts perform I/O on behalf of the core.

use std::future::Future;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes an `HttpRequest` and hands back whatever the server answered.
///
/// Non-2xx responses are data, not errors: implementations return them as
/// `Ok(HttpResponse)` and let `TodoClient` interpret the status. Only a
/// request that never produced a response maps to `ApiError::Transport`.
///
/// The returned future carries no `Send` bound so browser hosts can hold
/// JS handles across the await.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}
