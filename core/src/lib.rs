//! Client core for the todo service.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), and synchronizes a remote
//! todo collection with an append-only table view through `TodoApp`.
//!
//! # Design
//! - `TodoClient` is stateless — it holds only `base_url`.
//! - Each operation is split into `build_*` (produces request) and
//!   `parse_*` (consumes response), so the I/O boundary is explicit.
//! - `TodoApp` takes its transport, view, form and notifier as constructor
//!   arguments; hosts (browser, terminal, tests) supply the implementations.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;
pub mod view;

pub use app::TodoApp;
pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use transport::Transport;
pub use types::{CreateTodo, Todo, TodoId};
pub use view::{FormFields, Notification, Notifier, TableRow, TodoForm, TodoTable, TodoView};
