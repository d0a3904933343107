//! Keeps a rendered todo table in step with the remote collection.
//!
//! # Design
//! `TodoApp` owns nothing but its collaborators. It builds requests with
//! `TodoClient`, hands them to the host's `Transport`, and only touches the
//! view after the server has answered, so every rendered row is a record the
//! server accepted. Both operations log their failures and also return them,
//! leaving the host free to ignore or inspect the error.

use tracing::{debug, error, info};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::Todo;
use crate::view::{Notification, Notifier, TodoForm, TodoView};

pub struct TodoApp<T, V, F, N> {
    client: TodoClient,
    transport: T,
    view: V,
    form: F,
    notifier: N,
}

impl<T, V, F, N> TodoApp<T, V, F, N>
where
    T: Transport,
    V: TodoView,
    F: TodoForm,
    N: Notifier,
{
    pub fn new(client: TodoClient, transport: T, view: V, form: F, notifier: N) -> Self {
        Self {
            client,
            transport,
            view,
            form,
            notifier,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Load the whole collection and append one row per record, in the order
    /// the server sent them. Returns how many rows were appended.
    ///
    /// Failures are logged only; nothing is shown to the user and the table
    /// is left as it was. Rows are not cleared first, so loading twice
    /// renders every todo twice.
    pub async fn fetch_todos(&self) -> Result<usize, ApiError> {
        let todos = match self.list_todos().await {
            Ok(todos) => todos,
            Err(err) => {
                error!(error = %err, "failed to load todos");
                return Err(err);
            }
        };
        for todo in &todos {
            self.add_todo_to_table(todo);
        }
        info!(count = todos.len(), "loaded todos");
        Ok(todos.len())
    }

    /// Create a todo from the current form values.
    ///
    /// On success the user is notified, the server's record is appended and
    /// the form is cleared. On failure the user is notified and the form
    /// keeps its values for another attempt. Nothing prevents overlapping
    /// submissions.
    pub async fn submit_todo(&self) -> Result<Todo, ApiError> {
        match self.create_todo().await {
            Ok(todo) => {
                info!(id = %todo.id, "created todo");
                self.notifier.notify(Notification::Created);
                self.add_todo_to_table(&todo);
                self.form.reset();
                Ok(todo)
            }
            Err(err) => {
                error!(error = %err, "failed to create todo");
                self.notifier.notify(Notification::CreateFailed);
                Err(err)
            }
        }
    }

    pub fn add_todo_to_table(&self, todo: &Todo) {
        self.view.append_row(todo);
    }

    async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        let response = self.send(self.client.build_list_todos()).await?;
        self.client.parse_list_todos(response)
    }

    async fn create_todo(&self) -> Result<Todo, ApiError> {
        let request = self.client.build_create_todo(&self.form.to_create())?;
        let response = self.send(request).await?;
        self.client.parse_create_todo(response)
    }

    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, path = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        debug!(status = response.status, "received response");
        Ok(response)
    }
}
