//! Browser host for the todo client.
//!
//! # Overview
//! Wires `TodoApp` to the page: rows go into `#todoTable`, input comes from
//! `#todoForm`, outcomes are shown with `alert`, and requests go through
//! `fetch`. `start` runs when the wasm module loads, binds the submit handler
//! and then performs the initial load.

pub mod dom;
pub mod error;
pub mod fetch;

use std::rc::Rc;

use todo_core::{ClientConfig, Notifier, TodoApp, TodoClient, TodoView, Transport};
use wasm_bindgen::prelude::*;
use web_sys::{Event, Window};

pub use dom::{AlertNotifier, DomForm, DomTable};
pub use error::SetupError;
pub use fetch::FetchTransport;

pub type WebApp = TodoApp<FetchTransport, DomTable, DomForm, AlertNotifier>;

/// Build the app over the page in `window`, talking to `config.base_url`.
pub fn build(window: &Window, config: &ClientConfig) -> Result<WebApp, SetupError> {
    let document = window.document().ok_or(SetupError::NoDocument)?;
    Ok(TodoApp::new(
        TodoClient::from_config(config),
        FetchTransport::new(window.clone()),
        DomTable::from_document(&document)?,
        DomForm::from_document(&document)?,
        AlertNotifier::new(window.clone()),
    ))
}

/// Route `submit` on the form to `submit_todo`, suppressing navigation.
///
/// Every submit spawns its own create; nothing stops a second one while the
/// first is in flight.
pub fn bind_submit<T, V, N>(app: &Rc<TodoApp<T, V, DomForm, N>>) -> Result<(), SetupError>
where
    T: Transport + 'static,
    V: TodoView + 'static,
    N: Notifier + 'static,
{
    let handler_app = Rc::clone(app);
    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        let app = Rc::clone(&handler_app);
        wasm_bindgen_futures::spawn_local(async move {
            // Logged and alerted inside.
            let _ = app.submit_todo().await;
        });
    });
    app.form()
        .element()
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // The listener lives as long as the page.
    on_submit.forget();
    Ok(())
}

fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber_wasm::MakeConsoleWriter;

    fmt()
        .with_writer(MakeConsoleWriter::default().map_trace_level_to(tracing::Level::DEBUG))
        .without_time()
        .init();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    init_logging();

    let window = web_sys::window().ok_or(SetupError::NoDocument)?;
    let app = Rc::new(build(&window, &ClientConfig::default())?);
    bind_submit(&app)?;

    wasm_bindgen_futures::spawn_local(async move {
        // List failures are only logged.
        let _ = app.fetch_todos().await;
    });
    Ok(())
}
