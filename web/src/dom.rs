//! DOM-backed view, form and notifier.
//!
//! The page must provide `#todoTable` (a table with a `tbody`) and
//! `#todoForm` containing inputs `#title` and `#description`.

use todo_core::{Notification, Notifier, Todo, TodoForm, TodoView};
use tracing::error;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlFormElement, HtmlInputElement, HtmlTableElement, HtmlTableRowElement,
    HtmlTableSectionElement, Window,
};

use crate::error::{describe, SetupError};

pub const TABLE_ID: &str = "todoTable";
pub const FORM_ID: &str = "todoForm";
pub const TITLE_ID: &str = "title";
pub const DESCRIPTION_ID: &str = "description";

fn element<T: JsCast>(document: &Document, id: &'static str) -> Result<T, SetupError> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or(SetupError::MissingElement(id))
}

/// The first `tbody` of `#todoTable`.
#[derive(Debug, Clone)]
pub struct DomTable {
    body: HtmlTableSectionElement,
}

impl DomTable {
    pub fn from_document(document: &Document) -> Result<Self, SetupError> {
        let table: HtmlTableElement = element(document, TABLE_ID)?;
        let body = table
            .t_bodies()
            .item(0)
            .and_then(|el| el.dyn_into::<HtmlTableSectionElement>().ok())
            .ok_or(SetupError::MissingElement("todoTable tbody"))?;
        Ok(Self { body })
    }

    pub fn body(&self) -> &HtmlTableSectionElement {
        &self.body
    }

    fn try_append(&self, todo: &Todo) -> Result<(), wasm_bindgen::JsValue> {
        let row: HtmlTableRowElement = self.body.insert_row()?.dyn_into()?;
        for text in [todo.id.to_string(), todo.title.clone(), todo.description.clone()] {
            // textContent, never innerHTML: record fields are not markup.
            row.insert_cell()?.set_text_content(Some(&text));
        }
        Ok(())
    }
}

impl TodoView for DomTable {
    fn append_row(&self, todo: &Todo) {
        if let Err(err) = self.try_append(todo) {
            error!(id = %todo.id, error = %describe(&err), "failed to append row");
        }
    }
}

/// `#todoForm` and its two inputs.
#[derive(Debug, Clone)]
pub struct DomForm {
    form: HtmlFormElement,
    title: HtmlInputElement,
    description: HtmlInputElement,
}

impl DomForm {
    pub fn from_document(document: &Document) -> Result<Self, SetupError> {
        Ok(Self {
            form: element(document, FORM_ID)?,
            title: element(document, TITLE_ID)?,
            description: element(document, DESCRIPTION_ID)?,
        })
    }

    pub fn element(&self) -> &HtmlFormElement {
        &self.form
    }
}

impl TodoForm for DomForm {
    fn title(&self) -> String {
        self.title.value()
    }

    fn description(&self) -> String {
        self.description.value()
    }

    fn reset(&self) {
        self.form.reset();
    }
}

/// Blocking `window.alert`.
#[derive(Debug, Clone)]
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(err) = self.window.alert_with_message(notification.message()) {
            error!(error = %describe(&err), "alert failed");
        }
    }
}
