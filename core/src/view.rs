//! Rendering, form and notification seams, plus in-memory implementations.
//!
//! # Design
//! All methods take `&self`: the table body is the only shared mutable
//! resource and it is only ever appended to, so a host can hand the same
//! view to overlapping operations. The in-memory types use `RefCell` the way
//! the DOM gives interior mutability to the browser host.

use std::cell::RefCell;
use std::fmt;

use crate::types::{CreateTodo, Todo};

/// An append-only table of todos.
pub trait TodoView {
    /// Add one row at the end with the todo's id, title and description as
    /// plain text. Existing rows are never touched.
    fn append_row(&self, todo: &Todo);
}

/// The input form a todo is created from.
pub trait TodoForm {
    fn title(&self) -> String;
    fn description(&self) -> String;
    /// Clear every field back to the empty string.
    fn reset(&self);

    /// Current field values as a create payload, untrimmed.
    fn to_create(&self) -> CreateTodo {
        CreateTodo::new(self.title(), self.description())
    }
}

/// User-visible outcome of a create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Created,
    CreateFailed,
}

impl Notification {
    pub fn message(self) -> &'static str {
        match self {
            Notification::Created => "Todo created successfully!",
            Notification::CreateFailed => "Failed to create todo",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// One rendered row. Cells hold the text exactly as it will be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub title: String,
    pub description: String,
}

impl From<&Todo> for TableRow {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.to_string(),
            title: todo.title.clone(),
            description: todo.description.clone(),
        }
    }
}

impl TableRow {
    fn cells(&self) -> [&str; 3] {
        [&self.id, &self.title, &self.description]
    }
}

const HEADERS: [&str; 3] = ["ID", "Title", "Description"];

/// In-memory table body.
#[derive(Debug, Default)]
pub struct TodoTable {
    rows: RefCell<Vec<TableRow>>,
}

impl TodoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.rows.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.borrow().is_empty()
    }

    /// Column-aligned plain text, header first.
    pub fn render_text(&self) -> String {
        let rows = self.rows.borrow();
        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in rows.iter() {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        push_text_line(&mut out, HEADERS, widths);
        let rule = widths.map(|w| "-".repeat(w));
        push_text_line(&mut out, rule.each_ref().map(String::as_str), widths);
        for row in rows.iter() {
            push_text_line(&mut out, row.cells(), widths);
        }
        out
    }
}

impl TodoView for TodoTable {
    fn append_row(&self, todo: &Todo) {
        self.rows.borrow_mut().push(TableRow::from(todo));
    }
}

fn push_text_line(out: &mut String, cells: [&str; 3], widths: [usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// In-memory form with a title and a description field.
#[derive(Debug, Default)]
pub struct FormFields {
    title: RefCell<String>,
    description: RefCell<String>,
}

impl FormFields {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: RefCell::new(title.into()),
            description: RefCell::new(description.into()),
        }
    }

    pub fn set_title(&self, title: impl Into<String>) {
        *self.title.borrow_mut() = title.into();
    }

    pub fn set_description(&self, description: impl Into<String>) {
        *self.description.borrow_mut() = description.into();
    }
}

impl TodoForm for FormFields {
    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn description(&self) -> String {
        self.description.borrow().clone()
    }

    fn reset(&self) {
        self.title.borrow_mut().clear();
        self.description.borrow_mut().clear();
    }
}
