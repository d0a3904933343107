use std::fmt;

use wasm_bindgen::JsValue;

/// Why the page could not be wired up.
#[derive(Debug)]
pub enum SetupError {
    /// No global `window` / `document` (not running in a browser).
    NoDocument,

    /// An element the page must provide is absent or has the wrong type.
    MissingElement(&'static str),

    /// A DOM call threw.
    Js(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoDocument => write!(f, "no document available"),
            SetupError::MissingElement(what) => write!(f, "missing element: {what}"),
            SetupError::Js(msg) => write!(f, "DOM error: {msg}"),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<JsValue> for SetupError {
    fn from(value: JsValue) -> Self {
        SetupError::Js(describe(&value))
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Best-effort text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
