//! Errors raised by browser adapters.

/// A browser API call failed or is not available.
#[derive(Debug, thiserror::Error)]
pub enum BrowserError {
    /// No `window`/`document` (non-browser build or worker context).
    #[error("browser environment is unavailable")]
    Unavailable,
    /// A JavaScript call threw; holds the exception message.
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for BrowserError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(crate::util::js::error_message(&value))
    }
}
