//! Error types for catalog page handlers
//!
//! Every handler returns `Result<_, UiError>`. A failure only aborts the
//! handler invocation that raised it; the browser entry point logs it and
//! leaves the other handlers wired.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UiError {
    /// An element the page contract requires is not in the document
    #[error("Element not found: #{id}")]
    MissingElement { id: String },

    /// A plant list item lacks a required child field
    #[error("Plant item {item} has no .{class} field")]
    MissingField { item: usize, class: String },

    /// A page-global data array the chart needs was not injected
    #[error("Chart data array not found: {name}")]
    MissingData { name: String },

    /// The charting library rejected or could not build a chart
    #[error("Chart error: {0}")]
    Chart(String),

    /// DOM contract override could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// A JavaScript call threw
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl UiError {
    pub fn missing_element(id: impl Into<String>) -> Self {
        UiError::MissingElement { id: id.into() }
    }
}

pub type Result<T> = std::result::Result<T, UiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_element_message() {
        let err = UiError::missing_element("image_viewer");
        assert_eq!(err.to_string(), "Element not found: #image_viewer");
    }

    #[test]
    fn test_config_error_from_json() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: UiError = parse.unwrap_err().into();
        assert!(matches!(err, UiError::Config(_)));
    }
}
