use thiserror::Error;

/// Upstream graph violated a contract the normalizer relies on.
///
/// Shapes that are merely unsupported never end up here; they render as the
/// unknown type instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("parameter `{parameter}` of `{function}` has no type")]
    MissingParameterType { function: String, parameter: String },

    #[error("`{reference}` takes exactly one type argument, found {found}")]
    EventTypeArguments { reference: String, found: usize },
}

/// Failure while reading a project document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io { path: String, #[source] source: std::io::Error },

    #[error("at JSON path {path} → {message}")]
    Json { path: String, message: String },

    #[error("invalid input pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },

    #[error("glob pattern matched no files: {0}")]
    NoMatches(String),

    #[error("JSON pointer {pointer} selects nothing in {path}")]
    Pointer { pointer: String, path: String },

    #[error("jq filter failed: {0}")]
    Filter(String),
}
