//! Error types for document parsing and path queries.

use thiserror::Error;

/// The document text could not be turned into an element tree.
#[derive(Debug, Error)]
pub enum DocumentParseError {
    /// The underlying XML reader rejected the markup.
    #[error("malformed markup at byte {position}: {source}")]
    Markup {
        position: usize,
        #[source]
        source: quick_xml::Error,
    },

    /// An element or text run was not valid UTF-8.
    #[error("invalid UTF-8 in document: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Input ended while an element was still open.
    #[error("element <{0}> is never closed")]
    Unclosed(String),

    /// A closing tag appeared with no open element.
    #[error("closing tag </{0}> has no matching open element")]
    UnexpectedClose(String),

    /// No element found at all.
    #[error("document has no root element")]
    NoRoot,

    /// A second top-level element followed the root.
    #[error("element <{0}> appears after the root element was closed")]
    MultipleRoots(String),

    /// Non-whitespace text outside of the root element.
    #[error("text outside of the root element")]
    TextOutsideRoot,
}

/// Errors returned by [`crate::query`] and friends.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("document parse error: {0}")]
    DocumentParse(#[from] DocumentParseError),

    #[error("invalid path `{path}`: {reason}")]
    InvalidPath { path: String, reason: &'static str },
}

impl QueryError {
    pub(crate) fn invalid_path(path: &str, reason: &'static str) -> Self {
        QueryError::InvalidPath {
            path: path.to_string(),
            reason,
        }
    }
}
