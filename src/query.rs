//! Query engine: tokenize, parse, navigate, collect.

use crate::error::QueryError;
use crate::extractor;
use crate::navigator::{descend, Outcome, ResidualPath};
use crate::path::Path;
use crate::tree::{Document, Node, ParseOptions};
use serde::Serialize;

/// Text values reached by a query, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryResult {
    values: Vec<String>,
}

impl QueryResult {
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.values.iter()
    }
}

impl IntoIterator for QueryResult {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a QueryResult {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl From<QueryResult> for Vec<String> {
    fn from(result: QueryResult) -> Self {
        result.values
    }
}

/// Extract the text values `path` reaches in `document_text`.
///
/// The path is checked before the document is parsed. A path that matches
/// nothing gives an empty result, not an error.
///
/// # Example
///
/// ```rust
/// use fgp_xmlpath::query;
///
/// let doc = "<root><a><b>x</b></a><a><b>y</b></a></root>";
/// let result = query(doc, "/root/a/b")?;
/// assert_eq!(result.values(), &["x", "y"]);
/// # Ok::<(), fgp_xmlpath::QueryError>(())
/// ```
pub fn query(document_text: &str, path: &str) -> Result<QueryResult, QueryError> {
    query_with(document_text, path, &ParseOptions::default())
}

/// Like [`query`], with explicit parser options.
pub fn query_with(
    document_text: &str,
    path: &str,
    options: &ParseOptions,
) -> Result<QueryResult, QueryError> {
    let path = Path::parse(path)?;
    let document = Document::parse_with(document_text, options)?;
    Ok(path.evaluate(document.root()))
}

pub(crate) fn evaluate(root: &Node, segments: &[String]) -> QueryResult {
    let mut values = Vec::new();

    match descend(root, ResidualPath::new(segments)) {
        Outcome::Target(node) => values.extend(node.text().map(str::to_string)),
        Outcome::Branch { siblings, residual } => {
            extractor::extract(siblings, residual, &mut values)
        }
        Outcome::NoMatch => {}
    }

    QueryResult { values }
}
