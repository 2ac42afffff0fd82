//! Slash-delimited element paths.

use crate::error::QueryError;
use crate::query::{self, QueryResult};
use crate::tree::Node;
use std::fmt;
use std::str::FromStr;

/// Characters that belong to XPath syntax this grammar does not support.
const UNSUPPORTED: &[char] = &[
    '[', ']', '(', ')', '@', '*', '=', '|', ',', '\'', '"', '<', '>',
];

/// A tokenized path such as `/root/a/b`.
///
/// The first segment names the root element and is never matched; it is
/// kept only for display. `segments()` holds everything after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    root: String,
    segments: Vec<String>,
}

impl Path {
    /// Tokenize a path string.
    ///
    /// Empty segments (`a//b`, trailing `/`) are dropped, so `/root/a` and
    /// `root/a/` are the same path.
    pub fn parse(path: &str) -> Result<Self, QueryError> {
        if path.trim().is_empty() {
            return Err(QueryError::invalid_path(path, "path is empty"));
        }

        let mut parts = path.split('/').filter(|segment| !segment.is_empty());

        let root = parts
            .next()
            .ok_or_else(|| QueryError::invalid_path(path, "path has no segments"))?;
        validate_segment(path, root)?;

        let segments = parts
            .map(|segment| validate_segment(path, segment).map(|_| segment.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            root: root.to_string(),
            segments,
        })
    }

    /// Name of the root segment.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Segments below the root, in order.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True when the path targets the root element itself.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Evaluate this path against an already-parsed root element.
    pub fn evaluate(&self, root: &Node) -> QueryResult {
        query::evaluate(root, &self.segments)
    }
}

fn validate_segment(path: &str, segment: &str) -> Result<(), QueryError> {
    if segment.chars().any(char::is_whitespace) {
        return Err(QueryError::invalid_path(path, "segment contains whitespace"));
    }
    if segment.contains(UNSUPPORTED)
        || segment.contains("::")
        || segment == "."
        || segment == ".."
    {
        return Err(QueryError::invalid_path(
            path,
            "segment uses unsupported XPath syntax",
        ));
    }
    Ok(())
}

impl FromStr for Path {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Path::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.root)?;
        for segment in &self.segments {
            write!(f, "/{}", segment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_segment_is_dropped() {
        let path = Path::parse("/root/a/b").unwrap();
        assert_eq!(path.root(), "root");
        assert_eq!(path.segments(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_root_only() {
        let path = Path::parse("/root").unwrap();
        assert!(path.is_root());
        assert!(path.segments().is_empty());
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        let path: Path = "//root//a///b/".parse().unwrap();
        assert_eq!(path.segments(), &["a".to_string(), "b".to_string()]);
        assert_eq!(path.to_string(), "/root/a/b");
    }

    #[test]
    fn test_prefixed_names_are_plain_segments() {
        let path = Path::parse("/soap:Envelope/soap:Body").unwrap();
        assert_eq!(path.segments(), &["soap:Body".to_string()]);
    }

    #[test]
    fn test_invalid_paths() {
        for bad in [
            "",
            "   ",
            "/",
            "///",
            "/root/a b",
            "/root/item[1]",
            "/root/@id",
            "/root/*",
            "/root/..",
            "/root/child::a",
        ] {
            assert!(
                matches!(Path::parse(bad), Err(QueryError::InvalidPath { .. })),
                "expected `{}` to be rejected",
                bad
            );
        }
    }
}
