//! # fgp-xmlpath
//!
//! Slash-path text extraction from XML documents for FGP workflows.
//!
//! A path like `/root/a/b` walks the element tree one tag at a time. Where a
//! tag matches a single child the walk simply descends. Where it matches
//! several siblings, the rest of the path is resolved under each sibling
//! independently and the results are concatenated in document order.
//! Branches that do not resolve are dropped from the result.
//!
//! ## Quick Start
//!
//! ```rust
//! use fgp_xmlpath::query;
//!
//! let doc = "<root><item>a</item><item>b</item></root>";
//! assert_eq!(query(doc, "/root/item")?.values(), &["a", "b"]);
//! # Ok::<(), fgp_xmlpath::QueryError>(())
//! ```
//!
//! ## Extraction plans
//!
//! Several selections can run against one document, with templated paths:
//!
//! ```yaml
//! name: books
//! params:
//!   section: fiction
//! selections:
//!   - path: "/catalog/{{ section }}/book/title"
//!     output: titles
//!   - path: /catalog/updated
//! ```

mod context;
mod error;
mod executor;
mod extraction;
mod extractor;
mod navigator;
mod path;
mod query;
mod selection;
mod tree;
pub mod yaml;

pub use context::Context;
pub use error::{DocumentParseError, QueryError};
pub use executor::{execute, ExtractionOutcome, SelectionResult};
pub use extraction::{Extraction, ExtractionBuilder};
pub use path::Path;
pub use query::{query, query_with, QueryResult};
pub use selection::{Selection, SelectionBuilder};
pub use tree::{strip_declarations, Document, Node, ParseOptions};
pub use yaml::parse_yaml;

/// Re-export common types
pub use serde_json::Value;
