//! Extraction plan definition and builder.

use crate::selection::{Selection, SelectionBuilder};
use crate::tree::ParseOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A named list of selections run against one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    /// Plan name
    pub name: String,

    /// Description of what this plan extracts
    #[serde(default)]
    pub description: Option<String>,

    /// Parser options applied to the document
    #[serde(default)]
    pub options: ParseOptions,

    /// Values available to path templates
    #[serde(default)]
    pub params: HashMap<String, Value>,

    /// Selections to evaluate, in order
    pub selections: Vec<Selection>,
}

impl Extraction {
    /// Create a new extraction plan with a name.
    pub fn new(name: &str) -> ExtractionBuilder {
        ExtractionBuilder::new(name)
    }

    /// Run this plan against `document`.
    pub fn run(&self, document: &str) -> anyhow::Result<crate::ExtractionOutcome> {
        crate::execute(self, document)
    }
}

/// Builder for creating extraction plans.
#[derive(Debug, Clone)]
pub struct ExtractionBuilder {
    extraction: Extraction,
}

impl ExtractionBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            extraction: Extraction {
                name: name.to_string(),
                description: None,
                options: ParseOptions::default(),
                params: HashMap::new(),
                selections: Vec::new(),
            },
        }
    }

    pub fn description(mut self, desc: &str) -> Self {
        self.extraction.description = Some(desc.to_string());
        self
    }

    /// Strip `<!` declaration lines before parsing.
    pub fn strip_declarations(mut self) -> Self {
        self.extraction.options.strip_declarations = true;
        self
    }

    /// Add a template parameter.
    pub fn with_param<V: Into<Value>>(mut self, key: &str, value: V) -> Self {
        self.extraction.params.insert(key.to_string(), value.into());
        self
    }

    /// Add a selection.
    pub fn add<S: Into<Selection>>(mut self, selection: S) -> Self {
        self.extraction.selections.push(selection.into());
        self
    }

    /// Add a selection builder (convenience).
    pub fn select(self, selection: SelectionBuilder) -> Self {
        self.add(selection.build())
    }

    pub fn build(self) -> Extraction {
        self.extraction
    }

    /// Build and run against `document`.
    pub fn run(self, document: &str) -> anyhow::Result<crate::ExtractionOutcome> {
        self.build().run(document)
    }
}

impl From<ExtractionBuilder> for Extraction {
    fn from(builder: ExtractionBuilder) -> Self {
        builder.build()
    }
}
