//! Selection definitions.

use serde::{Deserialize, Serialize};

/// A single path to extract within an extraction plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Path to evaluate (e.g., "/catalog/book/title").
    ///
    /// May contain Handlebars placeholders resolved at run time:
    /// `/catalog/{{ section }}/title`
    pub path: String,

    /// Variable name to store the values under (optional)
    #[serde(default)]
    pub output: Option<String>,

    /// Description for logging/debugging
    #[serde(default)]
    pub description: Option<String>,
}

impl Selection {
    /// Start a selection for `path`.
    pub fn at(path: &str) -> SelectionBuilder {
        SelectionBuilder::new(path)
    }

    /// True when the path needs rendering before use.
    pub fn is_templated(&self) -> bool {
        self.path.contains("{{") && self.path.contains("}}")
    }
}

/// Builder for creating selections.
#[derive(Debug, Clone)]
pub struct SelectionBuilder {
    selection: Selection,
}

impl SelectionBuilder {
    pub fn new(path: &str) -> Self {
        Self {
            selection: Selection {
                path: path.to_string(),
                output: None,
                description: None,
            },
        }
    }

    /// Set the output variable name.
    pub fn output(mut self, name: &str) -> Self {
        self.selection.output = Some(name.to_string());
        self
    }

    pub fn description(mut self, desc: &str) -> Self {
        self.selection.description = Some(desc.to_string());
        self
    }

    pub fn build(self) -> Selection {
        self.selection
    }
}

impl From<SelectionBuilder> for Selection {
    fn from(builder: SelectionBuilder) -> Self {
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_builder() {
        let selection = Selection::at("/feed/entry/title")
            .output("titles")
            .description("entry titles")
            .build();

        assert_eq!(selection.path, "/feed/entry/title");
        assert_eq!(selection.output, Some("titles".to_string()));
        assert!(!selection.is_templated());
    }

    #[test]
    fn test_templated_path() {
        let selection: Selection = Selection::at("/catalog/{{ section }}/title").into();
        assert!(selection.is_templated());
    }
}
