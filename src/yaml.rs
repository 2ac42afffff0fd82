//! YAML extraction plan parser.

use crate::Extraction;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Parse an extraction plan from a YAML string.
///
/// # Example
///
/// ```rust
/// use fgp_xmlpath::parse_yaml;
///
/// let yaml = r#"
/// name: books
/// params:
///   section: fiction
/// selections:
///   - path: "/catalog/{{ section }}/book/title"
///     output: titles
/// "#;
///
/// let extraction = parse_yaml(yaml).unwrap();
/// assert_eq!(extraction.name, "books");
/// assert_eq!(extraction.selections.len(), 1);
/// ```
pub fn parse_yaml(yaml: &str) -> Result<Extraction> {
    let extraction: Extraction =
        serde_yaml::from_str(yaml).context("Failed to parse extraction YAML")?;

    validate(&extraction)?;

    Ok(extraction)
}

/// Load and parse an extraction plan from a YAML file.
///
/// # Example
///
/// ```rust,no_run
/// use fgp_xmlpath::yaml::load_file;
///
/// let extraction = load_file("books.yaml")?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn load_file(path: impl AsRef<Path>) -> Result<Extraction> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read extraction file: {}", path.display()))?;

    parse_yaml(&content)
        .with_context(|| format!("Failed to parse extraction file: {}", path.display()))
}

/// Validate an extraction plan.
fn validate(extraction: &Extraction) -> Result<()> {
    if extraction.name.is_empty() {
        anyhow::bail!("Extraction name cannot be empty");
    }

    if extraction.selections.is_empty() {
        anyhow::bail!("Extraction must have at least one selection");
    }

    let mut outputs = HashSet::new();
    for (i, selection) in extraction.selections.iter().enumerate() {
        if selection.path.trim().is_empty() {
            anyhow::bail!("Selection {} has empty path", i);
        }
        if let Some(ref output) = selection.output {
            if output.is_empty() {
                anyhow::bail!("Selection {} has empty output name", i);
            }
            if !outputs.insert(output.as_str()) {
                anyhow::bail!("Selection {} reuses output name '{}'", i, output);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_extraction() {
        let yaml = r#"
name: feed-titles
description: Titles of every feed entry
selections:
  - path: /feed/entry/title
    output: titles
"#;

        let extraction = parse_yaml(yaml).unwrap();
        assert_eq!(extraction.name, "feed-titles");
        assert_eq!(
            extraction.description,
            Some("Titles of every feed entry".to_string())
        );
        assert_eq!(extraction.selections.len(), 1);
        assert_eq!(extraction.selections[0].path, "/feed/entry/title");
        assert_eq!(extraction.selections[0].output, Some("titles".to_string()));
        assert!(!extraction.options.strip_declarations);
    }

    #[test]
    fn test_parse_options_and_params() {
        let yaml = r#"
name: legacy
options:
  strip_declarations: true
params:
  section: poetry
selections:
  - path: "/catalog/{{ section }}/book/title"
"#;

        let extraction = parse_yaml(yaml).unwrap();
        assert!(extraction.options.strip_declarations);
        assert_eq!(
            extraction.params.get("section"),
            Some(&serde_json::Value::from("poetry"))
        );

        let document = "<!DOCTYPE catalog>\n\
            <catalog><poetry><book><title>Ariel</title></book></poetry></catalog>";
        let outcome = extraction.run(document).unwrap();
        assert_eq!(outcome.values, vec!["Ariel"]);
    }

    #[test]
    fn test_validate_empty_name() {
        let yaml = r#"
name: ""
selections:
  - path: /r/a
"#;

        let result = parse_yaml(yaml);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("name cannot be empty"));
    }

    #[test]
    fn test_validate_no_selections() {
        let yaml = r#"
name: empty
selections: []
"#;

        let result = parse_yaml(yaml);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("at least one selection"));
    }

    #[test]
    fn test_validate_duplicate_output() {
        let yaml = r#"
name: dup
selections:
  - path: /r/a
    output: values
  - path: /r/b
    output: values
"#;

        let result = parse_yaml(yaml);
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("reuses output name"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file("/nonexistent/extraction.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read extraction file"));
    }
}
