//! Extraction plan execution.

use crate::{Context, Document, Extraction, Path, Selection};
use anyhow::{Context as _, Result};
use serde_json::Value;

/// Result of running an extraction plan.
#[derive(Debug)]
pub struct ExtractionOutcome {
    /// Final values (last selection's values)
    pub values: Vec<String>,

    /// Per-selection results
    pub selection_results: Vec<SelectionResult>,

    /// Final context state
    pub context: Context,

    /// Total execution time in milliseconds
    pub total_ms: f64,
}

impl ExtractionOutcome {
    /// Values stored under a selection's `output` name.
    pub fn output(&self, name: &str) -> Option<Vec<String>> {
        let values = self.context.get(name)?.as_array()?;
        values
            .iter()
            .map(|v| v.as_str().map(str::to_string))
            .collect()
    }
}

/// Result of a single selection.
#[derive(Debug)]
pub struct SelectionResult {
    /// Selection index (0-based)
    pub index: usize,

    /// Selection that was evaluated
    pub selection: Selection,

    /// Path after template rendering
    pub path: Path,

    /// Extracted values, in document order
    pub values: Vec<String>,

    /// Evaluation time in milliseconds
    pub duration_ms: f64,
}

/// Run an extraction plan against a document.
///
/// The document is parsed once with the plan's options, then every
/// selection is rendered, tokenized and evaluated in order. Named outputs
/// become variables visible to later selections' templates.
///
/// # Returns
/// * `Ok(ExtractionOutcome)` - Every selection was evaluated
/// * `Err(...)` - The document or a selection path was rejected (fail-fast)
///
/// # Example
///
/// ```rust
/// use fgp_xmlpath::{Extraction, Selection, execute};
///
/// let extraction = Extraction::new("example")
///     .add(Selection::at("/feed/entry/title").output("titles"))
///     .build();
///
/// let outcome = execute(&extraction, "<feed><entry><title>Hi</title></entry></feed>")?;
/// assert_eq!(outcome.values, vec!["Hi"]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn execute(extraction: &Extraction, document: &str) -> Result<ExtractionOutcome> {
    tracing::info!(
        extraction = %extraction.name,
        selections = extraction.selections.len(),
        "Starting extraction"
    );

    let start = std::time::Instant::now();

    let document = Document::parse_with(document, &extraction.options)
        .with_context(|| format!("Extraction {} could not parse its document", extraction.name))?;

    let mut ctx = Context::with_params(&extraction.params);
    let mut selection_results = Vec::new();

    for (index, selection) in extraction.selections.iter().enumerate() {
        let selection_start = std::time::Instant::now();

        let rendered = if selection.is_templated() {
            ctx.render_path(&selection.path)
                .with_context(|| format!("Selection {} ({}) failed", index, selection.path))?
        } else {
            selection.path.clone()
        };

        let path = Path::parse(&rendered)
            .with_context(|| format!("Selection {} ({}) failed", index, selection.path))?;

        tracing::debug!(selection = index, path = %path, "Evaluating selection");

        let values = path.evaluate(document.root()).into_values();
        let selection_ms = selection_start.elapsed().as_secs_f64() * 1000.0;

        tracing::debug!(
            selection = index,
            matched = values.len(),
            duration_ms = selection_ms,
            "Selection completed"
        );

        ctx.push_result(values.clone());

        if let Some(ref output_name) = selection.output {
            ctx.set(output_name, Value::from(values.clone()));
        }

        selection_results.push(SelectionResult {
            index,
            selection: selection.clone(),
            path,
            values,
            duration_ms: selection_ms,
        });
    }

    let total_ms = start.elapsed().as_secs_f64() * 1000.0;

    tracing::info!(
        extraction = %extraction.name,
        total_ms = total_ms,
        "Extraction completed"
    );

    let values = ctx.prev().map(<[String]>::to_vec).unwrap_or_default();

    Ok(ExtractionOutcome {
        values,
        selection_results,
        context: ctx,
        total_ms,
    })
}
