//! Execution context for extraction variables.

use anyhow::{Context as _, Result};
use handlebars::Handlebars;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Execution context that holds parameters and selection outputs.
#[derive(Debug)]
pub struct Context {
    /// Plan parameters and named selection outputs
    variables: HashMap<String, Value>,

    /// Values from each selection, in order (accessed via `prev`)
    results: Vec<Vec<String>>,

    /// Path template engine
    handlebars: Handlebars<'static>,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new empty context.
    ///
    /// Templates render in strict mode (missing variables are errors) and
    /// without HTML escaping.
    pub fn new() -> Self {
        let mut hb = Handlebars::new();
        hb.set_strict_mode(true);
        hb.register_escape_fn(handlebars::no_escape);

        Self {
            variables: HashMap::new(),
            results: Vec::new(),
            handlebars: hb,
        }
    }

    /// Create a context seeded with plan parameters.
    pub fn with_params(params: &HashMap<String, Value>) -> Self {
        let mut ctx = Self::new();
        for (name, value) in params {
            ctx.set(name, value.clone());
        }
        ctx
    }

    /// Set a variable.
    pub fn set(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Get a variable.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Record one selection's values.
    pub fn push_result(&mut self, values: Vec<String>) {
        self.results.push(values);
    }

    /// Values of the previous selection.
    pub fn prev(&self) -> Option<&[String]> {
        self.results.last().map(Vec::as_slice)
    }

    /// Values of every selection so far.
    pub fn results(&self) -> &[Vec<String>] {
        &self.results
    }

    /// Render a path template against the current variables.
    pub fn render_path(&self, template: &str) -> Result<String> {
        self.handlebars
            .render_template(template, &self.as_json())
            .with_context(|| format!("Failed to render path template `{}`", template))
    }

    /// Get all variables as a JSON object.
    ///
    /// `prev` and `results` hold the previous and all selection values.
    pub fn as_json(&self) -> Value {
        let mut data = Map::new();

        for (k, v) in &self.variables {
            data.insert(k.clone(), v.clone());
        }

        if let Some(prev) = self.prev() {
            data.insert("prev".to_string(), Value::from(prev.to_vec()));
        }

        data.insert(
            "results".to_string(),
            Value::Array(self.results.iter().cloned().map(Value::from).collect()),
        );

        Value::Object(data)
    }
}
