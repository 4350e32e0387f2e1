//! Text-level normalizers applied to a document before it is parsed.

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::jsonld;
use crate::model::iri::{is_absolute, split_compact};
use crate::namespace::NamespaceRegistry;

/// A document rewrite that runs before decoding.
pub trait JsonPreprocessor: Send + Sync {
    /// Name used in logs and validation errors.
    fn name(&self) -> &str;

    fn preprocess(&self, input: &str) -> Result<String>;
}

struct Stage {
    preprocessor: Box<dyn JsonPreprocessor>,
    validate: bool,
    /// Installed from options; rebuilt when the registry changes.
    type_names: bool,
}

/// Ordered list of preprocessors. Each stage may check that its output still
/// parses as JSON-LD.
#[derive(Default)]
pub struct PreprocessingPipeline {
    stages: Vec<Stage>,
}

impl PreprocessingPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, preprocessor: impl JsonPreprocessor + 'static, validate: bool) {
        self.stages.push(Stage {
            preprocessor: Box::new(preprocessor),
            validate,
            type_names: false,
        });
    }

    /// Append a [`TypeNamePreprocessor`] that follows [`rebind`](Self::rebind).
    pub fn push_type_names(&mut self, registry: &NamespaceRegistry, validate: bool) {
        self.stages.push(Stage {
            preprocessor: Box::new(TypeNamePreprocessor::new(registry.clone())),
            validate,
            type_names: true,
        });
    }

    /// Point every stage added by [`push_type_names`](Self::push_type_names)
    /// at `registry`. Stages added with [`push`](Self::push) are untouched.
    pub fn rebind(&mut self, registry: &NamespaceRegistry) {
        for stage in self.stages.iter_mut().filter(|stage| stage.type_names) {
            stage.preprocessor = Box::new(TypeNamePreprocessor::new(registry.clone()));
        }
    }

    pub fn clear(&mut self) {
        self.stages.clear();
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Run every stage in insertion order.
    pub fn run(&self, input: &str, registry: &NamespaceRegistry) -> Result<String> {
        let mut current = input.to_string();
        for stage in &self.stages {
            let name = stage.preprocessor.name();
            current = stage.preprocessor.preprocess(&current)?;
            if stage.validate {
                jsonld::parse(&current, registry).map_err(|source| {
                    Error::PreprocessingValidation {
                        preprocessor: name.to_string(),
                        source,
                    }
                })?;
            }
            debug!(preprocessor = name, validated = stage.validate, "preprocessed document");
        }
        Ok(current)
    }
}

/// Rewrites `@type` values and property keys into `prefix:local` form.
///
/// Absolute URIs in a known namespace are compacted, bare names get the
/// root prefix, and names already carrying a known prefix are kept. Keywords,
/// `@context` contents and terms defined by the document's own context are
/// left alone.
pub struct TypeNamePreprocessor {
    registry: NamespaceRegistry,
}

impl TypeNamePreprocessor {
    pub fn new(registry: NamespaceRegistry) -> Self {
        Self { registry }
    }

    fn rewrite(&self, value: Value, terms: &HashSet<String>) -> Value {
        match value {
            Value::Array(items) => Value::Array(
                items.into_iter().map(|item| self.rewrite(item, terms)).collect(),
            ),
            Value::Object(map) => Value::Object(self.rewrite_object(map, terms)),
            other => other,
        }
    }

    fn rewrite_object(&self, map: Map<String, Value>, inherited: &HashSet<String>) -> Map<String, Value> {
        let mut terms = inherited.clone();
        if let Some(Value::Object(context)) = map.get("@context") {
            terms.extend(context.keys().filter(|k| !k.starts_with('@')).cloned());
        }
        map.into_iter()
            .map(|(key, value)| match key.as_str() {
                "@context" => (key, value),
                "@type" => {
                    let value = self.rewrite_types(value, &terms);
                    (key, value)
                }
                k if k.starts_with('@') => {
                    let value = self.rewrite(value, &terms);
                    (key, value)
                }
                _ => (self.compact(&key, &terms), self.rewrite(value, &terms)),
            })
            .collect()
    }

    fn rewrite_types(&self, value: Value, terms: &HashSet<String>) -> Value {
        match value {
            Value::String(name) => Value::String(self.compact(&name, terms)),
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.rewrite_types(item, terms))
                    .collect(),
            ),
            other => other,
        }
    }

    fn compact(&self, name: &str, terms: &HashSet<String>) -> String {
        if name.starts_with("_:") || terms.contains(name) {
            return name.to_string();
        }
        if let Some((prefix, _)) = split_compact(name) {
            if self.registry.namespace(prefix).is_some() || terms.contains(prefix) {
                return name.to_string();
            }
        }
        if is_absolute(name) {
            return self.registry.canonicalize(name).0;
        }
        if name.is_empty() || name.contains(':') {
            return name.to_string();
        }
        format!("{}:{name}", self.registry.root_prefix())
    }
}

impl Default for TypeNamePreprocessor {
    fn default() -> Self {
        Self::new(NamespaceRegistry::infomodel().clone())
    }
}

impl JsonPreprocessor for TypeNamePreprocessor {
    fn name(&self) -> &str {
        "type-name"
    }

    fn preprocess(&self, input: &str) -> Result<String> {
        let document: Value = serde_json::from_str(input)?;
        let rewritten = self.rewrite(document, &HashSet::new());
        Ok(serde_json::to_string(&rewritten)?)
    }
}
