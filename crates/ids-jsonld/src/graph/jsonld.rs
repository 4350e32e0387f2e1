//! JSON-LD → [`Graph`] reader.
//!
//! Covers the subset of JSON-LD 1.1 that information-model documents use:
//! embedded contexts with prefix and term definitions, `@vocab`, `@id`,
//! `@type`, `@graph`, `@list`/`@set`, nested and blank nodes, value objects,
//! and native JSON scalars. `@list` is flattened into repeated statements
//! (no `rdf:List` encoding). Remote contexts are never fetched.

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

use super::{Graph, GraphError, Term};
use crate::model::iri::{is_absolute, split_compact};
use crate::model::ontology::{standard, xsd};
use crate::namespace::NamespaceRegistry;

type Result<T> = std::result::Result<T, GraphError>;

/// Parse `text` into a graph.
///
/// The active context starts from the prefixes of `registry` with the root
/// namespace as `@vocab`, so documents without an `@context` still resolve
/// bare keys and type names.
pub fn parse(text: &str, registry: &NamespaceRegistry) -> Result<Graph> {
    let document: Value = serde_json::from_str(text)?;
    let mut reader = Reader::default();
    let context = Context::from_registry(registry);
    reader.read_document(&document, &context)?;
    debug!(triples = reader.graph.len(), "parsed JSON-LD document");
    Ok(reader.graph)
}

#[derive(Clone, Debug)]
struct TermDefinition {
    iri: String,
    /// `@id` for node coercion, otherwise a datatype IRI.
    coerce: Option<String>,
}

#[derive(Clone, Debug, Default)]
struct Context {
    terms: HashMap<String, TermDefinition>,
    vocab: Option<String>,
}

impl Context {
    fn from_registry(registry: &NamespaceRegistry) -> Self {
        let terms = registry
            .iter()
            .map(|(prefix, ns)| {
                (
                    prefix.to_string(),
                    TermDefinition {
                        iri: ns.to_string(),
                        coerce: None,
                    },
                )
            })
            .collect();
        Self {
            terms,
            vocab: registry.root_namespace().map(str::to_string),
        }
    }

    /// Apply a local `@context` value on top of this one.
    fn merge(&self, local: &Value) -> Result<Context> {
        let mut ctx = self.clone();
        match local {
            Value::Null => ctx = Context::default(),
            Value::String(url) => debug!(context = %url, "ignoring remote @context"),
            Value::Array(items) => {
                for item in items {
                    ctx = ctx.merge(item)?;
                }
            }
            Value::Object(map) => ctx.define_all(map)?,
            other => {
                return Err(GraphError::InvalidStructure(format!(
                    "@context must be an object, array, string or null, got {other}"
                )))
            }
        }
        Ok(ctx)
    }

    fn define_all(&mut self, map: &Map<String, Value>) -> Result<()> {
        match map.get("@vocab") {
            Some(Value::String(vocab)) => self.vocab = Some(self.expand(vocab, true)),
            Some(Value::Null) => self.vocab = None,
            Some(_) => {
                return Err(GraphError::InvalidStructure(
                    "@vocab must be a string or null".into(),
                ))
            }
            None => {}
        }
        // Plain prefix declarations first, so later definitions can use them
        // regardless of key order.
        for (key, def) in map {
            if let Value::String(iri) = def {
                if !key.starts_with('@') && is_absolute(iri) && split_compact(iri).is_none() {
                    self.terms.insert(
                        key.clone(),
                        TermDefinition {
                            iri: iri.clone(),
                            coerce: None,
                        },
                    );
                }
            }
        }
        for (key, def) in map {
            if key.starts_with('@') {
                continue;
            }
            match def {
                Value::Null => {
                    self.terms.remove(key);
                }
                Value::String(iri) => {
                    let iri = self.expand(iri, true);
                    self.terms.insert(key.clone(), TermDefinition { iri, coerce: None });
                }
                Value::Object(obj) => {
                    let iri = match obj.get("@id") {
                        Some(Value::String(id)) => self.expand(id, true),
                        _ => self.expand(key, true),
                    };
                    let coerce = match obj.get("@type") {
                        Some(Value::String(t)) if t == "@id" || t == "@vocab" => {
                            Some("@id".to_string())
                        }
                        Some(Value::String(t)) => Some(self.expand(t, true)),
                        _ => None,
                    };
                    self.terms.insert(key.clone(), TermDefinition { iri, coerce });
                }
                _ => {
                    return Err(GraphError::InvalidStructure(format!(
                        "invalid term definition for '{key}'"
                    )))
                }
            }
        }
        Ok(())
    }

    /// Expand a term, compact IRI or relative name.
    ///
    /// `vocab` selects vocabulary-relative resolution (keys, `@type` values):
    /// terms and `@vocab` only apply there.
    fn expand(&self, value: &str, vocab: bool) -> String {
        if value.starts_with('@') || value.starts_with("_:") {
            return value.to_string();
        }
        if vocab {
            if let Some(def) = self.terms.get(value) {
                return def.iri.clone();
            }
        }
        if let Some((prefix, local)) = split_compact(value) {
            if let Some(def) = self.terms.get(prefix) {
                return format!("{}{local}", def.iri);
            }
        }
        if is_absolute(value) {
            return value.to_string();
        }
        if vocab {
            if let Some(v) = &self.vocab {
                return format!("{v}{value}");
            }
        }
        value.to_string()
    }

    fn coercion(&self, key: &str) -> Option<&str> {
        self.terms.get(key).and_then(|d| d.coerce.as_deref())
    }
}

#[derive(Default)]
struct Reader {
    graph: Graph,
    blank_counter: usize,
}

impl Reader {
    fn fresh_blank(&mut self) -> Term {
        let label = format!("b{}", self.blank_counter);
        self.blank_counter += 1;
        Term::blank(label)
    }

    fn read_document(&mut self, document: &Value, ctx: &Context) -> Result<()> {
        match document {
            Value::Array(items) => {
                for item in items {
                    self.read_top(item, ctx)?;
                }
                Ok(())
            }
            Value::Object(_) => self.read_top(document, ctx),
            _ => Err(GraphError::InvalidStructure(
                "document root must be an object or an array".into(),
            )),
        }
    }

    fn read_top(&mut self, value: &Value, ctx: &Context) -> Result<()> {
        let obj = value.as_object().ok_or_else(|| {
            GraphError::InvalidStructure("top-level array items must be objects".into())
        })?;
        if let Some(graph) = obj.get("@graph") {
            let ctx = match obj.get("@context") {
                Some(local) => ctx.merge(local)?,
                None => ctx.clone(),
            };
            for item in as_items(graph) {
                self.read_node(item, &ctx)?;
            }
            // A bare container carries no statements of its own.
            if obj.keys().all(|k| k == "@context" || k == "@graph" || k == "@id") {
                return Ok(());
            }
        }
        self.read_node(value, ctx)?;
        Ok(())
    }

    fn read_node(&mut self, value: &Value, outer: &Context) -> Result<Term> {
        let obj = value
            .as_object()
            .ok_or_else(|| GraphError::InvalidStructure(format!("expected a node object, got {value}")))?;
        let ctx = match obj.get("@context") {
            Some(local) => outer.merge(local)?,
            None => outer.clone(),
        };
        let subject = match obj.get("@id") {
            Some(Value::String(id)) => Term::node(&ctx.expand(id, false)),
            Some(other) => {
                return Err(GraphError::InvalidStructure(format!(
                    "@id must be a string, got {other}"
                )))
            }
            None => self.fresh_blank(),
        };
        if let Some(types) = obj.get("@type") {
            for ty in as_items(types) {
                let ty = ty.as_str().ok_or_else(|| {
                    GraphError::InvalidStructure(format!("@type values must be strings, got {ty}"))
                })?;
                self.graph
                    .add(subject.clone(), standard::RDF_TYPE, Term::iri(ctx.expand(ty, true)));
            }
        }
        for (key, value) in obj {
            if key.starts_with('@') {
                continue;
            }
            let predicate = ctx.expand(key, true);
            if !is_absolute(&predicate) {
                debug!(key = %key, "dropping property that does not expand to an IRI");
                continue;
            }
            let coerce = ctx.coercion(key).map(str::to_string);
            self.read_values(&subject, &predicate, value, coerce.as_deref(), &ctx)?;
        }
        Ok(subject)
    }

    fn read_values(
        &mut self,
        subject: &Term,
        predicate: &str,
        value: &Value,
        coerce: Option<&str>,
        ctx: &Context,
    ) -> Result<()> {
        match value {
            Value::Null => Ok(()),
            Value::Array(items) => {
                for item in items {
                    self.read_values(subject, predicate, item, coerce, ctx)?;
                }
                Ok(())
            }
            Value::Object(map) if map.contains_key("@list") || map.contains_key("@set") => {
                match map.get("@list").or_else(|| map.get("@set")) {
                    Some(inner) => self.read_values(subject, predicate, inner, coerce, ctx),
                    None => Ok(()),
                }
            }
            _ => {
                if let Some(object) = self.read_value(value, coerce, ctx)? {
                    self.graph.add(subject.clone(), predicate, object);
                }
                Ok(())
            }
        }
    }

    fn read_value(&mut self, value: &Value, coerce: Option<&str>, ctx: &Context) -> Result<Option<Term>> {
        let term = match value {
            Value::String(s) => match coerce {
                Some("@id") => Term::node(&ctx.expand(s, false)),
                Some(datatype) => Term::typed(s.clone(), datatype),
                None => Term::string(s.clone()),
            },
            Value::Bool(b) => Term::typed(b.to_string(), xsd::BOOLEAN),
            Value::Number(n) => native_number(n, coerce),
            Value::Object(map) if map.contains_key("@value") => {
                return value_object(map, ctx);
            }
            Value::Object(map) if !map.is_empty() && map.keys().all(|k| k == "@id") => match map.get("@id") {
                Some(Value::String(id)) => Term::node(&ctx.expand(id, false)),
                _ => return Err(GraphError::InvalidStructure("@id must be a string".into())),
            },
            Value::Object(_) => self.read_node(value, ctx)?,
            Value::Null | Value::Array(_) => return Ok(None),
        };
        Ok(Some(term))
    }
}

fn native_number(n: &serde_json::Number, coerce: Option<&str>) -> Term {
    if n.is_i64() || n.is_u64() {
        let datatype = match coerce {
            Some(dt) if dt != "@id" => dt,
            _ => xsd::INTEGER,
        };
        Term::typed(n.to_string(), datatype)
    } else {
        Term::typed(n.to_string(), xsd::DOUBLE)
    }
}

fn value_object(map: &Map<String, Value>, ctx: &Context) -> Result<Option<Term>> {
    let Some(raw) = map.get("@value") else {
        return Ok(None);
    };
    let lexical = match raw {
        Value::Null => return Ok(None),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => {
            return Err(GraphError::InvalidStructure(format!(
                "@value must be a scalar, got {other}"
            )))
        }
    };
    let language = map.get("@language").and_then(Value::as_str);
    let datatype = map.get("@type").and_then(Value::as_str);
    let term = match (language, datatype) {
        (Some(_), Some(_)) => {
            return Err(GraphError::InvalidStructure(
                "a value object cannot carry both @language and @type".into(),
            ))
        }
        (Some(lang), None) => Term::lang_string(lexical, lang),
        (None, Some(dt)) => Term::typed(lexical, ctx.expand(dt, true)),
        (None, None) => match raw {
            Value::Number(n) => native_number(n, None),
            Value::Bool(_) => Term::typed(lexical, xsd::BOOLEAN),
            _ => Term::string(lexical),
        },
    };
    Ok(Some(term))
}

fn as_items(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    }
}
