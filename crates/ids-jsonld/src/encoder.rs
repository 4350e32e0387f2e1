//! Object graph → JSON-LD.
//!
//! The walk emits `@id`, `@type` and one key per set property. Prefixes used
//! along the way are collected in the call's [`EncodeState`], and the
//! outermost node receives an `@context` declaring exactly those prefixes.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{json, Map, Value};
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::literal;
use crate::namespace::NamespaceRegistry;
use crate::object::{ExtraValue, FieldValue, ObjectValue, RdfObject};
use crate::schema::{PropertyDescriptor, ValueKind};

/// Where an encode call is in its walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    NotStarted,
    /// Nesting depth of the node being written; the root is depth 1.
    InProgress(usize),
    Done,
}

/// Per-call encoder state. Never shared between calls.
#[derive(Debug, Default)]
pub struct EncodeState {
    phase: Phase,
    used_prefixes: BTreeSet<String>,
    /// Claims-payload field names and the predicates they stand for.
    terms: BTreeMap<String, String>,
}

impl EncodeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn used_prefixes(&self) -> &BTreeSet<String> {
        &self.used_prefixes
    }

    fn enter(&mut self) -> usize {
        let depth = match self.phase {
            Phase::InProgress(depth) => depth + 1,
            Phase::NotStarted | Phase::Done => 1,
        };
        self.phase = Phase::InProgress(depth);
        depth
    }

    fn leave(&mut self) {
        self.phase = match self.phase {
            Phase::InProgress(1) => Phase::Done,
            Phase::InProgress(depth) => Phase::InProgress(depth - 1),
            other => other,
        };
    }

    fn use_prefix(&mut self, prefix: Option<&str>) {
        if let Some(prefix) = prefix {
            if !self.used_prefixes.contains(prefix) {
                self.used_prefixes.insert(prefix.to_string());
            }
        }
    }
}

pub struct Encoder<'a> {
    registry: &'a NamespaceRegistry,
}

impl<'a> Encoder<'a> {
    pub fn new(registry: &'a NamespaceRegistry) -> Self {
        Self { registry }
    }

    /// Encode `root` as a standalone document with its own `@context`.
    pub fn encode(&self, root: &dyn RdfObject) -> Result<Value> {
        let mut state = EncodeState::new();
        let node = self.encode_node(root, &mut state)?;
        debug!(
            id = root.id(),
            prefixes = ?state.used_prefixes(),
            "encoded object"
        );
        Ok(Value::Object(node))
    }

    /// Encode each element as its own document; the result is a JSON array.
    pub fn encode_collection(&self, items: &[&dyn RdfObject]) -> Result<Value> {
        items
            .iter()
            .map(|item| self.encode(*item))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }

    /// Walk one node. At depth 1 the node receives the `@context` of
    /// everything written beneath it.
    pub fn encode_node(
        &self,
        obj: &dyn RdfObject,
        state: &mut EncodeState,
    ) -> Result<Map<String, Value>> {
        let depth = state.enter();
        let descriptor = obj.descriptor();
        let mut node = Map::new();

        if !obj.id().is_empty() {
            node.insert("@id".into(), Value::String(obj.id().to_string()));
        }
        let (type_name, prefix) = self.registry.canonicalize(descriptor.type_uri);
        state.use_prefix(prefix);
        node.insert("@type".into(), Value::String(type_name));

        for property in descriptor.properties {
            let Some(value) = obj.field(property.accessor) else {
                continue;
            };
            let key = if descriptor.claims_payload {
                state
                    .terms
                    .insert(property.accessor.to_string(), property.predicate.to_string());
                property.accessor.to_string()
            } else {
                let (key, prefix) = self.registry.canonicalize(property.predicate);
                state.use_prefix(prefix);
                key
            };
            trace!(accessor = property.accessor, key = %key, "writing property");
            let json = self.property_json(property, value, state)?;
            node.insert(key, json);
        }

        for (predicate, values) in obj.extra() {
            node.insert(predicate.clone(), extra_json(values));
        }

        if depth == 1 {
            node.insert("@context".into(), Value::Object(self.context(state)));
        }
        state.leave();
        Ok(node)
    }

    fn context(&self, state: &EncodeState) -> Map<String, Value> {
        let mut context = self.registry.minimal_context(&state.used_prefixes);
        for (term, predicate) in &state.terms {
            context.insert(term.clone(), Value::String(predicate.clone()));
        }
        context
    }

    fn property_json(
        &self,
        property: &PropertyDescriptor,
        value: FieldValue,
        state: &mut EncodeState,
    ) -> Result<Value> {
        match value {
            FieldValue::List(items) => items
                .into_iter()
                .map(|item| self.value_json(property, item, state))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            single if property.is_multi() => {
                Ok(Value::Array(vec![self.value_json(property, single, state)?]))
            }
            single => self.value_json(property, single, state),
        }
    }

    fn value_json(
        &self,
        property: &PropertyDescriptor,
        value: FieldValue,
        state: &mut EncodeState,
    ) -> Result<Value> {
        match (property.kind, value) {
            (ValueKind::Literal(kind), FieldValue::Literal(native)) => {
                Ok(literal::encode(&native, kind)?.to_json())
            }
            (ValueKind::Enum(_), FieldValue::Enum(uri)) => Ok(json!({ "@id": uri })),
            (ValueKind::Object(_), FieldValue::Object(ObjectValue::Embedded(obj))) => {
                Ok(Value::Object(self.encode_node(obj.as_ref(), state)?))
            }
            (ValueKind::Object(_), FieldValue::Object(ObjectValue::Reference(id))) => {
                Ok(json!({ "@id": id }))
            }
            (kind, other) => Err(Error::UnsupportedLiteralType {
                declared: describe_kind(&kind),
                found: other.shape(),
            }),
        }
    }
}

fn describe_kind(kind: &ValueKind) -> String {
    match kind {
        ValueKind::Literal(native) => native.to_string(),
        ValueKind::Object(target) => target.name.to_string(),
        ValueKind::Enum(_) => "enumerator".to_string(),
    }
}

fn extra_json(values: &[ExtraValue]) -> Value {
    Value::Array(values.iter().map(extra_value_json).collect())
}

fn extra_value_json(value: &ExtraValue) -> Value {
    match value {
        ExtraValue::Literal(literal) => literal.to_json(),
        ExtraValue::Node(properties) => Value::Object(
            properties
                .iter()
                .map(|(predicate, values)| (predicate.clone(), extra_json(values)))
                .collect(),
        ),
    }
}
