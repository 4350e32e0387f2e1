//! Graph → typed instances.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::graph::{Graph, Term};
use crate::literal::{self, LiteralValue};
use crate::model::iri::local_name;
use crate::model::ontology::standard;
use crate::namespace::NamespaceRegistry;
use crate::object::{ExtraProperties, ExtraValue, FieldValue, ObjectValue, RdfObject};
use crate::schema::{build_schema, PropertyDescriptor, TypeDescriptor, ValueKind};

/// Per-call decoder state: ids of nodes whose decoding has started but not
/// finished.
#[derive(Debug, Default)]
pub struct DecodeState {
    in_progress: HashSet<String>,
}

impl DecodeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_progress(&self, node: &str) -> bool {
        self.in_progress.contains(node)
    }
}

pub struct Decoder<'a> {
    registry: &'a NamespaceRegistry,
}

impl<'a> Decoder<'a> {
    pub fn new(registry: &'a NamespaceRegistry) -> Self {
        Self { registry }
    }

    /// Decode the single root node of `graph` whose type is one of the
    /// implementations admissible for `declared`.
    ///
    /// Nodes of a matching type that are nested under another node do not
    /// count as roots. When every candidate is referenced from elsewhere, the
    /// first one in document order is taken.
    pub fn decode_message(
        &self,
        graph: &Graph,
        declared: &'static TypeDescriptor,
    ) -> Result<Box<dyn RdfObject>> {
        let schema = build_schema(declared);
        let typed: Vec<&Term> = graph
            .subjects()
            .into_iter()
            .filter(|subject| {
                graph.types_of(subject).iter().any(|uri| {
                    let canonical = self.registry.canonicalize(uri).0;
                    let local = local_name(&canonical);
                    schema
                        .concrete
                        .iter()
                        .any(|c| c.type_uri == *uri || c.matches_local_name(local))
                })
            })
            .collect();

        let unreferenced: Vec<&Term> = typed
            .iter()
            .copied()
            .filter(|node| {
                !graph
                    .triples_matching(None, None, Some(*node))
                    .any(|t| &t.s != *node)
            })
            .collect();
        let roots = match (unreferenced.is_empty(), typed.first()) {
            // Every candidate is referenced: a cycle. The node written first is the root.
            (true, Some(&first)) => vec![first],
            _ => unreferenced,
        };

        match roots.as_slice() {
            [root] => {
                debug!(node = %root, declared = declared.name, "decoding root node");
                let mut state = DecodeState::new();
                self.materialize(graph, root, declared, &mut state)
            }
            _ => Err(Error::AmbiguousRoot {
                type_name: declared.name.to_string(),
                candidates: roots.iter().map(|t| t.text()).collect(),
            }),
        }
    }

    /// Decode `node` as an instance of `declared`.
    ///
    /// Nodes already being decoded further up the call, and nodes without
    /// any statement of their own, come back as [`ObjectValue::Reference`].
    pub fn decode_object(
        &self,
        graph: &Graph,
        node: &Term,
        declared: &'static TypeDescriptor,
        state: &mut DecodeState,
    ) -> Result<ObjectValue> {
        let id = node_id(node, declared)?;
        if state.is_in_progress(&id) {
            trace!(node = %id, "cycle, keeping a reference");
            return Ok(ObjectValue::Reference(id));
        }
        if !graph.has_subject(node) {
            return Ok(ObjectValue::Reference(id));
        }
        self.materialize(graph, node, declared, state)
            .map(ObjectValue::Embedded)
    }

    fn materialize(
        &self,
        graph: &Graph,
        node: &Term,
        declared: &'static TypeDescriptor,
        state: &mut DecodeState,
    ) -> Result<Box<dyn RdfObject>> {
        let id = node_id(node, declared)?;
        let concrete = self.concrete_type(graph, node, &id, declared)?;
        let construct = concrete.construct.ok_or_else(|| Error::SchemaResolution {
            type_name: concrete.name.to_string(),
            node: id.clone(),
        })?;
        let mut obj = construct();
        // Anonymous nodes decode to objects without an id.
        if !matches!(node, Term::Blank(_)) {
            obj.set_id(id.clone());
        }

        state.in_progress.insert(id.clone());
        let filled = self.fill_properties(graph, node, &id, concrete, &mut *obj, state);
        state.in_progress.remove(&id);
        let missing = filled?;

        let extra = extra_properties(graph, node, concrete, &mut HashSet::new());
        *obj.extra_mut() = extra;

        if !missing.is_empty() {
            return Err(Error::MissingMandatoryField {
                type_name: concrete.name.to_string(),
                node: id,
                fields: missing,
            });
        }
        debug!(node = %id, concrete = concrete.name, "decoded object");
        Ok(obj)
    }

    fn concrete_type(
        &self,
        graph: &Graph,
        node: &Term,
        id: &str,
        declared: &'static TypeDescriptor,
    ) -> Result<&'static TypeDescriptor> {
        if !declared.is_abstract() && declared.subtypes.is_empty() {
            return Ok(declared);
        }
        let observed = graph.types_of(node);
        if observed.is_empty() {
            return if declared.is_abstract() {
                Err(Error::MissingType {
                    type_name: declared.name.to_string(),
                    node: id.to_string(),
                })
            } else {
                Ok(declared)
            };
        }
        build_schema(declared).resolve_concrete_type(&observed, id, self.registry)
    }

    /// Set every declared property from the graph. Returns the accessors of
    /// mandatory properties that have no value.
    fn fill_properties(
        &self,
        graph: &Graph,
        node: &Term,
        id: &str,
        concrete: &'static TypeDescriptor,
        obj: &mut dyn RdfObject,
        state: &mut DecodeState,
    ) -> Result<Vec<String>> {
        let mut missing = Vec::new();
        for property in concrete.properties {
            let bindings = graph.objects(node, property.predicate);
            if bindings.is_empty() {
                if !property.nullable {
                    missing.push(property.accessor.to_string());
                }
                continue;
            }
            if !property.is_multi() && bindings.len() > 1 {
                return Err(Error::MultipleBindings {
                    node: id.to_string(),
                    predicate: property.predicate.to_string(),
                    count: bindings.len(),
                });
            }
            trace!(
                node = id,
                predicate = property.predicate,
                count = bindings.len(),
                "property bindings"
            );
            let mut values = bindings
                .into_iter()
                .map(|term| self.decode_value(graph, id, property, term, state))
                .collect::<Result<Vec<_>>>()?;
            let value = if property.is_multi() {
                FieldValue::List(values)
            } else {
                match values.pop() {
                    Some(value) => value,
                    None => continue,
                }
            };
            obj.set_field(property.accessor, value)?;
        }
        Ok(missing)
    }

    fn decode_value(
        &self,
        graph: &Graph,
        id: &str,
        property: &PropertyDescriptor,
        term: &Term,
        state: &mut DecodeState,
    ) -> Result<FieldValue> {
        match property.kind {
            ValueKind::Literal(kind) => {
                let literal = LiteralValue::from_term(term);
                literal::decode(&literal, kind).map(FieldValue::Literal)
            }
            ValueKind::Enum(enumerators) => {
                let raw = term.text();
                let expanded = self.registry.expand(&raw);
                enumerators
                    .iter()
                    .find(|uri| **uri == raw || **uri == expanded)
                    .map(|uri| FieldValue::Enum(uri.to_string()))
                    .ok_or_else(|| Error::EnumResolution {
                        node: id.to_string(),
                        predicate: property.predicate.to_string(),
                        value: raw,
                    })
            }
            ValueKind::Object(target) => {
                if term.is_literal() {
                    return Err(Error::UnsupportedLiteralType {
                        declared: target.name.to_string(),
                        found: format!("literal '{}' at {id}", term.text()),
                    });
                }
                self.decode_object(graph, term, target, state)
                    .map(FieldValue::Object)
            }
        }
    }
}

fn node_id(node: &Term, declared: &TypeDescriptor) -> Result<String> {
    node.node_id().ok_or_else(|| Error::UnsupportedLiteralType {
        declared: declared.name.to_string(),
        found: format!("literal '{}'", node.text()),
    })
}

/// Statements on `node` that no property of `concrete` declares.
fn extra_properties(
    graph: &Graph,
    node: &Term,
    concrete: &TypeDescriptor,
    visited: &mut HashSet<Term>,
) -> ExtraProperties {
    let mut extra = ExtraProperties::new();
    visited.insert(node.clone());
    for triple in graph.triples_matching(Some(node), None, None) {
        if triple.p == standard::RDF_TYPE || concrete.property_by_predicate(&triple.p).is_some() {
            continue;
        }
        let value = extra_value(graph, &triple.o, visited);
        extra.entry(triple.p.clone()).or_default().push(value);
    }
    extra
}

fn extra_value(graph: &Graph, term: &Term, visited: &mut HashSet<Term>) -> ExtraValue {
    match term {
        Term::Blank(_) if !visited.contains(term) && graph.has_subject(term) => {
            visited.insert(term.clone());
            let mut properties = ExtraProperties::new();
            for triple in graph.triples_matching(Some(term), None, None) {
                let value = extra_value(graph, &triple.o, visited);
                properties.entry(triple.p.clone()).or_default().push(value);
            }
            ExtraValue::Node(properties)
        }
        _ => ExtraValue::Literal(LiteralValue::from_term(term)),
    }
}
