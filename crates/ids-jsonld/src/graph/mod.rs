//! In-memory triple graph used by the decoder and the alternate writers.
//!
//! Three primitives are exposed: parse a JSON-LD document into a [`Graph`]
//! ([`jsonld::parse`]), match triple patterns ([`Graph::triples_matching`]),
//! and write a graph back out as text ([`write`]).

pub mod jsonld;
mod term;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::emitter::ntriples::NTriplesEmitter;
use crate::emitter::turtle::TurtleEmitter;
use crate::emitter::TriplesEmitter;
use crate::error::{Error, Result};
use crate::model::ontology::{standard, xsd};
use crate::namespace::NamespaceRegistry;

pub use term::{Term, Triple};

/// Failures of the graph collaborator itself.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid JSON-LD structure: {0}")]
    InvalidStructure(String),
}

/// A bag of triples kept in insertion (document) order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    triples: Vec<Triple>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple. Exact duplicates are dropped, as RDF graphs are sets.
    pub fn add(&mut self, s: Term, p: impl Into<String>, o: Term) {
        let triple = Triple::new(s, p, o);
        if !self.triples.contains(&triple) {
            self.triples.push(triple);
        }
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Triples matching a pattern; `None` positions are wildcards.
    pub fn triples_matching<'g, 'q>(
        &'g self,
        s: Option<&'q Term>,
        p: Option<&'q str>,
        o: Option<&'q Term>,
    ) -> impl Iterator<Item = &'g Triple> + 'q
    where
        'g: 'q,
    {
        self.triples.iter().filter(move |t| {
            s.is_none_or(|s| &t.s == s)
                && p.is_none_or(|p| t.p == p)
                && o.is_none_or(|o| &t.o == o)
        })
    }

    /// Objects bound to `subject predicate ?o`, in document order.
    pub fn objects(&self, subject: &Term, predicate: &str) -> Vec<&Term> {
        self.triples_matching(Some(subject), Some(predicate), None)
            .map(|t| &t.o)
            .collect()
    }

    /// `rdf:type` IRIs asserted for `subject`.
    pub fn types_of(&self, subject: &Term) -> Vec<&str> {
        self.triples_matching(Some(subject), Some(standard::RDF_TYPE), None)
            .filter_map(|t| t.o.as_iri())
            .collect()
    }

    /// True if `subject` appears in subject position at least once.
    pub fn has_subject(&self, subject: &Term) -> bool {
        self.triples.iter().any(|t| &t.s == subject)
    }

    /// Distinct subjects in order of first appearance.
    pub fn subjects(&self) -> Vec<&Term> {
        let mut seen = HashSet::new();
        self.triples
            .iter()
            .map(|t| &t.s)
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

/// Serialization formats known to the writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RdfFormat {
    JsonLd,
    Turtle,
    NTriples,
    /// Recognised so callers get a precise error; writing it is not supported.
    RdfXml,
}

impl RdfFormat {
    pub fn name(&self) -> &'static str {
        match self {
            RdfFormat::JsonLd => "jsonld",
            RdfFormat::Turtle => "turtle",
            RdfFormat::NTriples => "ntriples",
            RdfFormat::RdfXml => "rdfxml",
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RdfFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "jsonld" | "json-ld" | "json" => Ok(RdfFormat::JsonLd),
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "ntriples" | "n-triples" | "nt" => Ok(RdfFormat::NTriples),
            "rdfxml" | "rdf/xml" | "xml" => Ok(RdfFormat::RdfXml),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Write `graph` as text in `format`.
///
/// Turtle output declares and uses every prefix of `registry`. JSON-LD output
/// is the flat expanded form (absolute IRIs, one node object per subject).
pub fn write(graph: &Graph, format: RdfFormat, registry: &NamespaceRegistry) -> Result<String> {
    let mut buf = Vec::new();
    match format {
        RdfFormat::Turtle => {
            let mut emitter = TurtleEmitter::new(&mut buf);
            for (prefix, ns) in registry.iter() {
                emitter.add_prefix(prefix, ns);
            }
            emit_all(&mut emitter, graph)?;
        }
        RdfFormat::NTriples => {
            let mut emitter = NTriplesEmitter::new(&mut buf);
            emit_all(&mut emitter, graph)?;
        }
        RdfFormat::JsonLd => {
            return Ok(serde_json::to_string_pretty(&expanded_json(graph))?);
        }
        RdfFormat::RdfXml => return Err(Error::UnsupportedFormat(format.to_string())),
    }
    String::from_utf8(buf).map_err(|e| {
        Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    })
}

fn emit_all(emitter: &mut impl TriplesEmitter, graph: &Graph) -> Result<()> {
    for triple in graph.iter() {
        emitter.emit(triple)?;
    }
    emitter.flush()?;
    tracing::debug!(triples = emitter.triple_count(), "graph written");
    Ok(())
}

fn expanded_json(graph: &Graph) -> Value {
    let nodes = graph
        .subjects()
        .into_iter()
        .map(|subject| {
            let mut node = Map::new();
            if let Some(id) = subject.node_id() {
                node.insert("@id".into(), Value::String(id));
            }
            for triple in graph.triples_matching(Some(subject), None, None) {
                let (key, value) = if triple.p == standard::RDF_TYPE {
                    ("@type".to_string(), Value::String(triple.o.text()))
                } else {
                    (triple.p.clone(), expanded_value(&triple.o))
                };
                match node.get_mut(&key) {
                    Some(Value::Array(items)) => items.push(value),
                    _ => {
                        node.insert(key, Value::Array(vec![value]));
                    }
                }
            }
            Value::Object(node)
        })
        .collect();
    Value::Array(nodes)
}

fn expanded_value(term: &Term) -> Value {
    let mut obj = Map::new();
    match term {
        Term::Literal {
            lexical,
            datatype,
            language,
        } => {
            obj.insert("@value".into(), Value::String(lexical.clone()));
            match language {
                Some(lang) => {
                    obj.insert("@language".into(), Value::String(lang.clone()));
                }
                None if datatype != xsd::STRING => {
                    obj.insert("@type".into(), Value::String(datatype.clone()));
                }
                None => {}
            }
        }
        _ => {
            obj.insert("@id".into(), Value::String(term.text()));
        }
    }
    Value::Object(obj)
}
