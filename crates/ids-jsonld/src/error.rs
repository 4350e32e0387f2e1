//! Error taxonomy for encode, decode and preprocessing.

use thiserror::Error;

use crate::graph::GraphError;

#[derive(Error, Debug)]
pub enum Error {
    /// None of the admissible implementations of a type can be instantiated.
    #[error("no concrete implementation available for type '{type_name}' (node {node})")]
    SchemaResolution { type_name: String, node: String },

    #[error("node {node} has no type statement; cannot resolve a concrete implementation of '{type_name}'")]
    MissingType { type_name: String, node: String },

    #[error("expected exactly one root node of type '{type_name}', found {}{}", .candidates.len(), fmt_candidates(.candidates))]
    AmbiguousRoot {
        type_name: String,
        candidates: Vec<String>,
    },

    #[error("mandatory field(s) of {type_name} not filled at node {node}: {}", .fields.join(", "))]
    MissingMandatoryField {
        type_name: String,
        node: String,
        fields: Vec<String>,
    },

    #[error("value '{value}' of {predicate} at node {node} matches no enumerator")]
    EnumResolution {
        node: String,
        predicate: String,
        value: String,
    },

    #[error("unsupported literal type: cannot map {found} to {declared}")]
    UnsupportedLiteralType { declared: String, found: String },

    #[error("invalid {kind} literal '{lexical}': {reason}")]
    InvalidLiteral {
        kind: String,
        lexical: String,
        reason: String,
    },

    #[error("{type_name} has no property '{accessor}'")]
    UnknownProperty { type_name: String, accessor: String },

    #[error("output format '{0}' is not supported")]
    UnsupportedFormat(String),

    #[error("{predicate} at node {node} may occur only once, found {count} bindings")]
    MultipleBindings {
        node: String,
        predicate: String,
        count: usize,
    },

    #[error("preprocessor '{preprocessor}' produced an unparseable document: {source}")]
    PreprocessingValidation {
        preprocessor: String,
        #[source]
        source: GraphError,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error while writing output: {0}")]
    Io(#[from] std::io::Error),
}

fn fmt_candidates(candidates: &[String]) -> String {
    if candidates.is_empty() {
        String::new()
    } else {
        format!(" ({})", candidates.join(", "))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
