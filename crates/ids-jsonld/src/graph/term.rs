//! RDF term types: IRI, blank node, and literal.

use std::fmt;

use crate::model::ontology::{standard, xsd};

/// An RDF term (subject, predicate, or object position)
///
/// # Invariants
///
/// - `Term::Iri` always contains an **expanded** IRI, never a prefixed form.
/// - `Term::Blank` holds the label without the `_:` prefix.
/// - A literal with a language tag has datatype `rdf:langString`; plain
///   literals carry `xsd:string`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Iri(String),
    Blank(String),
    Literal {
        lexical: String,
        datatype: String,
        language: Option<String>,
    },
}

impl Term {
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Term::Blank(label.into())
    }

    /// Node term from an identifier: `_:label` becomes a blank node, anything else an IRI.
    pub fn node(id: &str) -> Self {
        match id.strip_prefix("_:") {
            Some(label) => Term::Blank(label.to_string()),
            None => Term::Iri(id.to_string()),
        }
    }

    /// Plain string literal (xsd:string)
    pub fn string(lexical: impl Into<String>) -> Self {
        Term::Literal {
            lexical: lexical.into(),
            datatype: xsd::STRING.to_string(),
            language: None,
        }
    }

    /// Language-tagged string literal (rdf:langString)
    pub fn lang_string(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Term::Literal {
            lexical: lexical.into(),
            datatype: standard::RDF_LANG_STRING.to_string(),
            language: Some(language.into()),
        }
    }

    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Term::Literal {
            lexical: lexical.into(),
            datatype: datatype.into(),
            language: None,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal { .. })
    }

    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Identifier of a node term (`_:label` for blank nodes), `None` for literals.
    pub fn node_id(&self) -> Option<String> {
        match self {
            Term::Iri(iri) => Some(iri.clone()),
            Term::Blank(label) => Some(format!("_:{label}")),
            Term::Literal { .. } => None,
        }
    }

    /// Literal components: (lexical form, datatype IRI, language tag)
    pub fn as_literal(&self) -> Option<(&str, &str, Option<&str>)> {
        match self {
            Term::Literal {
                lexical,
                datatype,
                language,
            } => Some((lexical, datatype, language.as_deref())),
            _ => None,
        }
    }

    /// Lexical text of a literal, or the IRI / blank id of a node.
    pub fn text(&self) -> String {
        match self {
            Term::Iri(iri) => iri.clone(),
            Term::Blank(label) => format!("_:{label}"),
            Term::Literal { lexical, .. } => lexical.clone(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Blank(label) => write!(f, "_:{label}"),
            Term::Literal {
                lexical,
                datatype,
                language,
            } => {
                write!(f, "\"{lexical}\"")?;
                match language {
                    Some(lang) => write!(f, "@{lang}"),
                    None if datatype != xsd::STRING => write!(f, "^^<{datatype}>"),
                    None => Ok(()),
                }
            }
        }
    }
}

/// A single statement. Predicates are always expanded IRIs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triple {
    pub s: Term,
    pub p: String,
    pub o: Term,
}

impl Triple {
    pub fn new(s: Term, p: impl Into<String>, o: Term) -> Self {
        Self { s, p: p.into(), o }
    }
}
