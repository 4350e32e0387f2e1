pub mod ntriples;
pub mod turtle;

use std::io;

use crate::graph::{Term, Triple};
use crate::model::ontology::xsd;

/// Trait for writing triples in a line-oriented RDF serialization.
///
/// Subjects and IRI objects are node identifiers: an absolute IRI, or a
/// blank node written `_:label`.
pub trait TriplesEmitter {
    /// Emit a triple with an IRI (or blank node) object.
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()>;
    /// Emit a triple with a plain string literal object.
    fn emit_literal(&mut self, subject: &str, predicate: &str, value: &str) -> io::Result<()>;
    /// Emit a triple with a language-tagged literal object.
    fn emit_lang_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        language: &str,
    ) -> io::Result<()>;
    /// Emit a triple with a typed literal object.
    fn emit_typed_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        datatype: &str,
    ) -> io::Result<()>;
    /// Register a namespace prefix (used by Turtle format).
    fn add_prefix(&mut self, prefix: &str, iri: &str);
    /// Flush any buffered output.
    fn flush(&mut self) -> io::Result<()>;
    /// Return the number of triples emitted so far.
    fn triple_count(&self) -> u64;

    /// Emit a graph triple, choosing the object form from its term.
    fn emit(&mut self, triple: &Triple) -> io::Result<()> {
        let subject = triple.s.node_id().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "literal in subject position")
        })?;
        match &triple.o {
            Term::Literal {
                lexical,
                datatype,
                language,
            } => match language {
                Some(lang) => self.emit_lang_literal(&subject, &triple.p, lexical, lang),
                None if datatype == xsd::STRING => self.emit_literal(&subject, &triple.p, lexical),
                None => self.emit_typed_literal(&subject, &triple.p, lexical, datatype),
            },
            node => {
                let object = node.text();
                self.emit_iri(&subject, &triple.p, &object)
            }
        }
    }
}

/// Escape a string for a quoted N-Triples / Turtle literal.
pub(crate) fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04X}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out
}
