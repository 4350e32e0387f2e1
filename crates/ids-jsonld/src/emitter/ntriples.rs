use std::io::{self, Write};

use super::{escape_literal, TriplesEmitter};

/// N-Triples format emitter. Streams triples as `<s> <p> <o> .` lines.
pub struct NTriplesEmitter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> NTriplesEmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }

    fn node(id: &str) -> String {
        if id.starts_with("_:") {
            id.to_string()
        } else {
            format!("<{id}>")
        }
    }

    fn line(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        writeln!(
            self.writer,
            "{} <{predicate}> {object} .",
            Self::node(subject)
        )?;
        self.count += 1;
        Ok(())
    }
}

impl<W: Write> TriplesEmitter for NTriplesEmitter<W> {
    fn emit_iri(&mut self, subject: &str, predicate: &str, object: &str) -> io::Result<()> {
        let object = Self::node(object);
        self.line(subject, predicate, &object)
    }

    fn emit_literal(&mut self, subject: &str, predicate: &str, value: &str) -> io::Result<()> {
        let object = format!("\"{}\"", escape_literal(value));
        self.line(subject, predicate, &object)
    }

    fn emit_lang_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        language: &str,
    ) -> io::Result<()> {
        let object = format!("\"{}\"@{language}", escape_literal(value));
        self.line(subject, predicate, &object)
    }

    fn emit_typed_literal(
        &mut self,
        subject: &str,
        predicate: &str,
        value: &str,
        datatype: &str,
    ) -> io::Result<()> {
        let object = format!("\"{}\"^^<{datatype}>", escape_literal(value));
        self.line(subject, predicate, &object)
    }

    fn add_prefix(&mut self, _prefix: &str, _iri: &str) {
        // N-Triples has no prefix syntax; every IRI is written in full.
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    fn triple_count(&self) -> u64 {
        self.count
    }
}
